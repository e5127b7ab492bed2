//! # grid_search
//!
//! A grid-based search engine implementing the classic family of graph-search
//! algorithms — [BFS](solver::bfs), [DFS](solver::dfs), [depth-limited
//! search](solver::dls), [iterative-deepening DFS](solver::iddfs),
//! [uniform-cost search](solver::ucs), [greedy best-first](solver::greedy),
//! [A*](solver::astar) and [IDA*](solver::ida_star) — over a 2D grid of
//! cells with impassable barriers. Movement is 4-connected with uniform step
//! cost 1.
//!
//! The engine itself does no rendering: every solver reports progress
//! through a synchronous [Observer](solver::Observer) callback after each
//! expansion step and marks visitation state ([CellState]) on the grid,
//! which an external renderer or editor can draw between steps. Given the
//! fixed neighbour expansion order and the FIFO tie-break of the priority
//! frontier, every solver is fully deterministic.
//!
//! ```
//! use grid_search::{Algorithm, Grid};
//!
//! let mut grid = Grid::from_ascii(
//!     "S.#..
//!      ..#..
//!      ....G",
//! );
//! let (start, end) = (grid.start().unwrap(), grid.end().unwrap());
//! assert!(Algorithm::Astar.run(&mut || (), &mut grid, start, end));
//! ```

pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod solver;

use grid_util::point::Point;
use log::info;

pub use crate::grid::{CellState, Grid};
pub use crate::solver::Observer;

/// Branch budget handed to [Algorithm::Dls].
pub const DEFAULT_DLS_LIMIT: usize = 20;
/// Deepest round attempted by [Algorithm::Iddfs].
pub const DEFAULT_IDDFS_MAX_DEPTH: usize = 100;

/// The available search strategies, in the order the selection keys 1-8
/// offer them. Replaces a key-to-function table with a plain enum so callers
/// dispatch with a `match` instead of reflection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Greedy,
    Astar,
    Dls,
    Iddfs,
    IdaStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Greedy,
        Algorithm::Astar,
        Algorithm::Dls,
        Algorithm::Iddfs,
        Algorithm::IdaStar,
    ];

    /// Human-readable name for selection menus and logs.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth-First Search (BFS)",
            Algorithm::Dfs => "Depth-First Search (DFS)",
            Algorithm::Ucs => "Uniform Cost Search (UCS/Dijkstra)",
            Algorithm::Greedy => "Greedy Search",
            Algorithm::Astar => "A* Search",
            Algorithm::Dls => "Depth-Limited Search (DLS, Limit=20)",
            Algorithm::Iddfs => "Iterative Deepening DFS (IDDFS)",
            Algorithm::IdaStar => "Iterative Deepening A* (IDA*)",
        }
    }

    /// Runs this algorithm from `start` to `end` on the grid, notifying the
    /// observer at each step. Returns whether the end was reached; on success
    /// the route is marked on the grid. The bounded strategies use
    /// [DEFAULT_DLS_LIMIT] and [DEFAULT_IDDFS_MAX_DEPTH]; call
    /// [solver::dls] or [solver::iddfs] directly to pick other bounds.
    pub fn run(
        self,
        observer: &mut dyn Observer,
        grid: &mut Grid,
        start: Point,
        end: Point,
    ) -> bool {
        info!("Running {}", self.label());
        match self {
            Algorithm::Bfs => solver::bfs(observer, grid, start, end),
            Algorithm::Dfs => solver::dfs(observer, grid, start, end),
            Algorithm::Ucs => solver::ucs(observer, grid, start, end),
            Algorithm::Greedy => solver::greedy(observer, grid, start, end),
            Algorithm::Astar => solver::astar(observer, grid, start, end),
            Algorithm::Dls => solver::dls(observer, grid, start, end, DEFAULT_DLS_LIMIT),
            Algorithm::Iddfs => solver::iddfs(observer, grid, start, end, DEFAULT_IDDFS_MAX_DEPTH),
            Algorithm::IdaStar => solver::ida_star(observer, grid, start, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_solves_a_small_board() {
        for algorithm in Algorithm::ALL {
            let mut grid = Grid::from_ascii(
                "S..
                 .#.
                 ..G",
            );
            let (start, end) = (grid.start().unwrap(), grid.end().unwrap());
            assert!(
                algorithm.run(&mut || (), &mut grid, start, end),
                "{} failed",
                algorithm.label()
            );
        }
    }

    #[test]
    fn dls_label_names_the_default_limit() {
        assert!(Algorithm::Dls
            .label()
            .contains(&format!("Limit={DEFAULT_DLS_LIMIT}")));
    }

    #[test]
    fn labels_are_distinct() {
        for (i, a) in Algorithm::ALL.iter().enumerate() {
            for b in &Algorithm::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
