//! The search algorithms. Every solver shares the entry shape
//! `fn(observer, grid, start, end) -> bool`: `true` means the end cell was
//! reached and the route has been marked on the grid, `false` means the
//! search space was exhausted first. Solvers assume the caller supplies
//! valid, distinct, non-barrier start and end cells.

use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;

use crate::grid::Grid;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dls;
pub mod greedy;
pub mod ida_star;
pub mod ucs;

pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dls::{dls, iddfs};
pub use greedy::greedy;
pub use ida_star::ida_star;
pub use ucs::ucs;

/// Predecessor map recording the cell from which each visited cell was first
/// reached. Built fresh per search and consumed by [reconstruct_path].
pub(crate) type CameFrom = IndexMap<Point, Point, FxBuildHasher>;

/// Progress notification boundary of the engine. A solver calls
/// [notify](Observer::notify) at well-defined points (after each expansion,
/// after each reconstruction step, after each iterative-deepening round
/// reset), always synchronously and never concurrently. The observer is
/// expected to perform a fast, bounded side effect such as drawing one frame.
///
/// Any `FnMut()` closure is an observer:
///
/// ```
/// use grid_search::{solver::bfs, Grid};
/// use grid_util::Point;
///
/// let mut grid = Grid::from_ascii("S..G");
/// let mut frames = 0;
/// let found = bfs(&mut || frames += 1, &mut grid, Point::new(0, 0), Point::new(3, 0));
/// assert!(found && frames > 0);
/// ```
pub trait Observer {
    fn notify(&mut self);
}

impl<F: FnMut()> Observer for F {
    fn notify(&mut self) {
        self()
    }
}

/// Walks the predecessor map backward from `end` until the cell without a
/// predecessor (the start) is reached, marking each walked cell as part of
/// the path and notifying once per step so the effect is incremental. The
/// start keeps its own state and the end cell itself is never walked. A no-op
/// when `end` has no predecessor.
pub(crate) fn reconstruct_path(
    grid: &mut Grid,
    came_from: &CameFrom,
    end: Point,
    observer: &mut dyn Observer,
) {
    let walk: Vec<Point> = itertools::unfold(end, |current| {
        came_from.get(current).map(|&previous| {
            *current = previous;
            previous
        })
    })
    .collect();
    for cell in walk {
        grid.mark_path(cell);
        observer.notify();
    }
}
