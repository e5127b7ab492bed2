use fxhash::FxHashSet;
use grid_util::point::Point;

use crate::grid::Grid;
use crate::solver::{reconstruct_path, CameFrom, Observer};

/// Depth-first search. LIFO frontier, no optimality guarantee on the length
/// of the route found. The current cell is closed before its neighbours are
/// expanded, the reverse of [bfs](crate::solver::bfs); the ordering is kept
/// deliberately since it shapes the visitation trace.
pub fn dfs(observer: &mut dyn Observer, grid: &mut Grid, start: Point, end: Point) -> bool {
    let mut stack = vec![start];
    let mut came_from = CameFrom::default();
    let mut visited = FxHashSet::default();
    visited.insert(start);

    while let Some(current) = stack.pop() {
        if current == end {
            reconstruct_path(grid, &came_from, end, observer);
            return true;
        }

        grid.mark_closed(current);

        for neighbour in grid.neighbours(current) {
            if visited.insert(neighbour) {
                came_from.insert(neighbour, current);
                stack.push(neighbour);
                grid.mark_open(neighbour);
            }
        }

        observer.notify();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;

    #[test]
    fn finds_a_route_on_an_open_board() {
        let mut grid = Grid::from_ascii(
            "S....
             .....
             ....G",
        );
        assert!(dfs(&mut || (), &mut grid, Point::new(0, 0), Point::new(4, 2)));
        assert!(!grid.cells_in_state(CellState::Path).is_empty());
    }

    /// The LIFO frontier expands the last-generated neighbour first, so with
    /// the fixed up/down/left/right generation order a free corridor is
    /// walked rightwards immediately.
    #[test]
    fn expands_last_generated_neighbour_first() {
        let mut grid = Grid::from_ascii("S...G");
        let mut expansions = 0;
        assert!(dfs(
            &mut || expansions += 1,
            &mut grid,
            Point::new(0, 0),
            Point::new(4, 0)
        ));
        // Straight line: 4 expansions before the end pops, 4 reconstruction steps.
        assert_eq!(expansions, 8);
        assert_eq!(grid.cells_in_state(CellState::Path).len(), 3);
    }

    #[test]
    fn sealed_end_exhausts_the_frontier() {
        let mut grid = Grid::from_ascii(
            "S.#.
             ..#G",
        );
        assert!(!dfs(&mut || (), &mut grid, Point::new(0, 0), Point::new(3, 1)));
        assert!(grid.cells_in_state(CellState::Path).is_empty());
    }
}
