use fxhash::FxHashSet;
use grid_util::point::Point;

use crate::grid::{CellState, Grid};
use crate::solver::{reconstruct_path, CameFrom, Observer};

/// Recursive core shared by [dls] and [iddfs]. Checks for the end before the
/// limit so that a zero budget still succeeds when the search is already
/// standing on the end cell. Neighbours are opened before the recursive
/// descent and re-closed after it returns, which makes the backtracking
/// visible to the observer.
fn dls_core(
    observer: &mut dyn Observer,
    grid: &mut Grid,
    current: Point,
    end: Point,
    came_from: &mut CameFrom,
    visited: &mut FxHashSet<Point>,
    limit: usize,
) -> bool {
    if current == end {
        return true;
    }
    if limit == 0 {
        return false;
    }

    if grid.state(current) != CellState::Start {
        grid.mark_closed(current);
        observer.notify();
    }

    for neighbour in grid.neighbours(current) {
        if visited.insert(neighbour) {
            came_from.insert(neighbour, current);
            grid.mark_open(neighbour);

            if dls_core(observer, grid, neighbour, end, came_from, visited, limit - 1) {
                return true;
            }

            grid.mark_closed(neighbour);
        }
    }
    false
}

/// Depth-limited search: a recursive DFS that abandons any branch deeper
/// than `limit` steps. Exponential in the worst case; choosing a sane limit
/// is the caller's concern. Returns `false` when the end is not reachable
/// within the limit.
pub fn dls(
    observer: &mut dyn Observer,
    grid: &mut Grid,
    start: Point,
    end: Point,
    limit: usize,
) -> bool {
    let mut came_from = CameFrom::default();
    let mut visited = FxHashSet::default();
    visited.insert(start);

    if dls_core(observer, grid, start, end, &mut came_from, &mut visited, limit) {
        reconstruct_path(grid, &came_from, end, observer);
        return true;
    }
    false
}

/// Iterative-deepening DFS: runs the depth-limited core with limits
/// `0..=max_depth` and stops at the smallest limit that reaches the end.
/// Every round after the first wipes the visitation leftovers of the
/// previous round (with one notification), since a fresh round must not see
/// stale open/closed markings.
pub fn iddfs(
    observer: &mut dyn Observer,
    grid: &mut Grid,
    start: Point,
    end: Point,
    max_depth: usize,
) -> bool {
    for limit in 0..=max_depth {
        let mut came_from = CameFrom::default();
        let mut visited = FxHashSet::default();
        visited.insert(start);

        if limit > 0 {
            grid.reset_search();
            observer.notify();
        }

        if dls_core(observer, grid, start, end, &mut came_from, &mut visited, limit) {
            reconstruct_path(grid, &came_from, end, observer);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;

    #[test]
    fn corridor_needs_a_budget_of_its_length() {
        for (limit, expected) in [(3, false), (4, true)] {
            let mut grid = Grid::from_ascii("S...G");
            let found = dls(&mut || (), &mut grid, Point::new(0, 0), Point::new(4, 0), limit);
            assert_eq!(found, expected, "limit {limit}");
        }
    }

    #[test]
    fn zero_limit_still_detects_standing_on_the_end() {
        let mut grid = Grid::from_ascii("SG");
        // Degenerate call: the "search" starts on the end cell itself.
        assert!(dls(&mut || (), &mut grid, Point::new(1, 0), Point::new(1, 0), 0));
    }

    #[test]
    fn dls_failure_leaves_no_path_cells() {
        let mut grid = Grid::from_ascii(
            "S....
             ....G",
        );
        assert!(!dls(&mut || (), &mut grid, Point::new(0, 0), Point::new(4, 1), 2));
        assert!(grid.cells_in_state(CellState::Path).is_empty());
    }

    #[test]
    fn iddfs_succeeds_where_a_fixed_limit_fails() {
        let board = "S.#..
                     ..#..
                     ....G";
        // The only route is 6 steps long, out of reach for a limit of 5.
        let mut grid = Grid::from_ascii(board);
        assert!(!dls(&mut || (), &mut grid, Point::new(0, 0), Point::new(4, 2), 5));

        let mut grid = Grid::from_ascii(board);
        assert!(iddfs(&mut || (), &mut grid, Point::new(0, 0), Point::new(4, 2), 100));
        assert!(!grid.cells_in_state(CellState::Path).is_empty());
    }

    /// Succeeds at the smallest sufficient limit and notifies once per round
    /// reset on top of the per-expansion notifications.
    #[test]
    fn iddfs_resets_between_rounds() {
        let mut grid = Grid::from_ascii("S...G");
        let mut notifications = 0;
        assert!(iddfs(
            &mut || notifications += 1,
            &mut grid,
            Point::new(0, 0),
            Point::new(4, 0),
            100
        ));
        // Rounds with limits 1..=4 each reset once before searching.
        assert!(notifications >= 4);
        assert_eq!(grid.cells_in_state(CellState::Path).len(), 3);
    }

    #[test]
    fn iddfs_gives_up_beyond_max_depth() {
        let mut grid = Grid::from_ascii("S...G");
        assert!(!iddfs(&mut || (), &mut grid, Point::new(0, 0), Point::new(4, 0), 3));
    }
}
