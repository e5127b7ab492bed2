use fxhash::FxHashSet;
use grid_util::point::Point;

use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::heuristic::manhattan;
use crate::solver::{reconstruct_path, CameFrom, Observer};

/// Greedy best-first search. The frontier is ordered purely by the manhattan
/// estimate to the end with no path-cost component, and a cell's priority is
/// fixed at first discovery: visited cells are never relaxed. Fast, but the
/// route it commits to carries no optimality guarantee.
pub fn greedy(observer: &mut dyn Observer, grid: &mut Grid, start: Point, end: Point) -> bool {
    let mut open_set: Frontier<i32> = Frontier::new();
    open_set.push(manhattan(start, end), start);

    let mut came_from = CameFrom::default();
    let mut visited = FxHashSet::default();
    visited.insert(start);

    while let Some((_, current)) = open_set.pop() {
        if current == end {
            reconstruct_path(grid, &came_from, end, observer);
            return true;
        }

        for neighbour in grid.neighbours(current) {
            if visited.insert(neighbour) {
                came_from.insert(neighbour, current);
                open_set.push(manhattan(neighbour, end), neighbour);
                grid.mark_open(neighbour);
            }
        }

        observer.notify();
        grid.mark_closed(current);
    }
    false
}
