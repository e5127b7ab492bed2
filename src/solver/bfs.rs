use std::collections::VecDeque;

use fxhash::FxHashSet;
use grid_util::point::Point;

use crate::grid::Grid;
use crate::solver::{reconstruct_path, CameFrom, Observer};

/// Breadth-first search. Uninformed, FIFO frontier; on a unit-cost grid the
/// first dequeue of the end cell is guaranteed to lie on a shortest path in
/// number of edges. Cells count as visited as soon as they are enqueued, so
/// no cell enters the frontier twice.
pub fn bfs(observer: &mut dyn Observer, grid: &mut Grid, start: Point, end: Point) -> bool {
    let mut queue = VecDeque::from([start]);
    let mut came_from = CameFrom::default();
    let mut visited = FxHashSet::default();
    visited.insert(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            reconstruct_path(grid, &came_from, end, observer);
            return true;
        }

        for neighbour in grid.neighbours(current) {
            if visited.insert(neighbour) {
                came_from.insert(neighbour, current);
                queue.push_back(neighbour);
                grid.mark_open(neighbour);
            }
        }

        observer.notify();
        grid.mark_closed(current);
    }
    false
}
