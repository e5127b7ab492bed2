use fxhash::FxHashSet;
use grid_util::point::Point;

use crate::frontier::{Frontier, ScoreMap};
use crate::grid::Grid;
use crate::solver::{reconstruct_path, CameFrom, Observer};

/// Uniform-cost search, equivalent to Dijkstra on a unit-cost grid. The
/// frontier is ordered by accumulated path cost with FIFO tie-breaking; a
/// neighbour is relaxed whenever a strictly cheaper route to it appears.
///
/// The auxiliary open-set hash keeps a cell from being pushed (and marked
/// open) twice while it sits in the frontier, so relaxing such a cell leaves
/// its old heap entry behind with a stale priority. Stale entries are
/// harmless here: expansion always reads the current g map, and popping the
/// end cell short-circuits before any stale entry could matter.
pub fn ucs(observer: &mut dyn Observer, grid: &mut Grid, start: Point, end: Point) -> bool {
    let mut open_set: Frontier<i32> = Frontier::new();
    open_set.push(0, start);

    let mut came_from = CameFrom::default();
    let mut g_score: ScoreMap<i32> = ScoreMap::with_start(start);
    let mut open_set_hash = FxHashSet::default();
    open_set_hash.insert(start);

    while let Some((_, current)) = open_set.pop() {
        open_set_hash.remove(&current);

        if current == end {
            reconstruct_path(grid, &came_from, end, observer);
            return true;
        }

        for neighbour in grid.neighbours(current) {
            let tentative_g_score = g_score.get(&current) + 1;

            if tentative_g_score < g_score.get(&neighbour) {
                came_from.insert(neighbour, current);
                g_score.set(neighbour, tentative_g_score);

                if open_set_hash.insert(neighbour) {
                    open_set.push(tentative_g_score, neighbour);
                    grid.mark_open(neighbour);
                }
            }
        }

        observer.notify();
        grid.mark_closed(current);
    }
    false
}
