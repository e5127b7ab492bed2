use fxhash::FxHashSet;
use grid_util::point::Point;

use crate::frontier::{Frontier, ScoreMap};
use crate::grid::Grid;
use crate::heuristic::manhattan;
use crate::solver::{reconstruct_path, CameFrom, Observer};

/// A* search. Structurally [ucs](crate::solver::ucs) with the frontier
/// ordered by f = g + manhattan-to-end instead of g alone; since manhattan is
/// admissible on this grid the first pop of the end cell is optimal. The
/// stale-entry caveat of UCS applies unchanged: relaxing a cell that is
/// already in the frontier leaves its old heap entry behind.
pub fn astar(observer: &mut dyn Observer, grid: &mut Grid, start: Point, end: Point) -> bool {
    let mut open_set: Frontier<i32> = Frontier::new();
    open_set.push(manhattan(start, end), start);

    let mut came_from = CameFrom::default();
    let mut g_score: ScoreMap<i32> = ScoreMap::with_start(start);
    let mut f_score: ScoreMap<i32> = ScoreMap::new();
    f_score.set(start, manhattan(start, end));
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
                f_score.set(neighbour, tentative_g_score + manhattan(neighbour, end));

                if open_set_hash.insert(neighbour) {
                    open_set.push(f_score.get(&neighbour), neighbour);
                    grid.mark_open(neighbour);
                }
            }
        }

        observer.notify();
        grid.mark_closed(current);
    }
    false
}
