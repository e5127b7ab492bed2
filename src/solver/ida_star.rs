use grid_util::point::Point;

use crate::frontier::ScoreMap;
use crate::grid::{CellState, Grid};
use crate::heuristic::manhattan;
use crate::solver::{reconstruct_path, CameFrom, Observer};

/// Depth-first probe bounded by the current f-score limit. Branches whose
/// f = g + manhattan exceeds the limit are pruned, and the smallest pruned
/// f-score is reported back as the bound for the next round (`i32::MAX` when
/// nothing was pruned, meaning the reachable space is exhausted).
fn ida_star_core(
    observer: &mut dyn Observer,
    grid: &mut Grid,
    current: Point,
    end: Point,
    came_from: &mut CameFrom,
    g_score: &mut ScoreMap<i32>,
    limit: i32,
) -> (bool, i32) {
    let f_score = g_score.get(&current) + manhattan(current, end);

    if f_score > limit {
        return (false, f_score);
    }
    if current == end {
        return (true, f_score);
    }

    let mut min_next_limit = i32::MAX;

    if grid.state(current) != CellState::Start {
        grid.mark_closed(current);
        observer.notify();
    }

    for neighbour in grid.neighbours(current) {
        let tentative_g_score = g_score.get(&current) + 1;

        // With the g map reset every round, each neighbour relaxes on first
        // visit within the round; a cheaper revisit later in the same round
        // relaxes it again.
        if tentative_g_score < g_score.get(&neighbour) {
            came_from.insert(neighbour, current);
            g_score.set(neighbour, tentative_g_score);
            grid.mark_open(neighbour);

            let (found, result_f) =
                ida_star_core(observer, grid, neighbour, end, came_from, g_score, limit);
            if found {
                return (true, result_f);
            }
            min_next_limit = min_next_limit.min(result_f);

            grid.mark_closed(neighbour);
        }
    }
    (false, min_next_limit)
}

/// Iterative-deepening A*. The outer loop raises the f-score bound from
/// manhattan(start, end) to whatever the previous round reported as its
/// smallest pruned value, so each round explores exactly the cells an A*
/// with that bound would. Every round starts from a clean slate: statuses
/// are reset (with one notification) and the g map is rebuilt, since the
/// previous round's g values reflect pruned exploration.
///
/// Terminates on success, when the bound reaches infinity (the end is
/// disconnected), or when a node budget of width × height outer rounds runs
/// out, which guards against pathological bound sequences.
pub fn ida_star(observer: &mut dyn Observer, grid: &mut Grid, start: Point, end: Point) -> bool {
    let mut limit = manhattan(start, end);
    let mut max_nodes = grid.width() * grid.height();

    while limit < i32::MAX && max_nodes > 0 {
        let mut came_from = CameFrom::default();
        let mut g_score: ScoreMap<i32> = ScoreMap::with_start(start);

        grid.reset_search();
        observer.notify();

        let (found, new_limit) =
            ida_star_core(observer, grid, start, end, &mut came_from, &mut g_score, limit);

        if found {
            reconstruct_path(grid, &came_from, end, observer);
            return true;
        }

        limit = new_limit;
        max_nodes -= 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::astar;

    #[test]
    fn first_round_suffices_on_an_open_board() {
        let mut grid = Grid::from_ascii(
            "S....
             .....
             ....G",
        );
        assert!(ida_star(&mut || (), &mut grid, Point::new(0, 0), Point::new(4, 2)));
        assert_eq!(grid.cells_in_state(CellState::Path).len(), 5);
    }

    #[test]
    fn matches_astar_route_length_around_barriers() {
        let board = "S.#..
                     ..#..
                     .....
                     ..#.G";
        let start = Point::new(0, 0);
        let end = Point::new(4, 3);

        let mut reference = Grid::from_ascii(board);
        assert!(astar(&mut || (), &mut reference, start, end));
        let optimal = reference.cells_in_state(CellState::Path).len();

        let mut grid = Grid::from_ascii(board);
        assert!(ida_star(&mut || (), &mut grid, start, end));
        assert_eq!(grid.cells_in_state(CellState::Path).len(), optimal);
    }

    /// Once a round prunes nothing, the bound jumps to infinity and the
    /// search stops well before the node budget runs out.
    #[test]
    fn disconnected_end_exhausts_the_bound() {
        let mut grid = Grid::from_ascii(
            "S.#.
             ..#G",
        );
        let mut notifications = 0;
        assert!(!ida_star(
            &mut || notifications += 1,
            &mut grid,
            Point::new(0, 0),
            Point::new(3, 1)
        ));
        assert!(grid.cells_in_state(CellState::Path).is_empty());
        // Two rounds suffice on this board: the first prunes at f = 6, the
        // second explores the whole start component without pruning.
        assert!(notifications <= 2 * (1 + 5));
    }
}
