//! Distance estimates between grid cells. Both are admissible and consistent
//! on a 4-connected unit-cost grid, which the cost-guided solvers rely on for
//! optimality.

use grid_util::point::Point;

/// Manhattan distance, |Δx| + |Δy|. The heuristic wired into the greedy,
/// A* and IDA* solvers.
pub fn manhattan(a: Point, b: Point) -> i32 {
    a.manhattan_distance(&b)
}

/// Euclidean distance. Not used by any solver by default; exposed so callers
/// can substitute it where an isotropic estimate fits better.
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}
