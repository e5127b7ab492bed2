use core::fmt;

use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Visitation status of a single cell. A cell is in exactly one state at a
/// time, so combinations like "start and barrier" cannot be represented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    /// Frontier member of the current search.
    Open,
    /// Already expanded by the current search.
    Closed,
    /// Impassable; excluded from neighbour adjacency.
    Barrier,
    Start,
    End,
    /// Part of the reconstructed route.
    Path,
}

/// A row-major grid of [CellState] values addressed by [Point]
/// (x = column, y = row). In addition to the raw cell states, [Grid] maintains
/// connected components of passable cells in a [UnionFind] structure so that
/// callers can cheaply check whether two cells can be connected at all before
/// running a search. The search algorithms themselves never consult the
/// components: they signal an unreachable end cell by exhausting their
/// frontier.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Grid {
    /// Creates a grid of the given dimensions with every cell [CellState::Empty].
    /// Components start out as singletons; call [generate_components](Self::generate_components)
    /// once the barriers are placed.
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            cells: vec![CellState::Empty; width * height],
            components: UnionFind::new(width * height),
            components_dirty: false,
        }
    }

    /// Parses a board from ASCII art using the same glyphs [Grid] prints:
    /// `.` empty, `#` barrier, `S` start, `G` end. Lines may be indented.
    /// Generates components so the grid is immediately searchable.
    ///
    /// # Panics
    /// Panics on unknown glyphs or rows of unequal length.
    pub fn from_ascii(board: &str) -> Grid {
        let rows: Vec<&str> = board
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut grid = Grid::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width, "ragged row {y} in board");
            for (x, glyph) in row.chars().enumerate() {
                let state = match glyph {
                    '.' => CellState::Empty,
                    '#' => CellState::Barrier,
                    'S' => CellState::Start,
                    'G' => CellState::End,
                    _ => panic!("unknown board glyph {glyph:?}"),
                };
                grid.cells[y * width + x] = state;
            }
        }
        grid.generate_components();
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    fn get_ix(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }

    fn point_of_ix(&self, ix: usize) -> Point {
        Point::new((ix % self.width) as i32, (ix / self.width) as i32)
    }

    pub fn state(&self, p: Point) -> CellState {
        self.cells[self.get_ix(p)]
    }

    /// The traversable neighbours of `p` in the fixed expansion order
    /// up, down, left, right. Every solver relies on this order for
    /// deterministic tie-breaking, so it must not change.
    pub fn neighbours(&self, p: Point) -> SmallVec<[Point; 4]> {
        [
            Point::new(p.x, p.y - 1),
            Point::new(p.x, p.y + 1),
            Point::new(p.x - 1, p.y),
            Point::new(p.x + 1, p.y),
        ]
        .into_iter()
        .filter(|&n| self.in_bounds(n) && self.state(n) != CellState::Barrier)
        .collect()
    }

    /// Updates a cell state. Joins newly connected components when a barrier
    /// disappears and flags the components as dirty when one appears, since a
    /// new barrier may break a component apart.
    fn set_state(&mut self, p: Point, state: CellState) {
        let ix = self.get_ix(p);
        let was_barrier = self.cells[ix] == CellState::Barrier;
        self.cells[ix] = state;
        if state == CellState::Barrier {
            if !was_barrier {
                self.components_dirty = true;
            }
        } else if was_barrier {
            for n in self.neighbours(p) {
                let n_ix = self.get_ix(n);
                self.components.union(ix, n_ix);
            }
        }
    }

    pub fn set_barrier(&mut self, p: Point) {
        self.set_state(p, CellState::Barrier);
    }

    /// Marks `p` as the start cell, demoting any previous start to empty so
    /// the grid never holds two.
    pub fn set_start(&mut self, p: Point) {
        if let Some(previous) = self.start() {
            self.set_state(previous, CellState::Empty);
        }
        self.set_state(p, CellState::Start);
    }

    /// Marks `p` as the end cell, demoting any previous end to empty.
    pub fn set_end(&mut self, p: Point) {
        if let Some(previous) = self.end() {
            self.set_state(previous, CellState::Empty);
        }
        self.set_state(p, CellState::End);
    }

    pub fn start(&self) -> Option<Point> {
        self.cells
            .iter()
            .position(|&state| state == CellState::Start)
            .map(|ix| self.point_of_ix(ix))
    }

    pub fn end(&self) -> Option<Point> {
        self.cells
            .iter()
            .position(|&state| state == CellState::End)
            .map(|ix| self.point_of_ix(ix))
    }

    /// All cells currently in the given state, in row-major order.
    pub fn cells_in_state(&self, state: CellState) -> Vec<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == state)
            .map(|(ix, _)| self.point_of_ix(ix))
            .collect()
    }

    /// Flags `p` as a frontier member. Start, end and barrier cells keep
    /// their state.
    pub fn mark_open(&mut self, p: Point) {
        self.mark(p, CellState::Open);
    }

    /// Flags `p` as expanded. Start, end and barrier cells keep their state.
    pub fn mark_closed(&mut self, p: Point) {
        self.mark(p, CellState::Closed);
    }

    /// Flags `p` as part of the reconstructed route. Start, end and barrier
    /// cells keep their state.
    pub fn mark_path(&mut self, p: Point) {
        self.mark(p, CellState::Path);
    }

    fn mark(&mut self, p: Point, state: CellState) {
        let ix = self.get_ix(p);
        match self.cells[ix] {
            CellState::Start | CellState::End | CellState::Barrier => {}
            _ => self.cells[ix] = state,
        }
    }

    /// Resets a single cell to empty, whatever it was before. Clearing a
    /// barrier rejoins the surrounding components.
    pub fn reset(&mut self, p: Point) {
        self.set_state(p, CellState::Empty);
    }

    /// Clears the visitation leftovers of a previous search (open, closed and
    /// path markings) while keeping start, end and barriers in place.
    /// Iterative-deepening solvers call this between rounds.
    pub fn reset_search(&mut self) {
        for state in &mut self.cells {
            if matches!(*state, CellState::Open | CellState::Closed | CellState::Path) {
                *state = CellState::Empty;
            }
        }
    }

    /// Clears the whole board back to empty cells and a single all-passable
    /// component.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
        self.generate_components();
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable 4-grid
    /// neighbours to the same components.
    pub fn generate_components(&mut self) {
        let w = self.width;
        let h = self.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let point = Point::new(x, y);
                if self.state(point) == CellState::Barrier {
                    continue;
                }
                let parent_ix = self.get_ix(point);
                // Linking down and right suffices to cover all 4-grid edges.
                for n in [Point::new(x, y + 1), Point::new(x + 1, y)] {
                    if self.in_bounds(n) && self.state(n) != CellState::Barrier {
                        let n_ix = self.get_ix(n);
                        self.components.union(parent_ix, n_ix);
                    }
                }
            }
        }
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(*start) && self.in_bounds(*goal) {
            let start_ix = self.get_ix(*start);
            let goal_ix = self.get_ix(*goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let glyph = match self.state(Point::new(x, y)) {
                    CellState::Empty => '.',
                    CellState::Open => 'o',
                    CellState::Closed => 'x',
                    CellState::Barrier => '#',
                    CellState::Start => 'S',
                    CellState::End => 'G',
                    CellState::Path => '*',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The expansion order up, down, left, right is load-bearing for
    /// deterministic solver output.
    #[test]
    fn neighbour_order_is_fixed() {
        let grid = Grid::from_ascii(
            "...
             ...
             ...",
        );
        let n = grid.neighbours(Point::new(1, 1));
        assert_eq!(
            n.to_vec(),
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1)
            ]
        );
    }

    #[test]
    fn neighbours_filter_barriers_and_bounds() {
        let grid = Grid::from_ascii(
            ".#.
             ...",
        );
        // Corner cell: only down survives (right is a barrier, up/left out of bounds).
        let n = grid.neighbours(Point::new(0, 0));
        assert_eq!(n.to_vec(), vec![Point::new(0, 1)]);
    }

    /// Tests whether points are correctly mapped to different connected components.
    #[test]
    fn test_component_generation() {
        // Two halves split by a full-height wall:
        //  ___
        // |.#.|
        // |.#.|
        //  ___
        let grid = Grid::from_ascii(
            ".#.
             .#.",
        );
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(0, 1)));
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(1, 0)));
    }

    #[test]
    fn clearing_a_barrier_rejoins_components() {
        let mut grid = Grid::from_ascii(
            ".#.
             .#.",
        );
        grid.reset(Point::new(1, 0));
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(2, 0)));
    }

    #[test]
    fn placing_a_barrier_dirties_components() {
        let mut grid = Grid::from_ascii(
            "...
             ...",
        );
        grid.set_barrier(Point::new(1, 0));
        grid.set_barrier(Point::new(1, 1));
        grid.update();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
    }

    #[test]
    fn at_most_one_start_and_end() {
        let mut grid = Grid::new(3, 1);
        grid.set_start(Point::new(0, 0));
        grid.set_start(Point::new(1, 0));
        grid.set_end(Point::new(2, 0));
        assert_eq!(grid.start(), Some(Point::new(1, 0)));
        assert_eq!(grid.state(Point::new(0, 0)), CellState::Empty);
        assert_eq!(grid.end(), Some(Point::new(2, 0)));
    }

    #[test]
    fn marks_never_touch_start_end_or_barriers() {
        let mut grid = Grid::from_ascii("S#G");
        grid.mark_open(Point::new(0, 0));
        grid.mark_closed(Point::new(1, 0));
        grid.mark_path(Point::new(2, 0));
        assert_eq!(grid.state(Point::new(0, 0)), CellState::Start);
        assert_eq!(grid.state(Point::new(1, 0)), CellState::Barrier);
        assert_eq!(grid.state(Point::new(2, 0)), CellState::End);
    }

    #[test]
    fn reset_search_clears_visitation_only() {
        let mut grid = Grid::from_ascii("S.#G");
        grid.mark_open(Point::new(1, 0));
        grid.reset_search();
        assert_eq!(grid.state(Point::new(1, 0)), CellState::Empty);
        assert_eq!(grid.state(Point::new(2, 0)), CellState::Barrier);
        assert_eq!(grid.start(), Some(Point::new(0, 0)));
        assert_eq!(grid.end(), Some(Point::new(3, 0)));
    }

    #[test]
    fn display_round_trips_the_board_glyphs() {
        let board = "S.#\n..G\n";
        let grid = Grid::from_ascii(board);
        assert_eq!(grid.to_string(), board);
    }
}
