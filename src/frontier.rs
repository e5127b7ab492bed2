//! Shared search-state plumbing: a stable priority frontier for the
//! cost-guided solvers and a score map with an "infinity" default for
//! unvisited cells.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;
use grid_util::point::Point;
use num_traits::{Bounded, Zero};

struct SmallestCostHolder<C> {
    priority: C,
    count: usize,
    cell: Point,
}

impl<C: PartialEq> PartialEq for SmallestCostHolder<C> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.count == other.count
    }
}

impl<C: PartialEq> Eq for SmallestCostHolder<C> {}

impl<C: Ord> PartialOrd for SmallestCostHolder<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for SmallestCostHolder<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Orders by priority first; equal priorities fall back to the
        // insertion count so that the frontier pops ties in FIFO order.
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.count.cmp(&self.count),
            s => s,
        }
    }
}

/// A priority frontier that pops the smallest priority first and breaks ties
/// by insertion order. The strict FIFO tie-break makes the cost-guided
/// solvers fully deterministic, so it must be preserved.
///
/// Entries are never updated in place: a solver that relaxes a cell already
/// in the frontier leaves the old entry behind with a stale priority.
pub struct Frontier<C> {
    heap: BinaryHeap<SmallestCostHolder<C>>,
    count: usize,
}

impl<C: Ord + Copy> Frontier<C> {
    pub fn new() -> Frontier<C> {
        Frontier {
            heap: BinaryHeap::new(),
            count: 0,
        }
    }

    pub fn push(&mut self, priority: C, cell: Point) {
        self.heap.push(SmallestCostHolder {
            priority,
            count: self.count,
            cell,
        });
        self.count += 1;
    }

    pub fn pop(&mut self) -> Option<(C, Point)> {
        self.heap.pop().map(|holder| (holder.priority, holder.cell))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<C: Ord + Copy> Default for Frontier<C> {
    fn default() -> Self {
        Frontier::new()
    }
}

/// Per-cell cost map where an absent cell reads as `C::max_value()`, the
/// "infinity" of unvisited cells. Used for the g and f scores of the
/// cost-guided solvers.
pub struct ScoreMap<C> {
    scores: FxHashMap<Point, C>,
}

impl<C: Copy + Ord + Bounded + Zero> ScoreMap<C> {
    /// An empty map: every cell is at infinity.
    pub fn new() -> ScoreMap<C> {
        ScoreMap {
            scores: FxHashMap::default(),
        }
    }

    /// A map with the start cell seeded at zero.
    pub fn with_start(start: Point) -> ScoreMap<C> {
        let mut map = ScoreMap::new();
        map.set(start, C::zero());
        map
    }

    pub fn get(&self, cell: &Point) -> C {
        self.scores.get(cell).copied().unwrap_or_else(C::max_value)
    }

    pub fn set(&mut self, cell: Point, score: C) {
        self.scores.insert(cell, score);
    }
}

impl<C: Copy + Ord + Bounded + Zero> Default for ScoreMap<C> {
    fn default() -> Self {
        ScoreMap::new()
    }
}
