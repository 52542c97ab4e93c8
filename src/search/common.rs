use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::barrier::BarrierMap;
use crate::grid::{GridBounds, Position};

pub trait SearchStrategy {
    fn name(&self) -> &'static str;

    fn search(
        &self,
        start: Position,
        goal: Position,
        barriers: &BarrierMap,
    ) -> Result<SearchResult, SearchError>;
}

/// Outcome of a successful search: the start-to-goal route, every cell
/// finalized along the way, and the total path cost.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub path: Vec<Position>,
    pub expanded: FxHashSet<Position>,
    pub cost: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier emptied before the goal was popped.
    Exhausted { start: Position, goal: Position },
    /// Start or goal lies outside the grid bounds.
    OutOfBounds(Position),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Exhausted { start, goal } => write!(
                f,
                "frontier exhausted before reaching ({}, {}) from ({}, {})",
                goal.x, goal.y, start.x, start.y
            ),
            SearchError::OutOfBounds(pos) => {
                write!(f, "coordinate ({}, {}) is outside the grid", pos.x, pos.y)
            }
        }
    }
}

impl Error for SearchError {}

pub(crate) fn ensure_in_bounds(bounds: GridBounds, pos: Position) -> Result<(), SearchError> {
    if bounds.contains(pos) {
        Ok(())
    } else {
        Err(SearchError::OutOfBounds(pos))
    }
}

/// Frontier entry for the open heap. `priority` is G for uniform-cost
/// search and F for A*.
/// `Ord` is reversed to make `BinaryHeap` a min-heap; ties fall back to
/// the larger G, then the lexicographically smaller position, so every
/// run pops cells in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub priority: u32,
    pub g: u32,
    pub pos: Position,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed comparison to make BinaryHeap a min-heap
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

/// Walk the parent map backward from `goal` until a cell with no parent
/// (the start), then flip into start-to-goal order.
pub(crate) fn reconstruct_path(
    parent: &FxHashMap<Position, Position>,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = parent.get(&current) {
        current = prev;
        path.push(current);
    }
    path.reverse();
    path
}
