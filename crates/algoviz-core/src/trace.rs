//! The replayable [`Trace`] contract.
//!
//! A trace is an ordered, finite, fully precomputed sequence of observable
//! algorithm states. Both algorithm families produce one: traversal runs
//! yield a [`TraversalResult`] (replayed as the visited order followed by
//! the path), sorting runs yield a sequence of [`SortStep`]s. The replay
//! controller consumes either shape without caring where it came from.

use crate::coord::Coord;

/// The outcome of one traversal run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalResult {
    /// Every settled cell, in settlement order. No duplicates.
    pub visit_order: Vec<Coord>,
    /// The route from start to goal inclusive, or empty if unreachable.
    pub path: Vec<Coord>,
}

impl TraversalResult {
    /// Whether a route from start to goal was found.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Wrap an externally predicted path (e.g. from an ML subsystem) so it
    /// replays interchangeably with native algorithm output. The predicted
    /// cells serve as both the visited order and the path.
    pub fn from_predicted(cells: Vec<Coord>) -> Self {
        Self {
            visit_order: cells.clone(),
            path: cells,
        }
    }
}

/// One observable state of a sorting run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortStep {
    /// The full sequence at this step.
    pub snapshot: Vec<i32>,
    /// The 0–2 indices under comparison or swap, empty for the initial and
    /// final snapshots.
    pub highlighted: Vec<usize>,
}

impl SortStep {
    /// Create a step from a snapshot and its highlighted indices.
    pub fn new(snapshot: Vec<i32>, highlighted: Vec<usize>) -> Self {
        debug_assert!(highlighted.len() <= 2);
        Self {
            snapshot,
            highlighted,
        }
    }

    /// An unhighlighted snapshot (initial/final states, merge passes).
    pub fn plain(snapshot: Vec<i32>) -> Self {
        Self {
            snapshot,
            highlighted: Vec::new(),
        }
    }
}

/// A replayable trace from either algorithm family.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trace {
    /// Traversal output, replayed as two phases: visited order, then path.
    Traversal(TraversalResult),
    /// Sorting output, replayed one step at a time.
    Sort(Vec<SortStep>),
}

impl Trace {
    /// Total number of elements a full replay emits.
    pub fn len(&self) -> usize {
        match self {
            Trace::Traversal(r) => r.visit_order.len() + r.path.len(),
            Trace::Sort(steps) => steps.len(),
        }
    }

    /// Whether a replay would emit nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<TraversalResult> for Trace {
    fn from(r: TraversalResult) -> Self {
        Trace::Traversal(r)
    }
}

impl From<Vec<SortStep>> for Trace {
    fn from(steps: Vec<SortStep>) -> Self {
        Trace::Sort(steps)
    }
}
