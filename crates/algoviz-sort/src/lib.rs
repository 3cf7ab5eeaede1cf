//! Step-recording sorting algorithms.
//!
//! Each algorithm sorts a copy of the input ascending and records every
//! observable intermediate state as a sequence of
//! [`SortStep`](algoviz_core::SortStep)s: the first step is always the
//! unmodified input, the last is always the fully sorted sequence, and the
//! steps in between mark the indices under comparison or swap. Trace
//! density is part of the visualization contract — bubble records every
//! adjacent comparison, merge only one snapshot per merged pair of runs.
//!
//! Given the same input, every algorithm produces an identical trace on
//! every invocation.

mod bubble;
mod merge;
mod quick;

use algoviz_core::{Error, Result, SortStep};

/// Which sorting algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortKind {
    Bubble,
    Merge,
    Quick,
}

/// Record one sorting run over a snapshot of `values`.
///
/// The caller's slice is never mutated. An empty input is an
/// [`Error::EmptySequence`]; a single element yields the minimal two-step
/// trace (initial and final snapshot).
pub fn run_sort(kind: SortKind, values: &[i32]) -> Result<Vec<SortStep>> {
    if values.is_empty() {
        return Err(Error::EmptySequence);
    }
    let steps = match kind {
        SortKind::Bubble => bubble::sort(values),
        SortKind::Merge => merge::sort(values),
        SortKind::Quick => quick::sort(values),
    };
    log::debug!("{kind:?} sorted {} values in {} steps", values.len(), steps.len());
    Ok(steps)
}
