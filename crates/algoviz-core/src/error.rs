//! Error types for the traversal & replay engine.

use thiserror::Error;

use crate::coord::Coord;

/// Result type alias for algoviz operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Structural input errors.
///
/// These indicate a caller contract violation and are surfaced before any
/// partial work happens. An unreachable goal is **not** an error: it is
/// represented by an empty path in
/// [`TraversalResult`](crate::trace::TraversalResult).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("row {row} has {got} columns, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Coord),

    #[error("cell at {0} is not a start cell")]
    MissingStart(Coord),

    #[error("cell at {0} is not a goal cell")]
    MissingGoal(Coord),

    #[error("sequence must not be empty")]
    EmptySequence,
}
