//! **algoviz-core** — core types for the instrumented traversal & replay
//! engine.
//!
//! This crate provides the foundational types used across the *algoviz*
//! workspace: grid coordinates, typed cells, the rectangular grid model,
//! the replayable [`Trace`] contract shared by all algorithm families, and
//! the error taxonomy.

pub mod cell;
pub mod coord;
pub mod error;
pub mod grid;
pub mod mapgen;
pub mod trace;

pub use cell::{Cell, CellKind};
pub use coord::Coord;
pub use error::{Error, Result};
pub use grid::Grid;
pub use trace::{SortStep, Trace, TraversalResult};
