//! Instrumented traversal algorithms for grid search visualization.
//!
//! This crate provides breadth-first, depth-first, and Dijkstra search over
//! an [`algoviz_core::Grid`] snapshot. Unlike a plain pathfinder, every run
//! records the full settlement order alongside the reconstructed path, so
//! the result can be replayed step by step:
//!
//! - **BFS** — shortest edge-count path ([`TraversalKind::Bfs`])
//! - **DFS** — some path, stack-order determined ([`TraversalKind::Dfs`])
//! - **Dijkstra** — cheapest weighted path ([`TraversalKind::Dijkstra`])
//!
//! All algorithms run through [`Search`], which owns and reuses internal
//! scratch state so repeated runs incur no allocations after warm-up, and
//! share one fixed neighbor enumeration order so traces are reproducible.

mod bfs;
mod dfs;
mod dijkstra;
mod search;

pub use search::{Search, TraversalKind, UNREACHABLE, run_traversal};
