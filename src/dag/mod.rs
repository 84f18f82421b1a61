// src/dag/mod.rs

//! Dependency graph construction and ordering.
//!
//! - [`graph`] builds the adjacency map (node -> direct dependents) from the
//!   registry's ids and the current edge list.
//! - [`topo`] turns that map into a dependency-first [`ExecutionOrder`].

pub mod graph;
pub mod topo;

pub use graph::DependencyGraph;
pub use topo::{CycleCheck, ExecutionOrder, topo_sort};
