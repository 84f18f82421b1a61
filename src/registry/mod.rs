// src/registry/mod.rs

//! Node registry: the source of truth for which nodes exist.
//!
//! - [`unit`] defines the [`NodeUnit`] trait, the single capability a node
//!   exposes to the pipeline.
//! - [`store`] holds the insertion-ordered id -> unit mapping and the
//!   read-only [`RegistrySnapshot`] a run works from.

pub mod store;
pub mod unit;

pub use store::{NodeRegistry, RegistrySnapshot};
pub use unit::{NodeFuture, NodeUnit};
