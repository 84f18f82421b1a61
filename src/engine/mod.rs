// src/engine/mod.rs

//! Orchestration engine.
//!
//! [`Scheduler`] is the owned context a host drives runs through. It holds
//! the node registry and the current edge list, and composes the pipeline at
//! run time:
//!
//! registry snapshot + edges -> [`DependencyGraph`](crate::dag::DependencyGraph)
//! -> [`ExecutionOrder`](crate::dag::ExecutionOrder) -> sequential execution.

pub mod scheduler;

pub use crate::dag::CycleCheck;
pub use scheduler::{RunOptions, Scheduler};
