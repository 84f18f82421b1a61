// src/exec/mod.rs

//! Execution layer.
//!
//! - [`executor`] walks an [`ExecutionOrder`](crate::dag::ExecutionOrder)
//!   strictly sequentially, awaiting each node before starting the next and
//!   halting on the first failure.
//! - [`command`] provides [`CommandNode`], a unit that runs a shell command
//!   via `tokio::process::Command`.
//! - [`func`] provides [`FnNode`], a unit backed by an async closure.

pub mod command;
pub mod executor;
pub mod func;

pub use command::CommandNode;
pub use executor::{RunSummary, execute_in_order};
pub use func::FnNode;
