// src/registry/unit.rs

use std::future::Future;
use std::pin::Pin;

/// Future returned by [`NodeUnit::execute`].
pub type NodeFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>>;

/// The executable unit of work behind a registered node.
///
/// The pipeline only ever calls `execute`, awaits it, and inspects whether it
/// failed. What the node actually does is up to the implementation:
/// - spawn an OS process ([`crate::exec::CommandNode`])
/// - run an async closure ([`crate::exec::FnNode`])
/// - record invocations in tests
pub trait NodeUnit: Send + Sync {
    fn execute(&self) -> NodeFuture<'_>;
}
