// src/exec/func.rs

use std::fmt;
use std::future::Future;

use crate::registry::{NodeFuture, NodeUnit};

/// Node unit backed by an async closure.
///
/// ```ignore
/// let node = FnNode::new(|| async { Ok(()) });
/// ```
pub struct FnNode<F> {
    f: F,
}

impl<F> FnNode<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for FnNode<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnNode").finish_non_exhaustive()
    }
}

impl<F, Fut> NodeUnit for FnNode<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    fn execute(&self) -> NodeFuture<'_> {
        Box::pin((self.f)())
    }
}
