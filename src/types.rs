// src/types.rs

//! Shared plain-data types.

use serde::Deserialize;

/// Canonical node identifier used throughout the crate.
pub type NodeId = String;

/// A directed connection: `target` depends on `source`.
///
/// Edges carry no uniqueness guarantee; a repeated edge is harmless.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl<S: Into<NodeId>, T: Into<NodeId>> From<(S, T)> for Edge {
    fn from((source, target): (S, T)) -> Self {
        Edge::new(source, target)
    }
}
