// src/errors.rs

//! Crate-wide error types.
//!
//! - [`GraphError`]: the edge list and the registry disagree, or (with the
//!   cycle check enabled) the graph is not acyclic.
//! - [`RunError`]: everything that can end a run early.
//! - [`NodeflowError`]: top-level error for config loading and the binary.

use thiserror::Error;

use crate::types::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge {from} -> {to} references unregistered node '{node}'")]
    UnknownNode { node: NodeId, from: NodeId, to: NodeId },

    #[error("cycle detected in dependency graph at node '{node}'")]
    Cycle { node: NodeId },
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("node '{node}' failed")]
    NodeExecution {
        node: NodeId,
        #[source]
        source: anyhow::Error,
    },

    #[error("execution order references unknown node '{0}'")]
    UnknownNode(NodeId),
}

impl RunError {
    /// The node this failure is attributed to, if any.
    pub fn node(&self) -> Option<&str> {
        match self {
            RunError::Graph(GraphError::UnknownNode { node, .. }) => Some(node),
            RunError::Graph(GraphError::Cycle { node }) => Some(node),
            RunError::NodeExecution { node, .. } => Some(node),
            RunError::UnknownNode(node) => Some(node),
        }
    }
}

#[derive(Error, Debug)]
pub enum NodeflowError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cycle detected in pipeline: {0}")]
    DagCycle(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Run failed: {0}")]
    Run(#[from] RunError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, NodeflowError>;
