// src/dag/graph.rs

use indexmap::IndexMap;
use tracing::debug;

use crate::errors::GraphError;
use crate::types::{Edge, NodeId};

/// Adjacency map from each node to the nodes that directly depend on it.
///
/// `dependents_of("A")` lists every `B` for which an edge `A -> B` exists,
/// in edge-list order and without deduplication. Keys are exactly the ids the
/// graph was built from, in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyGraph {
    nodes: IndexMap<NodeId, Vec<NodeId>>,
}

impl DependencyGraph {
    /// Build a graph over `node_ids` from `edges`.
    ///
    /// Every id gets an entry, even with no edges at all. An edge naming an id
    /// outside `node_ids` (on either end) aborts the build; nothing partially
    /// built escapes.
    pub fn build<'a, I>(node_ids: I, edges: &[Edge]) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut nodes: IndexMap<NodeId, Vec<NodeId>> = node_ids
            .into_iter()
            .map(|id| (id.to_string(), Vec::new()))
            .collect();

        for edge in edges {
            if !nodes.contains_key(&edge.source) {
                return Err(unknown(&edge.source, edge));
            }
            if !nodes.contains_key(&edge.target) {
                return Err(unknown(&edge.target, edge));
            }
            if let Some(dependents) = nodes.get_mut(&edge.source) {
                dependents.push(edge.target.clone());
            }
        }

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "built dependency graph"
        );

        Ok(Self { nodes })
    }

    /// All node ids, in build order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    /// Immediate dependents of a node (targets of its outgoing edges).
    pub fn dependents_of(&self, id: &str) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate `(node, dependents)` pairs in build order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NodeId])> {
        self.nodes.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Look up a node's position in build order.
    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    /// Dependents of the node at `index`.
    pub(crate) fn dependents_at(&self, index: usize) -> &[NodeId] {
        self.nodes
            .get_index(index)
            .map(|(_, d)| d.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn id_at(&self, index: usize) -> Option<&str> {
        self.nodes.get_index(index).map(|(k, _)| k.as_str())
    }
}

fn unknown(node: &str, edge: &Edge) -> GraphError {
    GraphError::UnknownNode {
        node: node.to_string(),
        from: edge.source.clone(),
        to: edge.target.clone(),
    }
}
