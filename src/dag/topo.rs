// src/dag/topo.rs

//! Depth-first topological sort over a [`DependencyGraph`].
//!
//! Roots are tried in graph order. From each unvisited root we walk into its
//! dependents (in edge order), and a node is emitted only after everything
//! reachable from it has been emitted. Reversing that post-order yields a
//! dependency-first order: for every edge `A -> B`, `A` comes before `B`.
//!
//! The walk uses an explicit stack instead of recursion so very deep chains
//! cannot overflow the call stack.

use std::fmt;

use tracing::debug;

use crate::dag::graph::DependencyGraph;
use crate::errors::GraphError;
use crate::types::NodeId;

/// Whether the sort should actively look for cycles.
///
/// - `Assume`: the edge list was validated elsewhere (default). On a cyclic
///   graph the sort still terminates, but the order is meaningless.
/// - `Detect`: a dependent that is already on the current walk path is
///   reported as [`GraphError::Cycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleCheck {
    #[default]
    Assume,
    Detect,
}

/// Dependency-first linear order over every node of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionOrder {
    nodes: Vec<NodeId>,
}

impl ExecutionOrder {
    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of `id` in the order, if present.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n == id)
    }

    pub fn into_vec(self) -> Vec<NodeId> {
        self.nodes
    }
}

impl From<Vec<NodeId>> for ExecutionOrder {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }
}

impl<'a> IntoIterator for &'a ExecutionOrder {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl fmt::Display for ExecutionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.join(" -> "))
    }
}

/// Compute the execution order for `graph`.
pub fn topo_sort(graph: &DependencyGraph, check: CycleCheck) -> Result<ExecutionOrder, GraphError> {
    let n = graph.len();
    let mut visited = vec![false; n];
    let mut on_path = vec![false; n];
    let mut post_order: Vec<usize> = Vec::with_capacity(n);

    // (node index, index of the next dependent to look at)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        on_path[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;

            let Some(dep) = graph.dependents_at(node).get(cursor) else {
                stack.pop();
                on_path[node] = false;
                post_order.push(node);
                continue;
            };
            frame.1 += 1;

            // The builder only admits edges between known nodes.
            let Some(dep_idx) = graph.index_of(dep) else {
                continue;
            };

            if visited[dep_idx] {
                if check == CycleCheck::Detect && on_path[dep_idx] {
                    return Err(GraphError::Cycle { node: dep.clone() });
                }
                continue;
            }

            visited[dep_idx] = true;
            on_path[dep_idx] = true;
            stack.push((dep_idx, 0));
        }
    }

    let nodes: Vec<NodeId> = post_order
        .into_iter()
        .rev()
        .filter_map(|idx| graph.id_at(idx).map(str::to_string))
        .collect();

    debug!(order = ?nodes, "computed execution order");

    Ok(ExecutionOrder { nodes })
}
