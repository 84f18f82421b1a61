// src/registry/store.rs

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::registry::unit::NodeUnit;
use crate::types::NodeId;

/// Insertion-ordered mapping from node id to its unit of work.
///
/// Iteration order is registration order. Re-registering an id replaces the
/// unit but keeps the id's original position; unregistering keeps the
/// relative order of everything else.
#[derive(Default, Clone)]
pub struct NodeRegistry {
    nodes: IndexMap<NodeId, Arc<dyn NodeUnit>>,
}

impl fmt::Debug for NodeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRegistry")
            .field("nodes", &self.nodes.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the unit for `id` (last writer wins).
    ///
    /// Returns `true` if an existing registration was replaced.
    pub fn register(&mut self, id: impl Into<NodeId>, unit: Arc<dyn NodeUnit>) -> bool {
        let id = id.into();
        let replaced = self.nodes.insert(id.clone(), unit).is_some();
        debug!(node = %id, replaced, "registered node");
        replaced
    }

    /// Remove `id` if present. Returns `true` if something was removed.
    pub fn unregister(&mut self, id: &str) -> bool {
        let removed = self.nodes.shift_remove(id).is_some();
        debug!(node = %id, removed, "unregistered node");
        removed
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

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    /// Copy of the current mapping, unaffected by later mutation.
    ///
    /// Units are shared, not cloned.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            nodes: self.nodes.clone(),
        }
    }
}

/// Read-only view of the registry as it was when a run started.
#[derive(Clone)]
pub struct RegistrySnapshot {
    nodes: IndexMap<NodeId, Arc<dyn NodeUnit>>,
}

impl fmt::Debug for RegistrySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrySnapshot")
            .field("nodes", &self.nodes.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl RegistrySnapshot {
    pub fn get(&self, id: &str) -> Option<&Arc<dyn NodeUnit>> {
        self.nodes.get(id)
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

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }
}
