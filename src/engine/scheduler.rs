// src/engine/scheduler.rs

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::dag::{CycleCheck, DependencyGraph, ExecutionOrder, topo_sort};
use crate::errors::RunError;
use crate::exec::{RunSummary, execute_in_order};
use crate::registry::{NodeRegistry, NodeUnit, RegistrySnapshot};
use crate::types::{Edge, NodeId};

/// Options that apply to every run of a [`Scheduler`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub cycle_check: CycleCheck,
}

/// Owns the registry and edge list, and runs them.
///
/// Registry and edges may be mutated from any thread at any time. A run
/// copies both when it starts and never looks at the shared state again, so
/// changes made while it is in flight only affect the next run.
#[derive(Debug, Default)]
pub struct Scheduler {
    registry: RwLock<NodeRegistry>,
    edges: RwLock<Vec<Edge>>,
    options: RunOptions,
}

impl Scheduler {
    pub fn new(options: RunOptions) -> Self {
        Self {
            registry: RwLock::new(NodeRegistry::new()),
            edges: RwLock::new(Vec::new()),
            options,
        }
    }

    pub fn options(&self) -> RunOptions {
        self.options
    }

    /// Register (or replace) the unit behind `id`.
    pub fn register_node(&self, id: impl Into<NodeId>, unit: Arc<dyn NodeUnit>) {
        let id = id.into();
        if self.registry.write().register(id.clone(), unit) {
            warn!(node = %id, "node re-registered; previous unit replaced");
        }
    }

    /// Remove `id` from the registry. Unknown ids are ignored.
    pub fn unregister_node(&self, id: &str) {
        self.registry.write().unregister(id);
    }

    /// Replace the entire edge list.
    pub fn update_connections<I, E>(&self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let edges: Vec<Edge> = edges.into_iter().map(Into::into).collect();
        debug!(edges = edges.len(), "connections updated");
        *self.edges.write() = edges;
    }

    /// Registered ids, in registration order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.registry.read().ids().map(str::to_string).collect()
    }

    /// Copy of the current edge list.
    pub fn connections(&self) -> Vec<Edge> {
        self.edges.read().clone()
    }

    /// Build the graph from the current registry and edges.
    pub fn graph(&self) -> Result<DependencyGraph, RunError> {
        let (snapshot, edges) = self.snapshot();
        Ok(DependencyGraph::build(snapshot.ids(), &edges)?)
    }

    /// Compute the order the next run would use, without executing anything.
    pub fn plan(&self) -> Result<ExecutionOrder, RunError> {
        let graph = self.graph()?;
        Ok(topo_sort(&graph, self.options.cycle_check)?)
    }

    /// Run every registered node in dependency order.
    ///
    /// Stops at the first failure, which is returned to the caller.
    pub async fn run_all(&self) -> Result<RunSummary, RunError> {
        let (snapshot, edges) = self.snapshot();

        info!(
            nodes = snapshot.len(),
            edges = edges.len(),
            "running all nodes"
        );
        let ids: Vec<&str> = snapshot.ids().collect();
        debug!(nodes = ?ids, ?edges, "run inputs");

        let graph = DependencyGraph::build(snapshot.ids(), &edges)?;
        let order = topo_sort(&graph, self.options.cycle_check)?;
        info!(order = %order, "execution order");

        let summary = execute_in_order(&order, &snapshot).await?;

        info!(
            executed = summary.executed.len(),
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "run finished successfully"
        );
        Ok(summary)
    }

    /// Take both read locks briefly and copy out what a run needs.
    fn snapshot(&self) -> (RegistrySnapshot, Vec<Edge>) {
        let registry = self.registry.read();
        let edges = self.edges.read();
        (registry.snapshot(), edges.clone())
    }
}
