// src/exec/executor.rs

use std::time::{Duration, Instant};

use tracing::{error, info, warn};

use crate::dag::ExecutionOrder;
use crate::errors::RunError;
use crate::registry::RegistrySnapshot;
use crate::types::NodeId;

/// Result of a run in which every node succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Nodes in the order they were executed.
    pub executed: Vec<NodeId>,
    pub elapsed: Duration,
}

/// Execute every node of `order`, one at a time.
///
/// Node `n + 1` is not started until node `n`'s future has resolved
/// successfully. The first failure is returned as-is and nothing after it
/// runs. An id missing from `snapshot` fails the run with
/// [`RunError::UnknownNode`].
pub async fn execute_in_order(
    order: &ExecutionOrder,
    snapshot: &RegistrySnapshot,
) -> Result<RunSummary, RunError> {
    let started = Instant::now();
    let mut executed = Vec::with_capacity(order.len());

    for (position, id) in order.iter().enumerate() {
        let Some(unit) = snapshot.get(id) else {
            warn!(node = %id, position, "node in execution order is not registered");
            return Err(RunError::UnknownNode(id.clone()));
        };

        info!(node = %id, position, total = order.len(), "running node");
        let node_started = Instant::now();

        if let Err(source) = unit.execute().await {
            error!(
                node = %id,
                position,
                error = %format!("{source:#}"),
                skipped = order.len() - position - 1,
                "node failed; halting run"
            );
            return Err(RunError::NodeExecution {
                node: id.clone(),
                source,
            });
        }

        info!(
            node = %id,
            elapsed_ms = node_started.elapsed().as_millis() as u64,
            "node finished"
        );
        executed.push(id.clone());
    }

    Ok(RunSummary {
        executed,
        elapsed: started.elapsed(),
    })
}
