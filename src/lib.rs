// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod registry;
pub mod types;

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::config::loader::load_and_validate;
use crate::dag::ExecutionOrder;
use crate::engine::{RunOptions, Scheduler};
use crate::exec::CommandNode;

pub use crate::dag::DependencyGraph;
pub use crate::errors::{GraphError, NodeflowError, RunError};
pub use crate::registry::{NodeRegistry, NodeUnit};
pub use crate::types::{Edge, NodeId};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - pipeline file loading + validation
/// - command node registration
/// - a single run (or a dry-run plan)
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.config)?;
    let options = args.effective_options(cfg.config.run_options());

    let scheduler = scheduler_from_config(&cfg, options);

    if args.dry_run {
        let order = scheduler.plan()?;
        print_dry_run(&cfg, &order);
        return Ok(());
    }

    let summary = scheduler.run_all().await?;
    info!(
        executed = summary.executed.len(),
        "all nodes completed"
    );
    Ok(())
}

/// Process exit status for a failed invocation.
///
/// `2` when a node (or the graph built at run time) failed, `1` for
/// everything else: unreadable or invalid pipeline files, logging setup.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<RunError>().is_some() { 2 } else { 1 }
}

/// Register one [`CommandNode`] per `[node.<id>]` and install the edges.
pub fn scheduler_from_config(cfg: &ConfigFile, options: RunOptions) -> Scheduler {
    let scheduler = Scheduler::new(options);

    for (id, node) in cfg.node.iter() {
        let unit = CommandNode::new(id.clone(), node.cmd.clone());
        scheduler.register_node(id.clone(), Arc::new(unit));
    }
    scheduler.update_connections(cfg.edge.iter().cloned());

    scheduler
}

/// Simple dry-run output: nodes, edges and the computed order.
fn print_dry_run(cfg: &ConfigFile, order: &ExecutionOrder) {
    println!("nodeflow dry-run");
    println!("  config.check_cycles = {}", cfg.config.check_cycles);
    println!();

    println!("nodes ({}):", cfg.node.len());
    for (id, node) in cfg.node.iter() {
        println!("  - {id}");
        println!("      cmd: {}", node.cmd);
    }
    println!();

    println!("edges ({}):", cfg.edge.len());
    for edge in cfg.edge.iter() {
        println!("  - {} -> {}", edge.source, edge.target);
    }
    println!();

    println!("order:");
    for (i, id) in order.iter().enumerate() {
        println!("  {}. {id}", i + 1);
    }

    debug!("dry-run complete (no execution)");
}
