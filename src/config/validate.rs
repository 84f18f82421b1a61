// src/config/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{NodeflowError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = NodeflowError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.node, raw.edge))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_nodes(cfg)?;
    validate_nodes(cfg)?;
    validate_edges(cfg)?;
    // With `check_cycles` off the edges are trusted as acyclic, matching
    // `CycleCheck::Assume` at run time.
    if cfg.config.check_cycles {
        validate_dag(cfg)?;
    }
    Ok(())
}

fn ensure_has_nodes(cfg: &RawConfigFile) -> Result<()> {
    if cfg.node.is_empty() {
        return Err(NodeflowError::ConfigError(
            "pipeline must contain at least one [node.<id>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_nodes(cfg: &RawConfigFile) -> Result<()> {
    for (id, node) in cfg.node.iter() {
        if node.cmd.trim().is_empty() {
            return Err(NodeflowError::ConfigError(format!(
                "node '{}' has an empty `cmd`",
                id
            )));
        }
    }
    Ok(())
}

fn validate_edges(cfg: &RawConfigFile) -> Result<()> {
    for edge in cfg.edge.iter() {
        for endpoint in [&edge.source, &edge.target] {
            if !cfg.node.contains_key(endpoint) {
                return Err(NodeflowError::ConfigError(format!(
                    "edge {} -> {} references unknown node '{}'",
                    edge.source, edge.target, endpoint
                )));
            }
        }
        if edge.source == edge.target {
            return Err(NodeflowError::ConfigError(format!(
                "node '{}' cannot depend on itself",
                edge.source
            )));
        }
    }
    Ok(())
}

fn validate_dag(cfg: &RawConfigFile) -> Result<()> {
    // Edge direction matches the pipeline: source -> target.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for id in cfg.node.keys() {
        graph.add_node(id.as_str());
    }

    for edge in cfg.edge.iter() {
        graph.add_edge(edge.source.as_str(), edge.target.as_str(), ());
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(NodeflowError::DagCycle(format!(
                "cycle detected in pipeline involving node '{}'",
                node
            )))
        }
    }
}
