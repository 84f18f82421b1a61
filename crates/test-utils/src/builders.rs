#![allow(dead_code)]

use std::sync::Arc;

use indexmap::IndexMap;
use nodeflow::config::{ConfigFile, ConfigSection, NodeConfig, RawConfigFile};
use nodeflow::engine::{RunOptions, Scheduler};
use nodeflow::Edge;

use crate::fake_node::{new_log, ExecutionLog, RecordingNode};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                node: IndexMap::new(),
                edge: Vec::new(),
            },
        }
    }

    pub fn with_node(mut self, id: &str, cmd: &str) -> Self {
        self.config.node.insert(
            id.to_string(),
            NodeConfig {
                cmd: cmd.to_string(),
            },
        );
        self
    }

    pub fn with_edge(mut self, source: &str, target: &str) -> Self {
        self.config.edge.push(Edge::new(source, target));
        self
    }

    pub fn check_cycles(mut self, val: bool) -> Self {
        self.config.config.check_cycles = val;
        self
    }

    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a `Scheduler` populated with [`RecordingNode`]s that all
/// share one execution log.
pub struct SchedulerBuilder {
    options: RunOptions,
    log: ExecutionLog,
    nodes: Vec<RecordingNode>,
    node_ids: Vec<String>,
    edges: Vec<Edge>,
}

impl SchedulerBuilder {
    pub fn new() -> Self {
        Self {
            options: RunOptions::default(),
            log: new_log(),
            nodes: Vec::new(),
            node_ids: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Register a node that always succeeds.
    pub fn node(mut self, id: &str) -> Self {
        self.nodes.push(RecordingNode::new(id, self.log.clone()));
        self.node_ids.push(id.to_string());
        self
    }

    /// Register a node that always fails with `message`.
    pub fn failing_node(mut self, id: &str, message: &str) -> Self {
        self.nodes
            .push(RecordingNode::failing(id, self.log.clone(), message));
        self.node_ids.push(id.to_string());
        self
    }

    pub fn edge(mut self, source: &str, target: &str) -> Self {
        self.edges.push(Edge::new(source, target));
        self
    }

    /// Build the scheduler and hand back the shared log.
    pub fn build(self) -> (Scheduler, ExecutionLog) {
        let scheduler = Scheduler::new(self.options);
        for (id, node) in self.node_ids.into_iter().zip(self.nodes) {
            scheduler.register_node(id, Arc::new(node));
        }
        scheduler.update_connections(self.edges);
        (scheduler, self.log)
    }
}

impl Default for SchedulerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
