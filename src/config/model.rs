// src/config/model.rs

use indexmap::IndexMap;
use serde::Deserialize;

use crate::dag::CycleCheck;
use crate::engine::RunOptions;
use crate::types::{Edge, NodeId};

/// Pipeline file exactly as deserialized, before validation.
///
/// ```toml
/// [config]
/// check_cycles = true
///
/// [node.fetch]
/// cmd = "echo fetching"
///
/// [node.report]
/// cmd = "echo reporting"
///
/// [[edge]]
/// source = "fetch"
/// target = "report"
/// ```
///
/// Nodes keep document order; that order is the registration order.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    /// All nodes from `[node.<id>]`.
    #[serde(default)]
    pub node: IndexMap<NodeId, NodeConfig>,

    /// All `[[edge]]` entries.
    #[serde(default)]
    pub edge: Vec<Edge>,
}

/// `[config]` section.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct ConfigSection {
    /// Reject cyclic edge sets when loading, and detect cycles while ordering
    /// at run time. Off means the edges are trusted to be acyclic.
    #[serde(default)]
    pub check_cycles: bool,
}

impl ConfigSection {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            cycle_check: if self.check_cycles {
                CycleCheck::Detect
            } else {
                CycleCheck::Assume
            },
        }
    }
}

/// `[node.<id>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    /// Shell command executed when the node runs.
    pub cmd: String,
}

/// A validated pipeline file.
///
/// Only obtainable through `ConfigFile::try_from(RawConfigFile)` (see
/// `validate.rs`), so holders can rely on every edge naming declared nodes,
/// and on acyclicity when `check_cycles` is set.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub node: IndexMap<NodeId, NodeConfig>,
    pub edge: Vec<Edge>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        node: IndexMap<NodeId, NodeConfig>,
        edge: Vec<Edge>,
    ) -> Self {
        Self { config, node, edge }
    }
}
