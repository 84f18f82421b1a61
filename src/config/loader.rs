// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Parse pipeline TOML without validating it.
pub fn parse_str(contents: &str) -> Result<RawConfigFile> {
    Ok(toml::from_str(contents)?)
}

/// Read and parse the pipeline file at `path`, without validating it.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let raw = parse_str(&fs::read_to_string(path)?)?;

    debug!(
        path = %path.display(),
        nodes = raw.node.len(),
        edges = raw.edge.len(),
        "parsed pipeline file"
    );
    Ok(raw)
}

/// Read, parse and validate the pipeline file at `path`.
///
/// The result is ready to be turned into a `Scheduler`: every edge names a
/// declared node and, when `[config].check_cycles` is set, the edge set is
/// known to be acyclic.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    ConfigFile::try_from(load_from_path(path)?)
}
