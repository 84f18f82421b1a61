// src/cli.rs

//! Command-line surface of the `nodeflow` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::dag::CycleCheck;
use crate::engine::RunOptions;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "nodeflow",
    version,
    about = "Run a graph of command nodes in dependency order, stopping at the first failure.",
    long_about = None
)]
pub struct CliArgs {
    /// Pipeline file declaring `[node.<id>]` commands and `[[edge]]` connections.
    #[arg(long, value_name = "PATH", default_value = "Nodeflow.toml")]
    pub config: PathBuf,

    /// Log verbosity; overrides any `NODEFLOW_LOG` directives.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the nodes, edges and computed execution order; run nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// Reject cyclic pipelines even when `[config].check_cycles` is off.
    #[arg(long)]
    pub check_cycles: bool,
}

impl CliArgs {
    /// Apply command-line overrides on top of the pipeline file's options.
    pub fn effective_options(&self, from_config: RunOptions) -> RunOptions {
        let mut options = from_config;
        if self.check_cycles {
            options.cycle_check = CycleCheck::Detect;
        }
        options
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// `EnvFilter` directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
