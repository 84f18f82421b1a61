// src/exec/command.rs

//! Shell-command node unit.

use std::process::Stdio;

use anyhow::{Context, Result, bail};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

use crate::registry::{NodeFuture, NodeUnit};
use crate::types::NodeId;

/// Runs `cmd` through the platform shell each time the node executes.
///
/// Stdout lines are logged at `info`, stderr lines at `debug`. A non-zero
/// exit status is a failure.
#[derive(Debug, Clone)]
pub struct CommandNode {
    id: NodeId,
    cmd: String,
}

impl CommandNode {
    pub fn new(id: impl Into<NodeId>, cmd: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cmd: cmd.into(),
        }
    }

    pub fn cmd(&self) -> &str {
        &self.cmd
    }

    async fn run(&self) -> Result<()> {
        debug!(node = %self.id, cmd = %self.cmd, "starting node process");

        // Build a shell command appropriate for the platform.
        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(&self.cmd);
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(&self.cmd);
            c
        };

        cmd.stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .with_context(|| format!("spawning process for node '{}'", self.id))?;

        // Always drain both pipes so buffers don't fill.
        let stdout_task = child.stdout.take().map(|stdout| {
            let id = self.id.clone();
            tokio::spawn(async move {
                let mut lines = BufReader::new(stdout).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    info!(node = %id, "stdout: {}", line);
                }
            })
        });

        let stderr_task = child.stderr.take().map(|stderr| {
            let id = self.id.clone();
            tokio::spawn(async move {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    debug!(node = %id, "stderr: {}", line);
                }
            })
        });

        let status = child
            .wait()
            .await
            .with_context(|| format!("waiting for process of node '{}'", self.id))?;

        for task in [stdout_task, stderr_task].into_iter().flatten() {
            let _ = task.await;
        }

        let code = status.code().unwrap_or(-1);
        debug!(
            node = %self.id,
            exit_code = code,
            success = status.success(),
            "node process exited"
        );

        if !status.success() {
            bail!("command `{}` exited with code {}", self.cmd, code);
        }

        Ok(())
    }
}

impl NodeUnit for CommandNode {
    fn execute(&self) -> NodeFuture<'_> {
        Box::pin(self.run())
    }
}
