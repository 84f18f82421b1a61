use std::sync::{Arc, Mutex};

use nodeflow::registry::{NodeFuture, NodeUnit};

/// Shared log of node invocations, in call order.
pub type ExecutionLog = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> ExecutionLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Copy out everything recorded so far.
pub fn logged(log: &ExecutionLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// A fake node unit that:
/// - records its name in the shared log every time it is executed
/// - yields once, so the executor really has to await it
/// - optionally fails with a fixed message.
pub struct RecordingNode {
    name: String,
    log: ExecutionLog,
    fail_with: Option<String>,
}

impl RecordingNode {
    pub fn new(name: &str, log: ExecutionLog) -> Self {
        Self {
            name: name.to_string(),
            log,
            fail_with: None,
        }
    }

    pub fn failing(name: &str, log: ExecutionLog, message: &str) -> Self {
        Self {
            name: name.to_string(),
            log,
            fail_with: Some(message.to_string()),
        }
    }
}

impl NodeUnit for RecordingNode {
    fn execute(&self) -> NodeFuture<'_> {
        Box::pin(async move {
            {
                let mut guard = self.log.lock().unwrap();
                guard.push(self.name.clone());
            }

            tokio::task::yield_now().await;

            match &self.fail_with {
                Some(msg) => Err(anyhow::anyhow!("{}", msg)),
                None => Ok(()),
            }
        })
    }
}
