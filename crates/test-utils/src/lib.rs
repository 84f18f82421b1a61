//! Shared fixtures for nodeflow's integration tests.

pub mod builders;
pub mod fake_node;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use nodeflow::logging::LOG_ENV;
use tracing_subscriber::{EnvFilter, fmt};

/// Upper bound for any single awaited run in tests.
pub const RUN_TIMEOUT: Duration = Duration::from_secs(5);

static INIT: Once = Once::new();

/// Install a per-test capturing subscriber once per test binary.
///
/// Directives come from `RUST_LOG`, then `NODEFLOW_LOG`; by default only
/// nodeflow's own debug output is shown. Captured output is printed for
/// failing tests only (or always with `-- --nocapture`).
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
            .unwrap_or_else(|_| EnvFilter::new("warn,nodeflow=debug"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .compact()
            .try_init();
    });
}

/// Await `f`, failing the test if it takes longer than [`RUN_TIMEOUT`].
///
/// A node that never resolves would otherwise hang the sequential executor
/// and the whole test binary with it.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    match tokio::time::timeout(RUN_TIMEOUT, f).await {
        Ok(value) => value,
        Err(_) => panic!("run did not finish within {RUN_TIMEOUT:?}"),
    }
}
