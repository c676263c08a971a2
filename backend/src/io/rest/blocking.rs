//! Storage is synchronous file I/O; handlers move it onto tokio's blocking
//! pool instead of running it on a runtime worker.

use anyhow::{Context, Result};

/// Run `task` on the blocking thread pool and flatten its result
pub async fn run_blocking<T, F>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .context("Storage task did not complete")?
}
