//! Scheduled refresh on a tokio task.

use std::sync::Arc;
use std::time::Duration;

use aquastress_core::errors::AquaError;
use aquastress_observability::tracing_setup::events;
use tokio::task::{JoinError, JoinHandle};

use crate::cancellation::{Cancellable, CancellationToken};
use crate::monitor::Monitor;

/// Spawns the periodic refresh loop.
pub struct RefreshScheduler;

impl RefreshScheduler {
    /// Start refreshing on the current tokio runtime.
    ///
    /// The first cycle starts immediately; later cycles start `interval`
    /// after the previous one finished. Cycles run on the blocking pool.
    /// The loop stops once `token` is cancelled, including mid-cycle.
    pub fn spawn(
        monitor: Arc<Monitor>,
        interval: Duration,
        token: CancellationToken,
    ) -> RefreshHandle {
        let task = tokio::spawn(refresh_loop(monitor, interval, token.clone()));
        RefreshHandle { token, task }
    }
}

/// Handle to a running refresh loop.
pub struct RefreshHandle {
    token: CancellationToken,
    task: JoinHandle<u64>,
}

impl RefreshHandle {
    /// Request the loop to stop. A cycle in progress finishes its current
    /// location first.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the loop to exit. Returns the number of completed cycles.
    pub async fn join(self) -> Result<u64, JoinError> {
        self.task.await
    }
}

async fn refresh_loop(monitor: Arc<Monitor>, interval: Duration, token: CancellationToken) -> u64 {
    let mut completed = 0u64;

    while !token.is_cancelled() {
        let cycle_monitor = Arc::clone(&monitor);
        let cycle_token = token.clone();
        let outcome =
            tokio::task::spawn_blocking(move || cycle_monitor.run_cycle(&cycle_token)).await;

        match outcome {
            Ok(Ok(report)) => {
                completed += 1;
                tracing::debug!(cycle = report.cycle, errors = report.errors.len(), "cycle done");
            }
            Ok(Err(AquaError::Cancelled)) => break,
            Ok(Err(e)) => tracing::error!(error = %e, "refresh cycle failed"),
            Err(e) => tracing::error!(error = %e, "refresh cycle panicked"),
        }

        tokio::select! {
            _ = token.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    events::refresh_cancelled(completed);
    completed
}
