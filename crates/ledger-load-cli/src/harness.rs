//! Load harness: virtual workers looping scenario iterations until a
//! wall-clock deadline.
//!
//! Each worker is one tokio task bound to one derived organization. The
//! deadline is checked between iterations, so a worker finishes its
//! current iteration before stopping. Workers share the API client, the
//! per-run tag cache, and the check registry; nothing else.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use ledger_load_core::{
    CheckRegistry, CheckReport, CheckSink, RecordsApi, Scenario, TagCache, WorkloadContext,
    WorkloadSettings,
};

/// Runs a scenario across many virtual workers for a fixed duration.
pub struct Harness {
    context: WorkloadContext,
    checks: Arc<CheckRegistry>,
    workers: usize,
    duration: Duration,
}

impl Harness {
    /// Assemble a harness over the given API with a fresh per-run cache
    /// and check registry.
    pub fn new(
        api: Arc<dyn RecordsApi>,
        settings: WorkloadSettings,
        workers: usize,
        duration: Duration,
    ) -> Self {
        let checks = Arc::new(CheckRegistry::new());
        let context = WorkloadContext::new(
            api,
            Arc::new(TagCache::new()),
            Arc::clone(&checks) as Arc<dyn CheckSink>,
            settings,
        );

        Self {
            context,
            checks,
            workers,
            duration,
        }
    }

    /// Run the scenario until the deadline and return the check report.
    pub async fn run(&self, scenario: Scenario) -> CheckReport {
        let run_id = Uuid::new_v4();
        info!(
            %run_id,
            scenario = %scenario,
            workers = self.workers,
            duration_seconds = self.duration.as_secs(),
            "Starting load run"
        );

        let deadline = Instant::now() + self.duration;

        let mut handles = Vec::with_capacity(self.workers);
        for worker_index in 0..self.workers {
            let context = self.context.clone();
            handles.push(tokio::spawn(async move {
                let mut iterations = 0u64;
                while Instant::now() < deadline {
                    context.run_iteration(scenario, worker_index).await;
                    iterations += 1;
                }
                debug!(worker = worker_index, iterations, "Worker finished");
                iterations
            }));
        }

        let mut total_iterations = 0u64;
        for handle in handles {
            match handle.await {
                Ok(iterations) => total_iterations += iterations,
                Err(error) => warn!(error = %error, "Worker task failed"),
            }
        }

        let report = self.checks.report();
        let totals = report.totals();
        info!(
            %run_id,
            total_iterations,
            checks_passed = totals.passed,
            checks_failed = totals.failed,
            "Load run complete"
        );
        report
    }
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
