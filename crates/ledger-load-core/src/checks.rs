//! Pass/fail check recording for workload runs.
//!
//! Every submission and report fetch evaluates a named check (did the
//! create return 201, did the report return 200). Checks are best-effort
//! bookkeeping: recording never fails and never blocks workload progress.
//! The harness renders the aggregated [`CheckReport`] at the end of a run.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Sink for pass/fail check results.
///
/// # Thread Safety
///
/// All methods take `&self` to support `Arc<dyn CheckSink>` sharing across
/// worker tasks. Implementations must be thread-safe.
pub trait CheckSink: Send + Sync {
    /// Record one evaluation of the named check.
    fn record(&self, name: &str, passed: bool);
}

/// Check sink that discards everything. For tests and probes.
pub struct NoOpCheckSink;

impl CheckSink for NoOpCheckSink {
    fn record(&self, _name: &str, _passed: bool) {}
}

/// Pass/fail totals for one named check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckCounts {
    /// Evaluations that passed
    pub passed: u64,

    /// Evaluations that failed
    pub failed: u64,
}

impl CheckCounts {
    /// Total number of evaluations.
    pub fn total(&self) -> u64 {
        self.passed + self.failed
    }

    /// Fraction of evaluations that passed, 1.0 when nothing was recorded.
    pub fn pass_rate(&self) -> f64 {
        if self.total() == 0 {
            1.0
        } else {
            self.passed as f64 / self.total() as f64
        }
    }
}

/// Aggregating check sink shared by all workers of a run.
#[derive(Debug, Default)]
pub struct CheckRegistry {
    counters: Mutex<BTreeMap<String, CheckCounts>>,
}

impl CheckRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the aggregated results.
    pub fn report(&self) -> CheckReport {
        let counters = self
            .counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        CheckReport {
            checks: counters.clone(),
        }
    }
}

impl CheckSink for CheckRegistry {
    fn record(&self, name: &str, passed: bool) {
        // A poisoned lock still holds valid counters; keep counting.
        let mut counters = self
            .counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let counts = counters.entry(name.to_string()).or_default();
        if passed {
            counts.passed += 1;
        } else {
            counts.failed += 1;
        }
    }
}

/// Aggregated check results of one run.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Per-check totals, ordered by check name
    pub checks: BTreeMap<String, CheckCounts>,
}

impl CheckReport {
    /// Check whether any evaluations were recorded at all.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Check whether every recorded evaluation passed.
    pub fn all_passed(&self) -> bool {
        self.checks.values().all(|counts| counts.failed == 0)
    }

    /// Totals across all checks.
    pub fn totals(&self) -> CheckCounts {
        self.checks
            .values()
            .fold(CheckCounts::default(), |acc, counts| CheckCounts {
                passed: acc.passed + counts.passed,
                failed: acc.failed + counts.failed,
            })
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "no checks recorded");
        }
        for (name, counts) in &self.checks {
            writeln!(
                f,
                "{}: {} passed, {} failed ({:.1}%)",
                name,
                counts.passed,
                counts.failed,
                counts.pass_rate() * 100.0
            )?;
        }
        let totals = self.totals();
        writeln!(
            f,
            "total: {} passed, {} failed",
            totals.passed, totals.failed
        )
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
