// Retry policy for read operations

use serde::{Deserialize, Serialize};

/// Default number of attempts for read operations.
pub const DEFAULT_READ_ATTEMPTS: u32 = 32;

/// Bounded retry policy for read operations.
///
/// Reads against the target API retry immediately on failure — no backoff
/// delay — up to a fixed attempt ceiling, then degrade to a safe default
/// instead of erroring. The ceiling is inclusive: a response that first
/// becomes valid on the final attempt is still used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadRetryPolicy {
    /// Maximum number of attempts, including the first request
    pub max_attempts: u32,
}

impl Default for ReadRetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_READ_ATTEMPTS,
        }
    }
}

impl ReadRetryPolicy {
    /// Create a policy with a custom attempt ceiling.
    ///
    /// A ceiling of zero would never issue a request; it is clamped to one.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    /// Check if another attempt should be made after `attempts_made`
    /// failed attempts.
    pub fn should_retry(&self, attempts_made: u32) -> bool {
        attempts_made < self.max_attempts
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
