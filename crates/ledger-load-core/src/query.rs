//! Resilient read helpers for tag listing and counting.
//!
//! Reads retry immediately on any failure — transport error, unexpected
//! status, or malformed body — up to the policy's attempt ceiling, then
//! degrade to a safe default (empty list, zero count) instead of surfacing
//! an error. A degraded read means a degraded workload (records without
//! tags), never a stopped run.

use tracing::warn;

use finrec_sdk::client::ReadRetryPolicy;
use finrec_sdk::types::{OrganizationId, Tag};

use crate::api::RecordsApi;

/// Page size used when listing an organization's full tag population.
///
/// Large enough to cover the fixture target in a single request.
const LIST_PAGE_SIZE: u32 = 100;

/// Bounded-retry reader over the tag endpoints.
pub struct TagReader<'a> {
    api: &'a dyn RecordsApi,
    policy: ReadRetryPolicy,
}

impl<'a> TagReader<'a> {
    /// Create a reader over the given API with the given retry policy.
    pub fn new(api: &'a dyn RecordsApi, policy: ReadRetryPolicy) -> Self {
        Self { api, policy }
    }

    /// List an organization's tags.
    ///
    /// Never fails: after exhausting the retry ceiling the result is an
    /// empty list.
    pub async fn list_tags(&self, org: OrganizationId) -> Vec<Tag> {
        let mut attempts = 0;
        while self.policy.should_retry(attempts) {
            attempts += 1;
            match self.api.tags_page(org, 1, LIST_PAGE_SIZE).await {
                Ok(page) => return page.data,
                Err(error) => {
                    warn!(
                        organization = %org,
                        attempt = attempts,
                        error = %error,
                        "Tag listing attempt failed"
                    );
                }
            }
        }

        warn!(
            organization = %org,
            attempts,
            "Tag listing exhausted all attempts; using empty tag set"
        );
        Vec::new()
    }

    /// Count an organization's tags via the list endpoint's pagination
    /// metadata.
    ///
    /// Never fails: after exhausting the retry ceiling the result is zero.
    pub async fn count_tags(&self, org: OrganizationId) -> u64 {
        let mut attempts = 0;
        while self.policy.should_retry(attempts) {
            attempts += 1;
            // The API has no dedicated count operation; a minimal page
            // carries the total in its pagination metadata.
            match self.api.tags_page(org, 1, 1).await {
                Ok(page) => return page.total_items(),
                Err(error) => {
                    warn!(
                        organization = %org,
                        attempt = attempts,
                        error = %error,
                        "Tag count attempt failed"
                    );
                }
            }
        }

        warn!(
            organization = %org,
            attempts,
            "Tag count exhausted all attempts; assuming zero tags"
        );
        0
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
