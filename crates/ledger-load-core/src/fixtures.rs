//! Tag fixture management.
//!
//! Before records can reference tags, each organization needs a tag
//! population. The fixture manager converges an organization toward a
//! configurable target count: check the count, create one tag if short,
//! re-check. Concurrent workers assigned to the same organization may race
//! on the count check and overshoot the target; that drift is expected and
//! tolerated.

use tracing::{debug, warn};

use finrec_sdk::client::ReadRetryPolicy;
use finrec_sdk::types::{CreateTagRequest, OrganizationId};

use crate::api::RecordsApi;
use crate::cache::TagCache;
use crate::checks::CheckSink;
use crate::payload::random_tag_name;
use crate::query::TagReader;
use crate::submit::RecordSubmitter;

/// Ensures an organization carries its target population of tags.
pub struct TagFixtureManager<'a> {
    api: &'a dyn RecordsApi,
    checks: &'a dyn CheckSink,
    cache: &'a TagCache,
    tag_target: u32,
    read_policy: ReadRetryPolicy,
}

impl<'a> TagFixtureManager<'a> {
    /// Create a fixture manager for the given target tag count.
    pub fn new(
        api: &'a dyn RecordsApi,
        checks: &'a dyn CheckSink,
        cache: &'a TagCache,
        tag_target: u32,
        read_policy: ReadRetryPolicy,
    ) -> Self {
        Self {
            api,
            checks,
            cache,
            tag_target,
            read_policy,
        }
    }

    /// Bring the organization's tag count up to the target.
    ///
    /// Each loop iteration re-reads the current count and creates at most
    /// one tag, so the loop is bounded by the target itself: a fresh
    /// organization takes exactly `tag_target` creations, a populated one
    /// takes none. A failed creation does not advance progress; the next
    /// count check re-evaluates the shortfall. Invalid (zero)
    /// organization ids short-circuit with a warning.
    ///
    /// The per-run tag cache is invalidated when any tag was created, so
    /// later listings observe the new population.
    pub async fn ensure_tags(&self, org: OrganizationId) {
        if org.as_u32() == 0 {
            warn!(organization = %org, "Ignoring invalid organization id");
            return;
        }

        let reader = TagReader::new(self.api, self.read_policy);
        let submitter = RecordSubmitter::new(self.api, self.checks);

        let mut created = 0u32;
        for _ in 0..self.tag_target {
            let count = reader.count_tags(org).await;
            if count >= u64::from(self.tag_target) {
                break;
            }

            let request = CreateTagRequest::new(random_tag_name());
            if let Ok(response) = submitter.create_tag(org, &request).await {
                if response.is_created() {
                    created += 1;
                }
            }
            // Failures were logged and checked by the submitter; the next
            // count check decides whether another attempt is needed.
        }

        if created > 0 {
            debug!(organization = %org, created, "Created fixture tags");
            self.cache.invalidate(org);
        }
    }
}

#[cfg(test)]
#[path = "fixtures_tests.rs"]
mod tests;
