//! Scenario entry points invoked once per virtual-worker iteration.
//!
//! Two scenarios drive the target API:
//! - `populate`: ensure the tag fixture, then submit chunked single-record
//!   creates with short pauses between chunks.
//! - `cash-flow`: fetch the cash-flow report, then submit one bulk batch
//!   of records.
//!
//! Workers derive their organization deterministically from their index,
//! so each worker stays on one organization while several workers may
//! share it.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::warn;

use finrec_sdk::client::ReadRetryPolicy;
use finrec_sdk::types::{OrganizationId, Tag};

use crate::api::RecordsApi;
use crate::cache::TagCache;
use crate::checks::CheckSink;
use crate::fixtures::TagFixtureManager;
use crate::payload::build_record;
use crate::query::TagReader;
use crate::submit::RecordSubmitter;

/// Check evaluated for every cash-flow report fetch.
pub const CHECK_REPORT_OK: &str = "cash-flow report: is status 200";

/// Workload scenario selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Tag fixtures plus chunked single-record creation
    Populate,
    /// Report reads plus bulk record creation
    CashFlow,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Populate => write!(f, "populate"),
            Self::CashFlow => write!(f, "cash-flow"),
        }
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "populate" => Ok(Self::Populate),
            "cash-flow" => Ok(Self::CashFlow),
            other => Err(format!(
                "unknown scenario '{}', expected 'populate' or 'cash-flow'",
                other
            )),
        }
    }
}

/// Tunable knobs of the generated workload.
#[derive(Debug, Clone)]
pub struct WorkloadSettings {
    /// Size of the organization pool workers map onto
    pub organizations: u32,

    /// Target tag population per organization
    pub tag_target: u32,

    /// Attempt ceiling for resilient reads
    pub read_attempts: u32,

    /// Chunks of single-record creates per populate iteration
    pub chunk_count: u32,

    /// Records per chunk, issued together and awaited collectively
    pub chunk_size: u32,

    /// Pause after each chunk
    pub chunk_pause: Duration,

    /// Pause at the end of each populate iteration
    pub iteration_pause: Duration,

    /// Records per bulk batch in the cash-flow scenario
    pub bulk_batch_size: u32,
}

impl Default for WorkloadSettings {
    fn default() -> Self {
        Self {
            organizations: 10,
            tag_target: 32,
            read_attempts: 32,
            chunk_count: 4,
            chunk_size: 8,
            chunk_pause: Duration::from_millis(500),
            iteration_pause: Duration::from_secs(1),
            bulk_batch_size: 10,
        }
    }
}

/// Map a worker index onto the organization pool.
///
/// Workers spread across organizations `1..=organizations`; with more
/// workers than organizations several workers share one, racing on the
/// fixture count check. That overshoot is tolerated drift.
pub fn organization_for_worker(worker_index: usize, organizations: u32) -> OrganizationId {
    let pool = organizations.max(1);
    let id = ((worker_index as u32 % pool) + 1).max(1);
    OrganizationId::new(id)
}

/// Shared state and dependencies of one load run.
///
/// Cloned into every worker task; all members are shared handles.
#[derive(Clone)]
pub struct WorkloadContext {
    api: Arc<dyn RecordsApi>,
    cache: Arc<TagCache>,
    checks: Arc<dyn CheckSink>,
    settings: WorkloadSettings,
}

impl WorkloadContext {
    /// Assemble a context from its collaborators.
    pub fn new(
        api: Arc<dyn RecordsApi>,
        cache: Arc<TagCache>,
        checks: Arc<dyn CheckSink>,
        settings: WorkloadSettings,
    ) -> Self {
        Self {
            api,
            cache,
            checks,
            settings,
        }
    }

    /// The workload settings in effect.
    pub fn settings(&self) -> &WorkloadSettings {
        &self.settings
    }

    /// Run one scenario iteration for the given worker.
    pub async fn run_iteration(&self, scenario: Scenario, worker_index: usize) {
        let org = organization_for_worker(worker_index, self.settings.organizations);
        match scenario {
            Scenario::Populate => self.populate_iteration(org).await,
            Scenario::CashFlow => self.cash_flow_iteration(org).await,
        }
    }

    /// One populate iteration: fixture, then chunked record creation.
    pub async fn populate_iteration(&self, org: OrganizationId) {
        let fixture = TagFixtureManager::new(
            self.api.as_ref(),
            self.checks.as_ref(),
            &self.cache,
            self.settings.tag_target,
            self.read_policy(),
        );
        fixture.ensure_tags(org).await;

        let tags = self.tags_for(org).await;
        let submitter = RecordSubmitter::new(self.api.as_ref(), self.checks.as_ref());

        for _ in 0..self.settings.chunk_count {
            let requests: Vec<_> = (0..self.settings.chunk_size)
                .map(|_| build_record(&tags))
                .collect();

            // Issue the whole chunk before awaiting any of it; outcomes
            // are logged and checked by the submitter.
            join_all(
                requests
                    .iter()
                    .map(|request| submitter.create_record(org, request)),
            )
            .await;

            tokio::time::sleep(self.settings.chunk_pause).await;
        }

        tokio::time::sleep(self.settings.iteration_pause).await;
    }

    /// One cash-flow iteration: report fetch, then a bulk batch.
    pub async fn cash_flow_iteration(&self, org: OrganizationId) {
        match self.api.cash_flow_report(org).await {
            Ok(response) => {
                let ok = response.status() == 200;
                self.checks.record(CHECK_REPORT_OK, ok);
                if !ok {
                    warn!(
                        organization = %org,
                        status = response.status(),
                        body = response.body(),
                        "Cash-flow report returned unexpected status"
                    );
                }
            }
            Err(error) => {
                self.checks.record(CHECK_REPORT_OK, false);
                warn!(
                    organization = %org,
                    error = %error,
                    "Cash-flow report request failed"
                );
            }
        }

        let tags = self.tags_for(org).await;
        let requests: Vec<_> = (0..self.settings.bulk_batch_size)
            .map(|_| build_record(&tags))
            .collect();

        let submitter = RecordSubmitter::new(self.api.as_ref(), self.checks.as_ref());
        let _ = submitter.create_records_bulk(org, &requests).await;
    }

    /// The organization's tags, from the per-run cache or a fresh listing.
    async fn tags_for(&self, org: OrganizationId) -> Vec<Tag> {
        if let Some(tags) = self.cache.get(org) {
            return tags;
        }

        let reader = TagReader::new(self.api.as_ref(), self.read_policy());
        let tags = reader.list_tags(org).await;
        self.cache.store(org, tags.clone());
        tags
    }

    fn read_policy(&self) -> ReadRetryPolicy {
        ReadRetryPolicy::new(self.settings.read_attempts)
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
