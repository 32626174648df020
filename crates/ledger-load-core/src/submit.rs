//! Submission of tags and financial records.
//!
//! Writes have no retry: the expected success status is 201, anything else
//! is logged with its body, recorded as a failed check, and handed back to
//! the caller unchanged. A failed creation degrades the workload data; it
//! never halts the run.

use tracing::warn;

use finrec_sdk::client::ApiResponse;
use finrec_sdk::error::ApiError;
use finrec_sdk::types::{CreateRecordRequest, CreateTagRequest, OrganizationId};

use crate::api::RecordsApi;
use crate::checks::CheckSink;

/// Check evaluated for every tag creation.
pub const CHECK_TAG_CREATED: &str = "tag create: is status 201";

/// Check evaluated for every single-record creation.
pub const CHECK_RECORD_CREATED: &str = "record create: is status 201";

/// Check evaluated for every bulk-record creation.
pub const CHECK_BULK_CREATED: &str = "bulk create: is status 201";

/// Write-side client: submits create requests and records their outcome.
pub struct RecordSubmitter<'a> {
    api: &'a dyn RecordsApi,
    checks: &'a dyn CheckSink,
}

impl<'a> RecordSubmitter<'a> {
    /// Create a submitter recording outcomes into the given sink.
    pub fn new(api: &'a dyn RecordsApi, checks: &'a dyn CheckSink) -> Self {
        Self { api, checks }
    }

    /// Create a tag.
    ///
    /// The response is returned as-is so callers can extract the assigned
    /// id from a 201 body; unexpected statuses and transport failures are
    /// logged and checked but not escalated.
    pub async fn create_tag(
        &self,
        org: OrganizationId,
        request: &CreateTagRequest,
    ) -> Result<ApiResponse, ApiError> {
        let outcome = self.api.create_tag(org, request).await;
        self.evaluate(org, CHECK_TAG_CREATED, outcome)
    }

    /// Create a single financial record.
    pub async fn create_record(
        &self,
        org: OrganizationId,
        request: &CreateRecordRequest,
    ) -> Result<ApiResponse, ApiError> {
        let outcome = self.api.create_record(org, request).await;
        self.evaluate(org, CHECK_RECORD_CREATED, outcome)
    }

    /// Create a batch of financial records through the bulk endpoint.
    pub async fn create_records_bulk(
        &self,
        org: OrganizationId,
        requests: &[CreateRecordRequest],
    ) -> Result<ApiResponse, ApiError> {
        let outcome = self.api.create_records_bulk(org, requests).await;
        self.evaluate(org, CHECK_BULK_CREATED, outcome)
    }

    fn evaluate(
        &self,
        org: OrganizationId,
        check: &str,
        outcome: Result<ApiResponse, ApiError>,
    ) -> Result<ApiResponse, ApiError> {
        match &outcome {
            Ok(response) => {
                let created = response.is_created();
                self.checks.record(check, created);
                if !created {
                    warn!(
                        organization = %org,
                        status = response.status(),
                        body = response.body(),
                        check,
                        "Create returned unexpected status"
                    );
                }
            }
            Err(error) => {
                self.checks.record(check, false);
                warn!(
                    organization = %org,
                    error = %error,
                    check,
                    "Create request failed"
                );
            }
        }
        outcome
    }
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
