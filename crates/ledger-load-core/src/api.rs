//! API seam between the workload generator and the financial-records
//! client.
//!
//! The generator depends on this trait rather than on `FinrecClient`
//! directly, so unit tests can script endpoint behavior (count
//! progressions, failing reads) without a network.

use async_trait::async_trait;

use finrec_sdk::client::{ApiResponse, Page};
use finrec_sdk::error::ApiError;
use finrec_sdk::types::{CreateRecordRequest, CreateTagRequest, OrganizationId, Tag};
use finrec_sdk::FinrecClient;

/// The financial-records API surface consumed by the generator.
///
/// One method per endpoint; semantics match [`FinrecClient`]: reads return
/// typed results and error on non-200, writes capture any status into an
/// [`ApiResponse`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordsApi: Send + Sync {
    /// Fetch one page of an organization's tags.
    async fn tags_page(
        &self,
        org: OrganizationId,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Tag>, ApiError>;

    /// Create a tag for an organization.
    async fn create_tag(
        &self,
        org: OrganizationId,
        request: &CreateTagRequest,
    ) -> Result<ApiResponse, ApiError>;

    /// Create a single financial record.
    async fn create_record(
        &self,
        org: OrganizationId,
        request: &CreateRecordRequest,
    ) -> Result<ApiResponse, ApiError>;

    /// Create several financial records through the bulk endpoint.
    async fn create_records_bulk(
        &self,
        org: OrganizationId,
        requests: &[CreateRecordRequest],
    ) -> Result<ApiResponse, ApiError>;

    /// Fetch the cash-flow report.
    async fn cash_flow_report(&self, org: OrganizationId) -> Result<ApiResponse, ApiError>;
}

#[async_trait]
impl RecordsApi for FinrecClient {
    async fn tags_page(
        &self,
        org: OrganizationId,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Tag>, ApiError> {
        FinrecClient::tags_page(self, org, page, page_size).await
    }

    async fn create_tag(
        &self,
        org: OrganizationId,
        request: &CreateTagRequest,
    ) -> Result<ApiResponse, ApiError> {
        FinrecClient::create_tag(self, org, request).await
    }

    async fn create_record(
        &self,
        org: OrganizationId,
        request: &CreateRecordRequest,
    ) -> Result<ApiResponse, ApiError> {
        FinrecClient::create_record(self, org, request).await
    }

    async fn create_records_bulk(
        &self,
        org: OrganizationId,
        requests: &[CreateRecordRequest],
    ) -> Result<ApiResponse, ApiError> {
        FinrecClient::create_records_bulk(self, org, requests).await
    }

    async fn cash_flow_report(&self, org: OrganizationId) -> Result<ApiResponse, ApiError> {
        FinrecClient::cash_flow_report(self, org).await
    }
}
