//! HTTP client for the financial-records API.
//!
//! This module provides the main `FinrecClient` for driving the target
//! API's tag, record, and report endpoints. Write endpoints capture the
//! response status and body into an [`ApiResponse`] without raising on
//! unexpected statuses — load scenarios evaluate outcomes themselves.
//! Read endpoints parse typed bodies and report any non-200 status as an
//! [`ApiError`].

mod pagination;
mod retry;

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::error::ApiError;
use crate::types::{CreateRecordRequest, CreateTagRequest, OrganizationId, Tag};

pub use pagination::{Page, PageInfo};
pub use retry::{ReadRetryPolicy, DEFAULT_READ_ATTEMPTS};

/// Configuration for financial-records API client behavior.
///
/// # Examples
///
/// ```
/// use finrec_sdk::client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://records.internal:8080")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL
    pub base_url: String,
    /// User agent string for API requests
    pub user_agent: String,
    /// Request timeout duration
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            user_agent: "ledger-load/0.1.0".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Set the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Captured HTTP response: status code plus full body text.
///
/// Returned by the write endpoints so that callers can check the outcome
/// and log the body on failure without the client deciding what counts as
/// fatal.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    /// Build a response from captured parts.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code of the response.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Raw body text of the response.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Check for 201 Created, the expected status of the create endpoints.
    pub fn is_created(&self) -> bool {
        self.status == StatusCode::CREATED.as_u16()
    }

    /// Check for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(ApiError::from)
    }
}

/// Client for the financial-records API.
///
/// Holds a connection-pooling `reqwest` client; clone-cheap when wrapped
/// in `Arc` by callers that fan out across worker tasks.
///
/// # Examples
///
/// ```no_run
/// # use finrec_sdk::client::{ClientConfig, FinrecClient};
/// # use finrec_sdk::types::OrganizationId;
/// # async fn example() -> Result<(), finrec_sdk::ApiError> {
/// let client = FinrecClient::new(ClientConfig::default())?;
/// let page = client.tags_page(OrganizationId::new(1), 1, 100).await?;
/// println!("{} tags", page.total_items());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FinrecClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl FinrecClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Configuration {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch one page of an organization's tags.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails, the status is not 200, or
    /// the body does not have the expected `{data, pagination}` shape.
    pub async fn tags_page(
        &self,
        org: OrganizationId,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Tag>, ApiError> {
        let url = format!("{}/organizations/{}/tags", self.base_url(), org);

        let response = self
            .http_client
            .get(&url)
            .query(&[("page", page), ("page_size", page_size)])
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status() != StatusCode::OK {
            let status = response.status().as_u16();
            let message = read_body(response).await;
            return Err(ApiError::HttpError { status, message });
        }

        let body = response.text().await.map_err(map_transport_error)?;
        let page = serde_json::from_str::<Page<Tag>>(&body)?;
        debug!(organization = %org, total_items = page.total_items(), "Fetched tag page");
        Ok(page)
    }

    /// Create a tag for an organization.
    ///
    /// Expected success status is 201 with a `{id}` body; any status is
    /// captured and returned rather than raised.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` only for transport failures (network, timeout).
    pub async fn create_tag(
        &self,
        org: OrganizationId,
        request: &CreateTagRequest,
    ) -> Result<ApiResponse, ApiError> {
        let url = format!("{}/organizations/{}/tags", self.base_url(), org);
        self.post_json(&url, request).await
    }

    /// Create a single financial record for an organization.
    ///
    /// Expected success status is 201; any status is captured and returned
    /// rather than raised.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` only for transport failures (network, timeout).
    pub async fn create_record(
        &self,
        org: OrganizationId,
        request: &CreateRecordRequest,
    ) -> Result<ApiResponse, ApiError> {
        let url = format!(
            "{}/organizations/{}/financial-records",
            self.base_url(),
            org
        );
        self.post_json(&url, request).await
    }

    /// Create several financial records in one request via the bulk
    /// endpoint. The body is a bare JSON array of record payloads.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` only for transport failures (network, timeout).
    pub async fn create_records_bulk(
        &self,
        org: OrganizationId,
        requests: &[CreateRecordRequest],
    ) -> Result<ApiResponse, ApiError> {
        let url = format!(
            "{}/organizations/{}/financial-records/bulk",
            self.base_url(),
            org
        );
        self.post_json(&url, &requests).await
    }

    /// Fetch the cash-flow report for an organization.
    ///
    /// The report is consumed for status checking, so like the write
    /// endpoints it returns a captured response rather than a typed body;
    /// use [`ApiResponse::json`] to parse `CashFlowReport` when needed.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` only for transport failures (network, timeout).
    pub async fn cash_flow_report(&self, org: OrganizationId) -> Result<ApiResponse, ApiError> {
        let url = format!(
            "{}/organizations/{}/financial-records/reports/cash-flow",
            self.base_url(),
            org
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        capture(response).await
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    async fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        let response = self
            .http_client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        debug!(url, status = response.status().as_u16(), "POST complete");
        capture(response).await
    }
}

/// Capture status and body of a response, tolerating unreadable bodies.
async fn capture(response: reqwest::Response) -> Result<ApiResponse, ApiError> {
    let status = response.status().as_u16();
    let body = read_body(response).await;
    Ok(ApiResponse::new(status, body))
}

async fn read_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read response body".to_string())
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::HttpClientError(error)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
