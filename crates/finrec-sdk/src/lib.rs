//! # Financial-Records SDK
//!
//! Typed client for the financial-records HTTP API targeted by the
//! ledger-load workload generator.
//!
//! This SDK provides:
//! - A `reqwest`-backed client with one method per API endpoint
//! - Paginated response types matching the API's list envelope
//! - A bounded retry policy for read operations
//! - Error classification for transient-failure handling
//!
//! Write endpoints (tag and record creation) return a captured
//! [`client::ApiResponse`] rather than raising on unexpected statuses, so
//! that load scenarios can evaluate the outcome themselves. Read endpoints
//! return typed results and report any non-200 status as an error.
//!
//! # Examples
//!
//! ```rust,no_run
//! use finrec_sdk::client::{ClientConfig, FinrecClient};
//! use finrec_sdk::types::{CreateTagRequest, OrganizationId};
//!
//! # async fn example() -> Result<(), finrec_sdk::ApiError> {
//! let config = ClientConfig::default().with_base_url("http://localhost:8080");
//! let client = FinrecClient::new(config)?;
//!
//! let org = OrganizationId::new(1);
//! let response = client
//!     .create_tag(org, &CreateTagRequest::new("Red Fox 17"))
//!     .await?;
//!
//! if response.is_created() {
//!     println!("tag created");
//! }
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::ApiError;

pub use client::{
    ApiResponse, ClientConfig, FinrecClient, Page, PageInfo, ReadRetryPolicy,
    DEFAULT_READ_ATTEMPTS,
};

pub use types::{
    CashFlowReport, CreateRecordRequest, CreateTagRequest, CreatedTag, Direction, MonthlyCashFlow,
    OrganizationId, Tag, TagId, TagRef,
};
