//! # Ledger-Load Core
//!
//! Synthetic workload generation against a financial-records HTTP API.
//!
//! The generator is composed of four cooperating responsibilities:
//! - **Tag fixture management** ([`fixtures`]): ensure each organization
//!   carries a target population of tags, creating the shortfall lazily.
//! - **Payload synthesis** ([`payload`]): randomized financial-record
//!   payloads with randomized tag associations.
//! - **Submission** ([`submit`]): create-tag and create-record calls whose
//!   outcomes are recorded as pass/fail checks but never abort a run.
//! - **Resilient queries** ([`query`]): tag listing and counting with
//!   bounded immediate retries, degrading to safe defaults.
//!
//! [`scenario`] ties these together into per-iteration entry points that a
//! load harness invokes once per virtual worker iteration. All external I/O
//! goes through the [`api::RecordsApi`] seam so the generator can be driven
//! against a mock in tests.
//!
//! Nothing in this crate is fatal: transport failures, unexpected statuses,
//! and malformed bodies degrade the generated fixture data rather than
//! stopping the run.

// Public modules

/// API seam over the financial-records client
pub mod api;

/// Per-run tag cache keyed by organization
pub mod cache;

/// Pass/fail check recording
pub mod checks;

/// Tag fixture management
pub mod fixtures;

/// Randomized payload synthesis
pub mod payload;

/// Resilient read helpers
pub mod query;

/// Scenario entry points and worker assignment
pub mod scenario;

/// Create-tag and create-record submission
pub mod submit;

// Re-export key types for convenience
pub use api::RecordsApi;
pub use cache::TagCache;
pub use checks::{CheckCounts, CheckRegistry, CheckReport, CheckSink, NoOpCheckSink};
pub use fixtures::TagFixtureManager;
pub use payload::{build_record, random_subset, random_tag_name, MAX_TAGS_PER_RECORD};
pub use query::TagReader;
pub use scenario::{organization_for_worker, Scenario, WorkloadContext, WorkloadSettings};
pub use submit::RecordSubmitter;

// Re-export the SDK types that appear throughout the public surface
pub use finrec_sdk::{ApiError, OrganizationId, ReadRetryPolicy, Tag, TagId};
