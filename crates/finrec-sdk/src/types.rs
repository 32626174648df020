//! Domain types for the financial-records API.
//!
//! Request and response shapes mirror the wire format of the target
//! service: camelCase field names (`dueDate`), `IN`/`OUT` direction
//! strings, and tag references as `{"id": N}` objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for an organization that owns tags and financial records.
///
/// Organizations are assumed to pre-exist on the server; the workload
/// generator never creates them. Worker tasks derive their organization
/// from their worker index, so ids are small positive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganizationId(u32);

impl OrganizationId {
    /// Create an organization id.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric value of the id.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-assigned identifier for a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagId(u64);

impl TagId {
    /// Create a tag id from its numeric value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value of the id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a financial record: money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    In,
    Out,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => write!(f, "IN"),
            Self::Out => write!(f, "OUT"),
        }
    }
}

/// A tag belonging to one organization.
///
/// The list endpoint serializes the server-side model, which exposes the
/// primary key as `ID`; the create endpoint responds with lowercase `id`.
/// Both spellings are accepted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Server-assigned identifier
    #[serde(alias = "ID")]
    pub id: TagId,

    /// Generated display name, e.g. `"Red Fox 17"`
    pub name: String,
}

/// Request body for creating a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTagRequest {
    /// Tag display name; must be non-empty
    pub name: String,
}

impl CreateTagRequest {
    /// Create a tag-creation request.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Response body of a successful tag creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedTag {
    /// Identifier assigned by the server
    #[serde(alias = "ID")]
    pub id: TagId,
}

/// Reference to an existing tag, attached to a record as `{"id": N}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub id: TagId,
}

impl From<&Tag> for TagRef {
    fn from(tag: &Tag) -> Self {
        Self { id: tag.id }
    }
}

/// Request body for creating a financial record.
///
/// Used both for the single-record endpoint and, as an array element, for
/// the bulk endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    /// Whether the amount flows in or out
    pub direction: Direction,

    /// Monetary amount, a positive integer
    pub amount: u32,

    /// When the record falls due, ISO-8601
    #[serde(rename = "dueDate")]
    pub due_date: DateTime<Utc>,

    /// Zero or more references to existing tags of the same organization
    pub tags: Vec<TagRef>,
}

/// Aggregated cash-flow report for one organization.
///
/// Consumed by the cash-flow scenario for status checking only; parsing is
/// lenient so report-shape drift does not fail a load run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowReport {
    #[serde(rename = "monthlyData", default)]
    pub monthly_data: Vec<MonthlyCashFlow>,
}

/// One month of aggregated in/out totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyCashFlow {
    pub year: i32,
    pub month: u32,

    /// Total of `IN` records for the month
    #[serde(rename = "in")]
    pub inflow: f64,

    /// Total of `OUT` records for the month
    #[serde(rename = "out")]
    pub outflow: f64,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
