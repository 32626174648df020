//! Per-run tag cache keyed by organization.
//!
//! One `TagCache` is created per load run and passed explicitly through
//! the scenario call graph; there is no ambient module-level state. Worker
//! tasks sharing an organization also share its cached tag list, which is
//! refreshed whenever the fixture manager creates new tags.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use finrec_sdk::types::{OrganizationId, Tag};

/// Thread-safe cache of each organization's known tags.
///
/// Entries hold whatever the last successful listing returned; staleness
/// is acceptable because records may reference any id the server has ever
/// handed out for the organization.
#[derive(Debug, Default)]
pub struct TagCache {
    entries: RwLock<HashMap<OrganizationId, Vec<Tag>>>,
}

impl TagCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached tags for an organization, if any.
    pub fn get(&self, org: OrganizationId) -> Option<Vec<Tag>> {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        entries.get(&org).cloned()
    }

    /// Store the tags for an organization, replacing any previous entry.
    pub fn store(&self, org: OrganizationId, tags: Vec<Tag>) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(org, tags);
    }

    /// Drop the cached entry for an organization, forcing the next read
    /// to list tags again.
    pub fn invalidate(&self, org: OrganizationId) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.remove(&org);
    }

    /// Number of organizations with a cached entry.
    pub fn organizations(&self) -> usize {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        entries.len()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
