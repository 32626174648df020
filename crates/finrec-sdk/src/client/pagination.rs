// Pagination support for the financial-records API

use serde::{Deserialize, Serialize};

/// Paginated response envelope.
///
/// List endpoints return their items under `data` together with pagination
/// metadata. The workload generator relies on `pagination.total_items` as
/// the authoritative count of a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in this page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PageInfo,
}

/// Pagination metadata returned alongside each list page.
///
/// Only `total_items` is required; a response lacking it does not have the
/// expected shape and is rejected at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    /// Page number of this response (1-based)
    #[serde(default = "PageInfo::first_page")]
    pub current_page: u64,

    /// Requested page size
    #[serde(default)]
    pub page_size: u64,

    /// Total items in the collection across all pages
    pub total_items: u64,

    /// Total number of pages
    #[serde(default)]
    pub total_pages: u64,
}

impl PageInfo {
    fn first_page() -> u64 {
        1
    }

    /// Check if pages beyond the current one exist.
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}

impl<T> Page<T> {
    /// Total items in the collection, from the pagination metadata.
    pub fn total_items(&self) -> u64 {
        self.pagination.total_items
    }

    /// Check if this is the last page.
    pub fn is_last_page(&self) -> bool {
        !self.pagination.has_more()
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
