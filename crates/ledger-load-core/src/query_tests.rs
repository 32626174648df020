//! Tests for the resilient read helpers.

use super::*;
use crate::api::MockRecordsApi;
use finrec_sdk::client::{Page, PageInfo};
use finrec_sdk::error::ApiError;
use finrec_sdk::types::TagId;

fn page_with(tags: Vec<Tag>, total_items: u64) -> Page<Tag> {
    Page {
        data: tags,
        pagination: PageInfo {
            current_page: 1,
            page_size: 100,
            total_items,
            total_pages: 1,
        },
    }
}

fn server_error() -> ApiError {
    ApiError::HttpError {
        status: 500,
        message: "internal".to_string(),
    }
}

fn sample_tags() -> Vec<Tag> {
    vec![
        Tag {
            id: TagId::new(1),
            name: "Red Cat 1".to_string(),
        },
        Tag {
            id: TagId::new(2),
            name: "Blue Dog 2".to_string(),
        },
    ]
}

mod list_tags {
    use super::*;

    #[tokio::test]
    async fn test_first_attempt_success() {
        let mut api = MockRecordsApi::new();
        api.expect_tags_page()
            .times(1)
            .returning(|_, _, _| Ok(page_with(sample_tags(), 2)));

        let reader = TagReader::new(&api, ReadRetryPolicy::default());
        let tags = reader.list_tags(OrganizationId::new(1)).await;
        assert_eq!(tags.len(), 2);
    }

    /// The retry ceiling is inclusive: 31 failures then a valid response
    /// on the 32nd attempt still yields the valid result.
    #[tokio::test]
    async fn test_success_on_final_attempt() {
        let mut api = MockRecordsApi::new();
        api.expect_tags_page()
            .times(31)
            .returning(|_, _, _| Err(server_error()));
        api.expect_tags_page()
            .times(1)
            .returning(|_, _, _| Ok(page_with(sample_tags(), 2)));

        let reader = TagReader::new(&api, ReadRetryPolicy::default());
        let tags = reader.list_tags(OrganizationId::new(1)).await;
        assert_eq!(tags.len(), 2);
    }

    /// Exhausting every attempt degrades to an empty list, not an error.
    #[tokio::test]
    async fn test_exhaustion_returns_empty() {
        let mut api = MockRecordsApi::new();
        api.expect_tags_page()
            .times(32)
            .returning(|_, _, _| Err(server_error()));

        let reader = TagReader::new(&api, ReadRetryPolicy::default());
        let tags = reader.list_tags(OrganizationId::new(1)).await;
        assert!(tags.is_empty());
    }

    /// A smaller policy bounds the number of requests.
    #[tokio::test]
    async fn test_respects_custom_ceiling() {
        let mut api = MockRecordsApi::new();
        api.expect_tags_page()
            .times(3)
            .returning(|_, _, _| Err(server_error()));

        let reader = TagReader::new(&api, ReadRetryPolicy::new(3));
        let tags = reader.list_tags(OrganizationId::new(1)).await;
        assert!(tags.is_empty());
    }
}

mod count_tags {
    use super::*;
    use mockall::predicate::eq;

    /// Counting uses a minimal page and reads the pagination total.
    #[tokio::test]
    async fn test_count_reads_total_items() {
        let mut api = MockRecordsApi::new();
        api.expect_tags_page()
            .with(eq(OrganizationId::new(5)), eq(1), eq(1))
            .times(1)
            .returning(|_, _, _| Ok(page_with(vec![], 17)));

        let reader = TagReader::new(&api, ReadRetryPolicy::default());
        assert_eq!(reader.count_tags(OrganizationId::new(5)).await, 17);
    }

    #[tokio::test]
    async fn test_success_on_final_attempt() {
        let mut api = MockRecordsApi::new();
        api.expect_tags_page()
            .times(31)
            .returning(|_, _, _| Err(server_error()));
        api.expect_tags_page()
            .times(1)
            .returning(|_, _, _| Ok(page_with(vec![], 32)));

        let reader = TagReader::new(&api, ReadRetryPolicy::default());
        assert_eq!(reader.count_tags(OrganizationId::new(1)).await, 32);
    }

    /// Exhausting every attempt degrades to zero, not an error.
    #[tokio::test]
    async fn test_exhaustion_returns_zero() {
        let mut api = MockRecordsApi::new();
        api.expect_tags_page()
            .times(32)
            .returning(|_, _, _| Err(server_error()));

        let reader = TagReader::new(&api, ReadRetryPolicy::default());
        assert_eq!(reader.count_tags(OrganizationId::new(1)).await, 0);
    }
}
