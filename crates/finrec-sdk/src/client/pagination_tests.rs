//! Tests for pagination envelope parsing.

use super::*;
use crate::types::{Tag, TagId};

mod page_parsing {
    use super::*;

    /// Verify a full list response parses, including server-side metadata.
    #[test]
    fn test_parse_list_response() {
        let page: Page<Tag> = serde_json::from_str(
            r#"{
                "data": [
                    {"ID": 1, "name": "Red Cat 1"},
                    {"ID": 2, "name": "Blue Dog 2"}
                ],
                "pagination": {
                    "current_page": 1,
                    "page_size": 20,
                    "total_items": 32,
                    "total_pages": 2
                }
            }"#,
        )
        .unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].id, TagId::new(1));
        assert_eq!(page.total_items(), 32);
        assert!(!page.is_last_page());
    }

    /// `total_items` is the one required metadata field.
    #[test]
    fn test_missing_total_items_is_rejected() {
        let result: Result<Page<Tag>, _> = serde_json::from_str(
            r#"{"data": [], "pagination": {"current_page": 1, "page_size": 20}}"#,
        );
        assert!(result.is_err());
    }

    /// A body whose `data` is not a sequence does not have the expected shape.
    #[test]
    fn test_non_sequence_data_is_rejected() {
        let result: Result<Page<Tag>, _> = serde_json::from_str(
            r#"{"data": "oops", "pagination": {"total_items": 0}}"#,
        );
        assert!(result.is_err());
    }

    /// Optional metadata fields default rather than failing the parse.
    #[test]
    fn test_sparse_pagination_metadata() {
        let page: Page<Tag> =
            serde_json::from_str(r#"{"data": [], "pagination": {"total_items": 5}}"#).unwrap();

        assert_eq!(page.pagination.current_page, 1);
        assert_eq!(page.pagination.page_size, 0);
        assert_eq!(page.total_items(), 5);
        assert!(page.is_last_page());
    }
}

mod page_info {
    use super::*;

    #[test]
    fn test_has_more() {
        let info = PageInfo {
            current_page: 1,
            page_size: 20,
            total_items: 50,
            total_pages: 3,
        };
        assert!(info.has_more());

        let last = PageInfo {
            current_page: 3,
            ..info
        };
        assert!(!last.has_more());
    }
}
