//! Tests for API error classification.

use super::*;

mod transience {
    use super::*;

    /// Verify that server errors are classified as transient.
    #[test]
    fn test_server_error_is_transient() {
        let error = ApiError::HttpError {
            status: 503,
            message: "service unavailable".to_string(),
        };
        assert!(error.is_transient());
    }

    /// Verify that rate limiting is classified as transient.
    #[test]
    fn test_rate_limit_is_transient() {
        let error = ApiError::HttpError {
            status: 429,
            message: "too many requests".to_string(),
        };
        assert!(error.is_transient());
    }

    /// Verify that client errors other than 429 are not transient.
    #[test]
    fn test_client_error_is_not_transient() {
        for status in [400, 401, 403, 404, 422] {
            let error = ApiError::HttpError {
                status,
                message: "client error".to_string(),
            };
            assert!(!error.is_transient(), "status {} must not retry", status);
        }
    }

    /// Verify that timeouts are transient.
    #[test]
    fn test_timeout_is_transient() {
        assert!(ApiError::Timeout.is_transient());
    }

    /// Verify that malformed JSON is not transient.
    ///
    /// A body that does not parse will not parse on the next attempt either;
    /// the read helper still counts it as a failed attempt and re-requests,
    /// but nothing in the error itself suggests retrying the parse.
    #[test]
    fn test_json_error_is_not_transient() {
        let parse_failure = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = ApiError::from(parse_failure);
        assert!(!error.is_transient());
    }

    /// Verify that configuration errors are not transient.
    #[test]
    fn test_configuration_error_is_not_transient() {
        let error = ApiError::Configuration {
            message: "bad base url".to_string(),
        };
        assert!(!error.is_transient());
    }
}

mod display {
    use super::*;

    /// Verify that HTTP errors include status and message.
    #[test]
    fn test_http_error_display() {
        let error = ApiError::HttpError {
            status: 500,
            message: "internal".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP error: 500 - internal");
    }

    #[test]
    fn test_timeout_display() {
        assert_eq!(ApiError::Timeout.to_string(), "Request timeout");
    }
}
