//! Tests for configuration loading and validation.

use super::*;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

mod defaults {
    use super::*;

    /// An unconfigured environment yields the documented defaults.
    #[test]
    fn test_default_values() {
        let config = LoadConfig::default();

        assert_eq!(config.target.base_url, "http://localhost:8080");
        assert_eq!(config.target.request_timeout_seconds, 30);
        assert_eq!(config.workload.workers, 100);
        assert_eq!(config.workload.duration_seconds, 15);
        assert_eq!(config.workload.organizations, 10);
        assert_eq!(config.workload.tag_target, 32);
        assert_eq!(config.workload.read_attempts, 32);
        assert_eq!(config.workload.chunk_count, 4);
        assert_eq!(config.workload.chunk_size, 8);
        assert_eq!(config.workload.bulk_batch_size, 10);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json_format);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(LoadConfig::default().validate().is_ok());
    }
}

mod file_loading {
    use super::*;

    /// An explicit file overrides defaults; unspecified fields keep theirs.
    #[test]
    fn test_explicit_file_overrides() {
        let file = write_config(
            r#"
            [target]
            base_url = "http://records.internal:9090"

            [workload]
            workers = 5
            tag_target = 8
            "#,
        );

        let config = LoadConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.target.base_url, "http://records.internal:9090");
        assert_eq!(config.workload.workers, 5);
        assert_eq!(config.workload.tag_target, 8);
        // Untouched fields keep their defaults.
        assert_eq!(config.workload.duration_seconds, 15);
    }

    /// A missing explicit file is a hard error.
    #[test]
    fn test_missing_explicit_file() {
        let result = LoadConfig::load(Some(std::path::Path::new(
            "/nonexistent/ledger-load.toml",
        )));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    /// A malformed file is a hard error.
    #[test]
    fn test_malformed_file() {
        let file = write_config("workers = [not toml");
        assert!(LoadConfig::load(Some(file.path())).is_err());
    }

    /// A value of the wrong type is a hard error, not a silent default.
    #[test]
    fn test_wrongly_typed_value() {
        let file = write_config(
            r#"
            [workload]
            workers = "many"
            "#,
        );
        assert!(LoadConfig::load(Some(file.path())).is_err());
    }
}

mod validation {
    use super::*;

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = LoadConfig::default();
        config.workload.workers = 0;

        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("workload.workers"));
    }

    #[test]
    fn test_zero_tag_target_rejected() {
        let mut config = LoadConfig::default();
        config.workload.tag_target = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unparseable_base_url_rejected() {
        let mut config = LoadConfig::default();
        config.target.base_url = "not a url".to_string();

        let error = config.validate().unwrap_err();
        assert!(matches!(error, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = LoadConfig::default();
        config.target.base_url = "ftp://records:21".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_https_accepted() {
        let mut config = LoadConfig::default();
        config.target.base_url = "https://records.example.com".to_string();
        assert!(config.validate().is_ok());
    }
}

mod conversions {
    use super::*;

    /// Workload settings carry the configured values into the core.
    #[test]
    fn test_workload_settings() {
        let mut config = LoadConfig::default();
        config.workload.tag_target = 16;
        config.workload.chunk_pause_millis = 250;

        let settings = config.workload_settings();
        assert_eq!(settings.tag_target, 16);
        assert_eq!(settings.chunk_pause, Duration::from_millis(250));
        assert_eq!(settings.iteration_pause, Duration::from_millis(1000));
    }

    #[test]
    fn test_client_config() {
        let mut config = LoadConfig::default();
        config.target.base_url = "http://records:8081".to_string();
        config.target.request_timeout_seconds = 5;

        let client_config = config.client_config();
        assert_eq!(client_config.base_url, "http://records:8081");
        assert_eq!(client_config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_duration() {
        let mut config = LoadConfig::default();
        config.workload.duration_seconds = 60;
        assert_eq!(config.duration(), Duration::from_secs(60));
    }
}
