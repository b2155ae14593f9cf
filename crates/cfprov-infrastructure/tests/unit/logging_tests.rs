//! Logging setup tests

use cfprov_infrastructure::config::LoggingConfig;
use cfprov_infrastructure::logging::{init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_log_level_rejects_unknown() {
    let err = parse_log_level("verbose").unwrap_err();
    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_init_logging_is_idempotent() {
    let config = LoggingConfig::default();
    init_logging(&config).expect("first init");
    init_logging(&config).expect("second init is a no-op");
}

#[test]
fn test_init_logging_rejects_bad_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_init_logging_accepts_json_with_file_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = LoggingConfig {
        json_format: true,
        file_output: Some(dir.path().join("cfprov.log")),
        ..LoggingConfig::default()
    };
    init_logging(&config).expect("json stdout and file layers install");
}
