//! Configuration loader tests

use cfprov_application::ScanMode;
use cfprov_infrastructure::config::{
    AppConfig, ConfigBuilder, ConfigLoader, EnvironmentConfig,
};
use cfprov_domain::Error;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

fn loader_for(file: &NamedTempFile, prefix: &str) -> ConfigLoader {
    ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix(prefix)
}

#[test]
fn test_defaults_when_file_is_missing() {
    let config = ConfigLoader::new()
        .with_config_path("/nonexistent/cfprov.toml")
        .with_env_prefix("CFPROV_TEST_DEFAULTS")
        .load()
        .expect("defaults load");

    assert_eq!(config.broker.url, "nats://127.0.0.1:4222");
    assert_eq!(config.broker.request_subject, "cfprov.services.create");
    assert_eq!(config.broker.client_name.as_deref(), Some("cfprov"));
    assert_eq!(config.broker.connection_timeout(), Duration::from_secs(5));
    assert_eq!(config.broker.reply_timeout(), Some(Duration::from_secs(120)));
    assert_eq!(config.scanner.scan_mode(), ScanMode::Lenient);
    assert_eq!(config.environment.variable, "VCAP_SERVICES");
    assert_eq!(config.environment.plan, "free");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_partial_file_overrides_only_named_keys() {
    let file = config_file(
        r#"
[broker]
url = "nats://broker.internal:4222"
reply_timeout_ms = 0

[scanner]
strict = true
"#,
    );

    let config = loader_for(&file, "CFPROV_TEST_PARTIAL")
        .load()
        .expect("config loads");

    assert_eq!(config.broker.url, "nats://broker.internal:4222");
    assert_eq!(config.broker.reply_timeout(), None);
    assert_eq!(config.broker.request_subject, "cfprov.services.create");
    assert_eq!(config.scanner.scan_mode(), ScanMode::Strict);
    assert_eq!(config.environment.variable, "VCAP_SERVICES");
}

#[test]
fn test_environment_overrides_file() {
    let file = config_file(
        r#"
[environment]
plan = "from-file"
"#,
    );
    std::env::set_var("CFPROV_TEST_ENV_ENVIRONMENT__PLAN", "from-env");
    std::env::set_var("CFPROV_TEST_ENV_BROKER__REQUEST_SUBJECT", "services.create.ci");

    let config = loader_for(&file, "CFPROV_TEST_ENV").load().expect("config loads");

    assert_eq!(config.environment.plan, "from-env");
    assert_eq!(config.broker.request_subject, "services.create.ci");

    std::env::remove_var("CFPROV_TEST_ENV_ENVIRONMENT__PLAN");
    std::env::remove_var("CFPROV_TEST_ENV_BROKER__REQUEST_SUBJECT");
}

#[test]
fn test_empty_broker_url_is_rejected() {
    let file = config_file(
        r#"
[broker]
url = ""
"#,
    );

    let err = loader_for(&file, "CFPROV_TEST_EMPTY_URL").load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }), "got {err:?}");
    assert!(err.to_string().contains("Broker URL"));
}

#[test]
fn test_zero_connection_timeout_is_rejected() {
    let file = config_file(
        r#"
[broker]
connection_timeout_ms = 0
"#,
    );

    let err = loader_for(&file, "CFPROV_TEST_ZERO_TIMEOUT").load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }), "got {err:?}");
}

#[test]
fn test_malformed_value_is_a_configuration_error() {
    let file = config_file(
        r#"
[broker]
reply_timeout_ms = "soon"
"#,
    );

    let err = loader_for(&file, "CFPROV_TEST_MALFORMED").load().unwrap_err();
    match err {
        Error::Configuration { source, .. } => assert!(source.is_some()),
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_saved_config_loads_back() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cfprov.toml");

    let mut config = AppConfig::default();
    config.broker.url = "nats://saved:4222".to_string();
    config.scanner.strict = true;

    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("CFPROV_TEST_SAVED");
    loader.save_to_file(&config, &path).expect("save config");

    let loaded = loader.load().expect("load saved config");
    assert_eq!(loaded.broker.url, "nats://saved:4222");
    assert!(loaded.scanner.strict);
}

#[test]
fn test_builder_validates() {
    let err = ConfigBuilder::new()
        .with_environment(EnvironmentConfig {
            variable: " ".to_string(),
            plan: "free".to_string(),
        })
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));

    let config = ConfigBuilder::new().build().expect("defaults are valid");
    assert_eq!(config.environment.variable, "VCAP_SERVICES");
}
