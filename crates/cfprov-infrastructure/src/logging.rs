//! Structured logging with tracing
//!
//! Installs the process-wide subscriber: an `EnvFilter` (overridable through
//! `CFPROV_LOG`), a plain or JSON stdout layer, and an optional daily-rolling
//! file layer.

use cfprov_domain::error::{Error, Result};
use std::path::Path;

pub use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_FILTER;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::{Layer, Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// Initialize logging with the provided configuration
///
/// Test processes call this once per test class, so a subscriber that is
/// already installed is left in place and `Ok(())` is returned.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_FILTER).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(config.json_format, std::io::stdout, true)];
    if let Some(path) = &config.file_output {
        let appender = tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| std::ffi::OsStr::new("cfprov")),
        );
        layers.push(fmt_layer(config.json_format, appender, false));
    }

    match Registry::default().with(filter).with(layers).try_init() {
        Ok(()) => info!("Logging initialized with level: {}", level),
        Err(e) => debug!("Logging already initialized: {}", e),
    }
    Ok(())
}

fn fmt_layer<W>(json: bool, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            level
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
