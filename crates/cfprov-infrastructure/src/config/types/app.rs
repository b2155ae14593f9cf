//! Application configuration root

use serde::{Deserialize, Serialize};

use super::{BrokerConfig, EnvironmentConfig, LoggingConfig, ScannerConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provisioning broker connection
    #[serde(default)]
    pub broker: BrokerConfig,

    /// Capability scanning
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Service binding publication
    #[serde(default)]
    pub environment: EnvironmentConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
