//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `cfprov_domain::constants`,
//! transport and binding defaults in `cfprov_providers::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cfprov.toml";

/// Project-local configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Per-user configuration directory name
pub const USER_CONFIG_DIR: &str = "cfprov";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CFPROV";

/// Separator between nested keys in configuration environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// BROKER CONSTANTS
// ============================================================================

/// Default NATS server URL
pub const DEFAULT_NATS_URL: &str = "nats://127.0.0.1:4222";

/// Default NATS client name
pub const DEFAULT_NATS_CLIENT_NAME: &str = "cfprov";

/// Default connection timeout in milliseconds
pub const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 5_000;

/// Default bound on one broker reply wait in milliseconds (2 minutes)
pub const DEFAULT_REPLY_TIMEOUT_MS: u64 = 120_000;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_FILTER: &str = "CFPROV_LOG";

// ============================================================================
// PROCESS CONSTANTS
// ============================================================================

/// Exit status after Ctrl-C with no provisioning pass to cancel (128 + SIGINT)
pub const INTERRUPT_EXIT_CODE: i32 = 130;
