//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the provisioning core.
//!
//! ## Module Categories
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`bootstrap`] | Builds a `ServiceProvisioner` from configuration |
//! | [`constants`] | Centralized configuration constants |
//! | [`interrupt`] | Process-wide Ctrl-C handling for provisioning passes |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context extension for foreign errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod interrupt;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
