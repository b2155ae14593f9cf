//! Configuration management
//!
//! Loading and validation of the provisioning configuration from defaults,
//! a TOML file and `CFPROV_` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
