//! # cfprov - Provider Implementations
//!
//! Adapters implementing the ports defined in `cfprov-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Transport | `BrokerTransport` | Nats, Tokio (in-process) |
//! | Environment | `EnvironmentAdapter` | VcapServices |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! cfprov-providers = { version = "0.1", default-features = false }
//! ```
//!
//! Disabling `transport-nats` leaves only the in-process transport.

// Re-export cfprov-domain types commonly used with providers
pub use cfprov_domain::error::{Error, Result};
pub use cfprov_domain::ports::{BrokerTransport, EnvironmentAdapter};

/// Provider-specific constants
pub mod constants;

/// Broker transport implementations
///
/// Implements `BrokerTransport` for messaging backends.
pub mod transport;

/// Environment adapter implementations
///
/// Implements `EnvironmentAdapter` for service-binding conventions.
pub mod environment;
