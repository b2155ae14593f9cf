//! Application Layer - cfprov
//!
//! Orchestrates one provisioning pass for a test class:
//!
//! ```text
//! CapabilityScanner ──► CredentialAggregator ──► EnvironmentAdapter
//!                            │
//!                            └─► ProvisioningClient (one call per kind)
//! ```
//!
//! ## Use Cases
//!
//! - [`CapabilityScanner`]: test class markers to service kinds
//! - [`ProvisioningClient`]: one create-service round trip over a shared transport
//! - [`CredentialAggregator`]: all-or-nothing provisioning of a set of kinds
//! - [`ServiceProvisioner`]: scan, provision, and apply in one pass
//!
//! ## Dependencies
//!
//! This crate depends only on `cfprov-domain` and pure async libraries.
//! Transports and environment adapters arrive as port trait objects.

pub mod use_cases;

pub use use_cases::*;
