//! Environment Adapter Implementations
//!
//! | Adapter | Description |
//! |---------|-------------|
//! | VcapServicesAdapter | Cloud Foundry `VCAP_SERVICES` JSON document |
//!
//! Adapters write through an [`EnvWriter`]: [`ProcessEnvWriter`] for the
//! real process environment, [`InMemoryEnvWriter`] for tests.

pub mod vcap;
pub mod writer;

pub use vcap::VcapServicesAdapter;
pub use writer::{EnvWriter, InMemoryEnvWriter, ProcessEnvWriter};

// Re-export port trait from the domain layer
pub use cfprov_domain::ports::EnvironmentAdapter;
