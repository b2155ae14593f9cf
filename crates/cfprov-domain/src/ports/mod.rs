//! Domain Port Interfaces
//!
//! Boundary contracts between the provisioning core and the outside world.
//!
//! ## Organization
//!
//! - **broker** - Transport to the provisioning broker and the provisioning client contract
//! - **environment** - Sink that publishes credentials into the process environment
//! - **metadata** - Capability query over a test class

/// Broker transport and provisioning client ports
pub mod broker;
/// Environment adapter port
pub mod environment;
/// Test class metadata port
pub mod metadata;

pub use broker::{BrokerTransport, ReplyStream, ServiceBrokerClient};
pub use environment::EnvironmentAdapter;
pub use metadata::TestClassMetadata;
