//! Broker Transport Implementations
//!
//! ## Available Transports
//!
//! | Transport | Type | Description |
//! |-----------|------|-------------|
//! | TokioBrokerTransport | In-Process | Channels to a scripted broker, for tests and local runs |
//! | NatsBrokerTransport | Distributed | NATS request subject plus a private reply inbox |

#[cfg(feature = "transport-nats")]
pub mod nats;
pub mod tokio;

#[cfg(feature = "transport-nats")]
pub use nats::NatsBrokerTransport;
pub use self::tokio::{BrokerHandle, TokioBrokerTransport};

// Re-export port types from the domain layer
pub use cfprov_domain::ports::{BrokerTransport, ReplyStream};
