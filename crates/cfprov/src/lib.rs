//! # cfprov
//!
//! Ephemeral Cloud Foundry backing services for integration tests.
//!
//! A test class declares the services it needs (`rabbitmq`, `redis`). Before
//! the class runs, cfprov asks the provisioning broker to create each one,
//! waits for the connection credentials, and binds them into the process
//! environment as `VCAP_SERVICES`, exactly as the platform would for a
//! deployed application.
//!
//! ## Example
//!
//! ```ignore
//! use cfprov::{ServiceKind, TestClass};
//!
//! #[tokio::test]
//! async fn order_listener_consumes_events() {
//!     let class = TestClass::new("OrderListenerIT").requires(ServiceKind::RabbitMq);
//!     cfprov::provision_services_for(&class).await?;
//!     // VCAP_SERVICES now describes the `rabbit-test` instance
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Service kinds, credentials, ports and errors
//! - `application` - Capability scanning, broker round trips, aggregation
//! - `providers` - NATS and in-process transports, `VCAP_SERVICES` adapter
//! - `infrastructure` - Configuration, logging and wiring

/// Domain layer - service kinds, credentials, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cfprov_domain::*;
}

/// Application layer - provisioning use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use cfprov_application::*;
}

/// Providers - broker transports and environment adapters
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use cfprov_providers::*;
}

/// Infrastructure layer - configuration, logging and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use cfprov_infrastructure::*;
}

mod provision;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the test setup entry points at the crate root
pub use provision::{
    provision_services_for, provision_services_for_blocking, provision_services_with_config,
};
