//! Domain Value Objects
//!
//! Immutable values describing what to provision and what came back.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ServiceKind`] | Closed set of provisionable backing services |
//! | [`Credentials`] | Connection attributes for one provisioned instance |
//! | [`CredentialSet`] | Credentials of one pass, keyed by service kind |
//! | [`ServiceRequest`] | Instance name and kind to provision |
//! | [`TestClass`] | Declared capability markers of a test class |
//! | [`CreateServiceRequest`] | Broker request envelope with correlation id |
//! | [`CreateServiceReply`] | Broker reply envelope with correlation id |

/// Broker request and reply envelopes
pub mod broker;
/// Per-pass credential mapping
pub mod credential_set;
/// Connection credentials
pub mod credentials;
/// Service kinds and their fixed tables
pub mod service_kind;
/// Service requests
pub mod service_request;
/// Test class metadata
pub mod test_class;

pub use broker::{BrokerError, CreateServiceReply, CreateServiceRequest};
pub use credential_set::CredentialSet;
pub use credentials::Credentials;
pub use service_kind::ServiceKind;
pub use service_request::ServiceRequest;
pub use test_class::TestClass;
