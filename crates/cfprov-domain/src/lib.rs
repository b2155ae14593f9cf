//! # cfprov Domain Layer
//!
//! Core types for provisioning ephemeral Cloud Foundry backing services on
//! behalf of integration tests.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Service kinds, credentials, requests and broker envelopes |
//! | [`ports`] | Contracts implemented by the transport and environment adapters |
//! | [`error`] | Provisioning error taxonomy |
//! | [`constants`] | Fixed instance names and binding labels |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    BrokerError, CreateServiceReply, CreateServiceRequest, CredentialSet, Credentials,
    ServiceKind, ServiceRequest, TestClass,
};
