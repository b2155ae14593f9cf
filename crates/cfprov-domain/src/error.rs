//! Error handling types

use crate::value_objects::ServiceKind;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cfprov
///
/// Every variant is fatal for the provisioning pass that raised it. A test
/// run must not continue against a partially bound environment.
#[derive(Error, Debug)]
pub enum Error {
    /// The broker rejected or errored a create-service request, or the wait timed out
    #[error("Failed to provision {kind} service '{instance_name}': {message}")]
    ProvisioningFailure {
        /// Kind of service that could not be provisioned
        kind: ServiceKind,
        /// Instance name the request was issued for
        instance_name: String,
        /// Description of the failure
        message: String,
        /// Underlying broker or transport error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The wait for a broker reply was interrupted before a reply arrived
    #[error("Provisioning of {kind} service '{instance_name}' was interrupted")]
    ProvisioningInterrupted {
        /// Kind of service being provisioned
        kind: ServiceKind,
        /// Instance name the request was issued for
        instance_name: String,
    },

    /// A test class declared a capability marker with no registered service kind
    #[error("Unrecognized capability '{marker}' declared by test class '{test_class}'")]
    UnrecognizedCapability {
        /// The marker as declared
        marker: String,
        /// Name of the declaring test class
        test_class: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error (transport, environment)
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a provisioning failure without an underlying cause
    pub fn provisioning_failure<S: Into<String>, M: Into<String>>(
        kind: ServiceKind,
        instance_name: S,
        message: M,
    ) -> Self {
        Self::ProvisioningFailure {
            kind,
            instance_name: instance_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a provisioning failure that preserves its cause
    pub fn provisioning_failure_with_source<S, M, E>(
        kind: ServiceKind,
        instance_name: S,
        message: M,
        source: E,
    ) -> Self
    where
        S: Into<String>,
        M: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ProvisioningFailure {
            kind,
            instance_name: instance_name.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an interruption error
    pub fn interrupted<S: Into<String>>(kind: ServiceKind, instance_name: S) -> Self {
        Self::ProvisioningInterrupted {
            kind,
            instance_name: instance_name.into(),
        }
    }

    /// Create an unrecognized capability error
    pub fn unrecognized_capability<M: Into<String>, C: Into<String>>(
        marker: M,
        test_class: C,
    ) -> Self {
        Self::UnrecognizedCapability {
            marker: marker.into(),
            test_class: test_class.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error that preserves its cause
    pub fn infrastructure_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error is an interrupted broker wait
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::ProvisioningInterrupted { .. })
    }

    /// Whether this error is a provisioning failure
    pub fn is_provisioning_failure(&self) -> bool {
        matches!(self, Self::ProvisioningFailure { .. })
    }

    /// Service kind this error is about, if any
    pub fn service_kind(&self) -> Option<ServiceKind> {
        match self {
            Self::ProvisioningFailure { kind, .. } | Self::ProvisioningInterrupted { kind, .. } => {
                Some(*kind)
            }
            _ => None,
        }
    }
}
