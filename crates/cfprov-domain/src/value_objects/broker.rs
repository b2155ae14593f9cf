//! Broker request and reply envelopes
//!
//! A request carries a fresh correlation id; the broker echoes it in the
//! reply so that replies can be routed back to the waiting call.

use crate::value_objects::{Credentials, ServiceKind, ServiceRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Create-service request sent to the broker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    /// Correlation id echoed by the broker
    pub correlation_id: Uuid,
    /// Name of the service instance to create
    pub instance_name: String,
    /// Service type, e.g. `rabbitmq`
    pub service: ServiceKind,
    /// Service version, e.g. `2.8`
    pub version: String,
}

impl CreateServiceRequest {
    /// Build the envelope for a request under a fresh correlation id
    pub fn new(request: &ServiceRequest) -> Self {
        Self::with_correlation_id(Uuid::new_v4(), request)
    }

    /// Build the envelope under a given correlation id
    pub fn with_correlation_id(correlation_id: Uuid, request: &ServiceRequest) -> Self {
        Self {
            correlation_id,
            instance_name: request.instance_name.clone(),
            service: request.kind,
            version: request.kind.version().to_string(),
        }
    }
}

/// Error reported by the broker in a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct BrokerError {
    /// Description from the broker
    pub message: String,
    /// Optional broker error code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl BrokerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Reply to a [`CreateServiceRequest`]
///
/// Carries either credentials or an error. When both are present the error
/// wins; when neither is, the reply is treated as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateServiceReply {
    /// Correlation id of the originating request
    pub correlation_id: Uuid,
    /// Credentials of the created instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
    /// Error reported by the broker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<BrokerError>,
}

impl CreateServiceReply {
    /// Successful reply
    pub fn created(correlation_id: Uuid, credentials: Credentials) -> Self {
        Self {
            correlation_id,
            credentials: Some(credentials),
            error: None,
        }
    }

    /// Failed reply
    pub fn failed(correlation_id: Uuid, error: BrokerError) -> Self {
        Self {
            correlation_id,
            credentials: None,
            error: Some(error),
        }
    }

    /// Decode a reply payload
    ///
    /// Only a payload without a readable correlation id is an error. A reply
    /// whose credentials or error do not decode is still routed to its
    /// request, as a failed reply naming the decode problem.
    pub fn decode(payload: &[u8]) -> serde_json::Result<Self> {
        let raw: RawReply = serde_json::from_slice(payload)?;
        let correlation_id = raw.correlation_id;

        if let Some(error) = raw.error {
            let error = serde_json::from_value(error).unwrap_or_else(|e| {
                BrokerError::new(format!("broker error does not decode: {e}"))
            });
            return Ok(Self::failed(correlation_id, error));
        }

        Ok(match raw.credentials {
            Some(credentials) => match serde_json::from_value(credentials) {
                Ok(credentials) => Self::created(correlation_id, credentials),
                Err(e) => Self::failed(
                    correlation_id,
                    BrokerError::new(format!("credentials do not decode: {e}")),
                ),
            },
            None => Self {
                correlation_id,
                credentials: None,
                error: None,
            },
        })
    }

    /// Resolve the reply into credentials or the broker's error
    pub fn into_outcome(self) -> Result<Credentials, BrokerError> {
        match (self.error, self.credentials) {
            (Some(error), _) => Err(error),
            (None, Some(credentials)) => Ok(credentials),
            (None, None) => Err(BrokerError::new(
                "reply carried neither credentials nor an error",
            )),
        }
    }
}

/// Reply envelope with its payload left undecoded
#[derive(Deserialize)]
struct RawReply {
    correlation_id: Uuid,
    #[serde(default)]
    credentials: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}
