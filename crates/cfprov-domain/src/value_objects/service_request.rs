use crate::value_objects::ServiceKind;
use serde::{Deserialize, Serialize};

/// What to provision: an instance name and a service kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    /// Name of the service instance to create
    pub instance_name: String,
    /// Kind of service to create
    pub kind: ServiceKind,
}

impl ServiceRequest {
    /// Create a request with an explicit instance name
    pub fn new(instance_name: impl Into<String>, kind: ServiceKind) -> Self {
        Self {
            instance_name: instance_name.into(),
            kind,
        }
    }

    /// Create a request using the kind's fixed instance name
    pub fn for_kind(kind: ServiceKind) -> Self {
        Self::new(kind.instance_name(), kind)
    }
}
