//! Service binding configuration

use cfprov_providers::constants::{DEFAULT_SERVICE_PLAN, VCAP_SERVICES_VARIABLE};
use serde::{Deserialize, Serialize};

/// Where and how provisioned services are bound into the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Environment variable holding the service bindings
    pub variable: String,

    /// Plan name recorded in each binding
    pub plan: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            variable: VCAP_SERVICES_VARIABLE.to_string(),
            plan: DEFAULT_SERVICE_PLAN.to_string(),
        }
    }
}
