//! Provider constants

// ============================================================================
// TRANSPORT CONSTANTS
// ============================================================================

/// Subject create-service requests are published on
pub const DEFAULT_REQUEST_SUBJECT: &str = "cfprov.services.create";

/// Buffer capacity of the in-process reply channel
pub const DEFAULT_REPLY_CAPACITY: usize = 64;

// ============================================================================
// ENVIRONMENT CONSTANTS
// ============================================================================

/// Environment variable holding Cloud Foundry service bindings
pub const VCAP_SERVICES_VARIABLE: &str = "VCAP_SERVICES";

/// Plan recorded in each service binding
pub const DEFAULT_SERVICE_PLAN: &str = "free";
