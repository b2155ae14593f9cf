//! Domain layer constants
//!
//! Fixed names used when provisioning services. Instance names are stable so
//! that repeated test runs target the same naming convention.

// ============================================================================
// INSTANCE NAMES
// ============================================================================

/// Instance name used for every RabbitMQ service created for a test class
pub const RABBITMQ_INSTANCE_NAME: &str = "rabbit-test";

/// Instance name used for every Redis service created for a test class
pub const REDIS_INSTANCE_NAME: &str = "redis-test";

// ============================================================================
// CAPABILITY MARKERS
// ============================================================================

/// Marker a test class declares to require a RabbitMQ service
pub const RABBITMQ_MARKER: &str = "rabbitmq";

/// Marker a test class declares to require a Redis service
pub const REDIS_MARKER: &str = "redis";

// ============================================================================
// SERVICE BINDING
// ============================================================================

/// Service version requested from the broker for RabbitMQ
pub const RABBITMQ_VERSION: &str = "2.8";

/// Service version requested from the broker for Redis
pub const REDIS_VERSION: &str = "2.6";

/// Default AMQP port
pub const RABBITMQ_DEFAULT_PORT: u16 = 5672;

/// Default Redis port
pub const REDIS_DEFAULT_PORT: u16 = 6379;
