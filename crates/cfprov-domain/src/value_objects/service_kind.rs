use crate::constants::{
    RABBITMQ_DEFAULT_PORT, RABBITMQ_INSTANCE_NAME, RABBITMQ_MARKER, RABBITMQ_VERSION,
    REDIS_DEFAULT_PORT, REDIS_INSTANCE_NAME, REDIS_MARKER, REDIS_VERSION,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A backing service that can be provisioned for a test
///
/// The set is closed. Every per-kind table below is an exhaustive match, so a
/// new variant does not compile until each of them has an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// RabbitMQ message broker
    RabbitMq,
    /// Redis key-value cache
    Redis,
}

impl ServiceKind {
    /// All supported kinds, in provisioning order
    pub const ALL: [ServiceKind; 2] = [ServiceKind::RabbitMq, ServiceKind::Redis];

    /// Capability marker a test class declares to require this kind
    pub const fn marker(self) -> &'static str {
        match self {
            Self::RabbitMq => RABBITMQ_MARKER,
            Self::Redis => REDIS_MARKER,
        }
    }

    /// Fixed instance name used when provisioning this kind
    pub const fn instance_name(self) -> &'static str {
        match self {
            Self::RabbitMq => RABBITMQ_INSTANCE_NAME,
            Self::Redis => REDIS_INSTANCE_NAME,
        }
    }

    /// Service version requested from the broker
    pub const fn version(self) -> &'static str {
        match self {
            Self::RabbitMq => RABBITMQ_VERSION,
            Self::Redis => REDIS_VERSION,
        }
    }

    /// Human readable name
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::RabbitMq => "RabbitMQ",
            Self::Redis => "Redis",
        }
    }

    /// URI scheme of connection strings for this kind
    pub const fn uri_scheme(self) -> &'static str {
        match self {
            Self::RabbitMq => "amqp",
            Self::Redis => "redis",
        }
    }

    /// Well-known port of this kind
    pub const fn default_port(self) -> u16 {
        match self {
            Self::RabbitMq => RABBITMQ_DEFAULT_PORT,
            Self::Redis => REDIS_DEFAULT_PORT,
        }
    }

    /// Binding label, e.g. `rabbitmq-2.8`
    pub fn label(self) -> String {
        format!("{}-{}", self.marker(), self.version())
    }

    /// Look up the kind registered for a capability marker
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    pub fn from_marker(marker: &str) -> Option<Self> {
        let marker = marker.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.marker().eq_ignore_ascii_case(marker))
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
