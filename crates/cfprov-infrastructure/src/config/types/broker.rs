//! Broker connection configuration

use crate::constants::*;
use cfprov_providers::constants::DEFAULT_REQUEST_SUBJECT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Provisioning broker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    /// NATS server URL
    pub url: String,

    /// Subject create-service requests are published on
    pub request_subject: String,

    /// Client name reported to the server
    pub client_name: Option<String>,

    /// Connection timeout in milliseconds
    pub connection_timeout_ms: u64,

    /// Bound on each broker reply wait in milliseconds, `0` to wait indefinitely
    pub reply_timeout_ms: u64,
}

impl BrokerConfig {
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_millis(self.connection_timeout_ms)
    }

    /// Reply wait bound, `None` when disabled
    pub fn reply_timeout(&self) -> Option<Duration> {
        (self.reply_timeout_ms > 0).then(|| Duration::from_millis(self.reply_timeout_ms))
    }
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_NATS_URL.to_string(),
            request_subject: DEFAULT_REQUEST_SUBJECT.to_string(),
            client_name: Some(DEFAULT_NATS_CLIENT_NAME.to_string()),
            connection_timeout_ms: DEFAULT_CONNECTION_TIMEOUT_MS,
            reply_timeout_ms: DEFAULT_REPLY_TIMEOUT_MS,
        }
    }
}
