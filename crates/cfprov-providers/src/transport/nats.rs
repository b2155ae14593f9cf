//! NATS Broker Transport
//!
//! Broker transport using NATS. Requests are published as JSON on a request
//! subject with a private inbox as the reply subject; the broker publishes
//! its JSON reply to that inbox.
//!
//! ## Example
//!
//! ```ignore
//! use cfprov_providers::transport::NatsBrokerTransport;
//!
//! let transport = NatsBrokerTransport::new("nats://localhost:4222").await?;
//! let replies = transport.subscribe_replies().await?;
//! transport.send_request(&CreateServiceRequest::new(&request)).await?;
//! ```

use async_nats::Client;
use async_trait::async_trait;
use cfprov_domain::error::{Error, Result};
use cfprov_domain::ports::{BrokerTransport, ReplyStream};
use cfprov_domain::value_objects::{CreateServiceReply, CreateServiceRequest};
use futures::StreamExt;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::constants::DEFAULT_REQUEST_SUBJECT;

/// Broker transport over a shared NATS connection
///
/// All replies for this process arrive on one inbox subject and are told
/// apart by correlation id.
pub struct NatsBrokerTransport {
    /// NATS client
    client: Client,
    /// Subject create-service requests are published on
    request_subject: String,
    /// Inbox the broker replies to
    reply_subject: String,
}

impl NatsBrokerTransport {
    /// Connect with the default request subject
    ///
    /// # Arguments
    ///
    /// * `url` - NATS server URL (e.g., "nats://localhost:4222")
    ///
    /// # Errors
    ///
    /// Returns an error if connection to NATS server fails.
    pub async fn new(url: &str) -> Result<Self> {
        let client = async_nats::connect(url)
            .await
            .map_err(|e| connect_error(url, e))?;
        info!("Connected to NATS server at {}", url);
        Ok(Self::from_client(client, DEFAULT_REQUEST_SUBJECT))
    }

    /// Connect with explicit options
    ///
    /// # Arguments
    ///
    /// * `url` - NATS server URL
    /// * `request_subject` - Subject create-service requests are published on
    /// * `client_name` - Optional client name for server-side identification
    /// * `connection_timeout` - Bound on establishing the connection
    pub async fn with_options(
        url: &str,
        request_subject: &str,
        client_name: Option<&str>,
        connection_timeout: Duration,
    ) -> Result<Self> {
        info!("Connecting to NATS server at {} with options", url);

        let mut options = async_nats::ConnectOptions::new().connection_timeout(connection_timeout);
        if let Some(name) = client_name {
            options = options.name(name);
        }

        let client = options
            .connect(url)
            .await
            .map_err(|e| connect_error(url, e))?;

        info!("Connected to NATS server at {}", url);
        Ok(Self::from_client(client, request_subject))
    }

    /// Wrap an existing client, allocating a fresh reply inbox
    pub fn from_client(client: Client, request_subject: &str) -> Self {
        let reply_subject = client.new_inbox();
        Self {
            client,
            request_subject: request_subject.to_string(),
            reply_subject,
        }
    }

    /// Subject requests are published on
    pub fn request_subject(&self) -> &str {
        &self.request_subject
    }

    /// Inbox replies are expected on
    pub fn reply_subject(&self) -> &str {
        &self.reply_subject
    }
}

impl std::fmt::Debug for NatsBrokerTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NatsBrokerTransport")
            .field("request_subject", &self.request_subject)
            .field("reply_subject", &self.reply_subject)
            .finish()
    }
}

fn connect_error(url: &str, e: impl std::error::Error + Send + Sync + 'static) -> Error {
    Error::infrastructure_with_source(format!("Failed to connect to NATS server at {url}"), e)
}

#[async_trait]
impl BrokerTransport for NatsBrokerTransport {
    async fn send_request(&self, request: &CreateServiceRequest) -> Result<()> {
        let payload = serde_json::to_vec(request)?;

        self.client
            .publish_with_reply(
                self.request_subject.clone(),
                self.reply_subject.clone(),
                payload.into(),
            )
            .await
            .map_err(|e| {
                Error::infrastructure_with_source(
                    format!("Failed to publish to NATS subject '{}'", self.request_subject),
                    e,
                )
            })?;

        self.client.flush().await.map_err(|e| {
            Error::infrastructure_with_source("Failed to flush NATS connection", e)
        })?;

        debug!(
            correlation_id = %request.correlation_id,
            "Published create-service request to NATS subject '{}'",
            self.request_subject
        );
        Ok(())
    }

    async fn subscribe_replies(&self) -> Result<ReplyStream> {
        let subscriber = self
            .client
            .subscribe(self.reply_subject.clone())
            .await
            .map_err(|e| {
                Error::infrastructure_with_source(
                    format!("Failed to subscribe to NATS subject '{}'", self.reply_subject),
                    e,
                )
            })?;

        // The server must know about the inbox before any request goes out
        self.client.flush().await.map_err(|e| {
            Error::infrastructure_with_source("Failed to flush NATS connection", e)
        })?;
        debug!("Subscribed to NATS reply subject '{}'", self.reply_subject);

        let stream = subscriber.filter_map(|msg| async move {
            match CreateServiceReply::decode(&msg.payload) {
                Ok(reply) => Some(reply),
                Err(e) => {
                    // No correlation id, so no request to fail
                    warn!("Failed to deserialize NATS reply: {}", e);
                    None
                }
            }
        });

        Ok(Box::pin(stream))
    }
}
