//! Provisioning Broker Ports
//!
//! [`BrokerTransport`] is the shared messaging connection: it publishes
//! create-service requests and yields every reply addressed to this process.
//! [`ServiceBrokerClient`] is the one-request/one-reply contract the
//! aggregator calls; it owns the wait for the reply.

use crate::error::Result;
use crate::value_objects::{CreateServiceReply, CreateServiceRequest, Credentials, ServiceRequest};
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;
use tokio_util::sync::CancellationToken;

/// Boxed async stream of broker replies
pub type ReplyStream = Pin<Box<dyn Stream<Item = CreateServiceReply> + Send + 'static>>;

/// Messaging transport to the provisioning broker
#[async_trait]
pub trait BrokerTransport: Send + Sync {
    /// Publish a create-service request
    async fn send_request(&self, request: &CreateServiceRequest) -> Result<()>;

    /// Stream of replies addressed to this transport
    ///
    /// Replies for every in-flight request arrive on the same stream and are
    /// told apart by correlation id. Payloads without a readable correlation
    /// id are dropped; a reply whose body does not decode arrives as a
    /// failed reply.
    async fn subscribe_replies(&self) -> Result<ReplyStream>;
}

/// Creates one service instance and returns its credentials
#[async_trait]
pub trait ServiceBrokerClient: Send + Sync {
    /// Request a new service instance and wait for its credentials
    ///
    /// Fails with `ProvisioningFailure` when the broker reports an error or
    /// the wait times out, and with `ProvisioningInterrupted` when `cancel`
    /// fires before a reply arrives. Not idempotent: every successful call
    /// creates a live service.
    async fn request_credentials(
        &self,
        request: &ServiceRequest,
        cancel: &CancellationToken,
    ) -> Result<Credentials>;
}
