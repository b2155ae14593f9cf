//! Provisioning Client
//!
//! Sends create-service requests over a shared [`BrokerTransport`] and waits
//! for the matching reply.
//!
//! ## Reply routing
//!
//! The client subscribes to the transport's reply stream once, on
//! [`ProvisioningClient::connect`], and a background task routes each reply
//! to the waiter registered under its correlation id. A waiter removes its
//! registration when it stops waiting (reply, timeout, interruption or
//! error), so a late reply is dropped instead of reaching a later call.
//!
//! ## Example
//!
//! ```ignore
//! let client = ProvisioningClient::connect(transport, Some(Duration::from_secs(60))).await?;
//! let creds = client
//!     .request_credentials(&ServiceRequest::for_kind(ServiceKind::Redis), &cancel)
//!     .await?;
//! ```

use async_trait::async_trait;
use cfprov_domain::error::{Error, Result};
use cfprov_domain::ports::{BrokerTransport, ReplyStream, ServiceBrokerClient};
use cfprov_domain::value_objects::{
    CreateServiceReply, CreateServiceRequest, Credentials, ServiceRequest,
};
use dashmap::DashMap;
use futures::StreamExt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

type PendingReplies = Arc<DashMap<Uuid, oneshot::Sender<CreateServiceReply>>>;

/// Client for the provisioning broker
///
/// One request/reply round trip per call, no retries. Safe to share between
/// concurrent callers: replies never cross between calls.
pub struct ProvisioningClient {
    transport: Arc<dyn BrokerTransport>,
    pending: PendingReplies,
    /// Set by the router once the reply stream has ended
    closed: Arc<AtomicBool>,
    reply_timeout: Option<Duration>,
    router: JoinHandle<()>,
}

impl ProvisioningClient {
    /// Subscribe to the transport's replies and start routing them
    ///
    /// `reply_timeout` bounds each wait for a reply; `None` waits until a
    /// reply arrives or the call is interrupted.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn connect(
        transport: Arc<dyn BrokerTransport>,
        reply_timeout: Option<Duration>,
    ) -> Result<Self> {
        let replies = transport.subscribe_replies().await?;
        let pending: PendingReplies = Arc::new(DashMap::new());
        let closed = Arc::new(AtomicBool::new(false));
        let router = tokio::spawn(route_replies(
            replies,
            Arc::clone(&pending),
            Arc::clone(&closed),
        ));

        Ok(Self {
            transport,
            pending,
            closed,
            reply_timeout,
            router,
        })
    }

    /// Configured bound on each reply wait
    pub fn reply_timeout(&self) -> Option<Duration> {
        self.reply_timeout
    }

    /// Number of requests currently waiting for a reply
    pub fn pending_requests(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for ProvisioningClient {
    fn drop(&mut self) {
        self.router.abort();
    }
}

impl std::fmt::Debug for ProvisioningClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvisioningClient")
            .field("reply_timeout", &self.reply_timeout)
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[async_trait]
impl ServiceBrokerClient for ProvisioningClient {
    async fn request_credentials(
        &self,
        request: &ServiceRequest,
        cancel: &CancellationToken,
    ) -> Result<Credentials> {
        let kind = request.kind;
        let instance_name = request.instance_name.as_str();

        if cancel.is_cancelled() {
            return Err(Error::interrupted(kind, instance_name));
        }

        let envelope = CreateServiceRequest::new(request);
        let (sender, receiver) = oneshot::channel();
        let _registration = Registration::new(&self.pending, envelope.correlation_id, sender);

        // Checked after registering; the router raises the flag before clearing waiters
        if self.closed.load(Ordering::SeqCst) {
            return Err(Error::provisioning_failure(
                kind,
                instance_name,
                "broker reply stream is closed",
            ));
        }

        let round_trip = async {
            self.transport.send_request(&envelope).await.map_err(|e| {
                Error::provisioning_failure_with_source(
                    kind,
                    instance_name,
                    "failed to send create-service request",
                    e,
                )
            })?;
            debug!(
                correlation_id = %envelope.correlation_id,
                instance = instance_name,
                "Sent create-service request"
            );

            receiver.await.map_err(|_| {
                Error::provisioning_failure(
                    kind,
                    instance_name,
                    "broker reply stream closed before a reply arrived",
                )
            })
        };

        let reply = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                warn!(instance = instance_name, "Wait for broker reply interrupted");
                return Err(Error::interrupted(kind, instance_name));
            }
            () = deadline(self.reply_timeout) => {
                return Err(Error::provisioning_failure(
                    kind,
                    instance_name,
                    format!(
                        "timed out after {:?} waiting for a broker reply",
                        self.reply_timeout.unwrap_or_default()
                    ),
                ));
            }
            reply = round_trip => reply?,
        };

        let credentials = reply.into_outcome().map_err(|e| {
            Error::provisioning_failure_with_source(
                kind,
                instance_name,
                "broker reported an error",
                e,
            )
        })?;

        info!(
            service = %kind,
            instance = instance_name,
            host = credentials.hostname(),
            "Received credentials for new service"
        );
        Ok(credentials)
    }
}

/// Waiter entry that unregisters itself when dropped
struct Registration<'a> {
    pending: &'a PendingReplies,
    correlation_id: Uuid,
}

impl<'a> Registration<'a> {
    fn new(
        pending: &'a PendingReplies,
        correlation_id: Uuid,
        sender: oneshot::Sender<CreateServiceReply>,
    ) -> Self {
        pending.insert(correlation_id, sender);
        Self {
            pending,
            correlation_id,
        }
    }
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        self.pending.remove(&self.correlation_id);
    }
}

async fn deadline(timeout: Option<Duration>) {
    match timeout {
        Some(timeout) => tokio::time::sleep(timeout).await,
        None => std::future::pending::<()>().await,
    }
}

async fn route_replies(
    mut replies: ReplyStream,
    pending: PendingReplies,
    closed: Arc<AtomicBool>,
) {
    while let Some(reply) = replies.next().await {
        match pending.remove(&reply.correlation_id) {
            Some((correlation_id, waiter)) => {
                if waiter.send(reply).is_err() {
                    debug!(%correlation_id, "Waiter gone before reply was delivered");
                }
            }
            None => {
                warn!(
                    correlation_id = %reply.correlation_id,
                    "Dropping broker reply with no pending request"
                );
            }
        }
    }

    debug!("Broker reply stream ended");
    closed.store(true, Ordering::SeqCst);
    // Dropping the senders wakes every remaining waiter with an error
    pending.clear();
}
