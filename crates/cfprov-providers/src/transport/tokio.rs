//! In-Process Broker Transport
//!
//! Broker transport backed by tokio channels. Requests go to a
//! [`BrokerHandle`] held by whoever plays the broker; replies are broadcast
//! back to every reply subscriber.
//!
//! ## Example
//!
//! ```ignore
//! use cfprov_providers::transport::TokioBrokerTransport;
//!
//! let (transport, broker) = TokioBrokerTransport::new();
//!
//! // Answer every request with the same credentials
//! broker.serve(|request| {
//!     Some(CreateServiceReply::created(request.correlation_id, Credentials::new("h", 5672)))
//! });
//! ```

use async_trait::async_trait;
use cfprov_domain::error::{Error, Result};
use cfprov_domain::ports::{BrokerTransport, ReplyStream};
use cfprov_domain::value_objects::{CreateServiceReply, CreateServiceRequest};
use futures::stream;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::constants::DEFAULT_REPLY_CAPACITY;

/// Broker transport using in-process channels
#[derive(Clone)]
pub struct TokioBrokerTransport {
    /// Outbound requests to the broker
    requests: mpsc::UnboundedSender<CreateServiceRequest>,
    /// Broadcast sender the broker replies on
    replies: broadcast::Sender<CreateServiceReply>,
}

/// Broker side of a [`TokioBrokerTransport`]
pub struct BrokerHandle {
    requests: mpsc::UnboundedReceiver<CreateServiceRequest>,
    replies: broadcast::Sender<CreateServiceReply>,
}

impl TokioBrokerTransport {
    /// Create a transport and its broker handle with the default reply capacity
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (Self, BrokerHandle) {
        Self::with_capacity(DEFAULT_REPLY_CAPACITY)
    }

    /// Create with custom reply capacity
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of undelivered replies per subscriber
    pub fn with_capacity(capacity: usize) -> (Self, BrokerHandle) {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (reply_tx, _) = broadcast::channel(capacity);

        let transport = Self {
            requests: request_tx,
            replies: reply_tx.clone(),
        };
        let handle = BrokerHandle {
            requests: request_rx,
            replies: reply_tx,
        };
        (transport, handle)
    }

    /// Number of active reply subscribers
    pub fn subscriber_count(&self) -> usize {
        self.replies.receiver_count()
    }
}

impl std::fmt::Debug for TokioBrokerTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioBrokerTransport")
            .field("subscribers", &self.replies.receiver_count())
            .finish()
    }
}

#[async_trait]
impl BrokerTransport for TokioBrokerTransport {
    async fn send_request(&self, request: &CreateServiceRequest) -> Result<()> {
        self.requests.send(request.clone()).map_err(|_| {
            Error::infrastructure("in-process broker is no longer receiving requests")
        })?;
        debug!(correlation_id = %request.correlation_id, "Queued create-service request");
        Ok(())
    }

    async fn subscribe_replies(&self) -> Result<ReplyStream> {
        let receiver = self.replies.subscribe();

        // Convert broadcast receiver to a Stream that handles lagged errors
        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(reply) => return Some((reply, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Reply stream lagged by {} replies", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });

        Ok(Box::pin(stream))
    }
}

impl BrokerHandle {
    /// Wait for the next create-service request
    ///
    /// Returns `None` once every transport clone has been dropped.
    pub async fn next_request(&mut self) -> Option<CreateServiceRequest> {
        self.requests.recv().await
    }

    /// Send a reply to every reply subscriber, returning how many received it
    pub fn reply(&self, reply: CreateServiceReply) -> usize {
        match self.replies.send(reply) {
            Ok(count) => count,
            Err(_) => {
                debug!("Reply sent but no subscribers");
                0
            }
        }
    }

    /// Answer requests in a background task
    ///
    /// `handler` returns the reply for a request, or `None` to leave the
    /// request unanswered.
    pub fn serve<F>(mut self, mut handler: F) -> JoinHandle<()>
    where
        F: FnMut(&CreateServiceRequest) -> Option<CreateServiceReply> + Send + 'static,
    {
        tokio::spawn(async move {
            while let Some(request) = self.next_request().await {
                match handler(&request) {
                    Some(reply) => {
                        self.reply(reply);
                    }
                    None => debug!(
                        correlation_id = %request.correlation_id,
                        "Leaving request unanswered"
                    ),
                }
            }
        })
    }
}
