//! Credential Aggregator
//!
//! Provisions every required service kind and collects the credentials.
//! All or nothing: the first failure aborts the pass and discards whatever
//! was already collected.

use cfprov_domain::error::{Error, Result};
use cfprov_domain::ports::ServiceBrokerClient;
use cfprov_domain::value_objects::{CredentialSet, ServiceKind, ServiceRequest};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Provisions a set of service kinds through a [`ServiceBrokerClient`]
#[derive(Clone)]
pub struct CredentialAggregator {
    client: Arc<dyn ServiceBrokerClient>,
}

impl CredentialAggregator {
    pub fn new(client: Arc<dyn ServiceBrokerClient>) -> Self {
        Self { client }
    }

    /// Provision every kind in `required`, in ascending kind order
    ///
    /// Each kind is requested under its fixed instance name. The returned set
    /// holds exactly the kinds in `required`. On the first failure no further
    /// kinds are attempted and the error names the failing kind; an
    /// interrupted wait is returned as `ProvisioningInterrupted`.
    pub async fn provision_all(
        &self,
        required: &BTreeSet<ServiceKind>,
        cancel: &CancellationToken,
    ) -> Result<CredentialSet> {
        let mut credentials = CredentialSet::new();

        for &kind in required {
            let request = ServiceRequest::for_kind(kind);
            info!(
                service = %kind,
                instance = %request.instance_name,
                "Creating new {} Cloud Foundry service",
                kind
            );

            match self.client.request_credentials(&request, cancel).await {
                Ok(creds) => {
                    credentials.insert(kind, creds);
                }
                Err(e) => {
                    report_orphans(&credentials, kind);
                    return Err(escalate(&request, e));
                }
            }
        }

        Ok(credentials)
    }
}

impl std::fmt::Debug for CredentialAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialAggregator").finish_non_exhaustive()
    }
}

/// Attach the failing kind to a client error
///
/// Errors that already name this kind pass through unchanged; anything else
/// becomes the cause of a `ProvisioningFailure`.
fn escalate(request: &ServiceRequest, error: Error) -> Error {
    match error {
        Error::ProvisioningFailure { kind, .. } | Error::ProvisioningInterrupted { kind, .. }
            if kind == request.kind =>
        {
            error
        }
        other => Error::provisioning_failure_with_source(
            request.kind,
            request.instance_name.clone(),
            format!("Cannot create {} service", request.kind),
            other,
        ),
    }
}

/// Services created earlier in a failed pass stay behind on the platform
fn report_orphans(credentials: &CredentialSet, failed: ServiceKind) {
    for kind in credentials.kinds() {
        warn!(
            service = %kind,
            instance = kind.instance_name(),
            failed_service = %failed,
            "Provisioning pass aborted; instance was created but will not be bound"
        );
    }
}
