//! Service Provisioner
//!
//! One provisioning pass for a test class: discover the required kinds,
//! provision them, and hand the credentials to the environment adapter.

use crate::use_cases::{CapabilityScanner, CredentialAggregator};
use cfprov_domain::error::Result;
use cfprov_domain::ports::{EnvironmentAdapter, TestClassMetadata};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Runs provisioning passes for test classes
pub struct ServiceProvisioner {
    scanner: CapabilityScanner,
    aggregator: CredentialAggregator,
    adapter: Arc<dyn EnvironmentAdapter>,
}

impl ServiceProvisioner {
    pub fn new(
        scanner: CapabilityScanner,
        aggregator: CredentialAggregator,
        adapter: Arc<dyn EnvironmentAdapter>,
    ) -> Self {
        Self {
            scanner,
            aggregator,
            adapter,
        }
    }

    /// Create the services a test class declares and publish their credentials
    ///
    /// The adapter is called exactly once, after every service was created,
    /// including when the class declares none. On any failure it is not
    /// called at all.
    pub async fn create_services_for<M>(&self, class: &M, cancel: &CancellationToken) -> Result<()>
    where
        M: TestClassMetadata + ?Sized,
    {
        let kinds = self.scanner.discover(class)?;
        info!(
            test_class = class.class_name(),
            services = kinds.len(),
            "Provisioning services for test class"
        );

        let credentials = self.aggregator.provision_all(&kinds, cancel).await?;
        self.adapter.apply(credentials)
    }
}

impl std::fmt::Debug for ServiceProvisioner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceProvisioner")
            .field("scanner", &self.scanner)
            .finish_non_exhaustive()
    }
}
