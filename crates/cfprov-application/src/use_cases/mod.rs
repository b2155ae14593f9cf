//! Provisioning use cases

pub mod capability_scanner;
pub mod credential_aggregator;
pub mod provisioning_client;
pub mod service_provisioner;

pub use capability_scanner::{CapabilityScanner, ScanMode};
pub use credential_aggregator::CredentialAggregator;
pub use provisioning_client::ProvisioningClient;
pub use service_provisioner::ServiceProvisioner;
