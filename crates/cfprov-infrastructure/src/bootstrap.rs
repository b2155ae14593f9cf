//! Provisioner wiring
//!
//! Builds a [`ServiceProvisioner`] from an [`AppConfig`]: broker transport,
//! provisioning client, aggregator, scanner mode and `VCAP_SERVICES` adapter.

use crate::config::AppConfig;
use cfprov_application::{
    CapabilityScanner, CredentialAggregator, ProvisioningClient, ServiceProvisioner,
};
use cfprov_domain::error::Result;
use cfprov_domain::ports::BrokerTransport;
use cfprov_providers::environment::{EnvWriter, VcapServicesAdapter};
use std::sync::Arc;
use tracing::info;

/// Connect to the configured NATS broker and build a provisioner that binds
/// services into the process environment
#[cfg(feature = "transport-nats")]
pub async fn build_provisioner(config: &AppConfig) -> Result<ServiceProvisioner> {
    use cfprov_providers::environment::ProcessEnvWriter;
    use cfprov_providers::transport::NatsBrokerTransport;

    let transport = NatsBrokerTransport::with_options(
        &config.broker.url,
        &config.broker.request_subject,
        config.broker.client_name.as_deref(),
        config.broker.connection_timeout(),
    )
    .await?;

    build_provisioner_with(config, Arc::new(transport), Arc::new(ProcessEnvWriter::new())).await
}

/// Build a provisioner over an explicit transport and environment writer
pub async fn build_provisioner_with(
    config: &AppConfig,
    transport: Arc<dyn BrokerTransport>,
    writer: Arc<dyn EnvWriter>,
) -> Result<ServiceProvisioner> {
    let client = ProvisioningClient::connect(transport, config.broker.reply_timeout()).await?;
    let aggregator = CredentialAggregator::new(Arc::new(client));

    let adapter = VcapServicesAdapter::new(writer)
        .with_variable(&config.environment.variable)
        .with_plan(&config.environment.plan);
    let scanner = CapabilityScanner::with_mode(config.scanner.scan_mode());

    info!(
        broker = %config.broker.url,
        variable = %config.environment.variable,
        mode = ?config.scanner.scan_mode(),
        "Service provisioner ready"
    );
    Ok(ServiceProvisioner::new(scanner, aggregator, Arc::new(adapter)))
}
