//! Test setup entry points
//!
//! One provisioning pass per call: load configuration, initialize logging,
//! connect to the broker, then scan, provision and bind.

use cfprov_domain::error::{Error, Result};
use cfprov_domain::ports::TestClassMetadata;
use cfprov_infrastructure::bootstrap::build_provisioner;
use cfprov_infrastructure::interrupt::interrupt_on_ctrl_c;
use cfprov_infrastructure::config::{AppConfig, ConfigLoader};
use cfprov_infrastructure::logging::init_logging;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Provision the services `class` declares, using configuration from the
/// default sources
///
/// Returns once every service was created and `VCAP_SERVICES` was written.
/// Ctrl-C during the pass interrupts the broker wait.
pub async fn provision_services_for<M>(class: &M) -> Result<()>
where
    M: TestClassMetadata + ?Sized,
{
    let config = ConfigLoader::new().load()?;
    provision_services_with_config(class, &config).await
}

/// Provision the services `class` declares with explicit configuration
pub async fn provision_services_with_config<M>(class: &M, config: &AppConfig) -> Result<()>
where
    M: TestClassMetadata + ?Sized,
{
    init_logging(&config.logging)?;

    let provisioner = build_provisioner(config).await?;

    let cancel = CancellationToken::new();
    let _interrupt = interrupt_on_ctrl_c(cancel.clone());

    provisioner.create_services_for(class, &cancel).await?;
    info!(test_class = class.class_name(), "Services provisioned");
    Ok(())
}

/// Blocking form of [`provision_services_for`] for synchronous test setup
///
/// Drives the pass on a private current-thread runtime. Must not be called
/// from within an async context.
pub fn provision_services_for_blocking<M>(class: &M) -> Result<()>
where
    M: TestClassMetadata + ?Sized,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::infrastructure_with_source("Failed to start provisioning runtime", e))?;

    runtime.block_on(provision_services_for(class))
}
