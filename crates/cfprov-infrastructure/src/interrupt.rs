//! Process-wide Ctrl-C handling for provisioning passes
//!
//! Installing a SIGINT listener replaces the default "terminate" action for
//! the rest of the process, so one watcher is started for the whole process
//! lifetime rather than one per pass. Each pass registers its cancellation
//! token for as long as it runs:
//!
//! - Ctrl-C while a pass is running cancels that pass
//! - Ctrl-C with no running pass (or a second Ctrl-C while the cancelled
//!   pass unwinds) exits the process with [`INTERRUPT_EXIT_CODE`]
//!
//! ```rust,ignore
//! let cancel = CancellationToken::new();
//! let _interrupt = interrupt_on_ctrl_c(cancel.clone());
//! provisioner.create_services_for(&class, &cancel).await?;
//! ```

use crate::constants::INTERRUPT_EXIT_CODE;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, Once};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

static REGISTRY: LazyLock<InterruptRegistry> = LazyLock::new(InterruptRegistry::new);
static WATCHER: Once = Once::new();

/// What a Ctrl-C did to the registered passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptOutcome {
    /// This many running passes were cancelled
    Cancelled(usize),
    /// Nothing left to cancel
    NoActivePass,
}

/// Cancellation tokens of the passes currently running
#[derive(Debug, Default)]
pub struct InterruptRegistry {
    passes: DashMap<u64, CancellationToken>,
    next_id: AtomicU64,
}

impl InterruptRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a running pass until the returned guard is dropped
    pub fn register(&self, cancel: CancellationToken) -> PassRegistration<'_> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.passes.insert(id, cancel);
        PassRegistration { registry: self, id }
    }

    /// Number of registered passes
    pub fn active_passes(&self) -> usize {
        self.passes.len()
    }

    /// Cancel every registered pass that is not already cancelled
    pub fn interrupt(&self) -> InterruptOutcome {
        let mut cancelled = 0;
        for entry in &self.passes {
            if !entry.value().is_cancelled() {
                entry.value().cancel();
                cancelled += 1;
            }
        }
        if cancelled == 0 {
            InterruptOutcome::NoActivePass
        } else {
            InterruptOutcome::Cancelled(cancelled)
        }
    }
}

/// Keeps a pass registered for interrupts; deregisters on drop
#[must_use = "the pass is deregistered as soon as the registration is dropped"]
#[derive(Debug)]
pub struct PassRegistration<'a> {
    registry: &'a InterruptRegistry,
    id: u64,
}

impl Drop for PassRegistration<'_> {
    fn drop(&mut self) {
        self.registry.passes.remove(&self.id);
    }
}

/// Cancel `cancel` on Ctrl-C for as long as the returned registration lives
///
/// Starts the process-wide watcher on first use.
pub fn interrupt_on_ctrl_c(cancel: CancellationToken) -> PassRegistration<'static> {
    WATCHER.call_once(spawn_watcher);
    REGISTRY.register(cancel)
}

fn spawn_watcher() {
    let spawned = std::thread::Builder::new()
        .name("cfprov-interrupt".to_string())
        .spawn(|| {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    warn!("Failed to start interrupt watcher runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(watch_ctrl_c());
        });
    if let Err(e) = spawned {
        warn!("Failed to start interrupt watcher: {}", e);
    }
}

async fn watch_ctrl_c() {
    debug!("Interrupt watcher started");
    loop {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for interrupt signal: {}", e);
            return;
        }
        match REGISTRY.interrupt() {
            InterruptOutcome::Cancelled(passes) => {
                warn!(passes, "Interrupt received, cancelling service provisioning");
            }
            InterruptOutcome::NoActivePass => {
                error!("Interrupt received with no provisioning pass to cancel, exiting");
                std::process::exit(INTERRUPT_EXIT_CODE);
            }
        }
    }
}
