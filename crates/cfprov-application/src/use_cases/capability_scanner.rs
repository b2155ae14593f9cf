//! Capability Scanner
//!
//! Maps the capability markers a test class declares onto service kinds.
//! The registry is [`ServiceKind::ALL`] and each kind's marker.

use cfprov_domain::error::{Error, Result};
use cfprov_domain::ports::TestClassMetadata;
use cfprov_domain::value_objects::ServiceKind;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// How the scanner treats markers with no registered kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Unknown markers are left out of the result
    #[default]
    Lenient,
    /// Unknown markers fail with `UnrecognizedCapability`
    Strict,
}

/// Discovers the service kinds a test class requires
#[derive(Debug, Clone, Copy, Default)]
pub struct CapabilityScanner {
    mode: ScanMode,
}

impl CapabilityScanner {
    /// Create a lenient scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner with the given mode
    pub fn with_mode(mode: ScanMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Discover the set of service kinds declared by a test class
    ///
    /// Duplicate markers collapse into one kind. Has no side effects.
    pub fn discover<M>(&self, class: &M) -> Result<BTreeSet<ServiceKind>>
    where
        M: TestClassMetadata + ?Sized,
    {
        let mut kinds = BTreeSet::new();
        for marker in class.capability_markers() {
            match ServiceKind::from_marker(marker) {
                Some(kind) => {
                    kinds.insert(kind);
                }
                None if self.mode == ScanMode::Strict => {
                    return Err(Error::unrecognized_capability(marker, class.class_name()));
                }
                None => {
                    warn!(
                        test_class = class.class_name(),
                        marker, "Ignoring unrecognized capability marker"
                    );
                }
            }
        }

        debug!(
            test_class = class.class_name(),
            kinds = ?kinds,
            "Discovered required services"
        );
        Ok(kinds)
    }
}
