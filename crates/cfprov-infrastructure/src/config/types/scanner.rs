//! Capability scanner configuration

use cfprov_application::ScanMode;
use serde::{Deserialize, Serialize};

/// Capability scanner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Fail on capability markers with no registered service kind
    pub strict: bool,
}

impl ScannerConfig {
    pub fn scan_mode(&self) -> ScanMode {
        if self.strict {
            ScanMode::Strict
        } else {
            ScanMode::Lenient
        }
    }
}
