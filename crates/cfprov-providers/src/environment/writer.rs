//! Environment writers

use cfprov_domain::error::{Error, Result};
use dashmap::DashMap;

/// Destination for environment variables
pub trait EnvWriter: Send + Sync {
    fn set_var(&self, key: &str, value: &str) -> Result<()>;
}

/// Writes to the environment of the current process
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvWriter;

impl ProcessEnvWriter {
    pub fn new() -> Self {
        Self
    }
}

impl EnvWriter for ProcessEnvWriter {
    fn set_var(&self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() || key.contains(['=', '\0']) {
            return Err(Error::infrastructure(format!(
                "Invalid environment variable name: {key:?}"
            )));
        }
        if value.contains('\0') {
            return Err(Error::infrastructure(format!(
                "Value for environment variable {key} contains a NUL byte"
            )));
        }

        // SAFETY: bindings are applied during test setup, before the code
        // under test starts threads that read the environment.
        #[allow(unsafe_code)]
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }
}

/// Collects variables in memory instead of touching the process environment
#[derive(Debug, Default)]
pub struct InMemoryEnvWriter {
    vars: DashMap<String, String>,
}

impl InMemoryEnvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value written for `key`, if any
    pub fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).map(|v| v.value().clone())
    }

    /// Number of distinct variables written
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvWriter for InMemoryEnvWriter {
    fn set_var(&self, key: &str, value: &str) -> Result<()> {
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
