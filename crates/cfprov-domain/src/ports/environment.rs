use crate::error::Result;
use crate::value_objects::CredentialSet;

/// Publishes a provisioning pass's credentials into the process environment
///
/// Called exactly once per pass, and only with a fully populated set.
pub trait EnvironmentAdapter: Send + Sync {
    fn apply(&self, credentials: CredentialSet) -> Result<()>;
}
