use crate::value_objects::{Credentials, ServiceKind};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Credentials of one provisioning pass, keyed by service kind
///
/// Built by the aggregator and handed to the environment adapter by value.
/// It is never cached or shared across passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialSet {
    entries: BTreeMap<ServiceKind, Credentials>,
}

impl CredentialSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert credentials for a kind, returning any previous value
    pub fn insert(&mut self, kind: ServiceKind, credentials: Credentials) -> Option<Credentials> {
        self.entries.insert(kind, credentials)
    }

    pub fn get(&self, kind: ServiceKind) -> Option<&Credentials> {
        self.entries.get(&kind)
    }

    pub fn contains(&self, kind: ServiceKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Kinds present in the set, in ascending order
    pub fn kinds(&self) -> impl Iterator<Item = ServiceKind> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ServiceKind, &Credentials)> {
        self.entries.iter().map(|(kind, creds)| (*kind, creds))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for CredentialSet {
    type Item = (ServiceKind, Credentials);
    type IntoIter = btree_map::IntoIter<ServiceKind, Credentials>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(ServiceKind, Credentials)> for CredentialSet {
    fn from_iter<I: IntoIterator<Item = (ServiceKind, Credentials)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
