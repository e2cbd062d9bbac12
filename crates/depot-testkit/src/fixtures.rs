//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use depot::{RecordingSink, Registry, ReleaseReceipt, Result, VersionRelease};
use depot_core::AccountId;
use depot_store::MemoryStore;

/// A registry wired to an in-memory store and a recording event sink.
pub struct RegistryFixture {
    pub owner: AccountId,
    pub registry: Registry<MemoryStore>,
    sink: Arc<RecordingSink>,
}

impl RegistryFixture {
    /// Create a fixture with a fixed default owner.
    pub fn new() -> Self {
        Self::with_owner(AccountId::from_bytes([0x01; 32]))
    }

    /// Create a fixture owned by the given account.
    pub fn with_owner(owner: AccountId) -> Self {
        let sink = Arc::new(RecordingSink::new());
        let registry = Registry::with_sink(owner, MemoryStore::new(), sink.clone());
        Self {
            owner,
            registry,
            sink,
        }
    }

    /// Release as the fixture owner.
    pub fn release(&self, name: &str, version: &str, manifest_uri: &str) -> Result<ReleaseReceipt> {
        self.registry.release(&self.owner, name, version, manifest_uri)
    }

    /// Release several versions of one package, in order.
    pub fn release_versions(&self, name: &str, versions: &[&str]) -> Result<Vec<ReleaseReceipt>> {
        versions
            .iter()
            .map(|v| self.release(name, v, &format!("ipfs://{name}/{v}")))
            .collect()
    }

    /// All events emitted so far.
    pub fn events(&self) -> Vec<VersionRelease> {
        self.sink.recorded()
    }
}

impl Default for RegistryFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Distinct accounts for multi-party ownership tests.
pub fn accounts(count: usize) -> Vec<AccountId> {
    (0..count)
        .map(|i| {
            let mut bytes = [0u8; 32];
            bytes[0] = i as u8 + 1;
            AccountId::from_bytes(bytes)
        })
        .collect()
}
