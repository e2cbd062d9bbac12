//! In-memory implementation of the Store trait.
//!
//! Keeps the whole registry state in memory, guarded by an RwLock so readers
//! always observe the state as of the most recently completed insert.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use depot_core::{paginate, Package, PackageId, Page, Release, ReleaseId};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::traits::Store;

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

struct MemoryStoreInner {
    /// Packages indexed by derived id.
    packages: HashMap<PackageId, Package>,

    /// Global package enumeration order: first-release insertion order.
    package_order: Vec<PackageId>,

    /// Releases indexed by derived id.
    releases: HashMap<ReleaseId, Release>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryStoreInner {
                packages: HashMap::new(),
                package_order: Vec::new(),
                releases: HashMap::new(),
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn insert_release(&self, release: Release) -> Result<()> {
        let mut guard = self.inner.write().unwrap();
        let inner = &mut *guard;

        let release_id = release.id;
        if inner.releases.contains_key(&release_id) {
            return Err(StoreError::ReleaseAlreadyExists { id: release_id });
        }

        let package_id = release.package_id();
        let package = match inner.packages.entry(package_id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                // First release of this name: register the package at the
                // end of the global order.
                inner.package_order.push(package_id);
                entry.insert(Package::new(release.package_name.clone()))
            }
        };
        package.release_ids.push(release_id);

        debug!(
            package = %release.package_name,
            version = %release.version,
            release_id = %release_id,
            "release inserted"
        );

        inner.releases.insert(release_id, release);
        Ok(())
    }

    fn package_exists(&self, name: &str) -> Result<bool> {
        let inner = self.inner.read().unwrap();
        Ok(inner.packages.contains_key(&PackageId::derive(name)))
    }

    fn release_exists(&self, name: &str, version: &str) -> Result<bool> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .releases
            .contains_key(&ReleaseId::derive(name, version)))
    }

    fn package_name(&self, id: &PackageId) -> Result<String> {
        let inner = self.inner.read().unwrap();
        inner
            .packages
            .get(id)
            .map(|p| p.name.clone())
            .ok_or_else(|| StoreError::PackageNotFound(id.to_hex()))
    }

    fn release(&self, id: &ReleaseId) -> Result<Release> {
        let inner = self.inner.read().unwrap();
        inner
            .releases
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::ReleaseNotFound(id.to_hex()))
    }

    fn release_id(&self, name: &str, version: &str) -> Result<ReleaseId> {
        let inner = self.inner.read().unwrap();
        let id = ReleaseId::derive(name, version);
        if inner.releases.contains_key(&id) {
            Ok(id)
        } else {
            Err(StoreError::ReleaseNotFound(format!("{name} {version}")))
        }
    }

    fn package_count(&self) -> Result<usize> {
        let inner = self.inner.read().unwrap();
        Ok(inner.package_order.len())
    }

    fn release_count(&self) -> Result<usize> {
        let inner = self.inner.read().unwrap();
        Ok(inner.releases.len())
    }

    fn release_count_of(&self, name: &str) -> Result<usize> {
        let inner = self.inner.read().unwrap();
        inner
            .packages
            .get(&PackageId::derive(name))
            .map(|p| p.release_ids.len())
            .ok_or_else(|| StoreError::PackageNotFound(name.to_string()))
    }

    fn package_ids(&self, pointer: usize, limit: usize) -> Result<Page<PackageId>> {
        let inner = self.inner.read().unwrap();
        Ok(paginate(&inner.package_order, pointer, limit))
    }

    fn release_ids(&self, name: &str, pointer: usize, limit: usize) -> Result<Page<ReleaseId>> {
        let inner = self.inner.read().unwrap();
        let package = inner
            .packages
            .get(&PackageId::derive(name))
            .ok_or_else(|| StoreError::PackageNotFound(name.to_string()))?;
        Ok(paginate(&package.release_ids, pointer, limit))
    }
}
