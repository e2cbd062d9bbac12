//! The Registry: single-publisher release state machine.
//!
//! Composes validation, identifier derivation, storage, and event
//! notification. Each (name, version) pair moves `Unreleased -> Released`
//! exactly once; the `Released` state is terminal.

use std::sync::Arc;

use depot_core::{
    validate_identifier_string, validate_package_name, AccountId, PackageId, Page, Release,
    ReleaseId,
};
use depot_store::Store;
use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::events::{EventSink, NoopSink, VersionRelease};

/// Receipt returned from a successful release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReceipt {
    /// Identifier of the package the release was recorded under.
    pub package_id: PackageId,

    /// Identifier of the new release.
    pub release_id: ReleaseId,

    /// The event that was emitted to the sink.
    pub event: VersionRelease,
}

/// The package release registry.
///
/// Mutating operations (`release`, `transfer_ownership`) are gated on the
/// current owner and are all-or-nothing: an ownership or validation failure
/// leaves the registry untouched. Read operations bypass the owner check.
pub struct Registry<S: Store> {
    /// The storage backend.
    store: S,

    /// The single identity allowed to mutate. Replaced only by
    /// `transfer_ownership`.
    owner: AccountId,

    /// Receiver for release notifications.
    sink: Arc<dyn EventSink>,
}

impl<S: Store> Registry<S> {
    /// Create a registry owned by `owner`, dropping all events.
    pub fn new(owner: AccountId, store: S) -> Self {
        Self::with_sink(owner, store, Arc::new(NoopSink))
    }

    /// Create a registry with an injected event sink.
    pub fn with_sink(owner: AccountId, store: S, sink: Arc<dyn EventSink>) -> Self {
        Self { store, owner, sink }
    }

    /// The current owner.
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutating Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Record a release of `version` of the named package.
    ///
    /// Creates the package on its first release. Fails with `NotOwner` for
    /// any caller but the current owner, with a validation error for a bad
    /// name, empty version, or empty manifest URI (first failing field wins),
    /// and with `ReleaseAlreadyExists` when the (name, version) pair was
    /// released before, regardless of the manifest URI.
    ///
    /// On success, exactly one [`VersionRelease`] event is emitted to the
    /// sink; on failure, none.
    pub fn release(
        &self,
        caller: &AccountId,
        name: &str,
        version: &str,
        manifest_uri: &str,
    ) -> Result<ReleaseReceipt> {
        self.ensure_owner(caller)?;

        validate_package_name(name)?;
        validate_identifier_string(version, "version")?;
        validate_identifier_string(manifest_uri, "manifest URI")?;

        let release = Release::new(
            name.to_string(),
            version.to_string(),
            manifest_uri.to_string(),
        );
        let package_id = release.package_id();
        let release_id = release.id;

        // Duplicate detection and the write are one atomic store operation.
        self.store.insert_release(release)?;

        let event = VersionRelease {
            package_name: name.to_string(),
            version: version.to_string(),
            manifest_uri: manifest_uri.to_string(),
        };
        self.sink.version_release(&event);

        debug!(
            package = %name,
            version = %version,
            release_id = %release_id,
            "version released"
        );

        Ok(ReleaseReceipt {
            package_id,
            release_id,
            event,
        })
    }

    /// Replace the owner.
    ///
    /// Only the current owner may transfer. Any well-formed [`AccountId`] is
    /// accepted, including the current owner itself.
    pub fn transfer_ownership(&mut self, caller: &AccountId, new_owner: AccountId) -> Result<()> {
        self.ensure_owner(caller)?;
        debug!(from = %self.owner, to = %new_owner, "ownership transferred");
        self.owner = new_owner;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether a package with this name has ever been released.
    pub fn package_exists(&self, name: &str) -> Result<bool> {
        Ok(self.store.package_exists(name)?)
    }

    /// Whether this exact (name, version) pair has been released.
    pub fn release_exists(&self, name: &str, version: &str) -> Result<bool> {
        Ok(self.store.release_exists(name, version)?)
    }

    /// Derive the identifier a package with this name has (or would have).
    ///
    /// Pure: no storage access, callable before any release.
    pub fn generate_package_id(&self, name: &str) -> PackageId {
        PackageId::derive(name)
    }

    /// Derive the identifier a release of (name, version) has (or would have).
    pub fn generate_release_id(&self, name: &str, version: &str) -> ReleaseId {
        ReleaseId::derive(name, version)
    }

    /// The identifier recorded for this exact (name, version) pair.
    ///
    /// Fails with `ReleaseNotFound` when the pair was never released.
    pub fn release_id(&self, name: &str, version: &str) -> Result<ReleaseId> {
        Ok(self.store.release_id(name, version)?)
    }

    /// The name of the package with the given id.
    pub fn package_name(&self, id: &PackageId) -> Result<String> {
        Ok(self.store.package_name(id)?)
    }

    /// The release record with the given id.
    pub fn release_data(&self, id: &ReleaseId) -> Result<Release> {
        Ok(self.store.release(id)?)
    }

    /// Paginate the global package id enumeration.
    pub fn all_package_ids(&self, pointer: usize, limit: usize) -> Result<Page<PackageId>> {
        Ok(self.store.package_ids(pointer, limit)?)
    }

    /// Paginate the named package's release ids.
    ///
    /// Fails with `PackageNotFound` for unknown names, independent of the
    /// pagination arguments.
    pub fn all_release_ids(&self, name: &str, pointer: usize, limit: usize) -> Result<Page<ReleaseId>> {
        Ok(self.store.release_ids(name, pointer, limit)?)
    }

    /// Total number of packages.
    pub fn package_count(&self) -> Result<usize> {
        Ok(self.store.package_count()?)
    }

    /// Total number of releases across all packages.
    pub fn release_count(&self) -> Result<usize> {
        Ok(self.store.release_count()?)
    }

    /// Size of the global package id enumeration. Same value as
    /// [`package_count`](Self::package_count).
    pub fn num_package_ids(&self) -> Result<usize> {
        self.package_count()
    }

    /// Number of releases of the named package.
    ///
    /// Fails with `PackageNotFound` when the name was never released,
    /// distinct from returning 0.
    pub fn num_release_ids(&self, name: &str) -> Result<usize> {
        Ok(self.store.release_count_of(name)?)
    }

    fn ensure_owner(&self, caller: &AccountId) -> Result<()> {
        if *caller != self.owner {
            return Err(RegistryError::NotOwner);
        }
        Ok(())
    }
}
