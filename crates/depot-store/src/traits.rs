//! Store trait: the abstract interface for registry record storage.
//!
//! The trait keeps the registry storage-agnostic. The shipped implementation
//! is [`MemoryStore`](crate::memory::MemoryStore); the registry's concurrency
//! model is single-writer and synchronous, so the interface is synchronous
//! too.
//!
//! # Design Notes
//!
//! - **Existence vs. lookup**: `package_exists` / `release_exists` return
//!   `false` for unknown keys, while name-scoped lookups (`release_count_of`,
//!   `release_ids`) fail with `PackageNotFound`. Callers can distinguish
//!   "exists with zero" from "never existed".
//! - **Exact-key lookups** (`release`, `release_id`) fail with
//!   `ReleaseNotFound` whether or not the package itself exists.

use depot_core::{Page, PackageId, Release, ReleaseId};

use crate::error::Result;

/// Interface for package and release record storage.
pub trait Store: Send + Sync {
    /// Insert a release, creating its package on first release of the name.
    ///
    /// Appends the package to the global enumeration order only when the
    /// package is new, and always appends the release id to the package's
    /// release list. Rejects `ReleaseAlreadyExists` for a duplicate
    /// (name, version) pair with no state change.
    fn insert_release(&self, release: Release) -> Result<()>;

    /// Whether a package with this name has ever been released.
    fn package_exists(&self, name: &str) -> Result<bool>;

    /// Whether this exact (name, version) pair has been released.
    ///
    /// Returns `false`, not an error, when the package itself is unknown.
    fn release_exists(&self, name: &str, version: &str) -> Result<bool>;

    /// Get the name of the package with the given id.
    fn package_name(&self, id: &PackageId) -> Result<String>;

    /// Get the release record with the given id.
    fn release(&self, id: &ReleaseId) -> Result<Release>;

    /// Get the release id recorded for this exact (name, version) pair.
    fn release_id(&self, name: &str, version: &str) -> Result<ReleaseId>;

    /// Total number of packages, 0 initially.
    fn package_count(&self) -> Result<usize>;

    /// Total number of releases across all packages, 0 initially.
    fn release_count(&self) -> Result<usize>;

    /// Number of releases of the named package.
    ///
    /// Fails with `PackageNotFound` when the name was never released; never
    /// returns 0 (a package exists only once it has a release).
    fn release_count_of(&self, name: &str) -> Result<usize>;

    /// Paginate the global package id order.
    fn package_ids(&self, pointer: usize, limit: usize) -> Result<Page<PackageId>>;

    /// Paginate the named package's release ids.
    ///
    /// Fails with `PackageNotFound` for unknown names, independent of the
    /// pagination arguments.
    fn release_ids(&self, name: &str, pointer: usize, limit: usize) -> Result<Page<ReleaseId>>;
}
