//! Error types for the store module.

use depot_core::ReleaseId;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No package with this name (or id) has ever been released.
    #[error("package does not exist: {0}")]
    PackageNotFound(String),

    /// No release with this exact (name, version) pair, or this id, exists.
    #[error("release does not exist: {0}")]
    ReleaseNotFound(String),

    /// The (name, version) pair was already released. Releases are permanent.
    #[error("release already exists: {id}")]
    ReleaseAlreadyExists {
        /// Identifier of the existing release.
        id: ReleaseId,
    },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
