//! Error types for the registry.

use depot_core::ValidationError;
use depot_store::StoreError;
use thiserror::Error;

/// Errors that can occur during registry operations.
///
/// Every failure aborts the triggering operation with zero state mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Caller is not the current owner.
    #[error("caller is not the owner")]
    NotOwner,

    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Lookup or conflict failure from storage.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
