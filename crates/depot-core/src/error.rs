//! Error types for depot core.

use thiserror::Error;

/// Input validation errors, raised before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Package name is empty, shorter than 2 bytes, or longer than 255 bytes.
    #[error("invalid package name: {0:?}")]
    InvalidPackageName(String),

    /// Version or manifest URI is empty.
    #[error("invalid string identifier: {field} must not be empty")]
    InvalidStringIdentifier {
        /// Which field failed ("version" or "manifest URI").
        field: &'static str,
    },
}
