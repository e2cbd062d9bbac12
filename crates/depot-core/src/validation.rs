//! Input validation for mutating operations.
//!
//! Pure and stateless. Lengths are measured in bytes.

use crate::error::ValidationError;

/// Minimum package name length in bytes.
pub const MIN_NAME_LEN: usize = 2;

/// Maximum package name length in bytes.
pub const MAX_NAME_LEN: usize = 255;

/// Validate a package name.
///
/// Fails if the name is empty, shorter than [`MIN_NAME_LEN`], or longer
/// than [`MAX_NAME_LEN`].
pub fn validate_package_name(name: &str) -> Result<(), ValidationError> {
    if name.len() < MIN_NAME_LEN || name.len() > MAX_NAME_LEN {
        return Err(ValidationError::InvalidPackageName(name.to_string()));
    }
    Ok(())
}

/// Validate a version or manifest URI string.
///
/// Fails if the string is empty. No upper bound is enforced.
pub fn validate_identifier_string(s: &str, field: &'static str) -> Result<(), ValidationError> {
    if s.is_empty() {
        return Err(ValidationError::InvalidStringIdentifier { field });
    }
    Ok(())
}
