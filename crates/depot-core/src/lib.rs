//! # Depot Core
//!
//! Pure primitives for the depot release registry: identifiers, records,
//! validation, and pagination.
//!
//! This crate contains no I/O and no storage. It is pure computation over
//! registry data structures.
//!
//! ## Key Types
//!
//! - [`PackageId`] - Deterministic identifier for a package name
//! - [`ReleaseId`] - Deterministic identifier for a (name, version) pair
//! - [`AccountId`] - Opaque publisher identity
//! - [`Package`] / [`Release`] - The registry records
//!
//! ## Identifier Derivation
//!
//! Identifiers are Blake3 digests under a domain prefix, so any caller can
//! compute them without reading registry state. See [`id`].

pub mod account;
pub mod error;
pub mod id;
pub mod paginate;
pub mod record;
pub mod validation;

pub use account::AccountId;
pub use error::ValidationError;
pub use id::{PackageId, ReleaseId};
pub use paginate::{paginate, Page};
pub use record::{Package, Release};
pub use validation::{validate_identifier_string, validate_package_name};
