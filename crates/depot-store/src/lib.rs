//! # Depot Store
//!
//! Storage abstraction for the depot registry. Provides a trait-based
//! interface for package and release records with an in-memory
//! implementation.
//!
//! ## Key Types
//!
//! - [`Store`] - The trait for all storage operations
//! - [`MemoryStore`] - Insertion-ordered in-memory storage
//! - [`StoreError`] - Lookup and conflict failures
//!
//! ## Design Notes
//!
//! - **Append-only**: releases are inserted exactly once; a duplicate
//!   (name, version) insert is rejected, never overwritten.
//! - **Insertion order**: the global package enumeration order and the
//!   per-package release order are first-release insertion order, preserved
//!   exactly across later inserts.
//! - **Atomic inserts**: an insert either fully applies (package creation
//!   plus release append) or leaves the store untouched.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::Store;
