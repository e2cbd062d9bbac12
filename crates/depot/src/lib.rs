//! # Depot
//!
//! A single-publisher, append-only package release registry.
//!
//! ## Overview
//!
//! Depot records immutable (name, version) releases, each pointing at an
//! externally stored manifest URI, and lets anyone enumerate packages and
//! releases deterministically with cursor pagination.
//!
//! ## Key Concepts
//!
//! - **Release**: Immutable. Never edited or deleted. A (name, version)
//!   pair is released at most once.
//! - **Package**: Created on the first release of its name; enumeration
//!   order is first-release insertion order.
//! - **Identifiers**: Blake3 digests derivable by any caller without
//!   reading registry state.
//! - **Ownership**: A single account may release and transfer; everyone may
//!   read.
//!
//! ## Usage
//!
//! ```rust
//! use depot::Registry;
//! use depot::core::AccountId;
//! use depot::store::MemoryStore;
//!
//! let publisher = AccountId::from_bytes([0x01; 32]);
//! let registry = Registry::new(publisher, MemoryStore::new());
//!
//! let receipt = registry
//!     .release(&publisher, "test-r", "1.2.3", "ipfs://some-ipfs-uri")
//!     .unwrap();
//! assert!(registry.package_exists("test-r").unwrap());
//! assert_eq!(receipt.release_id.to_hex().len(), 66);
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `depot::core` - Core primitives (ids, records, validation, pagination)
//! - `depot::store` - Storage abstraction and the in-memory store

pub mod error;
pub mod events;
pub mod registry;

// Re-export component crates
pub use depot_core as core;
pub use depot_store as store;

// Re-export main types for convenience
pub use error::{RegistryError, Result};
pub use events::{EventSink, NoopSink, RecordingSink, VersionRelease};
pub use registry::{Registry, ReleaseReceipt};

// Re-export commonly used core types
pub use depot_core::{AccountId, Package, PackageId, Page, Release, ReleaseId};
