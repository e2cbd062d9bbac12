//! # Depot Testkit
//!
//! Testing utilities for the depot registry.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Helper structs for setting up registry test scenarios
//! - **Generators**: Proptest strategies for property-based testing
//!
//! ## Test Fixtures
//!
//! Quickly set up a registry with a recording event sink:
//!
//! ```rust
//! use depot_testkit::RegistryFixture;
//!
//! let fixture = RegistryFixture::new();
//! fixture.release("test-r", "1.2.3", "ipfs://some-ipfs-uri").unwrap();
//! assert_eq!(fixture.events().len(), 1);
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use depot_testkit::generators::{package_name, version};
//! use depot_core::ReleaseId;
//!
//! proptest! {
//!     #[test]
//!     fn release_id_deterministic(name in package_name(), v in version()) {
//!         prop_assert_eq!(ReleaseId::derive(&name, &v), ReleaseId::derive(&name, &v));
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::RegistryFixture;
pub use generators::{account_id, manifest_uri, package_name, version, ReleaseParams};
