//! Proptest generators for property-based testing.

use proptest::prelude::*;

use depot_core::{AccountId, PackageId, ReleaseId};

/// Generate a valid package name (2..=32 bytes, lowercase).
pub fn package_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{1,31}".prop_map(String::from)
}

/// Generate a dotted version string.
pub fn version() -> impl Strategy<Value = String> {
    "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}(\\.[a-z]{1,2})?".prop_map(String::from)
}

/// Generate a manifest URI.
pub fn manifest_uri() -> impl Strategy<Value = String> {
    "ipfs://[a-z0-9]{8,46}".prop_map(String::from)
}

/// Generate a random account identity.
pub fn account_id() -> impl Strategy<Value = AccountId> {
    any::<[u8; 32]>().prop_map(AccountId::from_bytes)
}

/// Generate a random PackageId.
pub fn package_id() -> impl Strategy<Value = PackageId> {
    any::<[u8; 32]>().prop_map(PackageId::from_bytes)
}

/// Generate a random ReleaseId.
pub fn release_id() -> impl Strategy<Value = ReleaseId> {
    any::<[u8; 32]>().prop_map(ReleaseId::from_bytes)
}

/// Parameters for a single valid release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseParams {
    pub name: String,
    pub version: String,
    pub manifest_uri: String,
}

impl Arbitrary for ReleaseParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (package_name(), version(), manifest_uri())
            .prop_map(|(name, version, manifest_uri)| ReleaseParams {
                name,
                version,
                manifest_uri,
            })
            .boxed()
    }
}
