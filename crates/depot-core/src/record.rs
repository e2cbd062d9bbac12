//! Registry records: packages and releases.
//!
//! Both records are append-only. A `Package` is created on the first release
//! of its name and never deleted; a `Release` is created exactly once per
//! (name, version) pair and never updated.

use serde::{Deserialize, Serialize};

use crate::id::{PackageId, ReleaseId};

/// A named collection of releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Derived identifier: `PackageId::derive(name)`.
    pub id: PackageId,

    /// The package name. Immutable once set.
    pub name: String,

    /// Release identifiers in insertion order. Append-only.
    pub release_ids: Vec<ReleaseId>,
}

impl Package {
    /// Create a package record with no releases yet.
    pub fn new(name: String) -> Self {
        let id = PackageId::derive(&name);
        Self {
            id,
            name,
            release_ids: Vec::new(),
        }
    }
}

/// An immutable (version, manifest location) pair recorded under a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Derived identifier: `ReleaseId::derive(package_name, version)`.
    pub id: ReleaseId,

    /// Name of the owning package.
    pub package_name: String,

    /// Version string. Opaque to the registry.
    pub version: String,

    /// External locator for the release manifest. Opaque to the registry.
    pub manifest_uri: String,
}

impl Release {
    /// Create a release record, deriving its identifier from name and version.
    pub fn new(package_name: String, version: String, manifest_uri: String) -> Self {
        let id = ReleaseId::derive(&package_name, &version);
        Self {
            id,
            package_name,
            version,
            manifest_uri,
        }
    }

    /// The identifier of the owning package.
    pub fn package_id(&self) -> PackageId {
        PackageId::derive(&self.package_name)
    }
}
