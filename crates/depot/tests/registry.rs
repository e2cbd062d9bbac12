//! End-to-end registry behavior: release flow, enumeration, pagination,
//! validation, and ownership gating.

use std::sync::Arc;

use depot::core::ValidationError;
use depot::store::{MemoryStore, StoreError};
use depot::{AccountId, PackageId, RecordingSink, Registry, RegistryError, ReleaseId};

const RELEASE_A: (&str, &str, &str) = ("test-r", "1.2.3.t.u", "ipfs://some-ipfs-uri");
const RELEASE_B: (&str, &str, &str) = ("test-r", "2.3.4.v.y", "ipfs://some-other-ipfs-uri");
const RELEASE_C: (&str, &str, &str) = ("test-r", "3.4.5.w.q", "ipfs://yet-another-ipfs-uri");

fn owner() -> AccountId {
    AccountId::from_bytes([0xa0; 32])
}

fn new_registry() -> (Registry<MemoryStore>, Arc<RecordingSink>) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let sink = Arc::new(RecordingSink::new());
    let registry = Registry::with_sink(owner(), MemoryStore::new(), sink.clone());
    (registry, sink)
}

fn release_all(registry: &Registry<MemoryStore>, infos: &[(&str, &str, &str)]) {
    for (name, version, uri) in infos {
        registry.release(&owner(), name, version, uri).unwrap();
    }
}

#[test]
fn release_then_lookup() {
    let (registry, sink) = new_registry();
    let (name, version, uri) = RELEASE_A;

    let receipt = registry.release(&owner(), name, version, uri).unwrap();

    assert!(registry.package_exists(name).unwrap());
    assert!(registry.release_exists(name, version).unwrap());

    // Derived, stored, and receipt ids all agree.
    let generated = registry.generate_release_id(name, version);
    assert_eq!(receipt.release_id, generated);
    assert_eq!(registry.release_id(name, version).unwrap(), generated);

    // The record carries exactly what was released.
    let data = registry.release_data(&generated).unwrap();
    assert_eq!(data.package_name, name);
    assert_eq!(data.version, version);
    assert_eq!(data.manifest_uri, uri);

    // Exactly one event, carrying the release fields.
    let events = sink.recorded();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].package_name, name);
    assert_eq!(events[0].version, version);
    assert_eq!(events[0].manifest_uri, uri);

    // The new id shows up in the package's enumeration.
    let page = registry.all_release_ids(name, 0, 100).unwrap();
    assert!(page.items.contains(&generated));
}

#[test]
fn retrieves_all_package_ids_and_names() {
    let (registry, _) = new_registry();
    let infos = [
        ("test-a", "1.2.3.a.b", "ipfs://a"),
        ("test-b", "2.3.4.c.d", "ipfs://b"),
    ];
    release_all(&registry, &infos);

    let id_a = registry.generate_package_id("test-a");
    let id_b = registry.generate_package_id("test-b");

    let page = registry.all_package_ids(0, 100).unwrap();
    assert_eq!(page.items, vec![id_a, id_b]);

    assert_eq!(registry.package_name(&id_a).unwrap(), "test-a");
    assert_eq!(registry.package_name(&id_b).unwrap(), "test-b");
}

#[test]
fn retrieves_release_by_release_id() {
    let (registry, _) = new_registry();
    release_all(&registry, &[RELEASE_A, RELEASE_B]);

    for (name, version, uri) in [RELEASE_A, RELEASE_B] {
        let id = registry.generate_release_id(name, version);
        let data = registry.release_data(&id).unwrap();
        assert_eq!(data.id, id);
        assert_eq!(data.package_name, name);
        assert_eq!(data.version, version);
        assert_eq!(data.manifest_uri, uri);
    }
}

#[test]
fn counts_across_interleaved_packages() {
    let (registry, _) = new_registry();
    let infos = [
        ("test-a", "1.2.3.a.b", "ipfs://a"),
        ("test-b", "2.3.4.c.d", "ipfs://b"),
        ("test-c", "3.4.5.e.f", "ipfs://c"),
        ("test-c", "3.4.6.e.f", "ipfs://d"),
        ("test-b", "2.4.5.c.d", "ipfs://e"),
        ("test-c", "3.5.5.e.f", "ipfs://f"),
    ];
    release_all(&registry, &infos);

    assert_eq!(registry.num_package_ids().unwrap(), 3);
    assert_eq!(registry.num_release_ids("test-a").unwrap(), 1);
    assert_eq!(registry.num_release_ids("test-b").unwrap(), 2);
    assert_eq!(registry.num_release_ids("test-c").unwrap(), 3);
    assert_eq!(registry.release_count().unwrap(), 6);
}

#[test]
fn empty_registry_counts_and_missing_package() {
    let (registry, _) = new_registry();

    assert_eq!(registry.package_count().unwrap(), 0);
    assert_eq!(registry.release_count().unwrap(), 0);
    assert_eq!(registry.num_package_ids().unwrap(), 0);

    // A never-released name fails, distinct from a zero count.
    assert_eq!(
        registry.num_release_ids("test-r").unwrap_err(),
        RegistryError::Store(StoreError::PackageNotFound("test-r".to_string()))
    );
}

#[test]
fn cannot_re_release_same_version() {
    let (registry, sink) = new_registry();
    release_all(&registry, &[RELEASE_A]);

    // Same pair, same URI.
    let err = registry
        .release(&owner(), RELEASE_A.0, RELEASE_A.1, RELEASE_A.2)
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Store(StoreError::ReleaseAlreadyExists { .. })
    ));

    // Same pair, different URI: still rejected, original record untouched.
    let err = registry
        .release(&owner(), RELEASE_A.0, RELEASE_A.1, "ipfs://changed")
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Store(StoreError::ReleaseAlreadyExists { .. })
    ));

    let id = registry.release_id(RELEASE_A.0, RELEASE_A.1).unwrap();
    assert_eq!(
        registry.release_data(&id).unwrap().manifest_uri,
        RELEASE_A.2
    );

    // Only the first release emitted an event.
    assert_eq!(sink.len(), 1);
}

#[test]
fn all_release_ids_unknown_package() {
    let (registry, _) = new_registry();
    release_all(&registry, &[RELEASE_A]);

    let err = registry.all_release_ids("test-none", 0, 20).unwrap_err();
    assert_eq!(
        err,
        RegistryError::Store(StoreError::PackageNotFound("test-none".to_string()))
    );
}

#[test]
fn pagination_pointer_at_release_count() {
    let (registry, _) = new_registry();
    release_all(&registry, &[RELEASE_A, RELEASE_B, RELEASE_C]);

    let page = registry.all_release_ids("test-r", 3, 20).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.pointer, 3);
}

#[test]
fn pagination_nonzero_offset() {
    let (registry, _) = new_registry();
    release_all(&registry, &[RELEASE_A, RELEASE_B, RELEASE_C]);

    let page = registry.all_release_ids("test-r", 1, 20).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.pointer, 3);
}

#[test]
fn pagination_zero_limit() {
    let (registry, _) = new_registry();
    release_all(&registry, &[RELEASE_A, RELEASE_B, RELEASE_C]);

    let page = registry.all_release_ids("test-r", 0, 0).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.pointer, 0);
}

#[test]
fn pagination_limit_past_end() {
    let (registry, _) = new_registry();
    release_all(&registry, &[RELEASE_A, RELEASE_B, RELEASE_C]);

    let page = registry.all_release_ids("test-r", 0, 4).unwrap();
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.pointer, 3);
}

#[test]
fn pagination_multi_call_walk() {
    let (registry, _) = new_registry();
    release_all(&registry, &[RELEASE_A, RELEASE_B, RELEASE_C]);
    assert_eq!(registry.num_release_ids("test-r").unwrap(), 3);

    let first = registry.all_release_ids("test-r", 0, 2).unwrap();
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.pointer, 2);

    let second = registry.all_release_ids("test-r", first.pointer, 2).unwrap();
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.pointer, 3);

    let third = registry.all_release_ids("test-r", second.pointer, 2).unwrap();
    assert!(third.items.is_empty());
    assert_eq!(third.pointer, 3);

    // The walk visited every release exactly once, in insertion order.
    let mut all: Vec<ReleaseId> = first.items;
    all.extend(second.items);
    assert_eq!(
        all,
        vec![
            registry.generate_release_id("test-r", "1.2.3.t.u"),
            registry.generate_release_id("test-r", "2.3.4.v.y"),
            registry.generate_release_id("test-r", "3.4.5.w.q"),
        ]
    );
}

#[test]
fn generate_release_id_before_any_release() {
    let (registry, _) = new_registry();

    let id = registry.generate_release_id("text-xx", "1.0.0");
    let hex = id.to_hex();
    assert!(hex.starts_with("0x"));
    assert_eq!(hex.len(), 66);

    // Deterministic across calls and across registry instances.
    let (other, _) = new_registry();
    assert_eq!(other.generate_release_id("text-xx", "1.0.0"), id);
}

#[test]
fn get_package_name_unknown_id() {
    let (registry, _) = new_registry();
    let err = registry
        .package_name(&PackageId::derive("xxx"))
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Store(StoreError::PackageNotFound(_))
    ));
}

#[test]
fn get_release_id_unknown_release() {
    let (registry, _) = new_registry();
    let err = registry.release_id("nonexistent", "x.x.x").unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Store(StoreError::ReleaseNotFound(_))
    ));
}

#[test]
fn validation_rejections() {
    let (registry, sink) = new_registry();

    let long_name = "x".repeat(256);
    for name in ["", "x", long_name.as_str()] {
        let err = registry
            .release(&owner(), name, "x.x.x", "ipfs://uri")
            .unwrap_err();
        assert!(
            matches!(
                err,
                RegistryError::Validation(ValidationError::InvalidPackageName(_))
            ),
            "name {name:?} should be rejected"
        );
    }

    let err = registry
        .release(&owner(), "pkg", "", "ipfs://uri")
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Validation(ValidationError::InvalidStringIdentifier { field: "version" })
    ));

    let err = registry.release(&owner(), "pkg", "x.x.x", "").unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Validation(ValidationError::InvalidStringIdentifier {
            field: "manifest URI"
        })
    ));

    // No event escaped any failed release, and nothing was stored.
    assert!(sink.is_empty());
    assert_eq!(registry.package_count().unwrap(), 0);
}

#[test]
fn only_current_owner_can_release() {
    let (mut registry, _) = new_registry();
    let new_owner = AccountId::from_bytes([0xb0; 32]);
    let outsider = AccountId::from_bytes([0xc0; 32]);

    assert_eq!(registry.owner(), owner());
    registry
        .release(&owner(), "test-a", "1.2.3", "ipfs://some-ipfs-uri")
        .unwrap();

    let err = registry
        .release(&outsider, "test-b", "x.x.x", "ipfs://uri")
        .unwrap_err();
    assert_eq!(err, RegistryError::NotOwner);

    registry.transfer_ownership(&owner(), new_owner).unwrap();
    assert_eq!(registry.owner(), new_owner);

    // The prior owner lost release rights; the new owner gained them.
    let err = registry
        .release(&owner(), "test-b", "x.x.x", "ipfs://uri")
        .unwrap_err();
    assert_eq!(err, RegistryError::NotOwner);
    registry
        .release(&new_owner, "test-b", "x.x.x", "ipfs://uri")
        .unwrap();
}
