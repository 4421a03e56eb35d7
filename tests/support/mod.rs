//! Shared seeding helpers for the integration tests.

#![allow(dead_code)]

use orgdata_core::{CollectionPath, InMemoryDocumentStore};
use serde_json::json;

pub fn orgs() -> CollectionPath {
    CollectionPath::new("organizations")
}

pub fn users() -> CollectionPath {
    CollectionPath::new("users")
}

pub fn members_of(org_id: &str) -> CollectionPath {
    orgs().subcollection(org_id, "members")
}

pub fn programs_of(org_id: &str) -> CollectionPath {
    orgs().subcollection(org_id, "programs")
}

/// Scenario seed: `org-1` ("Acme") with one member record referencing
/// user `u1` ("Ana").
pub fn seed_acme(store: &InMemoryDocumentStore) {
    store.insert_json(&orgs(), "org-1", json!({"name": "Acme"}));
    store.insert_json(&members_of("org-1"), "m1", json!({"userId": "u1"}));
    store.insert_json(&users(), "u1", json!({"fullName": "Ana"}));
}
