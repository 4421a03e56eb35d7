//! Aggregate hydrator integration tests against the in-memory store.

mod support;

use orgdata_core::{
    AggregateHydrator, CoreConfig, HydrationConfig, HydrationError, InMemoryDocumentStore,
    ReferenceSpec, SessionContext, SlotConfig,
};
use serde_json::json;
use std::sync::Arc;
use support::{members_of, orgs, programs_of, seed_acme, users};

fn members_slot() -> SlotConfig {
    SlotConfig::with_reference("members", "members", ReferenceSpec::new("userId", "users", "user"))
}

#[tokio::test]
async fn scenario_a_inlines_the_referenced_user() {
    let store = Arc::new(InMemoryDocumentStore::new());
    seed_acme(&store);

    let hydrator = AggregateHydrator::new(Arc::clone(&store));
    let aggregate = hydrator
        .hydrate("organizations", "org-1", &[members_slot()])
        .await
        .unwrap();

    assert_eq!(aggregate.id, "org-1");
    assert_eq!(aggregate.field("name"), Some(&json!("Acme")));
    assert_eq!(
        aggregate.records("members").unwrap(),
        &vec![json!({
            "id": "m1",
            "userId": "u1",
            "user": {"fullName": "Ana"}
        })]
    );
}

#[tokio::test]
async fn scenario_b_missing_user_inlines_null_and_keeps_the_record() {
    let store = Arc::new(InMemoryDocumentStore::new());
    seed_acme(&store);
    store.remove(&users(), "u1");

    let hydrator = AggregateHydrator::new(Arc::clone(&store));
    let aggregate = hydrator
        .hydrate("organizations", "org-1", &[members_slot()])
        .await
        .unwrap();

    let members = aggregate.records("members").unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["user"], json!(null));
    assert_eq!(members[0]["userId"], json!("u1"));
}

#[tokio::test]
async fn scenario_c_empty_subcollection_yields_an_empty_array() {
    let store = Arc::new(InMemoryDocumentStore::new());
    store.insert_json(&orgs(), "org-2", json!({"name": "Globex"}));

    let hydrator = AggregateHydrator::new(Arc::clone(&store));
    let aggregate = hydrator
        .hydrate(
            "organizations",
            "org-2",
            &[SlotConfig::passthrough("programs", "programs")],
        )
        .await
        .unwrap();

    assert_eq!(aggregate.records("programs"), Some(&vec![]));
}

#[tokio::test]
async fn scenario_d_missing_root_fails_without_subcollection_reads() {
    let store = Arc::new(InMemoryDocumentStore::new());
    seed_acme(&store);

    let hydrator = AggregateHydrator::new(Arc::clone(&store));
    let err = hydrator
        .hydrate("organizations", "missing-1", &[members_slot()])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        HydrationError::RootNotFound {
            collection: "organizations".to_string(),
            id: "missing-1".to_string(),
        }
    );
    assert_eq!(store.reads_for(&members_of("missing-1")), 0);
    assert_eq!(store.reads_for(&users()), 0);
    assert_eq!(store.total_reads(), 1);
}

#[tokio::test]
async fn blank_root_id_is_rejected_before_any_store_call() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let hydrator = AggregateHydrator::new(Arc::clone(&store));

    let err = hydrator
        .hydrate("organizations", "   ", &[members_slot()])
        .await
        .unwrap_err();

    assert_eq!(err, HydrationError::InvalidRootId);
    assert_eq!(store.total_reads(), 0);
}

#[tokio::test]
async fn root_transport_failure_surfaces_store_unavailable() {
    let store = Arc::new(InMemoryDocumentStore::new());
    seed_acme(&store);
    store.fail_path(&orgs());

    let hydrator = AggregateHydrator::new(Arc::clone(&store));
    let err = hydrator
        .hydrate("organizations", "org-1", &[members_slot()])
        .await
        .unwrap_err();

    assert!(matches!(err, HydrationError::StoreUnavailable(_)));
}

#[tokio::test]
async fn enrichment_failure_degrades_to_null_instead_of_failing() {
    let store = Arc::new(InMemoryDocumentStore::new());
    seed_acme(&store);
    store.fail_path(&users());

    let hydrator = AggregateHydrator::new(Arc::clone(&store));
    let aggregate = hydrator
        .hydrate("organizations", "org-1", &[members_slot()])
        .await
        .unwrap();

    let members = aggregate.records("members").unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["user"], json!(null));
}

#[tokio::test]
async fn slot_fetch_failure_leaves_the_slot_empty_but_present() {
    let store = Arc::new(InMemoryDocumentStore::new());
    seed_acme(&store);
    store.fail_path(&members_of("org-1"));

    let hydrator = AggregateHydrator::new(Arc::clone(&store));
    let aggregate = hydrator
        .hydrate("organizations", "org-1", &[members_slot()])
        .await
        .unwrap();

    assert_eq!(aggregate.records("members"), Some(&vec![]));
}

#[tokio::test]
async fn record_without_a_usable_foreign_key_inlines_null() {
    let store = Arc::new(InMemoryDocumentStore::new());
    store.insert_json(&orgs(), "org-1", json!({"name": "Acme"}));
    store.insert_json(&members_of("org-1"), "m1", json!({"note": "no key"}));
    store.insert_json(&members_of("org-1"), "m2", json!({"userId": 42}));

    let hydrator = AggregateHydrator::new(Arc::clone(&store));
    let aggregate = hydrator
        .hydrate("organizations", "org-1", &[members_slot()])
        .await
        .unwrap();

    let members = aggregate.records("members").unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["user"], json!(null));
    assert_eq!(members[1]["user"], json!(null));
}

#[tokio::test]
async fn every_configured_slot_key_is_present() {
    let store = Arc::new(InMemoryDocumentStore::new());
    seed_acme(&store);

    let slots = vec![
        members_slot(),
        SlotConfig::passthrough("programs", "programs"),
        SlotConfig::passthrough("files", "files"),
    ];
    let hydrator = AggregateHydrator::new(Arc::clone(&store));
    let aggregate = hydrator
        .hydrate("organizations", "org-1", &slots)
        .await
        .unwrap();

    assert_eq!(aggregate.records("members").map(Vec::len), Some(1));
    assert_eq!(aggregate.records("programs"), Some(&vec![]));
    assert_eq!(aggregate.records("files"), Some(&vec![]));
}

#[tokio::test]
async fn records_preserve_enumeration_order() {
    let store = Arc::new(InMemoryDocumentStore::new());
    store.insert_json(&orgs(), "org-1", json!({"name": "Acme"}));
    for id in ["m3", "m1", "m2"] {
        store.insert_json(
            &members_of("org-1"),
            id,
            json!({"userId": format!("user-{id}")}),
        );
    }

    let hydrator = AggregateHydrator::new(Arc::clone(&store));
    let aggregate = hydrator
        .hydrate("organizations", "org-1", &[members_slot()])
        .await
        .unwrap();

    let ids: Vec<&str> = aggregate
        .records("members")
        .unwrap()
        .iter()
        .map(|record| record["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["m1", "m2", "m3"]);
}

#[tokio::test]
async fn probe_on_and_off_produce_identical_aggregates() {
    let store = Arc::new(InMemoryDocumentStore::new());
    seed_acme(&store);
    store.insert_json(&programs_of("org-1"), "p1", json!({"name": "Mentorship"}));

    let slots = vec![members_slot(), SlotConfig::passthrough("programs", "programs")];

    let probing = AggregateHydrator::with_config(
        Arc::clone(&store),
        HydrationConfig {
            existence_probe: true,
            ..HydrationConfig::default()
        },
    );
    let direct = AggregateHydrator::with_config(
        Arc::clone(&store),
        HydrationConfig {
            existence_probe: false,
            ..HydrationConfig::default()
        },
    );

    let with_probe = probing.hydrate("organizations", "org-1", &slots).await.unwrap();
    let without_probe = direct.hydrate("organizations", "org-1", &slots).await.unwrap();
    assert_eq!(with_probe, without_probe);
}

#[tokio::test]
async fn probe_short_circuits_empty_slots_to_a_single_read() {
    let store = Arc::new(InMemoryDocumentStore::new());
    store.insert_json(&orgs(), "org-1", json!({"name": "Acme"}));

    let hydrator = AggregateHydrator::new(Arc::clone(&store));
    hydrator
        .hydrate(
            "organizations",
            "org-1",
            &[SlotConfig::passthrough("programs", "programs")],
        )
        .await
        .unwrap();

    assert_eq!(store.reads_for(&programs_of("org-1")), 1);
}

#[tokio::test]
async fn repeated_hydration_of_an_unchanged_store_is_deep_equal() {
    let store = Arc::new(InMemoryDocumentStore::new());
    seed_acme(&store);

    let hydrator = AggregateHydrator::new(Arc::clone(&store));
    let slots = vec![members_slot(), SlotConfig::passthrough("programs", "programs")];
    let first = hydrator.hydrate("organizations", "org-1", &slots).await.unwrap();
    let second = hydrator.hydrate("organizations", "org-1", &slots).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn session_context_hydrator_reads_through_the_session_store() {
    let store = Arc::new(InMemoryDocumentStore::new());
    seed_acme(&store);

    let mut context = SessionContext::open("u1", Arc::clone(&store), CoreConfig::default());
    context.select_org("org-1");

    let aggregate = context
        .hydrator()
        .hydrate(
            "organizations",
            context.active_org.as_deref().unwrap(),
            &[members_slot()],
        )
        .await
        .unwrap();

    assert_eq!(aggregate.field("name"), Some(&json!("Acme")));
    context.close();
}

#[tokio::test]
async fn aborting_the_hydration_discards_it_without_a_result() {
    let store = Arc::new(InMemoryDocumentStore::new());
    seed_acme(&store);

    let hydrator = AggregateHydrator::new(Arc::clone(&store));
    let handle = tokio::spawn(async move {
        hydrator
            .hydrate("organizations", "org-1", &[members_slot()])
            .await
    });
    handle.abort();

    match handle.await {
        Err(join_error) => assert!(join_error.is_cancelled()),
        // The task may have finished before the abort landed; either way
        // no partial aggregate escapes.
        Ok(result) => assert!(result.is_ok()),
    }

    // The store stays usable for the next caller.
    let retry = AggregateHydrator::new(Arc::clone(&store))
        .hydrate("organizations", "org-1", &[members_slot()])
        .await
        .unwrap();
    assert_eq!(retry.field("name"), Some(&json!("Acme")));
}
