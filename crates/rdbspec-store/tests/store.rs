//! Document store behavior: history, revisions, skips and rejections.

use rdbspec_store::{ActionStatus, Document, DocumentId, DocumentStore, MemoryStore, StoreError};
use serde_json::json;

#[test]
fn applied_actions_build_history_and_bump_revision() {
    let mut store = MemoryStore::new();
    let id = store.create_document(Some("payments".to_string())).expect("create");

    let receipt = store
        .apply(&id, json!({"type": "ADD_RDB_TABLE", "input": {"id": "t1", "name": "users"}}))
        .expect("apply add");
    assert_eq!(receipt.status, ActionStatus::Applied);
    assert_eq!(receipt.revision, 1);
    assert_eq!(receipt.kind.as_deref(), Some("ADD_RDB_TABLE"));

    let receipt = store
        .apply(&id, json!({"type": "UPDATE_TABLE_NAME", "input": {"id": "t1", "name": "customers"}}))
        .expect("apply rename");
    assert_eq!(receipt.revision, 2);

    let document = store.document(&id).expect("document");
    assert_eq!(document.header.revision, 2);
    assert_eq!(document.operations.len(), 2);
    assert_eq!(document.operations[0].index, 0);
    assert_eq!(document.operations[1].index, 1);
    assert_eq!(
        document.state.rdb_specification[0].name.as_deref(),
        Some("customers")
    );
    assert!(document.header.last_modified_at_utc >= document.header.created_at_utc);
}

#[test]
fn unknown_document_is_an_error() {
    let mut store = MemoryStore::new();
    let missing = DocumentId::generate();
    let result = store.apply(&missing, json!({"type": "SET_SPEC", "input": {}}));
    assert!(matches!(result, Err(StoreError::DocumentNotFound(_))));
    assert!(store.document(&missing).is_err());
}

#[test]
fn rejected_action_leaves_document_untouched() {
    let mut store = MemoryStore::new();
    let id = store.create_document(None).expect("create");
    store
        .apply(&id, json!({"type": "ADD_RDB_TABLE", "input": {"id": "t1"}}))
        .expect("apply add");
    let before = store.document(&id).expect("document").clone();

    let result = store.apply(
        &id,
        json!({"type": "ADD_RDB_COLUMN", "input": {"tableId": "t1", "id": "c1", "type": "Varchar"}}),
    );
    assert!(matches!(result, Err(StoreError::Rejected(_))));
    assert_eq!(store.document(&id).expect("document"), &before);
}

#[test]
fn foreign_action_family_is_skipped_without_recording() {
    let mut store = MemoryStore::new();
    let id = store.create_document(None).expect("create");

    let receipt = store
        .apply(&id, json!({"type": "ADD_FILE", "input": {"id": "x"}}))
        .expect("apply foreign action");
    assert_eq!(receipt.status, ActionStatus::Skipped);
    assert_eq!(receipt.revision, 0);
    assert!(store.document(&id).expect("document").operations.is_empty());
}

#[test]
fn non_global_scope_is_skipped() {
    let mut store = MemoryStore::new();
    let id = store.create_document(None).expect("create");

    let receipt = store
        .apply(
            &id,
            json!({"type": "ADD_RDB_TABLE", "input": {"id": "t1"}, "scope": "local"}),
        )
        .expect("apply scoped action");
    assert_eq!(receipt.status, ActionStatus::Skipped);
    assert!(store.document(&id).expect("document").state.rdb_specification.is_empty());
}

#[test]
fn document_round_trips_through_json() {
    let mut store = MemoryStore::new();
    let id = store.create_document(Some("payments".to_string())).expect("create");
    store
        .apply(&id, json!({"type": "ADD_QUERY_SPECIFICATION", "input": {"id": "q1"}}))
        .expect("apply add");

    let document = store.document(&id).expect("document");
    let text = serde_json::to_string_pretty(document).expect("serialize document");
    let loaded: Document = serde_json::from_str(&text).expect("deserialize document");
    assert_eq!(&loaded, document);

    let mut other = MemoryStore::new();
    let adopted = other.insert(loaded);
    assert_eq!(adopted, id);
    assert_eq!(other.document(&id).expect("document").header.revision, 1);
}

#[test]
fn document_ids_lists_every_document() {
    let mut store = MemoryStore::new();
    let a = store.create_document(None).expect("create");
    let b = store.create_document(None).expect("create");
    let ids = store.document_ids();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&a));
    assert!(ids.contains(&b));
}
