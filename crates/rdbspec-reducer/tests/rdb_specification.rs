//! RDB specification operations.

use rdbspec_model::{
    AddRdbColumnInput, AddRdbTableInput, ColumnType, DeleteRdbColumnInput, DeleteRdbTableInput,
    Oid, Patch, RdbColumn, SpecificationState, UpdateRdbColumnInput, UpdateTableNameInput,
};
use rdbspec_reducer::{Action, dispatch};

fn add_table(state: &mut SpecificationState, id: &str, name: &str) {
    dispatch(
        state,
        Action::AddRdbTable(AddRdbTableInput {
            id: Oid::from(id),
            name: name.to_string().into(),
        }),
    );
}

fn add_column(state: &mut SpecificationState, table_id: &str, id: &str, name: &str) {
    dispatch(
        state,
        Action::AddRdbColumn(AddRdbColumnInput {
            table_id: Oid::from(table_id),
            id: Oid::from(id),
            name: name.to_string().into(),
            column_type: ColumnType::String,
            description: Patch::Absent,
            source_doc_model: Patch::Absent,
            source_property: Patch::Absent,
            primary_key: false,
        }),
    );
}

#[test]
fn add_table_starts_with_no_columns() {
    let mut state = SpecificationState::default();
    add_table(&mut state, "t1", "users");
    assert_eq!(state.rdb_specification.len(), 1);
    assert_eq!(state.rdb_specification[0].name.as_deref(), Some("users"));
    assert!(state.rdb_specification[0].columns.is_empty());
}

#[test]
fn add_table_accepts_duplicate_ids() {
    // permissive by design: uniqueness is the caller's responsibility
    let mut state = SpecificationState::default();
    add_table(&mut state, "t1", "users");
    add_table(&mut state, "t1", "users_again");
    assert_eq!(state.rdb_specification.len(), 2);
}

#[test]
fn update_table_name_leaves_other_tables_alone() {
    let mut state = SpecificationState::default();
    add_table(&mut state, "t1", "users");
    add_table(&mut state, "t2", "products");

    dispatch(
        &mut state,
        Action::UpdateTableName(UpdateTableNameInput {
            id: Oid::from("t1"),
            name: "customers".to_string().into(),
        }),
    );
    assert_eq!(state.rdb_specification[0].name.as_deref(), Some("customers"));
    assert_eq!(state.rdb_specification[1].name.as_deref(), Some("products"));
}

#[test]
fn delete_table_discards_columns_in_one_step() {
    let mut state = SpecificationState::default();
    add_table(&mut state, "t1", "users");
    add_column(&mut state, "t1", "c1", "id");
    add_column(&mut state, "t1", "c2", "email");

    dispatch(
        &mut state,
        Action::DeleteRdbTable(DeleteRdbTableInput { id: Oid::from("t1") }),
    );
    assert!(state.rdb_specification.is_empty());
    assert_eq!(state, SpecificationState::default());
}

#[test]
fn add_column_to_unknown_table_is_a_no_op() {
    let mut state = SpecificationState::default();
    add_table(&mut state, "t1", "users");
    add_column(&mut state, "missing", "c1", "id");
    assert!(state.rdb_specification[0].columns.is_empty());
}

#[test]
fn users_table_scenario() {
    let mut state = SpecificationState::default();
    add_table(&mut state, "t1", "users");
    dispatch(
        &mut state,
        Action::AddRdbColumn(AddRdbColumnInput {
            table_id: Oid::from("t1"),
            id: Oid::from("c1"),
            name: "id".to_string().into(),
            column_type: ColumnType::String,
            description: Patch::Absent,
            source_doc_model: Patch::Absent,
            source_property: Patch::Absent,
            primary_key: true,
        }),
    );
    dispatch(
        &mut state,
        Action::UpdateRdbColumn(UpdateRdbColumnInput {
            table_id: Oid::from("t1"),
            id: Oid::from("c1"),
            name: "user_id".to_string().into(),
            column_type: Patch::Absent,
            description: Patch::Absent,
            source_doc_model: Patch::Absent,
            source_property: Patch::Absent,
            primary_key: Patch::Absent,
        }),
    );

    assert_eq!(state.rdb_specification.len(), 1);
    let table = &state.rdb_specification[0];
    assert_eq!(table.name.as_deref(), Some("users"));
    assert_eq!(
        table.columns,
        vec![RdbColumn {
            id: Oid::from("c1"),
            name: Some("user_id".to_string()),
            column_type: ColumnType::String,
            description: None,
            source_doc_model: None,
            source_property: None,
            primary_key: true,
        }]
    );
}

#[test]
fn update_column_partial_input_leaves_other_fields_untouched() {
    let mut state = SpecificationState::default();
    add_table(&mut state, "t1", "transfers");
    dispatch(
        &mut state,
        Action::AddRdbColumn(AddRdbColumnInput {
            table_id: Oid::from("t1"),
            id: Oid::from("c1"),
            name: "amount".to_string().into(),
            column_type: ColumnType::Float,
            description: "transfer amount".to_string().into(),
            source_doc_model: "payment-terms".to_string().into(),
            source_property: "amount".to_string().into(),
            primary_key: false,
        }),
    );

    dispatch(
        &mut state,
        Action::UpdateRdbColumn(UpdateRdbColumnInput {
            table_id: Oid::from("t1"),
            id: Oid::from("c1"),
            name: Patch::Absent,
            column_type: Patch::Absent,
            description: "gross transfer amount".to_string().into(),
            source_doc_model: Patch::Absent,
            source_property: Patch::Absent,
            primary_key: Patch::Absent,
        }),
    );

    let column = &state.rdb_specification[0].columns[0];
    assert_eq!(column.name.as_deref(), Some("amount"));
    assert_eq!(column.column_type, ColumnType::Float);
    assert_eq!(column.description.as_deref(), Some("gross transfer amount"));
    assert_eq!(column.source_doc_model.as_deref(), Some("payment-terms"));
    assert_eq!(column.source_property.as_deref(), Some("amount"));
    assert!(!column.primary_key);
}

#[test]
fn update_column_null_type_falls_back_to_string() {
    // candidate bug preserved from the source behavior: every other field
    // nulls out, but a null type resolves to the String default
    let mut state = SpecificationState::default();
    add_table(&mut state, "t1", "transfers");
    dispatch(
        &mut state,
        Action::AddRdbColumn(AddRdbColumnInput {
            table_id: Oid::from("t1"),
            id: Oid::from("c1"),
            name: "executed_at".to_string().into(),
            column_type: ColumnType::DateTime,
            description: "when the transfer ran".to_string().into(),
            source_doc_model: Patch::Absent,
            source_property: Patch::Absent,
            primary_key: false,
        }),
    );

    dispatch(
        &mut state,
        Action::UpdateRdbColumn(UpdateRdbColumnInput {
            table_id: Oid::from("t1"),
            id: Oid::from("c1"),
            name: Patch::Absent,
            column_type: Patch::Null,
            description: Patch::Null,
            source_doc_model: Patch::Absent,
            source_property: Patch::Absent,
            primary_key: Patch::Absent,
        }),
    );

    let column = &state.rdb_specification[0].columns[0];
    assert_eq!(column.column_type, ColumnType::String);
    assert_eq!(column.description, None);
    assert_eq!(column.name.as_deref(), Some("executed_at"));
}

#[test]
fn delete_column_removes_only_the_target() {
    let mut state = SpecificationState::default();
    add_table(&mut state, "t1", "users");
    add_column(&mut state, "t1", "c1", "id");
    add_column(&mut state, "t1", "c2", "email");

    dispatch(
        &mut state,
        Action::DeleteRdbColumn(DeleteRdbColumnInput {
            table_id: Oid::from("t1"),
            id: Oid::from("c1"),
        }),
    );
    let table = &state.rdb_specification[0];
    assert_eq!(table.columns.len(), 1);
    assert_eq!(table.columns[0].id, Oid::from("c2"));
}

#[test]
fn delete_column_with_unknown_table_is_a_no_op() {
    let mut state = SpecificationState::default();
    add_table(&mut state, "t1", "users");
    add_column(&mut state, "t1", "c1", "id");
    let before = state.clone();

    dispatch(
        &mut state,
        Action::DeleteRdbColumn(DeleteRdbColumnInput {
            table_id: Oid::from("missing"),
            id: Oid::from("c1"),
        }),
    );
    assert_eq!(state, before);
}
