use tracing::trace;

use rdbspec_model::{
    AddRdbColumnInput, AddRdbTableInput, DeleteRdbColumnInput, DeleteRdbTableInput, RdbColumn,
    RdbTable, SpecificationState, UpdateRdbColumnInput, UpdateTableNameInput,
};

/// Append a new table with an empty column list. Duplicate ids are
/// accepted without a uniqueness check; callers own id uniqueness.
pub fn add_rdb_table(state: &mut SpecificationState, input: AddRdbTableInput) {
    state.rdb_specification.push(RdbTable {
        id: input.id,
        name: input.name.into_option(),
        columns: Vec::new(),
    });
}

pub fn update_table_name(state: &mut SpecificationState, input: UpdateTableNameInput) {
    if let Some(table) = state.table_mut(&input.id) {
        input.name.apply_to(&mut table.name);
    } else {
        trace!(id = %input.id, "table not found; ignoring rename");
    }
}

pub fn delete_rdb_table(state: &mut SpecificationState, input: DeleteRdbTableInput) {
    // columns are discarded with the table; there is no intermediate state
    state.rdb_specification.retain(|table| table.id != input.id);
}

pub fn add_rdb_column(state: &mut SpecificationState, input: AddRdbColumnInput) {
    if let Some(table) = state.table_mut(&input.table_id) {
        table.columns.push(RdbColumn {
            id: input.id,
            name: input.name.into_option(),
            column_type: input.column_type,
            description: input.description.into_option(),
            source_doc_model: input.source_doc_model.into_option(),
            source_property: input.source_property.into_option(),
            primary_key: input.primary_key,
        });
    } else {
        trace!(id = %input.table_id, "table not found; ignoring column add");
    }
}

pub fn update_rdb_column(state: &mut SpecificationState, input: UpdateRdbColumnInput) {
    if let Some(table) = state.table_mut(&input.table_id) {
        if let Some(column) = table.column_mut(&input.id) {
            input.name.apply_to(&mut column.name);
            // an explicitly null type resolves to the default String,
            // unlike the other nullable fields
            input.column_type.apply_or_default(&mut column.column_type);
            input.description.apply_to(&mut column.description);
            input.source_doc_model.apply_to(&mut column.source_doc_model);
            input.source_property.apply_to(&mut column.source_property);
            input.primary_key.apply_or_default(&mut column.primary_key);
        } else {
            trace!(id = %input.id, "column not found; ignoring update");
        }
    } else {
        trace!(id = %input.table_id, "table not found; ignoring column update");
    }
}

pub fn delete_rdb_column(state: &mut SpecificationState, input: DeleteRdbColumnInput) {
    if let Some(table) = state.table_mut(&input.table_id) {
        table.columns.retain(|column| column.id != input.id);
    } else {
        trace!(id = %input.table_id, "table not found; ignoring column delete");
    }
}
