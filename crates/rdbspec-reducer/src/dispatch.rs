use serde_json::Value;
use tracing::{debug, trace};

use rdbspec_model::SpecificationState;

use crate::action::Action;
use crate::error::ReducerError;
use crate::ops::{metadata, query_specification, rdb_specification};

/// What a dispatched wire action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Exactly one operation ran for the given type tag.
    Applied { kind: &'static str },
    /// The type tag belongs to another action family; state is untouched.
    Ignored,
}

/// Route a typed action to its operation.
///
/// Exactly one operation runs per action; operations are synchronous and
/// mutate only the passed-in state. The match is exhaustive, so a new
/// action variant cannot be added without wiring an operation here.
pub fn dispatch(state: &mut SpecificationState, action: Action) {
    debug!(action = action.kind(), "applying action");
    match action {
        Action::SetSpec(input) => metadata::set_spec(state, input),
        Action::AddQuerySpecification(input) => {
            query_specification::add_query_specification(state, input);
        }
        Action::UpdateQuerySchema(input) => {
            query_specification::update_query_schema(state, input);
        }
        Action::UpdateQueryExample(input) => {
            query_specification::update_query_example(state, input);
        }
        Action::DeleteQuerySpecification(input) => {
            query_specification::delete_query_specification(state, input);
        }
        Action::AddQueryFilterParam(input) => {
            query_specification::add_query_filter_param(state, input);
        }
        Action::UpdateFilterParam(input) => {
            query_specification::update_filter_param(state, input);
        }
        Action::DeleteFilterParam(input) => {
            query_specification::delete_filter_param(state, input);
        }
        Action::SetQuerySpecName(input) => {
            query_specification::set_query_spec_name(state, input);
        }
        Action::AddRdbTable(input) => rdb_specification::add_rdb_table(state, input),
        Action::UpdateTableName(input) => rdb_specification::update_table_name(state, input),
        Action::DeleteRdbTable(input) => rdb_specification::delete_rdb_table(state, input),
        Action::AddRdbColumn(input) => rdb_specification::add_rdb_column(state, input),
        Action::UpdateRdbColumn(input) => rdb_specification::update_rdb_column(state, input),
        Action::DeleteRdbColumn(input) => rdb_specification::delete_rdb_column(state, input),
    }
}

/// Decode, validate and dispatch a wire action.
///
/// Validation completes before dispatch, so a failed decode leaves the
/// state exactly as it was; unknown type tags are passed through without
/// mutation.
pub fn apply_value(
    state: &mut SpecificationState,
    value: &Value,
) -> Result<DispatchOutcome, ReducerError> {
    match Action::from_value(value)? {
        Some(action) => {
            let kind = action.kind();
            dispatch(state, action);
            Ok(DispatchOutcome::Applied { kind })
        }
        None => {
            trace!("unrecognized action type; passing through");
            Ok(DispatchOutcome::Ignored)
        }
    }
}
