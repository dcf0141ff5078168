use tracing::trace;

use rdbspec_model::{
    AddQueryFilterParamInput, AddQuerySpecificationInput, DeleteFilterParamInput,
    DeleteQuerySpecificationInput, QueryFilterParam, QuerySpecification, SetQuerySpecNameInput,
    SpecificationState, UpdateFilterParamInput, UpdateQueryExampleInput, UpdateQuerySchemaInput,
};

/// Append a new query specification. Duplicate ids are accepted without a
/// uniqueness check; callers own id uniqueness.
pub fn add_query_specification(state: &mut SpecificationState, input: AddQuerySpecificationInput) {
    state.query_specifications.push(QuerySpecification {
        id: input.id,
        // new query specifications start with an empty display name, not null
        name: Some(String::new()),
        query_schema: input.query_schema.into_option(),
        query_example: input.query_example.into_option(),
        filter: Vec::new(),
    });
}

pub fn update_query_schema(state: &mut SpecificationState, input: UpdateQuerySchemaInput) {
    if let Some(spec) = state.query_specification_mut(&input.id) {
        input.query_schema.apply_to(&mut spec.query_schema);
    } else {
        trace!(id = %input.id, "query specification not found; ignoring schema update");
    }
}

pub fn update_query_example(state: &mut SpecificationState, input: UpdateQueryExampleInput) {
    if let Some(spec) = state.query_specification_mut(&input.id) {
        input.query_example.apply_to(&mut spec.query_example);
    } else {
        trace!(id = %input.id, "query specification not found; ignoring example update");
    }
}

pub fn delete_query_specification(
    state: &mut SpecificationState,
    input: DeleteQuerySpecificationInput,
) {
    // deleting the parent discards its filter params with it
    state.query_specifications.retain(|spec| spec.id != input.id);
}

pub fn add_query_filter_param(state: &mut SpecificationState, input: AddQueryFilterParamInput) {
    if let Some(spec) = state.query_specification_mut(&input.query_spec_id) {
        spec.filter.push(QueryFilterParam {
            id: input.id,
            name: input.name.into_option(),
            param_type: input.param_type.into_option(),
            optional: input.optional,
        });
    } else {
        trace!(id = %input.query_spec_id, "query specification not found; ignoring filter param add");
    }
}

pub fn update_filter_param(state: &mut SpecificationState, input: UpdateFilterParamInput) {
    if let Some(spec) = state.query_specification_mut(&input.query_spec_id) {
        if let Some(param) = spec.filter_param_mut(&input.id) {
            input.name.apply_to(&mut param.name);
            input.param_type.apply_to(&mut param.param_type);
            input.optional.apply_or_default(&mut param.optional);
        } else {
            trace!(id = %input.id, "filter param not found; ignoring update");
        }
    } else {
        trace!(id = %input.query_spec_id, "query specification not found; ignoring filter param update");
    }
}

pub fn delete_filter_param(state: &mut SpecificationState, input: DeleteFilterParamInput) {
    if let Some(spec) = state.query_specification_mut(&input.query_spec_id) {
        spec.filter.retain(|param| param.id != input.id);
    } else {
        trace!(id = %input.query_spec_id, "query specification not found; ignoring filter param delete");
    }
}

pub fn set_query_spec_name(state: &mut SpecificationState, input: SetQuerySpecNameInput) {
    if let Some(spec) = state.query_specification_mut(&input.query_spec_id) {
        input.name.apply_to(&mut spec.name);
    } else {
        trace!(id = %input.query_spec_id, "query specification not found; ignoring rename");
    }
}
