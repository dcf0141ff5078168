use rdbspec_model::{SetSpecInput, SpecificationState};

/// Overwrite the root name/description for each field present in the
/// input; absent fields are left unchanged. The root is a singleton, so
/// there is no existence precondition.
pub fn set_spec(state: &mut SpecificationState, input: SetSpecInput) {
    input.name.apply_to(&mut state.name);
    input.description.apply_to(&mut state.description);
}
