pub mod action;
pub mod dispatch;
pub mod error;
pub mod ops;

pub use action::{Action, GLOBAL_SCOPE};
pub use dispatch::{DispatchOutcome, apply_value, dispatch};
pub use error::{ReducerError, Result};

#[cfg(test)]
mod tests {
    use rdbspec_model::{SetSpecInput, SpecificationState};
    use serde_json::json;

    use super::*;

    #[test]
    fn action_wire_shape_round_trips() {
        let action = Action::SetSpec(SetSpecInput {
            name: "payments".to_string().into(),
            description: Default::default(),
        });
        let value = action.to_value().expect("encode action");
        assert_eq!(
            value,
            json!({
                "type": "SET_SPEC",
                "input": {"name": "payments"},
                "scope": "global"
            })
        );
        let decoded = Action::from_value(&value).expect("decode action");
        assert_eq!(decoded, Some(action));
    }

    #[test]
    fn unknown_type_tag_is_passed_through() {
        let mut state = SpecificationState::default();
        let outcome = apply_value(
            &mut state,
            &json!({"type": "SET_DRIVE_ICON", "input": {"icon": "db"}}),
        )
        .expect("dispatch");
        assert_eq!(outcome, DispatchOutcome::Ignored);
        assert_eq!(state, SpecificationState::default());
    }

    #[test]
    fn missing_type_tag_is_an_error() {
        let mut state = SpecificationState::default();
        let result = apply_value(&mut state, &json!({"input": {}}));
        assert!(matches!(result, Err(ReducerError::MissingType)));
    }
}
