pub mod enums;
pub mod error;
pub mod ids;
pub mod inputs;
pub mod patch;
pub mod state;

pub use enums::ColumnType;
pub use error::{ModelError, Result};
pub use ids::Oid;
pub use inputs::{
    AddQueryFilterParamInput, AddQuerySpecificationInput, AddRdbColumnInput, AddRdbTableInput,
    DeleteFilterParamInput, DeleteQuerySpecificationInput, DeleteRdbColumnInput,
    DeleteRdbTableInput, SetQuerySpecNameInput, SetSpecInput, UpdateFilterParamInput,
    UpdateQueryExampleInput, UpdateQuerySchemaInput, UpdateRdbColumnInput, UpdateTableNameInput,
};
pub use patch::Patch;
pub use state::{QueryFilterParam, QuerySpecification, RdbColumn, RdbTable, SpecificationState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_serializes_to_documented_shape() {
        let state = SpecificationState::default();
        let json = serde_json::to_value(&state).expect("serialize state");
        assert_eq!(
            json,
            serde_json::json!({
                "name": null,
                "description": null,
                "querySpecifications": [],
                "rdbSpecification": []
            })
        );
    }

    #[test]
    fn patch_distinguishes_absent_from_null() {
        let empty: SetSpecInput = serde_json::from_str("{}").expect("parse empty input");
        assert_eq!(empty.name, Patch::Absent);
        assert_eq!(empty.description, Patch::Absent);

        let nulled: SetSpecInput =
            serde_json::from_str(r#"{"name": null}"#).expect("parse nulled input");
        assert_eq!(nulled.name, Patch::Null);
        assert_eq!(nulled.description, Patch::Absent);

        let set: SetSpecInput =
            serde_json::from_str(r#"{"name": "payments"}"#).expect("parse set input");
        assert_eq!(set.name, Patch::Value("payments".to_string()));
    }

    #[test]
    fn column_type_round_trips_wire_names() {
        for column_type in ColumnType::ALL {
            let name = column_type.as_str();
            assert_eq!(name.parse::<ColumnType>().expect("parse"), column_type);
            let json = serde_json::to_string(&column_type).expect("serialize");
            assert_eq!(json, format!("\"{name}\""));
        }
        assert!("Varchar".parse::<ColumnType>().is_err());
        assert_eq!(ColumnType::default(), ColumnType::String);
    }
}
