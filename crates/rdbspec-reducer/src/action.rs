//! The action union and its JSON codec.
//!
//! Actions travel as `{ "type": <tag>, "input": <record>, "scope": "global" }`.
//! Decoding validates the input record before any mutation can happen;
//! unrecognized type tags decode to `None` so unrelated action families can
//! share a dispatch bus.

use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use rdbspec_model::{
    AddQueryFilterParamInput, AddQuerySpecificationInput, AddRdbColumnInput, AddRdbTableInput,
    DeleteFilterParamInput, DeleteQuerySpecificationInput, DeleteRdbColumnInput,
    DeleteRdbTableInput, SetQuerySpecNameInput, SetSpecInput, UpdateFilterParamInput,
    UpdateQueryExampleInput, UpdateQuerySchemaInput, UpdateRdbColumnInput, UpdateTableNameInput,
};

use crate::error::ReducerError;

/// The only state scope this document family uses.
pub const GLOBAL_SCOPE: &str = "global";

/// One variant per operation, dispatched by exhaustive pattern matching.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetSpec(SetSpecInput),
    AddQuerySpecification(AddQuerySpecificationInput),
    UpdateQuerySchema(UpdateQuerySchemaInput),
    UpdateQueryExample(UpdateQueryExampleInput),
    DeleteQuerySpecification(DeleteQuerySpecificationInput),
    AddQueryFilterParam(AddQueryFilterParamInput),
    UpdateFilterParam(UpdateFilterParamInput),
    DeleteFilterParam(DeleteFilterParamInput),
    SetQuerySpecName(SetQuerySpecNameInput),
    AddRdbTable(AddRdbTableInput),
    UpdateTableName(UpdateTableNameInput),
    DeleteRdbTable(DeleteRdbTableInput),
    AddRdbColumn(AddRdbColumnInput),
    UpdateRdbColumn(UpdateRdbColumnInput),
    DeleteRdbColumn(DeleteRdbColumnInput),
}

impl Action {
    /// The wire type tag for this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetSpec(_) => "SET_SPEC",
            Action::AddQuerySpecification(_) => "ADD_QUERY_SPECIFICATION",
            Action::UpdateQuerySchema(_) => "UPDATE_QUERY_SCHEMA",
            Action::UpdateQueryExample(_) => "UPDATE_QUERY_EXAMPLE",
            Action::DeleteQuerySpecification(_) => "DELETE_QUERY_SPECIFICATION",
            Action::AddQueryFilterParam(_) => "ADD_QUERY_FILTER_PARAM",
            Action::UpdateFilterParam(_) => "UPDATE_FILTER_PARAM",
            Action::DeleteFilterParam(_) => "DELETE_FILTER_PARAM",
            Action::SetQuerySpecName(_) => "SET_QUERY_SPEC_NAME",
            Action::AddRdbTable(_) => "ADD_RDB_TABLE",
            Action::UpdateTableName(_) => "UPDATE_TABLE_NAME",
            Action::DeleteRdbTable(_) => "DELETE_RDB_TABLE",
            Action::AddRdbColumn(_) => "ADD_RDB_COLUMN",
            Action::UpdateRdbColumn(_) => "UPDATE_RDB_COLUMN",
            Action::DeleteRdbColumn(_) => "DELETE_RDB_COLUMN",
        }
    }

    /// Decode an action from its wire shape.
    ///
    /// Returns `Ok(None)` when the type tag belongs to some other action
    /// family; the caller passes such actions through unchanged. A known
    /// tag with a malformed input is a validation error, raised before any
    /// state is touched.
    pub fn from_value(value: &Value) -> Result<Option<Action>, ReducerError> {
        let Some(kind) = value.get("type").and_then(Value::as_str) else {
            return Err(ReducerError::MissingType);
        };
        let input = value.get("input").cloned().unwrap_or(Value::Null);
        let action = match kind {
            "SET_SPEC" => Action::SetSpec(parse_input(kind, input)?),
            "ADD_QUERY_SPECIFICATION" => Action::AddQuerySpecification(parse_input(kind, input)?),
            "UPDATE_QUERY_SCHEMA" => Action::UpdateQuerySchema(parse_input(kind, input)?),
            "UPDATE_QUERY_EXAMPLE" => Action::UpdateQueryExample(parse_input(kind, input)?),
            "DELETE_QUERY_SPECIFICATION" => {
                Action::DeleteQuerySpecification(parse_input(kind, input)?)
            }
            "ADD_QUERY_FILTER_PARAM" => Action::AddQueryFilterParam(parse_input(kind, input)?),
            "UPDATE_FILTER_PARAM" => Action::UpdateFilterParam(parse_input(kind, input)?),
            "DELETE_FILTER_PARAM" => Action::DeleteFilterParam(parse_input(kind, input)?),
            "SET_QUERY_SPEC_NAME" => Action::SetQuerySpecName(parse_input(kind, input)?),
            "ADD_RDB_TABLE" => Action::AddRdbTable(parse_input(kind, input)?),
            "UPDATE_TABLE_NAME" => Action::UpdateTableName(parse_input(kind, input)?),
            "DELETE_RDB_TABLE" => Action::DeleteRdbTable(parse_input(kind, input)?),
            "ADD_RDB_COLUMN" => Action::AddRdbColumn(parse_input(kind, input)?),
            "UPDATE_RDB_COLUMN" => Action::UpdateRdbColumn(parse_input(kind, input)?),
            "DELETE_RDB_COLUMN" => Action::DeleteRdbColumn(parse_input(kind, input)?),
            _ => return Ok(None),
        };
        Ok(Some(action))
    }

    /// Encode the action into its wire shape.
    pub fn to_value(&self) -> Result<Value, ReducerError> {
        serde_json::to_value(self).map_err(|source| ReducerError::Validation {
            action: self.kind().to_string(),
            source,
        })
    }
}

fn parse_input<T: DeserializeOwned>(kind: &str, input: Value) -> Result<T, ReducerError> {
    serde_json::from_value(input).map_err(|source| ReducerError::Validation {
        action: kind.to_string(),
        source,
    })
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Action", 3)?;
        record.serialize_field("type", self.kind())?;
        match self {
            Action::SetSpec(input) => record.serialize_field("input", input)?,
            Action::AddQuerySpecification(input) => record.serialize_field("input", input)?,
            Action::UpdateQuerySchema(input) => record.serialize_field("input", input)?,
            Action::UpdateQueryExample(input) => record.serialize_field("input", input)?,
            Action::DeleteQuerySpecification(input) => record.serialize_field("input", input)?,
            Action::AddQueryFilterParam(input) => record.serialize_field("input", input)?,
            Action::UpdateFilterParam(input) => record.serialize_field("input", input)?,
            Action::DeleteFilterParam(input) => record.serialize_field("input", input)?,
            Action::SetQuerySpecName(input) => record.serialize_field("input", input)?,
            Action::AddRdbTable(input) => record.serialize_field("input", input)?,
            Action::UpdateTableName(input) => record.serialize_field("input", input)?,
            Action::DeleteRdbTable(input) => record.serialize_field("input", input)?,
            Action::AddRdbColumn(input) => record.serialize_field("input", input)?,
            Action::UpdateRdbColumn(input) => record.serialize_field("input", input)?,
            Action::DeleteRdbColumn(input) => record.serialize_field("input", input)?,
        }
        record.serialize_field("scope", GLOBAL_SCOPE)?;
        record.end()
    }
}
