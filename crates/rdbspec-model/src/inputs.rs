//! Input payloads, one record per action.
//!
//! Field names and optionality are the wire contract: required fields are
//! plain types, optional nullable fields are [`Patch`], and the two
//! required-with-default booleans fall back to false when omitted. Unknown
//! extra fields are ignored (permissive inputs).

use serde::{Deserialize, Serialize};

use crate::enums::ColumnType;
use crate::ids::Oid;
use crate::patch::Patch;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSpecInput {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddQuerySpecificationInput {
    pub id: Oid,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub query_schema: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub query_example: Patch<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuerySchemaInput {
    pub id: Oid,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub query_schema: Patch<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQueryExampleInput {
    pub id: Oid,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub query_example: Patch<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteQuerySpecificationInput {
    pub id: Oid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddQueryFilterParamInput {
    pub query_spec_id: Oid,
    pub id: Oid,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Patch::is_absent")]
    pub param_type: Patch<String>,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilterParamInput {
    pub query_spec_id: Oid,
    pub id: Oid,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Patch::is_absent")]
    pub param_type: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub optional: Patch<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFilterParamInput {
    pub query_spec_id: Oid,
    pub id: Oid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetQuerySpecNameInput {
    pub query_spec_id: Oid,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRdbTableInput {
    pub id: Oid,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTableNameInput {
    pub id: Oid,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRdbTableInput {
    pub id: Oid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRdbColumnInput {
    pub table_id: Oid,
    pub id: Oid,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub source_doc_model: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub source_property: Patch<String>,
    #[serde(default)]
    pub primary_key: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRdbColumnInput {
    pub table_id: Oid,
    pub id: Oid,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Patch::is_absent")]
    pub column_type: Patch<ColumnType>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub source_doc_model: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub source_property: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub primary_key: Patch<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRdbColumnInput {
    pub table_id: Oid,
    pub id: Oid,
}
