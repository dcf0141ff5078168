use serde::{Deserialize, Serialize};

use crate::enums::ColumnType;
use crate::ids::Oid;

/// Root state of an RDB processor specification document.
///
/// The tree is shallow: two top-level collections, each one level of nested
/// children. `Default` is the documented empty initial state
/// (`{name: null, description: null, querySpecifications: [],
/// rdbSpecification: []}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificationState {
    pub name: Option<String>,
    pub description: Option<String>,
    pub query_specifications: Vec<QuerySpecification>,
    pub rdb_specification: Vec<RdbTable>,
}

impl SpecificationState {
    pub fn query_specification(&self, id: &Oid) -> Option<&QuerySpecification> {
        self.query_specifications.iter().find(|q| &q.id == id)
    }

    pub fn query_specification_mut(&mut self, id: &Oid) -> Option<&mut QuerySpecification> {
        self.query_specifications.iter_mut().find(|q| &q.id == id)
    }

    pub fn table(&self, id: &Oid) -> Option<&RdbTable> {
        self.rdb_specification.iter().find(|t| &t.id == id)
    }

    pub fn table_mut(&mut self, id: &Oid) -> Option<&mut RdbTable> {
        self.rdb_specification.iter_mut().find(|t| &t.id == id)
    }
}

/// Specification of a single query, with schema and example held as opaque
/// text. Filter params keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpecification {
    pub id: Oid,
    pub name: Option<String>,
    pub query_schema: Option<String>,
    pub query_example: Option<String>,
    pub filter: Vec<QueryFilterParam>,
}

impl QuerySpecification {
    pub fn filter_param(&self, id: &Oid) -> Option<&QueryFilterParam> {
        self.filter.iter().find(|p| &p.id == id)
    }

    pub fn filter_param_mut(&mut self, id: &Oid) -> Option<&mut QueryFilterParam> {
        self.filter.iter_mut().find(|p| &p.id == id)
    }
}

/// A named filter parameter of a query specification. The type is free
/// text rather than an enum so it can name any scalar or custom type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFilterParam {
    pub id: Oid,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub param_type: Option<String>,
    pub optional: bool,
}

/// A relational table owned by the specification. Column ids are unique
/// within their table only; nothing is enforced across tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdbTable {
    pub id: Oid,
    pub name: Option<String>,
    pub columns: Vec<RdbColumn>,
}

impl RdbTable {
    pub fn column(&self, id: &Oid) -> Option<&RdbColumn> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn column_mut(&mut self, id: &Oid) -> Option<&mut RdbColumn> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }
}

/// A column of an [`RdbTable`].
///
/// `source_doc_model` and `source_property` are free-text pointers to an
/// external document model and one of its properties. Multiple or zero
/// primary-key columns are permitted; no single-key rule is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdbColumn {
    pub id: Oid,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub description: Option<String>,
    pub source_doc_model: Option<String>,
    pub source_property: Option<String>,
    pub primary_key: bool,
}
