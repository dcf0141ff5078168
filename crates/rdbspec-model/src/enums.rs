use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Scalar type of an RDB column.
///
/// The serialized names are part of the wire contract; update inputs use
/// the same value set, so a single enum serves both directions.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ColumnType {
    #[default]
    String,
    Int,
    Float,
    Boolean,
    Date,
    DateTime,
    Text,
}

impl ColumnType {
    /// Every supported column type, in display order.
    pub const ALL: [ColumnType; 7] = [
        ColumnType::String,
        ColumnType::Int,
        ColumnType::Float,
        ColumnType::Boolean,
        ColumnType::Date,
        ColumnType::DateTime,
        ColumnType::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "String",
            ColumnType::Int => "Int",
            ColumnType::Float => "Float",
            ColumnType::Boolean => "Boolean",
            ColumnType::Date => "Date",
            ColumnType::DateTime => "DateTime",
            ColumnType::Text => "Text",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = ModelError;

    /// Parse an exact column type name. The match is case-sensitive so the
    /// accepted set stays identical to the serialized value set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "String" => Ok(ColumnType::String),
            "Int" => Ok(ColumnType::Int),
            "Float" => Ok(ColumnType::Float),
            "Boolean" => Ok(ColumnType::Boolean),
            "Date" => Ok(ColumnType::Date),
            "DateTime" => Ok(ColumnType::DateTime),
            "Text" => Ok(ColumnType::Text),
            _ => Err(ModelError::UnknownColumnType(s.to_string())),
        }
    }
}
