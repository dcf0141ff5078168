#![deny(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque caller-supplied entity identifier.
///
/// Identifier generation is the document host's concern; the state model
/// accepts any string, including empty or duplicate values, without
/// interpretation.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Oid(String);

impl Oid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Oid {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Oid {
    fn from(value: String) -> Self {
        Self(value)
    }
}
