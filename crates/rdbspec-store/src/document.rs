use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use rdbspec_model::SpecificationState;
use rdbspec_reducer::{DispatchOutcome, GLOBAL_SCOPE, apply_value};

use crate::error::Result;
use crate::ids::DocumentId;

/// Type tag carried in every document header.
pub const DOCUMENT_TYPE: &str = "rdbspec/processor-specification";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHeader {
    pub id: DocumentId,
    pub document_type: String,
    pub name: Option<String>,
    pub created_at_utc: DateTime<Utc>,
    pub last_modified_at_utc: DateTime<Utc>,
    pub revision: u64,
}

/// One applied action in the append-only document history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub index: u64,
    pub action: Value,
    pub timestamp: DateTime<Utc>,
}

/// Whether an action mutated the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionStatus {
    Applied,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionReceipt {
    pub status: ActionStatus,
    pub revision: u64,
    pub kind: Option<String>,
}

/// A versioned specification document: header, applied-action history and
/// the materialized state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub header: DocumentHeader,
    pub operations: Vec<Operation>,
    pub state: SpecificationState,
}

impl Document {
    /// Create a document with the documented empty initial state.
    pub fn new(id: DocumentId, name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            header: DocumentHeader {
                id,
                document_type: DOCUMENT_TYPE.to_string(),
                name,
                created_at_utc: now,
                last_modified_at_utc: now,
                revision: 0,
            },
            operations: Vec::new(),
            state: SpecificationState::default(),
        }
    }

    /// Validate and apply one wire action.
    ///
    /// Applied actions are appended to the history and bump the revision.
    /// Actions with a foreign type tag or a non-global scope are skipped
    /// without being recorded; they belong to another action family. A
    /// validation failure leaves document state, history and revision
    /// exactly as they were.
    pub fn apply(&mut self, action: Value) -> Result<ActionReceipt> {
        let scope = action
            .get("scope")
            .and_then(Value::as_str)
            .unwrap_or(GLOBAL_SCOPE);
        if scope != GLOBAL_SCOPE {
            debug!(id = %self.header.id, scope, "skipping non-global action");
            return Ok(ActionReceipt {
                status: ActionStatus::Skipped,
                revision: self.header.revision,
                kind: None,
            });
        }

        match apply_value(&mut self.state, &action)? {
            DispatchOutcome::Applied { kind } => {
                let timestamp = Utc::now();
                self.operations.push(Operation {
                    index: self.header.revision,
                    action,
                    timestamp,
                });
                self.header.revision += 1;
                self.header.last_modified_at_utc = timestamp;
                Ok(ActionReceipt {
                    status: ActionStatus::Applied,
                    revision: self.header.revision,
                    kind: Some(kind.to_string()),
                })
            }
            DispatchOutcome::Ignored => {
                debug!(id = %self.header.id, "skipping action from another family");
                Ok(ActionReceipt {
                    status: ActionStatus::Skipped,
                    revision: self.header.revision,
                    kind: None,
                })
            }
        }
    }
}
