use thiserror::Error;

use rdbspec_store::DocumentId;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("document not found: {0}")]
    NotFound(DocumentId),

    #[error("failed to {action}: {reason}")]
    Rejected { action: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;
