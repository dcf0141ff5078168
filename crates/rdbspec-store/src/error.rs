use thiserror::Error;

use rdbspec_reducer::ReducerError;

use crate::ids::DocumentId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("action rejected: {0}")]
    Rejected(#[from] ReducerError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
