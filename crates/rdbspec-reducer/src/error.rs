use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReducerError {
    #[error("action is missing a type tag")]
    MissingType,

    #[error("invalid input for {action}: {source}")]
    Validation {
        action: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReducerError>;
