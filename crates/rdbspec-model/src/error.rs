use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown column type: {0}")]
    UnknownColumnType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
