use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Empty file: {0}")]
    EmptyFile(String),

    #[error("Duplicate file: {0}")]
    DuplicateFile(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
