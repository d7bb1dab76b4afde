use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

/// Text shown to the user when the project form fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input, try again!";

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid input, try again!")]
    InvalidInput,

    #[error("Invalid project ID: {0:?}")]
    InvalidProjectId(String),

    #[error("Invalid project status: {0}")]
    InvalidStatus(String),

    #[error("Drag data does not carry a text/plain project ID")]
    UnsupportedDragData,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
