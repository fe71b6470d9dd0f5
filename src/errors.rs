use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not decode contacts file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid contacts file format: {0}")]
    InvalidFormat(String),

    #[error("Contact '{0}' already exists.")]
    AlreadyExists(String),

    #[error("No contact found with the name '{0}'.")]
    NotFound(String),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
