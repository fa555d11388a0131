use std::io;
use thiserror::Error;

/// Crate-wide error type.
///
/// Conversation handling and knowledge retrieval are total and never return it;
/// only the loading edges (configuration, external corpus, tracing setup) do.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents data validation errors (e.g., a malformed corpus entry).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unparsable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}
