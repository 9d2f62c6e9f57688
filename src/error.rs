use std::io;

use thiserror::Error;

/// Library-wide error type for stackup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Template declared an unknown placeholder or failed to render.
    #[error("Template error: {0}")]
    TemplateError(String),

    /// A mandatory external command failed.
    #[error("External tool '{tool}' failed: {error}")]
    ExternalToolError { tool: String, error: String },
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting coarse classification.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::TemplateError(_) => io::ErrorKind::InvalidInput,
            AppError::ExternalToolError { .. } => io::ErrorKind::Other,
        }
    }
}
