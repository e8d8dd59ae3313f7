//! Error types for byzcal.

use thiserror::Error;

/// Errors that can occur while loading, parsing or rendering a calendar.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File {0} not found")]
    InputNotFound(String),

    #[error("Input file name '{name}' does not end with '{suffix}'")]
    InputName { name: String, suffix: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for byzcal operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
