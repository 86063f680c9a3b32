//! Error types for journeymap
//!
//! Board and reducer operations never fail; they report "unchanged" instead.
//! These errors cover the fallible edges: files, configuration, imports and
//! command-line argument resolution. Each error type has a corresponding error
//! code for programmatic handling.

use thiserror::Error;

/// Result type alias for journeymap operations
pub type Result<T> = std::result::Result<T, JourneyError>;

/// Main error type for all journeymap operations
#[derive(Debug, Error)]
pub enum JourneyError {
    /// No .journeymap directory found above the working directory
    #[error("Data directory not found: {0}")]
    DataDirNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Spreadsheet import could not produce columns
    #[error("Import error: {0}")]
    Import(String),

    /// A referenced project, persona, column, card or workflow does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A command-line argument could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl JourneyError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            JourneyError::DataDirNotFound(_) => "DATA_DIR_NOT_FOUND",
            JourneyError::InvalidJson(_) => "INVALID_JSON",
            JourneyError::FileNotFound(_) => "FILE_NOT_FOUND",
            JourneyError::ConfigError(_) => "CONFIG_ERROR",
            JourneyError::Import(_) => "IMPORT_ERROR",
            JourneyError::NotFound(_) => "NOT_FOUND",
            JourneyError::InvalidArgument(_) => "INVALID_ARGUMENT",
            JourneyError::Io(_) => "IO_ERROR",
            JourneyError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        JourneyError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &JourneyError) -> i32 {
    match error {
        JourneyError::InvalidArgument(_) => 2, // Usage error, same as clap
        _ => 1,
    }
}
