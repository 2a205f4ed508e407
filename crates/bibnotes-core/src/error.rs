//! Error types and exit codes for bibnotes
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing record, unreadable metadata, etc.)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the bibnotes binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing record, invalid metadata (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during bibnotes operations
#[derive(Error, Debug)]
pub enum BibnotesError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("document not found: {path:?}")]
    DocumentNotFound { path: PathBuf },

    #[error("invalid document metadata in {path:?}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("document has no folder, cannot {operation}")]
    MissingFolder { operation: String },

    // Generic failures (exit code 1)
    #[error("failed to format {template:?}: {reason}")]
    Format { template: String, reason: String },

    #[error("failed to extract text from {path:?}: {reason}")]
    Extraction { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl BibnotesError {
    /// Create an error for a template that could not be rendered
    pub fn format(template: &str, reason: impl std::fmt::Display) -> Self {
        BibnotesError::Format {
            template: template.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed text extraction
    pub fn extraction(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        BibnotesError::Extraction {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        BibnotesError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        BibnotesError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            BibnotesError::UsageError(_) | BibnotesError::InvalidValue { .. } => ExitCode::Usage,

            BibnotesError::DocumentNotFound { .. }
            | BibnotesError::InvalidDocument { .. }
            | BibnotesError::MissingFolder { .. } => ExitCode::Data,

            BibnotesError::Format { .. }
            | BibnotesError::Extraction { .. }
            | BibnotesError::Io(_)
            | BibnotesError::Yaml(_)
            | BibnotesError::Json(_)
            | BibnotesError::Toml(_)
            | BibnotesError::FailedOperationWithTarget { .. }
            | BibnotesError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            BibnotesError::UsageError(_) => "usage_error",
            BibnotesError::InvalidValue { .. } => "invalid_value",
            BibnotesError::DocumentNotFound { .. } => "document_not_found",
            BibnotesError::InvalidDocument { .. } => "invalid_document",
            BibnotesError::MissingFolder { .. } => "missing_folder",
            BibnotesError::Format { .. } => "format_error",
            BibnotesError::Extraction { .. } => "extraction_error",
            BibnotesError::Io(_) => "io_error",
            BibnotesError::Yaml(_) => "yaml_error",
            BibnotesError::Json(_) => "json_error",
            BibnotesError::Toml(_) => "toml_error",
            BibnotesError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            BibnotesError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for bibnotes operations
pub type Result<T> = std::result::Result<T, BibnotesError>;
