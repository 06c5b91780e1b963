//! Error types and exit codes for marquee
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid configuration values)
//! - 3: Data error (unknown title, empty corpus, malformed dataset)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the marquee CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown title, empty corpus, bad dataset (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying the recommender
#[derive(Error, Debug)]
pub enum MarqueeError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("title not found in catalog: {title}")]
    TitleNotFound { title: String },

    #[error("empty corpus at {stage} stage: nothing left to vectorize")]
    EmptyCorpus { stage: String },

    #[error("missing column {column:?} in {path:?}")]
    MissingColumn { path: PathBuf, column: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

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

impl MarqueeError {
    /// Create an error for a query title with no catalog row
    pub fn title_not_found(title: impl Into<String>) -> Self {
        MarqueeError::TitleNotFound {
            title: title.into(),
        }
    }

    /// Create a fatal error for a pipeline stage that ran out of input
    pub fn empty_corpus(stage: &str) -> Self {
        MarqueeError::EmptyCorpus {
            stage: stage.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MarqueeError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        MarqueeError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MarqueeError::UnknownFormat(_)
            | MarqueeError::UsageError(_)
            | MarqueeError::InvalidValue { .. } => ExitCode::Usage,

            MarqueeError::TitleNotFound { .. }
            | MarqueeError::EmptyCorpus { .. }
            | MarqueeError::MissingColumn { .. } => ExitCode::Data,

            MarqueeError::Io(_)
            | MarqueeError::Csv(_)
            | MarqueeError::Json(_)
            | MarqueeError::Toml(_)
            | MarqueeError::FailedOperationWithTarget { .. }
            | MarqueeError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            MarqueeError::UnknownFormat(_) => "unknown_format",
            MarqueeError::UsageError(_) => "usage_error",
            MarqueeError::InvalidValue { .. } => "invalid_value",
            MarqueeError::TitleNotFound { .. } => "title_not_found",
            MarqueeError::EmptyCorpus { .. } => "empty_corpus",
            MarqueeError::MissingColumn { .. } => "missing_column",
            MarqueeError::Io(_) => "io_error",
            MarqueeError::Csv(_) => "csv_error",
            MarqueeError::Json(_) => "json_error",
            MarqueeError::Toml(_) => "toml_error",
            MarqueeError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            MarqueeError::Other(_) => "other",
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

/// Result type alias for marquee operations
pub type Result<T> = std::result::Result<T, MarqueeError>;
