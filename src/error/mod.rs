//! Error types and handling infrastructure for distance conversion

use std::path::PathBuf;

/// Message shown to the user for any rejected input
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid positive number";

/// Reasons a single conversion can fail
///
/// Both kinds share one user-facing message but stay distinct so callers and
/// tests can tell unparsable text apart from a negative distance.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("invalid number: {input:?}")]
    InvalidNumber { input: String },

    #[error("negative value: {value}")]
    NegativeValue { value: f64 },
}

impl ErrorKind {
    pub fn invalid_number(input: &str) -> Self {
        Self::InvalidNumber {
            input: input.to_string(),
        }
    }

    pub fn negative_value(value: f64) -> Self {
        Self::NegativeValue { value }
    }

    /// Stable machine-readable identifier
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidNumber { .. } => "invalid_number",
            Self::NegativeValue { .. } => "negative_value",
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

/// Tool-level errors raised outside a single conversion
#[derive(Debug, thiserror::Error)]
pub enum ConverterError {
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Unknown direction '{value}'. Use 'km-to-miles' or 'miles-to-km'")]
    UnknownDirection { value: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Line {line}: {kind}")]
    BatchLine { line: usize, kind: ErrorKind },
}

impl ConverterError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                message,
                path: Some(path),
            } => format!("Cannot read {}: {}", path.display(), message),
            Self::BatchLine { line, kind } => {
                format!("Line {}: {}", line, kind.user_message())
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for tool-level operations
pub type ConverterResult<T> = Result<T, ConverterError>;
