//! # CLI Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the brew shell                         │
//! │                                                                         │
//! │  brew> add 42                                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command Function → Result<String, CliError>                           │
//! │         │                                                               │
//! │         ├── CoreError::ItemNotFound ─────┐                              │
//! │         ├── CoreError::InvalidVoucher ───┼──► CliError { code, message }│
//! │         └── ConfigError ─────────────────┘            │                │
//! │                                                       ▼                │
//! │                        "error[NOT_FOUND]: Catalog item not found: 42"  │
//! │                                                                         │
//! │  The shell prints the error and keeps reading commands.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use brew_core::CoreError;
use serde::Serialize;
use std::fmt;

use crate::config::ConfigError;

/// Error returned from shell commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Catalogue item or store does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Voucher code not recognised
    InvalidVoucher,

    /// Bad environment configuration
    ConfigError,

    /// Terminal read/write or output formatting failed
    Io,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidVoucher => "INVALID_VOUCHER",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Io => "IO",
        }
    }
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        CliError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Converts core errors to CLI errors.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ItemNotFound(_) | CoreError::StoreNotFound(_) => ErrorCode::NotFound,
            CoreError::InvalidVoucher(_) => ErrorCode::InvalidVoucher,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        CliError::new(code, err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<fmt::Error> for CliError {
    fn from(err: fmt::Error) -> Self {
        CliError::new(ErrorCode::Io, format!("failed to render output: {}", err))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::new(ErrorCode::Io, err.to_string())
    }
}
