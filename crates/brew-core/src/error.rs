//! # Error Types
//!
//! Domain-specific error types for brew-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  brew-core errors (this file)                                          │
//! │  ├── CoreError        - Lookups that can miss (item, store, voucher)   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  brew-cli errors (app)                                                 │
//! │  └── CliError         - What the shell prints (code + message)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note on the Cart
//! Cart mutations never return these errors. Adding, updating and removing
//! lines are total operations: bad quantities are clamped and unknown keys
//! are ignored. Errors only exist at the edges where a caller names
//! something that may not exist.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Catalogue item cannot be found.
    ///
    /// ## When This Occurs
    /// - A screen (or shell command) names an id that is not in the catalogue
    #[error("Catalog item not found: {0}")]
    ItemNotFound(String),

    /// Shop location cannot be found.
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    /// Voucher code is not one of the known codes.
    ///
    /// ## User Workflow
    /// ```text
    /// Enter "COFFE10" in voucher modal
    ///      │
    ///      ▼
    /// InvalidVoucher("COFFE10")
    ///      │
    ///      ▼
    /// UI shows: "The voucher code you entered is not valid."
    /// ```
    #[error("Invalid voucher code: {0}")]
    InvalidVoucher(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound("42".to_string());
        assert_eq!(err.to_string(), "Catalog item not found: 42");

        let err = CoreError::InvalidVoucher("NOPE".to_string());
        assert_eq!(err.to_string(), "Invalid voucher code: NOPE");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "voucher code".to_string(),
        };
        assert_eq!(err.to_string(), "voucher code is required");

        let err = ValidationError::TooLong {
            field: "voucher code".to_string(),
            max: 32,
        };
        assert_eq!(err.to_string(), "voucher code must be at most 32 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
