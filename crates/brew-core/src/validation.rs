//! # Validation Module
//!
//! Input normalization for the storefront.
//!
//! ## Two Kinds of Input
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Quantities (cart)           → normalized, never rejected               │
//! │    0 → 1 on add, no upper limit                                         │
//! │                                                                         │
//! │  Voucher codes (checkout)    → validated, may be rejected               │
//! │    " coffee10 " → "COFFEE10", "" → Required                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest voucher code the checkout modal accepts.
pub const MAX_VOUCHER_CODE_LEN: usize = 32;

// =============================================================================
// Quantity Normalization
// =============================================================================

/// Normalizes a quantity being added to the cart: zero counts as one.
///
/// ```rust
/// use brew_core::validation::normalize_quantity;
///
/// assert_eq!(normalize_quantity(0), 1);
/// assert_eq!(normalize_quantity(3), 3);
/// assert_eq!(normalize_quantity(5000), 5000);
/// ```
pub fn normalize_quantity(quantity: u32) -> u32 {
    quantity.max(1)
}

/// Converts a signed quantity into a stored line quantity.
///
/// Callers deal with `<= 0` (removal) before getting here. Values past
/// `u32::MAX` saturate.
pub fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(1)).unwrap_or(u32::MAX)
}

// =============================================================================
// Voucher Codes
// =============================================================================

/// Validates and canonicalizes a voucher code.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must not be empty
/// - At most 32 characters
/// - Letters and digits only
/// - Matching is case-insensitive, so the result is upper-cased
///
/// ```rust
/// use brew_core::validation::validate_voucher_code;
///
/// assert_eq!(validate_voucher_code(" coffee10 ").unwrap(), "COFFEE10");
/// assert!(validate_voucher_code("   ").is_err());
/// assert!(validate_voucher_code("SAVE 5").is_err());
/// ```
pub fn validate_voucher_code(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "voucher code".to_string(),
        });
    }

    if code.len() > MAX_VOUCHER_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "voucher code".to_string(),
            max: MAX_VOUCHER_CODE_LEN,
        });
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "voucher code".to_string(),
            reason: "must contain only letters and numbers".to_string(),
        });
    }

    Ok(code.to_ascii_uppercase())
}

// =============================================================================
// Unit Tests
// =============================================================================
