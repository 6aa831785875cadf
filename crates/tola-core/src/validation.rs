//! # Validation Module
//!
//! Input validation utilities for Tola.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input coercion (input.rs)                                    │
//! │  ├── Lenient: strip, prefix-parse, zero on failure                     │
//! │  └── Strict: full parse + THIS MODULE                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Invoice request (tola-invoice)                               │
//! │  ├── HUID format                                                       │
//! │  └── Customer name length                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: App configuration (apps/cli)                                 │
//! │  └── Default GST / HUID charge sanity                                  │
//! │                                                                         │
//! │  The engine itself validates nothing: it is total over its input.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::types::Percent;
use crate::{HUID_LENGTH, MAX_PIECE_COUNT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest customer name printed on an invoice.
const MAX_CUSTOMER_NAME_LEN: usize = 100;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that an amount is not negative.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use tola_core::validation::validate_non_negative;
///
/// assert!(validate_non_negative("rate", Decimal::ZERO).is_ok());
/// assert!(validate_non_negative("rate", Decimal::NEGATIVE_ONE).is_err());
/// ```
pub fn validate_non_negative(field: &str, value: Decimal) -> ValidationResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a per-piece making charge count.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_PIECE_COUNT (999)
pub fn validate_piece_count(pieces: u32) -> ValidationResult<()> {
    if pieces == 0 {
        return Err(ValidationError::MustBePositive {
            field: "pieces".to_string(),
        });
    }

    if pieces > MAX_PIECE_COUNT {
        return Err(ValidationError::OutOfRange {
            field: "pieces".to_string(),
            min: 1,
            max: MAX_PIECE_COUNT as i64,
        });
    }

    Ok(())
}

/// Validates a percentage lies within 0-100 inclusive.
pub fn validate_percent(field: &str, pct: Percent) -> ValidationResult<()> {
    validate_non_negative(field, pct.value())?;

    if pct.value() > Decimal::ONE_HUNDRED {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a Hallmark Unique ID.
///
/// ## Rules
/// - Optional: blank is allowed (printed as `N/A`)
/// - Otherwise exactly 6 ASCII letters or digits
///
/// ## Example
/// ```rust
/// use tola_core::validation::validate_huid;
///
/// assert!(validate_huid("AB12C3").is_ok());
/// assert!(validate_huid("").is_ok());
/// assert!(validate_huid("AB-12C").is_err());
/// ```
pub fn validate_huid(huid: &str) -> ValidationResult<()> {
    let huid = huid.trim();

    if huid.is_empty() {
        return Ok(());
    }

    if huid.len() != HUID_LENGTH || !huid.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "huid".to_string(),
            reason: format!("must be {} letters or digits", HUID_LENGTH),
        });
    }

    Ok(())
}

/// Validates a customer name for printing.
///
/// ## Rules
/// - Can be empty (the invoice prints a placeholder)
/// - Maximum 100 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    if name.trim().chars().count() > MAX_CUSTOMER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "customer name".to_string(),
            max: MAX_CUSTOMER_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
