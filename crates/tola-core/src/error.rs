//! # Error Types
//!
//! Domain-specific error types for tola-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tola-core errors (this file)                                          │
//! │  ├── CoreError        - Input that cannot become a calculation         │
//! │  └── ValidationError  - Field-level rule failures                      │
//! │                                                                         │
//! │  tola-invoice errors (separate crate)                                  │
//! │  └── InvoiceError     - Invoice assembly failures                      │
//! │                                                                         │
//! │  CLI (apps/cli)                                                        │
//! │  └── anyhow::Error    - What the operator sees on stderr               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → InvoiceError → anyhow → stderr    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine itself never fails. Errors only arise at the input boundary,
//! and only under [`CoercionPolicy::Strict`](crate::input::CoercionPolicy).

use thiserror::Error;

use crate::types::Field;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning raw form input into a calculation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A numeric field could not be parsed.
    ///
    /// ## When This Occurs
    /// Only under the strict policy. The lenient policy substitutes zero
    /// and reports the field in `Quote::defaulted` instead.
    ///
    /// ```text
    /// weight: "12,3g"
    ///      │
    ///      ▼
    /// InvalidNumericInput { field: Weight, value: "12,3g" }
    ///      │
    ///      ▼
    /// CLI prints: "Invalid numeric input for weight: \"12,3g\""
    /// ```
    #[error("Invalid numeric input for {field}: {value:?}")]
    InvalidNumericInput { field: Field, value: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be below zero.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Invalid format (e.g. a malformed HUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
