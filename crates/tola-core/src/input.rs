//! # Input Module
//!
//! Turns raw counter-form text into a typed [`CalculationInput`].
//!
//! ## Coercion Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Policies, One Boundary                         │
//! │                                                                         │
//! │  raw text ──► CoercionPolicy::Lenient (default)                        │
//! │               ├── strip everything but digits and '.'                  │
//! │               ├── parse the longest leading number ("12.3.4" → 12.3)   │
//! │               └── nothing parseable → Coerced::Defaulted (zero)        │
//! │                                                                         │
//! │  raw text ──► CoercionPolicy::Strict                                   │
//! │               ├── trim, drop ',' digit grouping                        │
//! │               ├── blank → Coerced::Defaulted (zero)                    │
//! │               └── anything else must parse fully and be >= 0           │
//! │                   else CoreError::InvalidNumericInput { field, .. }     │
//! │                                                                         │
//! │  Either way the engine receives plain numbers and cannot fail.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Zero substitution is never silent: [`ParsedInput::defaulted`] lists
//! every field that fell back to zero.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::pricing::CalculationInput;
use crate::types::{Field, MakingCharge, MakingChargeMode, Percent, RateBasis};
use crate::validation::{validate_non_negative, validate_piece_count};

// =============================================================================
// Coercion Policy
// =============================================================================

/// How unparseable numeric text is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CoercionPolicy {
    /// Fail open: unparseable text becomes zero. Never breaks a half-filled form.
    #[default]
    Lenient,
    /// Fail closed: unparseable text is an error naming the field.
    Strict,
}

// =============================================================================
// Coerced Value
// =============================================================================

/// A numeric field value that records whether zero was substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coerced<T> {
    /// The text parsed to this value.
    Parsed(T),
    /// Nothing usable was entered; the value is `T::default()` (zero).
    Defaulted,
}

impl<T: Default + Copy> Coerced<T> {
    /// The value, with zero standing in for `Defaulted`.
    #[inline]
    pub fn value(&self) -> T {
        match self {
            Coerced::Parsed(v) => *v,
            Coerced::Defaulted => T::default(),
        }
    }
}

impl<T> Coerced<T> {
    /// Whether zero was substituted.
    #[inline]
    pub fn is_defaulted(&self) -> bool {
        matches!(self, Coerced::Defaulted)
    }
}

impl<T> From<Option<T>> for Coerced<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Coerced::Parsed(v),
            None => Coerced::Defaulted,
        }
    }
}

// =============================================================================
// Text Helpers
// =============================================================================

/// Keeps only ASCII digits and `.`, as the form does on every keystroke.
///
/// ## Example
/// ```rust
/// use tola_core::input::sanitize_numeric;
///
/// assert_eq!(sanitize_numeric("65,000 Rs"), "65000");
/// assert_eq!(sanitize_numeric("-12.5g"), "12.5");
/// ```
pub fn sanitize_numeric(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// Parses the longest leading `digits[.digits]` prefix of `text`.
///
/// Returns `None` if the prefix holds no digit or is too large for a
/// `Decimal`.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use tola_core::input::parse_leading_decimal;
///
/// assert_eq!(parse_leading_decimal("12.3.4"), Some("12.3".parse::<Decimal>().unwrap()));
/// assert_eq!(parse_leading_decimal(".5"), Some("0.5".parse::<Decimal>().unwrap()));
/// assert_eq!(parse_leading_decimal("."), None);
/// ```
pub fn parse_leading_decimal(text: &str) -> Option<Decimal> {
    let mut int_part = String::new();
    let mut frac_part = String::new();
    let mut seen_point = false;

    for c in text.chars() {
        match c {
            '0'..='9' if seen_point => frac_part.push(c),
            '0'..='9' => int_part.push(c),
            '.' if !seen_point => seen_point = true,
            _ => break,
        }
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let number = match (int_part.is_empty(), frac_part.is_empty()) {
        (_, true) => int_part,
        (true, false) => format!("0.{frac_part}"),
        (false, false) => format!("{int_part}.{frac_part}"),
    };

    Decimal::from_str(&number).ok()
}

fn coerce_decimal(field: Field, text: &str, policy: CoercionPolicy) -> CoreResult<Coerced<Decimal>> {
    match policy {
        CoercionPolicy::Lenient => Ok(parse_leading_decimal(&sanitize_numeric(text)).into()),
        CoercionPolicy::Strict => {
            let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
            if cleaned.is_empty() {
                return Ok(Coerced::Defaulted);
            }
            let value = Decimal::from_str(&cleaned).map_err(|_| CoreError::InvalidNumericInput {
                field,
                value: text.to_string(),
            })?;
            validate_non_negative(field.name(), value)?;
            Ok(Coerced::Parsed(value))
        }
    }
}

fn coerce_pieces(text: &str, policy: CoercionPolicy) -> CoreResult<Coerced<u32>> {
    match policy {
        // Fractional counts keep their integer part; huge counts saturate.
        CoercionPolicy::Lenient => Ok(parse_leading_decimal(&sanitize_numeric(text))
            .map(|d| d.trunc().to_u32().unwrap_or(u32::MAX))
            .into()),
        CoercionPolicy::Strict => {
            let trimmed = text.trim();
            let pieces: u32 = trimmed.parse().map_err(|_| CoreError::InvalidNumericInput {
                field: Field::Pieces,
                value: text.to_string(),
            })?;
            validate_piece_count(pieces)?;
            Ok(Coerced::Parsed(pieces))
        }
    }
}

fn record<T: Default + Copy>(defaulted: &mut Vec<Field>, field: Field, coerced: Coerced<T>) -> T {
    if coerced.is_defaulted() {
        defaulted.push(field);
    }
    coerced.value()
}

// =============================================================================
// Raw Input
// =============================================================================

/// The counter form as typed: selectors are already typed, numbers are text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawCalculationInput {
    pub rate_basis: RateBasis,
    pub rate: String,
    pub weight: String,
    pub making_charge_mode: MakingChargeMode,
    pub making_charge: String,
    /// Only read when `making_charge_mode` is per-piece.
    pub pieces: String,
    pub gst: String,
    pub huid_charge: String,
}

/// Result of parsing raw input: the typed input plus every zero-substituted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub input: CalculationInput,
    pub defaulted: Vec<Field>,
}

impl RawCalculationInput {
    /// Parses every field under `policy`.
    ///
    /// ## Example
    /// ```rust
    /// use tola_core::input::{CoercionPolicy, RawCalculationInput};
    /// use tola_core::types::Field;
    ///
    /// let raw = RawCalculationInput {
    ///     rate: "65,000".to_string(),
    ///     weight: "10".to_string(),
    ///     ..Default::default()
    /// };
    ///
    /// let parsed = raw.parse(CoercionPolicy::Lenient).unwrap();
    /// assert_eq!(parsed.defaulted, vec![Field::MakingCharge, Field::Gst, Field::HuidCharge]);
    /// ```
    pub fn parse(&self, policy: CoercionPolicy) -> CoreResult<ParsedInput> {
        let mut defaulted = Vec::new();

        let rate_value = record(&mut defaulted, Field::Rate, coerce_decimal(Field::Rate, &self.rate, policy)?);
        let weight_grams = record(
            &mut defaulted,
            Field::Weight,
            coerce_decimal(Field::Weight, &self.weight, policy)?,
        );
        let making_value = record(
            &mut defaulted,
            Field::MakingCharge,
            coerce_decimal(Field::MakingCharge, &self.making_charge, policy)?,
        );
        let pieces = match self.making_charge_mode {
            MakingChargeMode::PerPiece => {
                record(&mut defaulted, Field::Pieces, coerce_pieces(&self.pieces, policy)?)
            }
            MakingChargeMode::PercentOfValue | MakingChargeMode::PerGram => 0,
        };
        let gst = record(&mut defaulted, Field::Gst, coerce_decimal(Field::Gst, &self.gst, policy)?);
        let huid_charge = record(
            &mut defaulted,
            Field::HuidCharge,
            coerce_decimal(Field::HuidCharge, &self.huid_charge, policy)?,
        );

        if !defaulted.is_empty() {
            tracing::debug!(?defaulted, ?policy, "numeric fields defaulted to zero");
        }

        let input = CalculationInput::new(self.rate_basis, rate_value, weight_grams)
            .with_making_charge(MakingCharge::from_parts(
                self.making_charge_mode,
                making_value,
                pieces,
            ))
            .with_gst(Percent::new(gst))
            .with_huid_charge(huid_charge);

        Ok(ParsedInput { input, defaulted })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn raw(rate: &str, weight: &str) -> RawCalculationInput {
        RawCalculationInput {
            rate: rate.to_string(),
            weight: weight.to_string(),
            making_charge: "12".to_string(),
            gst: "3".to_string(),
            huid_charge: "0".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sanitize_numeric() {
        assert_eq!(sanitize_numeric("12.345"), "12.345");
        assert_eq!(sanitize_numeric("1,23,456"), "123456");
        assert_eq!(sanitize_numeric("abc"), "");
    }

    #[test]
    fn test_parse_leading_decimal() {
        assert_eq!(parse_leading_decimal("65000"), Some(dec("65000")));
        assert_eq!(parse_leading_decimal("5."), Some(dec("5")));
        assert_eq!(parse_leading_decimal("1.2.3"), Some(dec("1.2")));
        assert_eq!(parse_leading_decimal(""), None);
        assert_eq!(parse_leading_decimal("x12"), None);
        assert_eq!(parse_leading_decimal(&"9".repeat(40)), None);
    }

    #[test]
    fn test_coerced_value() {
        assert_eq!(Coerced::Parsed(dec("4")).value(), dec("4"));
        assert_eq!(Coerced::<Decimal>::Defaulted.value(), Decimal::ZERO);
        assert!(Coerced::<u32>::from(None).is_defaulted());
        assert!(!Coerced::from(Some(2u32)).is_defaulted());
    }

    #[test]
    fn test_lenient_parses_clean_input() {
        let parsed = raw("65000", "10").parse(CoercionPolicy::Lenient).unwrap();
        assert!(parsed.defaulted.is_empty());
        assert_eq!(parsed.input.rate_value, dec("65000"));
        assert_eq!(parsed.input.weight_grams, dec("10"));
        assert_eq!(parsed.input.gst_percent, Percent::new(dec("3")));
    }

    #[test]
    fn test_lenient_defaults_garbage_to_zero() {
        let parsed = raw("abc", ".").parse(CoercionPolicy::Lenient).unwrap();
        assert_eq!(parsed.defaulted, vec![Field::Rate, Field::Weight]);
        assert_eq!(parsed.input.rate_value, Decimal::ZERO);
        assert_eq!(parsed.input.weight_grams, Decimal::ZERO);
    }

    #[test]
    fn test_lenient_strips_sign_and_units() {
        let parsed = raw("-6500", "12.345 g").parse(CoercionPolicy::Lenient).unwrap();
        assert_eq!(parsed.input.rate_value, dec("6500"));
        assert_eq!(parsed.input.weight_grams, dec("12.345"));
    }

    #[test]
    fn test_pieces_only_read_in_per_piece_mode() {
        let mut input = raw("65000", "5");
        input.pieces = "junk".to_string();
        let parsed = input.parse(CoercionPolicy::Strict).unwrap();
        assert!(!parsed.defaulted.contains(&Field::Pieces));

        input.making_charge_mode = MakingChargeMode::PerPiece;
        input.pieces = "2.7".to_string();
        let parsed = input.parse(CoercionPolicy::Lenient).unwrap();
        assert_eq!(
            parsed.input.making_charge,
            MakingCharge::PerPiece { amount: dec("12"), pieces: 2 }
        );

        input.pieces = String::new();
        let parsed = input.parse(CoercionPolicy::Lenient).unwrap();
        assert_eq!(parsed.defaulted, vec![Field::Pieces]);
    }

    #[test]
    fn test_strict_accepts_grouping_and_blanks() {
        let mut input = raw("65,000", " 10.5 ");
        input.huid_charge = String::new();
        let parsed = input.parse(CoercionPolicy::Strict).unwrap();
        assert_eq!(parsed.input.rate_value, dec("65000"));
        assert_eq!(parsed.input.weight_grams, dec("10.5"));
        assert_eq!(parsed.defaulted, vec![Field::HuidCharge]);
    }

    #[test]
    fn test_strict_rejects_garbage() {
        let err = raw("65000", "12,3g").parse(CoercionPolicy::Strict).unwrap_err();
        match err {
            CoreError::InvalidNumericInput { field, value } => {
                assert_eq!(field, Field::Weight);
                assert_eq!(value, "12,3g");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_strict_rejects_negative() {
        let err = raw("-1", "10").parse(CoercionPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_strict_rejects_bad_piece_count() {
        let mut input = raw("65000", "5");
        input.making_charge_mode = MakingChargeMode::PerPiece;

        input.pieces = "0".to_string();
        assert!(matches!(
            input.parse(CoercionPolicy::Strict).unwrap_err(),
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));

        input.pieces = "1.5".to_string();
        assert!(matches!(
            input.parse(CoercionPolicy::Strict).unwrap_err(),
            CoreError::InvalidNumericInput { field: Field::Pieces, .. }
        ));
    }
}
