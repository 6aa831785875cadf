//! # Money Module
//!
//! Provides the `Money` type for amounts that leave the engine.
//!
//! ## Decimal In, Paise Out
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHERE ROUNDING HAPPENS                                                 │
//! │                                                                         │
//! │  Engine (pricing.rs):                                                   │
//! │    rate / 10, rate × weight, × pct / 100  → exact Decimal, no rounding │
//! │                                                                         │
//! │  Presentation boundary (THIS FILE):                                     │
//! │    Decimal rupees ──► Money::from_rupees ──► i64 paise                 │
//! │    6500.005 → 650001 paise (half away from zero)                       │
//! │                                                                         │
//! │  A bill is rounded ONCE, at the end, never between steps.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use tola_core::money::Money;
//!
//! let price = Money::from_paise(7498400); // Rs 74984.00
//! assert_eq!(price.rupees(), 74984);
//!
//! let gst: Decimal = "2184.004".parse().unwrap();
//! assert_eq!(Money::from_rupees(gst).paise(), 218400);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Paise per rupee.
const PAISE_PER_RUPEE: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A rupee amount in paise (1/100 rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: a negative amount is representable even though the
///   engine never produces one from non-negative input
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// CalculationResult.final_price (Decimal)
///      │
///      └──► Money::from_rupees ──► "Rs 74984.00" on the invoice
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from a decimal rupee amount.
    ///
    /// Rounds half away from zero to the nearest paisa. Amounts beyond the
    /// i64 paise range saturate.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tola_core::money::Money;
    ///
    /// let amount: Decimal = "6500.005".parse().unwrap();
    /// assert_eq!(Money::from_rupees(amount).paise(), 650001);
    /// ```
    pub fn from_rupees(rupees: Decimal) -> Self {
        let paise = rupees
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .saturating_mul(Decimal::ONE_HUNDRED);
        match paise.to_i64() {
            Some(p) => Money(p),
            None if paise.is_sign_negative() => Money(i64::MIN),
            None => Money(i64::MAX),
        }
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / PAISE_PER_RUPEE
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % PAISE_PER_RUPEE).abs()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Invoice style: `Rs 1234.50`, two fixed decimals, no digit grouping.
///
/// ## Note
/// On-screen summaries use Indian digit grouping instead; see
/// `tola_invoice::format`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rs {}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(123450);
        assert_eq!(money.paise(), 123450);
        assert_eq!(money.rupees(), 1234);
        assert_eq!(money.paise_part(), 50);
    }

    #[test]
    fn test_from_rupees_rounds_half_away_from_zero() {
        assert_eq!(Money::from_rupees(dec("65000")).paise(), 6500000);
        assert_eq!(Money::from_rupees(dec("0.005")).paise(), 1);
        assert_eq!(Money::from_rupees(dec("0.0049")).paise(), 0);
        assert_eq!(Money::from_rupees(dec("-0.005")).paise(), -1);
    }

    #[test]
    fn test_from_rupees_saturates() {
        assert_eq!(Money::from_rupees(Decimal::MAX).paise(), i64::MAX);
        assert_eq!(Money::from_rupees(Decimal::MIN).paise(), i64::MIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(7498400)), "Rs 74984.00");
        assert_eq!(format!("{}", Money::from_paise(15005)), "Rs 150.05");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-Rs 5.50");
        assert_eq!(format!("{}", Money::from_paise(0)), "Rs 0.00");
    }
}
