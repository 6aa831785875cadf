//! # Display Formatting
//!
//! Number formats used at the counter.
//!
//! ## Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  format_indian(1234567.5)   →  "12,34,567.5"    lakh/crore grouping    │
//! │  format_rupees(74984)       →  "Rs 74,984"      on-screen summary      │
//! │  format_weight(12.345)      →  "12.345 g"       gram.milligram         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Indian grouping keeps the last three digits together and groups the rest
//! in pairs. Fractions keep at most two digits and drop trailing zeros.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a value with Indian digit grouping and up to two fraction digits.
///
/// Rounds half away from zero at the second decimal place.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use tola_invoice::format::format_indian;
///
/// assert_eq!(format_indian(Decimal::from(74984)), "74,984");
/// assert_eq!(format_indian("1234567.5".parse().unwrap()), "12,34,567.5");
/// assert_eq!(format_indian("6500.005".parse().unwrap()), "6,500.01");
/// ```
pub fn format_indian(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&group_indian(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// `"1234567"` → `"12,34,567"`.
fn group_indian(whole: &str) -> String {
    if whole.len() <= 3 {
        return whole.to_string();
    }

    let (head, tail) = whole.split_at(whole.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// On-screen rupee amount: `Rs ` followed by [`format_indian`].
pub fn format_rupees(value: Decimal) -> String {
    format!("Rs {}", format_indian(value))
}

/// Formats a weight in grams as `grams.milligrams g`.
///
/// Milligrams are rounded half away from zero and always printed with
/// three digits, so 12.0456 g reads `12.046 g` and 0.9996 g reads `1.000 g`.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use tola_invoice::format::format_weight;
///
/// assert_eq!(format_weight("12.345".parse().unwrap()), "12.345 g");
/// assert_eq!(format_weight(Decimal::from(10)), "10.000 g");
/// assert_eq!(format_weight(Decimal::ZERO), "0.000 g");
/// ```
pub fn format_weight(grams: Decimal) -> String {
    let magnitude = grams.abs();

    // Milligrams come from the fraction alone so huge weights cannot overflow.
    let mut whole = magnitude.trunc();
    let mut milligrams = (magnitude.fract() * Decimal::ONE_THOUSAND)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if milligrams == Decimal::ONE_THOUSAND {
        whole = whole.saturating_add(Decimal::ONE);
        milligrams = Decimal::ZERO;
    }

    let sign = if grams.is_sign_negative() && !(whole.is_zero() && milligrams.is_zero()) {
        "-"
    } else {
        ""
    };

    format!(
        "{}{}.{:0>3} g",
        sign,
        whole.normalize(),
        milligrams.normalize().to_string()
    )
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
    fn test_format_indian_grouping() {
        assert_eq!(format_indian(dec("0")), "0");
        assert_eq!(format_indian(dec("999")), "999");
        assert_eq!(format_indian(dec("1000")), "1,000");
        assert_eq!(format_indian(dec("65000")), "65,000");
        assert_eq!(format_indian(dec("100000")), "1,00,000");
        assert_eq!(format_indian(dec("1234567")), "12,34,567");
        assert_eq!(format_indian(dec("123456789")), "12,34,56,789");
    }

    #[test]
    fn test_format_indian_fraction() {
        assert_eq!(format_indian(dec("6500.00")), "6,500");
        assert_eq!(format_indian(dec("6500.50")), "6,500.5");
        assert_eq!(format_indian(dec("2184.004")), "2,184");
        assert_eq!(format_indian(dec("0.125")), "0.13");
        assert_eq!(format_indian(dec("999.999")), "1,000");
    }

    #[test]
    fn test_format_indian_negative() {
        assert_eq!(format_indian(dec("-1234.5")), "-1,234.5");
        assert_eq!(format_indian(dec("-0.001")), "0");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(dec("74984")), "Rs 74,984");
        assert_eq!(format_rupees(dec("80242.5")), "Rs 80,242.5");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(dec("12.345")), "12.345 g");
        assert_eq!(format_weight(dec("5")), "5.000 g");
        assert_eq!(format_weight(dec("0.05")), "0.050 g");
        assert_eq!(format_weight(dec("12.0456")), "12.046 g");
        assert_eq!(format_weight(dec("0.9996")), "1.000 g");
        assert_eq!(format_weight(dec("0")), "0.000 g");
        assert_eq!(format_weight(dec("-2.5")), "-2.500 g");
        assert_eq!(format_weight(dec("-0.0001")), "0.000 g");
    }

    #[test]
    fn test_format_weight_huge_values() {
        assert_eq!(format_weight(Decimal::MAX), "79228162514264337593543950335.000 g");
        assert_eq!(format_weight(Decimal::MIN), "-79228162514264337593543950335.000 g");
    }
}
