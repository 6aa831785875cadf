//! # Pricing Engine
//!
//! The one piece of real domain logic in Tola: raw counter inputs in, an
//! itemized price breakdown out.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         compute(input)                                  │
//! │                                                                         │
//! │  1. rate_value ──► rate_per_gram, rate_per_ten_gram   (both always)    │
//! │                                                                         │
//! │  2. item_value = rate_per_gram × weight_grams                          │
//! │                                                                         │
//! │  3. making_charge_amount                                                │
//! │       PercentOfValue: item_value × pct / 100                           │
//! │       PerGram:        amount × weight_grams                            │
//! │       PerPiece:       amount × pieces                                  │
//! │                                                                         │
//! │  4. value_before_tax = item_value + making_charge_amount               │
//! │                                                                         │
//! │  5. gst_amount = value_before_tax × gst / 100                          │
//! │                                                                         │
//! │  6. final_price = value_before_tax + gst_amount + huid_charge          │
//! │                                          (HUID is added after tax)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No state, no caching: every call recomputes the whole breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::input::{CoercionPolicy, RawCalculationInput};
use crate::types::{Field, MakingCharge, MakingChargeMode, Percent, RateBasis};

// =============================================================================
// Calculation Input
// =============================================================================

/// One calculation request, fully typed.
///
/// All numeric fields are expected to be non-negative; the engine does not
/// reject negatives, it just computes with them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculationInput {
    /// Unit `rate_value` is quoted in.
    pub rate_basis: RateBasis,

    /// Metal rate in rupees per `rate_basis`.
    #[ts(type = "string")]
    pub rate_value: Decimal,

    /// Item weight in grams (fractional: 12.345 = 12 g 345 mg).
    #[ts(type = "string")]
    pub weight_grams: Decimal,

    /// Making charge with its convention.
    pub making_charge: MakingCharge,

    /// GST on metal value plus making charge.
    pub gst_percent: Percent,

    /// Flat hallmarking fee, added after tax. Zero when not charged.
    #[ts(type = "string")]
    pub huid_charge: Decimal,
}

impl CalculationInput {
    /// Creates an input with no making charge, no GST and no HUID charge.
    pub fn new(rate_basis: RateBasis, rate_value: Decimal, weight_grams: Decimal) -> Self {
        CalculationInput {
            rate_basis,
            rate_value,
            weight_grams,
            ..Default::default()
        }
    }

    /// Sets the making charge.
    pub fn with_making_charge(mut self, making_charge: MakingCharge) -> Self {
        self.making_charge = making_charge;
        self
    }

    /// Sets the GST percentage.
    pub fn with_gst(mut self, gst_percent: Percent) -> Self {
        self.gst_percent = gst_percent;
        self
    }

    /// Sets the HUID charge.
    pub fn with_huid_charge(mut self, huid_charge: Decimal) -> Self {
        self.huid_charge = huid_charge;
        self
    }
}

// =============================================================================
// Calculation Result
// =============================================================================

/// Itemized breakdown. Exact decimals; round only when displaying.
///
/// The last five fields echo the input so display and invoice layers can
/// work from the result alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculationResult {
    #[ts(type = "string")]
    pub rate_per_ten_gram: Decimal,
    #[ts(type = "string")]
    pub rate_per_gram: Decimal,
    #[ts(type = "string")]
    pub item_value: Decimal,
    #[ts(type = "string")]
    pub making_charge_amount: Decimal,
    #[ts(type = "string")]
    pub value_before_tax: Decimal,
    #[ts(type = "string")]
    pub gst_amount: Decimal,
    #[ts(type = "string")]
    pub final_price: Decimal,

    #[ts(type = "string")]
    pub weight_grams: Decimal,
    pub making_charge_mode: MakingChargeMode,
    #[ts(type = "string")]
    pub making_charge_value: Decimal,
    pub gst_percent: Percent,
    #[ts(type = "string")]
    pub huid_charge: Decimal,
}

// =============================================================================
// Engine Steps
// =============================================================================

/// Expresses a rate on both bases: `(rate_per_ten_gram, rate_per_gram)`.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use tola_core::pricing::normalize_rate;
/// use tola_core::types::RateBasis;
///
/// let (per_ten, per_gram) = normalize_rate(RateBasis::PerTenGram, Decimal::from(65000));
/// assert_eq!(per_ten, Decimal::from(65000));
/// assert_eq!(per_gram, Decimal::from(6500));
/// ```
pub fn normalize_rate(basis: RateBasis, rate_value: Decimal) -> (Decimal, Decimal) {
    let ten = Decimal::from(crate::GRAMS_PER_TEN_GRAM_RATE);
    match basis {
        RateBasis::PerTenGram => (rate_value, rate_value / ten),
        RateBasis::PerGram => (rate_value.saturating_mul(ten), rate_value),
    }
}

/// Making charge amount for a given metal value and weight.
pub fn making_charge_amount(charge: &MakingCharge, item_value: Decimal, weight_grams: Decimal) -> Decimal {
    match charge {
        MakingCharge::PercentOfValue { percent } => percent.of(item_value),
        MakingCharge::PerGram { amount } => amount.saturating_mul(weight_grams),
        MakingCharge::PerPiece { amount, pieces } => amount.saturating_mul(Decimal::from(*pieces)),
    }
}

/// Computes the full price breakdown.
///
/// Total and deterministic: any input produces a result, and the same
/// input always produces the same result. Sums and products saturate at
/// `Decimal::MAX` instead of panicking.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use tola_core::pricing::{compute, CalculationInput};
/// use tola_core::types::{MakingCharge, Percent, RateBasis};
///
/// // 6500/g, 10 g, Rs 250/g making, 3% GST, Rs 150 HUID
/// let input = CalculationInput::new(RateBasis::PerGram, Decimal::from(6500), Decimal::from(10))
///     .with_making_charge(MakingCharge::PerGram { amount: Decimal::from(250) })
///     .with_gst(Percent::new(Decimal::from(3)))
///     .with_huid_charge(Decimal::from(150));
///
/// let result = compute(&input);
/// assert_eq!(result.value_before_tax, Decimal::from(67500));
/// assert_eq!(result.final_price, Decimal::from(69675));
/// ```
pub fn compute(input: &CalculationInput) -> CalculationResult {
    let (rate_per_ten_gram, rate_per_gram) = normalize_rate(input.rate_basis, input.rate_value);
    let item_value = rate_per_gram.saturating_mul(input.weight_grams);
    let making = making_charge_amount(&input.making_charge, item_value, input.weight_grams);
    let value_before_tax = item_value.saturating_add(making);
    let gst_amount = input.gst_percent.of(value_before_tax);
    let final_price = value_before_tax
        .saturating_add(gst_amount)
        .saturating_add(input.huid_charge);

    debug!(
        basis = %input.rate_basis,
        mode = %input.making_charge.mode(),
        %item_value,
        %final_price,
        "computed price breakdown"
    );

    CalculationResult {
        rate_per_ten_gram,
        rate_per_gram,
        item_value,
        making_charge_amount: making,
        value_before_tax,
        gst_amount,
        final_price,
        weight_grams: input.weight_grams,
        making_charge_mode: input.making_charge.mode(),
        making_charge_value: input.making_charge.value(),
        gst_percent: input.gst_percent,
        huid_charge: input.huid_charge,
    }
}

// =============================================================================
// Quote (raw input → result)
// =============================================================================

/// A result together with the fields that were zero-substituted to get it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quote {
    pub result: CalculationResult,
    pub defaulted: Vec<Field>,
}

/// Parses raw form text under `policy`, then computes.
///
/// ## User Workflow
/// ```text
/// Operator fills the form, presses "Calculate"
///      │
///      ▼
/// quote(raw, policy) ← THIS FUNCTION
///      │
///      ├── Strict + bad text? → Err(InvalidNumericInput { field, .. })
///      │
///      └── OK → Quote { result, defaulted: [fields that became 0] }
/// ```
pub fn quote(raw: &RawCalculationInput, policy: CoercionPolicy) -> CoreResult<Quote> {
    let parsed = raw.parse(policy)?;
    Ok(Quote {
        result: compute(&parsed.input),
        defaulted: parsed.defaulted,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn paise(amount: Decimal) -> i64 {
        Money::from_rupees(amount).paise()
    }

    #[test]
    fn test_scenario_percent_making_charge() {
        let input = CalculationInput::new(RateBasis::PerTenGram, dec("65000"), dec("10"))
            .with_making_charge(MakingCharge::PercentOfValue { percent: Percent::new(dec("12")) })
            .with_gst(Percent::new(dec("3")));

        let result = compute(&input);
        assert_eq!(paise(result.item_value), 6_500_000);
        assert_eq!(paise(result.making_charge_amount), 780_000);
        assert_eq!(paise(result.value_before_tax), 7_280_000);
        assert_eq!(paise(result.gst_amount), 218_400);
        assert_eq!(paise(result.final_price), 7_498_400);
    }

    #[test]
    fn test_scenario_per_gram_making_with_huid() {
        let input = CalculationInput::new(RateBasis::PerGram, dec("6500"), dec("10"))
            .with_making_charge(MakingCharge::PerGram { amount: dec("250") })
            .with_gst(Percent::new(dec("3")))
            .with_huid_charge(dec("150"));

        let result = compute(&input);
        assert_eq!(paise(result.item_value), 6_500_000);
        assert_eq!(paise(result.making_charge_amount), 250_000);
        assert_eq!(paise(result.value_before_tax), 6_750_000);
        assert_eq!(paise(result.gst_amount), 202_500);
        assert_eq!(paise(result.final_price), 6_967_500);
        assert_eq!(result.rate_per_ten_gram, dec("65000"));
    }

    #[test]
    fn test_scenario_per_piece_making() {
        let input = CalculationInput::new(RateBasis::PerTenGram, dec("65000"), dec("5"))
            .with_making_charge(MakingCharge::PerPiece { amount: dec("500"), pieces: 2 })
            .with_gst(Percent::new(dec("3")));

        let result = compute(&input);
        assert_eq!(paise(result.item_value), 3_250_000);
        assert_eq!(paise(result.making_charge_amount), 100_000);
        assert_eq!(paise(result.value_before_tax), 3_350_000);
        assert_eq!(paise(result.gst_amount), 100_500);
        assert_eq!(paise(result.final_price), 3_450_500);
    }

    #[test]
    fn test_huid_charge_is_not_taxed() {
        let base = CalculationInput::new(RateBasis::PerGram, dec("6500"), dec("1"))
            .with_gst(Percent::new(dec("3")));
        let with_huid = base.clone().with_huid_charge(dec("150"));

        let a = compute(&base);
        let b = compute(&with_huid);
        assert_eq!(a.gst_amount, b.gst_amount);
        assert_eq!(b.final_price - a.final_price, dec("150"));
    }

    #[test]
    fn test_fractional_weight() {
        let input = CalculationInput::new(RateBasis::PerTenGram, dec("65000"), dec("12.345"));
        let result = compute(&input);
        assert_eq!(result.item_value, dec("80242.5"));
    }

    #[test]
    fn test_zero_weight_with_per_piece_still_charges_making() {
        let input = CalculationInput::new(RateBasis::PerTenGram, dec("65000"), Decimal::ZERO)
            .with_making_charge(MakingCharge::PerPiece { amount: dec("500"), pieces: 3 });
        let result = compute(&input);
        assert_eq!(result.item_value, Decimal::ZERO);
        assert_eq!(result.making_charge_amount, dec("1500"));
    }

    #[test]
    fn test_result_echoes_input() {
        let input = CalculationInput::new(RateBasis::PerTenGram, dec("65000"), dec("5"))
            .with_making_charge(MakingCharge::PerPiece { amount: dec("500"), pieces: 2 })
            .with_gst(Percent::new(dec("3")))
            .with_huid_charge(dec("45"));
        let result = compute(&input);
        assert_eq!(result.weight_grams, dec("5"));
        assert_eq!(result.making_charge_mode, MakingChargeMode::PerPiece);
        assert_eq!(result.making_charge_value, dec("500"));
        assert_eq!(result.gst_percent, Percent::new(dec("3")));
        assert_eq!(result.huid_charge, dec("45"));
    }

    #[test]
    fn test_negative_inputs_pass_through() {
        let input = CalculationInput::new(RateBasis::PerGram, dec("-100"), dec("2"))
            .with_making_charge(MakingCharge::PerGram { amount: dec("-10") })
            .with_gst(Percent::new(dec("3")))
            .with_huid_charge(dec("-50"));

        let result = compute(&input);
        assert_eq!(result.rate_per_ten_gram, dec("-1000"));
        assert_eq!(result.item_value, dec("-200"));
        assert_eq!(result.making_charge_amount, dec("-20"));
        assert_eq!(result.value_before_tax, dec("-220"));
        assert_eq!(result.gst_amount, dec("-6.6"));
        assert_eq!(result.final_price, dec("-276.6"));
    }

    #[test]
    fn test_negative_weight_and_percent_making() {
        let input = CalculationInput::new(RateBasis::PerTenGram, dec("65000"), dec("-1"))
            .with_making_charge(MakingCharge::PercentOfValue { percent: Percent::new(dec("-10")) });

        let result = compute(&input);
        assert_eq!(result.item_value, dec("-6500"));
        assert_eq!(result.making_charge_amount, dec("650"));
        assert_eq!(result.final_price, dec("-5850"));
    }

    #[test]
    fn test_huge_values_saturate_instead_of_panicking() {
        let input = CalculationInput::new(RateBasis::PerGram, Decimal::MAX, Decimal::MAX)
            .with_gst(Percent::new(Decimal::MAX))
            .with_huid_charge(Decimal::MAX);
        let result = compute(&input);
        assert_eq!(result.final_price, Decimal::MAX);
    }

    #[test]
    fn test_quote_reports_defaulted_fields() {
        let raw = RawCalculationInput {
            rate: "65000".to_string(),
            weight: "ten".to_string(),
            making_charge: "12".to_string(),
            gst: "3".to_string(),
            huid_charge: "0".to_string(),
            ..Default::default()
        };

        let lenient = quote(&raw, CoercionPolicy::Lenient).unwrap();
        assert_eq!(lenient.defaulted, vec![Field::Weight]);
        assert_eq!(lenient.result.final_price, Decimal::ZERO);

        assert!(quote(&raw, CoercionPolicy::Strict).is_err());
    }
}
