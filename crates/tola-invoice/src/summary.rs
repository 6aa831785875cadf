//! # Calculation Summary
//!
//! The on-screen breakdown shown after "Calculate":
//!
//! ```text
//! Rate of 10g Gold: Rs 65,000
//! Rate of 1g Gold: Rs 6,500
//! Total Gold Cost (10.000 g): Rs 65,000
//! Making Charge (%): Rs 7,800
//! GST: Rs 2,184
//! HUID Charges: Rs 0
//! Final Price: Rs 74,984
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tola_core::{CalculationResult, MetalKind};
use ts_rs::TS;

use crate::format::{format_rupees, format_weight};

/// Label used for the last line, which the count-up animation redraws.
pub const FINAL_PRICE_LABEL: &str = "Final Price";

/// One `label: value` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
}

impl SummaryLine {
    fn new(label: impl Into<String>, value: String) -> Self {
        SummaryLine {
            label: label.into(),
            value,
        }
    }
}

/// Formatted breakdown of one calculation, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculationSummary {
    pub metal: MetalKind,
    pub lines: Vec<SummaryLine>,
}

impl CalculationSummary {
    /// Builds the seven summary lines for `result`.
    pub fn from_result(result: &CalculationResult, metal: MetalKind) -> Self {
        let lines = vec![
            SummaryLine::new(
                format!("Rate of 10g {}", metal),
                format_rupees(result.rate_per_ten_gram),
            ),
            SummaryLine::new(
                format!("Rate of 1g {}", metal),
                format_rupees(result.rate_per_gram),
            ),
            SummaryLine::new(
                format!("Total {} Cost ({})", metal, format_weight(result.weight_grams)),
                format_rupees(result.item_value),
            ),
            SummaryLine::new(
                format!("Making Charge ({})", result.making_charge_mode.token()),
                format_rupees(result.making_charge_amount),
            ),
            SummaryLine::new("GST", format_rupees(result.gst_amount)),
            SummaryLine::new("HUID Charges", format_rupees(result.huid_charge)),
            SummaryLine::new(FINAL_PRICE_LABEL, format_rupees(result.final_price)),
        ];

        CalculationSummary { metal, lines }
    }

    /// All lines except the final price.
    pub fn breakdown(&self) -> &[SummaryLine] {
        let end = self.lines.len().saturating_sub(1);
        &self.lines[..end]
    }

    /// Renders every line, newline-terminated.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{}: {}\n", line.label, line.value))
            .collect()
    }
}

/// A final price line for an intermediate animation frame.
pub fn final_price_line(value: Decimal) -> String {
    format!("{}: {}", FINAL_PRICE_LABEL, format_rupees(value))
}

// =============================================================================
// Unit Tests
// =============================================================================
