//! # Domain Types
//!
//! Core domain types used throughout Tola.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │   RateBasis     │   │    MakingCharge      │   │    Percent      │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  PerTenGram     │   │  PercentOfValue{%}   │   │  Decimal        │  │
//! │  │  PerGram        │   │  PerGram{amount}     │   │  3 = 3%         │  │
//! │  └─────────────────┘   │  PerPiece{amt, pcs}  │   └─────────────────┘  │
//! │                        └──────────────────────┘                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐                         │
//! │  │   MetalKind     │   │       Field          │                         │
//! │  │  Gold, Silver   │   │  rate, weight, ...   │                         │
//! │  └─────────────────┘   └──────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every selectable type parses from the token the counter form uses
//! (`"10g"`, `"/gm"`, ...) as well as from a readable name (`per-gram`).

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Percent
// =============================================================================

/// A percentage held as an exact decimal: `Percent::new(3)` is 3%.
///
/// Used for GST and for percent-of-value making charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percent(#[ts(type = "string")] Decimal);

impl Percent {
    /// Creates a percentage from its numeric value (12 = 12%).
    #[inline]
    pub const fn new(value: Decimal) -> Self {
        Percent(value)
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percent(Decimal::ZERO)
    }

    /// Returns the numeric value (12 for 12%).
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Applies this percentage to an amount: `amount × pct / 100`.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tola_core::types::Percent;
    ///
    /// let gst = Percent::new(Decimal::from(3));
    /// assert_eq!(gst.of(Decimal::from(72800)), Decimal::from(2184));
    /// ```
    pub fn of(&self, amount: Decimal) -> Decimal {
        // Saturates at Decimal::MAX so the engine stays total
        amount.saturating_mul(self.0) / Decimal::ONE_HUNDRED
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

// =============================================================================
// Rate Basis
// =============================================================================

/// Unit the entered metal rate is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RateBasis {
    /// Rate per 10 grams (how bullion is quoted).
    #[default]
    PerTenGram,
    /// Rate per gram.
    PerGram,
}

impl RateBasis {
    /// The selector token the counter form uses.
    pub const fn token(&self) -> &'static str {
        match self {
            RateBasis::PerTenGram => "10g",
            RateBasis::PerGram => "1g",
        }
    }
}

impl fmt::Display for RateBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for RateBasis {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "10g" | "10" | "per-ten-gram" | "per_ten_gram" => Ok(RateBasis::PerTenGram),
            "1g" | "1" | "per-gram" | "per_gram" => Ok(RateBasis::PerGram),
            _ => Err(ValidationError::NotAllowed {
                field: "rate basis".to_string(),
                allowed: vec!["10g".to_string(), "1g".to_string()],
            }),
        }
    }
}

// =============================================================================
// Making Charge
// =============================================================================

/// How a making charge value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MakingChargeMode {
    /// Percentage of the metal value.
    #[default]
    PercentOfValue,
    /// Flat amount per gram of weight.
    PerGram,
    /// Flat amount per piece.
    PerPiece,
}

impl MakingChargeMode {
    /// The selector token the counter form uses (also printed in summaries).
    pub const fn token(&self) -> &'static str {
        match self {
            MakingChargeMode::PercentOfValue => "%",
            MakingChargeMode::PerGram => "/gm",
            MakingChargeMode::PerPiece => "/pc",
        }
    }
}

impl fmt::Display for MakingChargeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for MakingChargeMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "%" | "percent" | "percent-of-value" | "percent_of_value" => {
                Ok(MakingChargeMode::PercentOfValue)
            }
            "/gm" | "gm" | "per-gram" | "per_gram" => Ok(MakingChargeMode::PerGram),
            "/pc" | "pc" | "per-piece" | "per_piece" => Ok(MakingChargeMode::PerPiece),
            _ => Err(ValidationError::NotAllowed {
                field: "making charge mode".to_string(),
                allowed: vec!["%".to_string(), "/gm".to_string(), "/pc".to_string()],
            }),
        }
    }
}

/// Labour/fabrication fee, one variant per charging convention.
///
/// Adding a convention means adding a variant here; the engine matches
/// exhaustively, so nothing falls through silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MakingCharge {
    /// Percentage of the metal value.
    PercentOfValue { percent: Percent },
    /// Amount per gram.
    PerGram {
        #[ts(type = "string")]
        amount: Decimal,
    },
    /// Amount per piece, times the piece count.
    PerPiece {
        #[ts(type = "string")]
        amount: Decimal,
        pieces: u32,
    },
}

impl MakingCharge {
    /// No making charge (0%).
    pub const fn none() -> Self {
        MakingCharge::PercentOfValue {
            percent: Percent::zero(),
        }
    }

    /// Builds a charge from the form's mode, value and piece count.
    ///
    /// `pieces` is only read for [`MakingChargeMode::PerPiece`].
    pub fn from_parts(mode: MakingChargeMode, value: Decimal, pieces: u32) -> Self {
        match mode {
            MakingChargeMode::PercentOfValue => MakingCharge::PercentOfValue {
                percent: Percent::new(value),
            },
            MakingChargeMode::PerGram => MakingCharge::PerGram { amount: value },
            MakingChargeMode::PerPiece => MakingCharge::PerPiece {
                amount: value,
                pieces,
            },
        }
    }

    /// The convention this charge uses.
    pub const fn mode(&self) -> MakingChargeMode {
        match self {
            MakingCharge::PercentOfValue { .. } => MakingChargeMode::PercentOfValue,
            MakingCharge::PerGram { .. } => MakingChargeMode::PerGram,
            MakingCharge::PerPiece { .. } => MakingChargeMode::PerPiece,
        }
    }

    /// The value as entered: the percentage, or the per-gram/per-piece amount.
    pub const fn value(&self) -> Decimal {
        match self {
            MakingCharge::PercentOfValue { percent } => percent.value(),
            MakingCharge::PerGram { amount } | MakingCharge::PerPiece { amount, .. } => *amount,
        }
    }
}

impl Default for MakingCharge {
    fn default() -> Self {
        MakingCharge::none()
    }
}

// =============================================================================
// Metal Kind
// =============================================================================

/// The jewellery type selector. A label only; it never changes the math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MetalKind {
    #[default]
    Gold,
    Silver,
}

impl MetalKind {
    /// Display label ("Gold", "Silver").
    pub const fn label(&self) -> &'static str {
        match self {
            MetalKind::Gold => "Gold",
            MetalKind::Silver => "Silver",
        }
    }
}

impl fmt::Display for MetalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MetalKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gold" => Ok(MetalKind::Gold),
            "silver" => Ok(MetalKind::Silver),
            _ => Err(ValidationError::NotAllowed {
                field: "jewellery type".to_string(),
                allowed: vec!["gold".to_string(), "silver".to_string()],
            }),
        }
    }
}

// =============================================================================
// Field
// =============================================================================

/// Identifies a numeric input field, for errors and substitution reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Rate,
    Weight,
    MakingCharge,
    Pieces,
    Gst,
    HuidCharge,
}

impl Field {
    /// Field name as shown in messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Field::Rate => "rate",
            Field::Weight => "weight",
            Field::MakingCharge => "making_charge",
            Field::Pieces => "pieces",
            Field::Gst => "gst",
            Field::HuidCharge => "huid_charge",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
