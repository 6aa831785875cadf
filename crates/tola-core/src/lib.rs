//! # tola-core: Pricing Engine for Tola
//!
//! This crate is the **heart** of Tola. It turns a jeweller's counter inputs
//! (metal rate, weight, making charge, GST, HUID charge) into an itemized
//! price breakdown, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tola Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/cli (`tola` binary)                        │   │
//! │  │     flags ──► RawCalculationInput ──► summary / invoice file    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tola-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   input   │  │  pricing  │  │   money   │  │ validation│  │   │
//! │  │   │ Coerced<T>│─►│  compute  │  │   Money   │  │   rules   │  │   │
//! │  │   │  policy   │  │   quote   │  │  (paise)  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tola-invoice (Renderer)                         │   │
//! │  │        Indian grouping, weight format, words, invoice page      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (RateBasis, MakingCharge, Percent, ...)
//! - [`pricing`] - The engine: `compute` and `quote`
//! - [`input`] - Raw form text to typed input, with explicit zero substitution
//! - [`money`] - Money type in paise for presentation
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, bit for bit
//! 2. **No I/O**: file system, clock and network access is FORBIDDEN here
//! 3. **Exact Decimals**: rates, weights and percentages are `Decimal`, never `f64`
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use tola_core::pricing::{compute, CalculationInput};
//! use tola_core::types::{MakingCharge, Percent, RateBasis};
//!
//! let input = CalculationInput::new(RateBasis::PerTenGram, Decimal::from(65000), Decimal::from(10))
//!     .with_making_charge(MakingCharge::PercentOfValue { percent: Percent::new(Decimal::from(12)) })
//!     .with_gst(Percent::new(Decimal::from(3)));
//!
//! let result = compute(&input);
//! assert_eq!(result.final_price, Decimal::from(74984));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod input;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use input::{CoercionPolicy, Coerced, ParsedInput, RawCalculationInput};
pub use money::Money;
pub use pricing::{compute, quote, CalculationInput, CalculationResult, Quote};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Grams covered by a rate quoted on the ten-gram basis.
///
/// Bullion rates in India are quoted per 10 g; counter staff often think
/// per gram. Both are always carried in a result.
pub const GRAMS_PER_TEN_GRAM_RATE: u32 = 10;

/// Length of a BIS Hallmark Unique ID.
pub const HUID_LENGTH: usize = 6;

/// Maximum pieces billed under a per-piece making charge.
///
/// ## Business Reason
/// Catches a mistyped count (e.g. 200 instead of 2) before it reaches a bill.
pub const MAX_PIECE_COUNT: u32 = 999;
