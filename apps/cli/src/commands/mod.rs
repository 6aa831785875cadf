//! Command implementations for the CLI
//!
//! - quote: price an item and print the breakdown
//! - invoice: price an item and write a printable invoice
//! - config: show the effective configuration

pub mod config;
pub mod invoice;
pub mod quote;

use anyhow::{Context, Result};
use tola_core::Quote;
use tracing::warn;

use crate::cli::PricingArgs;
use crate::config::PricingDefaults;

/// Parses the pricing flags and runs the engine.
///
/// Fields read as zero under the lenient policy are logged as warnings.
pub fn price(pricing: &PricingArgs, defaults: &PricingDefaults) -> Result<Quote> {
    let raw = pricing.to_raw(defaults);
    let quote = tola_core::quote(&raw, pricing.policy()).context("Could not price the item")?;

    for field in &quote.defaulted {
        warn!(field = %field, "Empty or unreadable value, using 0");
    }

    Ok(quote)
}
