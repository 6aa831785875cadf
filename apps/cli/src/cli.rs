//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tola_core::types::{MakingChargeMode, MetalKind, RateBasis};
use tola_core::{CoercionPolicy, RawCalculationInput};
use tola_invoice::{Customer, InvoiceRequest};

use crate::config::PricingDefaults;

#[derive(Parser, Debug)]
#[command(name = "tola", version, about = "Jewellery price calculator and invoice printer")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "TOLA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Price an item and print the breakdown
    Quote(QuoteArgs),

    /// Price an item and write a printable invoice
    Invoice(InvoiceArgs),

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the default config file location
    Path,
}

/// The counter form. Numbers are taken as typed and parsed by the engine.
#[derive(Args, Debug, Clone)]
pub struct PricingArgs {
    /// Unit of the metal rate: 10g or 1g
    #[arg(long)]
    pub rate_basis: Option<RateBasis>,

    /// Metal rate in rupees, e.g. 65000 or 65,000
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: String,

    /// Weight in grams, e.g. 12.345
    #[arg(short, long, allow_hyphen_values = true)]
    pub weight: String,

    /// Making charge value (percent, rupees per gram, or rupees per piece)
    #[arg(short, long, allow_hyphen_values = true)]
    pub making: Option<String>,

    /// Making charge mode: %, /gm or /pc
    #[arg(long)]
    pub making_mode: Option<MakingChargeMode>,

    /// Pieces for a per-piece making charge
    #[arg(long)]
    pub pieces: Option<String>,

    /// GST percentage
    #[arg(short, long, allow_hyphen_values = true)]
    pub gst: Option<String>,

    /// Flat hallmarking (HUID) charge in rupees
    #[arg(long, allow_hyphen_values = true)]
    pub huid_charge: Option<String>,

    /// Jewellery type: gold or silver
    #[arg(long)]
    pub metal: Option<MetalKind>,

    /// Reject unparseable numbers instead of treating them as zero
    #[arg(long)]
    pub strict: bool,
}

impl PricingArgs {
    /// Fills unset flags from the configured defaults.
    pub fn to_raw(&self, defaults: &PricingDefaults) -> RawCalculationInput {
        RawCalculationInput {
            rate_basis: self.rate_basis.unwrap_or(defaults.rate_basis),
            rate: self.rate.clone(),
            weight: self.weight.clone(),
            making_charge_mode: self.making_mode.unwrap_or(defaults.making_charge_mode),
            making_charge: self
                .making
                .clone()
                .unwrap_or_else(|| defaults.making_charge.to_string()),
            pieces: self.pieces.clone().unwrap_or_else(|| defaults.pieces.to_string()),
            gst: self.gst.clone().unwrap_or_else(|| defaults.gst_percent.to_string()),
            huid_charge: self
                .huid_charge
                .clone()
                .unwrap_or_else(|| defaults.huid_charge.to_string()),
        }
    }

    pub fn policy(&self) -> CoercionPolicy {
        if self.strict {
            CoercionPolicy::Strict
        } else {
            CoercionPolicy::Lenient
        }
    }

    pub fn metal(&self, defaults: &PricingDefaults) -> MetalKind {
        self.metal.unwrap_or(defaults.metal)
    }
}

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub pricing: PricingArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Count the final price up from zero
    #[arg(long, conflicts_with = "json")]
    pub animate: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InvoiceArgs {
    #[command(flatten)]
    pub pricing: PricingArgs,

    /// Customer name
    #[arg(long, default_value = "")]
    pub customer_name: String,

    /// Customer phone number
    #[arg(long, default_value = "")]
    pub contact: String,

    /// Customer address
    #[arg(long, default_value = "")]
    pub address: String,

    /// Hallmark Unique ID of the piece
    #[arg(long, default_value = "")]
    pub huid: String,

    /// Directory to write the invoice to
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the invoice record as JSON
    #[arg(long)]
    pub json: bool,
}

impl InvoiceArgs {
    pub fn request(&self, defaults: &PricingDefaults) -> InvoiceRequest {
        InvoiceRequest {
            customer: Customer {
                name: self.customer_name.clone(),
                contact: self.contact.clone(),
                address: self.address.clone(),
            },
            metal: self.pricing.metal(defaults),
            huid_number: self.huid.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_quote_flags() {
        let cli = Cli::parse_from([
            "tola", "quote", "--rate", "6500", "--rate-basis", "1g", "--weight", "10", "--making", "250",
            "--making-mode", "/gm", "--huid-charge", "150",
        ]);
        let Commands::Quote(args) = cli.command else {
            panic!("expected quote");
        };

        let raw = args.pricing.to_raw(&PricingDefaults::default());
        assert_eq!(raw.rate_basis, RateBasis::PerGram);
        assert_eq!(raw.making_charge_mode, MakingChargeMode::PerGram);
        assert_eq!(raw.gst, "3");
        assert_eq!(raw.huid_charge, "150");
        assert_eq!(args.pricing.policy(), CoercionPolicy::Lenient);
    }

    #[test]
    fn test_missing_making_uses_configured_default() {
        let cli = Cli::parse_from(["tola", "quote", "-r", "65000", "-w", "10"]);
        let Commands::Quote(args) = cli.command else {
            panic!("expected quote");
        };

        let raw = args.pricing.to_raw(&PricingDefaults::default());
        assert_eq!(raw.making_charge, "0");

        let quote = tola_core::quote(&raw, args.pricing.policy()).unwrap();
        assert!(quote.defaulted.is_empty());
    }

    #[test]
    fn test_invoice_flags() {
        let cli = Cli::parse_from([
            "tola", "--config", "shop.toml", "invoice", "-r", "65000", "-w", "5", "--metal", "silver",
            "--customer-name", "Asha", "--huid", "AB12C3", "--strict",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("shop.toml")));
        let Commands::Invoice(args) = cli.command else {
            panic!("expected invoice");
        };

        let request = args.request(&PricingDefaults::default());
        assert_eq!(request.metal, MetalKind::Silver);
        assert_eq!(request.customer.name, "Asha");
        assert_eq!(args.pricing.policy(), CoercionPolicy::Strict);
    }

    #[test]
    fn test_bad_selector_is_rejected() {
        let parsed = Cli::try_parse_from(["tola", "quote", "-r", "1", "-w", "1", "--rate-basis", "5g"]);
        assert!(parsed.is_err());
    }
}
