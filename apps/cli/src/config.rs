//! # Application Configuration
//!
//! Shop letterhead and counter defaults.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TOLA__SECTION__KEY`, e.g. `TOLA__SHOP__GSTIN`)
//! 2. Config file (`--config <path>`, else `<config dir>/config.toml`)
//! 3. Defaults (this file)
//!
//! ## Example File
//! ```toml
//! [shop]
//! name = "Bhagwan Das Jewellers"
//! gstin = "23AAPFB9424L1Z3"
//! default_customer_address = "Rewa, Madhya Pradesh"
//!
//! [shop.bank]
//! bank = "HDFC Bank, Jaipur"
//! account_number = "1234567890123456"
//! ifsc = "HDFC0001234"
//!
//! [defaults]
//! rate_basis = "per_ten_gram"
//! gst_percent = "3"
//!
//! [output]
//! invoice_dir = "invoices"
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tola_core::types::{MakingChargeMode, MetalKind, Percent, RateBasis};
use tola_core::validation::{validate_non_negative, validate_percent, validate_piece_count};
use tola_core::ValidationError;
use tola_invoice::ShopProfile;
use tracing::debug;

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "TOLA";

/// Separator between prefix, section and key in environment variables.
pub const ENV_SEPARATOR: &str = "__";

/// Everything the `tola` binary can be configured with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub shop: ShopProfile,
    pub defaults: PricingDefaults,
    pub output: OutputConfig,
}

/// Values used when a pricing flag is not given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingDefaults {
    pub rate_basis: RateBasis,
    pub making_charge_mode: MakingChargeMode,
    /// Making charge value when `--making` is not given.
    pub making_charge: Decimal,
    /// Pieces billed under a per-piece making charge.
    pub pieces: u32,
    pub gst_percent: Decimal,
    pub huid_charge: Decimal,
    pub metal: MetalKind,
}

impl Default for PricingDefaults {
    /// ## Default Values
    /// - Rate per 10 g, making charge as a percentage, no making charge
    /// - 2 pieces, 3% GST, no HUID charge
    /// - Gold
    fn default() -> Self {
        PricingDefaults {
            rate_basis: RateBasis::PerTenGram,
            making_charge_mode: MakingChargeMode::PercentOfValue,
            making_charge: Decimal::ZERO,
            pieces: 2,
            gst_percent: Decimal::from(3),
            huid_charge: Decimal::ZERO,
            metal: MetalKind::Gold,
        }
    }
}

/// Where generated files go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub invoice_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            invoice_dir: PathBuf::from("."),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

impl AppConfig {
    /// Loads configuration from `path` (or the platform default) and the
    /// process environment.
    ///
    /// An explicit `path` must exist; the platform default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Like [`AppConfig::load`], but reads environment variables from `env`
    /// instead of the process when given.
    pub fn load_with_env(path: Option<&Path>, env: Option<config::Map<String, String>>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        match path {
            Some(path) => {
                debug!(path = %path.display(), "Reading config file");
                builder = builder.add_source(config::File::from(path).required(true));
            }
            None => {
                if let Some(default_path) = default_config_path() {
                    debug!(path = %default_path.display(), "Looking for default config file");
                    builder = builder.add_source(config::File::from(default_path).required(false));
                }
            }
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .source(env),
            )
            .build()?;

        let cfg: AppConfig = settings.try_deserialize()?;
        cfg.validate()?;

        Ok(cfg)
    }

    /// Checks the pricing defaults are usable.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let defaults = &self.defaults;
        validate_percent("defaults.gst_percent", Percent::new(defaults.gst_percent))?;
        validate_non_negative("defaults.making_charge", defaults.making_charge)?;
        validate_non_negative("defaults.huid_charge", defaults.huid_charge)?;
        validate_piece_count(defaults.pieces)?;
        Ok(())
    }
}

/// Returns the default config file path.
///
/// ## Platform-Specific Paths
/// - **Linux**: `~/.config/tola/config.toml`
/// - **macOS**: `~/Library/Application Support/com.tola.tola/config.toml`
/// - **Windows**: `%APPDATA%\tola\tola\config\config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "tola", "tola").map(|dirs| dirs.config_dir().join("config.toml"))
}
