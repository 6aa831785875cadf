use anyhow::{Context, Result};
use tracing::info;

use crate::config::{default_config_path, AppConfig};

/// Execute the config show command
///
/// Prints the merged configuration (defaults, file, environment) as TOML.
pub fn show(cfg: &AppConfig) -> Result<()> {
    let toml_string = toml::to_string_pretty(cfg).context("Failed to serialize configuration")?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config path command
pub fn path() -> Result<()> {
    match default_config_path() {
        Some(path) => println!("{}", path.display()),
        None => println!("No home directory found; pass --config explicitly"),
    }
    Ok(())
}
