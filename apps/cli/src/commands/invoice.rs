use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tola_invoice::Invoice;
use tracing::info;
use uuid::Uuid;

use crate::cli::InvoiceArgs;
use crate::commands::price;
use crate::config::AppConfig;

/// Execute the invoice command
///
/// Prices the item, writes `{customer}_invoice.txt` and prints its path
/// (or the invoice record with `--json`).
pub fn execute(args: &InvoiceArgs, cfg: &AppConfig) -> Result<()> {
    let invoice = build(args, cfg)?;

    let dir = args.out.as_deref().unwrap_or(cfg.output.invoice_dir.as_path());
    let path = write_invoice(&invoice, dir)?;
    info!(path = %path.display(), invoice_id = %invoice.id, "Invoice written");

    if args.json {
        println!("{}", invoice.to_json()?);
    } else {
        println!("{}", path.display());
    }
    Ok(())
}

/// Prices the item and assembles the invoice, stamped now.
pub fn build(args: &InvoiceArgs, cfg: &AppConfig) -> Result<Invoice> {
    let quote = price(&args.pricing, &cfg.defaults)?;

    let invoice = Invoice::build(
        Uuid::new_v4(),
        Local::now().fixed_offset(),
        cfg.shop.clone(),
        args.request(&cfg.defaults),
        quote.result,
    )
    .context("Invalid invoice details")?;

    Ok(invoice)
}

/// Writes the rendered invoice into `dir`, creating it if needed.
pub fn write_invoice(invoice: &Invoice, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(invoice.file_name());
    fs::write(&path, invoice.render_text()).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
