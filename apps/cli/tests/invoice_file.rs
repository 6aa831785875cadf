//! Config file and invoice file round trips through the filesystem.

use std::fs;

use clap::Parser;
use rust_decimal::Decimal;
use tempfile::TempDir;
use tola_cli::cli::{Cli, Commands};
use tola_cli::commands::invoice::{build, write_invoice};
use tola_cli::commands::price;
use tola_cli::config::AppConfig;
use tola_core::types::{MakingChargeMode, MetalKind};

const SHOP_TOML: &str = r#"
[shop]
name = "Bhagwan Das Jewellers"
tagline = "Trusted Gold & Diamond Jewellery"
gstin = "23AAPFB9424L1Z3"
default_customer_address = "Rewa, Madhya Pradesh"

[shop.bank]
bank = "HDFC Bank, Jaipur"
account_number = "1234567890123456"
ifsc = "HDFC0001234"

[defaults]
making_charge_mode = "per_gram"
gst_percent = "3"
huid_charge = "150"
"#;

fn load_shop_config(dir: &TempDir) -> AppConfig {
    let path = dir.path().join("config.toml");
    fs::write(&path, SHOP_TOML).unwrap();
    AppConfig::load_with_env(Some(&path), Some(Default::default())).unwrap()
}

fn invoice_args(argv: &[&str]) -> tola_cli::cli::InvoiceArgs {
    let mut full = vec!["tola", "invoice"];
    full.extend_from_slice(argv);
    match Cli::parse_from(full).command {
        Commands::Invoice(args) => args,
        other => panic!("expected invoice, got {:?}", other),
    }
}

#[test]
fn test_config_file_layers_over_defaults() {
    let dir = TempDir::new().unwrap();
    let cfg = load_shop_config(&dir);

    assert_eq!(cfg.shop.name, "Bhagwan Das Jewellers");
    assert_eq!(cfg.shop.memo_title, "Cash / Credit Memo / Bill");
    assert_eq!(cfg.defaults.making_charge_mode, MakingChargeMode::PerGram);
    assert_eq!(cfg.defaults.huid_charge, Decimal::from(150));
    assert_eq!(cfg.defaults.metal, MetalKind::Gold);
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[defaults]\ngst_percent = \"250\"\n").unwrap();

    assert!(AppConfig::load_with_env(Some(&path), Some(Default::default())).is_err());
}

#[test]
fn test_config_defaults_fill_missing_flags() {
    let dir = TempDir::new().unwrap();
    let cfg = load_shop_config(&dir);

    // Scenario B: 6500/g, 10 g, Rs 250/g making, 3% GST, Rs 150 HUID.
    let args = invoice_args(&["--rate", "6500", "--rate-basis", "1g", "--weight", "10", "--making", "250"]);
    let quote = price(&args.pricing, &cfg.defaults).unwrap();

    assert!(quote.defaulted.is_empty());
    assert_eq!(quote.result.final_price, Decimal::from(69675));
}

#[test]
fn test_invoice_written_to_directory() {
    let dir = TempDir::new().unwrap();
    let cfg = load_shop_config(&dir);
    let out = dir.path().join("invoices");

    let args = invoice_args(&[
        "-r", "6500", "--rate-basis", "1g", "-w", "10", "-m", "250", "--customer-name", "Meera Shah",
        "--huid", "ab12c3",
    ]);
    let invoice = build(&args, &cfg).unwrap();
    let path = write_invoice(&invoice, &out).unwrap();

    assert_eq!(path, out.join("Meera_Shah_invoice.txt"));

    let page = fs::read_to_string(&path).unwrap();
    assert!(page.contains("BHAGWAN DAS JEWELLERS"));
    assert!(page.contains("GSTIN: 23AAPFB9424L1Z3"));
    assert!(page.contains("Address: Rewa, Madhya Pradesh"));
    assert!(page.contains("AB12C3"));
    assert!(page.contains("IFSC: HDFC0001234"));
    assert!(page.contains("Rs 69675.00"));
    assert!(page.contains("SIXTY-NINE THOUSAND, SIX HUNDRED SEVENTY-FIVE RUPEES ONLY"));
}

#[test]
fn test_invalid_huid_fails_before_writing() {
    let dir = TempDir::new().unwrap();
    let cfg = AppConfig::default();

    let args = invoice_args(&["-r", "65000", "-w", "10", "--huid", "BAD"]);
    assert!(build(&args, &cfg).is_err());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_strict_rejects_garbage() {
    let args = invoice_args(&["-r", "65k", "-w", "10", "--strict"]);
    assert!(price(&args.pricing, &AppConfig::default().defaults).is_err());

    let lenient = invoice_args(&["-r", "65k", "-w", "10"]);
    let quote = price(&lenient.pricing, &AppConfig::default().defaults).unwrap();
    assert_eq!(quote.result.rate_per_ten_gram, Decimal::from(65));
}
