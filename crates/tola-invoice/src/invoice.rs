//! # Invoice Document
//!
//! A printable cash / credit memo for one priced item.
//!
//! ## Page Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HEADER      shop name, tagline, memo title, GSTIN                      │
//! │  BILL TO     name, address, contact            date, invoice no.       │
//! │  ITEM        type, HUID no., weight, rate/10g, total, GST%             │
//! │  CHARGES     making, HUID, GST amount                                  │
//! │  TOTALS      sub total, total GST, FINAL PRICE                         │
//! │  WORDS       "SEVENTY-FOUR THOUSAND, ... RUPEES ONLY"                  │
//! │  BANK        bank, A/C no., IFSC (when configured)                     │
//! │  SIGNATORY   Authorized Signatory                                      │
//! │  FOOTER      thank-you line, shop address and phone                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! The invoice id and issue time are arguments. Generating them, and
//! writing the rendered page anywhere, is the caller's business.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tola_core::money::Money;
use tola_core::validation::{validate_customer_name, validate_huid, ValidationResult};
use tola_core::{CalculationResult, MetalKind};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::format::format_weight;
use crate::words::invoice_words;

/// Characters per line of the rendered page.
pub const PAGE_WIDTH: usize = 64;

const PLACEHOLDER_NAME: &str = "Customer Name";
const NOT_SPECIFIED: &str = "Not Specified";
const NO_HUID: &str = "N/A";

// =============================================================================
// Request Types
// =============================================================================

/// Bill-to details as typed by the operator. Blank fields are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub name: String,
    pub contact: String,
    pub address: String,
}

/// Everything printed on an invoice besides the price breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceRequest {
    pub customer: Customer,
    pub metal: MetalKind,
    /// Hallmark Unique ID of the piece; blank prints `N/A`.
    pub huid_number: String,
}

impl InvoiceRequest {
    /// Checks the customer name length and HUID format.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_customer_name(&self.customer.name)?;
        validate_huid(&self.huid_number)?;
        Ok(())
    }
}

// =============================================================================
// Shop Profile
// =============================================================================

/// Settlement account printed under the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BankDetails {
    pub bank: String,
    pub account_number: String,
    pub ifsc: String,
}

/// The shop's letterhead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ShopProfile {
    pub name: String,
    pub tagline: String,
    pub memo_title: String,
    /// Omitted from the header when blank.
    pub gstin: String,
    pub address: String,
    pub phone: String,
    /// Printed when the operator leaves the customer address blank.
    pub default_customer_address: String,
    pub bank: Option<BankDetails>,
}

impl Default for ShopProfile {
    fn default() -> Self {
        ShopProfile {
            name: "Tola Jewellers".to_string(),
            tagline: "Gold & Silver Jewellery".to_string(),
            memo_title: "Cash / Credit Memo / Bill".to_string(),
            gstin: String::new(),
            address: String::new(),
            phone: String::new(),
            default_customer_address: NOT_SPECIFIED.to_string(),
            bank: None,
        }
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A finished invoice: placeholders applied, amounts computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    #[ts(type = "string")]
    pub id: Uuid,
    #[ts(type = "string")]
    pub issued_at: DateTime<FixedOffset>,
    pub shop: ShopProfile,
    /// Customer as printed, with placeholders for blank fields.
    pub bill_to: Customer,
    pub metal: MetalKind,
    /// Upper-cased HUID, `None` when not given.
    pub huid_number: Option<String>,
    pub result: CalculationResult,
    pub amount_in_words: String,
}

impl Invoice {
    /// Validates the request and assembles the invoice.
    ///
    /// ## Placeholders
    /// - blank name → `Customer Name`
    /// - blank address → the shop's `default_customer_address`
    /// - blank contact → `Not Specified`
    pub fn build(
        id: Uuid,
        issued_at: DateTime<FixedOffset>,
        shop: ShopProfile,
        request: InvoiceRequest,
        result: CalculationResult,
    ) -> ValidationResult<Invoice> {
        request.validate()?;

        let Customer { name, contact, address } = request.customer;
        let bill_to = Customer {
            name: or_placeholder(name, PLACEHOLDER_NAME),
            contact: or_placeholder(contact, NOT_SPECIFIED),
            address: or_placeholder(address, &shop.default_customer_address),
        };

        let huid = request.huid_number.trim().to_ascii_uppercase();
        let huid_number = if huid.is_empty() { None } else { Some(huid) };

        let amount_in_words = invoice_words(result.final_price);

        debug!(%id, metal = %request.metal, final_price = %result.final_price, "built invoice");

        Ok(Invoice {
            id,
            issued_at,
            shop,
            bill_to,
            metal: request.metal,
            huid_number,
            result,
            amount_in_words,
        })
    }

    /// Suggested file name: `{customer}_invoice.txt`.
    ///
    /// Letters and digits are kept, whitespace becomes `_`, everything else
    /// is dropped.
    pub fn file_name(&self) -> String {
        let stem: String = self
            .bill_to
            .name
            .split_whitespace()
            .map(|word| word.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join("_");

        if stem.is_empty() {
            "customer_invoice.txt".to_string()
        } else {
            format!("{}_invoice.txt", stem)
        }
    }

    /// JSON record of the invoice.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Lays the invoice out as a fixed-width text page.
    pub fn render_text(&self) -> String {
        let mut page = Page::default();
        let shop = &self.shop;
        let result = &self.result;

        // Header
        page.rule('=');
        page.center(&shop.name.to_uppercase());
        page.center(&shop.tagline);
        page.center(&shop.memo_title);
        if !shop.gstin.trim().is_empty() {
            page.center(&format!("GSTIN: {}", shop.gstin));
        }
        page.rule('=');

        // Bill to
        page.row("BILL TO", &format!("Date: {}", self.issued_at.format("%d/%m/%Y %H:%M")));
        page.text(&format!("Name: {}", self.bill_to.name));
        page.text(&format!("Address: {}", self.bill_to.address));
        page.text(&format!("Contact: {}", self.bill_to.contact));
        page.text(&format!("Invoice No.: {}", self.id));
        page.rule('-');

        // Item
        page.row("Jewellery Type", self.metal.label());
        page.row("HUID No.", self.huid_number.as_deref().unwrap_or(NO_HUID));
        page.row("Weight", &format_weight(result.weight_grams));
        page.row("Rate/10g", &rupees(result.rate_per_ten_gram));
        page.row("Total", &rupees(result.item_value));
        page.row("GST%", &result.gst_percent.to_string());
        page.rule('-');

        // Charges breakdown
        page.text("Charges Breakdown");
        page.row(
            &format!("Making Charges ({})", result.making_charge_mode.token()),
            &rupees(result.making_charge_amount),
        );
        page.row("HUID Charges", &rupees(result.huid_charge));
        page.row("GST Amount", &rupees(result.gst_amount));
        page.rule('-');

        // Totals
        page.row("Sub Total", &rupees(result.value_before_tax));
        page.row("Total GST", &rupees(result.gst_amount));
        page.row("FINAL PRICE", &rupees(result.final_price));
        page.rule('-');

        // Amount in words
        page.text("Amount in Words:");
        page.wrap(&self.amount_in_words);
        page.blank();

        if let Some(bank) = &shop.bank {
            page.text("Bank Details");
            page.text(&format!("Bank: {}", bank.bank));
            page.text(&format!("A/C No.: {}", bank.account_number));
            page.text(&format!("IFSC: {}", bank.ifsc));
            page.blank();
        }

        page.row("", "Authorized Signatory");

        // Footer
        page.rule('=');
        page.center(&format!("Thank you for choosing {}!", shop.name));
        let contact_line = footer_contact(shop);
        if !contact_line.is_empty() {
            page.wrap_centered(&contact_line);
        }

        page.finish()
    }
}

fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.trim().to_string()
    }
}

/// Invoice amount style: `Rs 74984.00`.
fn rupees(value: rust_decimal::Decimal) -> String {
    Money::from_rupees(value).to_string()
}

fn footer_contact(shop: &ShopProfile) -> String {
    let address = shop.address.trim();
    let phone = shop.phone.trim();
    match (address.is_empty(), phone.is_empty()) {
        (true, true) => String::new(),
        (false, true) => address.to_string(),
        (true, false) => format!("tel.: {}", phone),
        (false, false) => format!("{} | tel.: {}", address, phone),
    }
}

// =============================================================================
// Page Builder
// =============================================================================

/// Accumulates fixed-width lines.
#[derive(Default)]
struct Page {
    out: String,
}

impl Page {
    fn line(&mut self, line: &str) {
        self.out.push_str(line.trim_end());
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn rule(&mut self, ch: char) {
        let rule: String = std::iter::repeat(ch).take(PAGE_WIDTH).collect();
        self.line(&rule);
    }

    fn text(&mut self, text: &str) {
        self.line(text);
    }

    /// Label on the left, value flush right, at least one space between.
    fn row(&mut self, label: &str, value: &str) {
        let used = label.chars().count() + value.chars().count();
        let gap = PAGE_WIDTH.saturating_sub(used).max(1);
        self.line(&format!("{}{}{}", label, " ".repeat(gap), value));
    }

    fn center(&mut self, text: &str) {
        let len = text.chars().count();
        let pad = PAGE_WIDTH.saturating_sub(len) / 2;
        self.line(&format!("{}{}", " ".repeat(pad), text));
    }

    fn wrap(&mut self, text: &str) {
        for line in wrap_words(text, PAGE_WIDTH) {
            self.line(&line);
        }
    }

    fn wrap_centered(&mut self, text: &str) {
        for line in wrap_words(text, PAGE_WIDTH) {
            self.center(&line);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Greedy word wrap. A single word longer than `width` gets its own line.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// =============================================================================
// Unit Tests
// =============================================================================
