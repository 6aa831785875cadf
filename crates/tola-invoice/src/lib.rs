//! # tola-invoice: Presentation for Tola
//!
//! Everything between a computed [`CalculationResult`](tola_core::CalculationResult)
//! and what the customer reads: the on-screen summary, the count-up of the
//! final price, and the printable invoice.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   CalculationResult ──┬──► summary::CalculationSummary ──► screen       │
//! │                       │          (format::format_rupees)                │
//! │                       │                                                 │
//! │                       ├──► count_up::CountUp ──► animated final price   │
//! │                       │                                                 │
//! │   InvoiceRequest ─────┴──► invoice::Invoice::build                      │
//! │   ShopProfile               │                                           │
//! │   id, issued_at             ├──► render_text() ──► printable page       │
//! │                             └──► to_json()     ──► JSON record          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`format`] - Indian digit grouping, rupee and weight formats
//! - [`words`] - Amount in words
//! - [`summary`] - On-screen breakdown lines
//! - [`count_up`] - Final price animation frames
//! - [`invoice`] - Invoice document and text layout
//!
//! Like `tola-core`, this crate does no I/O.

pub mod count_up;
pub mod format;
pub mod invoice;
pub mod summary;
pub mod words;

pub use count_up::CountUp;
pub use format::{format_indian, format_rupees, format_weight};
pub use invoice::{BankDetails, Customer, Invoice, InvoiceRequest, ShopProfile};
pub use summary::{final_price_line, CalculationSummary, SummaryLine};
pub use words::{amount_in_words, invoice_words};
