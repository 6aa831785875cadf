//! # Amount in Words
//!
//! Spells out the rounded final price for the invoice, in the short-scale
//! (international) system customers see on printed bills:
//!
//! ```text
//! 74984   →  "seventy-four thousand, nine hundred eighty-four"
//! 1000100 →  "one million, one hundred"
//! ```
//!
//! Scale words are followed by a comma, tens are hyphenated, and there is
//! no "and".

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const SMALL: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "zero", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;
const BILLION: u64 = 1_000_000_000;
const TRILLION: u64 = 1_000_000_000_000;
const QUADRILLION: u64 = 1_000_000_000_000_000;

/// Suffix printed after the words on an invoice.
pub const RUPEES_ONLY: &str = "RUPEES ONLY";

/// Spells out a whole number in lower case.
///
/// ## Example
/// ```rust
/// use tola_invoice::words::amount_in_words;
///
/// assert_eq!(amount_in_words(0), "zero");
/// assert_eq!(amount_in_words(74984), "seventy-four thousand, nine hundred eighty-four");
/// ```
pub fn amount_in_words(number: u64) -> String {
    if number == 0 {
        return SMALL[0].to_string();
    }

    let mut words = Vec::new();
    let mut rest = number;
    while rest > 0 {
        let (word, remainder) = next_word(rest);
        words.push(word);
        rest = remainder;
    }

    let joined = words.join(" ");
    match joined.strip_suffix(',') {
        Some(trimmed) => trimmed.to_string(),
        None => joined,
    }
}

/// Largest leading chunk of `number` in words, and what is left to spell.
fn next_word(number: u64) -> (String, u64) {
    match number {
        0..=19 => (SMALL[number as usize].to_string(), 0),
        20..=99 => {
            let tens = TENS[(number / 10) as usize];
            match number % 10 {
                0 => (tens.to_string(), 0),
                unit => (format!("{}-{}", tens, SMALL[unit as usize]), 0),
            }
        }
        100..=999 => (
            format!("{} hundred", amount_in_words(number / 100)),
            number % 100,
        ),
        _ => {
            let (scale, name) = scale_of(number);
            (
                format!("{} {},", amount_in_words(number / scale), name),
                number % scale,
            )
        }
    }
}

fn scale_of(number: u64) -> (u64, &'static str) {
    if number < MILLION {
        (THOUSAND, "thousand")
    } else if number < BILLION {
        (MILLION, "million")
    } else if number < TRILLION {
        (BILLION, "billion")
    } else if number < QUADRILLION {
        (TRILLION, "trillion")
    } else {
        (QUADRILLION, "quadrillion")
    }
}

/// The invoice line: rounded final price in upper-case words.
///
/// Rounds to whole rupees half away from zero. A value that does not fit a
/// whole non-negative rupee count prints as `ZERO RUPEES ONLY`.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use tola_invoice::words::invoice_words;
///
/// assert_eq!(
///     invoice_words(Decimal::from(34505)),
///     "THIRTY-FOUR THOUSAND, FIVE HUNDRED FIVE RUPEES ONLY"
/// );
/// ```
pub fn invoice_words(amount: Decimal) -> String {
    let rupees = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0);

    format!("{} {}", amount_in_words(rupees).to_uppercase(), RUPEES_ONLY)
}

// =============================================================================
// Unit Tests
// =============================================================================
