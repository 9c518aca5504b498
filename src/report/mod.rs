//! Plain-text rendering of ledger results
//!
//! Every view borrows what it shows and implements `Display`, so callers
//! can print it, write it to a file, or collect it into a string.

mod receipt;
mod tables;

pub use receipt::{invoice_number, Receipt};
pub use tables::{ClassReport, Dashboard, RemindersReport, RosterTable};

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with two decimals behind the currency symbol
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{} {:.2}", symbol, rounded)
}

/// Date as shown on receipts, e.g. 05-Mar-2024
pub fn format_receipt_date(date: NaiveDate) -> String {
    date.format("%d-%b-%Y").to_string()
}
