//! Fee and salary receipts

use std::fmt;

use chrono::NaiveDate;

use super::{format_money, format_receipt_date};
use crate::config::AcademyConfig;
use crate::ledger::Statement;
use crate::roster::{Obligor, ObligorKind, Payment};

const RULE: &str = "----------------------------------------------------------------------";

/// Receipt number: `{prefix}-{year}-{NNN}` for fees and
/// `{prefix}-{year}-T{NNN}` for salaries, where NNN follows the number of
/// payments of that kind recorded so far.
pub fn invoice_number(prefix: &str, kind: ObligorKind, year: i32, payment_count: usize) -> String {
    let marker = match kind {
        ObligorKind::Student => "",
        ObligorKind::Teacher => "T",
    };
    format!("{}-{}-{}{:03}", prefix, year, marker, payment_count + 1)
}

/// Printable receipt with payment history and current ledger position
pub struct Receipt<'a> {
    pub obligor: &'a Obligor,
    /// Newest first
    pub payments: &'a [&'a Payment],
    pub statement: &'a Statement,
    pub invoice_number: String,
    pub issued: NaiveDate,
    pub config: &'a AcademyConfig,
}

impl Receipt<'_> {
    /// Suggested file name, e.g. `receipt_Ayesha_Khan_PSA-2024-004.txt`.
    /// Anything but ASCII letters, digits, `-` and `_` becomes `_`, so the
    /// name never points into another directory.
    pub fn file_name(&self) -> String {
        let stem = match self.obligor.kind {
            ObligorKind::Student => "receipt",
            ObligorKind::Teacher => "salary_receipt",
        };
        format!(
            "{}_{}_{}.txt",
            stem,
            file_safe(&self.obligor.name),
            file_safe(&self.invoice_number)
        )
    }
}

fn file_safe(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        let symbol = &config.currency_symbol;
        let obligor = self.obligor;
        let outcome = &self.statement.outcome;

        let (title, number_label, details, notes, closing) = match obligor.kind {
            ObligorKind::Student => (
                "FEE RECEIPT",
                "Invoice #",
                "Student Details:",
                "All payments are non-refundable.",
                format!("Thank you for choosing {}", config.academy_name),
            ),
            ObligorKind::Teacher => (
                "SALARY RECEIPT",
                "Receipt #",
                "Teacher Details:",
                "Received by teacher in full and final settlement.",
                format!("{} - Excellence in Education", config.academy_name),
            ),
        };

        writeln!(f, "{}", config.academy_name)?;
        writeln!(f, "{}", config.address)?;
        writeln!(f, "{}", config.phone)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "{:<40}{}: {}", title, number_label, self.invoice_number)?;
        writeln!(f, "{:<40}Date: {}", "", format_receipt_date(self.issued))?;
        writeln!(f)?;

        writeln!(f, "{}", details)?;
        writeln!(f, "  Name: {}", obligor.name)?;
        if let Some(class_name) = &obligor.class_name {
            writeln!(f, "  Class: {}", class_name)?;
        }
        writeln!(f, "  {}: {}", obligor.kind.amount_label(), format_money(symbol, obligor.monthly_amount))?;
        writeln!(f)?;

        writeln!(f, "Payment Summary:")?;
        writeln!(f, "  Total Paid to Date: {}", format_money(symbol, self.statement.cumulative_paid))?;
        writeln!(
            f,
            "  Months Due: {}   Months Paid: {}   Months Pending: {}",
            self.statement.elapsed_periods, outcome.paid_periods, outcome.pending_periods
        )?;
        writeln!(f, "  Pending Amount: {}", format_money(symbol, outcome.pending_amount))?;
        writeln!(f)?;

        writeln!(f, "Payment History:")?;
        match obligor.kind {
            ObligorKind::Student => {
                writeln!(f, "  {:<12}{:>16}  {:<14}{}", "Date", "Amount", "Method", "For Month")?
            }
            ObligorKind::Teacher => writeln!(f, "  {:<12}{:>16}  {}", "Date", "Amount", "For Month")?,
        }
        if self.payments.is_empty() {
            writeln!(f, "  No payments recorded")?;
        }
        for payment in self.payments {
            let amount = format_money(symbol, payment.amount);
            match obligor.kind {
                ObligorKind::Student => writeln!(
                    f,
                    "  {:<12}{:>16}  {:<14}{}",
                    payment.payment_date.to_string(),
                    amount,
                    payment.method.as_deref().unwrap_or("-"),
                    payment.month_year
                )?,
                ObligorKind::Teacher => writeln!(
                    f,
                    "  {:<12}{:>16}  {}",
                    payment.payment_date.to_string(),
                    amount,
                    payment.month_year
                )?,
            }
        }

        writeln!(f, "{}", RULE)?;
        writeln!(f, "  * This is a computer-generated receipt and does not require a signature.")?;
        writeln!(f, "  * {}", notes)?;
        writeln!(f, "  * For any queries, please contact us at the above phone numbers.")?;
        writeln!(f, "{:^70}", closing)
    }
}
