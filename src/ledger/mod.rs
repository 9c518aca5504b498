//! Arrears ledger: period arithmetic, per-obligor evaluation and statements

pub mod period;
pub mod engine;

pub use engine::{check_amount_limit, evaluate, validate_obligation, LedgerOutcome, AMOUNT_LIMIT};
pub use period::{checked_elapsed_periods, elapsed_periods, month_label};

use chrono::NaiveDate;
use log::{debug, warn};
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::roster::ObligorKind;

/// Snapshot of everything the engine needs for one obligor.
///
/// Taken from the store at a single point; a statement computed from it is
/// only meaningful for that snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerInput {
    pub id: u32,
    pub kind: ObligorKind,
    pub name: String,
    /// Grouping key (class name for students)
    pub group: Option<String>,
    /// Monthly fee or salary
    pub obligation: Decimal,
    /// Enrollment or hire date
    pub anchor_date: NaiveDate,
    pub cumulative_paid: Decimal,
    pub last_payment: Option<NaiveDate>,
}

impl LedgerInput {
    /// Fold a payment history (any order) into the cumulative total and
    /// most recent payment date.
    pub fn with_payments<I>(mut self, payments: I) -> Self
    where
        I: IntoIterator<Item = (Decimal, NaiveDate)>,
    {
        for (amount, date) in payments {
            self.cumulative_paid = self.cumulative_paid.saturating_add(amount);
            self.last_payment = match self.last_payment {
                Some(last) if last >= date => Some(last),
                _ => Some(date),
            };
        }
        self
    }
}

/// Ledger position of one obligor at a reference date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub id: u32,
    pub kind: ObligorKind,
    pub name: String,
    pub group: Option<String>,
    pub obligation: Decimal,
    pub anchor_date: NaiveDate,
    pub elapsed_periods: i32,
    pub cumulative_paid: Decimal,
    pub last_payment: Option<NaiveDate>,
    #[serde(flatten)]
    pub outcome: LedgerOutcome,
}

impl Statement {
    /// Evaluate a snapshot as of `as_of`
    pub fn compute(input: LedgerInput, as_of: NaiveDate) -> Self {
        let elapsed = elapsed_periods(input.anchor_date, as_of);
        if elapsed < 1 {
            warn!(
                "{} #{} anchored {} after reference date {} ({} elapsed periods)",
                input.kind, input.id, input.anchor_date, as_of, elapsed
            );
        }
        let outcome = evaluate(input.obligation, elapsed, input.cumulative_paid);

        Self {
            id: input.id,
            kind: input.kind,
            name: input.name,
            group: input.group,
            obligation: input.obligation,
            anchor_date: input.anchor_date,
            elapsed_periods: elapsed,
            cumulative_paid: input.cumulative_paid,
            last_payment: input.last_payment,
            outcome,
        }
    }
}

/// Evaluate a whole roster. Output order matches input order.
pub fn evaluate_roster(inputs: Vec<LedgerInput>, as_of: NaiveDate) -> Vec<Statement> {
    let count = inputs.len();
    let statements: Vec<Statement> = inputs
        .into_par_iter()
        .map(|input| Statement::compute(input, as_of))
        .collect();
    debug!("Evaluated {} statements as of {}", count, as_of);
    statements
}
