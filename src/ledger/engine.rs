//! Arrears evaluation for a single obligor
//!
//! Payments are allocated to periods by value only: the cumulative amount
//! paid is divided by the monthly obligation to find how many whole
//! periods it covers. Which month a payment was labelled for plays no part.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::LedgerError;

/// Largest monthly amount or single payment the store accepts. Keeps
/// `amount * elapsed periods` and roster-wide sums far from overflow.
pub const AMOUNT_LIMIT: i64 = 1_000_000_000_000_000;

/// Derived ledger position of one obligor at one reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerOutcome {
    /// Monthly obligation times elapsed periods
    pub total_due: Decimal,
    /// Total due minus cumulative paid; negative when overpaid
    pub pending_amount: Decimal,
    /// Whole periods covered by the cumulative payment total
    pub paid_periods: i64,
    /// Elapsed periods minus paid periods; negative when paid ahead
    pub pending_periods: i64,
}

impl LedgerOutcome {
    /// True when at least one elapsed period is not covered
    pub fn is_in_arrears(&self) -> bool {
        self.pending_periods > 0
    }

    /// True when more has been paid than is due so far
    pub fn is_overpaid(&self) -> bool {
        self.pending_amount.is_sign_negative() && !self.pending_amount.is_zero()
    }
}

/// Evaluate an obligor's position.
///
/// A zero obligation never covers any period, so `paid_periods` is 0 and
/// every elapsed period counts as pending even though nothing is owed.
///
/// Never panics: amounts beyond the `Decimal` range saturate.
pub fn evaluate(obligation: Decimal, elapsed_periods: i32, cumulative_paid: Decimal) -> LedgerOutcome {
    let total_due = obligation.saturating_mul(Decimal::from(elapsed_periods));
    let pending_amount = total_due.saturating_sub(cumulative_paid);
    let paid_periods = covered_periods(obligation, cumulative_paid);
    let pending_periods = i64::from(elapsed_periods).saturating_sub(paid_periods);

    LedgerOutcome {
        total_due,
        pending_amount,
        paid_periods,
        pending_periods,
    }
}

/// Reject a negative monthly amount or one above [`AMOUNT_LIMIT`]. Zero is
/// accepted.
pub fn validate_obligation(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(LedgerError::InvalidObligation(amount));
    }
    check_amount_limit(amount)
}

/// Reject an amount above [`AMOUNT_LIMIT`]
pub fn check_amount_limit(amount: Decimal) -> Result<Decimal, LedgerError> {
    let limit = Decimal::from(AMOUNT_LIMIT);
    if amount > limit {
        return Err(LedgerError::AmountTooLarge { amount, limit });
    }
    Ok(amount)
}

fn covered_periods(obligation: Decimal, cumulative_paid: Decimal) -> i64 {
    if obligation <= Decimal::ZERO {
        return 0;
    }
    match cumulative_paid.checked_div(obligation) {
        Some(ratio) => ratio.floor().to_i64().unwrap_or(if ratio.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        }),
        // Only reachable with an absurdly small obligation
        None => i64::MAX,
    }
}
