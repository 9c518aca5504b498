//! Calendar-month period arithmetic

use chrono::{Datelike, NaiveDate};

use crate::error::LedgerError;

/// Number of calendar months that have begun since `anchor`, counting the
/// anchor's own month as period 1.
///
/// Day-of-month is ignored: an anchor on the 31st behaves exactly like one
/// on the 1st of the same month. A `reference` before `anchor` yields zero
/// or a negative count, returned unchanged.
pub fn elapsed_periods(anchor: NaiveDate, reference: NaiveDate) -> i32 {
    let years = reference.year() - anchor.year();
    let months = reference.month() as i32 - anchor.month() as i32;
    years * 12 + months + 1
}

/// Like [`elapsed_periods`], but rejects a reference date that falls in a
/// month before the anchor's.
pub fn checked_elapsed_periods(anchor: NaiveDate, reference: NaiveDate) -> Result<u32, LedgerError> {
    let periods = elapsed_periods(anchor, reference);
    if periods < 1 {
        return Err(LedgerError::NonPositiveElapsedPeriods {
            anchor,
            reference,
            periods,
        });
    }
    Ok(periods as u32)
}

/// Default payment label for the month containing `date`, e.g. "March 2024"
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
