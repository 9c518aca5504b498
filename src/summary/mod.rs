//! Roll-ups over per-obligor statements: class summaries, defaulter lists
//! and academy-wide totals

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::Statement;

/// Collection totals for one group of obligors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub group: String,
    pub count: usize,
    /// Sum of cumulative payments
    pub total_collected: Decimal,
    /// Sum of signed pending amounts (overpayments reduce it)
    pub total_pending: Decimal,
}

/// Summarize statements per group, in the order given by `group_order`.
///
/// Groups with no members are left out. Statements whose key is missing or
/// not listed in `group_order` are not counted anywhere.
pub fn summarize_by_group<F>(statements: &[Statement], group_order: &[String], group_key: F) -> Vec<GroupSummary>
where
    F: Fn(&Statement) -> Option<&str>,
{
    let mut totals: HashMap<&str, (usize, Decimal, Decimal)> = HashMap::new();
    for statement in statements {
        let Some(key) = group_key(statement) else {
            continue;
        };
        let entry = totals.entry(key).or_insert((0, Decimal::ZERO, Decimal::ZERO));
        entry.0 += 1;
        entry.1 = entry.1.saturating_add(statement.cumulative_paid);
        entry.2 = entry.2.saturating_add(statement.outcome.pending_amount);
    }

    group_order
        .iter()
        .filter_map(|group| {
            totals.get(group.as_str()).map(|&(count, collected, pending)| GroupSummary {
                group: group.clone(),
                count,
                total_collected: collected,
                total_pending: pending,
            })
        })
        .collect()
}

/// Class report for students: groups by class name
pub fn summarize_by_class(statements: &[Statement], class_order: &[String]) -> Vec<GroupSummary> {
    summarize_by_group(statements, class_order, |s| s.group.as_deref())
}

/// One obligor behind on payments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Defaulter {
    pub id: u32,
    pub name: String,
    pub group: Option<String>,
    pub obligation: Decimal,
    pub pending_periods: i64,
    pub pending_amount: Decimal,
    /// None when no payment was ever recorded
    pub last_payment: Option<NaiveDate>,
}

/// Defaulters in listing order plus their combined arrears
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefaulterList {
    pub defaulters: Vec<Defaulter>,
    pub total_pending: Decimal,
}

/// Obligors with at least one uncovered period, in the order given.
///
/// Order is not by severity; callers pass statements in the listing order
/// they want to show.
pub fn list_defaulters(statements: &[Statement]) -> DefaulterList {
    let defaulters: Vec<Defaulter> = statements
        .iter()
        .filter(|s| s.outcome.is_in_arrears())
        .map(|s| Defaulter {
            id: s.id,
            name: s.name.clone(),
            group: s.group.clone(),
            obligation: s.obligation,
            pending_periods: s.outcome.pending_periods,
            pending_amount: s.outcome.pending_amount,
            last_payment: s.last_payment,
        })
        .collect();
    let total_pending = sum_amounts(defaulters.iter().map(|d| d.pending_amount));

    DefaulterList {
        defaulters,
        total_pending,
    }
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcademyTotals {
    pub students: usize,
    pub teachers: usize,
    pub total_collected: Decimal,
    pub total_salaries_paid: Decimal,
}

impl AcademyTotals {
    pub fn from_statements(students: &[Statement], teachers: &[Statement]) -> Self {
        Self {
            students: students.len(),
            teachers: teachers.len(),
            total_collected: sum_amounts(students.iter().map(|s| s.cumulative_paid)),
            total_salaries_paid: sum_amounts(teachers.iter().map(|t| t.cumulative_paid)),
        }
    }
}

fn sum_amounts<I: Iterator<Item = Decimal>>(amounts: I) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}
