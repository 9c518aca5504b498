use std::fmt;

use rust_decimal::Decimal;

use super::format_money;
use crate::config::AcademyConfig;
use crate::ledger::Statement;
use crate::roster::ObligorKind;
use crate::summary::{AcademyTotals, DefaulterList, GroupSummary};

/// Listing of students or teachers with their ledger position
pub struct RosterTable<'a> {
    pub kind: ObligorKind,
    pub statements: &'a [Statement],
    pub config: &'a AcademyConfig,
}

impl fmt::Display for RosterTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = &self.config.currency_symbol;
        let show_class = self.kind == ObligorKind::Student;

        write!(f, "{:>4}  {:<24}", "ID", "Name")?;
        if show_class {
            write!(f, "  {:<22}", "Class")?;
        }
        writeln!(
            f,
            "  {:>16}  {:>16}  {:>16}  {:>6}  {:>8}",
            self.kind.amount_label(),
            "Total Paid",
            "Pending Amount",
            "Paid",
            "Pending"
        )?;

        for s in self.statements {
            write!(f, "{:>4}  {:<24}", s.id, s.name)?;
            if show_class {
                write!(f, "  {:<22}", s.group.as_deref().unwrap_or("-"))?;
            }
            writeln!(
                f,
                "  {:>16}  {:>16}  {:>16}  {:>6}  {:>8}",
                format_money(symbol, s.obligation),
                format_money(symbol, s.cumulative_paid),
                format_money(symbol, s.outcome.pending_amount),
                s.outcome.paid_periods,
                s.outcome.pending_periods
            )?;
        }

        if self.statements.is_empty() {
            writeln!(f, "(no {}s)", self.kind)?;
        }
        Ok(())
    }
}

/// Per-class collection summary
pub struct ClassReport<'a> {
    pub summaries: &'a [GroupSummary],
    pub config: &'a AcademyConfig,
}

impl fmt::Display for ClassReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = &self.config.currency_symbol;

        writeln!(f, "Class-wise Fee Summary")?;
        writeln!(f, "{:<24}  {:>8}  {:>16}  {:>16}", "Class", "Students", "Collected", "Pending")?;

        let mut students = 0;
        let mut collected = Decimal::ZERO;
        let mut pending = Decimal::ZERO;
        for summary in self.summaries {
            writeln!(
                f,
                "{:<24}  {:>8}  {:>16}  {:>16}",
                summary.group,
                summary.count,
                format_money(symbol, summary.total_collected),
                format_money(symbol, summary.total_pending)
            )?;
            students += summary.count;
            collected = collected.saturating_add(summary.total_collected);
            pending = pending.saturating_add(summary.total_pending);
        }

        writeln!(
            f,
            "{:<24}  {:>8}  {:>16}  {:>16}",
            "Total",
            students,
            format_money(symbol, collected),
            format_money(symbol, pending)
        )
    }
}

/// Students with unpaid months
pub struct RemindersReport<'a> {
    pub list: &'a DefaulterList,
    pub config: &'a AcademyConfig,
}

impl fmt::Display for RemindersReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = &self.config.currency_symbol;

        if self.list.defaulters.is_empty() {
            return writeln!(f, "No pending fees.");
        }

        writeln!(f, "Fee Reminders ({} students)", self.list.defaulters.len())?;
        writeln!(
            f,
            "{:<24}  {:<22}  {:>14}  {:>7}  {:>16}  {:<12}",
            "Name", "Class", "Monthly Fee", "Months", "Pending Amount", "Last Payment"
        )?;
        for d in &self.list.defaulters {
            let last_payment = d
                .last_payment
                .map(|date| date.to_string())
                .unwrap_or_else(|| "None".to_string());
            writeln!(
                f,
                "{:<24}  {:<22}  {:>14}  {:>7}  {:>16}  {:<12}",
                d.name,
                d.group.as_deref().unwrap_or("-"),
                format_money(symbol, d.obligation),
                d.pending_periods,
                format_money(symbol, d.pending_amount),
                last_payment
            )?;
        }
        writeln!(f, "Total pending: {}", format_money(symbol, self.list.total_pending))
    }
}

/// Headline counts and totals
pub struct Dashboard<'a> {
    pub totals: &'a AcademyTotals,
    pub config: &'a AcademyConfig,
}

impl fmt::Display for Dashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = &self.config.currency_symbol;

        writeln!(f, "{}", self.config.academy_name)?;
        writeln!(f, "  Students:        {}", self.totals.students)?;
        writeln!(f, "  Teachers:        {}", self.totals.teachers)?;
        writeln!(f, "  Fees collected:  {}", format_money(symbol, self.totals.total_collected))?;
        writeln!(f, "  Salaries paid:   {}", format_money(symbol, self.totals.total_salaries_paid))
    }
}
