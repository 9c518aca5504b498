use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::LedgerInput;

/// Who owes (or is owed) the monthly amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObligorKind {
    /// Pays a monthly fee
    Student,
    /// Receives a monthly salary
    Teacher,
}

impl ObligorKind {
    /// CSV file holding obligors of this kind
    pub fn roster_file(&self) -> &'static str {
        match self {
            ObligorKind::Student => "students.csv",
            ObligorKind::Teacher => "teachers.csv",
        }
    }

    /// CSV file holding payments for obligors of this kind
    pub fn payments_file(&self) -> &'static str {
        match self {
            ObligorKind::Student => "student_payments.csv",
            ObligorKind::Teacher => "teacher_payments.csv",
        }
    }

    /// Label for the recurring amount
    pub fn amount_label(&self) -> &'static str {
        match self {
            ObligorKind::Student => "Monthly Fee",
            ObligorKind::Teacher => "Monthly Salary",
        }
    }
}

impl fmt::Display for ObligorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObligorKind::Student => write!(f, "student"),
            ObligorKind::Teacher => write!(f, "teacher"),
        }
    }
}

/// A student or teacher with a recurring monthly amount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Obligor {
    pub id: u32,
    pub kind: ObligorKind,
    pub name: String,
    /// Class name; only students belong to a class
    pub class_name: Option<String>,
    /// Monthly fee (students) or salary (teachers)
    pub monthly_amount: Decimal,
    /// Enrollment or hire date, the anchor for period counting
    pub date_added: NaiveDate,
}

impl Obligor {
    /// Ledger snapshot with no payments applied yet
    pub fn ledger_input(&self) -> LedgerInput {
        LedgerInput {
            id: self.id,
            kind: self.kind,
            name: self.name.clone(),
            group: self.class_name.clone(),
            obligation: self.monthly_amount,
            anchor_date: self.date_added,
            cumulative_paid: Decimal::ZERO,
            last_payment: None,
        }
    }
}

/// A recorded payment. Never edited after entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub id: u32,
    pub obligor_id: u32,
    pub amount: Decimal,
    /// Payment method; recorded for student payments only
    pub method: Option<String>,
    pub payment_date: NaiveDate,
    /// Free-text period label such as "March 2024"; not used in arrears math
    pub month_year: String,
}
