//! Error types for the ledger core, the CSV store and configuration loading

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::roster::ObligorKind;

/// Conditions the ledger core can detect in its inputs.
///
/// The engine itself never returns these; they are raised by callers that
/// choose to reject such inputs before evaluating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("monthly amount must not be negative (got {0})")]
    InvalidObligation(Decimal),

    #[error("amount {amount} exceeds the limit of {limit}")]
    AmountTooLarge { amount: Decimal, limit: Decimal },

    #[error("reference date {reference} precedes anchor date {anchor} ({periods} elapsed periods)")]
    NonPositiveElapsedPeriods {
        anchor: NaiveDate,
        reference: NaiveDate,
        periods: i32,
    },
}

/// Failures of the CSV-backed store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{kind} #{id} not found")]
    NotFound { kind: ObligorKind, id: u32 },

    #[error("payment amount must be positive (got {0})")]
    InvalidPaymentAmount(Decimal),

    #[error("name must not be empty")]
    EmptyName,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Failures while loading an academy configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
