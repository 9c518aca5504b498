//! Fee and salary arrears ledger for a small academy
//!
//! Students pay a monthly fee and teachers draw a monthly salary. Given the
//! date someone joined, their monthly amount and what has been paid so far,
//! the ledger works out how many months have elapsed, how many are covered,
//! and how much is outstanding.
//!
//! Layers, in data-flow order:
//! - [`store`] / [`roster`]: CSV persistence of obligors and payments
//! - [`ledger`]: period arithmetic and per-obligor evaluation
//! - [`summary`]: class summaries, defaulter lists, dashboard totals
//! - [`report`]: plain-text tables and receipts

pub mod config;
pub mod error;
pub mod ledger;
pub mod report;
pub mod roster;
pub mod store;
pub mod summary;

pub use config::AcademyConfig;
pub use error::{ConfigError, LedgerError, StoreError};
pub use ledger::{evaluate, evaluate_roster, LedgerInput, LedgerOutcome, Statement};
pub use roster::{Obligor, ObligorKind, Payment};
pub use store::Store;
pub use summary::{list_defaulters, summarize_by_group, AcademyTotals, DefaulterList, GroupSummary};
