//! Students, teachers and their payment records

mod data;
pub mod loader;

pub use data::{Obligor, ObligorKind, Payment};
pub use loader::{load_obligors_from_reader, load_payments_from_reader, write_obligors, write_payments};
