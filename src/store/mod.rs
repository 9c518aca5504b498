//! CSV-backed store for obligors and payments
//!
//! The whole data directory is loaded into memory on open and rewritten on
//! [`Store::save`]. Each file is written to a temporary sibling and renamed
//! into place so a crash mid-save leaves the previous file intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, info, warn};
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::ledger::{check_amount_limit, checked_elapsed_periods, validate_obligation, LedgerInput};
use crate::roster::{
    load_obligors_from_reader, load_payments_from_reader, write_obligors, write_payments, Obligor,
    ObligorKind, Payment,
};

/// Fields for registering a student or teacher
#[derive(Debug, Clone)]
pub struct NewObligor {
    pub kind: ObligorKind,
    pub name: String,
    /// Required for students, ignored for teachers
    pub class_name: Option<String>,
    pub monthly_amount: Decimal,
    pub date_added: NaiveDate,
}

/// Editable fields of an existing obligor. The anchor date never changes.
#[derive(Debug, Clone)]
pub struct ObligorUpdate {
    pub name: String,
    pub class_name: Option<String>,
    pub monthly_amount: Decimal,
}

/// Fields for recording a payment
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub obligor_id: u32,
    pub amount: Decimal,
    pub method: Option<String>,
    pub payment_date: NaiveDate,
    pub month_year: String,
}

#[derive(Debug, Default)]
struct Table {
    obligors: Vec<Obligor>,
    payments: Vec<Payment>,
}

/// In-memory copy of the data directory
#[derive(Debug)]
pub struct Store {
    dir: PathBuf,
    students: Table,
    teachers: Table,
}

impl Store {
    /// Load every table from `dir`. Missing files are treated as empty;
    /// negative fees and amounts above `AMOUNT_LIMIT` are rejected.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        let students = load_table(&dir, ObligorKind::Student)?;
        let teachers = load_table(&dir, ObligorKind::Teacher)?;

        debug!(
            "Opened store at {}: {} students, {} teachers",
            dir.display(),
            students.obligors.len(),
            teachers.obligors.len()
        );

        Ok(Self { dir, students, teachers })
    }

    /// Directory the store reads from and saves to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write every table back to disk.
    ///
    /// Each file is replaced atomically, but the four files are replaced one
    /// after another: a failure partway through can leave a roster and its
    /// payments file from different saves.
    pub fn save(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.display().to_string(),
            source,
        })?;

        for kind in [ObligorKind::Student, ObligorKind::Teacher] {
            let table = self.table(kind);
            write_atomically(&self.dir.join(kind.roster_file()), |w| {
                write_obligors(w, kind, &table.obligors)
            })?;
            write_atomically(&self.dir.join(kind.payments_file()), |w| {
                write_payments(w, kind, &table.payments)
            })?;
        }

        debug!("Saved store to {}", self.dir.display());
        Ok(())
    }

    /// All obligors of `kind`, ordered by name
    pub fn obligors(&self, kind: ObligorKind) -> Vec<&Obligor> {
        let mut obligors: Vec<&Obligor> = self.table(kind).obligors.iter().collect();
        obligors.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        obligors
    }

    /// Students in `class_name`, ordered by name
    pub fn students_in_class(&self, class_name: &str) -> Vec<&Obligor> {
        self.obligors(ObligorKind::Student)
            .into_iter()
            .filter(|s| s.class_name.as_deref() == Some(class_name))
            .collect()
    }

    pub fn obligor(&self, kind: ObligorKind, id: u32) -> Result<&Obligor, StoreError> {
        self.table(kind)
            .obligors
            .iter()
            .find(|o| o.id == id)
            .ok_or(StoreError::NotFound { kind, id })
    }

    /// Register a new obligor and return its id.
    ///
    /// Rejects an empty name, a negative monthly amount, and a start date in
    /// a month after `as_of`.
    pub fn add_obligor(&mut self, new: NewObligor, as_of: NaiveDate) -> Result<u32, StoreError> {
        let name = clean_name(&new.name)?;
        let monthly_amount = validate_obligation(new.monthly_amount)?;
        checked_elapsed_periods(new.date_added, as_of)?;

        let kind = new.kind;
        let table = self.table_mut(kind);
        let id = table.obligors.iter().map(|o| o.id).max().unwrap_or(0) + 1;
        table.obligors.push(Obligor {
            id,
            kind,
            name,
            class_name: class_for(kind, new.class_name),
            monthly_amount,
            date_added: new.date_added,
        });

        info!("Added {} #{}", kind, id);
        Ok(id)
    }

    /// Change name, class or monthly amount of an obligor
    pub fn edit_obligor(&mut self, kind: ObligorKind, id: u32, update: ObligorUpdate) -> Result<(), StoreError> {
        let name = clean_name(&update.name)?;
        let monthly_amount = validate_obligation(update.monthly_amount)?;

        let obligor = self
            .table_mut(kind)
            .obligors
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(StoreError::NotFound { kind, id })?;
        obligor.name = name;
        obligor.class_name = class_for(kind, update.class_name);
        obligor.monthly_amount = monthly_amount;

        info!("Updated {} #{}", kind, id);
        Ok(())
    }

    /// Remove an obligor and its payment history. Returns the number of
    /// payments removed with it.
    pub fn delete_obligor(&mut self, kind: ObligorKind, id: u32) -> Result<usize, StoreError> {
        let table = self.table_mut(kind);
        let before = table.obligors.len();
        table.obligors.retain(|o| o.id != id);
        if table.obligors.len() == before {
            return Err(StoreError::NotFound { kind, id });
        }

        let payments_before = table.payments.len();
        table.payments.retain(|p| p.obligor_id != id);
        let removed = payments_before - table.payments.len();

        info!("Deleted {} #{} with {} payments", kind, id, removed);
        Ok(removed)
    }

    /// Record a payment against an existing obligor and return its id.
    /// The amount must be positive and at most `AMOUNT_LIMIT`.
    pub fn record_payment(&mut self, kind: ObligorKind, new: NewPayment) -> Result<u32, StoreError> {
        if new.amount <= Decimal::ZERO {
            return Err(StoreError::InvalidPaymentAmount(new.amount));
        }
        check_amount_limit(new.amount)?;
        self.obligor(kind, new.obligor_id)?;

        let table = self.table_mut(kind);
        let id = table.payments.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let method = match kind {
            ObligorKind::Student => Some(new.method.unwrap_or_else(|| "Cash".to_string())),
            ObligorKind::Teacher => None,
        };
        table.payments.push(Payment {
            id,
            obligor_id: new.obligor_id,
            amount: new.amount,
            method,
            payment_date: new.payment_date,
            month_year: new.month_year,
        });

        info!("Recorded payment #{} of {} for {} #{}", id, new.amount, kind, new.obligor_id);
        Ok(id)
    }

    /// Payment history of one obligor, newest first
    pub fn payments_for(&self, kind: ObligorKind, id: u32) -> Vec<&Payment> {
        let mut payments: Vec<&Payment> = self
            .table(kind)
            .payments
            .iter()
            .filter(|p| p.obligor_id == id)
            .collect();
        payments.sort_by(|a, b| b.payment_date.cmp(&a.payment_date).then(b.id.cmp(&a.id)));
        payments
    }

    /// Number of payments recorded across all obligors of `kind`
    pub fn payment_count(&self, kind: ObligorKind) -> usize {
        self.table(kind).payments.len()
    }

    /// Sum of all payments across obligors of `kind`
    pub fn total_paid(&self, kind: ObligorKind) -> Decimal {
        self.table(kind).payments.iter().map(|p| p.amount).sum()
    }

    /// Ledger snapshot of one obligor
    pub fn ledger_input(&self, kind: ObligorKind, id: u32) -> Result<LedgerInput, StoreError> {
        let obligor = self.obligor(kind, id)?;
        Ok(self.snapshot(obligor))
    }

    /// Ledger snapshots of every obligor of `kind` (optionally restricted
    /// to one class), ordered by name
    pub fn ledger_inputs(&self, kind: ObligorKind, class_name: Option<&str>) -> Vec<LedgerInput> {
        let obligors = match class_name {
            Some(class) if kind == ObligorKind::Student => self.students_in_class(class),
            _ => self.obligors(kind),
        };
        obligors.into_iter().map(|o| self.snapshot(o)).collect()
    }

    fn snapshot(&self, obligor: &Obligor) -> LedgerInput {
        let payments = self
            .table(obligor.kind)
            .payments
            .iter()
            .filter(|p| p.obligor_id == obligor.id)
            .map(|p| (p.amount, p.payment_date));
        obligor.ledger_input().with_payments(payments)
    }

    fn table(&self, kind: ObligorKind) -> &Table {
        match kind {
            ObligorKind::Student => &self.students,
            ObligorKind::Teacher => &self.teachers,
        }
    }

    fn table_mut(&mut self, kind: ObligorKind) -> &mut Table {
        match kind {
            ObligorKind::Student => &mut self.students,
            ObligorKind::Teacher => &mut self.teachers,
        }
    }
}

fn clean_name(name: &str) -> Result<String, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::EmptyName);
    }
    Ok(name.to_string())
}

fn class_for(kind: ObligorKind, class_name: Option<String>) -> Option<String> {
    match kind {
        ObligorKind::Student => Some(class_name.map(|c| c.trim().to_string()).unwrap_or_default()),
        ObligorKind::Teacher => None,
    }
}

fn load_table(dir: &Path, kind: ObligorKind) -> Result<Table, StoreError> {
    let obligors = match open_if_exists(&dir.join(kind.roster_file()))? {
        Some((path, file)) => load_obligors_from_reader(BufReader::new(file), kind)
            .map_err(|source| StoreError::Csv { path, source })?,
        None => Vec::new(),
    };
    let payments = match open_if_exists(&dir.join(kind.payments_file()))? {
        Some((path, file)) => load_payments_from_reader(BufReader::new(file), kind)
            .map_err(|source| StoreError::Csv { path, source })?,
        None => Vec::new(),
    };
    for obligor in &obligors {
        validate_obligation(obligor.monthly_amount)?;
    }
    for payment in &payments {
        check_amount_limit(payment.amount)?;
    }
    Ok(Table { obligors, payments })
}

fn open_if_exists(path: &Path) -> Result<Option<(String, File)>, StoreError> {
    match File::open(path) {
        Ok(file) => Ok(Some((path.display().to_string(), file))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StoreError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Write `path` through a sibling `.csv.tmp` file renamed into place. On
/// failure the temp file is removed and `path` is left as it was.
fn write_atomically<F>(path: &Path, write: F) -> Result<(), StoreError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), csv::Error>,
{
    let tmp = path.with_extension("csv.tmp");
    let result = write_and_rename(&tmp, path, write);
    if result.is_err() {
        if let Err(e) = fs::remove_file(&tmp) {
            if e.kind() != ErrorKind::NotFound {
                warn!("Could not remove {}: {}", tmp.display(), e);
            }
        }
    }
    result
}

fn write_and_rename<F>(tmp: &Path, path: &Path, write: F) -> Result<(), StoreError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), csv::Error>,
{
    let display = path.display().to_string();
    let io_err = |source| StoreError::Io {
        path: display.clone(),
        source,
    };

    let file = File::create(tmp).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(|source| StoreError::Csv {
        path: display.clone(),
        source,
    })?;
    writer.flush().map_err(io_err)?;
    drop(writer);
    fs::rename(tmp, path).map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn student(name: &str, class: &str, fee: Decimal) -> NewObligor {
        NewObligor {
            kind: ObligorKind::Student,
            name: name.to_string(),
            class_name: Some(class.to_string()),
            monthly_amount: fee,
            date_added: date(2024, 1, 15),
        }
    }

    fn payment(obligor_id: u32, amount: Decimal, day: NaiveDate) -> NewPayment {
        NewPayment {
            obligor_id,
            amount,
            method: None,
            payment_date: day,
            month_year: "January 2024".to_string(),
        }
    }

    fn empty_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_empty_directory() {
        let (_dir, store) = empty_store();
        assert!(store.obligors(ObligorKind::Student).is_empty());
        assert!(store.obligors(ObligorKind::Teacher).is_empty());
        assert_eq!(store.payment_count(ObligorKind::Student), 0);
    }

    #[test]
    fn test_add_assigns_sequential_ids_and_sorts_by_name() {
        let (_dir, mut store) = empty_store();
        let as_of = date(2024, 3, 1);

        let zara = store.add_obligor(student("Zara", "9th Grade", dec!(1000)), as_of).unwrap();
        let ali = store.add_obligor(student("  Ali  ", "5th Grade", dec!(800)), as_of).unwrap();

        assert_eq!((zara, ali), (1, 2));
        let names: Vec<&str> = store
            .obligors(ObligorKind::Student)
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ali", "Zara"]);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (_dir, mut store) = empty_store();
        let as_of = date(2024, 3, 1);

        let err = store.add_obligor(student("", "9th Grade", dec!(1000)), as_of).unwrap_err();
        assert!(matches!(err, StoreError::EmptyName));

        let err = store.add_obligor(student("Ali", "9th Grade", dec!(-5)), as_of).unwrap_err();
        assert!(matches!(err, StoreError::Ledger(LedgerError::InvalidObligation(_))));

        let mut future = student("Ali", "9th Grade", dec!(1000));
        future.date_added = date(2024, 4, 1);
        let err = store.add_obligor(future, as_of).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Ledger(LedgerError::NonPositiveElapsedPeriods { .. })
        ));
    }

    #[test]
    fn test_zero_fee_is_accepted() {
        let (_dir, mut store) = empty_store();
        let id = store
            .add_obligor(student("Scholar", "10th Grade", Decimal::ZERO), date(2024, 3, 1))
            .unwrap();
        assert_eq!(store.obligor(ObligorKind::Student, id).unwrap().monthly_amount, Decimal::ZERO);
    }

    #[test]
    fn test_teacher_has_no_class_or_method() {
        let (_dir, mut store) = empty_store();
        let id = store
            .add_obligor(
                NewObligor {
                    kind: ObligorKind::Teacher,
                    name: "Usman Mustafa".to_string(),
                    class_name: Some("ignored".to_string()),
                    monthly_amount: dec!(30000),
                    date_added: date(2024, 1, 1),
                },
                date(2024, 3, 1),
            )
            .unwrap();
        store
            .record_payment(ObligorKind::Teacher, payment(id, dec!(30000), date(2024, 2, 1)))
            .unwrap();

        assert_eq!(store.obligor(ObligorKind::Teacher, id).unwrap().class_name, None);
        assert_eq!(store.payments_for(ObligorKind::Teacher, id)[0].method, None);
    }

    #[test]
    fn test_edit_keeps_anchor_date() {
        let (_dir, mut store) = empty_store();
        let id = store.add_obligor(student("Ali", "5th Grade", dec!(800)), date(2024, 3, 1)).unwrap();

        store
            .edit_obligor(
                ObligorKind::Student,
                id,
                ObligorUpdate {
                    name: "Ali Raza".to_string(),
                    class_name: Some("6th Grade".to_string()),
                    monthly_amount: dec!(900),
                },
            )
            .unwrap();

        let ali = store.obligor(ObligorKind::Student, id).unwrap();
        assert_eq!(ali.name, "Ali Raza");
        assert_eq!(ali.class_name.as_deref(), Some("6th Grade"));
        assert_eq!(ali.monthly_amount, dec!(900));
        assert_eq!(ali.date_added, date(2024, 1, 15));
    }

    #[test]
    fn test_edit_unknown_obligor() {
        let (_dir, mut store) = empty_store();
        let err = store
            .edit_obligor(
                ObligorKind::Teacher,
                9,
                ObligorUpdate {
                    name: "Nobody".to_string(),
                    class_name: None,
                    monthly_amount: dec!(1),
                },
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { kind: ObligorKind::Teacher, id: 9 }));
    }

    #[test]
    fn test_delete_cascades_payments() {
        let (_dir, mut store) = empty_store();
        let as_of = date(2024, 3, 1);
        let ali = store.add_obligor(student("Ali", "5th Grade", dec!(800)), as_of).unwrap();
        let zara = store.add_obligor(student("Zara", "5th Grade", dec!(800)), as_of).unwrap();
        for day in [date(2024, 1, 20), date(2024, 2, 20)] {
            store.record_payment(ObligorKind::Student, payment(ali, dec!(800), day)).unwrap();
        }
        store
            .record_payment(ObligorKind::Student, payment(zara, dec!(800), date(2024, 2, 1)))
            .unwrap();

        assert_eq!(store.delete_obligor(ObligorKind::Student, ali).unwrap(), 2);
        assert_eq!(store.payment_count(ObligorKind::Student), 1);
        assert!(store.obligor(ObligorKind::Student, ali).is_err());
        assert!(store.delete_obligor(ObligorKind::Student, ali).is_err());
    }

    #[test]
    fn test_record_payment_validation() {
        let (_dir, mut store) = empty_store();
        let id = store.add_obligor(student("Ali", "5th Grade", dec!(800)), date(2024, 3, 1)).unwrap();

        let err = store
            .record_payment(ObligorKind::Student, payment(id, Decimal::ZERO, date(2024, 2, 1)))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidPaymentAmount(_)));

        let err = store
            .record_payment(ObligorKind::Student, payment(42, dec!(100), date(2024, 2, 1)))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));

        store
            .record_payment(ObligorKind::Student, payment(id, dec!(100), date(2024, 2, 1)))
            .unwrap();
        assert_eq!(store.payments_for(ObligorKind::Student, id)[0].method.as_deref(), Some("Cash"));
    }

    #[test]
    fn test_payments_newest_first_and_snapshot() {
        let (_dir, mut store) = empty_store();
        let id = store.add_obligor(student("Ali", "5th Grade", dec!(1000)), date(2024, 5, 1)).unwrap();
        store.record_payment(ObligorKind::Student, payment(id, dec!(1000), date(2024, 3, 5))).unwrap();
        store.record_payment(ObligorKind::Student, payment(id, dec!(1000), date(2024, 1, 20))).unwrap();
        store.record_payment(ObligorKind::Student, payment(id, dec!(1000), date(2024, 4, 2))).unwrap();

        let dates: Vec<NaiveDate> = store
            .payments_for(ObligorKind::Student, id)
            .iter()
            .map(|p| p.payment_date)
            .collect();
        assert_eq!(dates, vec![date(2024, 4, 2), date(2024, 3, 5), date(2024, 1, 20)]);

        let snapshot = store.ledger_input(ObligorKind::Student, id).unwrap();
        assert_eq!(snapshot.cumulative_paid, dec!(3000));
        assert_eq!(snapshot.last_payment, Some(date(2024, 4, 2)));
        assert_eq!(store.total_paid(ObligorKind::Student), dec!(3000));
    }

    #[test]
    fn test_ledger_inputs_filtered_by_class() {
        let (_dir, mut store) = empty_store();
        let as_of = date(2024, 3, 1);
        store.add_obligor(student("Zara", "9th Grade", dec!(1000)), as_of).unwrap();
        store.add_obligor(student("Ali", "5th Grade", dec!(800)), as_of).unwrap();
        store.add_obligor(student("Hina", "9th Grade", dec!(1000)), as_of).unwrap();

        let ninth: Vec<String> = store
            .ledger_inputs(ObligorKind::Student, Some("9th Grade"))
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(ninth, vec!["Hina", "Zara"]);
        assert_eq!(store.ledger_inputs(ObligorKind::Student, None).len(), 3);
    }

    #[test]
    fn test_save_and_reopen() {
        let (dir, mut store) = empty_store();
        let as_of = date(2024, 3, 1);
        let id = store.add_obligor(student("Ali, Jr.", "5th Grade", dec!(800.50)), as_of).unwrap();
        store
            .record_payment(ObligorKind::Student, payment(id, dec!(800.50), date(2024, 2, 1)))
            .unwrap();
        store.save().unwrap();

        let reopened = Store::open(dir.path()).unwrap();
        let ali = reopened.obligor(ObligorKind::Student, id).unwrap();
        assert_eq!(ali.name, "Ali, Jr.");
        assert_eq!(ali.monthly_amount, dec!(800.50));
        assert_eq!(reopened.payment_count(ObligorKind::Student), 1);
        assert!(dir.path().join("teachers.csv").exists());
        assert!(!dir.path().join("students.csv.tmp").exists());
    }

    #[test]
    fn test_amounts_above_limit_are_rejected() {
        let (_dir, mut store) = empty_store();
        let as_of = date(2024, 3, 1);
        let huge = Decimal::from(crate::ledger::AMOUNT_LIMIT) * dec!(100);

        let err = store.add_obligor(student("Ali", "5th Grade", huge), as_of).unwrap_err();
        assert!(matches!(err, StoreError::Ledger(LedgerError::AmountTooLarge { .. })));

        let id = store.add_obligor(student("Ali", "5th Grade", dec!(800)), as_of).unwrap();
        let update = ObligorUpdate {
            name: "Ali".to_string(),
            class_name: Some("5th Grade".to_string()),
            monthly_amount: huge,
        };
        let err = store.edit_obligor(ObligorKind::Student, id, update).unwrap_err();
        assert!(matches!(err, StoreError::Ledger(LedgerError::AmountTooLarge { .. })));

        let err = store
            .record_payment(ObligorKind::Student, payment(id, huge, date(2024, 2, 1)))
            .unwrap_err();
        assert!(matches!(err, StoreError::Ledger(LedgerError::AmountTooLarge { .. })));
        assert_eq!(store.payment_count(ObligorKind::Student), 0);
    }

    #[test]
    fn test_open_rejects_oversized_stored_fee() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("students.csv"),
            "id,name,class,monthly_fee,date_added\n1,Ali,5th Grade,50000000000000000000000000000,2024-01-01\n",
        )
        .unwrap();

        let err = Store::open(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Ledger(LedgerError::AmountTooLarge { .. })));
    }

    #[test]
    fn test_failed_save_removes_temp_file() {
        let (dir, mut store) = empty_store();
        store
            .add_obligor(student("Ali", "5th Grade", dec!(800)), date(2024, 3, 1))
            .unwrap();
        // A directory in place of the roster makes the rename fail
        fs::create_dir(dir.path().join("students.csv")).unwrap();

        let err = store.save().unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(!dir.path().join("students.csv.tmp").exists());
    }

    #[test]
    fn test_filter_by_class_outside_known_list() {
        let (_dir, mut store) = empty_store();
        let as_of = date(2024, 3, 1);
        store.add_obligor(student("Sana", "Nursery", dec!(500)), as_of).unwrap();
        store.add_obligor(student("Ali", "5th Grade", dec!(800)), as_of).unwrap();

        let nursery = store.ledger_inputs(ObligorKind::Student, Some("Nursery"));
        assert_eq!(nursery.len(), 1);
        assert_eq!(nursery[0].name, "Sana");
    }
}
