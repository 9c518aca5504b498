//! CSV encoding of obligors and payments
//!
//! Students and teachers live in separate files with slightly different
//! columns, mirroring the payment files.

use std::io::{Read, Write};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Obligor, ObligorKind, Payment};

#[derive(Debug, Serialize, Deserialize)]
struct StudentRow {
    id: u32,
    name: String,
    class: String,
    #[serde(with = "rust_decimal::serde::str")]
    monthly_fee: Decimal,
    date_added: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
struct TeacherRow {
    id: u32,
    name: String,
    #[serde(with = "rust_decimal::serde::str")]
    monthly_salary: Decimal,
    date_added: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
struct StudentPaymentRow {
    id: u32,
    student_id: u32,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    payment_method: String,
    payment_date: NaiveDate,
    month_year: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct TeacherPaymentRow {
    id: u32,
    teacher_id: u32,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    payment_date: NaiveDate,
    month_year: String,
}

/// Load obligors of `kind` from CSV with headers
pub fn load_obligors_from_reader<R: Read>(reader: R, kind: ObligorKind) -> Result<Vec<Obligor>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut obligors = Vec::new();

    match kind {
        ObligorKind::Student => {
            for result in rdr.deserialize() {
                let row: StudentRow = result?;
                obligors.push(Obligor {
                    id: row.id,
                    kind,
                    name: row.name,
                    class_name: Some(row.class),
                    monthly_amount: row.monthly_fee,
                    date_added: row.date_added,
                });
            }
        }
        ObligorKind::Teacher => {
            for result in rdr.deserialize() {
                let row: TeacherRow = result?;
                obligors.push(Obligor {
                    id: row.id,
                    kind,
                    name: row.name,
                    class_name: None,
                    monthly_amount: row.monthly_salary,
                    date_added: row.date_added,
                });
            }
        }
    }

    Ok(obligors)
}

/// Load payments for obligors of `kind` from CSV with headers
pub fn load_payments_from_reader<R: Read>(reader: R, kind: ObligorKind) -> Result<Vec<Payment>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut payments = Vec::new();

    match kind {
        ObligorKind::Student => {
            for result in rdr.deserialize() {
                let row: StudentPaymentRow = result?;
                payments.push(Payment {
                    id: row.id,
                    obligor_id: row.student_id,
                    amount: row.amount,
                    method: Some(row.payment_method),
                    payment_date: row.payment_date,
                    month_year: row.month_year,
                });
            }
        }
        ObligorKind::Teacher => {
            for result in rdr.deserialize() {
                let row: TeacherPaymentRow = result?;
                payments.push(Payment {
                    id: row.id,
                    obligor_id: row.teacher_id,
                    amount: row.amount,
                    method: None,
                    payment_date: row.payment_date,
                    month_year: row.month_year,
                });
            }
        }
    }

    Ok(payments)
}

/// Write obligors of `kind` as CSV with headers
pub fn write_obligors<W: Write>(writer: W, kind: ObligorKind, obligors: &[Obligor]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    // Headers come from the row struct, so an empty table still needs them
    if obligors.is_empty() {
        match kind {
            ObligorKind::Student => wtr.write_record(["id", "name", "class", "monthly_fee", "date_added"])?,
            ObligorKind::Teacher => wtr.write_record(["id", "name", "monthly_salary", "date_added"])?,
        }
    }

    for obligor in obligors {
        match kind {
            ObligorKind::Student => wtr.serialize(StudentRow {
                id: obligor.id,
                name: obligor.name.clone(),
                class: obligor.class_name.clone().unwrap_or_default(),
                monthly_fee: obligor.monthly_amount,
                date_added: obligor.date_added,
            })?,
            ObligorKind::Teacher => wtr.serialize(TeacherRow {
                id: obligor.id,
                name: obligor.name.clone(),
                monthly_salary: obligor.monthly_amount,
                date_added: obligor.date_added,
            })?,
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write payments for obligors of `kind` as CSV with headers
pub fn write_payments<W: Write>(writer: W, kind: ObligorKind, payments: &[Payment]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    if payments.is_empty() {
        match kind {
            ObligorKind::Student => wtr.write_record([
                "id",
                "student_id",
                "amount",
                "payment_method",
                "payment_date",
                "month_year",
            ])?,
            ObligorKind::Teacher => {
                wtr.write_record(["id", "teacher_id", "amount", "payment_date", "month_year"])?
            }
        }
    }

    for payment in payments {
        match kind {
            ObligorKind::Student => wtr.serialize(StudentPaymentRow {
                id: payment.id,
                student_id: payment.obligor_id,
                amount: payment.amount,
                payment_method: payment.method.clone().unwrap_or_default(),
                payment_date: payment.payment_date,
                month_year: payment.month_year.clone(),
            })?,
            ObligorKind::Teacher => wtr.serialize(TeacherPaymentRow {
                id: payment.id,
                teacher_id: payment.obligor_id,
                amount: payment.amount,
                payment_date: payment.payment_date,
                month_year: payment.month_year.clone(),
            })?,
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const STUDENTS: &str = "\
id,name,class,monthly_fee,date_added
1,Ayesha Khan,9th Grade,1500.00,2024-01-15
2,Bilal Ahmed,11th Grade (1st Year),2000,2023-09-01
";

    const TEACHER_PAYMENTS: &str = "\
id,teacher_id,amount,payment_date,month_year
1,3,25000.50,2024-02-01,January 2024
";

    #[test]
    fn test_load_students() {
        let students = load_obligors_from_reader(STUDENTS.as_bytes(), ObligorKind::Student).unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "Ayesha Khan");
        assert_eq!(students[0].class_name.as_deref(), Some("9th Grade"));
        assert_eq!(students[0].monthly_amount, dec!(1500.00));
        assert_eq!(students[1].class_name.as_deref(), Some("11th Grade (1st Year)"));
        assert_eq!(students[1].date_added, NaiveDate::from_ymd_opt(2023, 9, 1).unwrap());
    }

    #[test]
    fn test_load_teacher_payments() {
        let payments = load_payments_from_reader(TEACHER_PAYMENTS.as_bytes(), ObligorKind::Teacher).unwrap();

        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].obligor_id, 3);
        assert_eq!(payments[0].amount, dec!(25000.50));
        assert_eq!(payments[0].method, None);
        assert_eq!(payments[0].month_year, "January 2024");
    }

    #[test]
    fn test_malformed_amount_is_rejected() {
        let data = "id,name,class,monthly_fee,date_added\n1,Ayesha,9th Grade,lots,2024-01-15\n";
        assert!(load_obligors_from_reader(data.as_bytes(), ObligorKind::Student).is_err());
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let data = "id,name,monthly_salary,date_added\n1,Usman,30000,15/01/2024\n";
        assert!(load_obligors_from_reader(data.as_bytes(), ObligorKind::Teacher).is_err());
    }

    #[test]
    fn test_write_then_load_students() {
        let students = load_obligors_from_reader(STUDENTS.as_bytes(), ObligorKind::Student).unwrap();

        let mut buf = Vec::new();
        write_obligors(&mut buf, ObligorKind::Student, &students).unwrap();
        let reloaded = load_obligors_from_reader(buf.as_slice(), ObligorKind::Student).unwrap();

        assert_eq!(reloaded, students);
    }

    #[test]
    fn test_write_empty_table_keeps_header() {
        let mut buf = Vec::new();
        write_payments(&mut buf, ObligorKind::Student, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text, "id,student_id,amount,payment_method,payment_date,month_year\n");
        let reloaded = load_payments_from_reader(text.as_bytes(), ObligorKind::Student).unwrap();
        assert!(reloaded.is_empty());
    }
}
