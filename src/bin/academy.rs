//! Command-line front end for the academy ledger
//!
//! Reads and writes the CSV data directory, prints listings, reports and
//! receipts as text (or JSON with `--json`).

use std::fs;
use std::path::{Path, PathBuf};

use academy_ledger::{
    evaluate_roster, list_defaulters,
    ledger::month_label,
    report::{invoice_number, ClassReport, Dashboard, Receipt, RemindersReport, RosterTable},
    store::{NewObligor, NewPayment, ObligorUpdate},
    summary::summarize_by_class,
    AcademyConfig, AcademyTotals, ObligorKind, Statement, Store,
};
use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "academy", version, about = "Student fee and teacher salary ledger")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data directory (overrides the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Reference date for arrears, defaults to today
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    as_of: Option<NaiveDate>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Headline counts and totals
    Dashboard,
    /// Manage students and their fees
    Students {
        #[command(subcommand)]
        action: StudentAction,
    },
    /// Manage teachers and their salaries
    Teachers {
        #[command(subcommand)]
        action: TeacherAction,
    },
    /// Class summary and fee reminders
    Report {
        #[command(subcommand)]
        which: ReportKind,
    },
}

#[derive(Debug, Subcommand)]
enum StudentAction {
    /// List students with their fee position
    List {
        #[arg(long)]
        class: Option<String>,
    },
    /// Enroll a student
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        class: String,
        #[arg(long)]
        fee: Decimal,
        /// Enrollment date, defaults to the reference date
        #[arg(long)]
        joined: Option<NaiveDate>,
    },
    /// Change name, class or fee
    Edit {
        id: u32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        class: String,
        #[arg(long)]
        fee: Decimal,
    },
    /// Remove a student and their payment history
    Delete { id: u32 },
    /// Record a fee payment
    Pay {
        id: u32,
        #[arg(long)]
        amount: Decimal,
        /// Month the payment is for, e.g. "March 2024"
        #[arg(long)]
        month: Option<String>,
        #[arg(long, default_value = "Cash")]
        method: String,
        /// Payment date, defaults to the reference date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print or save a fee receipt
    Receipt {
        id: u32,
        /// File or directory to write the receipt to
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
enum TeacherAction {
    /// List teachers with their salary position
    List,
    /// Hire a teacher
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        salary: Decimal,
        /// Hire date, defaults to the reference date
        #[arg(long)]
        joined: Option<NaiveDate>,
    },
    /// Change name or salary
    Edit {
        id: u32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        salary: Decimal,
    },
    /// Remove a teacher and their payment history
    Delete { id: u32 },
    /// Record a salary payment
    Pay {
        id: u32,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        month: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print or save a salary receipt
    Receipt {
        id: u32,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
enum ReportKind {
    /// Students, collections and arrears per class
    Classes,
    /// Students with unpaid months
    Reminders,
}

/// Resolved settings shared by every command
struct App {
    config: AcademyConfig,
    store: Store,
    as_of: NaiveDate,
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AcademyConfig::load(path)?,
        None => AcademyConfig::default(),
    };
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir.clone());
    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());
    debug!("Using data directory {} as of {}", data_dir.display(), as_of);

    let store = Store::open(&data_dir)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
    let mut app = App {
        config,
        store,
        as_of,
        json: cli.json,
    };

    match cli.command {
        Command::Dashboard => dashboard(&app),
        Command::Students { action } => students(&mut app, action),
        Command::Teachers { action } => teachers(&mut app, action),
        Command::Report { which } => report(&app, which),
    }
}

fn dashboard(app: &App) -> Result<()> {
    let students = statements(app, ObligorKind::Student, None);
    let teachers = statements(app, ObligorKind::Teacher, None);
    let totals = AcademyTotals::from_statements(&students, &teachers);

    if app.json {
        return print_json(&totals);
    }
    print!("{}", Dashboard { totals: &totals, config: &app.config });
    Ok(())
}

fn students(app: &mut App, action: StudentAction) -> Result<()> {
    let kind = ObligorKind::Student;
    match action {
        StudentAction::List { class } => list(app, kind, class.as_deref()),
        StudentAction::Add { name, class, fee, joined } => {
            check_class(&app.config, &class)?;
            let new = NewObligor {
                kind,
                name,
                class_name: Some(class),
                monthly_amount: fee,
                date_added: joined.unwrap_or(app.as_of),
            };
            add(app, new)
        }
        StudentAction::Edit { id, name, class, fee } => {
            check_class(&app.config, &class)?;
            let update = ObligorUpdate {
                name,
                class_name: Some(class),
                monthly_amount: fee,
            };
            edit(app, kind, id, update)
        }
        StudentAction::Delete { id } => delete(app, kind, id),
        StudentAction::Pay { id, amount, month, method, date } => {
            pay(app, kind, id, amount, month, Some(method), date)
        }
        StudentAction::Receipt { id, output } => receipt(app, kind, id, output.as_deref()),
    }
}

fn teachers(app: &mut App, action: TeacherAction) -> Result<()> {
    let kind = ObligorKind::Teacher;
    match action {
        TeacherAction::List => list(app, kind, None),
        TeacherAction::Add { name, salary, joined } => {
            let new = NewObligor {
                kind,
                name,
                class_name: None,
                monthly_amount: salary,
                date_added: joined.unwrap_or(app.as_of),
            };
            add(app, new)
        }
        TeacherAction::Edit { id, name, salary } => {
            let update = ObligorUpdate {
                name,
                class_name: None,
                monthly_amount: salary,
            };
            edit(app, kind, id, update)
        }
        TeacherAction::Delete { id } => delete(app, kind, id),
        TeacherAction::Pay { id, amount, month, date } => pay(app, kind, id, amount, month, None, date),
        TeacherAction::Receipt { id, output } => receipt(app, kind, id, output.as_deref()),
    }
}

fn report(app: &App, which: ReportKind) -> Result<()> {
    let students = statements(app, ObligorKind::Student, None);
    match which {
        ReportKind::Classes => {
            let summaries = summarize_by_class(&students, &app.config.class_order);
            if app.json {
                return print_json(&summaries);
            }
            print!("{}", ClassReport { summaries: &summaries, config: &app.config });
        }
        ReportKind::Reminders => {
            let defaulters = list_defaulters(&students);
            if app.json {
                return print_json(&defaulters);
            }
            print!("{}", RemindersReport { list: &defaulters, config: &app.config });
        }
    }
    Ok(())
}

fn statements(app: &App, kind: ObligorKind, class: Option<&str>) -> Vec<Statement> {
    evaluate_roster(app.store.ledger_inputs(kind, class), app.as_of)
}

/// Any class filter is accepted so rows with a retired class stay reachable
fn list(app: &App, kind: ObligorKind, class: Option<&str>) -> Result<()> {
    let statements = statements(app, kind, class);
    if app.json {
        return print_json(&statements);
    }
    print!("{}", RosterTable { kind, statements: &statements, config: &app.config });
    Ok(())
}

fn add(app: &mut App, new: NewObligor) -> Result<()> {
    let kind = new.kind;
    let id = app
        .store
        .add_obligor(new, app.as_of)
        .with_context(|| format!("cannot add {}", kind))?;
    app.store.save()?;
    println!("Added {} #{}", kind, id);
    Ok(())
}

fn edit(app: &mut App, kind: ObligorKind, id: u32, update: ObligorUpdate) -> Result<()> {
    app.store
        .edit_obligor(kind, id, update)
        .with_context(|| format!("cannot update {} #{}", kind, id))?;
    app.store.save()?;
    println!("Updated {} #{}", kind, id);
    Ok(())
}

fn delete(app: &mut App, kind: ObligorKind, id: u32) -> Result<()> {
    let removed = app
        .store
        .delete_obligor(kind, id)
        .with_context(|| format!("cannot delete {} #{}", kind, id))?;
    app.store.save()?;
    println!("Deleted {} #{} and {} payments", kind, id, removed);
    Ok(())
}

fn pay(
    app: &mut App,
    kind: ObligorKind,
    id: u32,
    amount: Decimal,
    month: Option<String>,
    method: Option<String>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let new = payment_request(id, amount, month, method, date, app.as_of);
    let payment_id = app
        .store
        .record_payment(kind, new)
        .with_context(|| format!("cannot record payment for {} #{}", kind, id))?;
    app.store.save()?;
    println!("Recorded payment #{} for {} #{}", payment_id, kind, id);
    Ok(())
}

/// Fill in the payment date (reference date) and month label (month of the
/// payment date) when not given
fn payment_request(
    id: u32,
    amount: Decimal,
    month: Option<String>,
    method: Option<String>,
    date: Option<NaiveDate>,
    as_of: NaiveDate,
) -> NewPayment {
    let payment_date = date.unwrap_or(as_of);
    NewPayment {
        obligor_id: id,
        amount,
        method,
        payment_date,
        month_year: month.unwrap_or_else(|| month_label(payment_date)),
    }
}

/// Where a receipt goes: a directory gets the receipt's own file name
fn receipt_path(output: &Path, file_name: &str) -> PathBuf {
    if output.is_dir() {
        output.join(file_name)
    } else {
        output.to_path_buf()
    }
}

fn receipt(app: &App, kind: ObligorKind, id: u32, output: Option<&Path>) -> Result<()> {
    let store = &app.store;
    let obligor = store.obligor(kind, id)?;
    let payments = store.payments_for(kind, id);
    let statement = Statement::compute(store.ledger_input(kind, id)?, app.as_of);
    let number = invoice_number(
        &app.config.invoice_prefix,
        kind,
        app.as_of.year(),
        store.payment_count(kind),
    );

    if app.json {
        #[derive(Serialize)]
        struct ReceiptJson<'a> {
            invoice_number: &'a str,
            issued: NaiveDate,
            obligor: &'a academy_ledger::Obligor,
            payments: &'a [&'a academy_ledger::Payment],
            statement: &'a Statement,
        }
        return print_json(&ReceiptJson {
            invoice_number: &number,
            issued: app.as_of,
            obligor,
            payments: &payments,
            statement: &statement,
        });
    }

    let receipt = Receipt {
        obligor,
        payments: &payments,
        statement: &statement,
        invoice_number: number,
        issued: app.as_of,
        config: &app.config,
    };

    match output {
        Some(path) => {
            let path = receipt_path(path, &receipt.file_name());
            fs::write(&path, receipt.to_string())
                .with_context(|| format!("failed to write receipt to {}", path.display()))?;
            println!("Receipt written to {}", path.display());
        }
        None => print!("{}", receipt),
    }
    Ok(())
}

fn check_class(config: &AcademyConfig, class: &str) -> Result<()> {
    if !config.is_known_class(class) {
        bail!(
            "unknown class '{}' (expected one of: {})",
            class,
            config.class_order.join(", ")
        );
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
