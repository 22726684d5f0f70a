//! Expense command - record, list and delete expenses.

use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use console::style;
use rust_decimal::Decimal;

use spendwise_core::notification::deep_link::parse_add_expense_url;
use spendwise_core::notification::rules::format_inr;
use spendwise_core::{Expense, Ledger, NewExpense};

use super::extract::OutputFormat;
use super::{open_ledger, parse_month, resolve_category};

/// Arguments for the expense command.
#[derive(Args)]
pub struct ExpenseArgs {
    #[command(subcommand)]
    command: ExpenseCommand,
}

#[derive(Subcommand)]
enum ExpenseCommand {
    /// Record a new expense
    Add {
        /// Amount in rupees
        amount: Decimal,

        #[command(flatten)]
        details: ExpenseDetails,
    },

    /// Record an expense from an add-expense deep link
    Accept {
        /// Deep link, e.g. spendwise://add-expense?amount=120
        link: String,

        #[command(flatten)]
        details: ExpenseDetails,
    },

    /// List expenses
    List {
        /// Only show this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete an expense
    Delete {
        /// Expense id
        id: String,
    },
}

#[derive(Args)]
struct ExpenseDetails {
    /// Category id or name
    #[arg(short, long)]
    category: String,

    /// Description
    #[arg(short, long, default_value = "")]
    description: String,

    /// Date (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

pub fn run(
    args: ExpenseArgs,
    config_path: Option<&str>,
    ledger_path: Option<&Path>,
) -> anyhow::Result<()> {
    let (store, mut ledger) = open_ledger(config_path, ledger_path)?;

    match args.command {
        ExpenseCommand::Add { amount, details } => {
            add_expense(&mut ledger, amount, details)?;
            store.save(&ledger)?;
        }
        ExpenseCommand::Accept { link, details } => {
            let amount = parse_add_expense_url(&link)?;
            add_expense(&mut ledger, amount, details)?;
            store.save(&ledger)?;
        }
        ExpenseCommand::List { month, format } => {
            list_expenses(&ledger, month.as_deref(), format)?;
        }
        ExpenseCommand::Delete { id } => {
            let expense = ledger.delete_expense(&id)?;
            store.save(&ledger)?;
            println!(
                "{} Deleted expense {} ({})",
                style("✓").green(),
                expense.id,
                format_inr(expense.amount)
            );
        }
    }

    Ok(())
}

fn add_expense(ledger: &mut Ledger, amount: Decimal, details: ExpenseDetails) -> anyhow::Result<()> {
    let category = resolve_category(ledger, &details.category)?;

    let expense = ledger.add_expense(NewExpense {
        amount,
        category,
        description: details.description,
        date: details.date.unwrap_or_else(|| Local::now().date_naive()),
    })?;

    println!(
        "{} Added expense {} of {} on {}",
        style("✓").green(),
        expense.id,
        format_inr(expense.amount),
        expense.date
    );

    Ok(())
}

fn list_expenses(ledger: &Ledger, month: Option<&str>, format: OutputFormat) -> anyhow::Result<()> {
    let expenses: Vec<&Expense> = match month {
        Some(_) => {
            let (year, month) = parse_month(month)?;
            ledger.expenses_in(year, month).collect()
        }
        None => ledger.expenses.iter().collect(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&expenses)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            for expense in &expenses {
                wtr.serialize(expense)?;
            }
            print!("{}", String::from_utf8(wtr.into_inner()?)?);
        }
        OutputFormat::Text => {
            if expenses.is_empty() {
                println!("No expenses recorded.");
            }
            for expense in &expenses {
                let category = ledger
                    .category(&expense.category)
                    .map(|c| c.name.as_str())
                    .unwrap_or("(deleted)");
                println!(
                    "{}  {}  -{}  {}  {}",
                    expense.date,
                    style(&expense.id).dim(),
                    format_inr(expense.amount),
                    category,
                    expense.description
                );
            }
        }
    }

    Ok(())
}
