//! Budget command - set or show the overall monthly budget.

use std::path::Path;

use clap::{Args, Subcommand};
use console::style;
use rust_decimal::Decimal;

use spendwise_core::notification::rules::format_inr;

use super::open_ledger;

/// Arguments for the budget command.
#[derive(Args)]
pub struct BudgetArgs {
    #[command(subcommand)]
    command: BudgetCommand,
}

#[derive(Subcommand)]
enum BudgetCommand {
    /// Set the monthly budget
    Set {
        /// Budget amount
        amount: Decimal,
    },

    /// Show the monthly budget
    Show,
}

pub fn run(
    args: BudgetArgs,
    config_path: Option<&str>,
    ledger_path: Option<&Path>,
) -> anyhow::Result<()> {
    let (store, mut ledger) = open_ledger(config_path, ledger_path)?;

    match args.command {
        BudgetCommand::Set { amount } => {
            ledger.set_budget(amount)?;
            store.save(&ledger)?;
            println!("{} Budget set to {}", style("✓").green(), format_inr(amount));
        }
        BudgetCommand::Show => {
            println!("{}", format_inr(ledger.budget));
        }
    }

    Ok(())
}
