//! Category command - manage spending categories.

use std::path::Path;

use clap::{Args, Subcommand};
use console::style;
use rust_decimal::Decimal;

use spendwise_core::notification::rules::format_inr;

use super::{open_ledger, resolve_category};

/// Arguments for the category command.
#[derive(Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    command: CategoryCommand,
}

#[derive(Subcommand)]
enum CategoryCommand {
    /// Add a category
    Add {
        /// Category name
        name: String,

        /// Display color
        #[arg(long, default_value = "#9E9E9E")]
        color: String,

        /// Monthly budget for the category
        #[arg(short, long)]
        budget: Option<Decimal>,
    },

    /// List categories
    List,

    /// Delete a category (its expenses are kept)
    Delete {
        /// Category id or name
        category: String,
    },

    /// Set the monthly budget of a category
    Budget {
        /// Category id or name
        category: String,

        /// Budget amount
        amount: Decimal,
    },
}

pub fn run(
    args: CategoryArgs,
    config_path: Option<&str>,
    ledger_path: Option<&Path>,
) -> anyhow::Result<()> {
    let (store, mut ledger) = open_ledger(config_path, ledger_path)?;

    match args.command {
        CategoryCommand::Add { name, color, budget } => {
            let category = ledger.add_category(&name, &color, budget)?;
            println!(
                "{} Added category {} ({})",
                style("✓").green(),
                category.name,
                category.id
            );
            store.save(&ledger)?;
        }
        CategoryCommand::List => {
            for category in &ledger.categories {
                let budget = category
                    .budget
                    .map(|b| format!("Budget: {}", format_inr(b)))
                    .unwrap_or_else(|| "No budget set".to_string());
                println!(
                    "{}  {}  {}  {}",
                    style(&category.id).dim(),
                    category.name,
                    category.color,
                    budget
                );
            }
        }
        CategoryCommand::Delete { category } => {
            let id = resolve_category(&ledger, &category)?;
            let removed = ledger.delete_category(&id)?;
            store.save(&ledger)?;
            println!("{} Deleted category {}", style("✓").green(), removed.name);
        }
        CategoryCommand::Budget { category, amount } => {
            let id = resolve_category(&ledger, &category)?;
            ledger.set_category_budget(&id, amount)?;
            store.save(&ledger)?;
            println!(
                "{} Set budget of {} to {}",
                style("✓").green(),
                category,
                format_inr(amount)
            );
        }
    }

    Ok(())
}
