//! Summary command - spending overview for one month.

use std::path::Path;

use clap::Args;
use console::style;

use spendwise_core::MonthlySummary;
use spendwise_core::notification::rules::format_inr;

use super::extract::OutputFormat;
use super::{open_ledger, parse_month};

/// Arguments for the summary command.
#[derive(Args)]
pub struct SummaryArgs {
    /// Month to summarize (YYYY-MM, default: current month)
    #[arg(short, long)]
    month: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub fn run(
    args: SummaryArgs,
    config_path: Option<&str>,
    ledger_path: Option<&Path>,
) -> anyhow::Result<()> {
    let (_, ledger) = open_ledger(config_path, ledger_path)?;
    let (year, month) = parse_month(args.month.as_deref())?;
    let summary = ledger.monthly_summary(year, month)?;

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&summary)?,
        OutputFormat::Csv => format_csv(&summary)?,
        OutputFormat::Text => format_text(&summary),
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn format_csv(summary: &MonthlySummary) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["category_id", "name", "spent", "budget"])?;
    for category in &summary.by_category {
        wtr.write_record([
            category.category_id.clone(),
            category.name.clone(),
            category.spent.to_string(),
            category.budget.map(|b| b.to_string()).unwrap_or_default(),
        ])?;
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn format_text(summary: &MonthlySummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Month: {}-{:02}\n", summary.year, summary.month));
    output.push_str(&format!(
        "{} Remaining out of {} budget\n",
        format_inr(summary.remaining),
        format_inr(summary.budget)
    ));
    output.push_str(&format!(
        "Spent: {} ({}%)\n",
        format_inr(summary.total_spent),
        summary.spent_percentage.round_dp(0)
    ));
    output.push('\n');

    output.push_str("Categories:\n");
    for category in &summary.by_category {
        let line = match category.budget {
            Some(budget) => format!(
                "  {:<16} {} / {}",
                category.name,
                format_inr(category.spent),
                format_inr(budget)
            ),
            None => format!("  {:<16} {}", category.name, format_inr(category.spent)),
        };

        if category.over_budget() {
            output.push_str(&format!("{}\n", style(line).red()));
        } else {
            output.push_str(&format!("{}\n", line));
        }
    }

    output
}
