//! Extract command - find the transaction amount in notification text.

use std::io::{self, BufRead};

use clap::Args;
use console::style;
use rust_decimal::Decimal;
use serde::Serialize;

use spendwise_core::notification::rules::{AmountExtractor, TransactionRule, format_inr};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Notification texts (read from stdin, one per line, when omitted)
    texts: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Show which rule matched and the matched text
    #[arg(long)]
    explain: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// One extraction outcome.
#[derive(Debug, Serialize)]
struct ExtractionRow {
    text: String,
    amount: Option<Decimal>,
    rule: Option<TransactionRule>,
    matched: Option<String>,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let texts = if args.texts.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        args.texts
    };

    let extractor = AmountExtractor::new();
    let rows: Vec<ExtractionRow> = texts
        .into_iter()
        .map(|text| {
            let found = extractor.extract_match(&text);
            ExtractionRow {
                amount: found.as_ref().map(|m| m.amount),
                rule: found.as_ref().map(|m| m.rule),
                matched: found.map(|m| m.source),
                text,
            }
        })
        .collect();

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
        OutputFormat::Csv => format_csv(&rows)?,
        OutputFormat::Text => format_text(&rows, args.explain),
    };

    print!("{}", output);
    Ok(())
}

fn format_csv(rows: &[ExtractionRow]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["text", "amount", "rule", "matched"])?;
    for row in rows {
        wtr.write_record([
            row.text.clone(),
            row.amount.map(|a| a.to_string()).unwrap_or_default(),
            row.rule.map(|r| r.to_string()).unwrap_or_default(),
            row.matched.clone().unwrap_or_default(),
        ])?;
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn format_text(rows: &[ExtractionRow], explain: bool) -> String {
    let mut output = String::new();

    for row in rows {
        match row.amount {
            Some(amount) => {
                output.push_str(&format!("{} {}\n", style(format_inr(amount)).green(), row.text));
                if explain {
                    if let (Some(rule), Some(matched)) = (row.rule, &row.matched) {
                        output.push_str(&format!("  rule: {} (priority {})\n", rule, rule.priority()));
                        output.push_str(&format!("  matched: {}\n", matched));
                    }
                }
            }
            None => {
                output.push_str(&format!("{} {}\n", style("no match").yellow(), row.text));
            }
        }
    }

    output
}
