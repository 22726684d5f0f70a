//! Scan command - replay notification dumps through the listener pipeline.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use spendwise_core::error::ListenerError;
use spendwise_core::{
    ExpenseSuggestion, ListenerStats, NotificationEvent, NotificationListener, PermissionGate,
    PermissionStatus, SuggestionSink, channel,
};

use super::extract::OutputFormat;
use super::load_config;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Notification dump files or glob pattern (one notification per line)
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// Local files need no notification access.
struct FileAccess;

impl PermissionGate for FileAccess {
    fn status(&self) -> PermissionStatus {
        PermissionStatus::Authorized
    }

    fn request(&self) -> PermissionStatus {
        PermissionStatus::Authorized
    }
}

#[derive(Debug, Serialize)]
struct SuggestionRow {
    source: String,
    amount: Decimal,
    title: String,
    body: String,
    deep_link: String,
}

/// Collects dispatched suggestions instead of posting notifications.
struct CollectingSink {
    scheme: String,
    rows: RefCell<Vec<SuggestionRow>>,
    current_source: RefCell<String>,
}

impl SuggestionSink for CollectingSink {
    fn dispatch(&self, suggestion: &ExpenseSuggestion) -> Result<(), ListenerError> {
        self.rows.borrow_mut().push(SuggestionRow {
            source: self.current_source.borrow().clone(),
            amount: suggestion.amount,
            title: suggestion.title.clone(),
            body: suggestion.body.clone(),
            deep_link: suggestion.deep_link(&self.scheme),
        });
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct ScanReport {
    files: usize,
    stats: ListenerStats,
    suggestions: Vec<SuggestionRow>,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let sink = CollectingSink {
        scheme: config.suggestion.deep_link_scheme.clone(),
        rows: RefCell::new(Vec::new()),
        current_source: RefCell::new(String::new()),
    };
    let mut listener = NotificationListener::with_config(sink, &config.listener);
    let mut stats = ListenerStats::default();
    let mut scanned = 0;

    for path in &files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                pb.inc(1);
                continue;
            }
        };

        let source = path.display().to_string();
        listener.sink().current_source.replace(source.clone());

        let (tx, rx) = channel(config.listener.channel_capacity);
        let lines: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        debug!("{} notifications in {}", lines.len(), source);

        let producer = tokio::spawn(async move {
            for line in lines {
                let event = NotificationEvent::new(line).with_package(source.clone());
                if tx.send(event).await.is_err() {
                    break;
                }
            }
        });

        let file_stats = listener.start(&FileAccess, rx).await?;
        producer.await?;
        stats = file_stats;
        scanned += 1;

        pb.inc(1);
    }

    pb.finish_and_clear();

    let report = ScanReport {
        files: scanned,
        stats,
        suggestions: listener.sink().rows.take(),
    };

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Csv => format_csv(&report)?,
        OutputFormat::Text => format_text(&report),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    debug!("Scan finished in {:?}", start.elapsed());
    Ok(())
}

fn format_csv(report: &ScanReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    for row in &report.suggestions {
        wtr.serialize(row)?;
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn format_text(report: &ScanReport) -> String {
    let mut output = String::new();

    for row in &report.suggestions {
        output.push_str(&format!("{} {}\n", style(&row.title).green(), row.body));
        output.push_str(&format!("  from: {}\n", row.source));
        output.push_str(&format!("  open: {}\n", row.deep_link));
    }

    output.push_str(&format!(
        "\nScanned {} files: {} notifications, {} expenses detected, {} duplicates skipped\n",
        report.files, report.stats.received, report.stats.matched, report.stats.duplicates
    ));

    output
}
