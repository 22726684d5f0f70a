//! CLI application for spendwise.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{budget, category, config, expense, extract, scan, summary};

/// spendwise - Detect expenses in bank/UPI notifications and track spending
#[derive(Parser)]
#[command(name = "spendwise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Path to ledger file (overrides the configured location)
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the transaction amount from notification text
    Extract(extract::ExtractArgs),

    /// Run notification dumps through the listener pipeline
    Scan(scan::ScanArgs),

    /// Manage expenses
    Expense(expense::ExpenseArgs),

    /// Manage categories
    Category(category::CategoryArgs),

    /// Manage the overall monthly budget
    Budget(budget::BudgetArgs),

    /// Show the spending summary for a month
    Summary(summary::SummaryArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    let ledger_path = cli.ledger.as_deref();

    match cli.command {
        Commands::Extract(args) => extract::run(args),
        Commands::Scan(args) => scan::run(args, config_path).await,
        Commands::Expense(args) => expense::run(args, config_path, ledger_path),
        Commands::Category(args) => category::run(args, config_path, ledger_path),
        Commands::Budget(args) => budget::run(args, config_path, ledger_path),
        Commands::Summary(args) => summary::run(args, config_path, ledger_path),
        Commands::Config(args) => config::run(args, config_path),
    }
}
