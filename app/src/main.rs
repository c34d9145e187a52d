// In app/src/main.rs

use analytics::MetricsCalculator;
use anyhow::{Context, Result};
use app_config::Settings;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use core_types::{MarketType, Side, TradeDraft, TradeType};
use journal::{Journal, JsonStore};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::prelude::*;
mod render;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "A trade journal: log round-trip trades and review their P&L."
)]
struct Cli {
    /// Journal document to use instead of the configured one.
    #[arg(long, global = true)]
    journal: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Records a closed trade.
    Add {
        /// The instrument traded (e.g., "RELIANCE").
        #[arg(short, long)]
        symbol: String,

        /// Buy, or sell for a short round trip.
        #[arg(long, default_value = "buy")]
        side: Side,

        #[arg(short, long)]
        quantity: u64,

        #[arg(long)]
        entry: Decimal,

        #[arg(long)]
        exit: Decimal,

        #[arg(long, default_value = "0")]
        brokerage: Decimal,

        /// Trade date in YYYY-MM-DD format. Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Equity, F&O, Crypto or Forex.
        #[arg(long, default_value = "equity")]
        market: MarketType,

        /// Intraday, Delivery, Swing, Scalping or Positional.
        #[arg(long, default_value = "intraday")]
        trade_type: TradeType,

        #[arg(long, default_value = "5m")]
        timeframe: String,

        #[arg(long, default_value = "")]
        strategy: String,

        #[arg(long, default_value = "")]
        remarks: String,
    },

    /// Deletes a trade by id (a unique prefix is enough).
    Delete { id: String },

    /// Prints the ledger, newest trade first.
    List,

    /// Prints summary statistics as JSON.
    Stats,

    /// Prints the cumulative equity curve as JSON.
    Equity,

    /// Writes the ledger to a CSV file.
    Export {
        /// Target file. Defaults to the configured export path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings().context("Failed to load configuration")?;
    init_tracing(&settings.app.log_level);
    tracing::debug!(environment = %settings.app.environment, "Configuration loaded.");

    let journal_path = cli.journal.clone().unwrap_or_else(|| settings.journal.path.clone());
    let store = JsonStore::new(journal_path);
    let mut journal = open_journal(&store, &settings)?;

    // Match on the parsed command and call the appropriate handler.
    match cli.command {
        Commands::Add {
            symbol,
            side,
            quantity,
            entry,
            exit,
            brokerage,
            date,
            market,
            trade_type,
            timeframe,
            strategy,
            remarks,
        } => {
            let mut draft = TradeDraft::new(symbol, side, quantity, entry, exit)
                .with_brokerage(brokerage)
                .with_market_type(market)
                .with_trade_type(trade_type)
                .with_timeframe(timeframe)
                .with_strategy(strategy)
                .with_remarks(remarks);
            if let Some(date) = date {
                draft = draft.with_date(date);
            }
            handle_add(&store, &mut journal, draft)?;
        }
        Commands::Delete { id } => {
            handle_delete(&store, &mut journal, &id)?;
        }
        Commands::List => {
            print!("{}", render::ledger(journal.records()));
        }
        Commands::Stats => {
            println!("{}", serde_json::to_string_pretty(&journal.stats())?);
        }
        Commands::Equity => {
            println!("{}", serde_json::to_string_pretty(&journal.equity_curve())?);
        }
        Commands::Export { output } => {
            let path = output.unwrap_or_else(|| settings.journal.export_path.clone());
            journal::export_csv_to_path(journal.records(), &path)
                .with_context(|| format!("Failed to export ledger to {}", path.display()))?;
            println!("Exported {} trades to {}", journal.len(), path.display());
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let level = tracing::Level::from_str(log_level).unwrap_or(tracing::Level::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(tracing_subscriber::filter::Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();
}

fn open_journal(store: &JsonStore, settings: &Settings) -> Result<Journal> {
    let calculator = MetricsCalculator::new().with_epsilon(settings.metrics.breakeven_epsilon)?;
    let records = store
        .load()
        .with_context(|| format!("Failed to load journal from {}", store.path().display()))?;
    let journal = Journal::from_records(calculator, records)?;
    tracing::debug!(trades = journal.len(), "Journal opened.");
    Ok(journal)
}

// --- Mutating Subcommands ---

/// Records the draft and persists the journal. A rejected draft leaves the
/// stored document untouched.
fn handle_add(store: &JsonStore, journal: &mut Journal, draft: TradeDraft) -> Result<()> {
    let record = journal.record(draft)?.clone();
    save(store, journal)?;
    println!("{}", render::summary(&record));
    Ok(())
}

fn handle_delete(store: &JsonStore, journal: &mut Journal, needle: &str) -> Result<()> {
    let id = journal.resolve_id(needle)?;
    let removed = journal.delete(&id)?;
    save(store, journal)?;
    println!("Deleted {} ({} {})", removed.id, removed.draft.side.label(), removed.draft.symbol);
    Ok(())
}

fn save(store: &JsonStore, journal: &Journal) -> Result<()> {
    store
        .save(journal.records())
        .with_context(|| format!("Failed to save journal to {}", store.path().display()))
}
