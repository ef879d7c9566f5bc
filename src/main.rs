use anyhow::Result;
use clap::Parser;
use tracing::info;

use gbce::importers;
use gbce::session::Session;
use gbce::ui;

#[derive(Parser)]
#[command(name = "gbce")]
#[command(
    version,
    about = "Global Beverage Corporation Exchange stock and trade tracker"
)]
#[command(
    long_about = "Load a stock list from CSV, then record trades and compute dividend yield, P/E ratio, volume-weighted price, and the GBCE all share index interactively."
)]
struct Cli {
    /// Path to the stock data CSV file
    stock_csv: String,

    /// Abort the load on the first malformed row instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Disable colorized/ANSI output
    #[arg(long = "no-color")]
    no_color: bool,

    /// Output list commands in JSON format
    #[arg(long = "json")]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let stocks = importers::load_stocks(&cli.stock_csv, !cli.strict)?;
    info!("Loaded {} stocks from {}", stocks.len(), cli.stock_csv);

    ui::launch_shell(Session::new(stocks, cli.json))
}
