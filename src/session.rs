//! Session state and command dispatch for the interactive shell.
//!
//! Holds the stocks loaded at startup and the trades recorded since,
//! and routes parsed commands to their handlers. All state is in-memory
//! for the lifetime of the process; nothing is persisted.

use std::io::{stdin, stdout, Write};
use std::rc::Rc;

use anyhow::anyhow;
use chrono::Local;
use colored::Colorize;
use itertools::Itertools;
use tracing::info;

use crate::commands::Command;
use crate::convert::parse_float;
use crate::error::Result;
use crate::formatters;
use crate::models::{Stock, Trade};

/// Whether the shell loop should keep running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

pub struct Session {
    stocks: Vec<Rc<Stock>>,
    trades: Vec<Trade>,
    json_output: bool,
}

impl Session {
    pub fn new(stocks: Vec<Stock>, json_output: bool) -> Self {
        Self {
            stocks: stocks.into_iter().map(Rc::new).collect(),
            trades: Vec::new(),
            json_output,
        }
    }

    /// Case-insensitive lookup by ticker symbol.
    pub fn find_stock(&self, symbol: &str) -> Option<&Rc<Stock>> {
        self.stocks
            .iter()
            .find(|stock| stock.symbol().eq_ignore_ascii_case(symbol))
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Route a parsed command to its handler
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Stocks => {
                if self.json_output {
                    println!("{}", formatters::format_stocks_json(&self.stocks));
                } else {
                    println!("{}", formatters::format_stocks(&self.stocks));
                }
            }
            Command::Trades => {
                if self.json_output {
                    println!("{}", formatters::format_trades_json(&self.trades));
                } else {
                    println!("{}", formatters::format_trades(&self.trades));
                }
            }
            Command::DividendYield { symbol, price } => {
                let stock = self.lookup(&symbol)?;
                println!("Dividend yield: {:.4}", stock.dividend_yield(price));
            }
            Command::PeRatio { symbol, price } => {
                let stock = self.lookup(&symbol)?;
                println!("P/E ratio: {:.4}", stock.pe_ratio(price));
            }
            Command::RecordTrade {
                symbol,
                kind,
                quantity,
                price,
                date,
            } => {
                let stock = Rc::clone(self.lookup(&symbol)?);
                let date = date.unwrap_or_else(Local::now);
                let trade = Trade::new(Rc::clone(&stock), quantity, kind, price, date)
                    .map_err(|e| anyhow!("could not record trade: {e}"))?;

                info!(
                    "recorded {} {} x{} @ {}",
                    kind.as_str(),
                    stock.symbol(),
                    quantity,
                    price
                );
                println!(
                    "{} Recorded {} of {} {} @ {:.2}",
                    "✓".green().bold(),
                    kind.as_str().to_lowercase(),
                    quantity,
                    stock.symbol(),
                    price
                );
                self.trades.push(trade);
            }
            Command::Vwap { symbol } => {
                let stock = self.lookup(&symbol)?;
                println!(
                    "Volume weighted price: {:.4}",
                    stock.volume_weighted_price(&self.trades, Local::now())
                );
            }
            Command::Index => {
                if self.stocks.is_empty() {
                    println!("No stock data available");
                } else {
                    let prices = prompt_index_prices(&self.stocks)?;
                    println!("GBCE all share index: {:.4}", Stock::gbce_index(&prices));
                }
            }
            Command::Help => {
                println!("Available commands:");
                println!("  stocks                                    - List loaded stocks");
                println!("  trades                                    - List recorded trades");
                println!("  yield <symbol> <price>                    - Dividend yield at a price");
                println!("  pe <symbol> <price>                       - P/E ratio at a price");
                println!("  trade <symbol> <buy|sell> <qty> <price> [epoch]");
                println!("                                            - Record a trade (date defaults to now)");
                println!("  vwap <symbol>                             - Volume weighted price, last 15 minutes");
                println!("  index                                     - GBCE all share index (prompts per stock)");
                println!("  help                                      - Show this help");
                println!("  exit                                      - Exit application");
            }
            Command::Exit => return Ok(Outcome::Exit),
        }

        Ok(Outcome::Continue)
    }

    fn lookup(&self, symbol: &str) -> Result<&Rc<Stock>> {
        self.find_stock(symbol).ok_or_else(|| {
            anyhow!(
                "unknown symbol '{}' (loaded: {})",
                symbol,
                self.stocks.iter().map(|s| s.symbol()).join(", ")
            )
        })
    }
}

/// Prompt for one price per stock, retrying until each parses as a
/// positive number.
fn prompt_index_prices(stocks: &[Rc<Stock>]) -> Result<Vec<f64>> {
    let mut prices = Vec::with_capacity(stocks.len());
    for stock in stocks {
        loop {
            let input = prompt_line(&format!("Price for {}: ", stock.symbol()))?;
            match parse_float(&input) {
                Some(price) if price > 0.0 => {
                    prices.push(price);
                    break;
                }
                _ => println!("Invalid price! Please try again"),
            }
        }
    }
    Ok(prices)
}

fn prompt_line(msg: &str) -> Result<String> {
    print!("{}", msg);
    stdout().flush()?;
    let mut input = String::new();
    if stdin().read_line(&mut input)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(input.trim().to_string())
}
