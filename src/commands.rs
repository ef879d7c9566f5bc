//! Command parsing for the interactive shell.
//!
//! A small hand-rolled parser keeps plain and slash-prefixed readline
//! input on the same code path. Field conversion goes through the
//! best-effort parsers in `convert`, so a malformed number is a parse
//! error message, never a panic.

use chrono::{DateTime, Local};

use crate::convert::{parse_float, parse_int, parse_timestamp};
use crate::models::TradeType;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// List loaded stocks: `stocks`
    Stocks,
    /// List recorded trades: `trades`
    Trades,
    /// Dividend yield at a price: `yield <symbol> <price>`
    DividendYield { symbol: String, price: f64 },
    /// P/E ratio at a price: `pe <symbol> <price>`
    PeRatio { symbol: String, price: f64 },
    /// Record a trade: `trade <symbol> <buy|sell> <quantity> <price> [epoch]`
    RecordTrade {
        symbol: String,
        kind: TradeType,
        quantity: i64,
        price: f64,
        date: Option<DateTime<Local>>,
    },
    /// Volume-weighted price over the last 15 minutes: `vwap <symbol>`
    Vwap { symbol: String },
    /// GBCE all-share index, prompting one price per stock: `index`
    Index,
    /// Show help
    Help,
    /// Exit/quit
    Exit,
}

/// Error type for command parsing
#[derive(Debug, Clone)]
pub struct CommandParseError {
    pub message: String,
}

impl CommandParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a command string into a Command enum
///
/// Accepts both plain and slash forms:
/// - `stocks` or `/stocks`
/// - `yield GIN 20` or `/yield GIN 20`
/// - `trade POP buy 100 15.5`
pub fn parse_command(input: &str) -> Result<Command, CommandParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CommandParseError::new(
            "Empty command. Type `/help` for commands.",
        ));
    }

    let input = input.strip_prefix('/').unwrap_or(input);
    let parts: Vec<&str> = input.split_whitespace().collect();
    let cmd = parts[0].to_lowercase();

    match cmd.as_str() {
        "stocks" => expect_no_args(&parts, Command::Stocks),
        "trades" => expect_no_args(&parts, Command::Trades),
        "yield" => {
            let (symbol, price) = symbol_and_price(&parts, "yield")?;
            Ok(Command::DividendYield { symbol, price })
        }
        "pe" => {
            let (symbol, price) = symbol_and_price(&parts, "pe")?;
            Ok(Command::PeRatio { symbol, price })
        }
        "trade" => parse_trade(&parts),
        "vwap" => {
            let symbol = parts.get(1).ok_or_else(|| {
                CommandParseError::new("vwap requires a symbol. Usage: vwap <symbol>")
            })?;
            Ok(Command::Vwap {
                symbol: symbol.to_string(),
            })
        }
        "index" => expect_no_args(&parts, Command::Index),
        "help" => Ok(Command::Help),
        "exit" | "quit" => Ok(Command::Exit),
        other => Err(CommandParseError::new(format!(
            "Unknown command '{}'. Type `/help` for commands.",
            other
        ))),
    }
}

fn expect_no_args(parts: &[&str], command: Command) -> Result<Command, CommandParseError> {
    if parts.len() > 1 {
        return Err(CommandParseError::new(format!(
            "{} takes no arguments",
            parts[0].to_lowercase()
        )));
    }
    Ok(command)
}

fn symbol_and_price(parts: &[&str], name: &str) -> Result<(String, f64), CommandParseError> {
    if parts.len() != 3 {
        return Err(CommandParseError::new(format!(
            "{name} requires a symbol and a price. Usage: {name} <symbol> <price>"
        )));
    }
    let price = parse_float(parts[2])
        .ok_or_else(|| CommandParseError::new(format!("invalid price '{}'", parts[2])))?;
    Ok((parts[1].to_string(), price))
}

fn parse_trade(parts: &[&str]) -> Result<Command, CommandParseError> {
    if parts.len() < 5 || parts.len() > 6 {
        return Err(CommandParseError::new(
            "Usage: trade <symbol> <buy|sell> <quantity> <price> [epoch]",
        ));
    }

    let symbol = parts[1].to_string();
    let kind: TradeType = parts[2].parse().map_err(|_| {
        CommandParseError::new(format!(
            "invalid trade type '{}'. Use buy or sell",
            parts[2]
        ))
    })?;
    let quantity = parse_int(parts[3])
        .ok_or_else(|| CommandParseError::new(format!("invalid quantity '{}'", parts[3])))?;
    let price = parse_float(parts[4])
        .ok_or_else(|| CommandParseError::new(format!("invalid price '{}'", parts[4])))?;
    let date = match parts.get(5) {
        Some(raw) => Some(parse_timestamp(raw).ok_or_else(|| {
            CommandParseError::new(format!("invalid epoch timestamp '{}'", raw))
        })?),
        None => None,
    };

    Ok(Command::RecordTrade {
        symbol,
        kind,
        quantity,
        price,
        date,
    })
}
