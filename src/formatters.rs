//! Output formatting for the interactive shell.
//!
//! Separates presentation from the session logic: list commands hand
//! their collections here and get back a rendered table or JSON string.

use std::rc::Rc;

use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::models::{Stock, StockType, Trade};

#[derive(Tabled)]
struct StockRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Last Dividend")]
    last_dividend: String,
    #[tabled(rename = "Fixed Dividend")]
    fixed_dividend: String,
    #[tabled(rename = "Par Value")]
    par_value: String,
}

#[derive(Tabled)]
struct TradeRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Render the stock list as a table, or a friendly message when empty.
pub fn format_stocks(stocks: &[Rc<Stock>]) -> String {
    if stocks.is_empty() {
        return "No stock data available".to_string();
    }

    let rows: Vec<StockRow> = stocks
        .iter()
        .map(|stock| StockRow {
            symbol: stock.symbol().to_string(),
            kind: stock.kind().as_str().to_string(),
            last_dividend: format!("{:.2}", stock.last_dividend()),
            fixed_dividend: match stock.kind() {
                StockType::Preferred => format!("{:.2}", stock.fixed_dividend()),
                StockType::Common => "-".to_string(),
            },
            par_value: format!("{:.2}", stock.par_value()),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Render the trade list as a table, or a friendly message when empty.
pub fn format_trades(trades: &[Trade]) -> String {
    if trades.is_empty() {
        return "No trade data available".to_string();
    }

    let rows: Vec<TradeRow> = trades
        .iter()
        .map(|trade| TradeRow {
            symbol: trade.stock().symbol().to_string(),
            kind: trade.kind().as_str().to_string(),
            quantity: trade.quantity().to_string(),
            price: format!("{:.2}", trade.price()),
            date: trade.date().format("%Y/%m/%d %H:%M:%S").to_string(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Render the stock list as a JSON array.
pub fn format_stocks_json(stocks: &[Rc<Stock>]) -> String {
    #[derive(Serialize)]
    struct JsonStock {
        symbol: String,
        r#type: String,
        last_dividend: f64,
        fixed_dividend: f64,
        par_value: f64,
    }

    let rows: Vec<JsonStock> = stocks
        .iter()
        .map(|stock| JsonStock {
            symbol: stock.symbol().to_string(),
            r#type: stock.kind().as_str().to_string(),
            last_dividend: stock.last_dividend(),
            fixed_dividend: stock.fixed_dividend(),
            par_value: stock.par_value(),
        })
        .collect();

    serde_json::to_string_pretty(&rows).unwrap_or_default()
}

/// Render the trade list as a JSON array.
pub fn format_trades_json(trades: &[Trade]) -> String {
    #[derive(Serialize)]
    struct JsonTrade {
        symbol: String,
        r#type: String,
        quantity: i64,
        price: f64,
        date: String,
    }

    let rows: Vec<JsonTrade> = trades
        .iter()
        .map(|trade| JsonTrade {
            symbol: trade.stock().symbol().to_string(),
            r#type: trade.kind().as_str().to_string(),
            quantity: trade.quantity(),
            price: trade.price(),
            date: trade.date().format("%Y/%m/%d %H:%M:%S").to_string(),
        })
        .collect();

    serde_json::to_string_pretty(&rows).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeType;
    use chrono::Local;
    use serde_json::Value;

    fn sample_stocks() -> Vec<Rc<Stock>> {
        vec![
            Rc::new(Stock::new("TEA", StockType::Common, 0.0, 0.0, 100.0).unwrap()),
            Rc::new(Stock::new("GIN", StockType::Preferred, 8.0, 0.02, 100.0).unwrap()),
        ]
    }

    #[test]
    fn empty_lists_render_friendly_messages() {
        assert_eq!(format_stocks(&[]), "No stock data available");
        assert_eq!(format_trades(&[]), "No trade data available");
    }

    #[test]
    fn stock_table_shows_symbols_and_dashes_common_fixed_dividend() {
        let table = format_stocks(&sample_stocks());
        assert!(table.contains("TEA"));
        assert!(table.contains("GIN"));
        assert!(table.contains("Common"));
        assert!(table.contains("Preferred"));
        assert!(table.contains('-'));
        assert!(table.contains("0.02"));
    }

    #[test]
    fn trade_table_shows_the_trade_fields() {
        let stocks = sample_stocks();
        let trades = vec![Trade::new(
            Rc::clone(&stocks[0]),
            100,
            TradeType::Buy,
            15.5,
            Local::now(),
        )
        .unwrap()];

        let table = format_trades(&trades);
        assert!(table.contains("TEA"));
        assert!(table.contains("Buy"));
        assert!(table.contains("100"));
        assert!(table.contains("15.50"));
    }

    #[test]
    fn stocks_json_round_trips_through_serde() {
        let json = format_stocks_json(&sample_stocks());
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["symbol"], "TEA");
        assert_eq!(value[1]["type"], "Preferred");
        assert_eq!(value[1]["fixed_dividend"], 0.02);
    }

    #[test]
    fn trades_json_includes_the_stock_symbol() {
        let stocks = sample_stocks();
        let trades = vec![Trade::new(
            Rc::clone(&stocks[1]),
            5,
            TradeType::Sell,
            18.0,
            Local::now(),
        )
        .unwrap()];

        let json = format_trades_json(&trades);
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["symbol"], "GIN");
        assert_eq!(value[0]["type"], "Sell");
        assert_eq!(value[0]["quantity"], 5);
    }
}
