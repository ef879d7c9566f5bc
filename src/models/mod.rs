//! Validated value objects held in memory for the session.

pub mod stock;
pub mod trade;

pub use stock::{Stock, StockType};
pub use trade::{Trade, TradeType};
