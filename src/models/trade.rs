//! Trade entity.

use std::rc::Rc;
use std::str::FromStr;

use chrono::{DateTime, Local};

use super::stock::Stock;
use crate::error::ValidationError;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeType {
    Buy,
    Sell,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Buy => "Buy",
            TradeType::Sell => "Sell",
        }
    }
}

impl FromStr for TradeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(TradeType::Buy),
            "sell" => Ok(TradeType::Sell),
            _ => Err(()),
        }
    }
}

/// One buy or sell event against a loaded stock.
///
/// Trades share their stock by `Rc` reference, so identity (not field
/// equality) links a trade to its stock. The session keeps trades in an
/// append-only list; a trade is immutable once constructed.
#[derive(Debug, Clone)]
pub struct Trade {
    stock: Rc<Stock>,
    quantity: i64,
    kind: TradeType,
    price: f64,
    date: DateTime<Local>,
}

impl Trade {
    /// Validate and record one trade. `date` must not be after "now" at
    /// construction time.
    pub fn new(
        stock: Rc<Stock>,
        quantity: i64,
        kind: TradeType,
        price: f64,
        date: DateTime<Local>,
    ) -> Result<Self, ValidationError> {
        if quantity < 1 {
            return Err(ValidationError::InvalidQuantity);
        }
        if price <= 0.0 || price.is_nan() {
            return Err(ValidationError::InvalidPrice);
        }
        if date > Local::now() {
            return Err(ValidationError::FutureTradeDate);
        }

        Ok(Self {
            stock,
            quantity,
            kind,
            price,
            date,
        })
    }

    pub fn stock(&self) -> &Rc<Stock> {
        &self.stock
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn kind(&self) -> TradeType {
        self.kind
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn date(&self) -> DateTime<Local> {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StockType;
    use chrono::Duration;

    fn tea() -> Rc<Stock> {
        Rc::new(Stock::new("TEA", StockType::Common, 0.0, 0.0, 100.0).unwrap())
    }

    #[test]
    fn trade_type_parses_case_insensitively() {
        assert_eq!("buy".parse(), Ok(TradeType::Buy));
        assert_eq!("SELL".parse(), Ok(TradeType::Sell));
        assert_eq!("hold".parse::<TradeType>(), Err(()));
    }

    #[test]
    fn valid_trade_is_recorded() {
        let now = Local::now();
        let trade = Trade::new(tea(), 10, TradeType::Buy, 15.5, now).unwrap();
        assert_eq!(trade.quantity(), 10);
        assert_eq!(trade.kind(), TradeType::Buy);
        assert_eq!(trade.price(), 15.5);
        assert_eq!(trade.date(), now);
    }

    #[test]
    fn construction_rejects_quantity_below_one() {
        let err = Trade::new(tea(), 0, TradeType::Buy, 15.5, Local::now()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidQuantity);

        let err = Trade::new(tea(), -3, TradeType::Sell, 15.5, Local::now()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidQuantity);
    }

    #[test]
    fn construction_rejects_non_positive_price() {
        let err = Trade::new(tea(), 10, TradeType::Buy, 0.0, Local::now()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPrice);

        let err = Trade::new(tea(), 10, TradeType::Buy, -1.0, Local::now()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPrice);

        let err = Trade::new(tea(), 10, TradeType::Buy, f64::NAN, Local::now()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPrice);
    }

    #[test]
    fn construction_rejects_future_dates() {
        let future = Local::now() + Duration::minutes(5);
        let err = Trade::new(tea(), 10, TradeType::Buy, 15.5, future).unwrap_err();
        assert_eq!(err, ValidationError::FutureTradeDate);
    }

    #[test]
    fn past_dates_are_accepted() {
        let past = Local::now() - Duration::days(1);
        assert!(Trade::new(tea(), 10, TradeType::Buy, 15.5, past).is_ok());
    }
}
