//! Stock entity and the GBCE formulas.
//!
//! A `Stock` is constructed once, from a CSV row, and is immutable for
//! the rest of the session. Construction enforces every field invariant;
//! no partial object escapes.

use std::rc::Rc;
use std::str::FromStr;

use chrono::{DateTime, Duration, Local};

use super::trade::Trade;
use crate::error::ValidationError;

/// Trades older than this are ignored by the volume-weighted price.
const TRADE_WINDOW_MINUTES: i64 = 15;

/// Stock categories traded on the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockType {
    Common,
    Preferred,
}

impl StockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockType::Common => "Common",
            StockType::Preferred => "Preferred",
        }
    }
}

impl FromStr for StockType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "common" => Ok(StockType::Common),
            "preferred" => Ok(StockType::Preferred),
            _ => Err(()),
        }
    }
}

/// A listed stock with its dividend attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    symbol: String,
    kind: StockType,
    last_dividend: f64,
    fixed_dividend: f64,
    par_value: f64,
}

impl Stock {
    /// Build a validated stock.
    pub fn new(
        symbol: &str,
        kind: StockType,
        last_dividend: f64,
        fixed_dividend: f64,
        par_value: f64,
    ) -> Result<Self, ValidationError> {
        Self::from_parts(symbol, kind, Some(last_dividend), fixed_dividend, Some(par_value))
    }

    /// Build a stock from possibly-missing numeric fields.
    ///
    /// `None` means the raw input did not parse; it is rejected in the
    /// same precedence slot as an out-of-range value, so callers get the
    /// same winning error message either way.
    pub(crate) fn from_parts(
        symbol: &str,
        kind: StockType,
        last_dividend: Option<f64>,
        fixed_dividend: f64,
        par_value: Option<f64>,
    ) -> Result<Self, ValidationError> {
        if symbol.is_empty() {
            return Err(ValidationError::InvalidSymbol);
        }

        let last_dividend = match last_dividend {
            Some(d) if d >= 0.0 => d,
            _ => return Err(ValidationError::InvalidLastDividend),
        };

        if kind == StockType::Common && fixed_dividend > 0.0 {
            return Err(ValidationError::CommonWithFixedDividend);
        }
        if kind == StockType::Preferred && fixed_dividend == 0.0 {
            return Err(ValidationError::MissingFixedDividend);
        }
        if (kind == StockType::Preferred && fixed_dividend <= 0.0) || fixed_dividend > 1.0 {
            return Err(ValidationError::InvalidFixedDividend);
        }

        let par_value = match par_value {
            Some(v) if v >= 0.0 => v,
            _ => return Err(ValidationError::InvalidParValue),
        };

        Ok(Self {
            symbol: symbol.to_string(),
            kind,
            last_dividend,
            fixed_dividend,
            par_value,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn kind(&self) -> StockType {
        self.kind
    }

    pub fn last_dividend(&self) -> f64 {
        self.last_dividend
    }

    pub fn fixed_dividend(&self) -> f64 {
        self.fixed_dividend
    }

    pub fn par_value(&self) -> f64 {
        self.par_value
    }

    /// Income return at the given price; zero when the price is not
    /// positive.
    pub fn dividend_yield(&self, price: f64) -> f64 {
        if price <= 0.0 {
            return 0.0;
        }
        match self.kind {
            StockType::Common => self.last_dividend / price,
            StockType::Preferred => (self.fixed_dividend * self.par_value) / price,
        }
    }

    /// Price over last dividend; zero when the stock pays no dividend.
    pub fn pe_ratio(&self, price: f64) -> f64 {
        if self.last_dividend <= 0.0 {
            0.0
        } else {
            price / self.last_dividend
        }
    }

    /// Volume-weighted price over this stock's trades in the last
    /// 15 minutes before `now`.
    ///
    /// Trades are matched by identity: only trades recorded against this
    /// exact stock instance count, even if another stock happens to share
    /// every field value.
    pub fn volume_weighted_price(&self, trades: &[Trade], now: DateTime<Local>) -> f64 {
        let cutoff = now - Duration::minutes(TRADE_WINDOW_MINUTES);

        let mut turnover = 0.0;
        let mut volume = 0i64;
        for trade in trades {
            if !std::ptr::eq(Rc::as_ptr(trade.stock()), self) || trade.date() <= cutoff {
                continue;
            }
            turnover += trade.price() * trade.quantity() as f64;
            volume += trade.quantity();
        }

        if volume == 0 {
            0.0
        } else {
            turnover / volume as f64
        }
    }

    /// GBCE all-share index: the geometric mean of the given prices.
    /// Zero for an empty list.
    pub fn gbce_index(prices: &[f64]) -> f64 {
        if prices.is_empty() {
            return 0.0;
        }
        let product: f64 = prices.iter().product();
        product.powf(1.0 / prices.len() as f64)
    }
}
