//! Fixed-schema stock list loader.
//!
//! Reads `symbol,type,last_dividend,fixed_dividend,par_value` rows into
//! validated stocks. Header deviations fail the whole file; row problems
//! are either skipped with a warning or abort the load, depending on the
//! caller's policy.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info, warn};

use crate::convert::parse_float;
use crate::error::{LoadError, RowError};
use crate::models::{Stock, StockType};

const EXPECTED_HEADERS: [&str; 5] =
    ["symbol", "type", "last_dividend", "fixed_dividend", "par_value"];

/// Load the stock list from a CSV file.
///
/// With `skip_on_error` a malformed row is logged and dropped; otherwise
/// the first malformed row aborts the load and nothing is returned.
/// Headers-only input yields an empty list. Row order is preserved.
pub fn load_stocks<P: AsRef<Path>>(
    file_path: P,
    skip_on_error: bool,
) -> Result<Vec<Stock>, LoadError> {
    let path = file_path.as_ref();
    if !path.is_file() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    info!("Loading stock data from {:?}", path);

    let mut reader = ReaderBuilder::new()
        .flexible(true) // over-long rows reach the row decoder as data
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    if headers.iter().ne(EXPECTED_HEADERS) {
        debug!("CSV headers: {:?}, expected {:?}", headers, EXPECTED_HEADERS);
        return Err(LoadError::InvalidHeaders);
    }

    let mut stocks = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        match decode_row(&record) {
            Ok(stock) => stocks.push(stock),
            Err(error) if skip_on_error => {
                warn!("row {}: {}. skipped", row, error);
            }
            Err(error) => return Err(LoadError::Row { row, error }),
        }
    }

    info!("Loaded {} stocks", stocks.len());
    Ok(stocks)
}

/// Decode one CSV record into a validated stock.
///
/// All numeric fields are parsed up front, failures carried as `None`;
/// the stock type check reports first, then the column count, then
/// construction. Callers rely on that precedence for error messages.
/// An unparsable fixed dividend falls back to 0 — the field is optional
/// for common stock.
fn decode_row(record: &csv::StringRecord) -> Result<Stock, RowError> {
    let field = |index: usize| record.get(index).unwrap_or("");

    let symbol = field(0);
    let last_dividend = parse_float(field(2));
    let fixed_dividend = parse_float(field(3));
    let par_value = parse_float(field(4));

    let kind: StockType = field(1)
        .parse()
        .map_err(|_| RowError::InvalidType(field(1).to_string()))?;

    if record.len() > EXPECTED_HEADERS.len() {
        return Err(RowError::AdditionalColumns);
    }

    let stock = Stock::from_parts(
        symbol,
        kind,
        last_dividend,
        fixed_dividend.unwrap_or(0.0),
        par_value,
    )?;
    Ok(stock)
}
