//! Error handling for the GBCE shell
//!
//! Defines the typed failure taxonomy and establishes a unified Result
//! type using anyhow for context chaining at the shell boundary.
//!
//! Parse failures never appear here: best-effort string conversion is
//! modelled as `Option` in `convert`. Errors below cover entity
//! construction and whole-file loads.

use std::path::PathBuf;

use thiserror::Error;

/// Entity construction failures. Fatal to the single construction
/// attempt only; no partial object is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid symbol")]
    InvalidSymbol,

    #[error("invalid last dividend value")]
    InvalidLastDividend,

    #[error("common stock with fixed dividend value")]
    CommonWithFixedDividend,

    #[error("preferred stock is missing fixed dividend value")]
    MissingFixedDividend,

    #[error("invalid fixed dividend value")]
    InvalidFixedDividend,

    #[error("invalid par value")]
    InvalidParValue,

    #[error("invalid trade quantity")]
    InvalidQuantity,

    #[error("invalid trade price")]
    InvalidPrice,

    #[error("trade date is in the future")]
    FutureTradeDate,
}

/// Per-row decode failures inside the stock CSV loader.
#[derive(Error, Debug)]
pub enum RowError {
    #[error("invalid stock type '{0}'")]
    InvalidType(String),

    #[error("additional columns detected")]
    AdditionalColumns,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Whole-load failures for the stock CSV loader. In skip mode row errors
/// are logged and dropped instead of surfacing as `Row`.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("invalid headers in csv file")]
    InvalidHeaders,

    #[error("row {row}: {error}")]
    Row { row: usize, error: RowError },

    #[error("invalid csv file: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for shell operations
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_readable() {
        assert_eq!(
            ValidationError::InvalidLastDividend.to_string(),
            "invalid last dividend value"
        );
        assert_eq!(
            ValidationError::CommonWithFixedDividend.to_string(),
            "common stock with fixed dividend value"
        );
    }

    #[test]
    fn row_error_passes_validation_message_through() {
        let err = RowError::from(ValidationError::InvalidParValue);
        assert_eq!(err.to_string(), "invalid par value");
    }

    #[test]
    fn load_error_carries_row_number() {
        let err = LoadError::Row {
            row: 3,
            error: RowError::AdditionalColumns,
        };
        assert_eq!(err.to_string(), "row 3: additional columns detected");
    }

    #[test]
    fn file_not_found_names_the_path() {
        let err = LoadError::FileNotFound(PathBuf::from("/tmp/missing.csv"));
        assert!(err.to_string().contains("/tmp/missing.csv"));
    }
}
