// Import module - GBCE stock list CSV parser

pub mod stock_csv;

pub use stock_csv::load_stocks;
