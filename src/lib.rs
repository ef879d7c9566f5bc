//! GBCE - Global Beverage Corporation Exchange trading shell
//!
//! This library provides the computational core of the exchange shell:
//! CSV stock ingestion with row-level error recovery, validated stock and
//! trade entities, and the dividend yield, P/E ratio, volume-weighted
//! price, and all-share index formulas the shell exposes.

pub mod commands;
pub mod convert;
pub mod error;
pub mod formatters;
pub mod importers;
pub mod models;
pub mod session;
pub mod ui;
