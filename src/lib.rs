//! hhreport - Household financial report generator
//!
//! This library implements a single-pass batch pipeline that reads a CSV
//! table of household financial records, normalizes its numeric columns,
//! and emits a spreadsheet summary, two charts, and a PDF report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Input/output path configuration
//! - `error`: Custom error types
//! - `models`: Core data models (raw and normalized household records)
//! - `dataset`: CSV loading and numeric normalization
//! - `export`: Spreadsheet summary export
//! - `charts`: Bar and pie chart rendering
//! - `report`: Narrative text blocks and PDF assembly
//! - `pipeline`: The orchestrating entry point
//!
//! # Example
//!
//! ```rust,ignore
//! use hhreport::config::ReportPaths;
//!
//! let paths = ReportPaths::new("data/transactions.csv", "output");
//! hhreport::pipeline::run(&paths)?;
//! ```

pub mod charts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod report;

pub use error::ReportError;
