//! Export module for hhreport
//!
//! Writes the spreadsheet summary of the normalized dataset.

pub mod xlsx;

pub use xlsx::export_summary_xlsx;
