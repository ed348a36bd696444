//! Core data models for hhreport
//!
//! This module contains the record types that flow through the pipeline:
//! the raw CSV row as text and the normalized household record.

pub mod household;

pub use household::{display_numeric, Household, RawHousehold, REQUIRED_COLUMNS, SUMMARY_COLUMNS};
