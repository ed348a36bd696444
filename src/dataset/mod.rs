//! Dataset construction for hhreport
//!
//! Two stages, both order-preserving:
//!
//! - `loader`: reads the CSV table into raw text records, failing fast on a
//!   missing file or missing required column
//! - `normalize`: coerces the numeric columns per cell, substituting the
//!   missing marker for anything that does not parse

pub mod loader;
pub mod normalize;

pub use loader::load_households;
pub use normalize::{normalize, parse_numeric_cell};
