//! Configuration module for hhreport
//!
//! The pipeline has exactly two configuration knobs: where the input table
//! lives and where the output artifacts go. Both are passed explicitly into
//! the pipeline entry point rather than read from globals.

pub mod paths;

pub use paths::ReportPaths;
