//! Custom error types for hhreport
//!
//! This module defines the error hierarchy for the report pipeline using
//! thiserror for ergonomic error definitions.
//!
//! Per-cell numeric coercion failures are deliberately NOT represented
//! here: an unparsable cell becomes a missing value and processing
//! continues. Everything below is fatal to the run.

use thiserror::Error;

/// The main error type for report pipeline operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Input table errors (missing file, missing required column, bad row)
    #[error("Input error: {0}")]
    Input(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Spreadsheet export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),

    /// PDF assembly errors
    #[error("PDF error: {0}")]
    Pdf(String),
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err.to_string())
    }
}

/// Result type alias for report pipeline operations
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportError::Input("column 'Mthly_HH_Income' not found".into());
        assert_eq!(
            err.to_string(),
            "Input error: column 'Mthly_HH_Income' not found"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let report_err: ReportError = io_err.into();
        assert!(matches!(report_err, ReportError::Io(_)));
    }
}
