//! Path management for hhreport
//!
//! Holds the input table location and the output directory, and resolves
//! the fixed file names of every artifact the pipeline produces.
//!
//! The output directory is created if absent but never cleaned: stale files
//! from unrelated prior runs are left in place.

use std::path::{Path, PathBuf};

use crate::error::{ReportError, ReportResult};

/// File name of the spreadsheet summary
pub const SUMMARY_FILE_NAME: &str = "financial_summary.xlsx";

/// File name of the income vs. expense bar chart
pub const BAR_CHART_FILE_NAME: &str = "income_vs_expense.png";

/// File name of the earning-members pie chart
pub const PIE_CHART_FILE_NAME: &str = "earning_members_pie_chart.png";

/// File name of the final PDF report
pub const REPORT_FILE_NAME: &str = "household_financial_report.pdf";

/// Manages all paths used by the report pipeline
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Location of the input CSV table
    input_path: PathBuf,
    /// Directory all artifacts are written to
    output_dir: PathBuf,
}

impl ReportPaths {
    /// Create a new ReportPaths instance from explicit locations
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Get the input table path
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Get the output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Get the path to the spreadsheet summary
    pub fn summary_file(&self) -> PathBuf {
        self.output_dir.join(SUMMARY_FILE_NAME)
    }

    /// Get the path to the bar chart image
    pub fn bar_chart_file(&self) -> PathBuf {
        self.output_dir.join(BAR_CHART_FILE_NAME)
    }

    /// Get the path to the pie chart image
    pub fn pie_chart_file(&self) -> PathBuf {
        self.output_dir.join(PIE_CHART_FILE_NAME)
    }

    /// Get the path to the final PDF report
    pub fn report_file(&self) -> PathBuf {
        self.output_dir.join(REPORT_FILE_NAME)
    }

    /// Ensure the output directory exists
    ///
    /// Existing files in the directory are left untouched.
    pub fn ensure_output_dir(&self) -> ReportResult<()> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            ReportError::Io(format!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })
    }
}
