//! CSV loader
//!
//! Reads the input table into an ordered `Vec<RawHousehold>`. The header
//! row is checked up front so a missing required column is reported by
//! name even when the table has no data rows. Row order and row count are
//! preserved exactly.

use std::path::Path;

use crate::error::{ReportError, ReportResult};
use crate::models::{RawHousehold, REQUIRED_COLUMNS};

/// Load the household table from a CSV file
///
/// # Errors
///
/// Returns [`ReportError::Input`] if the file cannot be opened, a required
/// column is absent, or a row fails to deserialize. Per-cell numeric
/// problems are not errors at this stage; cells stay as text until
/// normalization.
pub fn load_households(path: &Path) -> ReportResult<Vec<RawHousehold>> {
    let mut rdr = csv::Reader::from_path(path).map_err(|e| {
        ReportError::Input(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let headers = rdr
        .headers()
        .map_err(|e| ReportError::Input(format!("Failed to read header row: {}", e)))?
        .clone();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(ReportError::Input(format!(
            "Missing required column(s): {}",
            missing.join(", ")
        )));
    }

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        let row: RawHousehold = result.map_err(|e| {
            ReportError::Input(format!("Failed to parse row {}: {}", i + 1, e))
        })?;
        rows.push(row);
    }

    Ok(rows)
}
