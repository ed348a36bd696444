//! Spreadsheet summary export
//!
//! Writes one worksheet with the seven summary columns in fixed order, a
//! header row first, one row per household, and no index column. Missing
//! numeric cells are left blank. Any existing file is overwritten.

use std::path::Path;

use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook, Worksheet};

use crate::error::{ReportError, ReportResult};
use crate::models::{Household, SUMMARY_COLUMNS};

/// Export the summary spreadsheet for the dataset
///
/// # Errors
///
/// Returns [`ReportError::Export`] if the workbook cannot be written.
pub fn export_summary_xlsx(households: &[Household], path: &Path) -> ReportResult<()> {
    let mut workbook = Workbook::new();

    // Fixed creation date so repeated runs on unchanged input produce
    // byte-identical files.
    let created = ExcelDateTime::from_ymd(2000, 1, 1)
        .map_err(|e| ReportError::Export(e.to_string()))?;
    workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

    let worksheet = workbook.add_worksheet();

    for (col, name) in SUMMARY_COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *name)
            .map_err(|e| ReportError::Export(e.to_string()))?;
    }

    for (i, hh) in households.iter().enumerate() {
        let row = (i + 1) as u32;
        write_numeric(worksheet, row, 0, hh.mthly_hh_income)?;
        write_numeric(worksheet, row, 1, hh.mthly_hh_expense)?;
        write_numeric(worksheet, row, 2, hh.annual_hh_income)?;
        write_numeric(worksheet, row, 3, hh.emi_or_rent_amt)?;
        write_numeric(worksheet, row, 4, hh.no_of_fly_members)?;
        worksheet
            .write_string(row, 5, hh.highest_qualified_member.as_str())
            .map_err(|e| ReportError::Export(e.to_string()))?;
        write_numeric(worksheet, row, 6, hh.no_of_earning_members)?;
    }

    workbook.save(path).map_err(|e| {
        ReportError::Export(format!("Failed to save {}: {}", path.display(), e))
    })?;

    Ok(())
}

/// Write one numeric cell, leaving missing values blank
fn write_numeric(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
) -> ReportResult<()> {
    if let Some(v) = value {
        worksheet
            .write_number(row, col, v)
            .map_err(|e| ReportError::Export(e.to_string()))?;
    }
    Ok(())
}
