//! Pipeline orchestration
//!
//! The single top-level entry point. Runs the whole batch job in order:
//! load, normalize, spreadsheet export, chart rendering, PDF assembly.
//! Charts are saved to disk before the PDF is built because the report
//! embeds them from their files.

use crate::charts::{render_earning_members_pie, render_income_expense_chart};
use crate::config::ReportPaths;
use crate::dataset::{load_households, normalize};
use crate::error::ReportResult;
use crate::export::export_summary_xlsx;
use crate::report::assemble_report;

/// Run the full report pipeline
///
/// Produces four files under the output directory: the spreadsheet
/// summary, both chart PNGs, and the PDF report. Prints a fixed
/// confirmation message on success.
pub fn run(paths: &ReportPaths) -> ReportResult<()> {
    paths.ensure_output_dir()?;

    let raw = load_households(paths.input_path())?;
    let households = normalize(raw);

    export_summary_xlsx(&households, &paths.summary_file())?;

    render_income_expense_chart(&households, &paths.bar_chart_file())?;
    render_earning_members_pie(&households, &paths.pie_chart_file())?;

    assemble_report(&households, paths)?;

    println!("Reports generated successfully!");
    Ok(())
}
