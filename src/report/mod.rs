//! PDF report assembly for hhreport
//!
//! Sequences the narrative text blocks and the two chart images into one
//! paginated document and writes it to the output directory. The chart
//! PNGs must already exist on disk when this runs; this is the one
//! ordering constraint in the pipeline.

pub mod narrative;
pub mod pdf;

use std::path::Path;

use lopdf::Document;

use crate::charts::{BAR_CHART_SIZE, PIE_CHART_SIZE};
use crate::config::ReportPaths;
use crate::error::{ReportError, ReportResult};
use crate::models::Household;
use narrative::household_block;
use pdf::{PdfBuilder, LINE_HEIGHT, PT_PER_MM};

/// Font size of the report title
pub const TITLE_FONT_SIZE: f32 = 14.0;

/// Font size of the narrative body
pub const BODY_FONT_SIZE: f32 = 12.0;

/// Width at which both chart images are embedded (180 mm)
pub const IMAGE_WIDTH: f32 = 180.0 * PT_PER_MM;

/// Build the report document from the dataset and the saved chart images
pub fn build_document(households: &[Household], paths: &ReportPaths) -> ReportResult<Document> {
    let mut builder = PdfBuilder::new();

    builder.centered_line("Household Financial Report", TITLE_FONT_SIZE);
    builder.vertical_space(10.0 * PT_PER_MM);

    for (index, household) in households.iter().enumerate() {
        let block = household_block(index, household);
        // Keep each household block on one page.
        builder.ensure_block(block.len() as f32 * LINE_HEIGHT);
        for line in &block {
            builder.text_line(line, BODY_FONT_SIZE);
        }
        builder.vertical_space(5.0 * PT_PER_MM);
    }

    let bar_height = IMAGE_WIDTH * BAR_CHART_SIZE.1 as f32 / BAR_CHART_SIZE.0 as f32;
    builder.embed_image(&paths.bar_chart_file(), IMAGE_WIDTH, bar_height);
    builder.vertical_space(5.0 * PT_PER_MM);

    let pie_height = IMAGE_WIDTH * PIE_CHART_SIZE.1 as f32 / PIE_CHART_SIZE.0 as f32;
    builder.embed_image(&paths.pie_chart_file(), IMAGE_WIDTH, pie_height);

    builder.finalize()
}

/// Assemble and save the final PDF report
///
/// # Errors
///
/// Returns [`ReportError::Pdf`] if a chart image cannot be read back or
/// the document cannot be written.
pub fn assemble_report(households: &[Household], paths: &ReportPaths) -> ReportResult<()> {
    let mut doc = build_document(households, paths)?;
    save_document(&mut doc, &paths.report_file())
}

fn save_document(doc: &mut Document, path: &Path) -> ReportResult<()> {
    doc.save(path).map_err(|e| {
        ReportError::Pdf(format!("Failed to save {}: {}", path.display(), e))
    })?;
    Ok(())
}
