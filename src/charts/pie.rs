//! Earning-members distribution pie chart
//!
//! Groups households by their number-of-earning-members value and renders
//! one slice per distinct value with a percentage label. Households with a
//! missing value are excluded from the distribution.

use std::cmp::Ordering;
use std::path::Path;

use plotters::prelude::*;

use crate::error::{ReportError, ReportResult};
use crate::models::{display_numeric, Household};

/// Pixel size of the pie chart PNG
pub const PIE_CHART_SIZE: (u32, u32) = (700, 700);

/// Standard categorical palette, cycled when there are more slices
const SLICE_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Count households per distinct earning-members value
///
/// Missing values are dropped. The result is ordered by count descending,
/// ties broken by value ascending, so the slice order is deterministic.
pub fn earning_member_distribution(households: &[Household]) -> Vec<(f64, usize)> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for hh in households {
        if let Some(v) = hh.no_of_earning_members {
            match counts.iter_mut().find(|(val, _)| *val == v) {
                Some(entry) => entry.1 += 1,
                None => counts.push((v, 1)),
            }
        }
    }
    counts.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then(a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal))
    });
    counts
}

/// Render the earning-members distribution pie chart to a PNG file
///
/// # Errors
///
/// Returns [`ReportError::Chart`] if there are no countable values or if
/// drawing or saving fails.
pub fn render_earning_members_pie(
    households: &[Household],
    output_path: &Path,
) -> ReportResult<()> {
    let distribution = earning_member_distribution(households);
    if distribution.is_empty() {
        return Err(ReportError::Chart(
            "No earning-members values to plot".to_string(),
        ));
    }

    let root = BitMapBackend::new(output_path, PIE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ReportError::Chart(e.to_string()))?;
    let root = root
        .titled("Earning Members Distribution", ("sans-serif", 30))
        .map_err(|e| ReportError::Chart(e.to_string()))?;

    let sizes: Vec<f64> = distribution.iter().map(|(_, count)| *count as f64).collect();
    let labels: Vec<String> = distribution
        .iter()
        .map(|(value, _)| display_numeric(Some(*value)))
        .collect();
    let colors: Vec<RGBColor> = (0..distribution.len())
        .map(|i| SLICE_COLORS[i % SLICE_COLORS.len()])
        .collect();

    let center = (
        PIE_CHART_SIZE.0 as i32 / 2,
        PIE_CHART_SIZE.1 as i32 / 2 + 15,
    );
    let radius = PIE_CHART_SIZE.0 as f64 * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 24).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 20).into_font().color(&BLACK));

    root.draw(&pie)
        .map_err(|e| ReportError::Chart(e.to_string()))?;
    root.present()
        .map_err(|e| ReportError::Chart(e.to_string()))?;

    Ok(())
}
