//! Income vs. expense bar chart
//!
//! One grouped (side-by-side) bar pair per household at its positional
//! index: monthly income on the left, monthly expense on the right. A
//! missing value draws no bar but keeps the household's slot, so the two
//! series always have the dataset's length.

use std::path::Path;

use plotters::prelude::*;

use crate::error::{ReportError, ReportResult};
use crate::models::Household;

/// Pixel size of the bar chart PNG
pub const BAR_CHART_SIZE: (u32, u32) = (800, 600);

const INCOME_COLOR: RGBColor = RGBColor(31, 119, 180);
const EXPENSE_COLOR: RGBColor = RGBColor(255, 127, 14);

/// Label for the household tick at axis position `x`
///
/// Households are 1-based; the label is clamped so the tick at the axis
/// maximum does not name a household past the last one.
fn household_tick_label(x: f64, slot_count: usize) -> String {
    format!("{}", (x.floor() as usize + 1).min(slot_count))
}

/// Extract the income and expense series in dataset order
///
/// Both vectors have exactly one entry per household; missing cells stay
/// `None` so positional indices line up with the dataset.
pub fn income_expense_series(
    households: &[Household],
) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    let income = households.iter().map(|h| h.mthly_hh_income).collect();
    let expense = households.iter().map(|h| h.mthly_hh_expense).collect();
    (income, expense)
}

/// Render the grouped income vs. expense bar chart to a PNG file
///
/// # Errors
///
/// Returns [`ReportError::Chart`] if drawing or saving fails.
pub fn render_income_expense_chart(
    households: &[Household],
    output_path: &Path,
) -> ReportResult<()> {
    let (income, expense) = income_expense_series(households);

    let y_max = income
        .iter()
        .chain(expense.iter())
        .filter_map(|v| *v)
        .fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };
    let slot_count = households.len().max(1);
    let x_max = slot_count as f64;

    let root = BitMapBackend::new(output_path, BAR_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ReportError::Chart(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Income vs Expense", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(|e| ReportError::Chart(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Household")
        .y_desc("Amount")
        .x_labels(households.len().min(20))
        .x_label_formatter(&|x| household_tick_label(*x, slot_count))
        .label_style(("sans-serif", 15))
        .axis_desc_style(("sans-serif", 20))
        .draw()
        .map_err(|e| ReportError::Chart(e.to_string()))?;

    // Income bars occupy the left 40% of each slot, expense the right 40%.
    chart
        .draw_series(income.iter().enumerate().filter_map(|(i, v)| {
            v.map(|v| {
                let x = i as f64;
                Rectangle::new([(x + 0.10, 0.0), (x + 0.50, v)], INCOME_COLOR.filled())
            })
        }))
        .map_err(|e| ReportError::Chart(e.to_string()))?
        .label("Monthly Income")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 10, y + 5)], INCOME_COLOR.filled())
        });

    chart
        .draw_series(expense.iter().enumerate().filter_map(|(i, v)| {
            v.map(|v| {
                let x = i as f64;
                Rectangle::new([(x + 0.50, 0.0), (x + 0.90, v)], EXPENSE_COLOR.filled())
            })
        }))
        .map_err(|e| ReportError::Chart(e.to_string()))?
        .label("Monthly Expense")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 10, y + 5)], EXPENSE_COLOR.filled())
        });

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(|e| ReportError::Chart(e.to_string()))?;

    root.present()
        .map_err(|e| ReportError::Chart(e.to_string()))?;

    Ok(())
}
