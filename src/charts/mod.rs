//! Chart rendering for hhreport
//!
//! Renders both charts to fixed-size PNG files using the plotters bitmap
//! backend, which works in headless environments. The data extraction
//! helpers are pure functions kept separate from the drawing code.
//!
//! Chart files are written to disk before the PDF embeds them; they remain
//! in the output directory as final artifacts.

pub mod bar;
pub mod pie;

pub use bar::{income_expense_series, render_income_expense_chart, BAR_CHART_SIZE};
pub use pie::{earning_member_distribution, render_earning_members_pie, PIE_CHART_SIZE};
