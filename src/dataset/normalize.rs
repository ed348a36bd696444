//! Numeric normalization
//!
//! Coerces the six numeric columns of each raw record. A cell that fails
//! to parse becomes `None` rather than aborting the run, and the row is
//! never dropped. Pure function over the dataset; no side effects.

use crate::models::{Household, RawHousehold};

/// Parse one numeric cell, yielding `None` for anything unparsable
///
/// Whitespace is trimmed first; an empty cell counts as missing.
pub fn parse_numeric_cell(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Normalize the raw dataset into typed household records
///
/// Row count and order are preserved. The qualification column passes
/// through unchanged.
pub fn normalize(raw: Vec<RawHousehold>) -> Vec<Household> {
    raw.into_iter()
        .map(|r| Household {
            mthly_hh_income: parse_numeric_cell(&r.mthly_hh_income),
            mthly_hh_expense: parse_numeric_cell(&r.mthly_hh_expense),
            annual_hh_income: parse_numeric_cell(&r.annual_hh_income),
            emi_or_rent_amt: parse_numeric_cell(&r.emi_or_rent_amt),
            no_of_fly_members: parse_numeric_cell(&r.no_of_fly_members),
            no_of_earning_members: parse_numeric_cell(&r.no_of_earning_members),
            highest_qualified_member: r.highest_qualified_member,
        })
        .collect()
}
