//! Household record types
//!
//! A [`RawHousehold`] is one CSV row exactly as read, every field still
//! text. A [`Household`] is the normalized form: the six numeric columns
//! parsed to `f64`, with `None` as the missing-value marker for cells that
//! did not parse. The qualification column is uninterpreted text and passes
//! through unchanged.

use serde::Deserialize;

/// Column headers the input table must contain
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Mthly_HH_Income",
    "Mthly_HH_Expense",
    "Emi_or_Rent_Amt",
    "Annual_HH_Income",
    "No_of_Fly_Members",
    "No_of_Earning_Members",
    "Highest_Qualified_Member",
];

/// Column order of the spreadsheet summary
pub const SUMMARY_COLUMNS: [&str; 7] = [
    "Mthly_HH_Income",
    "Mthly_HH_Expense",
    "Annual_HH_Income",
    "Emi_or_Rent_Amt",
    "No_of_Fly_Members",
    "Highest_Qualified_Member",
    "No_of_Earning_Members",
];

/// One row of the source table, all fields as raw text
///
/// Deserialized by header name, so column order in the file is irrelevant.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHousehold {
    #[serde(rename = "Mthly_HH_Income")]
    pub mthly_hh_income: String,
    #[serde(rename = "Mthly_HH_Expense")]
    pub mthly_hh_expense: String,
    #[serde(rename = "Annual_HH_Income")]
    pub annual_hh_income: String,
    #[serde(rename = "Emi_or_Rent_Amt")]
    pub emi_or_rent_amt: String,
    #[serde(rename = "No_of_Fly_Members")]
    pub no_of_fly_members: String,
    #[serde(rename = "No_of_Earning_Members")]
    pub no_of_earning_members: String,
    #[serde(rename = "Highest_Qualified_Member")]
    pub highest_qualified_member: String,
}

/// A normalized household record
///
/// Numeric fields are either a parsed number or `None` (the missing
/// marker), never a raw unparsed string. Constructed once by the
/// normalizer and read-only thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Household {
    /// Monthly household income
    pub mthly_hh_income: Option<f64>,
    /// Monthly household expense
    pub mthly_hh_expense: Option<f64>,
    /// Annual household income
    pub annual_hh_income: Option<f64>,
    /// EMI or rent amount
    pub emi_or_rent_amt: Option<f64>,
    /// Number of family members
    pub no_of_fly_members: Option<f64>,
    /// Number of earning members
    pub no_of_earning_members: Option<f64>,
    /// Highest qualified member (uninterpreted text)
    pub highest_qualified_member: String,
}

/// Format a numeric cell for narrative output
///
/// Integral values print without a decimal point; missing values print as
/// `NaN` to match the source system's report text.
pub fn display_numeric(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{:.0}", v),
        Some(v) => format!("{}", v),
        None => "NaN".to_string(),
    }
}
