//! Narrative text blocks
//!
//! One block per household, in dataset order, listing the seven attribute
//! values under fixed labels. Households are identified positionally
//! ("Household N", 1-based); missing numeric values render as `NaN`.

use crate::models::{display_numeric, Household};

/// Build the narrative lines for one household
///
/// `index` is the 0-based dataset position; the heading is 1-based.
pub fn household_block(index: usize, household: &Household) -> Vec<String> {
    vec![
        format!("Household {}:", index + 1),
        format!(
            "Monthly Household Income: {}",
            display_numeric(household.mthly_hh_income)
        ),
        format!(
            "Monthly Household Expense: {}",
            display_numeric(household.mthly_hh_expense)
        ),
        format!(
            "Annual Household Income: {}",
            display_numeric(household.annual_hh_income)
        ),
        format!(
            "EMI or Rent Amount: {}",
            display_numeric(household.emi_or_rent_amt)
        ),
        format!(
            "Number of Flying Members: {}",
            display_numeric(household.no_of_fly_members)
        ),
        format!(
            "Highest Qualified Member: {}",
            household.highest_qualified_member
        ),
        format!(
            "Number of Earning Members: {}",
            display_numeric(household.no_of_earning_members)
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn household() -> Household {
        Household {
            mthly_hh_income: Some(5000.0),
            mthly_hh_expense: Some(2000.0),
            annual_hh_income: Some(60000.0),
            emi_or_rent_amt: None,
            no_of_fly_members: Some(4.0),
            no_of_earning_members: Some(1.0),
            highest_qualified_member: "Graduate".to_string(),
        }
    }

    #[test]
    fn test_block_has_fixed_labels_in_order() {
        let block = household_block(0, &household());

        assert_eq!(block.len(), 8);
        assert_eq!(block[0], "Household 1:");
        assert_eq!(block[1], "Monthly Household Income: 5000");
        assert_eq!(block[2], "Monthly Household Expense: 2000");
        assert_eq!(block[3], "Annual Household Income: 60000");
        assert_eq!(block[4], "EMI or Rent Amount: NaN");
        assert_eq!(block[5], "Number of Flying Members: 4");
        assert_eq!(block[6], "Highest Qualified Member: Graduate");
        assert_eq!(block[7], "Number of Earning Members: 1");
    }

    #[test]
    fn test_heading_is_one_based() {
        let block = household_block(2, &household());
        assert_eq!(block[0], "Household 3:");
    }
}
