use serde::{Deserialize, Serialize};

use crate::error::AssumableError;
use crate::types::TermYears;
use crate::AssumableResult;

/// Term of the market-rate loan the assumption is compared against. The
/// standard 30-year fixed product buyers shop against, independent of how
/// many years remain on the assumed loan.
pub const NEW_MORTGAGE_TERM_YEARS: TermYears = 30;

/// Term of the second lien that finances an equity gap. Typical second
/// mortgages amortize faster than the first.
pub const SECOND_MORTGAGE_TERM_YEARS: TermYears = 15;

/// Horizon over which annual savings are projected (undiscounted).
pub const SAVINGS_HORIZON_YEARS: TermYears = 30;

/// Product-term conventions the savings comparison runs under.
///
/// These are policy, not physics: the defaults reproduce the published
/// calculator, and a caller may override any of them (e.g. from a config
/// file) without touching the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanPolicy {
    /// Term of the comparison new mortgage
    pub new_mortgage_term_years: TermYears,
    /// Term of the equity-gap second mortgage
    pub second_mortgage_term_years: TermYears,
    /// Years of annual savings summed into the long-horizon total
    pub savings_horizon_years: TermYears,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        LoanPolicy {
            new_mortgage_term_years: NEW_MORTGAGE_TERM_YEARS,
            second_mortgage_term_years: SECOND_MORTGAGE_TERM_YEARS,
            savings_horizon_years: SAVINGS_HORIZON_YEARS,
        }
    }
}

impl LoanPolicy {
    pub fn validate(&self) -> AssumableResult<()> {
        if self.new_mortgage_term_years == 0 {
            return Err(AssumableError::invalid(
                "new_mortgage_term_years",
                "New mortgage term must be at least one year",
            ));
        }
        if self.second_mortgage_term_years == 0 {
            return Err(AssumableError::invalid(
                "second_mortgage_term_years",
                "Second mortgage term must be at least one year",
            ));
        }
        if self.savings_horizon_years == 0 {
            return Err(AssumableError::invalid(
                "savings_horizon_years",
                "Savings horizon must be at least one year",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_published_calculator() {
        let policy = LoanPolicy::default();
        assert_eq!(policy.new_mortgage_term_years, 30);
        assert_eq!(policy.second_mortgage_term_years, 15);
        assert_eq!(policy.savings_horizon_years, 30);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_partial_policy_fills_defaults() {
        let policy: LoanPolicy =
            serde_json::from_str(r#"{"second_mortgage_term_years": 20}"#).unwrap();
        assert_eq!(policy.second_mortgage_term_years, 20);
        assert_eq!(policy.new_mortgage_term_years, NEW_MORTGAGE_TERM_YEARS);
        assert_eq!(policy.savings_horizon_years, SAVINGS_HORIZON_YEARS);
    }

    #[test]
    fn test_zero_term_policy_rejected() {
        let policy = LoanPolicy {
            savings_horizon_years: 0,
            ..LoanPolicy::default()
        };
        let err = policy.validate().unwrap_err();
        assert_eq!(err.field(), Some("savings_horizon_years"));
    }
}
