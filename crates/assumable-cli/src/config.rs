use assumable_core::assumption::policy::LoanPolicy;
use tracing::{debug, info};

use crate::input;

/// Load the loan-term policy, falling back to the published defaults.
/// Keys missing from the file keep their default values.
pub fn load_policy(path: Option<&str>) -> Result<LoanPolicy, Box<dyn std::error::Error>> {
    let policy = match path {
        Some(path) => {
            let policy: LoanPolicy = input::file::read_document(path)?;
            info!(
                path,
                new_term = policy.new_mortgage_term_years,
                second_term = policy.second_mortgage_term_years,
                horizon = policy.savings_horizon_years,
                "loaded loan policy"
            );
            policy
        }
        None => {
            debug!("using default loan policy");
            LoanPolicy::default()
        }
    };
    policy.validate()?;
    Ok(policy)
}
