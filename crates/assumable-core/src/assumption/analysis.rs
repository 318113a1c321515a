use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::assumption::policy::LoanPolicy;
use crate::assumption::savings::{evaluate, CalculationInput, CalculationResult};
use crate::types::{ComputationOutput, Money};
use crate::AssumableResult;

/// Savings comparison plus the per-loan figures a results panel shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsBreakdown {
    #[serde(flatten)]
    pub savings: CalculationResult,
    /// Payment on the assumed loan alone
    pub first_mortgage_payment: Money,
    /// Payment on the equity-gap loan; zero when none was used
    pub second_mortgage_payment: Money,
    /// Principal of the comparison new mortgage
    pub new_loan_amount: Money,
    /// New payment as a multiple of the assumable payment. Absent when the
    /// assumable payment is zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_ratio: Option<f64>,
}

#[derive(Serialize)]
struct Assumptions<'a> {
    input: &'a CalculationInput,
    policy: &'a LoanPolicy,
}

/// Run the savings comparison and wrap it with methodology, assumptions and
/// reviewer-facing warnings.
pub fn analyze_savings(
    input: &CalculationInput,
    policy: &LoanPolicy,
) -> AssumableResult<ComputationOutput<SavingsBreakdown>> {
    let start = Instant::now();
    let (savings, legs) = evaluate(input, policy)?;
    let warnings = collect_warnings(input, &savings, policy);

    let payment_ratio = if savings.assumable_monthly_payment > 0.0 {
        Some(savings.new_mortgage_monthly_payment / savings.assumable_monthly_payment)
    } else {
        None
    };

    let breakdown = SavingsBreakdown {
        savings,
        first_mortgage_payment: legs.first_mortgage_payment,
        second_mortgage_payment: legs.second_mortgage_payment,
        new_loan_amount: legs.new_loan_amount,
        payment_ratio,
    };

    let methodology = format!(
        "Fixed-rate amortization: assumed loan over remaining term vs {}-year new mortgage; \
         equity gap financed over {} years; savings projected over {} years, undiscounted",
        policy.new_mortgage_term_years,
        policy.second_mortgage_term_years,
        policy.savings_horizon_years,
    );

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(ComputationOutput::new(
        breakdown,
        methodology,
        &Assumptions { input, policy },
        warnings,
        elapsed,
    ))
}

fn collect_warnings(
    input: &CalculationInput,
    savings: &CalculationResult,
    policy: &LoanPolicy,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if input.assumable_loan_balance > input.home_price {
        warnings.push(format!(
            "Assumable balance ({}) exceeds home price ({}); the seller is underwater",
            input.assumable_loan_balance, input.home_price
        ));
    }

    if savings.equity_gap > 0.0 {
        match input.second_mortgage_rate {
            None => warnings.push(format!(
                "Equity gap of {} is not financed; it is assumed to be paid in cash",
                savings.equity_gap
            )),
            Some(rate) if rate > input.current_market_rate => warnings.push(format!(
                "Second mortgage rate ({rate}%) is above the market rate ({}%)",
                input.current_market_rate
            )),
            Some(_) => {}
        }
    }

    if savings.monthly_savings < 0.0 {
        warnings.push(
            "Assuming this loan costs more per month than a new mortgage".to_string(),
        );
    }

    if policy.savings_horizon_years > input.remaining_loan_term {
        warnings.push(format!(
            "Savings are projected over {} years but the assumed loan pays off in {}",
            policy.savings_horizon_years, input.remaining_loan_term
        ));
    }

    warnings
}
