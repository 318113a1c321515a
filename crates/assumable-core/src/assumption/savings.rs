use serde::{Deserialize, Serialize};

use crate::amortization::{monthly_payment, MONTHS_PER_YEAR};
use crate::assumption::policy::LoanPolicy;
use crate::error::AssumableError;
use crate::types::{Money, RatePercent, TermYears};
use crate::AssumableResult;

/// Inputs for comparing an assumed loan against a new market-rate mortgage.
///
/// Range checks on user-entered values belong to the calling form layer;
/// the calculation itself only rejects what is mathematically undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Purchase price of the property
    pub home_price: Money,
    /// Remaining balance on the loan being assumed
    pub assumable_loan_balance: Money,
    /// Note rate on the assumed loan, in percent
    pub assumable_interest_rate: RatePercent,
    /// Whole years left on the assumed loan
    pub remaining_loan_term: TermYears,
    /// Rate a buyer would get on a new mortgage today, in percent
    pub current_market_rate: RatePercent,
    /// Buyer's cash contribution
    pub down_payment: Money,
    /// Rate on a second mortgage covering any equity gap. Absent means the
    /// gap is paid from cash outside the model; `Some(0.0)` is a real 0% loan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_mortgage_rate: Option<RatePercent>,
}

impl CalculationInput {
    /// Values the interactive calculator opens with.
    pub fn calculator_defaults() -> Self {
        CalculationInput {
            home_price: 400_000.0,
            assumable_loan_balance: 300_000.0,
            assumable_interest_rate: 3.0,
            remaining_loan_term: 27,
            current_market_rate: 7.0,
            down_payment: 20_000.0,
            second_mortgage_rate: Some(8.0),
        }
    }

    /// Illustrative scenario rendered into the home page at build time.
    /// Same deal as the calculator defaults, without a second mortgage.
    pub fn marketing_example() -> Self {
        CalculationInput {
            second_mortgage_rate: None,
            ..Self::calculator_defaults()
        }
    }

    /// Price less the assumed balance and the down payment. Zero or
    /// negative when the down payment covers the whole gap.
    pub fn equity_gap(&self) -> Money {
        self.home_price - self.assumable_loan_balance - self.down_payment
    }

    /// Principal of the comparison new mortgage.
    pub fn new_loan_amount(&self) -> Money {
        self.home_price - self.down_payment
    }
}

/// Outcome of one savings comparison. Every field is freshly computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// First-mortgage payment plus any second-mortgage payment
    pub assumable_monthly_payment: Money,
    /// Payment on `home_price - down_payment` at the market rate
    pub new_mortgage_monthly_payment: Money,
    /// New payment minus assumable payment; negative when assuming costs more
    pub monthly_savings: Money,
    pub annual_savings: Money,
    /// Annual savings times the savings horizon, not discounted
    pub thirty_year_total_savings: Money,
    pub equity_gap: Money,
    /// Principal-weighted rate across the assumed loan and the second
    /// mortgage. Present only when a second mortgage was used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blended_rate: Option<RatePercent>,
}

/// Per-loan figures behind a `CalculationResult`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PaymentLegs {
    pub first_mortgage_payment: Money,
    pub second_mortgage_payment: Money,
    pub new_loan_amount: Money,
}

/// Input field names reported when a loan leg fails to amortize.
struct LegFields {
    principal: &'static str,
    rate: &'static str,
    term: &'static str,
}

const ASSUMED_LEG: LegFields = LegFields {
    principal: "assumable_loan_balance",
    rate: "assumable_interest_rate",
    term: "remaining_loan_term",
};

const NEW_LEG: LegFields = LegFields {
    principal: "new_loan_amount",
    rate: "current_market_rate",
    term: "new_mortgage_term_years",
};

const SECOND_LEG: LegFields = LegFields {
    principal: "equity_gap",
    rate: "second_mortgage_rate",
    term: "second_mortgage_term_years",
};

/// Compare assuming the loan against a new mortgage under the default
/// 30-year / 15-year / 30-year-horizon policy.
pub fn calculate_savings(input: &CalculationInput) -> AssumableResult<CalculationResult> {
    calculate_savings_with_policy(input, &LoanPolicy::default())
}

/// Compare assuming the loan against a new mortgage.
///
/// 1. equity gap = price - assumed balance - down payment
/// 2. first payment amortizes the assumed balance over the remaining term
/// 3. new payment amortizes price - down payment over the policy's new term
/// 4. a positive gap with a second-mortgage rate is financed over the
///    policy's second term, and the blended rate is the principal-weighted
///    average of the two note rates
/// 5. savings = new payment - (first + second), scaled to a year and to the
///    savings horizon
pub fn calculate_savings_with_policy(
    input: &CalculationInput,
    policy: &LoanPolicy,
) -> AssumableResult<CalculationResult> {
    evaluate(input, policy).map(|(result, _)| result)
}

pub(crate) fn evaluate(
    input: &CalculationInput,
    policy: &LoanPolicy,
) -> AssumableResult<(CalculationResult, PaymentLegs)> {
    policy.validate()?;
    validate_input(input)?;

    let equity_gap = input.equity_gap();

    let first_mortgage_payment = amortize_leg(
        &ASSUMED_LEG,
        input.assumable_loan_balance,
        input.assumable_interest_rate,
        input.remaining_loan_term,
    )?;

    let new_loan_amount = input.new_loan_amount();
    let new_mortgage_monthly_payment = amortize_leg(
        &NEW_LEG,
        new_loan_amount,
        input.current_market_rate,
        policy.new_mortgage_term_years,
    )?;

    let (second_mortgage_payment, blended_rate) = match input.second_mortgage_rate {
        Some(second_rate) if equity_gap > 0.0 => {
            let payment = amortize_leg(
                &SECOND_LEG,
                equity_gap,
                second_rate,
                policy.second_mortgage_term_years,
            )?;
            let total_debt = input.assumable_loan_balance + equity_gap;
            let blended = (input.assumable_loan_balance / total_debt)
                * input.assumable_interest_rate
                + (equity_gap / total_debt) * second_rate;
            // Rounding in the weighted sum can land an ulp outside the note rates.
            let lo = input.assumable_interest_rate.min(second_rate);
            let hi = input.assumable_interest_rate.max(second_rate);
            (payment, Some(blended.clamp(lo, hi)))
        }
        _ => (0.0, None),
    };

    let assumable_monthly_payment = first_mortgage_payment + second_mortgage_payment;
    let monthly_savings = new_mortgage_monthly_payment - assumable_monthly_payment;
    let annual_savings = monthly_savings * f64::from(MONTHS_PER_YEAR);
    let thirty_year_total_savings = annual_savings * f64::from(policy.savings_horizon_years);

    let result = CalculationResult {
        assumable_monthly_payment,
        new_mortgage_monthly_payment,
        monthly_savings,
        annual_savings,
        thirty_year_total_savings,
        equity_gap,
        blended_rate,
    };

    let legs = PaymentLegs {
        first_mortgage_payment,
        second_mortgage_payment,
        new_loan_amount,
    };

    Ok((result, legs))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn amortize_leg(
    leg: &LegFields,
    principal: Money,
    rate: RatePercent,
    years: TermYears,
) -> AssumableResult<Money> {
    monthly_payment(principal, rate, years).map_err(|e| {
        let field = match e.field() {
            Some("principal") => leg.principal,
            Some("years") => leg.term,
            _ => leg.rate,
        };
        e.relabel(field)
    })
}

/// Fields that never reach the amortization primitive directly still have
/// to be finite, or NaN would leak into the gap and the savings.
fn validate_input(input: &CalculationInput) -> AssumableResult<()> {
    let amounts = [
        ("home_price", input.home_price),
        ("assumable_loan_balance", input.assumable_loan_balance),
        ("assumable_interest_rate", input.assumable_interest_rate),
        ("current_market_rate", input.current_market_rate),
        ("down_payment", input.down_payment),
    ];
    for (field, value) in amounts {
        if !value.is_finite() {
            return Err(AssumableError::invalid(
                field,
                format!("Must be a finite number, got {value}"),
            ));
        }
    }
    if let Some(rate) = input.second_mortgage_rate {
        if !rate.is_finite() {
            return Err(AssumableError::invalid(
                "second_mortgage_rate",
                format!("Must be a finite number, got {rate}"),
            ));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
