use clap::Args;
use serde_json::Value;
use tracing::{debug, info, warn};

use assumable_core::assumption::analysis::analyze_savings;
use assumable_core::assumption::savings::CalculationInput;
use assumable_core::form::validate_form;
use assumable_core::types::{Money, RatePercent, TermYears};

use crate::config;
use crate::input;

/// Arguments for an assumption-versus-new-mortgage comparison
#[derive(Args)]
pub struct SavingsArgs {
    /// Path to a JSON/TOML/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan-term policy file (new/second mortgage terms, savings horizon)
    #[arg(long)]
    pub policy: Option<String>,

    /// Skip the calculator's field-range checks
    #[arg(long)]
    pub skip_form_checks: bool,

    /// Purchase price of the home
    #[arg(long)]
    pub home_price: Option<Money>,

    /// Remaining balance on the loan being assumed
    #[arg(long)]
    pub loan_balance: Option<Money>,

    /// Rate on the assumed loan, in percent
    #[arg(long)]
    pub assumable_rate: Option<RatePercent>,

    /// Years left on the assumed loan
    #[arg(long)]
    pub remaining_term: Option<TermYears>,

    /// Rate on a new mortgage today, in percent
    #[arg(long)]
    pub market_rate: Option<RatePercent>,

    /// Buyer's cash down payment
    #[arg(long, default_value_t = 0.0)]
    pub down_payment: Money,

    /// Rate on a second mortgage covering any equity gap, in percent
    #[arg(long)]
    pub second_rate: Option<RatePercent>,
}

pub fn run_savings(args: SavingsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let policy = config::load_policy(args.policy.as_deref())?;

    // Explicit flags win over whatever happens to be piped in.
    let calc_input: CalculationInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if has_flag_input(&args) {
        input_from_flags(&args)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        input_from_flags(&args)?
    };
    debug!(?calc_input, "savings input");

    if args.skip_form_checks {
        info!("form range checks skipped");
    } else if let Err(violations) = validate_form(&calc_input) {
        let lines: Vec<String> = violations.iter().map(|v| format!("  {v}")).collect();
        return Err(format!("input out of range:\n{}", lines.join("\n")).into());
    }

    let analysis = analyze_savings(&calc_input, &policy)?;
    for w in &analysis.warnings {
        warn!("{w}");
    }
    info!(
        monthly_savings = analysis.result.savings.monthly_savings,
        "savings comparison complete"
    );

    Ok(serde_json::to_value(analysis)?)
}

fn has_flag_input(args: &SavingsArgs) -> bool {
    args.home_price.is_some()
        || args.loan_balance.is_some()
        || args.assumable_rate.is_some()
        || args.remaining_term.is_some()
        || args.market_rate.is_some()
        || args.second_rate.is_some()
}

fn input_from_flags(args: &SavingsArgs) -> Result<CalculationInput, Box<dyn std::error::Error>> {
    Ok(CalculationInput {
        home_price: args
            .home_price
            .ok_or("--home-price is required (or provide --input)")?,
        assumable_loan_balance: args
            .loan_balance
            .ok_or("--loan-balance is required (or provide --input)")?,
        assumable_interest_rate: args
            .assumable_rate
            .ok_or("--assumable-rate is required (or provide --input)")?,
        remaining_loan_term: args
            .remaining_term
            .ok_or("--remaining-term is required (or provide --input)")?,
        current_market_rate: args
            .market_rate
            .ok_or("--market-rate is required (or provide --input)")?,
        down_payment: args.down_payment,
        second_mortgage_rate: args.second_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_args() -> SavingsArgs {
        SavingsArgs {
            input: None,
            policy: None,
            skip_form_checks: false,
            home_price: None,
            loan_balance: None,
            assumable_rate: None,
            remaining_term: None,
            market_rate: None,
            down_payment: 0.0,
            second_rate: None,
        }
    }

    #[test]
    fn test_no_flags_falls_through_to_stdin() {
        assert!(!has_flag_input(&bare_args()));
    }

    #[test]
    fn test_any_flag_takes_precedence() {
        let args = SavingsArgs {
            market_rate: Some(7.0),
            ..bare_args()
        };
        assert!(has_flag_input(&args));
    }

    #[test]
    fn test_partial_flags_name_missing_field() {
        let args = SavingsArgs {
            home_price: Some(400_000.0),
            ..bare_args()
        };
        let err = input_from_flags(&args).unwrap_err();
        assert!(err.to_string().contains("--loan-balance"));
    }

    #[test]
    fn test_full_flags_build_input() {
        let args = SavingsArgs {
            home_price: Some(400_000.0),
            loan_balance: Some(300_000.0),
            assumable_rate: Some(3.0),
            remaining_term: Some(27),
            market_rate: Some(7.0),
            down_payment: 20_000.0,
            second_rate: Some(8.0),
            ..bare_args()
        };
        let input = input_from_flags(&args).unwrap();
        assert_eq!(input, CalculationInput::calculator_defaults());
    }
}
