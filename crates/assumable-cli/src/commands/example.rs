use clap::Args;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use assumable_core::assumption::savings::{calculate_savings, CalculationInput};
use assumable_core::format::{format_currency, format_percentage};

/// Arguments for the home-page example figures
#[derive(Args)]
pub struct ExampleArgs {
    /// Finance the equity gap with the calculator's default 8% second mortgage
    #[arg(long)]
    pub with_second_mortgage: bool,
}

/// Display strings dropped into marketing copy at build time.
#[derive(Serialize)]
struct ExampleFigures {
    scenario: &'static str,
    home_price: String,
    assumable_rate: String,
    market_rate: String,
    equity_gap: String,
    assumable_monthly: String,
    new_mortgage_monthly: String,
    monthly_savings: String,
    annual_savings: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    blended_rate: Option<String>,
}

pub fn run_example(args: ExampleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (scenario, calc_input) = if args.with_second_mortgage {
        ("calculator_defaults", CalculationInput::calculator_defaults())
    } else {
        ("marketing_example", CalculationInput::marketing_example())
    };
    debug!(scenario, "rendering example figures");

    let result = calculate_savings(&calc_input)?;

    let figures = ExampleFigures {
        scenario,
        home_price: format_currency(calc_input.home_price),
        assumable_rate: format_percentage(calc_input.assumable_interest_rate),
        market_rate: format_percentage(calc_input.current_market_rate),
        equity_gap: format_currency(result.equity_gap),
        assumable_monthly: per_month(result.assumable_monthly_payment),
        new_mortgage_monthly: per_month(result.new_mortgage_monthly_payment),
        monthly_savings: per_month(result.monthly_savings),
        annual_savings: format_currency(result.annual_savings),
        blended_rate: result.blended_rate.map(format_percentage),
    };
    Ok(serde_json::to_value(figures)?)
}

fn per_month(amount: f64) -> String {
    format!("{}/mo", format_currency(amount))
}
