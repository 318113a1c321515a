use clap::Args;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use assumable_core::amortization::{monthly_payment, payment_count};
use assumable_core::types::{Money, RatePercent, TermYears};

/// Arguments for a single-loan payment
#[derive(Args)]
pub struct PaymentArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: Money,

    /// Annual interest rate in percent (e.g. 6.5)
    #[arg(long)]
    pub rate: RatePercent,

    /// Term in whole years
    #[arg(long, default_value_t = 30)]
    pub years: TermYears,
}

#[derive(Serialize)]
struct PaymentOutput {
    principal: Money,
    annual_rate_percent: RatePercent,
    years: TermYears,
    payment_count: u32,
    monthly_payment: Money,
    total_paid: Money,
    total_interest: Money,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payment = monthly_payment(args.principal, args.rate, args.years)?;
    let count = payment_count(args.years);
    let total_paid = payment * f64::from(count);
    debug!(payment, count, "amortized single loan");

    let output = PaymentOutput {
        principal: args.principal,
        annual_rate_percent: args.rate,
        years: args.years,
        payment_count: count,
        monthly_payment: payment,
        total_paid,
        total_interest: total_paid - args.principal,
    };
    Ok(serde_json::to_value(output)?)
}
