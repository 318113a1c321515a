use crate::error::AssumableError;
use crate::types::{Money, RatePercent, TermYears};
use crate::AssumableResult;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Monthly decimal rate for an annual percentage rate (6.0 -> 0.005).
pub fn monthly_rate(annual_rate_percent: RatePercent) -> f64 {
    annual_rate_percent / 100.0 / f64::from(MONTHS_PER_YEAR)
}

/// Number of monthly payments in a term of whole years.
pub fn payment_count(years: TermYears) -> u32 {
    years.saturating_mul(MONTHS_PER_YEAR)
}

/// Fixed monthly payment that fully amortizes `principal` over `years`.
///
/// payment = P * r / (1 - (1+r)^-n), with r the monthly rate and
/// n = years * 12. The discount factor is taken through `ln_1p`/`exp_m1` so
/// the payment stays accurate for rates near zero and for rates large enough
/// that (1+r)^n would overflow. A zero rate falls back to straight-line P / n.
///
/// Rejects a zero term, a negative principal or rate, and any non-finite
/// argument with `InvalidArgument`; the result is always finite and >= 0.
pub fn monthly_payment(
    principal: Money,
    annual_rate_percent: RatePercent,
    years: TermYears,
) -> AssumableResult<Money> {
    validate_payment_args(principal, annual_rate_percent, years)?;

    let n = payment_count(years);
    let r = monthly_rate(annual_rate_percent);

    // Subnormal percentages underflow to a zero monthly rate.
    if r == 0.0 {
        return Ok(principal / f64::from(n));
    }

    let ln_growth = f64::from(n) * r.ln_1p();
    let payment = principal * r / -(-ln_growth).exp_m1();

    // Only P * r itself can overflow here.
    if !payment.is_finite() {
        return Err(AssumableError::invalid(
            "annual_rate_percent",
            format!("Rate {annual_rate_percent}% on {principal} overflows the payment"),
        ));
    }

    Ok(payment)
}

/// Whole-year term from a caller that only has a float (JSON, JavaScript).
/// Fractional, negative, non-finite and out-of-range values are rejected
/// rather than truncated.
pub fn term_from_years(years: f64) -> AssumableResult<TermYears> {
    if !years.is_finite() || years < 0.0 || years.fract() != 0.0 {
        return Err(AssumableError::invalid(
            "years",
            format!("Loan term must be a whole number of years, got {years}"),
        ));
    }
    if years > f64::from(TermYears::MAX) {
        return Err(AssumableError::invalid(
            "years",
            format!("Loan term of {years} years is out of range"),
        ));
    }
    Ok(years as TermYears)
}

fn validate_payment_args(
    principal: Money,
    annual_rate_percent: RatePercent,
    years: TermYears,
) -> AssumableResult<()> {
    if years == 0 {
        return Err(AssumableError::invalid(
            "years",
            "Loan term must be at least one year",
        ));
    }
    if years.checked_mul(MONTHS_PER_YEAR).is_none() {
        return Err(AssumableError::invalid(
            "years",
            format!("Loan term of {years} years is out of range"),
        ));
    }
    if !principal.is_finite() {
        return Err(AssumableError::invalid(
            "principal",
            format!("Principal must be a finite amount, got {principal}"),
        ));
    }
    if principal < 0.0 {
        return Err(AssumableError::invalid(
            "principal",
            format!("Principal cannot be negative, got {principal}"),
        ));
    }
    if !annual_rate_percent.is_finite() {
        return Err(AssumableError::invalid(
            "annual_rate_percent",
            format!("Rate must be a finite percentage, got {annual_rate_percent}"),
        ));
    }
    if annual_rate_percent < 0.0 {
        return Err(AssumableError::invalid(
            "annual_rate_percent",
            format!("Rate cannot be negative, got {annual_rate_percent}"),
        ));
    }
    Ok(())
}
