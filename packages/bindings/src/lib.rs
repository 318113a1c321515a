//! Node bindings so the site's build step and API routes can call the
//! calculation engine. Inputs and outputs cross the boundary as JSON strings
//! with snake_case keys.

use napi::Result as NapiResult;
use napi_derive::napi;

use assumable_core::assumption::{analysis, policy::LoanPolicy, savings};
use assumable_core::{amortization, format};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_policy(policy_json: Option<String>) -> NapiResult<LoanPolicy> {
    match policy_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error),
        None => Ok(LoanPolicy::default()),
    }
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// `years` arrives as a JS number; fractional terms are rejected, not truncated.
#[napi]
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, years: f64) -> NapiResult<f64> {
    let years = amortization::term_from_years(years).map_err(to_napi_error)?;
    amortization::monthly_payment(principal, annual_rate_percent, years).map_err(to_napi_error)
}

#[napi]
pub fn calculate_savings(input_json: String, policy_json: Option<String>) -> NapiResult<String> {
    let input: savings::CalculationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let policy = parse_policy(policy_json)?;
    let output =
        savings::calculate_savings_with_policy(&input, &policy).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn analyze_savings(input_json: String, policy_json: Option<String>) -> NapiResult<String> {
    let input: savings::CalculationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let policy = parse_policy(policy_json)?;
    let output = analysis::analyze_savings(&input, &policy).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn marketing_example() -> NapiResult<String> {
    let input = savings::CalculationInput::marketing_example();
    let output = savings::calculate_savings(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Form layer
// ---------------------------------------------------------------------------

/// Returns a JSON array of field violations; empty when the input is in range.
#[napi]
pub fn validate_form(input_json: String) -> NapiResult<String> {
    let input: savings::CalculationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let violations = assumable_core::form::validate_form(&input).err().unwrap_or_default();
    serde_json::to_string(&violations).map_err(to_napi_error)
}

/// Recompute from partially-filled form values. Returns `null` while the
/// form is incomplete or mid-edit.
#[napi]
pub fn recalculate(values_json: String) -> NapiResult<Option<String>> {
    let values: assumable_core::form::FormValues =
        serde_json::from_str(&values_json).map_err(to_napi_error)?;
    assumable_core::form::recalculate(&values)
        .map(|result| serde_json::to_string(&result).map_err(to_napi_error))
        .transpose()
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[napi]
pub fn format_currency(amount: f64) -> String {
    format::format_currency(amount)
}

#[napi]
pub fn format_percentage(value: f64, decimals: Option<u32>) -> String {
    format::format_percentage_dp(value, decimals.unwrap_or(format::DEFAULT_PERCENT_DECIMALS))
}
