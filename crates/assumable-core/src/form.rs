//! Form-layer contract for the interactive calculator.
//!
//! The calculation engine only rejects mathematically undefined input. The
//! field ranges a user is held to live here, along with the recompute-on-edit
//! entry point that tolerates half-typed values.

use serde::{Deserialize, Serialize};

use crate::assumption::savings::{calculate_savings, CalculationInput, CalculationResult};
use crate::types::{Money, RatePercent, TermYears};

/// Inclusive bounds for one numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl FieldRange {
    pub const fn at_least(min: f64) -> Self {
        FieldRange { min, max: None }
    }

    pub const fn between(min: f64, max: f64) -> Self {
        FieldRange {
            min,
            max: Some(max),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

/// Ranges enforced before a calculation is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormRules {
    pub home_price: FieldRange,
    pub assumable_loan_balance: FieldRange,
    pub assumable_interest_rate: FieldRange,
    pub remaining_loan_term: FieldRange,
    pub current_market_rate: FieldRange,
    pub down_payment: FieldRange,
    pub second_mortgage_rate: FieldRange,
}

impl Default for FormRules {
    fn default() -> Self {
        FormRules {
            home_price: FieldRange::at_least(1.0),
            assumable_loan_balance: FieldRange::at_least(1.0),
            assumable_interest_rate: FieldRange::between(0.0, 10.0),
            remaining_loan_term: FieldRange::between(1.0, 50.0),
            current_market_rate: FieldRange::between(0.0, 15.0),
            down_payment: FieldRange::at_least(0.0),
            second_mortgage_rate: FieldRange::between(0.0, 15.0),
        }
    }
}

/// A field outside its allowed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub value: f64,
    pub message: String,
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} (got {})", self.field, self.message, self.value)
    }
}

impl FormRules {
    /// Check every field; returns all violations, not just the first.
    pub fn validate(&self, input: &CalculationInput) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let checks = [
            ("home_price", input.home_price, self.home_price),
            (
                "assumable_loan_balance",
                input.assumable_loan_balance,
                self.assumable_loan_balance,
            ),
            (
                "assumable_interest_rate",
                input.assumable_interest_rate,
                self.assumable_interest_rate,
            ),
            (
                "remaining_loan_term",
                f64::from(input.remaining_loan_term),
                self.remaining_loan_term,
            ),
            (
                "current_market_rate",
                input.current_market_rate,
                self.current_market_rate,
            ),
            ("down_payment", input.down_payment, self.down_payment),
        ];

        for (field, value, range) in checks {
            if !range.contains(value) {
                violations.push(violation(field, value, &range));
            }
        }

        if let Some(rate) = input.second_mortgage_rate {
            if !self.second_mortgage_rate.contains(rate) {
                violations.push(violation(
                    "second_mortgage_rate",
                    rate,
                    &self.second_mortgage_rate,
                ));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn violation(field: &str, value: f64, range: &FieldRange) -> FieldViolation {
    let message = match range.max {
        Some(max) => format!("must be between {} and {}", range.min, max),
        None => format!("must be at least {}", range.min),
    };
    FieldViolation {
        field: field.to_string(),
        value,
        message,
    }
}

/// Validate against the calculator's default ranges.
pub fn validate_form(input: &CalculationInput) -> Result<(), Vec<FieldViolation>> {
    FormRules::default().validate(input)
}

/// Form state while the user is typing: any field may still be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormValues {
    pub home_price: Option<Money>,
    pub assumable_loan_balance: Option<Money>,
    pub assumable_interest_rate: Option<RatePercent>,
    pub remaining_loan_term: Option<TermYears>,
    pub current_market_rate: Option<RatePercent>,
    pub down_payment: Option<Money>,
    pub second_mortgage_rate: Option<RatePercent>,
}

impl FormValues {
    /// A complete input once every required field is filled. An empty down
    /// payment counts as zero.
    pub fn to_input(&self) -> Option<CalculationInput> {
        Some(CalculationInput {
            home_price: self.home_price?,
            assumable_loan_balance: self.assumable_loan_balance?,
            assumable_interest_rate: self.assumable_interest_rate?,
            remaining_loan_term: self.remaining_loan_term?,
            current_market_rate: self.current_market_rate?,
            down_payment: self.down_payment.unwrap_or(0.0),
            second_mortgage_rate: self.second_mortgage_rate,
        })
    }
}

impl From<&CalculationInput> for FormValues {
    fn from(input: &CalculationInput) -> Self {
        FormValues {
            home_price: Some(input.home_price),
            assumable_loan_balance: Some(input.assumable_loan_balance),
            assumable_interest_rate: Some(input.assumable_interest_rate),
            remaining_loan_term: Some(input.remaining_loan_term),
            current_market_rate: Some(input.current_market_rate),
            down_payment: Some(input.down_payment),
            second_mortgage_rate: input.second_mortgage_rate,
        }
    }
}

/// Recompute on every edit. Incomplete or mid-edit values that the engine
/// rejects yield `None` so the form keeps showing its last good result;
/// the error itself is the engine's to report, not the form's.
pub fn recalculate(values: &FormValues) -> Option<CalculationResult> {
    let input = values.to_input()?;
    calculate_savings(&input).ok()
}
