use serde::{Deserialize, Serialize};

/// Monetary amounts in dollars. Plain `f64`: the savings figures are
/// financial approximations and are never rounded mid-calculation.
pub type Money = f64;

/// Annual rates expressed as percentages (3.0 = 3%). Never as decimals.
pub type RatePercent = f64;

/// Whole loan terms in years.
pub type TermYears = u32;

/// Envelope returned by the reporting entry points: the figures, how they
/// were derived, what they were derived from, and anything a reviewer
/// should double-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub engine: String,
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

impl<T: Serialize> ComputationOutput<T> {
    pub fn new(
        result: T,
        methodology: String,
        assumptions: &impl Serialize,
        warnings: Vec<String>,
        elapsed_us: u64,
    ) -> Self {
        ComputationOutput {
            result,
            methodology,
            assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
            warnings,
            metadata: ComputationMetadata {
                engine: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                computation_time_us: elapsed_us,
                precision: "f64_ieee754".to_string(),
            },
        }
    }
}
