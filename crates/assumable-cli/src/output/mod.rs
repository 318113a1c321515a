pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use assumable_core::format::{format_currency, format_percentage};
use serde_json::Value;

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Result fields shown as whole dollars in human-facing output.
const MONEY_SUFFIXES: [&str; 6] = [
    "_payment",
    "_savings",
    "_gap",
    "_amount",
    "_paid",
    "_interest",
];

/// Render a result field for people: dollars for amounts, `%` for rates,
/// everything else as-is.
pub fn display_value(key: &str, value: &Value) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(x) if is_money_field(key) => format_currency(x),
            Some(x) if is_rate_field(key) => format_percentage(x),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(|v| display_value("", v))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

fn is_money_field(key: &str) -> bool {
    key == "principal" || MONEY_SUFFIXES.iter().any(|s| key.ends_with(s))
}

fn is_rate_field(key: &str) -> bool {
    key.ends_with("_rate") || key == "annual_rate_percent"
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_money_fields_as_dollars() {
        assert_eq!(display_value("monthly_savings", &json!(411.53)), "$412");
        assert_eq!(display_value("equity_gap", &json!(80000.0)), "$80,000");
        assert_eq!(display_value("principal", &json!(250000)), "$250,000");
    }

    #[test]
    fn test_rate_fields_as_percent() {
        assert_eq!(display_value("blended_rate", &json!(4.0526)), "4.05%");
    }

    #[test]
    fn test_other_fields_untouched() {
        assert_eq!(display_value("payment_count", &json!(360)), "360");
        assert_eq!(display_value("payment_ratio", &json!(1.5)), "1.5");
        assert_eq!(display_value("scenario", &json!("marketing")), "marketing");
    }
}
