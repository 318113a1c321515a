//! Display formatting for calculator figures.
//!
//! Rounding goes through `rust_decimal` on the exact binary value of the
//! `f64`, ties away from zero, so `0.125` shows as `0.13` while `1.005`
//! (stored as 1.00499...) shows as `1.00`.

use rust_decimal::prelude::*;

use crate::types::{Money, RatePercent};

pub const DEFAULT_PERCENT_DECIMALS: u32 = 2;

/// Whole-dollar US currency: `$1,446`, `-$2,100`.
pub fn format_currency(amount: Money) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}$∞");
    }

    let magnitude = amount.abs();
    let digits = match round_half_away(magnitude, 0) {
        Some(rounded) => rounded.to_string(),
        None => format!("{magnitude:.0}"),
    };

    format!("{sign}${}", group_thousands(&digits))
}

/// Percentage with two decimals: `4.05%`.
pub fn format_percentage(value: RatePercent) -> String {
    format_percentage_dp(value, DEFAULT_PERCENT_DECIMALS)
}

/// Percentage with a fixed number of decimals and no grouping: `3.0%`.
pub fn format_percentage_dp(value: RatePercent, decimals: u32) -> String {
    if value.is_nan() {
        return "NaN%".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    if magnitude.is_infinite() {
        return format!("{sign}Infinity%");
    }

    let prec = decimals as usize;
    let body = match round_half_away(magnitude, decimals) {
        Some(rounded) => format!("{rounded:.prec$}"),
        None => format!("{magnitude:.prec$}"),
    };

    format!("{sign}{body}%")
}

/// `None` when the value or the scale is outside what `Decimal` holds.
fn round_half_away(value: f64, decimals: u32) -> Option<Decimal> {
    if decimals > 28 {
        return None;
    }
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_whole_dollars() {
        assert_eq!(format_currency(1352.1016), "$1,352");
        assert_eq!(format_currency(411.53), "$412");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1_000.0), "$1,000");
        assert_eq!(format_currency(148_152.0), "$148,152");
        assert_eq!(format_currency(12_345_678.9), "$12,345,679");
    }

    #[test]
    fn test_currency_half_rounds_away_from_zero() {
        assert_eq!(format_currency(2.5), "$3");
        assert_eq!(format_currency(-2.5), "-$3");
        assert_eq!(format_currency(1_499.5), "$1,500");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(-2_100.4), "-$2,100");
    }

    #[test]
    fn test_currency_huge_amount_falls_back() {
        let s = format_currency(1.0e30);
        assert!(s.starts_with("$1,000,000,000,000,000,0"), "got {s}");
    }

    #[test]
    fn test_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "$NaN");
        assert_eq!(format_currency(f64::INFINITY), "$∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-$∞");
    }

    #[test]
    fn test_percentage_default_two_decimals() {
        assert_eq!(format_percentage(3.0), "3.00%");
        assert_eq!(format_percentage(1_540_000.0 / 380_000.0), "4.05%");
    }

    #[test]
    fn test_percentage_custom_decimals() {
        assert_eq!(format_percentage_dp(7.0, 1), "7.0%");
        assert_eq!(format_percentage_dp(6.875, 0), "7%");
        assert_eq!(format_percentage_dp(4.052631, 4), "4.0526%");
    }

    #[test]
    fn test_percentage_exact_value_rounding() {
        // 0.125 is exact in binary, 1.005 is not
        assert_eq!(format_percentage(0.125), "0.13%");
        assert_eq!(format_percentage(1.005), "1.00%");
    }

    #[test]
    fn test_percentage_negative() {
        assert_eq!(format_percentage(-1.5), "-1.50%");
    }

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(2.5, 0), Some(dec!(3)));
        assert_eq!(round_half_away(0.125, 2), Some(dec!(0.13)));
        assert_eq!(round_half_away(1.0, 29), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }
}
