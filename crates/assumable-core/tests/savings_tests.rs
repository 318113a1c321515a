use approx::assert_abs_diff_eq;
use assumable_core::amortization::monthly_payment;
use assumable_core::assumption::analysis::analyze_savings;
use assumable_core::assumption::policy::LoanPolicy;
use assumable_core::assumption::savings::{calculate_savings, CalculationInput};
use assumable_core::format::{format_currency, format_percentage};
use assumable_core::AssumableError;
use pretty_assertions::assert_eq;

const TOL: f64 = 1e-6;

// ===========================================================================
// Reference scenario: $400k home, $300k at 3% with 27 years left, 7% market,
// $20k down, 8% second mortgage
// ===========================================================================

#[test]
fn test_reference_scenario_relationships() {
    let input = CalculationInput::calculator_defaults();
    let out = calculate_savings(&input).unwrap();

    let first = monthly_payment(300_000.0, 3.0, 27).unwrap();
    let second = monthly_payment(80_000.0, 8.0, 15).unwrap();
    let new = monthly_payment(380_000.0, 7.0, 30).unwrap();

    assert_eq!(out.equity_gap, 80_000.0);
    assert_abs_diff_eq!(out.assumable_monthly_payment, first + second, epsilon = TOL);
    assert_abs_diff_eq!(out.new_mortgage_monthly_payment, new, epsilon = TOL);
    assert_abs_diff_eq!(out.monthly_savings, new - first - second, epsilon = TOL);
    assert_abs_diff_eq!(out.annual_savings, out.monthly_savings * 12.0, epsilon = TOL);
    assert_abs_diff_eq!(
        out.thirty_year_total_savings,
        out.annual_savings * 30.0,
        epsilon = TOL
    );
    assert_abs_diff_eq!(
        out.blended_rate.unwrap(),
        (3.0 * 300_000.0 + 8.0 * 80_000.0) / 380_000.0,
        epsilon = TOL
    );
    assert!(out.monthly_savings > 0.0);
}

#[test]
fn test_reference_scenario_display_strings() {
    let out = calculate_savings(&CalculationInput::calculator_defaults()).unwrap();
    assert_eq!(format_currency(out.assumable_monthly_payment), "$2,117");
    assert_eq!(format_currency(out.new_mortgage_monthly_payment), "$2,528");
    assert_eq!(format_currency(out.monthly_savings), "$412");
    assert_eq!(format_percentage(out.blended_rate.unwrap()), "4.05%");
}

#[test]
fn test_marketing_example_figures() {
    let out = calculate_savings(&CalculationInput::marketing_example()).unwrap();
    assert!(out.blended_rate.is_none());
    assert_eq!(format_currency(out.assumable_monthly_payment), "$1,352");
    assert_eq!(format_currency(out.new_mortgage_monthly_payment), "$2,528");
    assert_eq!(format_currency(out.monthly_savings), "$1,176");
}

#[test]
fn test_same_input_same_output() {
    let input = CalculationInput::calculator_defaults();
    let a = calculate_savings(&input).unwrap();
    let b = calculate_savings(&input).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_invalid_argument_propagates_from_primitive() {
    let input = CalculationInput {
        current_market_rate: -2.0,
        ..CalculationInput::calculator_defaults()
    };
    match calculate_savings(&input).unwrap_err() {
        AssumableError::InvalidArgument { field, .. } => {
            assert_eq!(field, "current_market_rate");
        }
        e => panic!("Expected InvalidArgument, got {e:?}"),
    }
}

#[test]
fn test_invalid_policy_rejected_before_computation() {
    let policy = LoanPolicy {
        new_mortgage_term_years: 0,
        ..LoanPolicy::default()
    };
    let err = analyze_savings(&CalculationInput::calculator_defaults(), &policy).unwrap_err();
    assert_eq!(err.field(), Some("new_mortgage_term_years"));
}

#[test]
fn test_analysis_agrees_with_calculation() {
    let input = CalculationInput::calculator_defaults();
    let analysis = analyze_savings(&input, &LoanPolicy::default()).unwrap();
    assert_eq!(analysis.result.savings, calculate_savings(&input).unwrap());
    assert!(analysis.methodology.contains("30-year new mortgage"));
}

#[test]
fn test_json_round_trip_keeps_absent_blended_rate_absent() {
    let out = calculate_savings(&CalculationInput::marketing_example()).unwrap();
    let json = serde_json::to_string(&out).unwrap();
    assert!(!json.contains("blended_rate"));
    let back: assumable_core::assumption::savings::CalculationResult =
        serde_json::from_str(&json).unwrap();
    assert_eq!(back.blended_rate, None);
}
