//! 대표 요금 시나리오 회귀 테스트.
use tou_bill_calculator::tariff::{calculate, compare, BillingInput, Outcome, Plan};

fn scenario(peak_usage_percent: f64) -> BillingInput {
    BillingInput {
        units: 300.0,
        peak_usage_percent,
        normal_rate: 4.0,
        peak_rate: 5.5,
        off_peak_rate: 2.8,
        ft_rate: 0.1,
    }
}

#[test]
fn all_off_peak_favours_tou() {
    let report = calculate(&scenario(0.0)).expect("valid input");
    assert!((report.regular.total - 1230.0).abs() < 1e-9);
    assert!((report.tou.total - 870.0).abs() < 1e-9);
    assert_eq!(report.comparison.outcome, Outcome::TouCheaper);
    assert!((report.comparison.savings - 360.0).abs() < 1e-9);
    assert!(
        (report.comparison.savings_percent - 29.268).abs() < 1e-3,
        "percent={}",
        report.comparison.savings_percent
    );
    assert!((report.comparison.annual_savings() - 4320.0).abs() < 1e-9);
}

#[test]
fn all_peak_favours_regular() {
    let report = calculate(&scenario(100.0)).expect("valid input");
    assert!((report.tou.total - 1680.0).abs() < 1e-9);
    assert_eq!(report.comparison.outcome, Outcome::RegularCheaper);
    assert!((report.comparison.savings + 450.0).abs() < 1e-9);
    assert_eq!(report.comparison.recommended_plan(), Some(Plan::Regular));
    assert_eq!(report.tou.off_peak_units, 0.0);
}

#[test]
fn identical_rates_are_equal() {
    let report = calculate(&BillingInput {
        units: 100.0,
        peak_usage_percent: 50.0,
        normal_rate: 5.0,
        peak_rate: 5.0,
        off_peak_rate: 5.0,
        ft_rate: 0.0,
    })
    .expect("valid input");
    assert_eq!(report.regular.total, 500.0);
    assert_eq!(report.tou.total, 500.0);
    assert_eq!(report.comparison.outcome, Outcome::Equal);
    assert_eq!(report.comparison.savings, 0.0);
}

#[test]
fn ft_charge_is_shared_by_both_plans() {
    let report = calculate(&scenario(40.0)).expect("valid input");
    assert_eq!(report.regular.ft, report.tou.ft);
    assert!((report.regular.ft - 30.0).abs() < 1e-9);
}

#[test]
fn negative_ft_credit_lowers_totals() {
    let mut input = scenario(0.0);
    input.ft_rate = -0.2;
    let report = calculate(&input).expect("ft credit is allowed");
    assert!((report.regular.total - 1140.0).abs() < 1e-9);
    assert!((report.regular.per_unit - 3.8).abs() < 1e-9);
}

#[test]
fn compare_same_value_is_equal() {
    let c = compare(870.0, 870.0);
    assert_eq!(c.outcome, Outcome::Equal);
    assert_eq!(c.savings, 0.0);
}
