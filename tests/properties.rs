//! 유효 입력 전체에 대한 불변식 검사.
use proptest::prelude::*;
use tou_bill_calculator::tariff::{calculate, compare, BillingInput, Outcome};

fn valid_input() -> impl Strategy<Value = BillingInput> {
    (
        0.01f64..100_000.0,
        0.0f64..=100.0,
        0.01f64..50.0,
        0.01f64..50.0,
        0.01f64..50.0,
        -5.0f64..5.0,
    )
        .prop_map(
            |(units, peak_usage_percent, normal_rate, peak_rate, off_peak_rate, ft_rate)| {
                BillingInput {
                    units,
                    peak_usage_percent,
                    normal_rate,
                    peak_rate,
                    off_peak_rate,
                    ft_rate,
                }
            },
        )
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn peak_and_off_peak_units_sum_to_total(input in valid_input()) {
        let report = calculate(&input).expect("generated input is valid");
        prop_assert!(close(report.tou.peak_units + report.tou.off_peak_units, input.units));
    }

    #[test]
    fn totals_are_base_plus_ft(input in valid_input()) {
        let report = calculate(&input).expect("generated input is valid");
        prop_assert_eq!(report.regular.total, report.regular.base + report.regular.ft);
        prop_assert_eq!(report.tou.total, report.tou.base() + report.tou.ft);
        prop_assert!(close(report.regular.per_unit * input.units, report.regular.total));
    }

    #[test]
    fn comparing_a_total_with_itself_is_equal(total in 0.01f64..1e7) {
        let c = compare(total, total);
        prop_assert_eq!(c.outcome, Outcome::Equal);
        prop_assert_eq!(c.savings, 0.0);
    }
}
