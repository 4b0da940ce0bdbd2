use tou_bill_calculator::tariff::{calculate, validate, BillingInput, TariffError};

fn accepted() -> BillingInput {
    BillingInput {
        units: 100.0,
        peak_usage_percent: 30.0,
        normal_rate: 4.0,
        peak_rate: 5.0,
        off_peak_rate: 3.0,
        ft_rate: 0.2,
    }
}

#[test]
fn accepts_reference_input() {
    assert!(validate(&accepted()));
}

#[test]
fn rejects_out_of_range_fields() {
    let cases: [fn(&mut BillingInput); 7] = [
        |i| i.units = 0.0,
        |i| i.units = -5.0,
        |i| i.peak_usage_percent = -1.0,
        |i| i.peak_usage_percent = 101.0,
        |i| i.normal_rate = 0.0,
        |i| i.peak_rate = -2.0,
        |i| i.off_peak_rate = 0.0,
    ];
    for (n, mutate) in cases.iter().enumerate() {
        let mut input = accepted();
        mutate(&mut input);
        assert!(!validate(&input), "case {n} should be rejected: {input:?}");
    }
}

#[test]
fn calculate_refuses_invalid_input() {
    let mut input = accepted();
    input.units = 0.0;
    assert_eq!(calculate(&input), Err(TariffError::InvalidInput));
}
