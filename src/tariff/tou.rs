use serde::{Deserialize, Serialize};

use super::input::BillingInput;

/// TOU(시간대별) 미터 요금 내역.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouCost {
    /// 피크 요금
    pub peak_cost: f64,
    /// 오프피크 요금
    pub off_peak_cost: f64,
    /// 피크 사용량 [kWh]
    pub peak_units: f64,
    /// 오프피크 사용량 [kWh]
    pub off_peak_units: f64,
    /// FT 요금. 시간대 구분 없이 전체 사용량에 부과된다.
    pub ft: f64,
    /// 합계
    pub total: f64,
    /// kWh당 평균 요금
    pub per_unit: f64,
}

impl TouCost {
    /// 피크 + 오프피크 요금(FT 제외).
    pub fn base(&self) -> f64 {
        self.peak_cost + self.off_peak_cost
    }
}

/// TOU 미터 요금을 계산한다. 입력은 `validate`를 통과한 값이어야 한다.
pub fn compute_tou(input: &BillingInput) -> TouCost {
    let peak_units = input.units * (input.peak_usage_percent / 100.0);
    let off_peak_units = input.units * ((100.0 - input.peak_usage_percent) / 100.0);

    let peak_cost = peak_units * input.peak_rate;
    let off_peak_cost = off_peak_units * input.off_peak_rate;
    let base = peak_cost + off_peak_cost;
    let ft = input.units * input.ft_rate;
    let total = base + ft;

    TouCost {
        peak_cost,
        off_peak_cost,
        peak_units,
        off_peak_units,
        ft,
        total,
        per_unit: total / input.units,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_units_by_peak_share() {
        let cost = compute_tou(&BillingInput {
            units: 200.0,
            peak_usage_percent: 25.0,
            normal_rate: 4.0,
            peak_rate: 6.0,
            off_peak_rate: 2.0,
            ft_rate: 0.0,
        });
        assert!((cost.peak_units - 50.0).abs() < 1e-9);
        assert!((cost.off_peak_units - 150.0).abs() < 1e-9);
        assert!((cost.base() - 600.0).abs() < 1e-9);
        assert!((cost.per_unit - 3.0).abs() < 1e-9);
    }
}
