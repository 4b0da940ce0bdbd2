use serde::{Deserialize, Serialize};

/// 한 달 사용량과 요금 단가를 담는 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillingInput {
    /// 월 사용량 [kWh]
    pub units: f64,
    /// 피크 시간대 사용 비율 [%]
    pub peak_usage_percent: f64,
    /// 일반 미터 단가 [통화/kWh]
    pub normal_rate: f64,
    /// TOU 피크 단가 [통화/kWh]
    pub peak_rate: f64,
    /// TOU 오프피크 단가 [통화/kWh]
    pub off_peak_rate: f64,
    /// 연료비 조정 단가(FT) [통화/kWh]. 0 또는 음수 허용.
    pub ft_rate: f64,
}

impl Default for BillingInput {
    fn default() -> Self {
        Self {
            units: 300.0,
            peak_usage_percent: 30.0,
            normal_rate: 4.18,
            peak_rate: 5.7982,
            off_peak_rate: 2.6369,
            ft_rate: 0.3972,
        }
    }
}

impl BillingInput {
    /// 계산 전제 조건을 만족하는지 확인한다.
    pub fn is_valid(&self) -> bool {
        validate(self)
    }
}

/// 입력이 계산 가능한 범위인지 검사한다.
///
/// 사용량과 세 가지 단가는 0보다 커야 하고 피크 비율은 0~100 사이여야 한다.
/// FT 단가는 제약이 없다. NaN 값은 비교에서 모두 거짓이 되므로 자연히 거부된다.
pub fn validate(input: &BillingInput) -> bool {
    input.units > 0.0
        && input.normal_rate > 0.0
        && input.peak_rate > 0.0
        && input.off_peak_rate > 0.0
        && input.peak_usage_percent >= 0.0
        && input.peak_usage_percent <= 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BillingInput {
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
    fn accepts_boundary_percentages() {
        let mut input = sample();
        input.peak_usage_percent = 0.0;
        assert!(validate(&input));
        input.peak_usage_percent = 100.0;
        assert!(validate(&input));
    }

    #[test]
    fn ft_rate_is_unconstrained() {
        let mut input = sample();
        input.ft_rate = 0.0;
        assert!(input.is_valid());
        input.ft_rate = -0.35;
        assert!(input.is_valid());
    }

    #[test]
    fn rejects_nan_units() {
        let mut input = sample();
        input.units = f64::NAN;
        assert!(!validate(&input));
    }

    #[test]
    fn default_form_values_are_valid() {
        assert!(BillingInput::default().is_valid());
    }
}
