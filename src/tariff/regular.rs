use serde::{Deserialize, Serialize};

use super::input::BillingInput;

/// 일반(단일 단가) 미터 요금 내역.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegularCost {
    /// 기본 요금 = 사용량 × 일반 단가
    pub base: f64,
    /// FT 요금 = 사용량 × FT 단가
    pub ft: f64,
    /// 합계
    pub total: f64,
    /// kWh당 평균 요금
    pub per_unit: f64,
}

/// 일반 미터 요금을 계산한다. 입력은 `validate`를 통과한 값이어야 한다.
pub fn compute_regular(input: &BillingInput) -> RegularCost {
    let base = input.units * input.normal_rate;
    let ft = input.units * input.ft_rate;
    let total = base + ft;
    RegularCost {
        base,
        ft,
        total,
        per_unit: total / input.units,
    }
}
