use serde::{Deserialize, Serialize};

/// 연간 환산에 쓰는 개월 수.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// 요금제 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Regular,
    Tou,
}

/// 두 요금제 비교 결과 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// TOU가 더 저렴
    TouCheaper,
    /// 일반 미터가 더 저렴
    RegularCheaper,
    /// 두 요금이 정확히 같음
    Equal,
}

/// 일반 대비 TOU 절감액과 비율.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// 일반 합계 - TOU 합계. 음수면 TOU가 더 비싸다.
    pub savings: f64,
    /// 일반 합계 대비 절감 비율 [%]
    pub savings_percent: f64,
    pub outcome: Outcome,
}

impl Comparison {
    /// 월 차액의 절대값을 12개월로 환산한다.
    pub fn annual_savings(&self) -> f64 {
        self.savings.abs() * MONTHS_PER_YEAR
    }

    /// 추천 요금제. 같으면 None.
    pub fn recommended_plan(&self) -> Option<Plan> {
        match self.outcome {
            Outcome::TouCheaper => Some(Plan::Tou),
            Outcome::RegularCheaper => Some(Plan::Regular),
            Outcome::Equal => None,
        }
    }
}

/// 두 합계를 비교한다.
///
/// 일반 합계가 0이면 비율이 정의되지 않지만, 검증된 입력에서는 일반 합계가 항상 양수다.
/// 동일 판정은 부동소수점 정확 비교를 그대로 사용한다.
pub fn compare(regular_total: f64, tou_total: f64) -> Comparison {
    let savings = regular_total - tou_total;
    let savings_percent = (savings / regular_total) * 100.0;
    let outcome = if savings > 0.0 {
        Outcome::TouCheaper
    } else if savings < 0.0 {
        Outcome::RegularCheaper
    } else {
        Outcome::Equal
    };
    Comparison {
        savings,
        savings_percent,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_totals_are_equal() {
        let c = compare(512.25, 512.25);
        assert_eq!(c.outcome, Outcome::Equal);
        assert_eq!(c.savings, 0.0);
        assert_eq!(c.recommended_plan(), None);
    }

    #[test]
    fn annual_savings_uses_absolute_difference() {
        let c = compare(100.0, 150.0);
        assert_eq!(c.outcome, Outcome::RegularCheaper);
        assert!((c.annual_savings() - 600.0).abs() < 1e-9);
        assert_eq!(c.recommended_plan(), Some(Plan::Regular));
    }

    #[test]
    fn tiny_difference_is_not_rounded_to_equal() {
        let c = compare(100.0, 100.0 - 1e-9);
        assert_eq!(c.outcome, Outcome::TouCheaper);
    }
}
