use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::comparison::{compare, Comparison};
use super::input::{validate, BillingInput};
use super::regular::{compute_regular, RegularCost};
use super::tou::{compute_tou, TouCost};

/// 요금 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TariffError {
    /// 검증 규칙을 만족하지 않는 입력
    #[error("입력 오류: 사용량과 단가는 0보다 커야 하고 피크 비율은 0~100% 이어야 합니다.")]
    InvalidInput,
}

/// 한 번의 계산 요청에 대한 전체 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillReport {
    pub input: BillingInput,
    pub regular: RegularCost,
    pub tou: TouCost,
    pub comparison: Comparison,
}

/// 입력을 검증한 뒤 두 요금제를 계산하고 비교한다.
///
/// 검증에 실패하면 부분 결과 없이 `TariffError::InvalidInput`을 반환한다.
pub fn calculate(input: &BillingInput) -> Result<BillReport, TariffError> {
    if !validate(input) {
        tracing::warn!(?input, "입력 검증 실패");
        return Err(TariffError::InvalidInput);
    }
    let regular = compute_regular(input);
    let tou = compute_tou(input);
    let comparison = compare(regular.total, tou.total);
    tracing::debug!(
        regular_total = regular.total,
        tou_total = tou.total,
        outcome = ?comparison.outcome,
        "요금 비교 완료"
    );
    Ok(BillReport {
        input: *input,
        regular,
        tou,
        comparison,
    })
}
