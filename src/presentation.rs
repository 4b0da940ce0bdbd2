//! 계산 결과를 화면 표시용 문자열로 바꾸는 어댑터. CLI와 GUI가 함께 사용한다.

use crate::i18n::{keys, Translator};
use crate::tariff::{BillReport, Outcome, Plan};

/// 통화 기호 + 소수 둘째 자리 금액. 0.005는 0에서 먼 쪽으로 반올림한다.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{symbol}{:.2}", round_half_away(amount, 2))
}

/// 퍼센트를 소수 첫째 자리로 표시한다.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}", round_half_away(value, 1))
}

/// `{:.N}` 포맷은 정확한 0.5를 짝수 쪽으로 보내므로 먼저 반올림해 둔다.
fn round_half_away(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// 사용량을 정수로 표시한다. 0.5는 0에서 먼 쪽으로 반올림한다.
pub fn format_units(units: f64) -> String {
    format!("{:.0}", units.round())
}

/// 요약 영역의 분위기(색상) 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// TOU가 저렴
    Positive,
    /// 일반 미터가 저렴
    Negative,
    /// 동일
    Neutral,
}

/// 일반 미터 카드 표시 문자열.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegularCard {
    pub total: String,
    pub base: String,
    pub ft: String,
    pub per_unit: String,
}

/// TOU 카드 표시 문자열.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouCard {
    pub total: String,
    pub peak: String,
    pub off_peak: String,
    pub ft: String,
    pub per_unit: String,
}

/// 비교 요약 표시 문자열.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub savings: String,
    pub percent: String,
    pub recommendation: String,
    pub tone: Tone,
}

/// 결과 화면 전체.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub regular: RegularCard,
    pub tou: TouCard,
    pub summary: SummaryView,
    /// "คุ้มกว่า" 배지를 붙일 요금제
    pub better: Option<Plan>,
}

impl ReportView {
    pub fn build(report: &BillReport, tr: &Translator, symbol: &str) -> Self {
        let money = |v: f64| format_currency(v, symbol);
        let units_suffix = tr.t(keys::RESULT_UNITS_SUFFIX);

        let regular = RegularCard {
            total: money(report.regular.total),
            base: money(report.regular.base),
            ft: money(report.regular.ft),
            per_unit: money(report.regular.per_unit),
        };
        let tou = TouCard {
            total: money(report.tou.total),
            peak: format!(
                "{} ({} {units_suffix})",
                money(report.tou.peak_cost),
                format_units(report.tou.peak_units)
            ),
            off_peak: format!(
                "{} ({} {units_suffix})",
                money(report.tou.off_peak_cost),
                format_units(report.tou.off_peak_units)
            ),
            ft: money(report.tou.ft),
            per_unit: money(report.tou.per_unit),
        };

        let cmp = &report.comparison;
        let vars = [
            ("amount", money(cmp.savings.abs())),
            ("percent", format_percent(cmp.savings_percent.abs())),
            ("annual", money(cmp.annual_savings())),
        ];
        let summary = match cmp.outcome {
            Outcome::TouCheaper => SummaryView {
                savings: tr.format(keys::SUMMARY_TOU_AMOUNT, &vars),
                percent: tr.format(keys::SUMMARY_TOU_PERCENT, &vars),
                recommendation: tr.format(keys::SUMMARY_TOU_RECOMMENDATION, &vars),
                tone: Tone::Positive,
            },
            Outcome::RegularCheaper => SummaryView {
                savings: tr.format(keys::SUMMARY_REGULAR_AMOUNT, &vars),
                percent: tr.format(keys::SUMMARY_REGULAR_PERCENT, &vars),
                recommendation: tr.format(keys::SUMMARY_REGULAR_RECOMMENDATION, &vars),
                tone: Tone::Negative,
            },
            Outcome::Equal => SummaryView {
                savings: money(0.0),
                percent: tr.t(keys::SUMMARY_EQUAL_PERCENT).to_string(),
                recommendation: tr.t(keys::SUMMARY_EQUAL_RECOMMENDATION).to_string(),
                tone: Tone::Neutral,
            },
        };

        Self {
            regular,
            tou,
            summary,
            better: cmp.recommended_plan(),
        }
    }
}
