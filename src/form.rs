//! 입력 폼의 원시 문자열을 계산 입력으로 바꾸는 모듈.
//!
//! 숫자로 읽을 수 없는 칸은 0으로 처리하여 이후 검증 단계에서 거부되도록 한다.

use serde::{Deserialize, Serialize};

use crate::tariff::BillingInput;

/// 입력 폼 여섯 칸의 문자열.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub units: String,
    pub peak_usage_percent: String,
    pub normal_rate: String,
    pub peak_rate: String,
    pub off_peak_rate: String,
    pub ft_rate: String,
}

impl FormFields {
    /// 기존 입력값으로 폼을 채운다.
    pub fn from_input(input: &BillingInput) -> Self {
        Self {
            units: input.units.to_string(),
            peak_usage_percent: input.peak_usage_percent.to_string(),
            normal_rate: input.normal_rate.to_string(),
            peak_rate: input.peak_rate.to_string(),
            off_peak_rate: input.off_peak_rate.to_string(),
            ft_rate: input.ft_rate.to_string(),
        }
    }

    /// 각 칸을 숫자로 해석해 계산 입력을 만든다.
    pub fn to_input(&self) -> BillingInput {
        BillingInput {
            units: parse_field(&self.units),
            peak_usage_percent: parse_field(&self.peak_usage_percent),
            normal_rate: parse_field(&self.normal_rate),
            peak_rate: parse_field(&self.peak_rate),
            off_peak_rate: parse_field(&self.off_peak_rate),
            ft_rate: parse_field(&self.ft_rate),
        }
    }
}

/// 문자열 앞부분의 숫자를 읽는다. 읽을 수 없거나 NaN 또는 0(`-0` 포함)이면 0을 반환한다.
///
/// `"12.5kWh"`처럼 뒤에 문자가 붙어도 앞의 숫자만 사용한다.
pub fn parse_field(raw: &str) -> f64 {
    let s = raw.trim_start();
    let prefix = leading_number(s);
    match prefix.parse::<f64>() {
        Ok(v) if v != 0.0 && !v.is_nan() => v,
        _ => 0.0,
    }
}

fn leading_number(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return &s[..i + "Infinity".len()];
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return "";
    }

    // 지수부는 뒤에 숫자가 있을 때만 포함한다.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    &s[..i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_field("300"), 300.0);
        assert_eq!(parse_field("  4.18"), 4.18);
        assert_eq!(parse_field("-0.35"), -0.35);
        assert_eq!(parse_field(".5"), 0.5);
        assert_eq!(parse_field("5."), 5.0);
    }

    #[test]
    fn keeps_leading_number_only() {
        assert_eq!(parse_field("12.5kWh"), 12.5);
        assert_eq!(parse_field("1e3x"), 1000.0);
        assert_eq!(parse_field("2e"), 2.0);
        assert_eq!(parse_field("7.2.1"), 7.2);
    }

    #[test]
    fn unparseable_falls_back_to_zero() {
        assert_eq!(parse_field(""), 0.0);
        assert_eq!(parse_field("abc"), 0.0);
        assert_eq!(parse_field("."), 0.0);
        assert_eq!(parse_field("-"), 0.0);
        assert_eq!(parse_field("NaN"), 0.0);
    }

    #[test]
    fn negative_zero_becomes_positive_zero() {
        let v = parse_field("-0");
        assert_eq!(v, 0.0);
        assert!(v.is_sign_positive());
        assert!(parse_field("-0.000kWh").is_sign_positive());
    }

    #[test]
    fn negative_zero_peak_share_is_unsigned() {
        let form = FormFields {
            peak_usage_percent: "-0".into(),
            ..FormFields::from_input(&BillingInput::default())
        };
        assert!(form.to_input().peak_usage_percent.is_sign_positive());
    }

    #[test]
    fn infinity_is_accepted() {
        assert_eq!(parse_field("Infinity"), f64::INFINITY);
        assert_eq!(parse_field("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn form_round_trips_default_input() {
        let input = BillingInput::default();
        assert_eq!(FormFields::from_input(&input).to_input(), input);
    }

    #[test]
    fn empty_form_fails_validation() {
        assert!(!FormFields::default().to_input().is_valid());
    }
}
