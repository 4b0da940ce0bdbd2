use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::tariff::BillingInput;

/// 일반 미터와 TOU 미터의 월 전기요금을 비교한다.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// 언어 코드(th/en/auto)
    #[arg(long, short = 'L', default_value = "auto")]
    pub lang: String,

    /// 설정 파일 경로
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// RUST_LOG가 없을 때 사용할 로그 레벨
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 한 번 계산하고 결과를 출력한다.
    Compare(CompareArgs),
    /// 대화형 메뉴(기본값).
    Interactive,
}

/// 생략한 값은 설정 파일의 기본값을 사용한다.
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// 월 사용량 [kWh]
    #[arg(long)]
    pub units: Option<f64>,

    /// 피크 사용 비율 [%]
    #[arg(long)]
    pub peak_percent: Option<f64>,

    /// 일반 미터 단가
    #[arg(long)]
    pub normal_rate: Option<f64>,

    /// TOU 피크 단가
    #[arg(long)]
    pub peak_rate: Option<f64>,

    /// TOU 오프피크 단가
    #[arg(long)]
    pub off_peak_rate: Option<f64>,

    /// FT 단가(음수 허용)
    #[arg(long, allow_negative_numbers = true)]
    pub ft_rate: Option<f64>,

    /// 결과를 TOML로 출력
    #[arg(long)]
    pub toml: bool,
}

impl CompareArgs {
    /// 지정한 값으로 기본 입력을 덮어쓴다.
    pub fn merge_into(&self, defaults: BillingInput) -> BillingInput {
        BillingInput {
            units: self.units.unwrap_or(defaults.units),
            peak_usage_percent: self.peak_percent.unwrap_or(defaults.peak_usage_percent),
            normal_rate: self.normal_rate.unwrap_or(defaults.normal_rate),
            peak_rate: self.peak_rate.unwrap_or(defaults.peak_rate),
            off_peak_rate: self.off_peak_rate.unwrap_or(defaults.off_peak_rate),
            ft_rate: self.ft_rate.unwrap_or(defaults.ft_rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "tou_bill_calculator_cli",
            "--lang",
            "en",
            "compare",
            "--units",
            "250",
            "--ft-rate",
            "-0.1",
        ])
        .expect("parse");
        assert_eq!(cli.lang, "en");
        let Some(Command::Compare(args)) = cli.command else {
            panic!("expected compare subcommand");
        };
        let input = args.merge_into(BillingInput::default());
        assert_eq!(input.units, 250.0);
        assert_eq!(input.ft_rate, -0.1);
        assert_eq!(input.normal_rate, BillingInput::default().normal_rate);
    }

    #[test]
    fn no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["tou_bill_calculator_cli"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.lang, "auto");
    }
}
