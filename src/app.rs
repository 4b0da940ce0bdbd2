use std::path::Path;

use thiserror::Error;

use crate::cli::CompareArgs;
use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::preferences::{PreferenceError, PreferenceStore};
use crate::tariff::{self, TariffError};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 테마 저장 오류
    #[error("선호 설정 오류: {0}")]
    Preference(#[from] PreferenceError),
    /// 요금 계산 입력 오류
    #[error("{0}")]
    Tariff(#[from] TariffError),
    /// 결과 직렬화 오류
    #[error("결과 직렬화 오류: {0}")]
    Report(#[from] toml::ser::Error),
}

impl AppError {
    /// 사용자에게 보여줄 현지화 메시지.
    pub fn localized(&self, tr: &Translator) -> String {
        match self {
            AppError::Tariff(TariffError::InvalidInput) => {
                tr.t(i18n::keys::VALIDATION_FAILED).to_string()
            }
            other => other.to_string(),
        }
    }

    /// 표준 입력이 닫혔는지(EOF) 여부.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

/// 대화형 CLI 애플리케이션의 메인 루프를 실행한다. 입력이 닫히면 설정을 저장하고 끝낸다.
pub fn run(
    config: &mut Config,
    config_path: &Path,
    tr: &mut Translator,
    store: &mut dyn PreferenceStore,
) -> Result<(), AppError> {
    loop {
        let step = match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculate(tr, config),
            MenuChoice::Settings => ui_cli::handle_settings(tr, config, store)
                .and_then(|()| config.save_to(config_path).map_err(AppError::from)),
            MenuChoice::Exit => break,
        };
        match step {
            Ok(()) => {}
            Err(e) if e.is_input_closed() => {
                tracing::debug!("입력 종료");
                break;
            }
            Err(e) => return Err(e),
        }
    }
    config.save_to(config_path)?;
    println!("{}", tr.t(i18n::keys::APP_EXIT));
    Ok(())
}

/// 비대화형 `compare` 명령을 처리한다. 잘못된 입력이면 오류를 반환한다.
pub fn run_compare(args: &CompareArgs, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let input = args.merge_into(config.defaults);
    let report = tariff::calculate(&input)?;
    if args.toml {
        print!("{}", toml::to_string_pretty(&report)?);
    } else {
        ui_cli::print_report(&report, tr, &config.currency_symbol);
    }
    Ok(())
}
