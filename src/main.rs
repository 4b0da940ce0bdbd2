use std::process::ExitCode;

use clap::Parser;
use tou_bill_calculator::{
    app::{self, AppError},
    cli::{Cli, Command},
    config,
    i18n::{self, Translator},
    observability,
    preferences::ConfigPreferenceStore,
};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    observability::init_tracing(&cli.log_level);

    let config_path = config::resolve_path(cli.config.as_deref());
    let mut cfg = match config::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!(error = %err, "설정 로드 실패, 기본값 사용");
            config::Config::default()
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    tracing::debug!(lang = %lang, "언어 결정");
    let mut tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    let result: Result<(), AppError> = match &cli.command {
        Some(Command::Compare(args)) => app::run_compare(args, &cfg, &tr),
        Some(Command::Interactive) | None => {
            let mut store = ConfigPreferenceStore::new(config_path.clone());
            app::run(&mut cfg, &config_path, &mut tr, &mut store)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {}", tr.t(i18n::keys::ERROR_PREFIX), err.localized(&tr));
            ExitCode::FAILURE
        }
    }
}
