use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::preferences::Theme;
use crate::tariff::BillingInput;

/// 기본 설정 파일 경로(실행 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(th/en/auto)
    pub language: String,
    /// 외부 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    pub theme: Theme,
    pub currency_symbol: String,
    pub window_alpha: f32,
    /// 태국어 글리프용 사용자 폰트(.ttf/.ttc)
    pub custom_font_path: Option<String>,
    /// 입력 폼 기본값
    pub defaults: BillingInput,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            theme: Theme::Light,
            currency_symbol: "฿".into(),
            window_alpha: 1.0,
            custom_font_path: None,
            defaults: BillingInput::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 실행 디렉터리의 config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장한 뒤 반환한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!(path = %path.display(), "기본 설정 생성");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "설정 저장");
        Ok(())
    }
}

/// `--config`로 경로가 주어지면 그 파일을, 아니면 기본 config.toml을 로드한다.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => load_from(path),
        None => load_or_default(),
    }
}

/// 명시 경로가 있으면 그것을, 없으면 기본 경로를 사용한다.
pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_missing_fields() {
        let cfg: Config = toml::from_str("language = \"en\"\ntheme = \"dark\"\n").expect("parse");
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.theme, Theme::Dark);
        assert_eq!(cfg.currency_symbol, "฿");
        assert_eq!(cfg.defaults, BillingInput::default());
    }

    #[test]
    fn default_path_is_working_directory_config() {
        assert_eq!(resolve_path(None), PathBuf::from("config.toml"));
        assert_eq!(
            resolve_path(Some(Path::new("/tmp/x.toml"))),
            PathBuf::from("/tmp/x.toml")
        );
    }

    #[test]
    fn pretty_output_parses_back() {
        let cfg = Config {
            currency_symbol: "$".into(),
            ..Config::default()
        };
        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let back: Config = toml::from_str(&text).expect("parse");
        assert_eq!(back, cfg);
    }
}
