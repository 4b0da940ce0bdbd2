//! 화면 테마 선호 설정 저장소.
//!
//! 전역 상태 대신 `PreferenceStore`를 주입받아 사용한다.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{self, ConfigError};

/// 화면 테마.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// 반대 테마를 반환한다.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("설정 저장 오류: {0}")]
    Config(#[from] ConfigError),
}

/// 테마 선호를 읽고 쓰는 저장소.
pub trait PreferenceStore {
    /// 저장된 테마. 없으면 Light.
    fn load_theme(&self) -> Theme;
    fn save_theme(&mut self, theme: Theme) -> Result<(), PreferenceError>;
}

/// 메모리에만 보관하는 저장소.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    theme: Option<Theme>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    fn save_theme(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        self.theme = Some(theme);
        Ok(())
    }
}

/// 설정 파일의 `theme` 키에 저장하는 저장소.
#[derive(Debug, Clone)]
pub struct ConfigPreferenceStore {
    path: PathBuf,
}

impl ConfigPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for ConfigPreferenceStore {
    fn load_theme(&self) -> Theme {
        match config::load_from(&self.path) {
            Ok(cfg) => cfg.theme,
            Err(e) => {
                tracing::warn!(error = %e, "테마 로드 실패, 기본값 사용");
                Theme::default()
            }
        }
    }

    fn save_theme(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        let mut cfg = config::load_from(&self.path)?;
        cfg.theme = theme;
        cfg.save_to(&self.path)?;
        tracing::info!(theme = theme.as_str(), "테마 저장");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_defaults_to_light() {
        let mut store = MemoryPreferenceStore::new();
        assert_eq!(store.load_theme(), Theme::Light);
        store.save_theme(Theme::Light.toggled()).expect("save");
        assert_eq!(store.load_theme(), Theme::Dark);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
