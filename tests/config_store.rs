//! 설정 파일 기반 테마 저장소 테스트.
use std::path::PathBuf;

use tou_bill_calculator::config::{self, Config};
use tou_bill_calculator::preferences::{ConfigPreferenceStore, PreferenceStore, Theme};

fn temp_config(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "tou_bill_calculator_{name}_{}.toml",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn missing_file_is_created_with_light_theme() {
    let path = temp_config("missing");
    let store = ConfigPreferenceStore::new(path.clone());
    assert_eq!(store.load_theme(), Theme::Light);
    assert!(path.exists());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn saved_theme_survives_reload_and_keeps_other_settings() {
    let path = temp_config("persist");
    let cfg = Config {
        currency_symbol: "$".into(),
        ..Config::default()
    };
    cfg.save_to(&path).expect("write config");

    let mut store = ConfigPreferenceStore::new(path.clone());
    store.save_theme(Theme::Dark).expect("save theme");

    let reloaded = config::load_from(&path).expect("reload");
    assert_eq!(reloaded.theme, Theme::Dark);
    assert_eq!(reloaded.currency_symbol, "$");
    assert_eq!(ConfigPreferenceStore::new(path.clone()).load_theme(), Theme::Dark);
    let _ = std::fs::remove_file(&path);
}
