use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::form::FormFields;
use crate::i18n::{self, keys, Translator};
use crate::preferences::{PreferenceStore, Theme};
use crate::presentation::ReportView;
use crate::tariff::{self, BillReport, Plan, TariffError};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    select_menu(tr, &mut io::stdin().lock())
}

/// 입력이 끝나면(EOF) 종료를 선택한 것으로 본다.
fn select_menu<R: BufRead>(tr: &Translator, input: &mut R) -> Result<MenuChoice, AppError> {
    println!("\n=== {} ===", tr.t(keys::APP_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = match read_line_from(input, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(e) if e.is_input_closed() => return Ok(MenuChoice::Exit),
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 계산 메뉴를 처리한다. 유효한 입력은 다음 계산의 기본값으로 기억한다.
pub fn handle_calculate(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    println!("{}", tr.t(keys::CALC_HINT_DEFAULT));
    let defaults = FormFields::from_input(&cfg.defaults);
    let form = FormFields {
        units: read_field(tr.t(keys::FIELD_UNITS), &defaults.units)?,
        peak_usage_percent: read_field(tr.t(keys::FIELD_PEAK_USAGE), &defaults.peak_usage_percent)?,
        normal_rate: read_field(tr.t(keys::FIELD_NORMAL_RATE), &defaults.normal_rate)?,
        peak_rate: read_field(tr.t(keys::FIELD_PEAK_RATE), &defaults.peak_rate)?,
        off_peak_rate: read_field(tr.t(keys::FIELD_OFF_PEAK_RATE), &defaults.off_peak_rate)?,
        ft_rate: read_field(tr.t(keys::FIELD_FT_RATE), &defaults.ft_rate)?,
    };
    let input = form.to_input();
    match tariff::calculate(&input) {
        Ok(report) => {
            print_report(&report, tr, &cfg.currency_symbol);
            cfg.defaults = input;
        }
        Err(TariffError::InvalidInput) => {
            println!("{}", tr.t(keys::VALIDATION_FAILED));
        }
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(
    tr: &mut Translator,
    cfg: &mut Config,
    store: &mut dyn PreferenceStore,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}: {}", tr.t(keys::SETTINGS_LANGUAGE), cfg.language);
    println!("{}: {}", tr.t(keys::SETTINGS_THEME), theme_label(tr, cfg));
    println!("{}: {}", tr.t(keys::SETTINGS_CURRENCY), cfg.currency_symbol);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let code = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            cfg.language = code.trim().to_string();
            let resolved = i18n::resolve_language(&cfg.language, None);
            *tr = Translator::new_with_pack(&resolved, cfg.language_pack_dir.as_deref());
        }
        "2" => {
            let theme = store.load_theme().toggled();
            store.save_theme(theme)?;
            cfg.theme = theme;
        }
        "3" => {
            let symbol = read_line(tr.t(keys::SETTINGS_PROMPT_CURRENCY))?;
            if !symbol.trim().is_empty() {
                cfg.currency_symbol = symbol.trim().to_string();
            }
        }
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn theme_label<'a>(tr: &'a Translator, cfg: &Config) -> &'a str {
    match cfg.theme {
        Theme::Light => tr.t(keys::THEME_LIGHT),
        Theme::Dark => tr.t(keys::THEME_DARK),
    }
}

/// 두 요금 카드와 요약을 출력한다.
pub fn print_report(report: &BillReport, tr: &Translator, symbol: &str) {
    let view = ReportView::build(report, tr, symbol);
    let badge = |plan: Plan| {
        if view.better == Some(plan) {
            format!("  [{}]", tr.t(keys::BADGE_BETTER))
        } else {
            String::new()
        }
    };

    println!("\n## {}{}", tr.t(keys::REGULAR_TITLE), badge(Plan::Regular));
    println!("  {}: {}", tr.t(keys::RESULT_TOTAL), view.regular.total);
    println!("  {}: {}", tr.t(keys::RESULT_BASE), view.regular.base);
    println!("  {}: {}", tr.t(keys::RESULT_FT), view.regular.ft);
    println!("  {}: {}", tr.t(keys::RESULT_PER_UNIT), view.regular.per_unit);

    println!("\n## {}{}", tr.t(keys::TOU_TITLE), badge(Plan::Tou));
    println!("  {}: {}", tr.t(keys::RESULT_TOTAL), view.tou.total);
    println!("  {}: {}", tr.t(keys::RESULT_PEAK), view.tou.peak);
    println!("  {}: {}", tr.t(keys::RESULT_OFF_PEAK), view.tou.off_peak);
    println!("  {}: {}", tr.t(keys::RESULT_FT), view.tou.ft);
    println!("  {}: {}", tr.t(keys::RESULT_PER_UNIT), view.tou.per_unit);

    println!("\n## {}", tr.t(keys::SUMMARY_HEADING));
    println!("  {}", view.summary.savings);
    println!("  {}", view.summary.percent);
    println!("  {}", view.summary.recommendation);
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 0바이트를 읽으면 입력이 닫힌 것이므로 `UnexpectedEof` 오류를 반환한다.
fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

/// 빈 입력이면 기본값을 그대로 사용한다.
fn read_field(label: &str, default: &str) -> Result<String, AppError> {
    let raw = read_line(&format!("{label} [{default}]: "))?;
    let trimmed = raw.trim();
    Ok(if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn closed_input_selects_exit() {
        let tr = Translator::new("en");
        let choice = select_menu(&tr, &mut Cursor::new("")).expect("menu");
        assert_eq!(choice, MenuChoice::Exit);
    }

    #[test]
    fn invalid_selection_then_eof_still_exits() {
        let tr = Translator::new("en");
        let choice = select_menu(&tr, &mut Cursor::new("9\n")).expect("menu");
        assert_eq!(choice, MenuChoice::Exit);
    }

    #[test]
    fn retries_until_valid_selection() {
        let tr = Translator::new("en");
        let choice = select_menu(&tr, &mut Cursor::new("x\n2\n")).expect("menu");
        assert_eq!(choice, MenuChoice::Settings);
    }

    #[test]
    fn read_line_reports_closed_input() {
        let err = read_line_from(&mut Cursor::new(""), "> ").expect_err("eof");
        assert!(err.is_input_closed());
        assert_eq!(read_line_from(&mut Cursor::new("\n"), "> ").expect("line"), "\n");
    }
}
