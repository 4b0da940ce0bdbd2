use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";
    pub const VALIDATION_FAILED: &str = "general.validation_failed";

    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const CALC_HINT_DEFAULT: &str = "calc.hint_default";
    pub const FIELD_UNITS: &str = "field.units";
    pub const FIELD_PEAK_USAGE: &str = "field.peak_usage";
    pub const FIELD_NORMAL_RATE: &str = "field.normal_rate";
    pub const FIELD_PEAK_RATE: &str = "field.peak_rate";
    pub const FIELD_OFF_PEAK_RATE: &str = "field.off_peak_rate";
    pub const FIELD_FT_RATE: &str = "field.ft_rate";
    pub const BUTTON_CALCULATE: &str = "button.calculate";

    pub const REGULAR_TITLE: &str = "result.regular_title";
    pub const TOU_TITLE: &str = "result.tou_title";
    pub const RESULT_TOTAL: &str = "result.total";
    pub const RESULT_BASE: &str = "result.base";
    pub const RESULT_PEAK: &str = "result.peak";
    pub const RESULT_OFF_PEAK: &str = "result.off_peak";
    pub const RESULT_FT: &str = "result.ft";
    pub const RESULT_PER_UNIT: &str = "result.per_unit";
    pub const RESULT_UNITS_SUFFIX: &str = "result.units_suffix";
    pub const BADGE_BETTER: &str = "result.badge_better";
    pub const SUMMARY_HEADING: &str = "summary.heading";

    pub const SUMMARY_TOU_AMOUNT: &str = "summary.tou_amount";
    pub const SUMMARY_TOU_PERCENT: &str = "summary.tou_percent";
    pub const SUMMARY_TOU_RECOMMENDATION: &str = "summary.tou_recommendation";
    pub const SUMMARY_REGULAR_AMOUNT: &str = "summary.regular_amount";
    pub const SUMMARY_REGULAR_PERCENT: &str = "summary.regular_percent";
    pub const SUMMARY_REGULAR_RECOMMENDATION: &str = "summary.regular_recommendation";
    pub const SUMMARY_EQUAL_PERCENT: &str = "summary.equal_percent";
    pub const SUMMARY_EQUAL_RECOMMENDATION: &str = "summary.equal_recommendation";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_TITLE: &str = "settings.title";
    pub const SETTINGS_LANG_AUTO: &str = "settings.lang_auto";
    pub const SETTINGS_FONT_LOADED: &str = "settings.font_loaded";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_THEME: &str = "settings.theme";
    pub const SETTINGS_CURRENCY: &str = "settings.currency";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_CURRENCY: &str = "settings.prompt_currency";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_FONT: &str = "settings.font";
    pub const SETTINGS_FONT_PICK: &str = "settings.font_pick";
    pub const SETTINGS_ALPHA: &str = "settings.alpha";
    pub const SETTINGS_SAVE: &str = "settings.save";

    pub const THEME_LIGHT: &str = "theme.light";
    pub const THEME_DARK: &str = "theme.dark";
    pub const THEME_TOGGLE: &str = "theme.toggle";

    pub const HELP_TITLE: &str = "help.title";
    pub const HELP_FORMULA_REGULAR: &str = "help.formula_regular";
    pub const HELP_FORMULA_TOU: &str = "help.formula_tou";
    pub const HELP_FORMULA_SAVINGS: &str = "help.formula_savings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Th,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Th
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Th => "th",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(th/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 th로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        if overrides.is_some() {
            tracing::info!(lang = lang_code, "언어팩 로드");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 태국어 순으로 찾는다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| th(key)),
            Language::Th => th(key),
        }
    }

    /// 템플릿 키를 번역하고 `{name}` 자리표시자를 채운다.
    pub fn format(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }
}

/// `{name}` 형태의 자리표시자를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "th".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "th" | "th-th" => Some("th".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en".into()),
        "auto" | "" => None,
        other if other.starts_with("th") => Some("th".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "th" => Some("th".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 중첩 키.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn th(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "ข้อผิดพลาด",
        APP_EXIT => "ปิดโปรแกรม",
        APP_TITLE => "เครื่องคำนวณค่าไฟฟ้า มิเตอร์ปกติ vs TOU",
        VALIDATION_FAILED => "กรุณากรอกข้อมูลให้ครบถ้วนและถูกต้อง",
        MAIN_MENU_CALCULATE => "1) คำนวณและเปรียบเทียบค่าไฟ",
        MAIN_MENU_SETTINGS => "2) ตั้งค่า",
        MAIN_MENU_EXIT => "0) ออก",
        PROMPT_MENU_SELECT => "เลือกเมนู: ",
        PROMPT_SELECT => "เลือก: ",
        INVALID_SELECTION_RETRY => "ตัวเลือกไม่ถูกต้อง กรุณาเลือกใหม่",
        CALC_HEADING => "\n-- คำนวณค่าไฟฟ้า --",
        CALC_HINT_DEFAULT => "(กด Enter เพื่อใช้ค่าในวงเล็บ)",
        FIELD_UNITS => "หน่วยไฟฟ้าที่ใช้ต่อเดือน (kWh)",
        FIELD_PEAK_USAGE => "สัดส่วนการใช้ไฟช่วง Peak (%)",
        FIELD_NORMAL_RATE => "อัตราค่าไฟมิเตอร์ปกติ (บาท/หน่วย)",
        FIELD_PEAK_RATE => "อัตรา Peak (บาท/หน่วย)",
        FIELD_OFF_PEAK_RATE => "อัตรา Off-Peak (บาท/หน่วย)",
        FIELD_FT_RATE => "ค่า Ft (บาท/หน่วย)",
        BUTTON_CALCULATE => "คำนวณ",
        REGULAR_TITLE => "มิเตอร์ปกติ",
        TOU_TITLE => "มิเตอร์ TOU",
        RESULT_TOTAL => "ค่าไฟรวม",
        RESULT_BASE => "ค่าพลังงานไฟฟ้า",
        RESULT_PEAK => "ช่วง Peak",
        RESULT_OFF_PEAK => "ช่วง Off-Peak",
        RESULT_FT => "ค่า Ft",
        RESULT_PER_UNIT => "เฉลี่ยต่อหน่วย",
        RESULT_UNITS_SUFFIX => "หน่วย",
        BADGE_BETTER => "คุ้มกว่า",
        SUMMARY_HEADING => "สรุปผลการเปรียบเทียบ",
        SUMMARY_TOU_AMOUNT => "ประหยัด {amount}/เดือน",
        SUMMARY_TOU_PERCENT => "ประหยัด {percent}%",
        SUMMARY_TOU_RECOMMENDATION => "✅ แนะนำใช้มิเตอร์ TOU - ประหยัดได้ {annual}/ปี",
        SUMMARY_REGULAR_AMOUNT => "แพงกว่า {amount}/เดือน",
        SUMMARY_REGULAR_PERCENT => "แพงกว่า {percent}%",
        SUMMARY_REGULAR_RECOMMENDATION => "⚠️ แนะนำใช้มิเตอร์ปกติ - ประหยัดได้ {annual}/ปี",
        SUMMARY_EQUAL_PERCENT => "เท่ากัน",
        SUMMARY_EQUAL_RECOMMENDATION => "ค่าไฟฟ้าเท่ากันทั้ง 2 แบบ",
        SETTINGS_HEADING => "\n-- ตั้งค่า --",
        SETTINGS_TITLE => "ตั้งค่า",
        SETTINGS_LANG_AUTO => "ตามระบบ",
        SETTINGS_FONT_LOADED => "โหลดฟอนต์แล้ว",
        SETTINGS_LANGUAGE => "ภาษา",
        SETTINGS_THEME => "ธีม",
        SETTINGS_CURRENCY => "สัญลักษณ์สกุลเงิน",
        SETTINGS_OPTIONS => "1) ภาษา  2) สลับธีม  3) สัญลักษณ์สกุลเงิน",
        SETTINGS_PROMPT_LANGUAGE => "รหัสภาษา (th/en/auto): ",
        SETTINGS_PROMPT_CURRENCY => "สัญลักษณ์สกุลเงิน: ",
        SETTINGS_SAVED => "บันทึกการตั้งค่าแล้ว",
        SETTINGS_FONT => "ฟอนต์ภาษาไทย",
        SETTINGS_FONT_PICK => "เลือกไฟล์ฟอนต์...",
        SETTINGS_ALPHA => "ความโปร่งใสของหน้าต่าง",
        SETTINGS_SAVE => "บันทึก",
        THEME_LIGHT => "สว่าง",
        THEME_DARK => "มืด",
        THEME_TOGGLE => "สลับธีม",
        HELP_TITLE => "วิธีคำนวณ",
        HELP_FORMULA_REGULAR => "มิเตอร์ปกติ: หน่วย × อัตราปกติ + หน่วย × Ft",
        HELP_FORMULA_TOU => {
            "TOU: หน่วย Peak × อัตรา Peak + หน่วย Off-Peak × อัตรา Off-Peak + หน่วย × Ft"
        }
        HELP_FORMULA_SAVINGS => "ส่วนต่าง = ค่าไฟปกติ - ค่าไฟ TOU, ต่อปี = |ส่วนต่าง| × 12",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        APP_TITLE => "Electricity Bill Calculator: Regular vs TOU",
        VALIDATION_FAILED => "Please fill in every field with a valid value.",
        MAIN_MENU_CALCULATE => "1) Calculate and compare",
        MAIN_MENU_SETTINGS => "2) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CALC_HEADING => "\n-- Bill Calculation --",
        CALC_HINT_DEFAULT => "(press Enter to keep the value in brackets)",
        FIELD_UNITS => "Monthly consumption (kWh)",
        FIELD_PEAK_USAGE => "Peak usage share (%)",
        FIELD_NORMAL_RATE => "Regular rate (per kWh)",
        FIELD_PEAK_RATE => "Peak rate (per kWh)",
        FIELD_OFF_PEAK_RATE => "Off-peak rate (per kWh)",
        FIELD_FT_RATE => "Ft rate (per kWh)",
        BUTTON_CALCULATE => "Calculate",
        REGULAR_TITLE => "Regular meter",
        TOU_TITLE => "TOU meter",
        RESULT_TOTAL => "Total",
        RESULT_BASE => "Energy charge",
        RESULT_PEAK => "Peak",
        RESULT_OFF_PEAK => "Off-peak",
        RESULT_FT => "Ft charge",
        RESULT_PER_UNIT => "Average per kWh",
        RESULT_UNITS_SUFFIX => "kWh",
        BADGE_BETTER => "Better value",
        SUMMARY_HEADING => "Comparison summary",
        SUMMARY_TOU_AMOUNT => "Save {amount}/month",
        SUMMARY_TOU_PERCENT => "Save {percent}%",
        SUMMARY_TOU_RECOMMENDATION => "✅ TOU meter recommended - saves {annual}/year",
        SUMMARY_REGULAR_AMOUNT => "Costs {amount}/month more",
        SUMMARY_REGULAR_PERCENT => "{percent}% more expensive",
        SUMMARY_REGULAR_RECOMMENDATION => "⚠️ Regular meter recommended - saves {annual}/year",
        SUMMARY_EQUAL_PERCENT => "Equal",
        SUMMARY_EQUAL_RECOMMENDATION => "Both plans cost the same",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_TITLE => "Settings",
        SETTINGS_LANG_AUTO => "System",
        SETTINGS_FONT_LOADED => "Font loaded.",
        SETTINGS_LANGUAGE => "Language",
        SETTINGS_THEME => "Theme",
        SETTINGS_CURRENCY => "Currency symbol",
        SETTINGS_OPTIONS => "1) Language  2) Toggle theme  3) Currency symbol",
        SETTINGS_PROMPT_LANGUAGE => "Language code (th/en/auto): ",
        SETTINGS_PROMPT_CURRENCY => "Currency symbol: ",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_FONT => "Thai font",
        SETTINGS_FONT_PICK => "Choose font file...",
        SETTINGS_ALPHA => "Window transparency",
        SETTINGS_SAVE => "Save",
        THEME_LIGHT => "Light",
        THEME_DARK => "Dark",
        THEME_TOGGLE => "Toggle theme",
        HELP_TITLE => "How it is calculated",
        HELP_FORMULA_REGULAR => "Regular: units × regular rate + units × Ft",
        HELP_FORMULA_TOU => {
            "TOU: peak units × peak rate + off-peak units × off-peak rate + units × Ft"
        }
        HELP_FORMULA_SAVINGS => "Difference = regular - TOU, yearly = |difference| × 12",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_falls_back_to_thai_for_unknown_keys() {
        let tr = Translator::new("en");
        assert_eq!(tr.t(keys::REGULAR_TITLE), "Regular meter");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn unknown_code_uses_thai() {
        let tr = Translator::new("xx");
        assert_eq!(tr.language(), Language::Th);
        assert_eq!(tr.t(keys::BADGE_BETTER), "คุ้มกว่า");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("en-US", Some("th")), "en");
        assert_eq!(resolve_language("auto", Some("th-TH")), "th");
    }

    #[test]
    fn template_placeholders_are_filled() {
        let out = fill_template("save {amount}/month", &[("amount", "฿1.00".into())]);
        assert_eq!(out, "save ฿1.00/month");
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[summary]\nequal_percent = \"same\"\n").unwrap_or_default();
        assert_eq!(map.get(keys::SUMMARY_EQUAL_PERCENT).map(String::as_str), Some("same"));
    }
}
