#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tou_bill_calculator::{
    config,
    form::FormFields,
    i18n::{self, keys},
    observability,
    preferences::{ConfigPreferenceStore, PreferenceStore, Theme},
    presentation::{ReportView, Tone},
    tariff::{self, BillReport, Plan},
};

const POSITIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x10, 0xb9, 0x81);
const NEGATIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(0xef, 0x44, 0x44);

/// GUI 실행 옵션.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct GuiArgs {
    /// 언어 코드(th/en/auto)
    #[arg(long, short = 'L')]
    lang: Option<String>,

    /// 설정 파일 경로
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), eframe::Error> {
    observability::init_tracing("info");
    let args = GuiArgs::parse();

    let config_path = config::resolve_path(args.config.as_deref());
    let app_cfg = config::load(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "설정 로드 실패, 기본값 사용");
        config::Config::default()
    });
    let lang_cli = args.lang;

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([980.0, 720.0])
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let store = ConfigPreferenceStore::new(config_path.clone());
    eframe::run_native(
        "TOU Bill Calculator",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx, app_cfg.custom_font_path.as_deref()) {
                tracing::warn!("{e}");
            }
            Box::new(GuiApp::new(
                app_cfg,
                Box::new(store),
                config_path,
                lang_cli.as_deref(),
            ))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 폰트 바이트를 기본 폰트 뒤 폴백으로 등록한다. 라틴 글리프는 기본 폰트가 그린다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 태국어를 표시하기 위한 폰트를 찾는다.
/// 1) 설정의 사용자 폰트
/// 2) assets/fonts/ 아래 폰트
/// 3) OS별 시스템 폰트(Leelawadee/Tahoma, Noto Sans Thai, Thonburi 등)
fn setup_fonts(ctx: &egui::Context, custom: Option<&str>) -> Result<(), String> {
    if let Some(path) = custom.filter(|p| !p.is_empty()) {
        match load_custom_font(ctx, path) {
            Ok(()) => return Ok(()),
            Err(e) => tracing::warn!("{e}"),
        }
    }

    let mut candidates: Vec<PathBuf> = vec![
        PathBuf::from("assets/fonts/NotoSansThai-Regular.ttf"),
        PathBuf::from("/usr/share/fonts/truetype/noto/NotoSansThai-Regular.ttf"),
        PathBuf::from("/usr/share/fonts/opentype/noto/NotoSansThai-Regular.ttf"),
        PathBuf::from("/usr/share/fonts/truetype/tlwg/Garuda.ttf"),
        PathBuf::from("/System/Library/Fonts/Thonburi.ttc"),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["LeelawUI.ttf", "leelawad.ttf", "tahoma.ttf"] {
            candidates.push(fonts.join(cand));
        }
    }

    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "thai_font");
            tracing::debug!(path = %p.display(), "태국어 폰트 적용");
            return Ok(());
        }
    }

    Err("Thai font not found. Please choose a font file (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

/// 결과 카드 하나를 그린다. 추천 요금제는 강조 테두리와 배지를 붙인다.
fn result_card(
    ui: &mut egui::Ui,
    title: &str,
    badge: Option<&str>,
    total: &str,
    rows: &[(&str, &str)],
) {
    let mut frame = egui::Frame::group(ui.style());
    if badge.is_some() {
        frame = frame.stroke(egui::Stroke::new(2.0, POSITIVE_COLOR));
    }
    frame.show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading(title);
            if let Some(text) = badge {
                ui.label(
                    egui::RichText::new(format!(" {text} "))
                        .color(egui::Color32::WHITE)
                        .background_color(POSITIVE_COLOR)
                        .strong(),
                );
            }
        });
        ui.label(egui::RichText::new(total).size(26.0).strong());
        ui.separator();
        egui::Grid::new(title)
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for (label, value) in rows {
                    ui.label(*label);
                    ui.label(*value);
                    ui.end_row();
                }
            });
    });
}

struct GuiApp {
    config: config::Config,
    config_path: PathBuf,
    tr: i18n::Translator,
    store: Box<dyn PreferenceStore>,
    theme: Theme,
    form: FormFields,
    report: Option<BillReport>,
    error: Option<String>,
    // 설정
    lang_input: String,
    currency_input: String,
    font_path_input: String,
    font_status: Option<String>,
    settings_status: Option<String>,
    window_alpha: f32,
    show_settings_modal: bool,
    show_help_modal: bool,
}

impl GuiApp {
    /// `lang_cli`는 이번 실행의 표시 언어만 바꾸며 설정 파일의 언어 값은 그대로 둔다.
    fn new(
        config: config::Config,
        store: Box<dyn PreferenceStore>,
        config_path: PathBuf,
        lang_cli: Option<&str>,
    ) -> Self {
        let lang_code =
            i18n::resolve_language(lang_cli.unwrap_or("auto"), Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        tracing::info!(lang = %lang_code, "GUI 언어 결정");
        let theme = store.load_theme();
        Self {
            form: FormFields::from_input(&config.defaults),
            lang_input: config.language.clone(),
            currency_input: config.currency_symbol.clone(),
            font_path_input: config.custom_font_path.clone().unwrap_or_default(),
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config,
            config_path,
            tr,
            store,
            theme,
            report: None,
            error: None,
            font_status: None,
            settings_status: None,
            show_settings_modal: false,
            show_help_modal: false,
        }
    }

    /// 폼 값을 계산한다. 검증 실패 시 이전 결과는 그대로 두고 안내 문구만 표시한다.
    fn calculate(&mut self) {
        let input = self.form.to_input();
        match tariff::calculate(&input) {
            Ok(report) => {
                self.report = Some(report);
                self.error = None;
                if self.config.defaults != input {
                    self.config.defaults = input;
                    if let Err(e) = self.config.save_to(&self.config_path) {
                        tracing::warn!(error = %e, "입력 기본값 저장 실패");
                    }
                }
            }
            Err(_) => {
                self.error = Some(self.tr.t(keys::VALIDATION_FAILED).to_string());
            }
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.config.theme = self.theme;
        if let Err(e) = self.store.save_theme(self.theme) {
            tracing::warn!(error = %e, "테마 저장 실패");
        }
    }

    fn save_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        if !self.currency_input.trim().is_empty() {
            self.config.currency_symbol = self.currency_input.trim().to_string();
        }
        self.config.window_alpha = self.window_alpha;
        self.config.custom_font_path =
            Some(self.font_path_input.clone()).filter(|p| !p.trim().is_empty());
        self.config.theme = self.theme;

        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.settings_status = Some(match self.config.save_to(&self.config_path) {
            Ok(()) => self.tr.t(keys::SETTINGS_SAVED).to_string(),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn pick_font(&mut self, ctx: &egui::Context) {
        let Some(path) = FileDialog::new()
            .add_filter("Font", &["ttf", "otf", "ttc"])
            .pick_file()
        else {
            return;
        };
        let path = path.display().to_string();
        self.font_status = Some(match load_custom_font(ctx, &path) {
            Ok(()) => {
                self.font_path_input = path;
                self.tr.t(keys::SETTINGS_FONT_LOADED).to_string()
            }
            Err(e) => e,
        });
    }

    /// 테마와 투명도를 매 프레임 새 Visuals에 적용한다.
    fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = match self.theme {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        };
        visuals.window_fill = visuals.window_fill.linear_multiply(self.window_alpha);
        visuals.panel_fill = visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_visuals(visuals);
    }

    /// 입력 폼. Enter 또는 버튼으로 계산을 요청하면 true.
    fn ui_form(&mut self, ui: &mut egui::Ui) -> bool {
        let tr = &self.tr;
        let form = &mut self.form;
        let mut submit = false;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("form_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for (key, value) in [
                        (keys::FIELD_UNITS, &mut form.units),
                        (keys::FIELD_PEAK_USAGE, &mut form.peak_usage_percent),
                        (keys::FIELD_NORMAL_RATE, &mut form.normal_rate),
                        (keys::FIELD_PEAK_RATE, &mut form.peak_rate),
                        (keys::FIELD_OFF_PEAK_RATE, &mut form.off_peak_rate),
                        (keys::FIELD_FT_RATE, &mut form.ft_rate),
                    ] {
                        ui.label(tr.t(key));
                        let resp = ui.add(egui::TextEdit::singleline(value).desired_width(160.0));
                        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            submit = true;
                        }
                        ui.end_row();
                    }
                });
            ui.add_space(8.0);
            if ui.button(tr.t(keys::BUTTON_CALCULATE)).clicked() {
                submit = true;
            }
        });
        submit
    }

    fn ui_results(&self, ui: &mut egui::Ui) {
        let Some(report) = &self.report else {
            return;
        };
        let tr = &self.tr;
        let view = ReportView::build(report, tr, &self.config.currency_symbol);
        let badge = |plan: Plan| (view.better == Some(plan)).then(|| tr.t(keys::BADGE_BETTER));

        ui.columns(2, |cols| {
            result_card(
                &mut cols[0],
                tr.t(keys::REGULAR_TITLE),
                badge(Plan::Regular),
                &view.regular.total,
                &[
                    (tr.t(keys::RESULT_BASE), view.regular.base.as_str()),
                    (tr.t(keys::RESULT_FT), view.regular.ft.as_str()),
                    (tr.t(keys::RESULT_PER_UNIT), view.regular.per_unit.as_str()),
                ],
            );
            result_card(
                &mut cols[1],
                tr.t(keys::TOU_TITLE),
                badge(Plan::Tou),
                &view.tou.total,
                &[
                    (tr.t(keys::RESULT_PEAK), view.tou.peak.as_str()),
                    (tr.t(keys::RESULT_OFF_PEAK), view.tou.off_peak.as_str()),
                    (tr.t(keys::RESULT_FT), view.tou.ft.as_str()),
                    (tr.t(keys::RESULT_PER_UNIT), view.tou.per_unit.as_str()),
                ],
            );
        });

        ui.add_space(12.0);
        let fill = match view.summary.tone {
            Tone::Positive => POSITIVE_COLOR,
            Tone::Negative => NEGATIVE_COLOR,
            Tone::Neutral => ui.visuals().selection.bg_fill,
        };
        egui::Frame::none()
            .fill(fill)
            .rounding(8.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let white = |s: &str| egui::RichText::new(s).color(egui::Color32::WHITE);
                ui.label(white(tr.t(keys::SUMMARY_HEADING)).strong());
                ui.label(white(&view.summary.savings).size(24.0).strong());
                ui.label(white(&view.summary.percent));
                ui.label(white(&view.summary.recommendation));
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.apply_visuals(ctx);

        // 상단 바
        let mut toggle = false;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::APP_TITLE));
                ui.separator();
                let icon = match self.theme {
                    Theme::Light => "🌙",
                    Theme::Dark => "☀",
                };
                if ui
                    .button(format!("{icon} {}", self.tr.t(keys::THEME_TOGGLE)))
                    .clicked()
                {
                    toggle = true;
                }
                if ui.button(self.tr.t(keys::SETTINGS_TITLE)).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(self.tr.t(keys::HELP_TITLE)).clicked() {
                    self.show_help_modal = true;
                }
            });
        });
        if toggle {
            self.toggle_theme();
        }

        // 설정 창
        if self.show_settings_modal {
            let mut open = true;
            let mut save_clicked = false;
            let mut pick_clicked = false;
            let tr = &self.tr;
            let lang_input = &mut self.lang_input;
            let currency_input = &mut self.currency_input;
            let font_path_input = &mut self.font_path_input;
            let window_alpha = &mut self.window_alpha;
            let font_status = &self.font_status;
            let settings_status = &self.settings_status;
            egui::Window::new(tr.t(keys::SETTINGS_TITLE))
                .collapsible(false)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(tr.t(keys::SETTINGS_LANGUAGE));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(lang_input.clone())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut *lang_input,
                                "auto".to_string(),
                                tr.t(keys::SETTINGS_LANG_AUTO),
                            );
                            ui.selectable_value(&mut *lang_input, "th".to_string(), "ภาษาไทย");
                            ui.selectable_value(&mut *lang_input, "en".to_string(), "English");
                        });
                    ui.separator();
                    ui.label(tr.t(keys::SETTINGS_CURRENCY));
                    ui.add(egui::TextEdit::singleline(currency_input).desired_width(80.0));
                    ui.separator();
                    ui.label(tr.t(keys::SETTINGS_ALPHA));
                    ui.add(egui::Slider::new(window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    ui.label(tr.t(keys::SETTINGS_FONT));
                    ui.horizontal(|ui| {
                        ui.add(egui::TextEdit::singleline(font_path_input).desired_width(260.0));
                        if ui.button(tr.t(keys::SETTINGS_FONT_PICK)).clicked() {
                            pick_clicked = true;
                        }
                    });
                    if let Some(msg) = font_status {
                        ui.small(msg);
                    }
                    ui.separator();
                    if ui.button(tr.t(keys::SETTINGS_SAVE)).clicked() {
                        save_clicked = true;
                    }
                    if let Some(msg) = settings_status {
                        ui.label(msg);
                    }
                });
            self.show_settings_modal = open;
            if pick_clicked {
                self.pick_font(ctx);
            }
            if save_clicked {
                self.save_settings();
            }
        }

        // 계산식 도움말
        if self.show_help_modal {
            let mut open = true;
            let tr = &self.tr;
            egui::Window::new(tr.t(keys::HELP_TITLE))
                .collapsible(true)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(tr.t(keys::HELP_FORMULA_REGULAR));
                    ui.label(tr.t(keys::HELP_FORMULA_TOU));
                    ui.label(tr.t(keys::HELP_FORMULA_SAVINGS));
                });
            self.show_help_modal = open;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    if self.ui_form(ui) {
                        self.calculate();
                    }
                    if let Some(msg) = &self.error {
                        ui.colored_label(NEGATIVE_COLOR, msg);
                    }
                    ui.add_space(12.0);
                    self.ui_results(ui);
                });
        });
    }
}
