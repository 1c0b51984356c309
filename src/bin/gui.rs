#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점. 원클릭 재계산 없이
//! 파라미터를 바꾸는 즉시 전체 파이프라인을 다시 평가한다.

use business_finance_toolbox::{
    config, export,
    finance::{BusinessScenario, CalcError, PaybackPeriod, ScenarioReport, ScenarioWarning},
    formatting::{format_pct, format_usd},
    i18n,
};
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Business Finance Toolbox",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
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
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/malgun.ttf
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    // 2) 시스템 폰트 탐색 (Windows 기준)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
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

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// 회수 시점 표시 문자열. 기간 내 회수 불가면 ">기간" 형태로 표기한다.
fn payback_label(payback: PaybackPeriod, horizon_months: u32, months_suffix: &str) -> String {
    match payback {
        PaybackPeriod::Month(n) => format!("{n} {months_suffix}"),
        PaybackPeriod::BeyondHorizon => format!(">{horizon_months} {months_suffix}"),
    }
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    // 세션 한정 시나리오 (세션 간 저장하지 않는다)
    scenario: BusinessScenario,
    export_status: Option<String>,
    // 설정
    window_alpha: f32,
    ui_scale: f32,
    always_on_top: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        Self {
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config,
            tr,
            lang_input,
            lang_save_status: None,
            scenario: BusinessScenario::default(),
            export_status: None,
            ui_scale: 1.0,
            always_on_top: false,
            show_settings_modal: false,
            show_help_modal: false,
            custom_font_path: String::new(),
            font_load_error: None,
        }
    }

    /// 좌측 파라미터 패널. 시나리오의 모든 입력을 그룹별로 편집한다.
    fn ui_params(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        ui.heading(txt("gui.params.heading", "Business Parameters"));
        ui.add_space(8.0);

        egui::CollapsingHeader::new(txt("gui.params.startup", "One-Time Startup Costs"))
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("startup_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        let startup = &mut self.scenario.startup;
                        for (label, value, max) in [
                            (txt("gui.startup.legal", "Legal & incorporation"), &mut startup.legal, 10_000.0),
                            (txt("gui.startup.renovation", "Renovations"), &mut startup.renovation, 50_000.0),
                            (
                                txt("gui.startup.equipment_deposit", "Equipment deposit"),
                                &mut startup.equipment_deposit,
                                10_000.0,
                            ),
                            (
                                txt("gui.startup.initial_supplies", "Initial supplies"),
                                &mut startup.initial_supplies,
                                10_000.0,
                            ),
                            (txt("gui.startup.website", "Website & booking setup"), &mut startup.website, 5_000.0),
                            (txt("gui.startup.rent_deposit", "Rent deposit"), &mut startup.rent_deposit, 15_000.0),
                            (txt("gui.startup.other", "Other"), &mut startup.other, 10_000.0),
                        ] {
                            ui.label(label);
                            ui.add(
                                egui::DragValue::new(value)
                                    .clamp_range(0.0..=max)
                                    .speed(100.0)
                                    .prefix("$"),
                            );
                            ui.end_row();
                        }
                    });
            });

        egui::CollapsingHeader::new(txt("gui.params.revenue", "Revenue"))
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("revenue_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(txt("gui.revenue.clients", "Clients per month"));
                        ui.add(egui::Slider::new(
                            &mut self.scenario.clients_per_month,
                            1..=200,
                        ));
                        ui.end_row();
                        ui.label(txt("gui.revenue.fee", "Average service fee"));
                        ui.add(
                            egui::DragValue::new(&mut self.scenario.average_fee)
                                .clamp_range(100.0..=1_000.0)
                                .speed(10.0)
                                .prefix("$"),
                        );
                        ui.end_row();
                    });
            });

        egui::CollapsingHeader::new(txt("gui.params.fixed", "Monthly Fixed Costs"))
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("fixed_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        for (label, value, max) in [
                            (txt("gui.fixed.rent", "Rent"), &mut self.scenario.monthly_rent, 10_000.0),
                            (
                                txt("gui.fixed.equipment_lease", "Equipment lease"),
                                &mut self.scenario.equipment_lease,
                                5_000.0,
                            ),
                            (txt("gui.fixed.insurance", "Insurance"), &mut self.scenario.insurance, 2_000.0),
                            (txt("gui.fixed.marketing", "Marketing"), &mut self.scenario.marketing, 3_000.0),
                            (txt("gui.fixed.software", "Software/booking"), &mut self.scenario.software, 500.0),
                        ] {
                            ui.label(label);
                            ui.add(
                                egui::DragValue::new(value)
                                    .clamp_range(0.0..=max)
                                    .speed(50.0)
                                    .prefix("$"),
                            );
                            ui.end_row();
                        }
                    });
            });

        egui::CollapsingHeader::new(txt("gui.params.annual", "Annual Costs"))
            .default_open(false)
            .show(ui, |ui| {
                egui::Grid::new("annual_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        label_with_tip(
                            ui,
                            &txt("gui.annual.accounting", "Accounting & tax prep"),
                            &txt(
                                "gui.annual.accounting_tip",
                                "Folded into monthly fixed costs at 1/12.",
                            ),
                        );
                        ui.add(
                            egui::DragValue::new(&mut self.scenario.annual_accounting_fee)
                                .clamp_range(0.0..=10_000.0)
                                .speed(100.0)
                                .prefix("$"),
                        );
                        ui.end_row();
                    });
            });

        egui::CollapsingHeader::new(txt("gui.params.variable", "Variable Costs"))
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("variable_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(txt("gui.variable.supplies", "Supplies per client"));
                        ui.add(
                            egui::DragValue::new(&mut self.scenario.supplies_per_client)
                                .clamp_range(0.0..=100.0)
                                .speed(1.0)
                                .prefix("$"),
                        );
                        ui.end_row();
                        ui.label(txt("gui.variable.utilities", "Monthly utilities"));
                        ui.add(
                            egui::DragValue::new(&mut self.scenario.monthly_utilities)
                                .clamp_range(0.0..=1_000.0)
                                .speed(10.0)
                                .prefix("$"),
                        );
                        ui.end_row();
                        label_with_tip(
                            ui,
                            &txt("gui.variable.card_fee", "Card processing fee"),
                            &txt("gui.variable.card_fee_tip", "Charged on total revenue."),
                        );
                        ui.add(
                            egui::Slider::new(&mut self.scenario.credit_card_fee_pct, 1.5..=4.0)
                                .step_by(0.1)
                                .suffix(" %"),
                        );
                        ui.end_row();
                    });
            });

        egui::CollapsingHeader::new(txt("gui.params.loan", "Loan Parameters"))
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("loan_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(txt("gui.loan.rate", "Interest rate"));
                        ui.add(
                            egui::Slider::new(
                                &mut self.scenario.annual_interest_rate_pct,
                                5.0..=15.0,
                            )
                            .step_by(0.5)
                            .suffix(" %"),
                        );
                        ui.end_row();
                        ui.label(txt("gui.loan.term", "Loan term"));
                        egui::ComboBox::from_id_source("loan_term")
                            .selected_text(format!(
                                "{} {}",
                                self.scenario.loan_term_years,
                                txt("gui.loan.years", "years")
                            ))
                            .show_ui(ui, |ui| {
                                for term in [3_u32, 5, 7, 10] {
                                    ui.selectable_value(
                                        &mut self.scenario.loan_term_years,
                                        term,
                                        format!("{term} {}", txt("gui.loan.years", "years")),
                                    );
                                }
                            });
                        ui.end_row();
                        ui.label(txt("gui.loan.down_payment", "Down payment"));
                        ui.add(
                            egui::Slider::new(&mut self.scenario.down_payment_pct, 10.0..=50.0)
                                .step_by(5.0)
                                .suffix(" %"),
                        );
                        ui.end_row();
                    });
            });

        egui::CollapsingHeader::new(txt("gui.params.horizon", "Projection"))
            .default_open(false)
            .show(ui, |ui| {
                egui::Grid::new("horizon_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(txt("gui.horizon.months", "Horizon (months)"));
                        ui.add(
                            egui::DragValue::new(&mut self.scenario.horizon_months)
                                .clamp_range(1..=120),
                        );
                        ui.end_row();
                    });
            });
    }

    /// 중앙 결과 패널. 지표 카드, 대출/창업 비용 요약, 전망 표.
    fn ui_report(&mut self, ui: &mut egui::Ui, report: &ScenarioReport) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 핵심 지표 4종
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("key_metrics")
                .num_columns(4)
                .spacing([32.0, 4.0])
                .show(ui, |ui| {
                    ui.strong(txt("gui.metric.monthly_revenue", "Monthly Revenue"));
                    ui.strong(txt("gui.metric.monthly_costs", "Monthly Costs"));
                    ui.strong(txt("gui.metric.payback", "Payback Period"));
                    ui.strong(txt("gui.metric.roi", "Horizon ROI"));
                    ui.end_row();
                    ui.label(format_usd(report.monthly_revenue));
                    ui.label(format_usd(report.monthly_total_costs()));
                    ui.label(payback_label(
                        report.metrics.payback,
                        report.horizon_months,
                        &txt("gui.metric.months", "months"),
                    ));
                    ui.label(format_pct(report.metrics.horizon_roi_pct));
                    ui.end_row();
                });
        });

        // 경고 배너 (정상 결과이지만 주의가 필요한 조건)
        for warning in report.warnings() {
            let text = match warning {
                ScenarioWarning::PaybackBeyondHorizon => txt(
                    "gui.warn.payback_beyond",
                    "At current settings, the payback period extends beyond the horizon. Consider adjusting clients, pricing, or costs.",
                ),
                ScenarioWarning::BelowBreakEven { break_even, clients } => format!(
                    "{} ({clients} < {break_even})",
                    txt(
                        "gui.warn.below_break_even",
                        "Clients per month are below the break-even point. The business operates at a loss.",
                    )
                ),
            };
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(text)
                    .color(egui::Color32::from_rgb(222, 120, 0))
                    .strong(),
            );
        }
        ui.add_space(8.0);

        // 대출 요약
        heading_with_tip(
            ui,
            &txt("gui.loan_details.heading", "Loan Details"),
            &txt(
                "gui.loan_details.tip",
                "Principal after down payment, equal monthly payment, total interest.",
            ),
        );
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("loan_details")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.loan_details.down_payment", "Down payment"));
                    ui.label(format_usd(report.down_payment));
                    ui.end_row();
                    ui.label(txt("gui.loan_details.principal", "Loan amount"));
                    ui.label(format_usd(report.loan_principal));
                    ui.end_row();
                    ui.label(txt("gui.loan_details.monthly_payment", "Monthly payment"));
                    ui.label(format_usd(report.loan.monthly_payment));
                    ui.end_row();
                    ui.label(txt("gui.loan_details.total_interest", "Total interest"));
                    ui.label(format_usd(report.loan.total_interest));
                    ui.end_row();
                });
        });
        ui.add_space(8.0);

        // 창업 비용 내역
        heading_with_tip(
            ui,
            &txt("gui.startup_breakdown.heading", "Startup Costs Breakdown"),
            &txt("gui.startup_breakdown.tip", "One-time costs before opening."),
        );
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("startup_breakdown")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    for (label_key, amount) in self.scenario.startup.entries() {
                        ui.label(self.tr.t(label_key));
                        ui.label(format_usd(amount));
                        ui.end_row();
                    }
                    ui.strong(txt("gui.startup_breakdown.total", "Total"));
                    ui.strong(format_usd(report.startup_total));
                    ui.end_row();
                });
        });
        ui.add_space(8.0);

        // 상세 분석
        egui::CollapsingHeader::new(txt("gui.analysis.heading", "Detailed Analysis"))
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("analysis_grid")
                    .num_columns(2)
                    .spacing([24.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(txt("gui.analysis.break_even", "Break-even clients per month"));
                        ui.label(report.metrics.break_even_clients.to_string());
                        ui.end_row();
                        ui.label(txt("gui.analysis.monthly_profit", "Current monthly profit"));
                        ui.label(format_usd(report.monthly_profit()));
                        ui.end_row();
                        ui.label(txt("gui.analysis.gross_margin", "Gross margin per client"));
                        ui.label(format_usd(report.metrics.gross_margin_per_client));
                        ui.end_row();
                        ui.label(txt("gui.analysis.operating_margin", "Operating margin"));
                        ui.label(format_pct(report.metrics.operating_margin_pct));
                        ui.end_row();
                        ui.label(txt("gui.analysis.dscr", "Debt service coverage ratio"));
                        match report.metrics.debt_service_coverage {
                            Some(dscr) => ui.label(format!("{dscr:.2}")),
                            None => ui.label(txt("gui.analysis.dscr_na", "n/a (no loan)")),
                        };
                        ui.end_row();
                    });
            });
        ui.add_space(8.0);

        // 월별 전망 표
        ui.horizontal(|ui| {
            heading_with_tip(
                ui,
                &txt("gui.projection.heading", "Monthly Cash Flow Projection"),
                &txt(
                    "gui.projection.tip",
                    "Stationary model: identical revenue and costs each month.",
                ),
            );
            if ui
                .button(txt("gui.export.button", "Download CSV"))
                .clicked()
            {
                if let Some(path) = FileDialog::new()
                    .set_file_name("business_projections.csv")
                    .add_filter("CSV", &["csv"])
                    .save_file()
                {
                    self.export_status =
                        Some(match export::write_projection_csv(&path, &report.records) {
                            Ok(()) => format!(
                                "{} {}",
                                txt("gui.export.done", "Saved:"),
                                path.display()
                            ),
                            Err(e) => format!("{}: {e}", txt("gui.export.error", "Export error")),
                        });
                }
            }
            if let Some(status) = &self.export_status {
                ui.small(status.clone());
            }
        });
        egui::ScrollArea::vertical()
            .max_height(320.0)
            .show(ui, |ui| {
                egui::Grid::new("projection_table")
                    .num_columns(8)
                    .striped(true)
                    .spacing([16.0, 2.0])
                    .show(ui, |ui| {
                        ui.strong(txt("gui.table.month", "Month"));
                        ui.strong(txt("gui.table.revenue", "Revenue"));
                        ui.strong(txt("gui.table.fixed", "Fixed"));
                        ui.strong(txt("gui.table.variable", "Variable"));
                        ui.strong(txt("gui.table.loan", "Loan"));
                        ui.strong(txt("gui.table.total", "Total"));
                        ui.strong(txt("gui.table.profit", "Profit"));
                        ui.strong(txt("gui.table.cumulative", "Cumulative"));
                        ui.end_row();
                        for r in &report.records {
                            ui.label(r.month.to_string());
                            ui.label(format_usd(r.revenue));
                            ui.label(format_usd(r.fixed_costs));
                            ui.label(format_usd(r.variable_costs));
                            ui.label(format_usd(r.loan_payment));
                            ui.label(format_usd(r.total_costs));
                            ui.label(format_usd(r.profit));
                            ui.label(format_usd(r.cumulative_cash_flow));
                            ui.end_row();
                        }
                    });
            });
    }

    fn ui_calc_error(&self, ui: &mut egui::Ui, error: &CalcError) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.label(
            egui::RichText::new(format!(
                "{}: {error}",
                txt("gui.calc_error", "Calculation error")
            ))
            .color(egui::Color32::from_rgb(200, 40, 40))
            .strong(),
        );
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Business Finance Toolbox"));
                ui.label(" | Desktop GUI");
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            egui::Window::new(txt("gui.settings.title", "Program Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang.auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });

                    ui.separator();
                    ui.label(txt("gui.settings.custom_font", "Custom font (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui.button(txt("gui.settings.load_font", "Load")).clicked() {
                            self.font_load_error =
                                load_custom_font(ctx, &self.custom_font_path).err();
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.small(err.clone());
                    }

                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(
                            &self.config.language,
                            Some(self.config.language.as_str()),
                        );
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Offline cash-flow calculator for a service-business launch plan",
                    ));
                    ui.label(txt("gui.about.version", "Version: 1.0"));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.model",
                        "- Stationary model: identical revenue/costs each month over the horizon.",
                    ));
                    ui.label(txt(
                        "gui.about.payback",
                        "- Payback month: first month with cumulative cash flow strictly above zero.",
                    ));
                    ui.label(txt(
                        "gui.about.scenario",
                        "- Scenario parameters are session-only; only UI preferences are saved.",
                    ));
                });
        }

        // 좌측 파라미터 / 중앙 결과
        egui::SidePanel::left("params_panel")
            .resizable(true)
            .default_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.ui_params(ui);
                });
            });

        // 파라미터가 바뀔 때마다 전체 파이프라인을 다시 평가한다.
        let result = self.scenario.evaluate();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match &result {
                Ok(report) => self.ui_report(ui, report),
                Err(error) => self.ui_calc_error(ui, error),
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(format_usd(39_200.0), "$39,200.00");
        assert_eq!(format_usd(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_usd(-569.61), "-$569.61");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn payback_label_renders_beyond_horizon_like_dashboard() {
        assert_eq!(payback_label(PaybackPeriod::Month(11), 24, "months"), "11 months");
        assert_eq!(
            payback_label(PaybackPeriod::BeyondHorizon, 24, "months"),
            ">24 months"
        );
    }

    #[test]
    fn default_scenario_evaluates() {
        let report = BusinessScenario::default().evaluate().expect("default scenario");
        assert_eq!(report.records.len(), 24);
        assert!(report.loan.monthly_payment > 0.0);
    }
}
