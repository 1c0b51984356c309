use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::config::Config;
use crate::export;
use crate::finance::{
    aggregate_startup, amortize, monthly_variable_costs, principal_after_down_payment,
    BusinessScenario, LoanInput, PaybackPeriod, ScenarioWarning, VariableCostInput,
};
use crate::formatting::{format_pct, format_usd};
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    StartupCosts,
    Params,
    Loan,
    Projection,
    ExportCsv,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_STARTUP));
    println!("{}", tr.t(keys::MAIN_MENU_PARAMS));
    println!("{}", tr.t(keys::MAIN_MENU_LOAN));
    println!("{}", tr.t(keys::MAIN_MENU_PROJECTION));
    println!("{}", tr.t(keys::MAIN_MENU_EXPORT));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::StartupCosts),
            "2" => return Ok(MenuChoice::Params),
            "3" => return Ok(MenuChoice::Loan),
            "4" => return Ok(MenuChoice::Projection),
            "5" => return Ok(MenuChoice::ExportCsv),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 창업 비용 메뉴를 처리한다. 항목별 수정 후 내역과 총액을 출력한다.
pub fn handle_startup_costs(
    tr: &Translator,
    scenario: &mut BusinessScenario,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::STARTUP_HEADING));
    println!("{}", tr.t(keys::HINT_KEEP_CURRENT));

    let startup = &mut scenario.startup;
    startup.legal = read_f64_or_keep(tr, tr.t(keys::STARTUP_ITEM_LEGAL), startup.legal)?;
    startup.renovation =
        read_f64_or_keep(tr, tr.t(keys::STARTUP_ITEM_RENOVATION), startup.renovation)?;
    startup.equipment_deposit = read_f64_or_keep(
        tr,
        tr.t(keys::STARTUP_ITEM_EQUIPMENT_DEPOSIT),
        startup.equipment_deposit,
    )?;
    startup.initial_supplies = read_f64_or_keep(
        tr,
        tr.t(keys::STARTUP_ITEM_INITIAL_SUPPLIES),
        startup.initial_supplies,
    )?;
    startup.website = read_f64_or_keep(tr, tr.t(keys::STARTUP_ITEM_WEBSITE), startup.website)?;
    startup.rent_deposit =
        read_f64_or_keep(tr, tr.t(keys::STARTUP_ITEM_RENT_DEPOSIT), startup.rent_deposit)?;
    startup.other = read_f64_or_keep(tr, tr.t(keys::STARTUP_ITEM_OTHER), startup.other)?;

    for (label_key, amount) in scenario.startup.entries() {
        println!("  {} {}", tr.t(label_key), format_usd(amount));
    }
    match aggregate_startup(&scenario.startup) {
        Ok(total) => println!("{} {}", tr.t(keys::STARTUP_TOTAL), format_usd(total)),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 매출/운영비 파라미터 메뉴를 처리한다.
pub fn handle_params(tr: &Translator, scenario: &mut BusinessScenario) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PARAMS_HEADING));
    println!("{}", tr.t(keys::HINT_KEEP_CURRENT));

    scenario.clients_per_month =
        read_u32_or_keep(tr, tr.t(keys::PROMPT_CLIENTS), scenario.clients_per_month)?;
    scenario.average_fee =
        read_f64_or_keep(tr, tr.t(keys::PROMPT_AVERAGE_FEE), scenario.average_fee)?;
    scenario.monthly_rent = read_f64_or_keep(tr, tr.t(keys::PROMPT_RENT), scenario.monthly_rent)?;
    scenario.equipment_lease =
        read_f64_or_keep(tr, tr.t(keys::PROMPT_EQUIPMENT_LEASE), scenario.equipment_lease)?;
    scenario.insurance = read_f64_or_keep(tr, tr.t(keys::PROMPT_INSURANCE), scenario.insurance)?;
    scenario.marketing = read_f64_or_keep(tr, tr.t(keys::PROMPT_MARKETING), scenario.marketing)?;
    scenario.software = read_f64_or_keep(tr, tr.t(keys::PROMPT_SOFTWARE), scenario.software)?;
    scenario.annual_accounting_fee = read_f64_or_keep(
        tr,
        tr.t(keys::PROMPT_ACCOUNTING_ANNUAL),
        scenario.annual_accounting_fee,
    )?;
    scenario.supplies_per_client = read_f64_or_keep(
        tr,
        tr.t(keys::PROMPT_SUPPLIES_PER_CLIENT),
        scenario.supplies_per_client,
    )?;
    scenario.monthly_utilities =
        read_f64_or_keep(tr, tr.t(keys::PROMPT_UTILITIES), scenario.monthly_utilities)?;
    scenario.credit_card_fee_pct =
        read_f64_or_keep(tr, tr.t(keys::PROMPT_CARD_FEE), scenario.credit_card_fee_pct)?;

    let monthly_revenue = scenario.monthly_revenue();
    println!(
        "{} {}",
        tr.t(keys::RESULT_MONTHLY_REVENUE),
        format_usd(monthly_revenue)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_MONTHLY_FIXED),
        format_usd(scenario.monthly_fixed_costs())
    );
    match monthly_variable_costs(&VariableCostInput {
        clients_per_month: scenario.clients_per_month,
        supplies_per_client: scenario.supplies_per_client,
        monthly_utilities: scenario.monthly_utilities,
        monthly_revenue,
        credit_card_fee_pct: scenario.credit_card_fee_pct,
    }) {
        Ok(variable) => println!(
            "{} {}",
            tr.t(keys::RESULT_MONTHLY_VARIABLE),
            format_usd(variable)
        ),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 대출 조건 메뉴를 처리하고 상환 요약을 출력한다.
pub fn handle_loan(tr: &Translator, scenario: &mut BusinessScenario) -> Result<(), AppError> {
    println!("{}", tr.t(keys::LOAN_HEADING));
    println!("{}", tr.t(keys::HINT_KEEP_CURRENT));

    scenario.annual_interest_rate_pct = read_f64_or_keep(
        tr,
        tr.t(keys::PROMPT_INTEREST_RATE),
        scenario.annual_interest_rate_pct,
    )?;
    scenario.loan_term_years =
        read_u32_or_keep(tr, tr.t(keys::PROMPT_TERM_YEARS), scenario.loan_term_years)?;
    scenario.down_payment_pct =
        read_f64_or_keep(tr, tr.t(keys::PROMPT_DOWN_PAYMENT), scenario.down_payment_pct)?;

    let summary = aggregate_startup(&scenario.startup).and_then(|total| {
        let principal = principal_after_down_payment(total, scenario.down_payment_pct)?;
        let loan = amortize(LoanInput {
            principal,
            annual_rate_pct: scenario.annual_interest_rate_pct,
            term_years: scenario.loan_term_years,
        })?;
        Ok((total, principal, loan))
    });
    match summary {
        Ok((total, principal, loan)) => {
            println!(
                "{} {}",
                tr.t(keys::RESULT_DOWN_PAYMENT),
                format_usd(total - principal)
            );
            println!("{} {}", tr.t(keys::RESULT_LOAN_PRINCIPAL), format_usd(principal));
            println!(
                "{} {}",
                tr.t(keys::RESULT_MONTHLY_PAYMENT),
                format_usd(loan.monthly_payment)
            );
            println!(
                "{} {}",
                tr.t(keys::RESULT_TOTAL_INTEREST),
                format_usd(loan.total_interest)
            );
            println!("{} {}", tr.t(keys::RESULT_PAYMENT_COUNT), loan.payment_count);
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 현금흐름 전망 메뉴를 처리한다. 표와 요약 지표, 경고를 출력한다.
pub fn handle_projection(tr: &Translator, scenario: &mut BusinessScenario) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PROJECTION_HEADING));
    scenario.horizon_months =
        read_u32_or_keep(tr, tr.t(keys::PROMPT_HORIZON), scenario.horizon_months)?;

    let report = match scenario.evaluate() {
        Ok(report) => report,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
    };

    println!("{}", tr.t(keys::TABLE_HEADER));
    for r in &report.records {
        println!(
            "{:>3} | {:>12} | {:>12} | {:>12} | {:>10} | {:>12} | {:>12} | {:>14}",
            r.month,
            format_usd(r.revenue),
            format_usd(r.fixed_costs),
            format_usd(r.variable_costs),
            format_usd(r.loan_payment),
            format_usd(r.total_costs),
            format_usd(r.profit),
            format_usd(r.cumulative_cash_flow),
        );
    }

    let m = &report.metrics;
    match m.payback {
        PaybackPeriod::Month(n) => println!(
            "{} {} {}",
            tr.t(keys::RESULT_PAYBACK),
            n,
            tr.t(keys::RESULT_PAYBACK_MONTHS_SUFFIX)
        ),
        PaybackPeriod::BeyondHorizon => println!(
            "{} >{} {}",
            tr.t(keys::RESULT_PAYBACK),
            report.horizon_months,
            tr.t(keys::RESULT_PAYBACK_MONTHS_SUFFIX)
        ),
    }
    println!("{} {}", tr.t(keys::RESULT_ROI), format_pct(m.horizon_roi_pct));
    println!("{} {}", tr.t(keys::RESULT_BREAK_EVEN), m.break_even_clients);
    println!(
        "{} {}",
        tr.t(keys::RESULT_GROSS_MARGIN),
        format_usd(m.gross_margin_per_client)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_OPERATING_MARGIN),
        format_pct(m.operating_margin_pct)
    );
    match m.debt_service_coverage {
        Some(dscr) => println!("{} {dscr:.2}", tr.t(keys::RESULT_DSCR)),
        None => println!("{}", tr.t(keys::RESULT_DSCR_NA)),
    }

    for warning in report.warnings() {
        match warning {
            ScenarioWarning::PaybackBeyondHorizon => {
                println!("{}", tr.t(keys::WARN_PAYBACK_BEYOND));
            }
            ScenarioWarning::BelowBreakEven { break_even, clients } => {
                println!(
                    "{} ({clients} < {break_even})",
                    tr.t(keys::WARN_BELOW_BREAK_EVEN)
                );
            }
        }
    }
    Ok(())
}

/// 전망 표를 CSV 파일로 내보낸다.
pub fn handle_export(tr: &Translator, scenario: &BusinessScenario) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EXPORT_HEADING));
    let report = match scenario.evaluate() {
        Ok(report) => report,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
    };

    let path_input = read_line(tr.t(keys::PROMPT_EXPORT_PATH))?;
    let path_str = if path_input.trim().is_empty() {
        "projections.csv"
    } else {
        path_input.trim()
    };
    export::write_projection_csv(Path::new(path_str), &report.records)?;
    println!("{} {path_str}", tr.t(keys::EXPORT_DONE));
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어는 다음 실행부터 적용된다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANG), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => cfg.language = "ko-kr".to_string(),
        "2" => cfg.language = "en-us".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 값을 입력받는다. 빈 입력이면 현재 값을 유지한다.
fn read_f64_or_keep(tr: &Translator, label: &str, current: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{current}]: "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(current);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32_or_keep(tr: &Translator, label: &str, current: u32) -> Result<u32, AppError> {
    loop {
        let s = read_line(&format!("{label} [{current}]: "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(current);
        }
        match trimmed.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
