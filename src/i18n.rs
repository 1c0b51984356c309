use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_STARTUP: &str = "main_menu.startup_costs";
    pub const MAIN_MENU_PARAMS: &str = "main_menu.revenue_costs";
    pub const MAIN_MENU_LOAN: &str = "main_menu.loan";
    pub const MAIN_MENU_PROJECTION: &str = "main_menu.projection";
    pub const MAIN_MENU_EXPORT: &str = "main_menu.export";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const HINT_KEEP_CURRENT: &str = "prompt.keep_current_hint";

    pub const STARTUP_HEADING: &str = "startup.heading";
    pub const STARTUP_ITEM_LEGAL: &str = "startup.item.legal";
    pub const STARTUP_ITEM_RENOVATION: &str = "startup.item.renovation";
    pub const STARTUP_ITEM_EQUIPMENT_DEPOSIT: &str = "startup.item.equipment_deposit";
    pub const STARTUP_ITEM_INITIAL_SUPPLIES: &str = "startup.item.initial_supplies";
    pub const STARTUP_ITEM_WEBSITE: &str = "startup.item.website";
    pub const STARTUP_ITEM_RENT_DEPOSIT: &str = "startup.item.rent_deposit";
    pub const STARTUP_ITEM_OTHER: &str = "startup.item.other";
    pub const STARTUP_TOTAL: &str = "startup.total";

    pub const PARAMS_HEADING: &str = "params.heading";
    pub const PROMPT_CLIENTS: &str = "params.prompt.clients";
    pub const PROMPT_AVERAGE_FEE: &str = "params.prompt.average_fee";
    pub const PROMPT_RENT: &str = "params.prompt.rent";
    pub const PROMPT_EQUIPMENT_LEASE: &str = "params.prompt.equipment_lease";
    pub const PROMPT_INSURANCE: &str = "params.prompt.insurance";
    pub const PROMPT_MARKETING: &str = "params.prompt.marketing";
    pub const PROMPT_SOFTWARE: &str = "params.prompt.software";
    pub const PROMPT_ACCOUNTING_ANNUAL: &str = "params.prompt.accounting_annual";
    pub const PROMPT_SUPPLIES_PER_CLIENT: &str = "params.prompt.supplies_per_client";
    pub const PROMPT_UTILITIES: &str = "params.prompt.utilities";
    pub const PROMPT_CARD_FEE: &str = "params.prompt.card_fee";
    pub const RESULT_MONTHLY_REVENUE: &str = "params.result.monthly_revenue";
    pub const RESULT_MONTHLY_FIXED: &str = "params.result.monthly_fixed";
    pub const RESULT_MONTHLY_VARIABLE: &str = "params.result.monthly_variable";

    pub const LOAN_HEADING: &str = "loan.heading";
    pub const PROMPT_INTEREST_RATE: &str = "loan.prompt.interest_rate";
    pub const PROMPT_TERM_YEARS: &str = "loan.prompt.term_years";
    pub const PROMPT_DOWN_PAYMENT: &str = "loan.prompt.down_payment";
    pub const RESULT_LOAN_PRINCIPAL: &str = "loan.result.principal";
    pub const RESULT_DOWN_PAYMENT: &str = "loan.result.down_payment";
    pub const RESULT_MONTHLY_PAYMENT: &str = "loan.result.monthly_payment";
    pub const RESULT_TOTAL_INTEREST: &str = "loan.result.total_interest";
    pub const RESULT_PAYMENT_COUNT: &str = "loan.result.payment_count";

    pub const PROJECTION_HEADING: &str = "projection.heading";
    pub const PROMPT_HORIZON: &str = "projection.prompt.horizon";
    pub const TABLE_HEADER: &str = "projection.table_header";
    pub const RESULT_PAYBACK: &str = "projection.result.payback";
    pub const RESULT_PAYBACK_MONTHS_SUFFIX: &str = "projection.result.payback_months_suffix";
    pub const RESULT_ROI: &str = "projection.result.roi";
    pub const RESULT_BREAK_EVEN: &str = "projection.result.break_even";
    pub const RESULT_GROSS_MARGIN: &str = "projection.result.gross_margin";
    pub const RESULT_OPERATING_MARGIN: &str = "projection.result.operating_margin";
    pub const RESULT_DSCR: &str = "projection.result.dscr";
    pub const RESULT_DSCR_NA: &str = "projection.result.dscr_na";
    pub const WARN_PAYBACK_BEYOND: &str = "projection.warn.payback_beyond";
    pub const WARN_BELOW_BREAK_EVEN: &str = "projection.warn.below_break_even";

    pub const EXPORT_HEADING: &str = "export.heading";
    pub const PROMPT_EXPORT_PATH: &str = "export.prompt.path";
    pub const EXPORT_DONE: &str = "export.done";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANG: &str = "settings.current_lang";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
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

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
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
        "ko" => Some("ko".into()),
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
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
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

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Business Finance Toolbox ===",
        MAIN_MENU_STARTUP => "1) 창업 비용 입력/요약",
        MAIN_MENU_PARAMS => "2) 매출/운영비 파라미터",
        MAIN_MENU_LOAN => "3) 대출 조건/상환 요약",
        MAIN_MENU_PROJECTION => "4) 현금흐름 전망과 지표",
        MAIN_MENU_EXPORT => "5) 전망 CSV 내보내기",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        HINT_KEEP_CURRENT => "값을 비워 두면 현재 값을 유지합니다.",
        STARTUP_HEADING => "\n-- 창업 비용 (1회성) --",
        STARTUP_ITEM_LEGAL => "법무/법인 설립",
        STARTUP_ITEM_RENOVATION => "인테리어/리모델링",
        STARTUP_ITEM_EQUIPMENT_DEPOSIT => "장비 보증금",
        STARTUP_ITEM_INITIAL_SUPPLIES => "초기 소모품/재고",
        STARTUP_ITEM_WEBSITE => "웹사이트/예약 시스템",
        STARTUP_ITEM_RENT_DEPOSIT => "임대 보증금",
        STARTUP_ITEM_OTHER => "기타",
        STARTUP_TOTAL => "창업 비용 총액:",
        PARAMS_HEADING => "\n-- 매출/운영비 파라미터 --",
        PROMPT_CLIENTS => "월 목표 고객 수",
        PROMPT_AVERAGE_FEE => "고객 1인당 평균 요금 [$]",
        PROMPT_RENT => "월 임대료 [$]",
        PROMPT_EQUIPMENT_LEASE => "장비 리스료 [$/월]",
        PROMPT_INSURANCE => "보험료 [$/월]",
        PROMPT_MARKETING => "마케팅비 [$/월]",
        PROMPT_SOFTWARE => "소프트웨어/예약 시스템 [$/월]",
        PROMPT_ACCOUNTING_ANNUAL => "연간 회계/세무 수수료 [$]",
        PROMPT_SUPPLIES_PER_CLIENT => "고객 1인당 소모품 비용 [$]",
        PROMPT_UTILITIES => "월 공과금 [$]",
        PROMPT_CARD_FEE => "카드 결제 수수료 [%]",
        RESULT_MONTHLY_REVENUE => "월 매출:",
        RESULT_MONTHLY_FIXED => "월 고정비(회계 수수료 1/12 포함):",
        RESULT_MONTHLY_VARIABLE => "월 변동비:",
        LOAN_HEADING => "\n-- 대출 조건 --",
        PROMPT_INTEREST_RATE => "연 이율 [%]",
        PROMPT_TERM_YEARS => "상환 기간 [년] (3/5/7/10 권장)",
        PROMPT_DOWN_PAYMENT => "계약금 비율 [%]",
        RESULT_LOAN_PRINCIPAL => "대출 원금:",
        RESULT_DOWN_PAYMENT => "계약금:",
        RESULT_MONTHLY_PAYMENT => "월 납입금:",
        RESULT_TOTAL_INTEREST => "총 이자:",
        RESULT_PAYMENT_COUNT => "납입 횟수:",
        PROJECTION_HEADING => "\n-- 현금흐름 전망 --",
        PROMPT_HORIZON => "전망 기간 [개월]",
        TABLE_HEADER => "월 | 매출 | 고정비 | 변동비 | 납입금 | 총비용 | 손익 | 누적",
        RESULT_PAYBACK => "투자금 회수 시점:",
        RESULT_PAYBACK_MONTHS_SUFFIX => "개월",
        RESULT_ROI => "기간 말 ROI:",
        RESULT_BREAK_EVEN => "손익분기 고객 수:",
        RESULT_GROSS_MARGIN => "고객 1인당 기여 마진:",
        RESULT_OPERATING_MARGIN => "영업이익률:",
        RESULT_DSCR => "부채상환비율(DSCR):",
        RESULT_DSCR_NA => "부채상환비율(DSCR): 해당 없음 (무대출)",
        WARN_PAYBACK_BEYOND => "경고: 현재 조건으로는 전망 기간 내에 투자금을 회수하지 못합니다. 고객 수, 요금, 비용을 조정해 보세요.",
        WARN_BELOW_BREAK_EVEN => "경고: 월 고객 수가 손익분기점에 미치지 못합니다. 현재 조건에서는 매월 적자입니다.",
        EXPORT_HEADING => "\n-- CSV 내보내기 --",
        PROMPT_EXPORT_PATH => "저장 경로 (기본 projections.csv): ",
        EXPORT_DONE => "전망 표를 저장했습니다:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANG => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Business Finance Toolbox ===",
        MAIN_MENU_STARTUP => "1) Startup costs",
        MAIN_MENU_PARAMS => "2) Revenue & operating costs",
        MAIN_MENU_LOAN => "3) Loan terms & amortization",
        MAIN_MENU_PROJECTION => "4) Cash-flow projection & metrics",
        MAIN_MENU_EXPORT => "5) Export projection CSV",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        HINT_KEEP_CURRENT => "Leave a value empty to keep the current one.",
        STARTUP_HEADING => "\n-- One-time startup costs --",
        STARTUP_ITEM_LEGAL => "Legal & incorporation",
        STARTUP_ITEM_RENOVATION => "Renovations",
        STARTUP_ITEM_EQUIPMENT_DEPOSIT => "Equipment deposit",
        STARTUP_ITEM_INITIAL_SUPPLIES => "Initial supplies",
        STARTUP_ITEM_WEBSITE => "Website & booking setup",
        STARTUP_ITEM_RENT_DEPOSIT => "Rent deposit",
        STARTUP_ITEM_OTHER => "Other",
        STARTUP_TOTAL => "Total startup costs:",
        PARAMS_HEADING => "\n-- Revenue & operating parameters --",
        PROMPT_CLIENTS => "Target clients per month",
        PROMPT_AVERAGE_FEE => "Average service fee [$]",
        PROMPT_RENT => "Monthly rent [$]",
        PROMPT_EQUIPMENT_LEASE => "Equipment lease [$/mo]",
        PROMPT_INSURANCE => "Insurance [$/mo]",
        PROMPT_MARKETING => "Marketing [$/mo]",
        PROMPT_SOFTWARE => "Software/booking systems [$/mo]",
        PROMPT_ACCOUNTING_ANNUAL => "Annual accounting & tax prep [$]",
        PROMPT_SUPPLIES_PER_CLIENT => "Supplies cost per client [$]",
        PROMPT_UTILITIES => "Monthly utilities [$]",
        PROMPT_CARD_FEE => "Credit-card processing fee [%]",
        RESULT_MONTHLY_REVENUE => "Monthly revenue:",
        RESULT_MONTHLY_FIXED => "Monthly fixed costs (incl. 1/12 accounting):",
        RESULT_MONTHLY_VARIABLE => "Monthly variable costs:",
        LOAN_HEADING => "\n-- Loan terms --",
        PROMPT_INTEREST_RATE => "Annual interest rate [%]",
        PROMPT_TERM_YEARS => "Loan term [years] (3/5/7/10 typical)",
        PROMPT_DOWN_PAYMENT => "Down payment [%]",
        RESULT_LOAN_PRINCIPAL => "Loan principal:",
        RESULT_DOWN_PAYMENT => "Down payment:",
        RESULT_MONTHLY_PAYMENT => "Monthly payment:",
        RESULT_TOTAL_INTEREST => "Total interest:",
        RESULT_PAYMENT_COUNT => "Number of payments:",
        PROJECTION_HEADING => "\n-- Cash-flow projection --",
        PROMPT_HORIZON => "Projection horizon [months]",
        TABLE_HEADER => "Mo | Revenue | Fixed | Variable | Loan | Total | Profit | Cumulative",
        RESULT_PAYBACK => "Payback period:",
        RESULT_PAYBACK_MONTHS_SUFFIX => "months",
        RESULT_ROI => "Horizon-end ROI:",
        RESULT_BREAK_EVEN => "Break-even clients per month:",
        RESULT_GROSS_MARGIN => "Gross margin per client:",
        RESULT_OPERATING_MARGIN => "Operating margin:",
        RESULT_DSCR => "Debt-service coverage ratio:",
        RESULT_DSCR_NA => "Debt-service coverage ratio: n/a (no loan)",
        WARN_PAYBACK_BEYOND => "Warning: at current settings the payback period extends beyond the projection horizon. Consider adjusting clients, pricing, or costs.",
        WARN_BELOW_BREAK_EVEN => "Warning: monthly clients are below the break-even point. The business operates at a loss under these conditions.",
        EXPORT_HEADING => "\n-- CSV export --",
        PROMPT_EXPORT_PATH => "Output path (default projections.csv): ",
        EXPORT_DONE => "Projection table saved:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANG => "Current language:",
        SETTINGS_OPTIONS => "1) Korean  2) English",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        _ => return None,
    })
}
