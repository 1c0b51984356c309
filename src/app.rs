use crate::config::Config;
use crate::finance::BusinessScenario;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 재무 계산 오류
    Calc(crate::finance::CalcError),
    /// CSV 내보내기 오류
    Export(crate::export::ExportError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Calc(e) => write!(f, "계산 오류: {e}"),
            AppError::Export(e) => write!(f, "내보내기 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<crate::finance::CalcError> for AppError {
    fn from(value: crate::finance::CalcError) -> Self {
        AppError::Calc(value)
    }
}

impl From<crate::export::ExportError> for AppError {
    fn from(value: crate::export::ExportError) -> Self {
        AppError::Export(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
/// 시나리오는 세션 한정이며 기본값에서 시작한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut scenario = BusinessScenario::default();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::StartupCosts => ui_cli::handle_startup_costs(tr, &mut scenario)?,
            MenuChoice::Params => ui_cli::handle_params(tr, &mut scenario)?,
            MenuChoice::Loan => ui_cli::handle_loan(tr, &mut scenario)?,
            MenuChoice::Projection => ui_cli::handle_projection(tr, &mut scenario)?,
            MenuChoice::ExportCsv => ui_cli::handle_export(tr, &scenario)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
