//! 월별 전망 표를 CSV로 직렬화한다. GUI 저장 대화상자와 CLI 내보내기에서 사용.

use std::fs;
use std::path::Path;

use crate::finance::MonthlyRecord;

/// CSV 내보내기 오류를 표현한다.
#[derive(Debug)]
pub enum ExportError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// CSV 직렬화 오류
    Csv(csv::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ExportError::Csv(e) => write!(f, "CSV 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        ExportError::Io(value)
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        ExportError::Csv(value)
    }
}

/// 전망 표를 CSV 문자열로 만든다. 열 순서는 MonthlyRecord 필드 순서를 따른다.
pub fn projection_to_csv(records: &[MonthlyRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    // csv::Writer는 UTF-8만 기록한다.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 전망 표를 지정 경로에 CSV 파일로 저장한다.
pub fn write_projection_csv(path: &Path, records: &[MonthlyRecord]) -> Result<(), ExportError> {
    let csv = projection_to_csv(records)?;
    fs::write(path, csv)?;
    Ok(())
}
