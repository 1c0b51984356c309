use serde::{Deserialize, Serialize};

use super::CalcError;

/// 기본 전망 기간 [개월].
pub const DEFAULT_HORIZON_MONTHS: u32 = 24;

/// 월별 현금흐름 스냅샷. month는 1부터 시작한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub month: u32,
    /// 월 매출 [$]
    pub revenue: f64,
    /// 월 고정비 [$]
    pub fixed_costs: f64,
    /// 월 변동비 [$]
    pub variable_costs: f64,
    /// 월 대출 납입금 [$]
    pub loan_payment: f64,
    /// 월 총비용 [$] (= 고정비 + 변동비 + 납입금)
    pub total_costs: f64,
    /// 월 손익 [$] (= 매출 − 총비용)
    pub profit: f64,
    /// 누적 현금흐름 [$] (−창업 비용 총액에서 시작하는 손익 누계)
    pub cumulative_cash_flow: f64,
}

/// 현금흐름 전망 입력. 월별 파라미터는 기간 내내 일정하다고 가정한다.
#[derive(Debug, Clone)]
pub struct ProjectionInput {
    /// 월 매출 [$]
    pub monthly_revenue: f64,
    /// 월 고정비 [$]
    pub monthly_fixed_costs: f64,
    /// 월 변동비 [$]
    pub monthly_variable_costs: f64,
    /// 월 대출 납입금 [$]
    pub monthly_loan_payment: f64,
    /// 창업 비용 총액 [$] (누적 현금흐름의 음수 시작점)
    pub startup_total: f64,
    /// 전망 기간 [개월]
    pub horizon_months: u32,
}

/// 월 변동비 계산 입력.
#[derive(Debug, Clone)]
pub struct VariableCostInput {
    /// 월 고객 수
    pub clients_per_month: u32,
    /// 고객 1인당 소모품 비용 [$]
    pub supplies_per_client: f64,
    /// 월 공과금 [$]
    pub monthly_utilities: f64,
    /// 월 매출 [$] (카드 수수료 산정 기준)
    pub monthly_revenue: f64,
    /// 카드 결제 수수료 [%] (0~100)
    pub credit_card_fee_pct: f64,
}

/// 월 변동비를 계산한다. 카드 수수료는 고객 단위가 아니라 매출 총액에 부과된다.
pub fn monthly_variable_costs(input: &VariableCostInput) -> Result<f64, CalcError> {
    if input.supplies_per_client < 0.0
        || input.monthly_utilities < 0.0
        || input.monthly_revenue < 0.0
    {
        return Err(CalcError::InvalidInput("변동비 구성 요소는 음수일 수 없습니다."));
    }
    if !(0.0..=100.0).contains(&input.credit_card_fee_pct) {
        return Err(CalcError::InvalidInput("카드 수수료는 0~100% 범위여야 합니다."));
    }
    let card_fees = input.monthly_revenue * input.credit_card_fee_pct / 100.0;
    Ok(input.clients_per_month as f64 * input.supplies_per_client
        + input.monthly_utilities
        + card_fees)
}

/// 월별 현금흐름 표를 생성한다.
///
/// 누적 현금흐름은 −창업 비용 총액에서 시작해 매월 손익을 더해 간다.
/// horizon_months가 0이면 빈 표를 반환한다.
pub fn project(input: &ProjectionInput) -> Result<Vec<MonthlyRecord>, CalcError> {
    if input.monthly_revenue < 0.0 {
        return Err(CalcError::InvalidInput("월 매출은 음수일 수 없습니다."));
    }
    if input.monthly_fixed_costs < 0.0
        || input.monthly_variable_costs < 0.0
        || input.monthly_loan_payment < 0.0
    {
        return Err(CalcError::InvalidInput("월 비용 입력은 음수일 수 없습니다."));
    }
    if input.startup_total < 0.0 {
        return Err(CalcError::InvalidInput("창업 비용 총액은 음수일 수 없습니다."));
    }

    let total_costs =
        input.monthly_fixed_costs + input.monthly_variable_costs + input.monthly_loan_payment;
    let profit = input.monthly_revenue - total_costs;

    let mut records = Vec::with_capacity(input.horizon_months as usize);
    let mut cumulative_cash_flow = -input.startup_total;
    for month in 1..=input.horizon_months {
        cumulative_cash_flow += profit;
        records.push(MonthlyRecord {
            month,
            revenue: input.monthly_revenue,
            fixed_costs: input.monthly_fixed_costs,
            variable_costs: input.monthly_variable_costs,
            loan_payment: input.monthly_loan_payment,
            total_costs,
            profit,
            cumulative_cash_flow,
        });
    }
    Ok(records)
}
