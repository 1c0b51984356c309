use serde::{Deserialize, Serialize};

use super::{
    aggregate_startup, amortize, derive_metrics, monthly_variable_costs, principal_after_down_payment,
    project, CalcError, LoanInput, LoanPaymentResult, MetricsInput, MetricsSummary, MonthlyRecord,
    PaybackPeriod, ProjectionInput, StartupCostBreakdown, VariableCostInput,
    DEFAULT_HORIZON_MONTHS,
};

/// 사업 시나리오 전체 입력. 계산 1회분의 불변 값 객체이며,
/// 모든 파생값은 evaluate()가 매번 처음부터 다시 만든다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessScenario {
    /// 창업 비용 내역
    pub startup: StartupCostBreakdown,
    /// 월 목표 고객 수
    pub clients_per_month: u32,
    /// 고객 1인당 평균 요금 [$]
    pub average_fee: f64,
    /// 월 임대료 [$]
    pub monthly_rent: f64,
    /// 장비 리스료 [$/월]
    pub equipment_lease: f64,
    /// 보험료 [$/월]
    pub insurance: f64,
    /// 마케팅비 [$/월]
    pub marketing: f64,
    /// 소프트웨어/예약 시스템 [$/월]
    pub software: f64,
    /// 연간 회계/세무 수수료 [$] (월 고정비에 1/12로 반영)
    pub annual_accounting_fee: f64,
    /// 고객 1인당 소모품 비용 [$]
    pub supplies_per_client: f64,
    /// 월 공과금 [$]
    pub monthly_utilities: f64,
    /// 카드 결제 수수료 [%]
    pub credit_card_fee_pct: f64,
    /// 대출 연 이율 [%]
    pub annual_interest_rate_pct: f64,
    /// 대출 기간 [년]
    pub loan_term_years: u32,
    /// 계약금 비율 [%]
    pub down_payment_pct: f64,
    /// 전망 기간 [개월]
    pub horizon_months: u32,
}

impl Default for BusinessScenario {
    fn default() -> Self {
        Self {
            startup: StartupCostBreakdown {
                legal: 3_700.0,
                renovation: 15_000.0,
                equipment_deposit: 5_000.0,
                initial_supplies: 3_000.0,
                website: 3_000.0,
                rent_deposit: 7_500.0,
                other: 2_000.0,
            },
            clients_per_month: 40,
            average_fee: 300.0,
            monthly_rent: 2_500.0,
            equipment_lease: 2_500.0,
            insurance: 300.0,
            marketing: 500.0,
            software: 150.0,
            annual_accounting_fee: 2_400.0,
            supplies_per_client: 20.0,
            monthly_utilities: 400.0,
            credit_card_fee_pct: 2.9,
            annual_interest_rate_pct: 9.0,
            loan_term_years: 5,
            down_payment_pct: 30.0,
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

impl BusinessScenario {
    /// 월 매출 [$] (= 고객 수 × 평균 요금).
    pub fn monthly_revenue(&self) -> f64 {
        self.clients_per_month as f64 * self.average_fee
    }

    /// 월 고정비 [$]. 연간 회계 수수료는 1/12로 환산해 포함한다.
    pub fn monthly_fixed_costs(&self) -> f64 {
        self.monthly_rent
            + self.equipment_lease
            + self.insurance
            + self.marketing
            + self.software
            + self.annual_accounting_fee / 12.0
    }

    /// 전체 파이프라인을 실행한다: 창업 비용 합산 → 대출 원금/상환 →
    /// 변동비 → 월별 전망 → 요약 지표.
    pub fn evaluate(&self) -> Result<ScenarioReport, CalcError> {
        let startup_total = aggregate_startup(&self.startup)?;
        let loan_principal = principal_after_down_payment(startup_total, self.down_payment_pct)?;
        let loan = amortize(LoanInput {
            principal: loan_principal,
            annual_rate_pct: self.annual_interest_rate_pct,
            term_years: self.loan_term_years,
        })?;

        let monthly_revenue = self.monthly_revenue();
        let monthly_fixed_costs = self.monthly_fixed_costs();
        let monthly_variable = monthly_variable_costs(&VariableCostInput {
            clients_per_month: self.clients_per_month,
            supplies_per_client: self.supplies_per_client,
            monthly_utilities: self.monthly_utilities,
            monthly_revenue,
            credit_card_fee_pct: self.credit_card_fee_pct,
        })?;

        let records = project(&ProjectionInput {
            monthly_revenue,
            monthly_fixed_costs,
            monthly_variable_costs: monthly_variable,
            monthly_loan_payment: loan.monthly_payment,
            startup_total,
            horizon_months: self.horizon_months,
        })?;

        let metrics = derive_metrics(MetricsInput {
            records: &records,
            startup_total,
            monthly_fixed_costs,
            monthly_loan_payment: loan.monthly_payment,
            average_fee: self.average_fee,
            supplies_per_client: self.supplies_per_client,
            credit_card_fee_pct: self.credit_card_fee_pct,
        })?;

        Ok(ScenarioReport {
            startup_total,
            down_payment: startup_total - loan_principal,
            loan_principal,
            loan,
            monthly_revenue,
            monthly_fixed_costs,
            monthly_variable_costs: monthly_variable,
            clients_per_month: self.clients_per_month,
            horizon_months: self.horizon_months,
            records,
            metrics,
        })
    }
}

/// 시나리오 평가 결과 일체.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    /// 창업 비용 총액 [$]
    pub startup_total: f64,
    /// 계약금 [$]
    pub down_payment: f64,
    /// 대출 원금 [$]
    pub loan_principal: f64,
    /// 상환 계산 결과
    pub loan: LoanPaymentResult,
    /// 월 매출 [$]
    pub monthly_revenue: f64,
    /// 월 고정비 [$]
    pub monthly_fixed_costs: f64,
    /// 월 변동비 [$]
    pub monthly_variable_costs: f64,
    /// 월 고객 수 (경고 판정용)
    pub clients_per_month: u32,
    /// 전망 기간 [개월]
    pub horizon_months: u32,
    /// 월별 전망 표
    pub records: Vec<MonthlyRecord>,
    /// 요약 지표
    pub metrics: MetricsSummary,
}

/// 정상 결과이지만 사용자에게 경고로 보여줄 조건.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioWarning {
    /// 전망 기간 내 투자금 회수 불가
    PaybackBeyondHorizon,
    /// 현재 고객 수가 손익분기점 미만
    BelowBreakEven { break_even: u32, clients: u32 },
}

impl ScenarioReport {
    /// 월 총비용 [$] (고정비 + 변동비 + 납입금).
    pub fn monthly_total_costs(&self) -> f64 {
        self.monthly_fixed_costs + self.monthly_variable_costs + self.loan.monthly_payment
    }

    /// 월 손익 [$].
    pub fn monthly_profit(&self) -> f64 {
        self.monthly_revenue - self.monthly_total_costs()
    }

    /// 경고 조건을 판정한다. 실패가 아니라 데이터로 전달한다.
    pub fn warnings(&self) -> Vec<ScenarioWarning> {
        let mut out = Vec::new();
        if self.metrics.payback == PaybackPeriod::BeyondHorizon {
            out.push(ScenarioWarning::PaybackBeyondHorizon);
        }
        if self.clients_per_month < self.metrics.break_even_clients {
            out.push(ScenarioWarning::BelowBreakEven {
                break_even: self.metrics.break_even_clients,
                clients: self.clients_per_month,
            });
        }
        out
    }
}
