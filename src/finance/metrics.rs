use super::{CalcError, MonthlyRecord};

/// 투자금 회수 시점. 전망 기간 안에 회수하지 못하면 BeyondHorizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaybackPeriod {
    /// 누적 현금흐름이 처음으로 양수가 되는 달 (1부터 시작)
    Month(u32),
    /// 전망 기간 내 회수 불가
    BeyondHorizon,
}

/// 지표 계산 입력.
#[derive(Debug, Clone)]
pub struct MetricsInput<'a> {
    /// 전망 표 (1개월 이상)
    pub records: &'a [MonthlyRecord],
    /// 창업 비용 총액 [$]
    pub startup_total: f64,
    /// 월 고정비 [$]
    pub monthly_fixed_costs: f64,
    /// 월 대출 납입금 [$] (무대출이면 0)
    pub monthly_loan_payment: f64,
    /// 고객 1인당 평균 요금 [$]
    pub average_fee: f64,
    /// 고객 1인당 소모품 비용 [$]
    pub supplies_per_client: f64,
    /// 카드 결제 수수료 [%]
    pub credit_card_fee_pct: f64,
}

/// 요약 지표.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub payback: PaybackPeriod,
    /// 전망 기간 말 기준 ROI [%]
    pub horizon_roi_pct: f64,
    /// 손익분기 고객 수 [명/월]
    pub break_even_clients: u32,
    /// 고객 1인당 기여 마진 [$] (음수일 수 있음)
    pub gross_margin_per_client: f64,
    /// 영업이익률 [%]
    pub operating_margin_pct: f64,
    /// 부채상환비율 (무대출이면 None)
    pub debt_service_coverage: Option<f64>,
}

/// 고객 1인당 기여 마진을 계산한다. 요금에서 소모품비와 카드 수수료를 뺀 값.
pub fn gross_margin_per_client(
    average_fee: f64,
    supplies_per_client: f64,
    credit_card_fee_pct: f64,
) -> f64 {
    average_fee - supplies_per_client - average_fee * credit_card_fee_pct / 100.0
}

/// 손익분기 고객 수를 해석적으로 계산한다.
///
/// ceil((고정비 + 납입금) / 기여 마진). 기여 마진이 0 이하이면 요금이
/// 변동비조차 감당하지 못하는 구조이므로 실패한다.
pub fn break_even_clients(
    monthly_fixed_plus_loan: f64,
    average_fee: f64,
    supplies_per_client: f64,
    credit_card_fee_pct: f64,
) -> Result<u32, CalcError> {
    if monthly_fixed_plus_loan < 0.0 {
        return Err(CalcError::InvalidInput("고정비와 납입금은 음수일 수 없습니다."));
    }
    let margin = gross_margin_per_client(average_fee, supplies_per_client, credit_card_fee_pct);
    if margin <= 0.0 {
        return Err(CalcError::InvalidPricing(
            "고객 1인당 기여 마진이 0 이하입니다.",
        ));
    }
    Ok((monthly_fixed_plus_loan / margin).ceil() as u32)
}

/// 전망 표와 비용 구조에서 요약 지표를 도출한다.
///
/// 회수 시점은 누적 현금흐름이 엄격히 0을 초과하는 첫 달로 판정한다.
/// 정확히 0에 도달한 달은 회수로 치지 않는다.
pub fn derive_metrics(input: MetricsInput<'_>) -> Result<MetricsSummary, CalcError> {
    let last = input
        .records
        .last()
        .ok_or(CalcError::InvalidInput("빈 전망 표로는 지표를 계산할 수 없습니다."))?;

    if input.startup_total < 0.0 {
        return Err(CalcError::InvalidInput("창업 비용 총액은 음수일 수 없습니다."));
    }
    if input.monthly_fixed_costs < 0.0 || input.monthly_loan_payment < 0.0 {
        return Err(CalcError::InvalidInput("고정비와 납입금은 음수일 수 없습니다."));
    }
    if input.average_fee < 0.0 || input.supplies_per_client < 0.0 {
        return Err(CalcError::InvalidInput("요금과 소모품비는 음수일 수 없습니다."));
    }
    if !(0.0..=100.0).contains(&input.credit_card_fee_pct) {
        return Err(CalcError::InvalidInput("카드 수수료는 0~100% 범위여야 합니다."));
    }

    let payback = input
        .records
        .iter()
        .find(|r| r.cumulative_cash_flow > 0.0)
        .map(|r| PaybackPeriod::Month(r.month))
        .unwrap_or(PaybackPeriod::BeyondHorizon);

    if input.startup_total == 0.0 {
        return Err(CalcError::DivisionByZero(
            "창업 비용 총액이 0이면 ROI를 정의할 수 없습니다.",
        ));
    }
    let horizon_roi_pct =
        (last.cumulative_cash_flow + input.startup_total) / input.startup_total * 100.0;

    let break_even_clients = break_even_clients(
        input.monthly_fixed_costs + input.monthly_loan_payment,
        input.average_fee,
        input.supplies_per_client,
        input.credit_card_fee_pct,
    )?;
    let gross_margin = gross_margin_per_client(
        input.average_fee,
        input.supplies_per_client,
        input.credit_card_fee_pct,
    );

    if last.revenue == 0.0 {
        return Err(CalcError::DivisionByZero(
            "월 매출이 0이면 영업이익률을 정의할 수 없습니다.",
        ));
    }
    let operating_cash = last.revenue - last.fixed_costs - last.variable_costs;
    let operating_margin_pct = operating_cash / last.revenue * 100.0;

    // 납입금 0은 무대출 구성이므로 오류가 아니라 "해당 없음"으로 처리한다.
    let debt_service_coverage = if input.monthly_loan_payment == 0.0 {
        None
    } else {
        Some(operating_cash / input.monthly_loan_payment)
    };

    Ok(MetricsSummary {
        payback,
        horizon_roi_pct,
        break_even_clients,
        gross_margin_per_client: gross_margin,
        operating_margin_pct,
        debt_service_coverage,
    })
}
