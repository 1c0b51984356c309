use super::CalcError;

/// 원리금 균등 상환 대출 조건.
#[derive(Debug, Clone)]
pub struct LoanInput {
    /// 대출 원금 [$]
    pub principal: f64,
    /// 연 이율 [%] (0~100)
    pub annual_rate_pct: f64,
    /// 상환 기간 [년]
    pub term_years: u32,
}

/// 상환 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanPaymentResult {
    /// 월 납입금 [$]
    pub monthly_payment: f64,
    /// 총 이자 [$] (= 월 납입금 × 납입 횟수 − 원금)
    pub total_interest: f64,
    /// 납입 횟수 (= 기간 × 12)
    pub payment_count: u32,
}

/// 표준 원리금 균등 상환 공식으로 월 납입금을 계산한다.
///
/// M = P × [i(1+i)^n] / [(1+i)^n − 1],  i = 연이율/1200, n = 12 × 기간
/// 무이자(i = 0)인 경우 일반식의 분모가 0이 되므로 P/n으로 처리한다.
pub fn amortize(input: LoanInput) -> Result<LoanPaymentResult, CalcError> {
    if input.principal < 0.0 {
        return Err(CalcError::InvalidInput("대출 원금은 음수일 수 없습니다."));
    }
    if !(0.0..=100.0).contains(&input.annual_rate_pct) {
        return Err(CalcError::InvalidInput("연 이율은 0~100% 범위여야 합니다."));
    }
    if input.term_years == 0 {
        return Err(CalcError::InvalidInput("상환 기간은 1년 이상이어야 합니다."));
    }

    let monthly_rate = input.annual_rate_pct / 1200.0;
    let n = input.term_years * 12;
    let monthly_payment = if monthly_rate == 0.0 {
        input.principal / n as f64
    } else {
        let growth = (1.0 + monthly_rate).powi(n as i32);
        input.principal * (monthly_rate * growth) / (growth - 1.0)
    };

    Ok(LoanPaymentResult {
        monthly_payment,
        total_interest: monthly_payment * n as f64 - input.principal,
        payment_count: n,
    })
}

/// 창업 비용 총액에서 계약금 비율을 제외한 대출 원금을 계산한다.
pub fn principal_after_down_payment(
    startup_total: f64,
    down_payment_pct: f64,
) -> Result<f64, CalcError> {
    if startup_total < 0.0 {
        return Err(CalcError::InvalidInput("창업 비용 총액은 음수일 수 없습니다."));
    }
    if !(0.0..=100.0).contains(&down_payment_pct) {
        return Err(CalcError::InvalidInput("계약금 비율은 0~100% 범위여야 합니다."));
    }
    Ok(startup_total * (1.0 - down_payment_pct / 100.0))
}
