use business_finance_toolbox::finance::{
    amortize, principal_after_down_payment, CalcError, LoanInput,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

#[test]
fn reference_payment_9pct_5yr() {
    // 표준 상환 공식 기준점: 10,000 @ 9% / 5년 → 월 207.58
    let res = amortize(LoanInput {
        principal: 10_000.0,
        annual_rate_pct: 9.0,
        term_years: 5,
    })
    .expect("amortize");
    assert_close("monthly_payment", res.monthly_payment, 207.58, 1e-2);
    assert_close("total_interest", res.total_interest, 2_455.0, 0.5);
    assert_eq!(res.payment_count, 60);
}

#[test]
fn zero_rate_divides_principal_evenly() {
    // 무이자 대출은 일반식의 분모가 0이므로 P/n으로 처리되어야 한다.
    let res = amortize(LoanInput {
        principal: 12_000.0,
        annual_rate_pct: 0.0,
        term_years: 1,
    })
    .expect("zero-rate amortize");
    assert_eq!(res.monthly_payment, 1_000.0);
    assert_eq!(res.total_interest, 0.0);
    assert_eq!(res.payment_count, 12);
}

#[test]
fn zero_principal_zero_payment() {
    let res = amortize(LoanInput {
        principal: 0.0,
        annual_rate_pct: 9.0,
        term_years: 5,
    })
    .expect("zero-principal amortize");
    assert_eq!(res.monthly_payment, 0.0);
    assert_eq!(res.total_interest, 0.0);
}

#[test]
fn zero_term_is_invalid() {
    let res = amortize(LoanInput {
        principal: 10_000.0,
        annual_rate_pct: 9.0,
        term_years: 0,
    });
    assert!(matches!(res, Err(CalcError::InvalidInput(_))));
}

#[test]
fn out_of_domain_inputs_are_invalid() {
    let negative_principal = amortize(LoanInput {
        principal: -1.0,
        annual_rate_pct: 9.0,
        term_years: 5,
    });
    assert!(matches!(negative_principal, Err(CalcError::InvalidInput(_))));

    let negative_rate = amortize(LoanInput {
        principal: 10_000.0,
        annual_rate_pct: -0.5,
        term_years: 5,
    });
    assert!(matches!(negative_rate, Err(CalcError::InvalidInput(_))));

    let rate_above_100 = amortize(LoanInput {
        principal: 10_000.0,
        annual_rate_pct: 120.0,
        term_years: 5,
    });
    assert!(matches!(rate_above_100, Err(CalcError::InvalidInput(_))));
}

#[test]
fn down_payment_reduces_principal() {
    let principal = principal_after_down_payment(39_200.0, 30.0).expect("down payment");
    assert_close("principal", principal, 27_440.0, 1e-6);

    assert_eq!(principal_after_down_payment(1_000.0, 0.0).expect("0%"), 1_000.0);
    assert_close(
        "full down payment",
        principal_after_down_payment(1_000.0, 100.0).expect("100%"),
        0.0,
        1e-9,
    );
}

#[test]
fn down_payment_rejects_out_of_range() {
    assert!(matches!(
        principal_after_down_payment(1_000.0, -5.0),
        Err(CalcError::InvalidInput(_))
    ));
    assert!(matches!(
        principal_after_down_payment(1_000.0, 150.0),
        Err(CalcError::InvalidInput(_))
    ));
    assert!(matches!(
        principal_after_down_payment(-1.0, 30.0),
        Err(CalcError::InvalidInput(_))
    ));
}
