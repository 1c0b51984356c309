use business_finance_toolbox::finance::{
    aggregate_startup, break_even_clients, derive_metrics, gross_margin_per_client, project,
    CalcError, MetricsInput, MonthlyRecord, PaybackPeriod, ProjectionInput, StartupCostBreakdown,
};

/// 월 손익이 일정한 단순 전망 표를 만든다.
fn flat_projection(monthly_profit: f64, startup_total: f64, horizon: u32) -> Vec<MonthlyRecord> {
    project(&ProjectionInput {
        monthly_revenue: monthly_profit,
        monthly_fixed_costs: 0.0,
        monthly_variable_costs: 0.0,
        monthly_loan_payment: 0.0,
        startup_total,
        horizon_months: horizon,
    })
    .expect("flat projection")
}

fn metrics_input(records: &[MonthlyRecord], startup_total: f64) -> MetricsInput<'_> {
    MetricsInput {
        records,
        startup_total,
        monthly_fixed_costs: 0.0,
        monthly_loan_payment: 0.0,
        average_fee: 100.0,
        supplies_per_client: 0.0,
        credit_card_fee_pct: 0.0,
    }
}

#[test]
fn startup_aggregation_is_exact_sum() {
    let breakdown = StartupCostBreakdown {
        legal: 1.0,
        renovation: 2.0,
        equipment_deposit: 3.0,
        initial_supplies: 4.0,
        website: 5.0,
        rent_deposit: 6.0,
        other: 7.0,
    };
    assert_eq!(aggregate_startup(&breakdown).expect("sum"), 28.0);

    let zeros = StartupCostBreakdown {
        legal: 0.0,
        renovation: 0.0,
        equipment_deposit: 0.0,
        initial_supplies: 0.0,
        website: 0.0,
        rent_deposit: 0.0,
        other: 0.0,
    };
    assert_eq!(aggregate_startup(&zeros).expect("zero sum"), 0.0);

    let negative = StartupCostBreakdown {
        legal: -1.0,
        ..breakdown
    };
    assert!(matches!(
        aggregate_startup(&negative),
        Err(CalcError::InvalidInput(_))
    ));
}

#[test]
fn payback_requires_strictly_positive_cumulative() {
    // 손익 500, 창업 비용 6,000: 12개월째 누적이 정확히 0이므로 회수로 치지 않는다.
    let records = flat_projection(500.0, 6_000.0, 24);
    assert_eq!(records[11].cumulative_cash_flow, 0.0);
    let summary = derive_metrics(metrics_input(&records, 6_000.0)).expect("metrics");
    assert_eq!(summary.payback, PaybackPeriod::Month(13));

    // 손익 600: 10개월째 0, 11개월째 +600 → 11개월.
    let records = flat_projection(600.0, 6_000.0, 24);
    assert_eq!(records[9].cumulative_cash_flow, 0.0);
    let summary = derive_metrics(metrics_input(&records, 6_000.0)).expect("metrics");
    assert_eq!(summary.payback, PaybackPeriod::Month(11));
}

#[test]
fn payback_beyond_horizon_is_data_not_error() {
    let records = flat_projection(100.0, 6_000.0, 24);
    let summary = derive_metrics(metrics_input(&records, 6_000.0)).expect("metrics");
    assert_eq!(summary.payback, PaybackPeriod::BeyondHorizon);
}

#[test]
fn horizon_end_roi_formula() {
    // 손익 600 × 24개월 − 6,000 = 8,400 → (8,400 + 6,000) / 6,000 × 100 = 240%
    let records = flat_projection(600.0, 6_000.0, 24);
    let summary = derive_metrics(metrics_input(&records, 6_000.0)).expect("metrics");
    assert!((summary.horizon_roi_pct - 240.0).abs() < 1e-9);
}

#[test]
fn roi_with_zero_startup_total_fails() {
    let records = flat_projection(600.0, 0.0, 24);
    let res = derive_metrics(metrics_input(&records, 0.0));
    assert!(matches!(res, Err(CalcError::DivisionByZero(_))));
}

#[test]
fn metrics_on_empty_projection_fail() {
    let records = flat_projection(600.0, 6_000.0, 0);
    assert!(records.is_empty());
    let res = derive_metrics(metrics_input(&records, 6_000.0));
    assert!(matches!(res, Err(CalcError::InvalidInput(_))));
}

#[test]
fn break_even_rounds_up_to_whole_clients() {
    // 마진 = 100 − 10 − 100×10% = 80
    assert_eq!(break_even_clients(800.0, 100.0, 10.0, 10.0).expect("exact"), 10);
    assert_eq!(break_even_clients(810.0, 100.0, 10.0, 10.0).expect("round up"), 11);
    assert_eq!(break_even_clients(0.0, 100.0, 10.0, 10.0).expect("zero"), 0);
}

#[test]
fn non_positive_margin_is_invalid_pricing() {
    // 요금 20, 소모품 15, 수수료 30% → 마진 −1
    assert!(matches!(
        break_even_clients(100.0, 20.0, 15.0, 30.0),
        Err(CalcError::InvalidPricing(_))
    ));
    // 마진이 정확히 0인 경우도 손익분기점이 정의되지 않는다.
    assert!(matches!(
        break_even_clients(100.0, 20.0, 10.0, 50.0),
        Err(CalcError::InvalidPricing(_))
    ));

    let records = flat_projection(600.0, 6_000.0, 24);
    let mut input = metrics_input(&records, 6_000.0);
    input.average_fee = 20.0;
    input.supplies_per_client = 15.0;
    input.credit_card_fee_pct = 30.0;
    assert!(matches!(
        derive_metrics(input),
        Err(CalcError::InvalidPricing(_))
    ));
}

#[test]
fn gross_margin_is_signed_and_total() {
    assert!((gross_margin_per_client(300.0, 20.0, 2.9) - 271.3).abs() < 1e-9);
    assert!((gross_margin_per_client(20.0, 15.0, 30.0) - (-1.0)).abs() < 1e-9);
}

#[test]
fn operating_margin_and_coverage_over_stationary_month() {
    let records = project(&ProjectionInput {
        monthly_revenue: 10_000.0,
        monthly_fixed_costs: 4_000.0,
        monthly_variable_costs: 1_000.0,
        monthly_loan_payment: 500.0,
        startup_total: 20_000.0,
        horizon_months: 24,
    })
    .expect("project");
    let summary = derive_metrics(MetricsInput {
        records: &records,
        startup_total: 20_000.0,
        monthly_fixed_costs: 4_000.0,
        monthly_loan_payment: 500.0,
        average_fee: 100.0,
        supplies_per_client: 10.0,
        credit_card_fee_pct: 2.0,
    })
    .expect("metrics");
    // (10,000 − 4,000 − 1,000) / 10,000 × 100 = 50%
    assert!((summary.operating_margin_pct - 50.0).abs() < 1e-9);
    // (10,000 − 4,000 − 1,000) / 500 = 10
    let dscr = summary.debt_service_coverage.expect("dscr");
    assert!((dscr - 10.0).abs() < 1e-9);
}

#[test]
fn zero_loan_payment_means_coverage_not_applicable() {
    let records = flat_projection(600.0, 6_000.0, 24);
    let summary = derive_metrics(metrics_input(&records, 6_000.0)).expect("metrics");
    assert_eq!(summary.debt_service_coverage, None);
}

#[test]
fn zero_revenue_fails_operating_margin() {
    let records = project(&ProjectionInput {
        monthly_revenue: 0.0,
        monthly_fixed_costs: 100.0,
        monthly_variable_costs: 0.0,
        monthly_loan_payment: 0.0,
        startup_total: 1_000.0,
        horizon_months: 12,
    })
    .expect("project");
    let res = derive_metrics(metrics_input(&records, 1_000.0));
    assert!(matches!(res, Err(CalcError::DivisionByZero(_))));
}
