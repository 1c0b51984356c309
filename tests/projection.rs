use business_finance_toolbox::finance::{
    monthly_variable_costs, project, CalcError, ProjectionInput, VariableCostInput,
    DEFAULT_HORIZON_MONTHS,
};

fn base_input() -> ProjectionInput {
    ProjectionInput {
        monthly_revenue: 12_000.0,
        monthly_fixed_costs: 6_150.0,
        monthly_variable_costs: 1_548.0,
        monthly_loan_payment: 569.61,
        startup_total: 39_200.0,
        horizon_months: DEFAULT_HORIZON_MONTHS,
    }
}

#[test]
fn length_and_numbering_match_horizon() {
    let records = project(&base_input()).expect("project");
    assert_eq!(records.len(), 24);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r.month, i as u32 + 1);
    }
}

#[test]
fn records_are_stationary_and_cumulative_is_recurrent() {
    let input = base_input();
    let records = project(&input).expect("project");

    let expected_total = input.monthly_fixed_costs
        + input.monthly_variable_costs
        + input.monthly_loan_payment;
    for r in &records {
        assert_eq!(r.revenue, input.monthly_revenue);
        assert_eq!(r.fixed_costs, input.monthly_fixed_costs);
        assert_eq!(r.variable_costs, input.monthly_variable_costs);
        assert_eq!(r.loan_payment, input.monthly_loan_payment);
        assert_eq!(r.total_costs, expected_total);
        assert_eq!(r.profit, input.monthly_revenue - expected_total);
    }

    // 누적 현금흐름은 직전 달 누적 + 이번 달 손익과 정확히 일치해야 한다.
    assert_eq!(
        records[0].cumulative_cash_flow,
        -input.startup_total + records[0].profit
    );
    for pair in records.windows(2) {
        assert_eq!(
            pair[1].cumulative_cash_flow,
            pair[0].cumulative_cash_flow + pair[1].profit
        );
    }
}

#[test]
fn zero_horizon_gives_empty_table() {
    let mut input = base_input();
    input.horizon_months = 0;
    let records = project(&input).expect("zero-horizon project");
    assert!(records.is_empty());
}

#[test]
fn negative_inputs_are_rejected() {
    let mut negative_revenue = base_input();
    negative_revenue.monthly_revenue = -1.0;
    assert!(matches!(
        project(&negative_revenue),
        Err(CalcError::InvalidInput(_))
    ));

    let mut negative_costs = base_input();
    negative_costs.monthly_variable_costs = -1.0;
    assert!(matches!(
        project(&negative_costs),
        Err(CalcError::InvalidInput(_))
    ));

    let mut negative_startup = base_input();
    negative_startup.startup_total = -1.0;
    assert!(matches!(
        project(&negative_startup),
        Err(CalcError::InvalidInput(_))
    ));
}

#[test]
fn variable_costs_charge_card_fee_on_total_revenue() {
    let variable = monthly_variable_costs(&VariableCostInput {
        clients_per_month: 40,
        supplies_per_client: 20.0,
        monthly_utilities: 400.0,
        monthly_revenue: 12_000.0,
        credit_card_fee_pct: 2.9,
    })
    .expect("variable costs");
    // 40×20 + 400 + 12,000×2.9% = 1,548
    assert!((variable - 1_548.0).abs() < 1e-9);
}

#[test]
fn variable_costs_reject_bad_inputs() {
    let negative_supplies = monthly_variable_costs(&VariableCostInput {
        clients_per_month: 10,
        supplies_per_client: -1.0,
        monthly_utilities: 0.0,
        monthly_revenue: 1_000.0,
        credit_card_fee_pct: 2.9,
    });
    assert!(matches!(negative_supplies, Err(CalcError::InvalidInput(_))));

    let fee_above_100 = monthly_variable_costs(&VariableCostInput {
        clients_per_month: 10,
        supplies_per_client: 1.0,
        monthly_utilities: 0.0,
        monthly_revenue: 1_000.0,
        credit_card_fee_pct: 150.0,
    });
    assert!(matches!(fee_above_100, Err(CalcError::InvalidInput(_))));
}
