use serde::{Deserialize, Serialize};

use super::CalcError;

/// 개업 전 1회성 창업 비용 내역.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupCostBreakdown {
    /// 법무/법인 설립 비용 [$]
    pub legal: f64,
    /// 인테리어/리모델링 비용 [$]
    pub renovation: f64,
    /// 장비 보증금 [$]
    pub equipment_deposit: f64,
    /// 초기 소모품/재고 [$]
    pub initial_supplies: f64,
    /// 웹사이트/예약 시스템 구축 [$]
    pub website: f64,
    /// 임대 보증금 [$]
    pub rent_deposit: f64,
    /// 기타 창업 비용 [$]
    pub other: f64,
}

impl StartupCostBreakdown {
    /// 항목별 (라벨 키, 금액) 목록을 반환한다. 내역 표/차트 출력용.
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        use crate::i18n::keys::*;
        [
            (STARTUP_ITEM_LEGAL, self.legal),
            (STARTUP_ITEM_RENOVATION, self.renovation),
            (STARTUP_ITEM_EQUIPMENT_DEPOSIT, self.equipment_deposit),
            (STARTUP_ITEM_INITIAL_SUPPLIES, self.initial_supplies),
            (STARTUP_ITEM_WEBSITE, self.website),
            (STARTUP_ITEM_RENT_DEPOSIT, self.rent_deposit),
            (STARTUP_ITEM_OTHER, self.other),
        ]
    }
}

/// 창업 비용 7개 항목을 합산한다. 음수 항목이 있으면 실패한다.
pub fn aggregate_startup(costs: &StartupCostBreakdown) -> Result<f64, CalcError> {
    let fields = [
        costs.legal,
        costs.renovation,
        costs.equipment_deposit,
        costs.initial_supplies,
        costs.website,
        costs.rent_deposit,
        costs.other,
    ];
    if fields.iter().any(|v| *v < 0.0) {
        return Err(CalcError::InvalidInput("창업 비용 항목은 음수일 수 없습니다."));
    }
    Ok(fields.iter().sum())
}
