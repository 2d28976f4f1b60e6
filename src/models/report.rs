use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::Serialize;

/// 报表行 — 一个通过全部过滤条件且差价为正的 (销售行, 采购行) 配对
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub sale_order: String,
    pub purchase_order: String,
    pub sale_cost: BigDecimal,          // 销售侧参考成本
    pub purchase_unit_price: BigDecimal, // 采购单价 (已折算到销售币种)
    pub quantity: BigDecimal,
    pub price_difference: BigDecimal,
    pub product_code: String,
    pub product_name: String,
    pub customer: String,
    pub note: String, // 仅在发生币种折算时非空
}

/// 单次报表运行的统计信息
#[derive(Debug, Clone, Serialize)]
pub struct ReportRunStats {
    pub period_start: NaiveDateTime,
    pub period_end: NaiveDateTime,
    pub orders_in_period: usize,
    pub matched_orders: usize,
    pub rows_reported: usize,
    pub email_sent: bool,
}
