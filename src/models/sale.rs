use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::purchase::LinkedPurchaseLine;

/// 销售订单主表 (只读)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SaleOrder {
    pub id: i64,
    pub name: String,          // 单号
    pub customer_name: String, // 客户显示名
    pub date_order: NaiveDateTime,
    pub state: String,
    pub currency: String,      // 币种代码, 如 "USD"
    pub company_id: i64,
}

/// 销售订单行 (只读)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SaleLine {
    pub id: i64,
    pub product_code: Option<String>,
    pub product_name: String,
    pub purchase_cost: BigDecimal, // 销售侧参考成本单价
}

/// 销售订单及其带关联采购行的订单行
#[derive(Debug, Clone)]
pub struct SaleOrderWithLines {
    pub order: SaleOrder,
    pub lines: Vec<SaleLineWithPurchases>,
}

/// 销售订单行及其关联的采购订单行
#[derive(Debug, Clone)]
pub struct SaleLineWithPurchases {
    pub line: SaleLine,
    pub purchase_lines: Vec<LinkedPurchaseLine>,
}
