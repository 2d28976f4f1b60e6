use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 关联采购行 (采购行 + 所属采购单 + 商品属性的扁平连接, 只读)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LinkedPurchaseLine {
    pub order_name: String,     // 采购单号
    pub order_state: String,    // 采购单状态
    pub order_currency: String, // 采购单币种代码
    pub unit_price: BigDecimal,
    pub quantity: BigDecimal,
    pub product_type: String,   // storable / consumable / service
    pub licence_months: i32,    // 授权时长 (月), > 0 表示订阅类商品
    pub report_excluded: bool,  // 商品被路由到其他报表
}
