use crate::models::{LinkedPurchaseLine, SaleLine, SaleOrder};
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::PgPool;

/// 查询周期内已确认的销售订单 (按单号自然顺序)
pub async fn list_sale_orders(
    pool: &PgPool,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Vec<SaleOrder>, sqlx::Error> {
    sqlx::query_as::<_, SaleOrder>(
        r#"
        SELECT so.id,
               so.name,
               c.name AS customer_name,
               so.date_order,
               so.state,
               so.currency,
               so.company_id
        FROM sale_orders so
        INNER JOIN customers c ON c.id = so.customer_id
        WHERE so.date_order >= $1
          AND so.date_order <= $2
          AND so.state IN ('submitted', 'fulfilled')
        ORDER BY so.id
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}

/// 查询销售订单行 (含商品编码/名称)
pub async fn list_sale_lines(
    pool: &PgPool,
    order_id: i64,
) -> Result<Vec<SaleLine>, sqlx::Error> {
    sqlx::query_as::<_, SaleLine>(
        r#"
        SELECT sl.id,
               p.code AS product_code,
               p.name AS product_name,
               sl.purchase_cost
        FROM sale_order_lines sl
        INNER JOIN products p ON p.id = sl.product_id
        WHERE sl.order_id = $1
        ORDER BY sl.id
        "#,
    )
    .bind(order_id)
    .fetch_all(pool)
    .await
}

/// 查询与销售行关联的采购行 (连接采购单与商品属性)
pub async fn list_linked_purchase_lines(
    pool: &PgPool,
    sale_line_id: i64,
) -> Result<Vec<LinkedPurchaseLine>, sqlx::Error> {
    sqlx::query_as::<_, LinkedPurchaseLine>(
        r#"
        SELECT po.name AS order_name,
               po.state AS order_state,
               po.currency AS order_currency,
               pl.unit_price,
               pl.quantity,
               p.product_type,
               p.licence_months,
               p.exclude_from_pricing_report AS report_excluded
        FROM purchase_order_lines pl
        INNER JOIN purchase_orders po ON po.id = pl.order_id
        INNER JOIN products p ON p.id = pl.product_id
        WHERE pl.sale_line_id = $1
        ORDER BY pl.id
        "#,
    )
    .bind(sale_line_id)
    .fetch_all(pool)
    .await
}

/// 查询某币种在指定日期或之前最近的汇率 (相对公司本位币)
pub async fn latest_rate(
    pool: &PgPool,
    currency: &str,
    company_id: i64,
    date: NaiveDate,
) -> Result<Option<BigDecimal>, sqlx::Error> {
    sqlx::query_scalar::<_, BigDecimal>(
        r#"
        SELECT rate
        FROM currency_rates
        WHERE currency = $1
          AND company_id = $2
          AND rate_date <= $3
        ORDER BY rate_date DESC
        LIMIT 1
        "#,
    )
    .bind(currency)
    .bind(company_id)
    .bind(date)
    .fetch_optional(pool)
    .await
}
