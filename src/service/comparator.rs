use bigdecimal::{BigDecimal, Zero};

use crate::models::{ReportRow, SaleOrderWithLines};
use crate::service::currency::RateBook;

/// 可进入报表的采购单状态
const CONFIRMED_PURCHASE_STATES: [&str; 2] = ["confirmed", "fulfilled"];

/// 参与比价的商品类型 (库存商品; 服务/易耗品不比价)
const STOCKED_PRODUCT_TYPE: &str = "storable";

/// 对每个 (销售单, 销售行, 采购行) 三元组做过滤与比价, 产出报表行
///
/// 行序与输入遍历顺序一致; 仅差价严格大于零的配对会产出一行。
pub fn build_report_rows(orders: &[SaleOrderWithLines], rates: &RateBook) -> Vec<ReportRow> {
    let mut rows = Vec::new();

    for bundle in orders {
        let order = &bundle.order;

        for line_bundle in &bundle.lines {
            let line = &line_bundle.line;

            for purchase_line in &line_bundle.purchase_lines {
                // 1. 采购单必须已确认/已完成
                if !CONFIRMED_PURCHASE_STATES.contains(&purchase_line.order_state.as_str()) {
                    continue;
                }
                // 2. 商品被路由到其他报表的不参与
                if purchase_line.report_excluded {
                    continue;
                }
                // 3. 订阅/授权类商品不参与
                if purchase_line.licence_months > 0 {
                    continue;
                }
                // 4. 只比价库存商品
                if purchase_line.product_type != STOCKED_PRODUCT_TYPE {
                    continue;
                }

                // 币种不一致时折算到销售币种, 并记录备注
                let mut note = String::new();
                let mut unit_price = purchase_line.unit_price.clone();
                if purchase_line.order_currency != order.currency {
                    note = format!(
                        "SO currency is {} and PO currency is {}",
                        order.currency, purchase_line.order_currency
                    );
                    unit_price = rates.convert(
                        &unit_price,
                        &purchase_line.order_currency,
                        &order.currency,
                        order.company_id,
                        order.date_order.date(),
                    );
                }

                let price_difference =
                    (&line.purchase_cost - &unit_price) * &purchase_line.quantity;

                if price_difference > BigDecimal::zero() {
                    rows.push(ReportRow {
                        sale_order: order.name.clone(),
                        purchase_order: purchase_line.order_name.clone(),
                        sale_cost: line.purchase_cost.clone(),
                        purchase_unit_price: unit_price,
                        quantity: purchase_line.quantity.clone(),
                        price_difference,
                        product_code: line.product_code.clone().unwrap_or_default(),
                        product_name: line.product_name.clone(),
                        customer: order.customer_name.clone(),
                        note,
                    });
                }
            }
        }
    }

    rows
}
