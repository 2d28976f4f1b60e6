//! 比价核心 + 渲染的端到端场景测试 (无数据库/SMTP)

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::str::FromStr;

use po_so_pricing_rust::models::{
    LinkedPurchaseLine, SaleLine, SaleLineWithPurchases, SaleOrder, SaleOrderWithLines,
};
use po_so_pricing_rust::service::comparator::build_report_rows;
use po_so_pricing_rust::service::xlsx::render_report;
use po_so_pricing_rust::service::RateBook;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn order_date() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 7, 15)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn scenario(sale_currency: &str, purchase_currency: &str) -> Vec<SaleOrderWithLines> {
    vec![SaleOrderWithLines {
        order: SaleOrder {
            id: 1,
            name: "S001".to_string(),
            customer_name: "Acme Ltd".to_string(),
            date_order: order_date(),
            state: "submitted".to_string(),
            currency: sale_currency.to_string(),
            company_id: 1,
        },
        lines: vec![SaleLineWithPurchases {
            line: SaleLine {
                id: 10,
                product_code: Some("SKU-001".to_string()),
                product_name: "Widget".to_string(),
                purchase_cost: dec("100"),
            },
            purchase_lines: vec![LinkedPurchaseLine {
                order_name: "P001".to_string(),
                order_state: "confirmed".to_string(),
                order_currency: purchase_currency.to_string(),
                unit_price: dec("80"),
                quantity: dec("2"),
                product_type: "storable".to_string(),
                licence_months: 0,
                report_excluded: false,
            }],
        }],
    }]
}

#[test]
fn same_currency_scenario_renders_one_row() {
    let rows = build_report_rows(&scenario("USD", "USD"), &RateBook::new());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].price_difference, dec("40"));
    assert!(rows[0].note.is_empty());

    let artifact = render_report(&rows).unwrap();
    assert!(!artifact.is_empty());
    assert_eq!(&artifact[..2], b"PK");
}

#[test]
fn cross_currency_scenario_converts_and_notes() {
    let mut rates = RateBook::new();
    let day = order_date().date();
    rates.insert("EUR".to_string(), 1, day, dec("1"));
    rates.insert("USD".to_string(), 1, day, dec("1.0625"));

    let rows = build_report_rows(&scenario("USD", "EUR"), &rates);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].purchase_unit_price, dec("85.00"));
    assert_eq!(rows[0].price_difference, dec("30.00"));
    assert!(rows[0].note.contains("USD"));
    assert!(rows[0].note.contains("EUR"));

    let artifact = render_report(&rows).unwrap();
    assert_eq!(&artifact[..2], b"PK");
}

#[test]
fn empty_pipeline_produces_no_rows() {
    let rows = build_report_rows(&[], &RateBook::new());
    assert!(rows.is_empty());
}
