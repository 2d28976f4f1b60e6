use crate::models::ReportRunStats;
use crate::service::PricingReportService;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

/// 响应体
#[derive(Debug, Serialize)]
pub struct RunReportResponse {
    pub success: bool,
    pub message: String,
    pub stats: Option<ReportRunStats>,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 触发入口: 为上一个自然月生成并发送差价报表
pub async fn run_report(State(service): State<Arc<PricingReportService>>) -> Response {
    match service.run_previous_month().await {
        Ok(stats) => {
            let response = RunReportResponse {
                success: true,
                message: format!(
                    "Report generated: {} rows from {} matched orders",
                    stats.rows_reported, stats.matched_orders
                ),
                stats: Some(stats),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            let response = RunReportResponse {
                success: false,
                message: format!("Error: {}", e),
                stats: None,
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
    }
}
