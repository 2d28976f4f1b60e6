use axum::{
    routing::{get, post},
    Router,
};
use po_so_pricing_rust::{api, create_pool, AppConfig, PricingReportService};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!(
        "Starting server: listen={}:{}, smtp={}:{}",
        config.server.host, config.server.port, config.smtp.host, config.smtp.port
    );

    // 创建数据库连接池
    let pool = create_pool(&config.database.url).await?;
    info!("Database pool created");

    // 报表服务
    let service = Arc::new(PricingReportService::new(pool, &config));

    // 构建路由
    let app = Router::new()
        .route("/health", get(api::health_check))
        .route("/api/report/run", post(api::run_report))
        .with_state(service)
        .layer(ServiceBuilder::new());

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /api/report/run - 生成上月差价报表并发送邮件");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
