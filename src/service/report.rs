use chrono::{Local, NaiveDate};
use sqlx::PgPool;
use std::collections::HashSet;

use crate::config::AppConfig;
use crate::db::queries;
use crate::error::ReportError;
use crate::models::{ReportRunStats, SaleLineWithPurchases, SaleOrderWithLines};
use crate::service::comparator;
use crate::service::currency::RateBook;
use crate::service::mailer::ReportMailer;
use crate::service::period::ReportPeriod;
use crate::service::xlsx;

/// 报表标题, 也用于邮件主题与正文
pub const REPORT_TITLE: &str = "PO vs SO Pricing Report";

/// PO vs SO 差价报表服务: 取数 → 比价 → 渲染 → 邮件
pub struct PricingReportService {
    pool: PgPool,
    mailer: ReportMailer,
}

impl PricingReportService {
    pub fn new(pool: PgPool, config: &AppConfig) -> Self {
        Self {
            pool,
            mailer: ReportMailer::new(&config.smtp, config.email.clone()),
        }
    }

    /// 为上一个自然月生成并发送报表
    pub async fn run_previous_month(&self) -> Result<ReportRunStats, ReportError> {
        self.run_for(Local::now().date_naive()).await
    }

    /// 以指定"今天"运行 (周期 = 其上一个自然月)
    pub async fn run_for(&self, today: NaiveDate) -> Result<ReportRunStats, ReportError> {
        let period = ReportPeriod::previous_month(today);
        tracing::info!("报表周期: {} — {}", period.start, period.end);

        // 1. 查询周期内已确认的销售订单
        let orders = queries::list_sale_orders(&self.pool, period.start, period.end).await?;
        let orders_in_period = orders.len();
        tracing::info!("周期内销售订单 {} 张", orders_in_period);

        // 2. 逐单装载订单行及其关联采购行; 无行订单与无关联行直接跳过
        let mut matched: Vec<SaleOrderWithLines> = Vec::new();
        for order in orders {
            let lines = queries::list_sale_lines(&self.pool, order.id).await?;
            if lines.is_empty() {
                continue;
            }

            let mut line_bundles = Vec::with_capacity(lines.len());
            for line in lines {
                let purchase_lines =
                    queries::list_linked_purchase_lines(&self.pool, line.id).await?;
                if purchase_lines.is_empty() {
                    continue;
                }
                line_bundles.push(SaleLineWithPurchases {
                    line,
                    purchase_lines,
                });
            }
            if line_bundles.is_empty() {
                continue;
            }
            matched.push(SaleOrderWithLines {
                order,
                lines: line_bundles,
            });
        }

        // 3. 预取币种不一致配对所需的汇率
        let rates = self.load_rates(&matched).await?;

        // 4. 过滤 + 比价
        let rows = comparator::build_report_rows(&matched, &rates);

        let mut stats = ReportRunStats {
            period_start: period.start,
            period_end: period.end,
            orders_in_period,
            matched_orders: matched.len(),
            rows_reported: rows.len(),
            email_sent: false,
        };

        // 空结果不是错误: 不渲染不发信, 记一条警告即止
        if rows.is_empty() {
            tracing::warn!("No data to report.");
            return Ok(stats);
        }

        // 5. 渲染 XLSX
        let artifact = xlsx::render_report(&rows)?;
        tracing::info!("报表 {} 行, 附件 {} 字节", rows.len(), artifact.len());

        // 6. 发送邮件; 失败只记录日志, 不影响运行结果
        let subject = format!("{} ({})", REPORT_TITLE, today.format("%d/%m/%y"));
        match self
            .mailer
            .send_report(&subject, &period.month_label(), REPORT_TITLE, artifact)
            .await
        {
            Ok(()) => {
                stats.email_sent = true;
                tracing::info!("Email sent");
            }
            Err(e) => {
                tracing::error!("Error in sending email: {}", e);
            }
        }

        Ok(stats)
    }

    /// 扫描配对, 对每个不重复的 (币种, 公司, 日期) 查一次汇率
    async fn load_rates(
        &self,
        matched: &[SaleOrderWithLines],
    ) -> Result<RateBook, ReportError> {
        let mut wanted: HashSet<(String, i64, NaiveDate)> = HashSet::new();
        for bundle in matched {
            let order = &bundle.order;
            for line_bundle in &bundle.lines {
                for purchase_line in &line_bundle.purchase_lines {
                    if purchase_line.order_currency != order.currency {
                        let date = order.date_order.date();
                        wanted.insert((
                            purchase_line.order_currency.clone(),
                            order.company_id,
                            date,
                        ));
                        wanted.insert((order.currency.clone(), order.company_id, date));
                    }
                }
            }
        }

        let mut book = RateBook::new();
        for (currency, company_id, date) in wanted {
            match queries::latest_rate(&self.pool, &currency, company_id, date).await? {
                Some(rate) => book.insert(currency, company_id, date, rate),
                None => {
                    tracing::warn!(
                        "未找到汇率 {} (company {}, {}), 按 1 折算",
                        currency,
                        company_id,
                        date
                    );
                }
            }
        }
        Ok(book)
    }
}
