use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use regex::Regex;
use std::sync::LazyLock;

use crate::config::{ReportEmailConfig, SmtpConfig};
use crate::error::ReportError;

/// 附件文件名中需要替换为下划线的字符
static FILENAME_SANITIZER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[() /]").expect("valid filename regex"));

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 邮件正文的命名文本字段
#[derive(Debug, Clone)]
pub struct EmailContent {
    pub greeting: String,
    pub body_line: String,
    pub sign_off: String,
    pub company_name: String,
    pub table_width: u32,
}

/// 报表邮件发送服务
///
/// 所有构建/发送错误都返回给调用方记录日志, 不中断报表运行 (尽力投递)。
pub struct ReportMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    email: ReportEmailConfig,
}

impl ReportMailer {
    pub fn new(smtp: &SmtpConfig, email: ReportEmailConfig) -> Self {
        // 平台内网中继, 明文 SMTP; 配置了账号则附加 PLAIN 认证
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp.host).port(smtp.port);
        if !smtp.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                smtp.username.clone(),
                smtp.password.clone(),
            ));
        }

        Self {
            transport: builder.build(),
            email,
        }
    }

    /// 组装正文字段
    pub fn prepare_content(&self, title: &str, period_label: &str) -> EmailContent {
        EmailContent {
            greeting: "Hi,".to_string(),
            body_line: format!("Please find attached the {title} for {period_label}."),
            sign_off: "Kind regards,".to_string(),
            company_name: self.email.company_name.clone(),
            table_width: 600,
        }
    }

    /// 将正文字段包进固定版式的 HTML
    pub fn render_html(content: &EmailContent) -> String {
        format!(
            r#"<div style="background:#F0F0F0;color:#515166;padding:10px 0px;font-family:Arial,Helvetica,sans-serif;font-size:12px;">
    <table style="background-color:transparent;width:{width}px;margin:0px auto;background:white;border:1px solid #e1e1e1;">
        <tbody>
            <tr>
                <td style="padding:15px 20px 10px 20px;">
                    <p>{greeting}</p>
                    <p>{body_line}</p>
                    <p style="padding-top:20px;">{sign_off}</p>
                    <p>{company}</p>
                </td>
            </tr>
        </tbody>
    </table>
    <table style="background-color:transparent;width:{width}px;margin:auto;text-align:center;font-size:12px;">
        <tbody>
            <tr>
                <td style="padding-top:10px;color:#afafaf;"></td>
            </tr>
        </tbody>
    </table>
</div>"#,
            width = content.table_width,
            greeting = content.greeting,
            body_line = content.body_line,
            sign_off = content.sign_off,
            company = content.company_name,
        )
    }

    /// 由主题生成附件文件名: 空格/括号/斜杠替换为下划线
    pub fn attachment_filename(subject: &str) -> String {
        FILENAME_SANITIZER
            .replace_all(&format!("{subject}.xlsx"), "_")
            .into_owned()
    }

    /// 构建带 XLSX 附件的邮件
    pub fn build_message(
        &self,
        subject: &str,
        html_body: String,
        artifact: Vec<u8>,
    ) -> Result<Message, ReportError> {
        let mut builder = Message::builder().subject(subject);

        builder = builder.from(self.email.sender.parse::<Mailbox>()?);
        for recipient in split_addresses(&self.email.recipient) {
            builder = builder.to(recipient.parse::<Mailbox>()?);
        }
        for cc in split_addresses(&self.email.cc) {
            builder = builder.cc(cc.parse::<Mailbox>()?);
        }
        if !self.email.reply_to.is_empty() {
            builder = builder.reply_to(self.email.reply_to.parse::<Mailbox>()?);
        }

        let content_type = ContentType::parse(XLSX_MIME).expect("valid xlsx mime type");
        let attachment =
            Attachment::new(Self::attachment_filename(subject)).body(artifact, content_type);

        let message = builder.multipart(
            MultiPart::mixed()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html_body),
                )
                .singlepart(attachment),
        )?;

        Ok(message)
    }

    /// 构建并发送报表邮件
    pub async fn send_report(
        &self,
        subject: &str,
        period_label: &str,
        title: &str,
        artifact: Vec<u8>,
    ) -> Result<(), ReportError> {
        let content = self.prepare_content(title, period_label);
        let html_body = Self::render_html(&content);
        let message = self.build_message(subject, html_body, artifact)?;

        self.transport.send(message).await?;
        Ok(())
    }
}

/// 拆分逗号分隔的地址列表, 忽略空项
fn split_addresses(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}
