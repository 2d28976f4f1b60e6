use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub smtp: SmtpConfig,
    pub email: ReportEmailConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String, // 为空则匿名投递
    pub password: String,
}

/// 报表邮件配置
///
/// 键缺失一律回退为空串, 不视为错误; 收件人/抄送支持逗号分隔多地址。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEmailConfig {
    pub recipient: String,
    pub sender: String,
    pub cc: String,
    pub reply_to: String,
    pub company_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgres://localhost/po_so_pricing".to_string(),
            },
            smtp: SmtpConfig {
                host: "127.0.0.1".to_string(),
                port: 25,
                username: String::new(),
                password: String::new(),
            },
            email: ReportEmailConfig {
                recipient: String::new(),
                sender: String::new(),
                cc: String::new(),
                reply_to: String::new(),
                company_name: String::new(),
            },
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: env_or("SERVER_HOST", "127.0.0.1"),
                port: env_port("SERVER_PORT", 8080),
            },
            database: DatabaseConfig {
                url: env_or("DATABASE_URL", "postgres://localhost/po_so_pricing"),
            },
            smtp: SmtpConfig {
                host: env_or("SMTP_HOST", "127.0.0.1"),
                port: env_port("SMTP_PORT", 25),
                username: env_or("SMTP_USERNAME", ""),
                password: env_or("SMTP_PASSWORD", ""),
            },
            email: ReportEmailConfig {
                recipient: env_or("REPORT_RECIPIENT_EMAIL", ""),
                sender: env_or("REPORT_SENDER_EMAIL", ""),
                cc: env_or("REPORT_CC_EMAIL", ""),
                reply_to: env_or("REPORT_REPLY_TO_EMAIL", ""),
                company_name: env_or("REPORT_COMPANY_NAME", ""),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_port(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_email_config_is_empty() {
        let config = AppConfig::default();
        assert!(config.email.recipient.is_empty());
        assert!(config.email.cc.is_empty());
        assert!(config.email.reply_to.is_empty());
        assert!(config.email.company_name.is_empty());
    }

    #[test]
    fn default_smtp_is_local_relay() {
        let config = AppConfig::default();
        assert_eq!(config.smtp.host, "127.0.0.1");
        assert_eq!(config.smtp.port, 25);
        assert!(config.smtp.username.is_empty());
    }
}
