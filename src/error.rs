/// 报表运行错误
///
/// 数据库与 XLSX 渲染错误向调用方传播; 邮件相关错误在发送处被捕获并记录,
/// 不会导致整次运行失败。
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// 数据库查询错误
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    /// XLSX 渲染错误
    #[error("workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    /// 邮件地址解析错误
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    /// 邮件构建错误
    #[error("email build error: {0}")]
    Email(#[from] lettre::error::Error),
    /// SMTP 发送错误
    #[error("smtp transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
