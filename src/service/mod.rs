pub mod comparator;
pub mod currency;
pub mod mailer;
pub mod period;
pub mod report;
pub mod xlsx;

pub use currency::RateBook;
pub use mailer::ReportMailer;
pub use period::ReportPeriod;
pub use report::PricingReportService;
