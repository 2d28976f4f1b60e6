pub mod purchase;
pub mod report;
pub mod sale;

pub use purchase::LinkedPurchaseLine;
pub use report::{ReportRow, ReportRunStats};
pub use sale::{SaleLine, SaleLineWithPurchases, SaleOrder, SaleOrderWithLines};
