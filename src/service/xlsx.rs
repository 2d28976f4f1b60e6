use bigdecimal::{BigDecimal, ToPrimitive};
use rust_xlsxwriter::{Color, Format, Workbook, XlsxError};

use crate::models::ReportRow;

/// 表头 (第 10 列为隐含的备注列, 无表头)
pub const HEADER_LABELS: [&str; 9] = [
    "Sale Order",
    "Purchase Order",
    "Cost on Sale Order",
    "Unit Price on Purchase Order",
    "Quantity",
    "Price Difference",
    "Product Code",
    "Product Name",
    "Customer",
];

/// 备注列下标
const NOTE_COLUMN: u16 = 9;

/// 备注单元格的琥珀色背景
const NOTE_BG_COLOR: Color = Color::RGB(0xFFBF00);

/// 将报表行渲染为单工作表的 XLSX 二进制
pub fn render_report(rows: &[ReportRow]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let highlight = Format::new().set_background_color(NOTE_BG_COLOR);

    let worksheet = workbook.add_worksheet();

    // 表头加粗; 列宽 = 表头长度, 商品编码 +15, 商品名称/客户 +40
    for (col, header) in HEADER_LABELS.iter().enumerate() {
        let col = col as u16;
        let mut width = header.len() as f64;
        if col == 6 {
            width += 15.0;
        }
        if col == 7 || col == 8 {
            width += 40.0;
        }
        worksheet.set_column_width(col, width)?;
        worksheet.write_string_with_format(0, col, *header, &bold)?;
    }

    // 数据行从第 1 行起; 非空备注单元格高亮并按备注长度加宽备注列
    for (idx, row) in rows.iter().enumerate() {
        let r = idx as u32 + 1;
        worksheet.write_string(r, 0, &row.sale_order)?;
        worksheet.write_string(r, 1, &row.purchase_order)?;
        worksheet.write_number(r, 2, excel_number(&row.sale_cost))?;
        worksheet.write_number(r, 3, excel_number(&row.purchase_unit_price))?;
        worksheet.write_number(r, 4, excel_number(&row.quantity))?;
        worksheet.write_number(r, 5, excel_number(&row.price_difference))?;
        worksheet.write_string(r, 6, &row.product_code)?;
        worksheet.write_string(r, 7, &row.product_name)?;
        worksheet.write_string(r, 8, &row.customer)?;

        if row.note.is_empty() {
            worksheet.write_string(r, NOTE_COLUMN, "")?;
        } else {
            worksheet.set_column_width(NOTE_COLUMN, row.note.len() as f64)?;
            worksheet.write_string_with_format(r, NOTE_COLUMN, &row.note, &highlight)?;
        }
    }

    workbook.save_to_buffer()
}

fn excel_number(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
