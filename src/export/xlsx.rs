// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, row_to_cells};
use crate::export::{ReportRow, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const TITLE_ROW: u32 = 0;
const HEADER_ROW: u32 = 2;
const FONT: &str = "Times New Roman";

/// Export XLSX: merged title, styled header, frozen panes, fitted columns.
pub(crate) fn export_xlsx(rows: &[ReportRow], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Journal").map_err(to_app_error)?;

    let headers = get_headers();
    let last_col = (headers.len() - 1) as u16;

    // ---------------------------
    // Title
    // ---------------------------
    let title_format = Format::new()
        .set_font_name(FONT)
        .set_font_size(14)
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    worksheet
        .merge_range(TITLE_ROW, 0, TITLE_ROW, last_col, title, &title_format)
        .map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_font_name(FONT)
        .set_bold()
        .set_text_wrap()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_background_color(Color::RGB(0xDCE6F1))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(HEADER_ROW, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet
        .set_freeze_panes(HEADER_ROW + 1, 0)
        .map_err(to_app_error)?;

    // ---------------------------
    // Rows
    // ---------------------------
    let mut col_widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    for (row_index, report_row) in rows.iter().enumerate() {
        let row = HEADER_ROW + 1 + row_index as u32;

        for (col, value) in row_to_cells(report_row).iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, value)?;

            let widest = value
                .lines()
                .map(UnicodeWidthStr::width)
                .max()
                .unwrap_or(0);
            col_widths[col] = col_widths[col].max(widest);
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Single cell: integers as numbers, everything else as centered text.
fn write_xlsx_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str) -> AppResult<()> {
    let fmt = Format::new()
        .set_font_name(FONT)
        .set_text_wrap()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    if let Ok(num) = s.parse::<i64>() {
        worksheet
            .write_with_format(row, col, num as f64, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
