// src/export/xlsx.rs

use crate::core::report::PeriodReport;
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{date_serial, time_fraction};
use crate::export::model::{
    Cell, Table, advances_table, expenses_table, hours_table, summary_table,
};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// One styled worksheet per table: Hours, Expenses, Advances, Summary.
pub(crate) fn export_xlsx(report: &PeriodReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let currency = report.settings.currency.as_str();

    for table in [
        hours_table(report),
        expenses_table(report),
        advances_table(report),
        summary_table(report),
    ] {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(table.title).map_err(to_app_error)?;
        write_table(worksheet, &table, currency)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_table(worksheet: &mut Worksheet, table: &Table, currency: &str) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    if table.rows.is_empty() {
        worksheet.write(1, 0, "No data available").map_err(to_app_error)?;
    }

    let mut col_widths: Vec<usize> = table
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, cells) in table.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in cells.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, cell, band_color)?;

            let shown = cell.display(currency);
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(shown.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    Ok(())
}

/// Write a single cell with a number format matching its kind.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let result = match cell {
        Cell::Date(d) => worksheet.write_with_format(
            row,
            col,
            date_serial(*d),
            &base.set_num_format("dd/mm/yyyy"),
        ),
        Cell::Time(t) => {
            worksheet.write_with_format(row, col, time_fraction(*t), &base.set_num_format("hh:mm"))
        }
        Cell::Money(v) | Cell::Hours(v) | Cell::Number(v) => worksheet.write_with_format(
            row,
            col,
            *v,
            &base.set_num_format("0.00").set_align(FormatAlign::Right),
        ),
        Cell::Text(s) => worksheet.write_with_format(row, col, s.as_str(), &base),
        Cell::Empty => worksheet.write_blank(row, col, &base),
    };

    result.map_err(to_app_error)?;
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
