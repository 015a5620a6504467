// src/export/pdf_export.rs

use crate::core::report::PeriodReport;
use crate::errors::{AppError, AppResult};
use crate::export::model::{Table, advances_table, expenses_table, hours_table, summary_table};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use crate::utils::formatting::format_currency;
use std::path::Path;

/// Fortnight report: summary, grand total, then hours, advances and expenses.
pub(crate) fn export_pdf(report: &PeriodReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let currency = report.settings.currency.as_str();
    let mut pdf = PdfManager::new("Fortnight report");

    pdf.line(&format!(
        "{} - {}",
        report.settings.user_name, report.period.label
    ));

    write_section(&mut pdf, &summary_table(report), currency);
    pdf.total_box(
        "GRAND TOTAL",
        &format_currency(report.summary.totals.grand_total, currency),
    );

    write_section(&mut pdf, &hours_table(report), currency);
    if !report.advances.is_empty() {
        write_section(&mut pdf, &advances_table(report), currency);
    }
    write_section(&mut pdf, &expenses_table(report), currency);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

fn write_section(pdf: &mut PdfManager, table: &Table, currency: &str) {
    pdf.heading(table.title);
    pdf.write_table(&table.headers, &table.display_rows(currency));
}
