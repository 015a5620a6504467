// src/export/logic.rs

use crate::core::report::PeriodReport;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, is_absolute};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` to `file` in the given format.
    ///
    /// `file` must be an absolute path; a leading `~/` is expanded. An
    /// existing file is only replaced with `force` or after confirmation.
    /// An empty period writes nothing.
    /// Returns whether a file was written.
    pub fn export(
        report: &PeriodReport,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<bool> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if report.is_empty() {
            warning(format!(
                "No entries found for {}, nothing exported.",
                report.period.label
            ));
            return Ok(false);
        }

        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(report, &path)?,
            ExportFormat::Json => export_json(report, &path)?,
            ExportFormat::Xlsx => export_xlsx(report, &path)?,
            ExportFormat::Pdf => export_pdf(report, &path)?,
        }

        Ok(true)
    }
}
