// src/export/json_csv.rs

use crate::core::report::PeriodReport;
use crate::errors::{AppError, AppResult};
use crate::export::model::TimeEntryExport;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The whole report, pretty-printed.
pub(crate) fn export_json(report: &PeriodReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(report)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// One row per shift; headers come from serde.
pub(crate) fn export_csv(report: &PeriodReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for entry in &report.entries {
        wtr.serialize(TimeEntryExport::from(entry))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
