// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ReportRow;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the report rows to `file`.
    ///
    /// - `format`: xlsx | csv | json
    /// - `file`: absolute output path
    /// - `title`: title row of the XLSX sheet (ignored by the other formats)
    pub fn export(
        rows: &[ReportRow],
        format: ExportFormat,
        file: &str,
        title: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        debug!(format = format.as_str(), rows = rows.len(), "exporting report");

        if rows.is_empty() {
            warning("The report is empty: no attendance or absence rows.");
        }

        match format {
            ExportFormat::Xlsx => export_xlsx(rows, path, title)?,
            ExportFormat::Csv => export_csv(rows, path)?,
            ExportFormat::Json => export_json(rows, path)?,
        }

        Ok(())
    }
}
