// src/import/mod.rs

mod csv;
mod xlsx;

use crate::errors::{AppError, AppResult};
use crate::models::sheet::Sheet;
use std::path::Path;
use tracing::debug;

/// Read the first sheet of a spreadsheet or a CSV file into a [`Sheet`].
pub fn load_sheet(path: &Path) -> AppResult<Sheet> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let sheet = match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => xlsx::read_workbook(path)?,
        "csv" | "txt" => csv::read_csv(path)?,
        _ => return Err(AppError::UnsupportedInput(path.display().to_string())),
    };

    debug!(path = %path.display(), rows = sheet.len(), "sheet loaded");
    Ok(sheet)
}
