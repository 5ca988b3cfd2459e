// src/import/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::models::sheet::{Cell, Sheet};
use crate::utils::date::excel_serial_to_datetime;
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// First worksheet of an Excel/ODS workbook. Leading empty rows and columns
/// are kept so header offsets stay meaningful.
pub(crate) fn read_workbook(path: &Path) -> AppResult<Sheet> {
    let mut workbook = open_workbook_auto(path).map_err(to_app_error)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Spreadsheet(format!("{}: no worksheet", path.display())))?
        .map_err(to_app_error)?;

    let (first_row, first_col) = range.start().unwrap_or((0, 0));

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); first_row as usize];
    for data_row in range.rows() {
        let mut row = vec![Cell::Empty; first_col as usize];
        row.extend(data_row.iter().map(to_cell));
        rows.push(row);
    }

    Ok(Sheet::new(rows))
}

fn to_cell(d: &Data) -> Cell {
    match d {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            excel_serial_to_datetime(serial)
                .map(Cell::DateTime)
                .unwrap_or(Cell::Number(serial))
        }
    }
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Spreadsheet(e.to_string())
}
