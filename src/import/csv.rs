// src/import/csv.rs

use crate::errors::AppResult;
use crate::models::sheet::{Cell, Sheet};
use std::fs;
use std::path::Path;

/// Delimiter of the first non-empty line: `;`, tab or `,`.
fn detect_delimiter(text: &str) -> u8 {
    let line = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");

    [b';', b'\t', b',']
        .into_iter()
        .max_by_key(|d| line.bytes().filter(|b| b == d).count())
        .filter(|d| line.as_bytes().contains(d))
        .unwrap_or(b',')
}

/// Headerless, flexible CSV read; every field becomes a text cell.
pub(crate) fn read_csv(path: &Path) -> AppResult<Sheet> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let text = text.trim_start_matches('\u{feff}');

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(detect_delimiter(text))
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::text).collect());
    }

    Ok(Sheet::new(rows))
}
