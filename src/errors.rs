//! Unified application error type.
//! All modules (import, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Unsupported input file '{0}': use .xlsx, .xlsm, .xls, .ods or .csv")]
    UnsupportedInput(String),

    // ---------------------------
    // Input structure
    // ---------------------------
    #[error(
        "Cannot read the access journal: required columns not found (expected: {}). Check the file format.",
        .0.join(", ")
    )]
    MissingJournalColumns(Vec<String>),

    #[error("Cannot find the header row with '{0}' in the absence file.")]
    MissingAbsenceHeader(String),

    #[error("Absence file header has no '{0}' column.")]
    MissingAbsenceColumns(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
