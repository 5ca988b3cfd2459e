pub mod config;
pub mod init;
pub mod list;
pub mod report;

use crate::config::Rules;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::import::load_sheet;
use crate::models::report::Report;
use crate::utils::path::expand_tilde;

/// Load the journal (and the absence calendar, if given) and build the report.
pub(crate) fn build_from_files(
    journal: &str,
    absences: Option<&str>,
    rules: &Rules,
) -> AppResult<Report> {
    let journal = load_sheet(&expand_tilde(journal))?;
    let absences = absences.map(|p| load_sheet(&expand_tilde(p))).transpose()?;

    Core::build_report(&journal, absences.as_ref(), rules)
}
