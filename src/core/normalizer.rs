//! Journal rows → typed access events.

use crate::config::Rules;
use crate::errors::{AppError, AppResult};
use crate::models::access_event::AccessEvent;
use crate::models::report::NormalizeStats;
use crate::models::sheet::Sheet;
use crate::utils::date::workday_of;
use crate::utils::text::{fold, join_name};
use tracing::debug;

/// Column positions of the journal, found by header probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalLayout {
    pub header_row: usize,
    pub event: usize,
    pub timestamp: usize,
    pub last_name: usize,
    pub first_name: usize,
    pub patronymic: usize,
    pub entry_label: usize,
    pub exit_label: usize,
}

fn find_column(sheet: &Sheet, row: usize, aliases: &[String]) -> Option<usize> {
    let header = sheet.rows.get(row)?;
    let wanted: Vec<String> = aliases.iter().map(|a| fold(a)).collect();

    header
        .iter()
        .position(|cell| wanted.contains(&fold(&cell.as_text())))
}

/// Probe the configured header offsets until every required column is found.
pub fn locate_columns(sheet: &Sheet, rules: &Rules) -> AppResult<JournalLayout> {
    let cols = &rules.journal_columns;

    for &row in &rules.header_offsets {
        let found = (|| {
            Some(JournalLayout {
                header_row: row,
                event: find_column(sheet, row, &cols.event)?,
                timestamp: find_column(sheet, row, &cols.timestamp)?,
                last_name: find_column(sheet, row, &cols.last_name)?,
                first_name: find_column(sheet, row, &cols.first_name)?,
                patronymic: find_column(sheet, row, &cols.patronymic)?,
                entry_label: find_column(sheet, row, &cols.entry_label)?,
                exit_label: find_column(sheet, row, &cols.exit_label)?,
            })
        })();

        if let Some(layout) = found {
            debug!(header_row = row, "journal header located");
            return Ok(layout);
        }
    }

    let expected = [
        &cols.event,
        &cols.timestamp,
        &cols.last_name,
        &cols.first_name,
        &cols.patronymic,
        &cols.entry_label,
        &cols.exit_label,
    ]
    .iter()
    .filter_map(|aliases| aliases.first().cloned())
    .collect();

    Err(AppError::MissingJournalColumns(expected))
}

/// Parse every data row into an [`AccessEvent`], dropping rows that are not
/// genuine passes, uncontrolled passes and rows with unreadable timestamps.
/// Person filtering is a separate stage.
pub fn normalize(sheet: &Sheet, rules: &Rules) -> AppResult<(Vec<AccessEvent>, NormalizeStats)> {
    let layout = locate_columns(sheet, rules)?;
    let mut stats = NormalizeStats::default();
    let mut events = Vec::new();

    for row in (layout.header_row + 1)..sheet.len() {
        if sheet.rows[row].iter().all(|c| c.is_empty()) {
            continue;
        }
        stats.rows += 1;

        let kind = fold(&sheet.cell(row, layout.event).as_text());
        if !kind.contains(&rules.pass_event_phrase) {
            stats.not_a_pass += 1;
            continue;
        }

        let entry_label = fold(&sheet.cell(row, layout.entry_label).as_text());
        let exit_label = fold(&sheet.cell(row, layout.exit_label).as_text());
        if is_uncontrolled(&entry_label, &exit_label, rules) {
            stats.uncontrolled += 1;
            continue;
        }

        let Some(timestamp) = sheet.cell(row, layout.timestamp).as_datetime() else {
            stats.bad_timestamp += 1;
            continue;
        };

        let last = sheet.cell(row, layout.last_name).as_text();
        let first = sheet.cell(row, layout.first_name).as_text();
        let middle = sheet.cell(row, layout.patronymic).as_text();
        let person = join_name([last.as_str(), first.as_str(), middle.as_str()]);

        events.push(AccessEvent {
            person,
            timestamp,
            workday: workday_of(timestamp, rules.day_rollover),
            entry_label,
            exit_label,
        });
    }

    events.sort_by_key(|e| e.timestamp);
    stats.kept = events.len();

    debug!(
        rows = stats.rows,
        not_a_pass = stats.not_a_pass,
        uncontrolled = stats.uncontrolled,
        bad_timestamp = stats.bad_timestamp,
        kept = stats.kept,
        "journal normalized"
    );

    Ok((events, stats))
}

fn is_uncontrolled(entry: &str, exit: &str, rules: &Rules) -> bool {
    let marker = &rules.uncontrolled_marker;
    if marker.is_empty() {
        return false;
    }

    let (a, b) = (entry.contains(marker.as_str()), exit.contains(marker.as_str()));
    if rules.drop_partially_uncontrolled {
        a || b
    } else {
        a && b
    }
}
