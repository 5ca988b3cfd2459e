//! Report assembly: formatting only, no computation.

use crate::config::ReportLabels;
use crate::export::model::ReportRow;
use crate::models::daily_record::{DailyRecord, Lateness};
use crate::utils::date::fmt_date;
use crate::utils::formatting::{fmt_hm, fmt_hm_nonzero};
use crate::utils::time::hhmm;
use crate::utils::text::person_key;
use std::collections::HashMap;

pub fn assemble_row(rec: &DailyRecord, labels: &ReportLabels) -> ReportRow {
    let reason = rec.absence_reason.clone().unwrap_or_default();

    if !rec.has_events {
        return ReportRow {
            person: rec.person.clone(),
            date: fmt_date(rec.date),
            arrival: String::new(),
            departure: String::new(),
            lateness: String::new(),
            total_span: String::new(),
            outside_office: String::new(),
            exit_count: String::new(),
            long_absence: String::new(),
            daily_total: String::new(),
            weekly_total: String::new(),
            shortfall: String::new(),
            absence_reason: reason,
        };
    }

    let outside = if rec.suspect {
        format!(
            "{}\n{}",
            fmt_hm(rec.outside_core_minutes),
            labels.suspect_note
        )
    } else {
        fmt_hm(rec.outside_core_minutes)
    };

    ReportRow {
        person: rec.person.clone(),
        date: fmt_date(rec.date),
        arrival: rec.arrival.as_ref().map(hhmm).unwrap_or_default(),
        departure: rec.departure.as_ref().map(hhmm).unwrap_or_default(),
        lateness: match rec.lateness {
            Some(Lateness::Late) => labels.late.clone(),
            Some(Lateness::OnTime) => labels.on_time.clone(),
            None => String::new(),
        },
        total_span: fmt_hm(rec.span_minutes),
        outside_office: outside,
        exit_count: rec.exit_count.to_string(),
        long_absence: rec.long_absence.map(|g| g.label()).unwrap_or_default(),
        daily_total: fmt_hm(rec.daily_minutes),
        weekly_total: rec.weekly_minutes.map(fmt_hm).unwrap_or_default(),
        shortfall: fmt_hm_nonzero(rec.shortfall_minutes),
        absence_reason: reason,
    }
}

pub fn assemble(records: &[DailyRecord], labels: &ReportLabels) -> Vec<ReportRow> {
    records.iter().map(|r| assemble_row(r, labels)).collect()
}

/// Replace names with `"{prefix} 001"`, `"{prefix} 002"`, … in order of
/// first appearance. Name variants sharing a key get the same alias.
pub fn anonymize(rows: &mut [ReportRow], prefix: &str) {
    let mut aliases: HashMap<String, String> = HashMap::new();

    for row in rows.iter_mut() {
        let next = aliases.len() + 1;
        let alias = aliases
            .entry(person_key(&row.person))
            .or_insert_with(|| format!("{prefix} {next:03}"));
        row.person = alias.clone();
    }
}
