//! Absence calendar: HR intervals → per-day reasons joined onto attendance.

use crate::config::Rules;
use crate::errors::{AppError, AppResult};
use crate::models::absence::{AbsenceDay, AbsenceInterval};
use crate::models::daily_record::DailyRecord;
use crate::models::sheet::Sheet;
use crate::utils::date::days_inclusive;
use crate::utils::text::{collapse_ws, fold, person_key};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, warn};

fn matches_any(text: &str, aliases: &[String]) -> bool {
    let t = fold(text);
    aliases.iter().any(|a| fold(a) == t)
}

/// Read the absence sheet. The header row is the first row holding the
/// person column title; it may sit anywhere below banner rows.
pub fn read_absences(sheet: &Sheet, rules: &Rules) -> AppResult<Vec<AbsenceInterval>> {
    let cols = &rules.absence_columns;
    let person_title = cols.person.first().cloned().unwrap_or_default();

    let header_row = sheet
        .rows
        .iter()
        .position(|row| row.iter().any(|c| matches_any(&c.as_text(), &cols.person)))
        .ok_or_else(|| AppError::MissingAbsenceHeader(person_title.clone()))?;

    let header = &sheet.rows[header_row];
    let column = |aliases: &[String]| {
        header
            .iter()
            .position(|c| matches_any(&c.as_text(), aliases))
    };

    let person_col = column(cols.person.as_slice())
        .ok_or(AppError::MissingAbsenceHeader(person_title))?;
    let kind_col = column(cols.kind.as_slice()).ok_or_else(|| {
        AppError::MissingAbsenceColumns(cols.kind.first().cloned().unwrap_or_default())
    })?;
    let start_col = column(cols.start.as_slice()).ok_or_else(|| {
        AppError::MissingAbsenceColumns(cols.start.first().cloned().unwrap_or_default())
    })?;
    let end_col = column(cols.end.as_slice());

    let mut out = Vec::new();
    for row in (header_row + 1)..sheet.len() {
        let person = collapse_ws(&sheet.cell(row, person_col).as_text());
        let kind = sheet.cell(row, kind_col).as_text();
        if person.is_empty() || kind.is_empty() {
            continue;
        }

        let Some(start) = sheet.cell(row, start_col).as_date() else {
            warn!(
                row = row + 1,
                person = %person,
                "absence row without a readable start date skipped"
            );
            continue;
        };
        let end = end_col
            .and_then(|c| sheet.cell(row, c).as_date())
            .unwrap_or(start);

        if end < start {
            warn!(row = row + 1, person = %person, "absence row ends before it starts, skipped");
            continue;
        }

        out.push(AbsenceInterval {
            person,
            kind,
            start,
            end,
        });
    }

    debug!(intervals = out.len(), header_row, "absence file read");
    Ok(out)
}

/// Replace government-duty reasons with the canonical label.
pub fn canonical_kind(kind: &str, rules: &Rules) -> String {
    if rules.gov_duty.is_match(kind) {
        rules.gov_duty_label.clone()
    } else {
        kind.to_string()
    }
}

/// One [`AbsenceDay`] per calendar day of every interval, inclusive.
pub fn expand(intervals: &[AbsenceInterval], rules: &Rules) -> Vec<AbsenceDay> {
    intervals
        .iter()
        .flat_map(|iv| {
            let kind = canonical_kind(&iv.kind, rules);
            days_inclusive(iv.start, iv.end)
                .into_iter()
                .map(move |date| AbsenceDay {
                    person: iv.person.clone(),
                    date,
                    kind: kind.clone(),
                })
        })
        .collect()
}

/// Full outer join of attendance and absence days on (person key, date).
///
/// Matching records get the reason; absence days without attendance become
/// absence-only records. Several reasons for one day are joined with `; `.
pub fn merge_absences(
    mut records: Vec<DailyRecord>,
    days: Vec<AbsenceDay>,
    rules: &Rules,
) -> Vec<DailyRecord> {
    // Only dates that appear in the attendance table; no attendance keeps all.
    let journal_dates: HashSet<NaiveDate> = if rules.absences_within_journal_period {
        records.iter().map(|r| r.date).collect()
    } else {
        HashSet::new()
    };

    // Display names: the journal spelling wins over the HR one.
    let mut names: HashMap<String, String> = HashMap::new();
    for r in &records {
        names
            .entry(person_key(&r.person))
            .or_insert_with(|| r.person.clone());
    }

    let mut reasons: BTreeMap<(String, NaiveDate), Vec<String>> = BTreeMap::new();
    for day in days {
        if !journal_dates.is_empty() && !journal_dates.contains(&day.date) {
            continue;
        }

        let key = person_key(&day.person);
        names.entry(key.clone()).or_insert_with(|| day.person.clone());

        let list = reasons.entry((key, day.date)).or_default();
        if !list.contains(&day.kind) {
            list.push(day.kind);
        }
    }

    for rec in records.iter_mut() {
        if let Some(list) = reasons.remove(&(person_key(&rec.person), rec.date)) {
            rec.absence_reason = Some(list.join("; "));
        }
    }

    for ((key, date), list) in reasons {
        let name = names.get(&key).cloned().unwrap_or(key);
        records.push(DailyRecord::absence_only(&name, date, list.join("; ")));
    }

    records.sort_by(|a, b| {
        person_key(&a.person)
            .cmp(&person_key(&b.person))
            .then(a.date.cmp(&b.date))
    });
    records
}
