//! Weekly totals, posted on the last observed day of each person's week.

use crate::models::daily_record::DailyRecord;
use crate::utils::date::week_monday;
use chrono::NaiveDate;
use std::collections::HashMap;

pub fn apply_weekly_totals(records: &mut [DailyRecord]) {
    // (person, monday) -> (sum, index of the latest record)
    let mut weeks: HashMap<(String, NaiveDate), (i64, usize)> = HashMap::new();

    for (idx, rec) in records.iter().enumerate() {
        if !rec.has_events {
            continue;
        }

        let entry = weeks
            .entry((rec.person.clone(), week_monday(rec.date)))
            .or_insert((0, idx));
        entry.0 += rec.daily_minutes;
        if rec.date > records[entry.1].date {
            entry.1 = idx;
        }
    }

    for rec in records.iter_mut() {
        rec.weekly_minutes = None;
    }
    for (total, idx) in weeks.into_values() {
        records[idx].weekly_minutes = Some(total.max(0));
    }
}
