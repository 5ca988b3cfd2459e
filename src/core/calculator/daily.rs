//! Daily figures derived from a reconstructed presence.

use super::presence::Presence;
use crate::config::Rules;
use crate::models::daily_record::{DailyRecord, Lateness};
use chrono::{NaiveDate, NaiveDateTime};

/// Late when the first pass is at or after the lateness threshold.
pub fn lateness(
    arrival: Option<NaiveDateTime>,
    day: NaiveDate,
    rules: &Rules,
) -> Option<Lateness> {
    arrival.map(|a| {
        if a >= day.and_time(rules.late_after) {
            Lateness::Late
        } else {
            Lateness::OnTime
        }
    })
}

/// Whole minutes from arrival to departure, 0 when either is missing.
pub fn span_minutes(arrival: Option<NaiveDateTime>, departure: Option<NaiveDateTime>) -> i64 {
    match (arrival, departure) {
        (Some(a), Some(d)) => ((d - a).num_seconds() / 60).max(0),
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTotals {
    pub lunch: i64,
    pub penalty: i64,
    pub effective: i64,
    pub shortfall: i64,
}

pub fn day_totals(span: i64, outside_core: i64, rules: &Rules) -> DayTotals {
    let full_day = span >= rules.lunch_minutes;
    let excess = (outside_core - rules.outside_buffer_minutes).max(0);

    let lunch = if full_day { rules.lunch_minutes } else { 0 };
    let penalty = if full_day { excess } else { 0 };

    DayTotals {
        lunch,
        penalty,
        effective: (span - lunch - penalty).max(0),
        shortfall: penalty,
    }
}

pub fn build_daily(
    person: &str,
    day: NaiveDate,
    presence: &Presence,
    rules: &Rules,
) -> DailyRecord {
    let span = span_minutes(presence.arrival, presence.departure);
    let totals = day_totals(span, presence.outside_core_minutes, rules);

    DailyRecord {
        person: person.to_string(),
        date: day,
        has_events: true,
        arrival: presence.arrival,
        departure: presence.departure,
        lateness: lateness(presence.arrival, day, rules),
        span_minutes: span,
        outside_core_minutes: presence.outside_core_minutes,
        long_absence: presence.long_absence,
        exit_count: presence.exit_count,
        suspect: presence.suspect,
        daily_minutes: totals.effective,
        shortfall_minutes: totals.shortfall,
        weekly_minutes: None,
        absence_reason: None,
    }
}
