use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lateness {
    OnTime,
    Late,
}

/// Closed clock interval, e.g. the longest absence of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// `HH:MM–HH:MM`
    pub fn label(&self) -> String {
        format!("{}–{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

/// One row of the attendance table: a person on a workday.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub person: String,
    pub date: NaiveDate,
    pub has_events: bool, // false for days known only from the absence file
    pub arrival: Option<NaiveDateTime>,
    pub departure: Option<NaiveDateTime>,
    pub lateness: Option<Lateness>,
    pub span_minutes: i64,
    pub outside_core_minutes: i64,
    pub long_absence: Option<Interval>,
    pub exit_count: u32,
    pub suspect: bool,
    pub daily_minutes: i64,
    pub shortfall_minutes: i64,
    pub weekly_minutes: Option<i64>,
    pub absence_reason: Option<String>,
}

impl DailyRecord {
    /// Record for a day with no badge events but a known absence.
    pub fn absence_only(person: &str, date: NaiveDate, reason: String) -> Self {
        Self {
            person: person.to_string(),
            date,
            has_events: false,
            arrival: None,
            departure: None,
            lateness: None,
            span_minutes: 0,
            outside_core_minutes: 0,
            long_absence: None,
            exit_count: 0,
            suspect: false,
            daily_minutes: 0,
            shortfall_minutes: 0,
            weekly_minutes: None,
            absence_reason: Some(reason),
        }
    }
}
