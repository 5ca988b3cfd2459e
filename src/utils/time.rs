//! Time utilities: parsing HH:MM, clock formatting, etc.

use chrono::{NaiveDateTime, NaiveTime};

/// Parse a clock time written as `HH:MM` or `HH:MM:SS`.
pub fn parse_clock(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// `HH:MM` of a timestamp.
pub fn hhmm(ts: &NaiveDateTime) -> String {
    ts.format("%H:%M").to_string()
}
