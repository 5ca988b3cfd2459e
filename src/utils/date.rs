//! Date utilities: workday keys, ISO weeks, spreadsheet serials and the
//! layered timestamp parser used for journal cells.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static DMY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2})\.(\d{2})\.(\d{4})").unwrap());

/// Largest serial accepted (31-12-9999).
const MAX_SERIAL: f64 = 2_958_465.0;

/// Logical workday of an instant: anything before `rollover` belongs to the
/// previous calendar date.
pub fn workday_of(ts: NaiveDateTime, rollover: NaiveTime) -> NaiveDate {
    let date = ts.date();
    if ts.time() < rollover {
        date.pred_opt().unwrap_or(date)
    } else {
        date
    }
}

/// Monday of the ISO week containing `d`.
pub fn week_monday(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}

/// `DD-MM-YYYY`, the report date format.
pub fn fmt_date(d: NaiveDate) -> String {
    d.format("%d-%m-%Y").to_string()
}

/// Spreadsheet day serial (1899-12-30 epoch) → timestamp, rounded to the second.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..=MAX_SERIAL).contains(&serial) {
        return None;
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let seconds = (serial * 86_400.0).round() as i64;
    epoch.checked_add_signed(Duration::seconds(seconds))
}

/// Layered parse of a textual timestamp.
///
/// 1. numeric text → spreadsheet serial
/// 2. `-` and `/` become `.`, then `DD.MM.YYYY`, `DD.MM.YY` or `YYYY.MM.DD`
///    with an optional time part
/// 3. generic day-first reading of the numeric groups
pub fn parse_timestamp_text(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(serial) = s.replace(',', ".").parse::<f64>() {
        return excel_serial_to_datetime(serial);
    }

    let s = s.replace(['-', '/'], ".");
    parse_explicit(&s).or_else(|| parse_day_first(&s))
}

fn parse_explicit(s: &str) -> Option<NaiveDateTime> {
    let (date_part, time_part) = match s.split_once([' ', 'T']) {
        Some((d, t)) => (d, Some(t.trim())),
        None => (s, None),
    };

    let parts: Vec<&str> = date_part.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let fmt = if parts[0].len() == 4 {
        "%Y.%m.%d"
    } else if parts[2].len() == 2 {
        "%d.%m.%y"
    } else if parts[2].len() == 4 {
        "%d.%m.%Y"
    } else {
        return None;
    };

    let date = NaiveDate::parse_from_str(date_part, fmt).ok()?;
    let time = match time_part {
        None | Some("") => NaiveTime::MIN,
        Some(t) => parse_time_part(t)?,
    };

    Some(date.and_time(time))
}

fn parse_time_part(t: &str) -> Option<NaiveTime> {
    ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

fn parse_day_first(s: &str) -> Option<NaiveDateTime> {
    let groups: Vec<&str> = DIGITS.find_iter(s).map(|m| m.as_str()).collect();
    if groups.len() < 3 {
        return None;
    }

    let num = |i: usize| -> Option<u32> {
        match groups.get(i) {
            Some(g) => g.parse().ok(),
            None => Some(0),
        }
    };

    let (year, month, day) = if groups[0].len() == 4 {
        (num(0)?, num(1)?, num(2)?)
    } else {
        let y = num(2)?;
        let y = if groups[2].len() <= 2 { 2000 + y } else { y };
        (y, num(1)?, num(0)?)
    };

    NaiveDate::from_ymd_opt(year as i32, month, day)?.and_hms_opt(num(3)?, num(4)?, num(5)?)
}

/// Date from HR text: the first `DD.MM.YYYY` found, else the full layered parse.
pub fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    if let Some(c) = DMY.captures(raw) {
        let day = c[1].parse().ok()?;
        let month = c[2].parse().ok()?;
        let year = c[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    parse_timestamp_text(raw).map(|ts| ts.date())
}

/// Every calendar day from `start` to `end`, inclusive.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;

    while d <= end {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}
