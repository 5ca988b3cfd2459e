//! Compiled, validated form of [`Config`] used by the report pipeline.

use super::{AbsenceColumns, Config, JournalColumns, ReportLabels};
use crate::errors::{AppError, AppResult};
use crate::utils::text::fold;
use crate::utils::time::parse_clock;
use chrono::{Duration, NaiveTime};
use regex::Regex;

#[derive(Debug, Clone)]
pub struct Rules {
    pub day_rollover: NaiveTime,
    pub core_start: NaiveTime,
    pub core_end: NaiveTime,
    pub late_after: NaiveTime,
    pub jitter: Duration,
    pub long_absence_minutes: i64,
    pub suspect_gap: Duration,
    pub min_exit: Duration,
    pub lunch_minutes: i64,
    pub outside_buffer_minutes: i64,

    // text markers, already folded
    pub pass_event_phrase: String,
    pub uncontrolled_marker: String,
    pub drop_partially_uncontrolled: bool,
    pub inside_hint: String,
    pub outside_hint: String,

    pub nonperson_tokens: Vec<String>,
    pub whole_word_tokens: Option<Regex>,
    pub excluded_aliases: Vec<String>,

    pub gov_duty: Regex,
    pub gov_duty_label: String,
    pub absences_within_journal_period: bool,

    pub header_offsets: Vec<usize>,
    pub journal_columns: JournalColumns,
    pub absence_columns: AbsenceColumns,
    pub labels: ReportLabels,
}

impl Rules {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let clock = |field: &str, value: &str| {
            parse_clock(value)
                .ok_or_else(|| AppError::Config(format!("{field}: invalid time '{value}'")))
        };

        let day_rollover = clock("day_rollover", &cfg.day_rollover)?;
        let core_start = clock("core_start", &cfg.core_start)?;
        let core_end = clock("core_end", &cfg.core_end)?;
        let late_after = clock("late_after", &cfg.late_after)?;

        for (field, value) in [
            ("jitter_minutes", cfg.jitter_minutes),
            ("long_absence_minutes", cfg.long_absence_minutes),
            ("suspect_gap_minutes", cfg.suspect_gap_minutes),
            ("min_exit_minutes", cfg.min_exit_minutes),
            ("lunch_minutes", cfg.lunch_minutes),
            ("outside_buffer_minutes", cfg.outside_buffer_minutes),
        ] {
            if value < 0 {
                return Err(AppError::Config(format!("{field} must not be negative")));
            }
        }

        for (field, value) in [
            ("inside_hint", &cfg.inside_hint),
            ("outside_hint", &cfg.outside_hint),
            ("pass_event_phrase", &cfg.pass_event_phrase),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Config(format!("{field} must not be empty")));
            }
        }

        if cfg.header_offsets.is_empty() {
            return Err(AppError::Config("header_offsets must not be empty".into()));
        }

        let gov_duty = Regex::new(&cfg.gov_duty_pattern)
            .map_err(|e| AppError::Config(format!("gov_duty_pattern: {e}")))?;

        let words: Vec<String> = cfg
            .whole_word_tokens
            .iter()
            .map(|w| fold(w))
            .filter(|w| !w.is_empty())
            .map(|w| regex::escape(&w))
            .collect();
        let whole_word_tokens = if words.is_empty() {
            None
        } else {
            let pattern = format!(r"\b(?:{})\b", words.join("|"));
            Some(
                Regex::new(&pattern)
                    .map_err(|e| AppError::Config(format!("whole_word_tokens: {e}")))?,
            )
        };

        let folded = |items: &[String]| -> Vec<String> {
            items
                .iter()
                .map(|s| fold(s))
                .filter(|s| !s.is_empty())
                .collect()
        };

        Ok(Self {
            day_rollover,
            core_start,
            core_end,
            late_after,
            jitter: Duration::minutes(cfg.jitter_minutes),
            long_absence_minutes: cfg.long_absence_minutes,
            suspect_gap: Duration::minutes(cfg.suspect_gap_minutes),
            min_exit: Duration::minutes(cfg.min_exit_minutes),
            lunch_minutes: cfg.lunch_minutes,
            outside_buffer_minutes: cfg.outside_buffer_minutes,
            pass_event_phrase: fold(&cfg.pass_event_phrase),
            uncontrolled_marker: fold(&cfg.uncontrolled_marker),
            drop_partially_uncontrolled: cfg.drop_partially_uncontrolled,
            inside_hint: fold(&cfg.inside_hint),
            outside_hint: fold(&cfg.outside_hint),
            nonperson_tokens: folded(&cfg.nonperson_tokens),
            whole_word_tokens,
            excluded_aliases: folded(&cfg.excluded_aliases),
            gov_duty,
            gov_duty_label: cfg.gov_duty_label.clone(),
            absences_within_journal_period: cfg.absences_within_journal_period,
            header_offsets: cfg.header_offsets.clone(),
            journal_columns: cfg.journal_columns.clone(),
            absence_columns: cfg.absence_columns.clone(),
            labels: cfg.labels.clone(),
        })
    }
}
