//! Presence reconstruction: replays one person's badge passes for one
//! workday as an inside/outside automaton over the core window.

use crate::config::Rules;
use crate::models::access_event::{AccessEvent, DirectionColumn};
use crate::models::daily_record::Interval;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Events of one (person, workday), sorted by timestamp.
pub type DayGroups = BTreeMap<(String, NaiveDate), Vec<AccessEvent>>;

pub fn group_days(events: Vec<AccessEvent>) -> DayGroups {
    let mut groups: DayGroups = BTreeMap::new();

    for ev in events {
        groups
            .entry((ev.person.clone(), ev.workday))
            .or_default()
            .push(ev);
    }

    for evs in groups.values_mut() {
        evs.sort_by_key(|e| e.timestamp);
    }

    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Inside,
    Outside,
}

/// Inside hint wins over the outside hint; text matching neither is unknown.
pub fn classify(text: &str, rules: &Rules) -> Option<Label> {
    if text.contains(rules.inside_hint.as_str()) {
        Some(Label::Inside)
    } else if text.contains(rules.outside_hint.as_str()) {
        Some(Label::Outside)
    } else {
        None
    }
}

/// A labeled instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub at: NaiveDateTime,
    pub label: Label,
}

/// Drop a mark when it repeats the label of the last kept mark within `jitter`.
pub fn dedup_jitter(marks: &[Mark], jitter: Duration) -> Vec<Mark> {
    let mut kept: Vec<Mark> = Vec::with_capacity(marks.len());

    for m in marks {
        if let Some(prev) = kept.last()
            && prev.label == m.label
            && m.at - prev.at <= jitter
        {
            continue;
        }
        kept.push(*m);
    }

    kept
}

/// Core window of a workday, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CoreWindow {
    /// Configured core hours clipped to the workday bounds; `None` when empty.
    pub fn for_day(day: NaiveDate, rules: &Rules) -> Option<Self> {
        let floor = day.and_time(rules.day_rollover);
        let ceiling = floor + Duration::days(1);

        let start = day.and_time(rules.core_start).max(floor);
        let end = day.and_time(rules.core_end).min(ceiling);

        (start < end).then_some(Self { start, end })
    }

    pub fn length(&self) -> Duration {
        self.end - self.start
    }

    fn clamp(&self, t: NaiveDateTime) -> NaiveDateTime {
        t.clamp(self.start, self.end)
    }
}

/// Outcome of one replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replay {
    pub inside: Duration,
    pub longest_gap: Option<Interval>,
    pub exits: u32,
}

#[derive(Debug, Clone, Copy)]
struct Acc {
    state: Label,
    since: NaiveDateTime,
    counted_exit: bool, // current outside stretch began with an exit inside the window
    inside: Duration,
    best: Option<Interval>,
    exits: u32,
}

impl Acc {
    fn close(mut self, at: NaiveDateTime, min_exit: Duration) -> Self {
        match self.state {
            Label::Inside => self.inside += at - self.since,
            Label::Outside => {
                let gap = Interval {
                    start: self.since,
                    end: at,
                };
                if self.best.is_none_or(|b| gap.seconds() > b.seconds()) {
                    self.best = Some(gap);
                }
                if self.counted_exit && at - self.since >= min_exit {
                    self.exits += 1;
                }
            }
        }
        self
    }

    fn step(self, m: &Mark, window: &CoreWindow, min_exit: Duration) -> Self {
        if m.label == self.state {
            return self;
        }

        let at = window.clamp(m.at);
        let closed = self.close(at, min_exit);
        Acc {
            state: m.label,
            since: at,
            counted_exit: m.label == Label::Outside,
            ..closed
        }
    }
}

/// Fold the in-window marks starting from `initial` at the window start.
///
/// Only transitions change state; a repeated label continues the current
/// stretch. An outside stretch still open at the window end is closed there.
/// Exits are outside stretches opened by an outside mark inside the window
/// and lasting at least `min_exit`.
pub fn replay(initial: Label, marks: &[Mark], window: &CoreWindow, min_exit: Duration) -> Replay {
    let seed = Acc {
        state: initial,
        since: window.start,
        counted_exit: false,
        inside: Duration::zero(),
        best: None,
        exits: 0,
    };

    let done = marks
        .iter()
        .filter(|m| m.at >= window.start && m.at <= window.end)
        .fold(seed, |acc, m| acc.step(m, window, min_exit))
        .close(window.end, min_exit);

    Replay {
        inside: done.inside,
        longest_gap: done.best.filter(|g| g.seconds() > 0),
        exits: done.exits,
    }
}

/// Metrics of one (person, workday).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Presence {
    pub arrival: Option<NaiveDateTime>,
    pub departure: Option<NaiveDateTime>,
    pub outside_core_minutes: i64,
    pub long_absence: Option<Interval>,
    pub exit_count: u32,
    pub suspect: bool,
}

fn round_minutes(d: Duration) -> i64 {
    (d.num_seconds() as f64 / 60.0).round() as i64
}

/// Reconstruct presence for `events` (one person, one workday, sorted).
pub fn reconstruct(
    events: &[AccessEvent],
    column: DirectionColumn,
    day: NaiveDate,
    rules: &Rules,
) -> Presence {
    let arrival = events.first().map(|e| e.timestamp);
    let departure = events
        .iter()
        .rev()
        .find(|e| classify(e.label(column), rules) == Some(Label::Outside))
        .map(|e| e.timestamp);

    let mut presence = Presence {
        arrival,
        departure,
        ..Presence::default()
    };

    let Some(window) = CoreWindow::for_day(day, rules) else {
        return presence;
    };

    let marks: Vec<Mark> = events
        .iter()
        .filter(|e| e.timestamp <= window.end)
        .filter_map(|e| {
            classify(e.label(column), rules).map(|label| Mark {
                at: e.timestamp,
                label,
            })
        })
        .collect();
    let marks = dedup_jitter(&marks, rules.jitter);

    let split = marks.partition_point(|m| m.at < window.start);
    let initial = marks[..split]
        .last()
        .map(|m| m.label)
        .unwrap_or(Label::Outside);
    let in_window = &marks[split..];

    let result = replay(initial, in_window, &window, rules.min_exit);

    let outside = (window.length() - result.inside).max(Duration::zero());
    presence.outside_core_minutes = round_minutes(outside);
    presence.long_absence = result
        .longest_gap
        .filter(|g| round_minutes(g.end - g.start) >= rules.long_absence_minutes);
    presence.exit_count = result.exits;
    presence.suspect = in_window
        .windows(2)
        .any(|w| w[0].label == w[1].label && w[1].at - w[0].at > rules.suspect_gap);

    presence
}

/// Outside-core minutes only, as used by the direction resolver.
pub fn outside_core_minutes(
    events: &[AccessEvent],
    column: DirectionColumn,
    day: NaiveDate,
    rules: &Rules,
) -> i64 {
    reconstruct(events, column, day, rules).outside_core_minutes
}
