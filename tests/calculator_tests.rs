use chrono::{NaiveDate, NaiveDateTime};
use rattendance::core::calculator::daily::{day_totals, lateness, span_minutes};
use rattendance::core::calculator::direction::resolve;
use rattendance::core::calculator::presence::{
    CoreWindow, Label, Mark, dedup_jitter, group_days, reconstruct, replay,
};
use rattendance::core::calculator::weekly::apply_weekly_totals;
use rattendance::core::normalizer::normalize;
use rattendance::models::access_event::DirectionColumn;
use rattendance::models::daily_record::{DailyRecord, Lateness};

mod common;
use common::{journal, pass, regular_day, rules};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn at(hms: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("2024-01-15 {hms}"), "%Y-%m-%d %H:%M:%S").unwrap()
}

fn mark(hms: &str, label: Label) -> Mark {
    Mark { at: at(hms), label }
}

#[test]
fn test_jitter_within_three_minutes_is_dropped() {
    let marks = [
        mark("09:00:00", Label::Inside),
        mark("09:02:00", Label::Inside),
        mark("09:04:00", Label::Inside),
    ];

    let kept = dedup_jitter(&marks, rules().jitter);

    // 09:02 repeats 09:00 within 3 min; 09:04 is 4 min after the last kept mark
    assert_eq!(kept, vec![marks[0], marks[2]]);
}

#[test]
fn test_jitter_keeps_label_changes() {
    let marks = [
        mark("12:00:00", Label::Outside),
        mark("12:01:00", Label::Inside),
    ];

    assert_eq!(dedup_jitter(&marks, rules().jitter).len(), 2);
}

#[test]
fn test_exit_of_exactly_five_minutes_counts() {
    let r = rules();
    let window = CoreWindow::for_day(day(), &r).unwrap();
    let marks = [
        mark("12:00:00", Label::Outside),
        mark("12:05:00", Label::Inside),
    ];

    let result = replay(Label::Inside, &marks, &window, r.min_exit);
    assert_eq!(result.exits, 1);
    assert_eq!(result.inside.num_minutes(), 540 - 5);
}

#[test]
fn test_exit_shorter_than_five_minutes_is_ignored() {
    let r = rules();
    let window = CoreWindow::for_day(day(), &r).unwrap();
    let marks = [
        mark("12:00:00", Label::Outside),
        mark("12:04:59", Label::Inside),
    ];

    let result = replay(Label::Inside, &marks, &window, r.min_exit);
    assert_eq!(result.exits, 0);
}

#[test]
fn test_outside_before_arrival_is_not_an_exit() {
    let r = rules();
    let window = CoreWindow::for_day(day(), &r).unwrap();
    let marks = [mark("10:00:00", Label::Inside)];

    let result = replay(Label::Outside, &marks, &window, r.min_exit);
    assert_eq!(result.exits, 0);
    assert_eq!(result.inside.num_minutes(), 8 * 60);

    let gap = result.longest_gap.unwrap();
    assert_eq!((gap.start, gap.end), (at("09:00:00"), at("10:00:00")));
}

#[test]
fn test_exit_open_at_window_end_counts() {
    let r = rules();
    let window = CoreWindow::for_day(day(), &r).unwrap();
    let marks = [mark("17:30:00", Label::Outside)];

    let result = replay(Label::Inside, &marks, &window, r.min_exit);
    assert_eq!(result.exits, 1);
    assert_eq!(result.longest_gap.unwrap().label(), "17:30–18:00");
}

#[test]
fn test_longest_gap_keeps_the_first_of_equal_gaps() {
    let r = rules();
    let window = CoreWindow::for_day(day(), &r).unwrap();
    let marks = [
        mark("10:00:00", Label::Outside),
        mark("10:30:00", Label::Inside),
        mark("14:00:00", Label::Outside),
        mark("14:30:00", Label::Inside),
    ];

    let result = replay(Label::Inside, &marks, &window, r.min_exit);
    assert_eq!(result.longest_gap.unwrap().label(), "10:00–10:30");
    assert_eq!(result.exits, 2);
}

#[test]
fn test_lateness_threshold() {
    let r = rules();
    assert_eq!(
        lateness(Some(at("09:00:59")), day(), &r),
        Some(Lateness::OnTime)
    );
    assert_eq!(
        lateness(Some(at("09:01:00")), day(), &r),
        Some(Lateness::Late)
    );
    assert_eq!(lateness(None, day(), &r), None);
}

#[test]
fn test_span_is_floored_to_whole_minutes() {
    assert_eq!(span_minutes(Some(at("08:00:00")), Some(at("17:00:59"))), 540);
    assert_eq!(span_minutes(Some(at("08:00:00")), None), 0);
}

#[test]
fn test_day_totals_lunch_and_penalty() {
    let r = rules();

    let t = day_totals(540, 90, &r);
    assert_eq!((t.lunch, t.penalty, t.effective, t.shortfall), (60, 30, 450, 30));

    // short day: no lunch, no penalty, no shortfall
    let t = day_totals(45, 120, &r);
    assert_eq!((t.lunch, t.penalty, t.effective, t.shortfall), (0, 0, 45, 0));
}

#[test]
fn test_daily_total_never_negative() {
    let r = rules();

    let t = day_totals(100, 540, &r);
    assert_eq!((t.lunch, t.penalty, t.shortfall), (60, 480, 480));
    assert_eq!(t.effective, 0);
}

#[test]
fn test_weekly_total_lands_on_the_last_day_of_the_week() {
    let mut records: Vec<DailyRecord> = [(15, 480), (17, 420), (19, 300), (22, 100)]
        .iter()
        .map(|&(d, mins)| {
            let date = NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
            let mut rec = DailyRecord::absence_only("Иванов Иван", date, String::new());
            rec.has_events = true;
            rec.absence_reason = None;
            rec.daily_minutes = mins;
            rec
        })
        .collect();

    apply_weekly_totals(&mut records);

    let weekly: Vec<Option<i64>> = records.iter().map(|r| r.weekly_minutes).collect();
    assert_eq!(weekly, vec![None, None, Some(1200), Some(100)]);
}

#[test]
fn test_reconstruct_regular_day() {
    let r = rules();
    let (events, _) = normalize(&journal(regular_day("Иванов Иван Иванович")), &r).unwrap();

    let p = reconstruct(&events, DirectionColumn::Entry, day(), &r);

    assert_eq!(p.arrival, Some(at("08:55:00")));
    assert_eq!(p.departure, Some(at("18:10:00")));
    assert_eq!(p.outside_core_minutes, 60);
    assert_eq!(p.exit_count, 1);
    assert_eq!(p.long_absence, None);
    assert!(!p.suspect);
}

#[test]
fn test_departure_ignores_label_matching_both_hints() {
    let r = rules();
    let person = "Иванов Иван Иванович";
    let mut last = pass(person, "15.01.2024 18:10:00", true);
    last[5] = "Офис шлюз".into();
    let rows = vec![
        pass(person, "15.01.2024 08:55:00", true),
        pass(person, "15.01.2024 18:00:00", false),
        last,
    ];
    let (events, _) = normalize(&journal(rows), &r).unwrap();

    let p = reconstruct(&events, DirectionColumn::Entry, day(), &r);

    // the office hint wins, so 18:10 is an inside mark
    assert_eq!(p.departure, Some(at("18:00:00")));
}

#[test]
fn test_same_label_far_apart_is_suspect() {
    let r = rules();
    let person = "Иванов Иван Иванович";
    let rows = vec![
        pass(person, "15.01.2024 08:50:00", true),
        pass(person, "15.01.2024 10:00:00", false),
        pass(person, "15.01.2024 11:30:00", false),
        pass(person, "15.01.2024 12:00:00", true),
    ];
    let (events, _) = normalize(&journal(rows), &r).unwrap();

    let p = reconstruct(&events, DirectionColumn::Entry, day(), &r);
    assert!(p.suspect);
    // the repeated outside mark continues the same stretch
    assert_eq!(p.outside_core_minutes, 120);
    assert_eq!(p.exit_count, 1);
    assert_eq!(p.long_absence.unwrap().label(), "10:00–12:00");
}

#[test]
fn test_direction_resolver_picks_the_column_with_less_outside_time() {
    let r = rules();
    let (events, _) = normalize(&journal(regular_day("Иванов Иван Иванович")), &r).unwrap();
    let groups = group_days(events);

    let res = resolve(&groups, &r);
    assert_eq!(res.column, DirectionColumn::Entry);
    assert_eq!(res.entry_outside_minutes, 60);
    assert!(res.exit_outside_minutes > res.entry_outside_minutes);

    // swap the two label columns: the exit column now carries the signal
    let (mut events, _) = normalize(&journal(regular_day("Иванов Иван Иванович")), &r).unwrap();
    for e in events.iter_mut() {
        std::mem::swap(&mut e.entry_label, &mut e.exit_label);
    }
    let res = resolve(&group_days(events), &r);
    assert_eq!(res.column, DirectionColumn::Exit);
}
