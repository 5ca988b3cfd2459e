use crate::config::Rules;
use crate::core::calculator::presence::{group_days, reconstruct};
use crate::core::calculator::{daily, direction, weekly};
use crate::core::{absence, normalizer, person_filter, report};
use crate::errors::AppResult;
use crate::models::daily_record::DailyRecord;
use crate::models::report::Report;
use crate::models::sheet::Sheet;
use tracing::{debug, info};

pub struct Core;

impl Core {
    /// Build the attendance report for one journal and an optional absence
    /// calendar. Without an absence sheet every reason stays empty.
    pub fn build_report(
        journal: &Sheet,
        absences: Option<&Sheet>,
        rules: &Rules,
    ) -> AppResult<Report> {
        let (mut events, mut stats) = normalizer::normalize(journal, rules)?;
        stats.non_person = person_filter::retain_people(&mut events, rules);
        stats.kept = events.len();
        debug!(dropped = stats.non_person, kept = stats.kept, "non-person badges removed");

        let groups = group_days(events);
        let resolution = (!groups.is_empty()).then(|| direction::resolve(&groups, rules));

        let mut records: Vec<DailyRecord> = match resolution {
            Some(res) => groups
                .iter()
                .map(|((person, day), evs)| {
                    let presence = reconstruct(evs, res.column, *day, rules);
                    daily::build_daily(person, *day, &presence, rules)
                })
                .collect(),
            None => Vec::new(),
        };

        weekly::apply_weekly_totals(&mut records);

        let mut absence_days = 0;
        if let Some(sheet) = absences {
            let intervals = absence::read_absences(sheet, rules)?;
            let days = absence::expand(&intervals, rules);
            absence_days = days.len();
            records = absence::merge_absences(records, days, rules);
        }

        let rows = report::assemble(&records, &rules.labels);
        info!(rows = rows.len(), absence_days, "report built");

        Ok(Report {
            records,
            rows,
            stats,
            resolution,
            absence_days,
        })
    }
}
