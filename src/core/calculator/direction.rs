//! Batch-wide choice between the entry and the exit column.

use super::presence::{DayGroups, outside_core_minutes};
use crate::config::Rules;
use crate::models::access_event::DirectionColumn;
use crate::models::report::Resolution;
use tracing::info;

fn total_outside(groups: &DayGroups, column: DirectionColumn, rules: &Rules) -> i64 {
    groups
        .iter()
        .map(|((_, day), events)| outside_core_minutes(events, column, *day, rules))
        .sum()
}

/// The column producing less outside-core time over the whole batch wins;
/// ties go to the entry column.
pub fn resolve(groups: &DayGroups, rules: &Rules) -> Resolution {
    let entry = total_outside(groups, DirectionColumn::Entry, rules);
    let exit = total_outside(groups, DirectionColumn::Exit, rules);

    let column = if entry <= exit {
        DirectionColumn::Entry
    } else {
        DirectionColumn::Exit
    };

    info!(
        entry_outside_minutes = entry,
        exit_outside_minutes = exit,
        column = column.as_str(),
        "direction column resolved"
    );

    Resolution {
        column,
        entry_outside_minutes: entry,
        exit_outside_minutes: exit,
    }
}
