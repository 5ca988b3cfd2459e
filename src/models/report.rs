use super::access_event::DirectionColumn;
use super::daily_record::DailyRecord;
use crate::export::model::ReportRow;

/// What the normalizer and the person filter did with the journal rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub rows: usize,
    pub not_a_pass: usize,
    pub uncontrolled: usize,
    pub bad_timestamp: usize,
    pub non_person: usize,
    pub kept: usize,
}

/// Batch-wide choice of the direction column, with the totals behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub column: DirectionColumn,
    pub entry_outside_minutes: i64,
    pub exit_outside_minutes: i64,
}

/// Result of one report build.
#[derive(Debug, Clone)]
pub struct Report {
    pub records: Vec<DailyRecord>,
    pub rows: Vec<ReportRow>,
    pub stats: NormalizeStats,
    pub resolution: Option<Resolution>, // None when no event survived
    pub absence_days: usize,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
