use chrono::{NaiveDate, NaiveDateTime};

/// Which journal column carries the inside/outside signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionColumn {
    Entry,
    Exit,
}

impl DirectionColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectionColumn::Entry => "entry",
            DirectionColumn::Exit => "exit",
        }
    }
}

/// One genuine badge pass, as kept by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessEvent {
    pub person: String,
    pub timestamp: NaiveDateTime,
    pub workday: NaiveDate,
    pub entry_label: String, // folded text of the entry column
    pub exit_label: String,  // folded text of the exit column
}

impl AccessEvent {
    pub fn label(&self, column: DirectionColumn) -> &str {
        match column {
            DirectionColumn::Entry => &self.entry_label,
            DirectionColumn::Exit => &self.exit_label,
        }
    }
}
