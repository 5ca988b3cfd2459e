use chrono::NaiveDate;

/// One HR line: a person absent for a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsenceInterval {
    pub person: String,
    pub kind: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A single absent calendar day, after expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsenceDay {
    pub person: String,
    pub date: NaiveDate,
    pub kind: String,
}
