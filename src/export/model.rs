// src/export/model.rs

use serde::Serialize;

/// Flat, fully formatted report row, in the fixed output column order.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    #[serde(rename = "Person")]
    pub person: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Arrival")]
    pub arrival: String,
    #[serde(rename = "Departure")]
    pub departure: String,
    #[serde(rename = "Lateness")]
    pub lateness: String,
    #[serde(rename = "Total span")]
    pub total_span: String,
    #[serde(rename = "Outside office")]
    pub outside_office: String,
    #[serde(rename = "Exit count")]
    pub exit_count: String,
    #[serde(rename = "Long absence")]
    pub long_absence: String,
    #[serde(rename = "Daily total")]
    pub daily_total: String,
    #[serde(rename = "Weekly total")]
    pub weekly_total: String,
    #[serde(rename = "Shortfall")]
    pub shortfall: String,
    #[serde(rename = "Absence reason")]
    pub absence_reason: String,
}

/// Header per CSV / XLSX / terminal table
pub fn get_headers() -> Vec<&'static str> {
    vec![
        "Person",
        "Date",
        "Arrival",
        "Departure",
        "Lateness",
        "Total span",
        "Outside office",
        "Exit count",
        "Long absence",
        "Daily total",
        "Weekly total",
        "Shortfall",
        "Absence reason",
    ]
}

/// Row values in header order.
pub fn row_to_cells(r: &ReportRow) -> Vec<String> {
    vec![
        r.person.clone(),
        r.date.clone(),
        r.arrival.clone(),
        r.departure.clone(),
        r.lateness.clone(),
        r.total_span.clone(),
        r.outside_office.clone(),
        r.exit_count.clone(),
        r.long_absence.clone(),
        r.daily_total.clone(),
        r.weekly_total.clone(),
        r.shortfall.clone(),
        r.absence_reason.clone(),
    ]
}
