#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::config::{Config, Rules};
use rattendance::models::sheet::Sheet;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const JOURNAL_HEADER: [&str; 7] = [
    "Событие",
    "Дата события",
    "Фамилия",
    "Имя",
    "Отчество",
    "Вход",
    "Выход",
];

pub const PASS: &str = "Проход по идентификатору";
pub const OFFICE: &str = "Офис 3 этаж";
pub const GATE: &str = "Шлюз проходной";

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

pub fn rules() -> Rules {
    Rules::from_config(&Config::default()).expect("default rules")
}

/// Path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist, so the built-in defaults apply.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}

/// A real pass of `person` ("Last First Middle") where the entry column
/// carries the direction: inside → office, outside → gateway. The exit
/// column holds the opposite reading.
pub fn pass(person: &str, ts: &str, inside: bool) -> Vec<String> {
    let mut parts = person.split_whitespace();
    let last = parts.next().unwrap_or("");
    let first = parts.next().unwrap_or("");
    let middle = parts.next().unwrap_or("");
    let (entry, exit) = if inside { (OFFICE, GATE) } else { (GATE, OFFICE) };

    [PASS, ts, last, first, middle, entry, exit]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn header_row() -> Vec<String> {
    JOURNAL_HEADER.iter().map(|s| s.to_string()).collect()
}

/// Journal sheet with the header on the first row.
pub fn journal(rows: Vec<Vec<String>>) -> Sheet {
    let mut all = vec![header_row()];
    all.extend(rows);
    Sheet::from_text_rows(all)
}

/// Write rows as a `;`-separated file and return its path.
pub fn write_csv(name: &str, rows: &[Vec<String>]) -> String {
    let path = temp_path(name, "csv");
    let body: Vec<String> = rows.iter().map(|r| r.join(";")).collect();
    fs::write(&path, body.join("\n")).expect("write csv");
    path
}

/// Monday 15-01-2024: arrival 08:55, lunch outside 12:00–13:00, out at 18:10.
pub fn regular_day(person: &str) -> Vec<Vec<String>> {
    vec![
        pass(person, "15.01.2024 08:55:00", true),
        pass(person, "15.01.2024 12:00:00", false),
        pass(person, "15.01.2024 13:00:00", true),
        pass(person, "15.01.2024 18:10:00", false),
    ]
}

pub fn journal_csv(name: &str, rows: Vec<Vec<String>>) -> String {
    let mut all = vec![header_row()];
    all.extend(rows);
    write_csv(name, &all)
}
