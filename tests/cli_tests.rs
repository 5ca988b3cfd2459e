use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{journal_csv, no_config, pass, rat, regular_day, temp_path, write_csv};

const IVANOV: &str = "Иванов Иван Иванович";

#[test]
fn test_report_csv() {
    let input = journal_csv("cli_report_csv_in", regular_day(IVANOV));
    let out = temp_path("cli_report_csv_out", "csv");

    rat()
        .args([
            "--config",
            &no_config("cli_report_csv"),
            "report",
            "--journal",
            &input,
            "--file",
            &out,
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(contains("Direction column: entry"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some(
            "Person,Date,Arrival,Departure,Lateness,Total span,Outside office,Exit count,\
             Long absence,Daily total,Weekly total,Shortfall,Absence reason"
        )
    );
    assert_eq!(
        lines.next(),
        Some(
            "Иванов Иван Иванович,15-01-2024,08:55,18:10,on time,9h 15min,1h 0min,1,,\
             8h 15min,8h 15min,,"
        )
    );
}

#[test]
fn test_report_json() {
    let input = journal_csv("cli_report_json_in", regular_day(IVANOV));
    let out = temp_path("cli_report_json_out", "json");

    rat()
        .args([
            "--config",
            &no_config("cli_report_json"),
            "report",
            "--journal",
            &input,
            "--file",
            &out,
            "--format",
            "json",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows[0]["Person"], IVANOV);
    assert_eq!(rows[0]["Daily total"], "8h 15min");
    assert_eq!(rows[0]["Shortfall"], "");
}

#[test]
fn test_report_xlsx_is_default_format() {
    let input = journal_csv("cli_report_xlsx_in", regular_day(IVANOV));
    let out = temp_path("cli_report_xlsx_out", "xlsx");

    rat()
        .args([
            "--config",
            &no_config("cli_report_xlsx"),
            "report",
            "--journal",
            &input,
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read exported xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_report_with_absences_and_anonymize() {
    let input = journal_csv("cli_report_abs_in", regular_day(IVANOV));
    let absences = write_csv(
        "cli_report_abs_hr",
        &[
            vec!["Сотрудник".into(), "Вид отсутствия".into(), "с".into(), "до".into()],
            vec![
                "Петров Пётр".into(),
                "Отпуск".into(),
                "15.01.2024".into(),
                "15.01.2024".into(),
            ],
        ],
    );
    let out = temp_path("cli_report_abs_out", "csv");

    rat()
        .args([
            "--config",
            &no_config("cli_report_abs"),
            "report",
            "--journal",
            &input,
            "--absences",
            &absences,
            "--file",
            &out,
            "--format",
            "csv",
            "--anonymize",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Employee 001,15-01-2024,08:55"));
    assert!(content.contains("Employee 002,15-01-2024,,,,,,,,,,,Отпуск"));
    assert!(!content.contains("Петров"));
}

#[test]
fn test_report_requires_absolute_output_path() {
    let input = journal_csv("cli_relative_in", regular_day(IVANOV));

    rat()
        .args([
            "--config",
            &no_config("cli_relative"),
            "report",
            "--journal",
            &input,
            "--file",
            "report.csv",
            "--format",
            "csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_existing_output_is_kept_unless_confirmed() {
    let input = journal_csv("cli_overwrite_in", regular_day(IVANOV));
    let out = temp_path("cli_overwrite_out", "csv");
    fs::write(&out, "old").unwrap();

    rat()
        .args([
            "--config",
            &no_config("cli_overwrite"),
            "report",
            "--journal",
            &input,
            "--file",
            &out,
            "--format",
            "csv",
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    rat()
        .args([
            "--config",
            &no_config("cli_overwrite"),
            "report",
            "--journal",
            &input,
            "--file",
            &out,
            "--format",
            "csv",
            "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains(IVANOV));
}

#[test]
fn test_journal_without_required_columns_fails() {
    let input = write_csv(
        "cli_bad_header_in",
        &[
            vec!["Событие".into(), "Дата события".into()],
            vec!["Проход по идентификатору".into(), "15.01.2024 09:00".into()],
        ],
    );
    let out = temp_path("cli_bad_header_out", "csv");

    rat()
        .args([
            "--config",
            &no_config("cli_bad_header"),
            "report",
            "--journal",
            &input,
            "--file",
            &out,
            "--format",
            "csv",
        ])
        .assert()
        .failure()
        .stderr(contains("Error:").and(contains("required columns not found")));
}

#[test]
fn test_unsupported_input_extension_fails() {
    let input = temp_path("cli_unsupported_in", "pdf");
    fs::write(&input, "%PDF").unwrap();

    rat()
        .args([
            "--config",
            &no_config("cli_unsupported"),
            "list",
            "--journal",
            &input,
        ])
        .assert()
        .failure()
        .stderr(contains("Unsupported input file"));
}

#[test]
fn test_list_filters_by_person() {
    let mut rows = regular_day(IVANOV);
    rows.push(pass("Сидорова Анна Павловна", "15.01.2024 09:30:00", true));
    rows.push(pass("Сидорова Анна Павловна", "15.01.2024 18:30:00", false));
    let input = journal_csv("cli_list_in", rows);

    rat()
        .args([
            "--config",
            &no_config("cli_list"),
            "list",
            "--journal",
            &input,
            "--person",
            "сидорова",
        ])
        .assert()
        .success()
        .stdout(
            contains("Сидорова Анна Павловна")
                .and(contains("late"))
                .and(contains(IVANOV).not()),
        );
}

#[test]
fn test_init_then_check_and_print() {
    let cfg = no_config("cli_init");

    rat()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Configuration written"));

    rat()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    rat()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("No missing fields").and(contains("Configuration is valid")));

    rat()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("core_start").and(contains("header_offsets")));
}

#[test]
fn test_invalid_config_is_reported() {
    let cfg = no_config("cli_invalid");
    fs::write(&cfg, "core_end: \"late\"\n").unwrap();

    rat()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .failure()
        .stderr(contains("core_end"));
}
