use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;
pub mod rules;

pub use rules::Rules;

/// Header aliases for every journal column the normalizer needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalColumns {
    #[serde(default = "default_col_event")]
    pub event: Vec<String>,
    #[serde(default = "default_col_timestamp")]
    pub timestamp: Vec<String>,
    #[serde(default = "default_col_last_name")]
    pub last_name: Vec<String>,
    #[serde(default = "default_col_first_name")]
    pub first_name: Vec<String>,
    #[serde(default = "default_col_patronymic")]
    pub patronymic: Vec<String>,
    #[serde(default = "default_col_entry")]
    pub entry_label: Vec<String>,
    #[serde(default = "default_col_exit")]
    pub exit_label: Vec<String>,
}

/// Header aliases for the absence (HR) file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AbsenceColumns {
    #[serde(default = "default_abs_person")]
    pub person: Vec<String>,
    #[serde(default = "default_abs_kind")]
    pub kind: Vec<String>,
    #[serde(default = "default_abs_start")]
    pub start: Vec<String>,
    #[serde(default = "default_abs_end")]
    pub end: Vec<String>,
}

/// Labels written into the report by the assembler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportLabels {
    #[serde(default = "default_label_late")]
    pub late: String,
    #[serde(default = "default_label_on_time")]
    pub on_time: String,
    #[serde(default = "default_label_suspect")]
    pub suspect_note: String,
    #[serde(default = "default_label_anonymous")]
    pub anonymous_prefix: String,
    #[serde(default = "default_label_title")]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    // ---- time rules ----
    #[serde(default = "default_day_rollover")]
    pub day_rollover: String,
    #[serde(default = "default_core_start")]
    pub core_start: String,
    #[serde(default = "default_core_end")]
    pub core_end: String,
    #[serde(default = "default_late_after")]
    pub late_after: String,
    #[serde(default = "default_jitter")]
    pub jitter_minutes: i64,
    #[serde(default = "default_long_absence")]
    pub long_absence_minutes: i64,
    #[serde(default = "default_suspect_gap")]
    pub suspect_gap_minutes: i64,
    #[serde(default = "default_min_exit")]
    pub min_exit_minutes: i64,
    #[serde(default = "default_lunch")]
    pub lunch_minutes: i64,
    #[serde(default = "default_outside_buffer")]
    pub outside_buffer_minutes: i64,

    // ---- journal text markers ----
    #[serde(default = "default_pass_phrase")]
    pub pass_event_phrase: String,
    #[serde(default = "default_uncontrolled")]
    pub uncontrolled_marker: String,
    #[serde(default)]
    pub drop_partially_uncontrolled: bool,
    #[serde(default = "default_inside_hint")]
    pub inside_hint: String,
    #[serde(default = "default_outside_hint")]
    pub outside_hint: String,

    // ---- person filter ----
    #[serde(default = "default_nonperson_tokens")]
    pub nonperson_tokens: Vec<String>,
    #[serde(default = "default_whole_word_tokens")]
    pub whole_word_tokens: Vec<String>,
    #[serde(default = "default_excluded_aliases")]
    pub excluded_aliases: Vec<String>,

    // ---- absences ----
    #[serde(default = "default_gov_duty_pattern")]
    pub gov_duty_pattern: String,
    #[serde(default = "default_gov_duty_label")]
    pub gov_duty_label: String,
    #[serde(default = "default_true")]
    pub absences_within_journal_period: bool,

    // ---- input layout ----
    #[serde(default = "default_header_offsets")]
    pub header_offsets: Vec<usize>,
    #[serde(default = "default_journal_columns")]
    pub journal_columns: JournalColumns,
    #[serde(default = "default_absence_columns")]
    pub absence_columns: AbsenceColumns,

    // ---- output ----
    #[serde(default = "default_labels")]
    pub labels: ReportLabels,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_day_rollover() -> String {
    "06:00".to_string()
}
fn default_core_start() -> String {
    "09:00".to_string()
}
fn default_core_end() -> String {
    "18:00".to_string()
}
fn default_late_after() -> String {
    "09:01".to_string()
}
fn default_jitter() -> i64 {
    3
}
fn default_long_absence() -> i64 {
    120
}
fn default_suspect_gap() -> i64 {
    60
}
fn default_min_exit() -> i64 {
    5
}
fn default_lunch() -> i64 {
    60
}
fn default_outside_buffer() -> i64 {
    60
}
fn default_true() -> bool {
    true
}
fn default_pass_phrase() -> String {
    "проход по идентификатору".to_string()
}
fn default_uncontrolled() -> String {
    "неконтролируем".to_string()
}
fn default_inside_hint() -> String {
    "офис".to_string()
}
fn default_outside_hint() -> String {
    "шлюз".to_string()
}

fn default_nonperson_tokens() -> Vec<String> {
    strings(&[
        "студент",
        "клининг",
        "уборщ",
        "водител",
        "охран",
        "технич",
        "персонал",
        "инженер без",
        "без фио",
        "безфио",
        "аэростар",
        "aerostar",
        "техносервис",
        "техно-сервис",
        "техносерв",
        "отель",
        "гостиниц",
        "стажер",
        "стажёр",
        "практикант",
        "интерн",
        "ассистент",
        "ученик",
    ])
}
fn default_whole_word_tokens() -> Vec<String> {
    strings(&["ооо", "оао", "пао", "зао", "ип"])
}
fn default_excluded_aliases() -> Vec<String> {
    strings(&["пелешок", "пешелка"])
}
fn default_gov_duty_pattern() -> String {
    "(?i).*гос.*обязан.*".to_string()
}
fn default_gov_duty_label() -> String {
    "Сдача крови".to_string()
}
fn default_header_offsets() -> Vec<usize> {
    vec![3, 0, 1, 2]
}

fn default_col_event() -> Vec<String> {
    strings(&["Событие", "Event"])
}
fn default_col_timestamp() -> Vec<String> {
    strings(&["Дата события", "Event timestamp"])
}
fn default_col_last_name() -> Vec<String> {
    strings(&["Фамилия", "Last name"])
}
fn default_col_first_name() -> Vec<String> {
    strings(&["Имя", "First name"])
}
fn default_col_patronymic() -> Vec<String> {
    strings(&["Отчество", "Patronymic"])
}
fn default_col_entry() -> Vec<String> {
    strings(&["Вход", "Entry label"])
}
fn default_col_exit() -> Vec<String> {
    strings(&["Выход", "Exit label"])
}
fn default_journal_columns() -> JournalColumns {
    JournalColumns {
        event: default_col_event(),
        timestamp: default_col_timestamp(),
        last_name: default_col_last_name(),
        first_name: default_col_first_name(),
        patronymic: default_col_patronymic(),
        entry_label: default_col_entry(),
        exit_label: default_col_exit(),
    }
}

fn default_abs_person() -> Vec<String> {
    strings(&["Сотрудник", "Employee"])
}
fn default_abs_kind() -> Vec<String> {
    strings(&["Вид отсутствия", "Absence type"])
}
fn default_abs_start() -> Vec<String> {
    strings(&["с", "Start"])
}
fn default_abs_end() -> Vec<String> {
    strings(&["до", "End"])
}
fn default_absence_columns() -> AbsenceColumns {
    AbsenceColumns {
        person: default_abs_person(),
        kind: default_abs_kind(),
        start: default_abs_start(),
        end: default_abs_end(),
    }
}

fn default_label_late() -> String {
    "late".to_string()
}
fn default_label_on_time() -> String {
    "on time".to_string()
}
fn default_label_suspect() -> String {
    "possible pass outside terminal".to_string()
}
fn default_label_anonymous() -> String {
    "Employee".to_string()
}
fn default_label_title() -> String {
    "ATTENDANCE REPORT".to_string()
}
fn default_labels() -> ReportLabels {
    ReportLabels {
        late: default_label_late(),
        on_time: default_label_on_time(),
        suspect_note: default_label_suspect(),
        anonymous_prefix: default_label_anonymous(),
        title: default_label_title(),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            day_rollover: default_day_rollover(),
            core_start: default_core_start(),
            core_end: default_core_end(),
            late_after: default_late_after(),
            jitter_minutes: default_jitter(),
            long_absence_minutes: default_long_absence(),
            suspect_gap_minutes: default_suspect_gap(),
            min_exit_minutes: default_min_exit(),
            lunch_minutes: default_lunch(),
            outside_buffer_minutes: default_outside_buffer(),
            pass_event_phrase: default_pass_phrase(),
            uncontrolled_marker: default_uncontrolled(),
            drop_partially_uncontrolled: false,
            inside_hint: default_inside_hint(),
            outside_hint: default_outside_hint(),
            nonperson_tokens: default_nonperson_tokens(),
            whole_word_tokens: default_whole_word_tokens(),
            excluded_aliases: default_excluded_aliases(),
            gov_duty_pattern: default_gov_duty_pattern(),
            gov_duty_label: default_gov_duty_label(),
            absences_within_journal_period: true,
            header_offsets: default_header_offsets(),
            journal_columns: default_journal_columns(),
            absence_columns: default_absence_columns(),
            labels: default_labels(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from the default location, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// Write the configuration to `path`, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
