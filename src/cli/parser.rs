use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application to turn access-control journals into attendance reports
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance reports from access-control journals: arrivals, departures, time outside the office and absences",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom rules)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, edit, validate)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or invalid fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Build the attendance report and export it
    Report {
        #[arg(long, value_name = "FILE", help = "Access-control journal (.xlsx, .xls, .ods, .csv)")]
        journal: String,

        #[arg(long, value_name = "FILE", help = "Absence calendar exported by HR")]
        absences: Option<String>,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, short = 'f')]
        force: bool,

        #[arg(long, help = "Replace person names with numbered aliases")]
        anonymize: bool,
    },

    /// Print the attendance report in the terminal
    List {
        #[arg(long, value_name = "FILE")]
        journal: String,

        #[arg(long, value_name = "FILE")]
        absences: Option<String>,

        #[arg(long, help = "Show only people whose name contains this text")]
        person: Option<String>,
    },
}
