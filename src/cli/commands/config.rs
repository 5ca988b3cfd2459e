use crate::cli::parser::Commands;
use crate::config::{Config, Rules, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if path.exists() {
                let missing = migrate::missing_keys(path)?;
                if missing.is_empty() {
                    success("No missing fields in the configuration file.");
                } else {
                    warning(format!(
                        "Missing fields (defaults in use): {}. Run `config --migrate` to add them.",
                        missing.join(", ")
                    ));
                }
            } else {
                warning(format!(
                    "No configuration file at {}: built-in defaults in use.",
                    path.display()
                ));
            }

            Rules::from_config(cfg)?;
            success("Configuration is valid.");
        }

        // ---- MIGRATE CONFIG ----
        if *run_migrate {
            if path.exists() {
                migrate::fill_missing_keys(path)?;
            } else {
                warning("No configuration file to migrate: run `init` first.");
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.clone());
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open `path` in the requested editor, falling back to the platform default.
fn edit(path: &Path, requested: Option<String>) {
    let fallback = default_editor();
    let editor = requested.unwrap_or_else(|| fallback.clone());

    match Command::new(&editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{editor}'"));
        }
        _ => {
            warning(format!(
                "Editor '{editor}' not available, falling back to '{fallback}'"
            ));
            match Command::new(&fallback).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited using fallback '{fallback}'"
                    ));
                }
                _ => error(format!(
                    "Failed to edit configuration file using fallback '{fallback}'"
                )),
            }
        }
    }
}
