use crate::cli::parser::Commands;
use crate::config::Rules;
use crate::core::report::anonymize;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, rules: &Rules) -> AppResult<()> {
    if let Commands::Report {
        journal,
        absences,
        file,
        format,
        force,
        anonymize: mask,
    } = cmd
    {
        let mut report = super::build_from_files(journal, absences.as_deref(), rules)?;

        if *mask {
            anonymize(&mut report.rows, &rules.labels.anonymous_prefix);
        }

        let s = &report.stats;
        info(format!(
            "Journal rows: {} | kept: {} | skipped: {} not a pass, {} uncontrolled, {} bad timestamp, {} non-person",
            s.rows, s.kept, s.not_a_pass, s.uncontrolled, s.bad_timestamp, s.non_person
        ));
        if let Some(res) = &report.resolution {
            info(format!(
                "Direction column: {} (outside-core minutes: entry {}, exit {})",
                res.column.as_str(),
                res.entry_outside_minutes,
                res.exit_outside_minutes
            ));
        }

        let out = expand_tilde(file);
        ExportLogic::export(
            &report.rows,
            *format,
            &out.to_string_lossy(),
            &rules.labels.title,
            *force,
        )?;
    }
    Ok(())
}
