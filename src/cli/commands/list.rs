use crate::cli::parser::Commands;
use crate::config::Rules;
use crate::errors::AppResult;
use crate::export::model::{get_headers, row_to_cells};
use crate::ui::messages::header;
use crate::utils::colors::{GREY, color_for_count, paint};
use crate::utils::table::Table;
use crate::utils::text::fold;

pub fn handle(cmd: &Commands, rules: &Rules) -> AppResult<()> {
    if let Commands::List {
        journal,
        absences,
        person,
    } = cmd
    {
        let report = super::build_from_files(journal, absences.as_deref(), rules)?;
        let needle = person.as_deref().map(fold);

        let rows: Vec<_> = report
            .rows
            .iter()
            .filter(|r| {
                needle
                    .as_ref()
                    .is_none_or(|n| fold(&r.person).contains(n.as_str()))
            })
            .collect();

        if rows.is_empty() {
            println!("{}", paint("No records.", GREY));
            return Ok(());
        }

        header(&rules.labels.title);

        let mut table = Table::new(&get_headers());
        for r in &rows {
            let cells = row_to_cells(r)
                .into_iter()
                .enumerate()
                .map(|(i, c)| {
                    if i > 1 && c.is_empty() {
                        "--".to_string()
                    } else {
                        c
                    }
                })
                .collect();
            table.add_row(cells);
        }
        print!("{}", table.render());

        let late = rows.iter().filter(|r| r.lateness == rules.labels.late).count();
        let short = rows.iter().filter(|r| !r.shortfall.is_empty()).count();
        println!(
            "\n{} rows | {} late | {} with shortfall",
            rows.len(),
            paint(late, color_for_count(late)),
            paint(short, color_for_count(short))
        );
    }
    Ok(())
}
