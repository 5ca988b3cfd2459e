use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command
///
/// Writes the default configuration file, creating its directory.
/// An existing file is kept unless `force` is set.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    info(format!("Initializing rAttendance… config file: {}", path.display()));

    if path.exists() && !force {
        warning(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    Config::default().save_to(path)?;

    success(format!("Configuration written to {}", path.display()));
    Ok(())
}
