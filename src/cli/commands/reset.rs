use crate::cli::commands::open_workspace;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};
use crate::utils::date;

/// Wipe tasks, habits and calendar blocks. The audit log survives.
pub fn handle(cfg: &Config) -> AppResult<()> {
    if !confirm("This will delete all your tasks, habits, and schedules.") {
        info("Operation cancelled.");
        return Ok(());
    }

    let mut ws = open_workspace(cfg, date::today())?;
    ws.state.clear_all()?;
    success("All data cleared.");
    Ok(())
}
