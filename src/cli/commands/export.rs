use crate::cli::commands::open_workspace;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let ws = open_workspace(cfg, date::today())?;
        let count = ExportLogic::export(ws.state.events(), *format, file, range.as_deref(), *force)?;
        if count > 0 {
            ws.storage.audit(
                "export",
                format.as_str(),
                &format!("{} event(s) to {}", count, file),
            );
        }
    }
    Ok(())
}
