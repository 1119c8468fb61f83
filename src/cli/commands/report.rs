use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;

/// Handle the `report` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { file, print, force } = cmd {
        ReportLogic::generate(cfg, file.as_deref(), *print, *force)?;
    }

    Ok(())
}
