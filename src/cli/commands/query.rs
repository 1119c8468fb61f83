use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::QueryLogic;
use crate::errors::AppResult;

/// Handle the `query` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Query {
        date,
        range,
        export,
        force,
    } = cmd
    {
        QueryLogic::run(cfg, date.as_deref(), range.as_deref(), *export, *force)?;
    }

    Ok(())
}
