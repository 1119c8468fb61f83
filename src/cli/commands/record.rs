use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::errors::AppResult;
use crate::ui::messages::header;

/// Handle the `record` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Record {
        date,
        entries,
        strength,
    } = cmd
    {
        header("Record Attendance");
        RecordLogic::run(cfg, date.as_deref(), entries, *strength)?;
    }

    Ok(())
}
