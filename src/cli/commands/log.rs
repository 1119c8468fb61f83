use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `log` command: `--print` lists the activity log, `--op` narrows it
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Log { print, operation } = cmd else {
        return Ok(());
    };

    if !*print && operation.is_none() {
        info(format!(
            "Activity log: {} (use --print to list it)",
            cfg.activity_log().display()
        ));
        return Ok(());
    }

    LogLogic::print_log(cfg, operation.as_deref())
}
