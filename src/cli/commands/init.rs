use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{ContactStore, activity};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the data directory (archive, CSV log, roster, contact book)
///  - the configuration file, unless running in test mode
///  - an empty contact book with its header row
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing classbook...");

    if !cli.test {
        let path = Config::config_file();
        cfg.save_to(&path)?;
        info(format!("Config file : {}", path.display()));
    }

    let data_dir = cfg.ensure_data_dir()?;
    info(format!("Data dir    : {}", data_dir.display()));

    ContactStore::new(cfg).ensure_exists()?;

    activity::record(
        cfg,
        "init",
        "",
        &format!("Data directory initialized at {}", data_dir.display()),
    );

    success("classbook initialization completed!");
    Ok(())
}
