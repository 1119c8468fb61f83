use crate::cli::parser::{Commands, RosterAction};
use crate::config::Config;
use crate::core::roster::RosterLogic;
use crate::errors::AppResult;

/// Handle the `roster` subcommands
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roster { action } = cmd {
        match action {
            RosterAction::List => {
                RosterLogic::list(cfg)?;
            }
            RosterAction::Add { names } => {
                RosterLogic::add(cfg, names)?;
            }
            RosterAction::Remove { names } => {
                RosterLogic::remove(cfg, names)?;
            }
            RosterAction::Replace { names } => {
                RosterLogic::replace(cfg, names)?;
            }
            RosterAction::Import { file } => {
                RosterLogic::import(cfg, file)?;
            }
        }
    }

    Ok(())
}
