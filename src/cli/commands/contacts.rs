use crate::cli::parser::{Commands, ContactAction};
use crate::config::Config;
use crate::core::contacts::ContactLogic;
use crate::errors::AppResult;

/// Handle the `contacts` subcommands
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Contacts { action } = cmd {
        match action {
            ContactAction::Add { name, phone, email } => {
                ContactLogic::add(cfg, name, phone, email)?;
            }
            ContactAction::List => {
                ContactLogic::list(cfg)?;
            }
            ContactAction::Search { name } => {
                ContactLogic::search(cfg, name)?;
            }
            ContactAction::Update { name, phone, email } => {
                ContactLogic::update(cfg, name, phone.as_deref(), email.as_deref())?;
            }
            ContactAction::Delete { name } => {
                ContactLogic::delete(cfg, name)?;
            }
            ContactAction::ExportJson => {
                ContactLogic::export_json(cfg)?;
            }
            ContactAction::ImportJson => {
                ContactLogic::import_json(cfg)?;
            }
        }
    }

    Ok(())
}
