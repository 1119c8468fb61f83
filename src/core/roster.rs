use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Roster, StudentName};
use crate::store::roster::parse_roster;
use crate::store::{RosterStore, activity};
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Roster maintenance: every change loads the file, edits it in memory and
/// saves it back whole.
pub struct RosterLogic;

impl RosterLogic {
    pub fn list(cfg: &Config) -> AppResult<Roster> {
        let roster = RosterStore::new(cfg).load()?;

        if roster.is_empty() {
            info("Roster empty.");
        } else {
            println!("Roster ({} students):", roster.len());
            for (idx, name) in roster.iter().enumerate() {
                println!("{}. {}", idx + 1, name);
            }
        }
        Ok(roster)
    }

    /// Returns how many names were new.
    pub fn add(cfg: &Config, names: &[String]) -> AppResult<usize> {
        let store = RosterStore::new(cfg);
        let mut roster = store.load()?;
        let mut added = 0;

        for raw in names {
            let name = StudentName::new(raw)?;
            if roster.contains(&name) {
                warning(format!("Already exists: {name}"));
            } else {
                success(format!("Added: {name}"));
                roster.insert(name);
                added += 1;
            }
        }

        Self::persist(cfg, &store, &roster, "add", added)?;
        Ok(added)
    }

    /// Returns how many names were removed.
    pub fn remove(cfg: &Config, names: &[String]) -> AppResult<usize> {
        let store = RosterStore::new(cfg);
        let mut roster = store.load()?;
        let mut removed = 0;

        for raw in names {
            let name = StudentName::new(raw)?;
            if roster.remove(&name) {
                success(format!("Removed: {name}"));
                removed += 1;
            } else {
                warning(format!("Name not found in roster: {name}"));
            }
        }

        Self::persist(cfg, &store, &roster, "remove", removed)?;
        Ok(removed)
    }

    /// Replace the whole roster with `names`.
    pub fn replace(cfg: &Config, names: &[String]) -> AppResult<usize> {
        let roster = parse_roster(&names.join("\n"));
        let store = RosterStore::new(cfg);
        Self::persist(cfg, &store, &roster, "replace", roster.len())?;
        Ok(roster.len())
    }

    /// Merge the names of a one-name-per-line file into the roster.
    pub fn import(cfg: &Config, file: &str) -> AppResult<usize> {
        let text = fs::read_to_string(file).map_err(|e| AppError::read(file, e))?;
        let incoming = parse_roster(&text);

        let store = RosterStore::new(cfg);
        let mut roster = store.load()?;
        let before = roster.len();
        roster.extend(incoming);
        let added = roster.len() - before;

        Self::persist(cfg, &store, &roster, "import", added)?;
        Ok(added)
    }

    fn persist(
        cfg: &Config,
        store: &RosterStore,
        roster: &Roster,
        action: &str,
        changed: usize,
    ) -> AppResult<()> {
        store.save(roster)?;
        success(format!(
            "Roster saved to '{}' ({} students).",
            store.path().display(),
            roster.len()
        ));
        activity::record(
            cfg,
            "roster",
            action,
            &format!("{changed} changed, {} total", roster.len()),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_cfg(name: &str) -> Config {
        let dir = env::temp_dir().join(format!("classbook_roster_logic_{name}"));
        fs::remove_dir_all(&dir).ok();
        Config {
            data_dir: dir.to_string_lossy().to_string(),
            ..Config::default()
        }
    }

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn add_skips_existing_and_remove_skips_missing() {
        let cfg = temp_cfg("add_remove");
        assert_eq!(RosterLogic::add(&cfg, &names(&["alice", "bob"])).unwrap(), 2);
        assert_eq!(RosterLogic::add(&cfg, &names(&["ALICE", "carol"])).unwrap(), 1);
        assert_eq!(RosterLogic::remove(&cfg, &names(&["bob", "zed"])).unwrap(), 1);

        let roster = RosterStore::new(&cfg).load().unwrap();
        let listed: Vec<&str> = roster.iter().map(StudentName::as_str).collect();
        assert_eq!(listed, ["Alice", "Carol"]);
    }

    #[test]
    fn replace_and_import() {
        let cfg = temp_cfg("replace_import");
        RosterLogic::add(&cfg, &names(&["old student"])).unwrap();
        assert_eq!(RosterLogic::replace(&cfg, &names(&["b", "a", "A"])).unwrap(), 2);

        let file = env::temp_dir().join("classbook_roster_import.txt");
        fs::write(&file, "c\na\n\n").unwrap();
        let added = RosterLogic::import(&cfg, &file.to_string_lossy()).unwrap();
        assert_eq!(added, 1);

        let text = fs::read_to_string(cfg.roster_file()).unwrap();
        assert_eq!(text, "A\nB\nC");
    }
}
