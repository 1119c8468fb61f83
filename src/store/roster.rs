use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Roster, StudentName};
use std::fs;
use std::path::{Path, PathBuf};

/// Roster file: one student name per line, loaded and saved wholesale.
#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(cfg: &Config) -> Self {
        Self {
            path: cfg.roster_file(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty roster.
    pub fn load(&self) -> AppResult<Roster> {
        if !self.path.exists() {
            return Ok(Roster::new());
        }
        let text = fs::read_to_string(&self.path).map_err(|e| AppError::read(&self.path, e))?;
        Ok(parse_roster(&text))
    }

    pub fn save(&self, roster: &Roster) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::write(parent, e))?;
        }
        let body = roster
            .iter()
            .map(StudentName::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(&self.path, body).map_err(|e| AppError::write(&self.path, e))
    }
}

/// Title-case, de-duplicate and sort free-form roster text; blank lines are ignored.
pub fn parse_roster(text: &str) -> Roster {
    text.lines()
        .filter_map(|line| StudentName::new(line).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn free_form_text_is_normalized() {
        let roster = parse_roster("carol\n\n  bob \nALICE\nalice\nBob\n");
        let names: Vec<&str> = roster.iter().map(StudentName::as_str).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = env::temp_dir().join("classbook_roster_store");
        fs::remove_dir_all(&dir).ok();
        let cfg = Config {
            data_dir: dir.to_string_lossy().to_string(),
            ..Config::default()
        };
        let store = RosterStore::new(&cfg);
        assert!(store.load().unwrap().is_empty());

        let roster = parse_roster("zoe\nadam");
        store.save(&roster).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "Adam\nZoe");
        assert_eq!(store.load().unwrap(), roster);
    }
}
