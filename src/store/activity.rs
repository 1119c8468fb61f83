//! Internal activity log: one line per operation, appended to `activity.log`
//! in the data directory.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub timestamp: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl ActivityEntry {
    pub fn to_line(&self) -> String {
        format!(
            "[{}] {} | {} | {}",
            self.timestamp, self.operation, self.target, self.message
        )
    }

    /// Inverse of [`to_line`](Self::to_line); `None` for foreign lines.
    pub fn parse(line: &str) -> Option<Self> {
        let rest = line.strip_prefix('[')?;
        let (timestamp, rest) = rest.split_once("] ")?;
        let mut parts = rest.splitn(3, " | ");
        Some(Self {
            timestamp: timestamp.to_string(),
            operation: parts.next()?.to_string(),
            target: parts.next().unwrap_or_default().to_string(),
            message: parts.next().unwrap_or_default().to_string(),
        })
    }
}

/// Append one line to the activity log.
pub fn ttlog(cfg: &Config, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let path = cfg.activity_log();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AppError::write(parent, e))?;
    }

    let entry = ActivityEntry {
        timestamp: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.replace('\n', " "),
        message: message.replace('\n', " "),
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| AppError::write(&path, e))?;
    writeln!(file, "{}", entry.to_line()).map_err(|e| AppError::write(&path, e))
}

/// Like [`ttlog`], but a logging failure only prints a warning.
pub fn record(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(cfg, operation, target, message) {
        warning(format!("Failed to write activity log: {e}"));
    }
}

pub fn read_entries(path: &Path) -> AppResult<Vec<ActivityEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path).map_err(|e| AppError::read(path, e))?;
    Ok(text.lines().filter_map(ActivityEntry::parse).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn lines_parse_back() {
        let e = ActivityEntry {
            timestamp: "2025-11-20T10:00:00+01:00".into(),
            operation: "record".into(),
            target: "2025-11-20".into(),
            message: "2 present | 1 absent".into(),
        };
        assert_eq!(ActivityEntry::parse(&e.to_line()), Some(e));
        assert_eq!(ActivityEntry::parse("garbage"), None);
    }

    #[test]
    fn entries_are_appended() {
        let dir = env::temp_dir().join("classbook_activity_log");
        fs::remove_dir_all(&dir).ok();
        let cfg = Config {
            data_dir: dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        ttlog(&cfg, "init", "", "Data directory ready").unwrap();
        ttlog(&cfg, "roster", "add", "Added 2 students").unwrap();

        let entries = read_entries(&cfg.activity_log()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, "init");
        assert_eq!(entries[1].target, "add");
        assert_eq!(entries[1].message, "Added 2 students");
    }
}
