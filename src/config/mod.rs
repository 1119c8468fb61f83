use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const ARCHIVE_FILE: &str = "attendance_archive.txt";
const STRUCTURED_LOG_FILE: &str = "attendance_log.csv";
const ROSTER_FILE: &str = "roster.txt";
const EXPORT_FILE: &str = "student_attendance_record.txt";
const REPORT_FILE: &str = "full_date_list.pdf";
const CONTACTS_CSV_FILE: &str = "contacts.csv";
const CONTACTS_JSON_FILE: &str = "contacts.json";
const ACTIVITY_LOG_FILE: &str = "activity.log";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_name_column_width")]
    pub name_column_width: usize,
    #[serde(default = "default_report_title")]
    pub report_title: String,
}

fn default_name_column_width() -> usize {
    28
}
fn default_report_title() -> String {
    "Full Date-wise Attendance List".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir().to_string_lossy().to_string(),
            name_column_width: default_name_column_width(),
            report_title: default_report_title(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.classbook`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".classbook")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("classbook.conf")
    }

    /// Directory holding the archive, the CSV log, the roster and the contact book
    pub fn default_data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| AppError::read(path, e))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating the parent directory
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::write(parent, e))?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|e| AppError::write(path, e))
    }

    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn archive_file(&self) -> PathBuf {
        self.data_dir().join(ARCHIVE_FILE)
    }

    pub fn structured_log_file(&self) -> PathBuf {
        self.data_dir().join(STRUCTURED_LOG_FILE)
    }

    pub fn roster_file(&self) -> PathBuf {
        self.data_dir().join(ROSTER_FILE)
    }

    pub fn export_file(&self) -> PathBuf {
        self.data_dir().join(EXPORT_FILE)
    }

    pub fn report_file(&self) -> PathBuf {
        self.data_dir().join(REPORT_FILE)
    }

    pub fn contacts_csv(&self) -> PathBuf {
        self.data_dir().join(CONTACTS_CSV_FILE)
    }

    pub fn contacts_json(&self) -> PathBuf {
        self.data_dir().join(CONTACTS_JSON_FILE)
    }

    pub fn activity_log(&self) -> PathBuf {
        self.data_dir().join(ACTIVITY_LOG_FILE)
    }

    /// Make sure the data directory exists before any append
    pub fn ensure_data_dir(&self) -> AppResult<PathBuf> {
        let dir = self.data_dir();
        fs::create_dir_all(&dir).map_err(|e| AppError::write(&dir, e))?;
        Ok(dir)
    }
}
