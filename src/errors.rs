//! Unified application error type.
//! All modules (store, parsers, report, core, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot write '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing / input errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (use e.g. '09:15 AM' or '09:15')")]
    InvalidTime(String),

    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),

    #[error("Input error: {0}")]
    Input(String),

    // ---------------------------
    // Attendance logic
    // ---------------------------
    #[error("Class strength {strength} cannot be less than present students ({present})")]
    ClassStrength { present: usize, strength: usize },

    #[error("Student '{0}' is already recorded for this date")]
    DuplicateStudent(String),

    // ---------------------------
    // Contact book
    // ---------------------------
    #[error("A contact named '{0}' already exists")]
    DuplicateContact(String),

    #[error("No contact found with name '{0}'")]
    ContactNotFound(String),

    // ---------------------------
    // Config / export
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Wrap an I/O failure that happened while writing `path`.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Wrap an I/O failure that happened while reading `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::FileRead {
            path: path.into(),
            source,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
