use crate::errors::{AppError, AppResult};
use crate::utils::title_case;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A title-cased student name.
///
/// Equality, hashing and ordering ignore case, so a set or map keyed by
/// `StudentName` is de-duplicated case-insensitively and iterates in
/// case-insensitive alphabetical order.
#[derive(Debug, Clone)]
pub struct StudentName {
    display: String,
    key: String,
}

impl StudentName {
    pub fn new(raw: &str) -> AppResult<Self> {
        let display = title_case(raw);
        if display.is_empty() {
            return Err(AppError::EmptyInput("Student name"));
        }
        let key = display.to_lowercase();
        Ok(Self { display, key })
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }
}

impl FromStr for StudentName {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::new(s)
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl PartialEq for StudentName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for StudentName {}

impl std::hash::Hash for StudentName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Ord for StudentName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for StudentName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
