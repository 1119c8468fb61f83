//! The structured attendance log: one CSV row per (run, date, student).

use crate::errors::{AppError, AppResult};
use crate::models::DateSection;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;

pub const LOG_HEADERS: [&str; 4] = ["generated_at", "date", "student_name", "check_in_time"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRow {
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub check_in_time: String,
}

/// Append one row per entry; the header goes in only when the file is new or empty.
pub fn append_rows(path: &Path, section: &DateSection, generated_at: &str) -> AppResult<usize> {
    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::write(path, e))?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if needs_header {
        wtr.write_record(LOG_HEADERS)?;
    }

    let mut written = 0;
    for entry in section.to_entries() {
        wtr.serialize(LogRow {
            generated_at: generated_at.to_string(),
            date: entry.date.to_string(),
            student_name: entry.student.to_string(),
            check_in_time: entry.check_in.to_string(),
        })?;
        written += 1;
    }

    wtr.flush().map_err(|e| AppError::write(path, e))?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentName;
    use chrono::NaiveDate;
    use std::env;

    fn section(names: &[(&str, &str)]) -> DateSection {
        DateSection::with_entries(
            NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
            names
                .iter()
                .map(|(n, t)| (StudentName::new(n).unwrap(), t.parse().unwrap())),
            names.len(),
        )
        .unwrap()
    }

    #[test]
    fn header_is_written_once() {
        let path = env::temp_dir().join("classbook_structured_header.csv");
        fs::remove_file(&path).ok();

        append_rows(&path, &section(&[("bob", "09:20"), ("alice", "09:15 am")]), "2025-11-20 10:00:00").unwrap();
        append_rows(&path, &section(&[("carol", "10:00")]), "2025-11-20 11:00:00").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "generated_at,date,student_name,check_in_time");
        assert_eq!(lines[1], "2025-11-20 10:00:00,2025-11-20,Alice,09:15 AM");
        assert_eq!(lines[2], "2025-11-20 10:00:00,2025-11-20,Bob,09:20 AM");
        assert_eq!(lines[3], "2025-11-20 11:00:00,2025-11-20,Carol,10:00 AM");
        assert_eq!(lines.len(), 4);
        fs::remove_file(&path).ok();
    }
}
