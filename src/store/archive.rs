//! The attendance archive: human-readable, append-only, one block per run.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::DateSection;
use crate::parsers::section_text::{
    ArchivedSection, COLUMN_HEADER_PREFIX, FOOTER_ABSENT, FOOTER_PRESENT, FOOTER_STRENGTH,
    HEADER_PREFIX, METADATA_PREFIX, split_blocks,
};
use crate::store::structured;
use crate::utils::pad_right;
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

/// Width of the rule lines beyond the name column.
const RULE_EXTRA: usize = 16;

/// Minimum gap between a name and its time, so rows stay self-delimiting.
const MIN_GAP: usize = 2;

/// Appends date sections to the archive and the structured log, and looks
/// them up again by date.
#[derive(Debug, Clone)]
pub struct RecordStore {
    archive: PathBuf,
    structured_log: PathBuf,
    name_width: usize,
}

impl RecordStore {
    pub fn new(cfg: &Config) -> Self {
        Self {
            archive: cfg.archive_file(),
            structured_log: cfg.structured_log_file(),
            name_width: cfg.name_column_width,
        }
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive
    }

    pub fn structured_log_path(&self) -> &Path {
        &self.structured_log
    }

    /// Append the section to the archive, then its rows to the structured log.
    /// Both files are opened in append mode; earlier sections are never touched.
    pub fn append_section(&self, section: &DateSection, generated_at: &str) -> AppResult<()> {
        if let Some(parent) = self.archive.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::write(parent, e))?;
        }

        let block = format_section(section, generated_at, self.name_width);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.archive)
            .map_err(|e| AppError::write(&self.archive, e))?;
        file.write_all(block.as_bytes())
            .map_err(|e| AppError::write(&self.archive, e))?;

        structured::append_rows(&self.structured_log, section, generated_at)?;
        Ok(())
    }

    /// Whole archive text; a missing archive is empty.
    pub fn read_archive(&self) -> AppResult<String> {
        if !self.archive.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&self.archive).map_err(|e| AppError::read(&self.archive, e))
    }

    /// Every block recorded for `date`, verbatim, in archive order.
    pub fn find_sections_by_date(&self, date: NaiveDate) -> AppResult<Vec<String>> {
        self.find_sections_in_range(date, date)
    }

    /// Every block whose date lies in `start..=end`, verbatim, in archive order.
    pub fn find_sections_in_range(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<String>> {
        let text = self.read_archive()?;
        Ok(split_blocks(&text)
            .into_iter()
            .filter(|b| b.date >= start && b.date <= end)
            .map(|b| b.text())
            .collect())
    }

    /// Parsed form of [`find_sections_by_date`](Self::find_sections_by_date).
    pub fn parsed_sections_by_date(&self, date: NaiveDate) -> AppResult<Vec<ArchivedSection>> {
        let text = self.read_archive()?;
        Ok(split_blocks(&text)
            .iter()
            .filter(|b| b.date == date)
            .map(ArchivedSection::from_block)
            .collect())
    }
}

/// Render one archive block, including its trailing blank separator line.
pub fn format_section(section: &DateSection, generated_at: &str, name_width: usize) -> String {
    let rule = "-".repeat(name_width + RULE_EXTRA);
    let mut lines = vec![
        format!("{HEADER_PREFIX}{} ===", section.date()),
        format!("{METADATA_PREFIX} {generated_at}"),
        String::new(),
        format!("{}Check-in Time", pad_right(COLUMN_HEADER_PREFIX, name_width)),
        rule.clone(),
    ];

    for (student, check_in) in section.entries() {
        let width = name_width.max(student.as_str().width() + MIN_GAP);
        lines.push(format!("{}{}", pad_right(student.as_str(), width), check_in));
    }

    lines.push(rule);
    lines.push(format!("{FOOTER_PRESENT} {}", section.present()));
    lines.push(format!("{FOOTER_STRENGTH} {}", section.class_strength()));
    lines.push(format!("{FOOTER_ABSENT} {}", section.absent()));
    lines.push(String::new());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
