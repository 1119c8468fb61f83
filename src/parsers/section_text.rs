//! Archive text reader.
//!
//! Every archive line is tagged by [`classify`]; sections start at header
//! lines and everything else is interpreted by its tag, so no structure is
//! inferred from column positions.

use crate::models::{AttendanceBook, CheckIn, StudentName};
use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const HEADER_PREFIX: &str = "=== Attendance for: ";
pub const METADATA_PREFIX: &str = "Generated at:";
pub const COLUMN_HEADER_PREFIX: &str = "Student Name";
pub const FOOTER_PRESENT: &str = "Total Students Present:";
pub const FOOTER_STRENGTH: &str = "Total Students (Class Strength):";
pub const FOOTER_ABSENT: &str = "Total Absent:";

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^=== Attendance for: (\d{4}-\d{2}-\d{2}) ===$").expect("valid header regex")
});

static COLUMN_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Student Name\s+Check-in Time$").expect("valid column header regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterKind {
    Present,
    ClassStrength,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Header(NaiveDate),
    Metadata(&'a str),
    ColumnHeader,
    Rule,
    Footer(FooterKind, usize),
    Blank,
    /// `<name><2+ spaces><time>`; neither part is validated here.
    DataRow(&'a str, &'a str),
    Unrecognized,
}

pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if let Some(caps) = HEADER_RE.captures(trimmed) {
        return match NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d") {
            Ok(d) => LineKind::Header(d),
            Err(_) => LineKind::Unrecognized,
        };
    }

    if let Some(rest) = trimmed.strip_prefix(METADATA_PREFIX) {
        return LineKind::Metadata(rest.trim());
    }

    if COLUMN_HEADER_RE.is_match(trimmed) {
        return LineKind::ColumnHeader;
    }

    if trimmed.chars().all(|c| c == '-') {
        return LineKind::Rule;
    }

    for (prefix, kind) in [
        (FOOTER_PRESENT, FooterKind::Present),
        (FOOTER_STRENGTH, FooterKind::ClassStrength),
        (FOOTER_ABSENT, FooterKind::Absent),
    ] {
        // a footer label without a count is left to the data-row rule
        if let Some(n) = trimmed
            .strip_prefix(prefix)
            .and_then(|rest| rest.trim().parse().ok())
        {
            return LineKind::Footer(kind, n);
        }
    }

    // Names never contain whitespace runs, so the first one ends the name.
    match trimmed.find("  ") {
        Some(idx) => LineKind::DataRow(trimmed[..idx].trim(), trimmed[idx..].trim()),
        None => LineKind::Unrecognized,
    }
}

/// The lines of one archive section, header included, exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    pub date: NaiveDate,
    pub lines: Vec<&'a str>,
}

impl RawBlock<'_> {
    /// Block text with trailing blank lines dropped and a single final newline.
    pub fn text(&self) -> String {
        let end = self
            .lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1);
        let mut out = self.lines[..end].join("\n");
        out.push('\n');
        out
    }
}

/// Split archive text into sections; lines before the first header are ignored.
pub fn split_blocks(text: &str) -> Vec<RawBlock<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<RawBlock<'_>> = None;

    for line in text.lines() {
        if let LineKind::Header(date) = classify(line) {
            if let Some(done) = current.take() {
                blocks.push(done);
            }
            current = Some(RawBlock {
                date,
                lines: vec![line],
            });
        } else if let Some(block) = current.as_mut() {
            block.lines.push(line);
        }
    }

    blocks.extend(current);
    blocks
}

/// One parsed archive section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchivedSection {
    pub date: Option<NaiveDate>,
    pub generated_at: Option<String>,
    pub entries: BTreeMap<StudentName, CheckIn>,
    pub present: Option<usize>,
    pub class_strength: Option<usize>,
    pub absent: Option<usize>,
    /// Data rows whose name or time did not parse (treated as absent).
    pub skipped_rows: usize,
}

impl ArchivedSection {
    pub fn from_block(block: &RawBlock<'_>) -> Self {
        let mut section = ArchivedSection {
            date: Some(block.date),
            ..Default::default()
        };

        for line in block.lines.iter().skip(1) {
            match classify(line) {
                LineKind::Metadata(stamp) => section.generated_at = Some(stamp.to_string()),
                LineKind::Footer(FooterKind::Present, n) => section.present = Some(n),
                LineKind::Footer(FooterKind::ClassStrength, n) => section.class_strength = Some(n),
                LineKind::Footer(FooterKind::Absent, n) => section.absent = Some(n),
                LineKind::DataRow(name, time) => {
                    match (StudentName::new(name), time.parse::<CheckIn>()) {
                        (Ok(student), Ok(check_in)) => {
                            section.entries.insert(student, check_in);
                        }
                        _ => section.skipped_rows += 1,
                    }
                }
                _ => {}
            }
        }

        section
    }
}

/// Parse every section of an archive.
pub fn parse_sections(text: &str) -> Vec<ArchivedSection> {
    split_blocks(text).iter().map(ArchivedSection::from_block).collect()
}

/// Rebuild the attendance book from archive text; later sections win.
pub fn parse_archive(text: &str) -> AttendanceBook {
    let mut book = AttendanceBook::new();
    for section in parse_sections(text) {
        let Some(date) = section.date else { continue };
        for (student, check_in) in section.entries {
            book.insert(date, student, Some(check_in));
        }
    }
    book
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateSection;
    use crate::store::archive::format_section;

    const ARCHIVE: &str = "\
=== Attendance for: 2025-11-20 ===
Generated at: 2025-11-20 10:00:00

Student Name                Check-in Time
--------------------------------------------
Alice                       09:15 AM
Bob                         09:20 AM
--------------------------------------------
Total Students Present: 2
Total Students (Class Strength): 3
Total Absent: 1

=== Attendance for: 2025-11-21 ===
Generated at: 2025-11-21 10:00:00

Student Name                Check-in Time
--------------------------------------------
Carol                       late
Dave                        08:59 AM
--------------------------------------------
Total Students Present: 2
Total Students (Class Strength): 2
Total Absent: 0

";

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, day).unwrap()
    }

    #[test]
    fn classifier_tags_each_line_kind() {
        assert_eq!(
            classify("=== Attendance for: 2025-11-20 ==="),
            LineKind::Header(d(20))
        );
        assert_eq!(
            classify("Generated at: 2025-11-20 10:00:00"),
            LineKind::Metadata("2025-11-20 10:00:00")
        );
        assert_eq!(classify("Student Name      Check-in Time"), LineKind::ColumnHeader);
        assert_eq!(classify("-------"), LineKind::Rule);
        assert_eq!(
            classify("Total Students (Class Strength): 30"),
            LineKind::Footer(FooterKind::ClassStrength, 30)
        );
        assert_eq!(classify("   "), LineKind::Blank);
        assert_eq!(
            classify("Mary Ann                    09:15 AM"),
            LineKind::DataRow("Mary Ann", "09:15 AM")
        );
        assert_eq!(classify("loose text"), LineKind::Unrecognized);
        assert_eq!(
            classify("Student Namely              09:15 AM"),
            LineKind::DataRow("Student Namely", "09:15 AM")
        );
        assert_eq!(
            classify("Total Students Present:     09:15 AM"),
            LineKind::DataRow("Total Students Present:", "09:15 AM")
        );
        assert_eq!(
            classify("=== Attendance for: 2025-02-30 ==="),
            LineKind::Unrecognized
        );
    }

    #[test]
    fn blocks_keep_their_text_verbatim() {
        let blocks = split_blocks(ARCHIVE);
        assert_eq!(blocks.len(), 2);
        let first = blocks[0].text();
        assert!(first.starts_with("=== Attendance for: 2025-11-20 ===\n"));
        assert!(first.ends_with("Total Absent: 1\n"));
        assert!(!first.contains("2025-11-21"));
    }

    #[test]
    fn text_before_first_header_is_ignored() {
        let text = format!("stray line\n\n{ARCHIVE}");
        assert_eq!(split_blocks(&text).len(), 2);
    }

    #[test]
    fn sections_expose_footer_counts() {
        let sections = parse_sections(ARCHIVE);
        assert_eq!(sections[0].present, Some(2));
        assert_eq!(sections[0].class_strength, Some(3));
        assert_eq!(sections[0].absent, Some(1));
        assert_eq!(
            sections[0].generated_at.as_deref(),
            Some("2025-11-20 10:00:00")
        );
    }

    #[test]
    fn rows_with_invalid_time_are_absent_markers() {
        let sections = parse_sections(ARCHIVE);
        assert_eq!(sections[1].entries.len(), 1);
        assert_eq!(sections[1].skipped_rows, 1);

        let book = parse_archive(ARCHIVE);
        let carol = StudentName::new("Carol").unwrap();
        assert_eq!(book.get(d(21), &carol), None);
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn names_resembling_layout_lines_survive_a_round_trip() {
        let names = ["student namely", "totally", "total students present:"];
        let section = DateSection::with_entries(
            d(20),
            names
                .iter()
                .map(|n| (StudentName::new(n).unwrap(), "09:15".parse::<CheckIn>().unwrap())),
            3,
        )
        .unwrap();

        let text = format_section(&section, "2025-11-20 10:00:00", 28);
        let parsed = parse_sections(&text);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].entries.len(), names.len());
        assert_eq!(parsed[0].skipped_rows, 0);
        assert_eq!(parsed[0].present, Some(3));
        assert_eq!(parse_archive(&text).len(), names.len());
    }
}
