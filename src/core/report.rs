use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::AttendanceBook;
use crate::parsers::{parse_archive, read_structured};
use crate::report::builder::{Report, TABLE_HEADERS};
use crate::report::{ReportPdf, build_master, render};
use crate::store::{RecordStore, RosterStore, activity};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::date::generated_at_now;
use crate::utils::formatting::{bold, pad_right};
use crate::utils::fs_utils::ensure_writable;
use std::fmt;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

/// Which persisted form the attendance was rebuilt from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Structured,
    Archive,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Structured => f.write_str("CSV log"),
            DataSource::Archive => f.write_str("text archive"),
        }
    }
}

/// High-level logic for the `report` command.
pub struct ReportLogic;

impl ReportLogic {
    /// Rebuild the attendance, preferring the structured log and falling back
    /// to the archive text. `None` when neither holds any record.
    pub fn load_attendance(cfg: &Config) -> AppResult<Option<(AttendanceBook, DataSource)>> {
        let structured = read_structured(&cfg.structured_log_file())?;
        if !structured.is_empty() {
            return Ok(Some((structured, DataSource::Structured)));
        }

        let archive = parse_archive(&RecordStore::new(cfg).read_archive()?);
        if !archive.is_empty() {
            return Ok(Some((archive, DataSource::Archive)));
        }

        Ok(None)
    }

    /// Load, merge with the roster and render the report model.
    pub fn build(cfg: &Config) -> AppResult<Option<(Report, DataSource)>> {
        let Some((book, source)) = Self::load_attendance(cfg)? else {
            return Ok(None);
        };
        let roster = RosterStore::new(cfg).load()?;
        let master = build_master(&book, &roster);
        Ok(Some((render(&cfg.report_title, &master, &book), source)))
    }

    /// Generate the PDF (and optionally print the tables). Returns the output
    /// path, or `None` when there was nothing to report.
    pub fn generate(
        cfg: &Config,
        file: Option<&str>,
        print: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let Some((report, source)) = Self::build(cfg)? else {
            warning("No attendance data found in CSV or archive. Nothing to generate.");
            return Ok(None);
        };
        info(format!("Attendance loaded from the {source}."));

        if print {
            print!("{}", Self::preview(&report));
        }

        let out = file.map(PathBuf::from).unwrap_or_else(|| cfg.report_file());
        ensure_writable(&out, force)?;
        cfg.ensure_data_dir()?;

        let mut pdf = ReportPdf::new();
        pdf.write_report(&report, &generated_at_now());
        pdf.save(&out).map_err(|e| AppError::write(&out, e))?;

        success(format!("Colored PDF created: {}", out.display()));
        activity::record(
            cfg,
            "report",
            &out.to_string_lossy(),
            &format!("{} date(s) from the {source}", report.tables().len()),
        );
        Ok(Some(out))
    }

    /// Terminal rendering of the report with colored statuses.
    pub fn preview(report: &Report) -> String {
        let name_w = report
            .tables()
            .iter()
            .flat_map(|t| t.rows.iter().map(|r| r.student.width()))
            .chain(std::iter::once(TABLE_HEADERS[0].width()))
            .max()
            .unwrap_or(0);
        let status_w = TABLE_HEADERS[1].width();

        let mut out = format!("{}\n", bold(&report.title));
        for table in report.tables() {
            out.push_str(&format!("\n{}\n", bold(&table.heading())));
            out.push_str(&format!(
                "{}  {}  {}\n",
                pad_right(TABLE_HEADERS[0], name_w),
                pad_right(TABLE_HEADERS[1], status_w),
                TABLE_HEADERS[2]
            ));
            for row in &table.rows {
                out.push_str(&format!(
                    "{}  {}  {}\n",
                    pad_right(&row.student, name_w),
                    colorize_status(&pad_right(row.status.as_str(), status_w), row.status.is_present()),
                    colorize_optional(&row.check_in)
                ));
            }
            out.push_str(&format!("Present: {} / {}\n", table.present(), table.rows.len()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateSection, StudentName};
    use crate::store::structured;
    use chrono::NaiveDate;
    use std::env;
    use std::fs;

    fn temp_cfg(name: &str) -> Config {
        let dir = env::temp_dir().join(format!("classbook_report_logic_{name}"));
        fs::remove_dir_all(&dir).ok();
        Config {
            data_dir: dir.to_string_lossy().to_string(),
            ..Config::default()
        }
    }

    fn section(day: u32, names: &[&str]) -> DateSection {
        DateSection::with_entries(
            NaiveDate::from_ymd_opt(2025, 11, day).unwrap(),
            names
                .iter()
                .map(|n| (StudentName::new(n).unwrap(), "09:00".parse().unwrap())),
            names.len(),
        )
        .unwrap()
    }

    #[test]
    fn nothing_recorded_means_nothing_loaded() {
        let cfg = temp_cfg("empty");
        assert!(ReportLogic::load_attendance(&cfg).unwrap().is_none());
        assert!(ReportLogic::generate(&cfg, None, false, true).unwrap().is_none());
    }

    #[test]
    fn structured_log_is_preferred() {
        let cfg = temp_cfg("prefer_structured");
        RecordStore::new(&cfg)
            .append_section(&section(20, &["Alice"]), "t")
            .unwrap();
        let (_, source) = ReportLogic::load_attendance(&cfg).unwrap().unwrap();
        assert_eq!(source, DataSource::Structured);
    }

    #[test]
    fn archive_is_the_fallback() {
        let cfg = temp_cfg("fallback");
        RecordStore::new(&cfg)
            .append_section(&section(20, &["Alice", "Bob"]), "t")
            .unwrap();
        fs::remove_file(cfg.structured_log_file()).unwrap();

        let (book, source) = ReportLogic::load_attendance(&cfg).unwrap().unwrap();
        assert_eq!(source, DataSource::Archive);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn header_only_log_falls_back_too() {
        let cfg = temp_cfg("header_only");
        RecordStore::new(&cfg)
            .append_section(&section(21, &["Carol"]), "t")
            .unwrap();
        fs::write(cfg.structured_log_file(), structured::LOG_HEADERS.join(",") + "\n").unwrap();

        let (_, source) = ReportLogic::load_attendance(&cfg).unwrap().unwrap();
        assert_eq!(source, DataSource::Archive);
    }

    #[test]
    fn generate_writes_a_pdf_including_roster_absentees() {
        let cfg = temp_cfg("generate");
        RecordStore::new(&cfg)
            .append_section(&section(20, &["Alice", "Bob"]), "t")
            .unwrap();
        RosterStore::new(&cfg)
            .save(&["Alice", "Bob", "Carol"].iter().map(|n| StudentName::new(n).unwrap()).collect())
            .unwrap();

        let (report, _) = ReportLogic::build(&cfg).unwrap().unwrap();
        let carol = &report.tables()[0].rows[2];
        assert_eq!(carol.student, "Carol");
        assert_eq!(carol.status.as_str(), "Absent");
        assert_eq!(carol.check_in, "-");

        let out = ReportLogic::generate(&cfg, None, false, true).unwrap().unwrap();
        let bytes = fs::read(out).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn preview_contains_every_row() {
        let cfg = temp_cfg("preview");
        RecordStore::new(&cfg)
            .append_section(&section(20, &["Alice"]), "t")
            .unwrap();
        let (report, _) = ReportLogic::build(&cfg).unwrap().unwrap();
        let text = ReportLogic::preview(&report);
        assert!(text.contains("1. Date: 2025-11-20"));
        assert!(text.contains("Alice"));
        assert!(text.contains("09:00 AM"));
        assert!(text.contains("Present: 1 / 1"));
    }
}
