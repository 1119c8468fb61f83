use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::{RecordStore, activity};
use crate::ui::messages::{header, info, success};
use crate::utils::date::parse_date_or_today;
use crate::utils::fs_utils::ensure_writable;
use crate::utils::range::parse_range;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// High-level logic for the `query` command.
pub struct QueryLogic;

impl QueryLogic {
    /// Resolve the lookup bounds: a `--range` expression, a single date, or today.
    pub fn bounds(date: Option<&str>, range: Option<&str>) -> AppResult<(NaiveDate, NaiveDate)> {
        if let Some(r) = range {
            return parse_range(r);
        }
        let d = parse_date_or_today(date.unwrap_or("today"))?;
        Ok((d, d))
    }

    /// Print every archived block in the bounds; optionally export them.
    /// Returns the number of blocks found.
    pub fn run(
        cfg: &Config,
        date: Option<&str>,
        range: Option<&str>,
        export: bool,
        force: bool,
    ) -> AppResult<usize> {
        let (start, end) = Self::bounds(date, range)?;
        let label = if start == end {
            start.to_string()
        } else {
            format!("{start} to {end}")
        };

        let store = RecordStore::new(cfg);
        let sections = store.find_sections_in_range(start, end)?;

        if sections.is_empty() {
            info(format!("No records found for {label}."));
            return Ok(0);
        }

        for (idx, sec) in sections.iter().enumerate() {
            header(format!("Found record #{} for {label}", idx + 1));
            print!("{sec}");
        }

        if export {
            let path = cfg.export_file();
            Self::export(&path, &sections, force)?;
            success(format!("Export successful: '{}' written.", path.display()));
            activity::record(
                cfg,
                "export",
                &label,
                &format!("{} section(s) written to {}", sections.len(), path.display()),
            );
        }

        Ok(sections.len())
    }

    /// Overwrite `path` with the blocks, separated by a blank line.
    pub fn export(path: &Path, sections: &[String], force: bool) -> AppResult<()> {
        ensure_writable(path, force)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::write(parent, e))?;
        }
        fs::write(path, sections.join("\n")).map_err(|e| AppError::write(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn bounds_prefer_range_over_date() {
        let (s, e) = QueryLogic::bounds(Some("2025-11-20"), Some("2025-11")).unwrap();
        assert_eq!(s.to_string(), "2025-11-01");
        assert_eq!(e.to_string(), "2025-11-30");

        let (s, e) = QueryLogic::bounds(Some("2025-11-20"), None).unwrap();
        assert_eq!(s.to_string(), "2025-11-20");
        assert_eq!(s, e);
        assert!(QueryLogic::bounds(Some("11/20"), None).is_err());
    }

    #[test]
    fn export_overwrites_with_blank_line_separators() {
        let path = env::temp_dir().join("classbook_query_export/record.txt");
        fs::remove_file(&path).ok();

        QueryLogic::export(&path, &["old\n".to_string()], true).unwrap();
        QueryLogic::export(&path, &["a\n".to_string(), "b\n".to_string()], true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n\nb\n");
    }
}
