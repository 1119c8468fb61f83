use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{CheckIn, DateSection, StudentName};
use crate::store::{RecordStore, activity};
use crate::ui::messages::{success, warning};
use crate::ui::prompt::Prompter;
use crate::utils::date::{self, generated_at_now};
use crate::utils::table::Table;
use chrono::NaiveDate;
use std::io::{BufRead, Write};

/// High-level business logic for the `record` command.
pub struct RecordLogic;

impl RecordLogic {
    /// Missing date → today; a malformed one falls back to today with a warning.
    pub fn resolve_date(raw: Option<&str>) -> NaiveDate {
        match raw {
            None => date::today(),
            Some(s) => date::parse_date_or_today(s).unwrap_or_else(|e| {
                warning(format!("{e}. Using today's date."));
                date::today()
            }),
        }
    }

    /// Parse one `NAME=TIME` argument.
    pub fn parse_entry(arg: &str) -> AppResult<(StudentName, CheckIn)> {
        let (name, time) = arg
            .split_once('=')
            .ok_or_else(|| AppError::Input(format!("expected NAME=TIME, got '{arg}'")))?;
        Ok((StudentName::new(name)?, time.parse()?))
    }

    /// Build a section from command-line entries.
    pub fn from_args(date: NaiveDate, entries: &[String]) -> AppResult<DateSection> {
        let mut section = DateSection::new(date);
        for arg in entries {
            let (student, check_in) = Self::parse_entry(arg)?;
            section.insert(student, check_in)?;
        }
        Ok(section)
    }

    /// Prompt for the number of students, then each name and time. Empty or
    /// duplicate names and invalid times are reported and asked again.
    pub fn collect_entries<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        section: &mut DateSection,
    ) -> AppResult<()> {
        let count = prompter.ask_until(
            "How many students' attendance records do you want to record? ",
            parse_positive,
        )?;

        for i in 1..=count {
            let student = prompter.ask_until(&format!("Student name {i}: "), |s| {
                let name = StudentName::new(s)?;
                if section.contains(&name) {
                    return Err(AppError::DuplicateStudent(name.to_string()));
                }
                Ok(name)
            })?;

            let check_in = prompter.ask_until(
                &format!("Enter the time for {student} (e.g., 09:15 AM or 09:15): "),
                |s| s.parse::<CheckIn>(),
            )?;

            section.insert(student, check_in)?;
        }

        Ok(())
    }

    /// Prompt until the class strength is a number no lower than present.
    pub fn ask_strength<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        section: &mut DateSection,
    ) -> AppResult<()> {
        let present = section.present();
        let strength = prompter.ask_until("Total class strength: ", |s| {
            let n: usize = s
                .parse()
                .map_err(|_| AppError::Input(format!("'{s}' is not a valid number")))?;
            if n < present {
                return Err(AppError::ClassStrength { present, strength: n });
            }
            Ok(n)
        })?;
        section.set_class_strength(strength)
    }

    /// Terminal summary of a section.
    pub fn summary(section: &DateSection) -> String {
        let mut table = Table::new(&["Student Name", "Check-in Time"]);
        for (student, check_in) in section.entries() {
            table.add_row(vec![student.to_string(), check_in.to_string()]);
        }

        format!(
            "Summary for {}\n\n{}Total Present: {}\nTotal Absent: {}",
            section.date(),
            table.render(),
            section.present(),
            section.absent()
        )
    }

    /// Append the section to the archive and the structured log.
    pub fn save(cfg: &Config, section: &DateSection) -> AppResult<()> {
        let store = RecordStore::new(cfg);
        store.append_section(section, &generated_at_now())?;

        success(format!(
            "Attendance appended to archive: '{}'",
            store.archive_path().display()
        ));
        success(format!(
            "CSV appended: '{}'",
            store.structured_log_path().display()
        ));

        activity::record(
            cfg,
            "record",
            &section.date().to_string(),
            &format!(
                "{} present, {} absent (class strength {})",
                section.present(),
                section.absent(),
                section.class_strength()
            ),
        );
        Ok(())
    }

    /// Full `record` flow: missing pieces are asked for interactively.
    pub fn run(
        cfg: &Config,
        date: Option<&str>,
        entries: &[String],
        strength: Option<usize>,
    ) -> AppResult<DateSection> {
        let date = Self::resolve_date(date);
        let mut prompter = Prompter::stdio();

        let mut section = if entries.is_empty() {
            let mut section = DateSection::new(date);
            Self::collect_entries(&mut prompter, &mut section)?;
            section
        } else {
            Self::from_args(date, entries)?
        };

        match strength {
            Some(n) => section.set_class_strength(n)?,
            None => Self::ask_strength(&mut prompter, &mut section)?,
        }

        println!("\n{}\n", Self::summary(&section));
        Self::save(cfg, &section)?;
        Ok(section)
    }
}

fn parse_positive(s: &str) -> AppResult<usize> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::Input(format!(
            "please enter a positive integer (e.g., 5), got '{s}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn nov20() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 20).unwrap()
    }

    fn drive(input: &str) -> (AppResult<DateSection>, String) {
        let mut p = Prompter::new(Cursor::new(input.to_string()), Vec::new());
        let mut section = DateSection::new(nov20());
        let result = RecordLogic::collect_entries(&mut p, &mut section)
            .and_then(|_| RecordLogic::ask_strength(&mut p, &mut section))
            .map(|_| section);
        let out = String::from_utf8(p.into_output()).unwrap();
        (result, out)
    }

    #[test]
    fn invalid_time_is_reprompted_and_never_stored() {
        let (section, out) = drive("1\nalice\n25:99\n09:15 AM\n1\n");
        let section = section.unwrap();

        assert_eq!(out.matches("Enter the time for Alice").count(), 2);
        assert!(out.contains("Invalid time format: 25:99"));

        let entries = section.to_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].check_in.to_string(), "09:15 AM");
    }

    #[test]
    fn empty_and_duplicate_names_are_reprompted() {
        let (section, out) = drive("2\nalice\n09:00\n\nALICE\nbob\n09:05\n2\n");
        let section = section.unwrap();

        assert!(out.contains("Student name cannot be empty"));
        assert!(out.contains("Student 'Alice' is already recorded"));
        assert_eq!(section.present(), 2);
    }

    #[test]
    fn count_and_strength_are_validated() {
        let (section, out) = drive("0\nabc\n1\nalice\n09:00\n0\n3\n");
        let section = section.unwrap();

        assert_eq!(out.matches("How many students").count(), 3);
        assert!(out.contains("Class strength 0 cannot be less than present students (1)"));
        assert_eq!(section.class_strength(), 3);
        assert_eq!(section.absent(), 2);
    }

    #[test]
    fn closed_input_aborts_instead_of_looping() {
        let (section, _) = drive("1\nalice\n25:99\n");
        assert!(matches!(section, Err(AppError::Input(_))));
    }

    #[test]
    fn entries_from_arguments() {
        let section = RecordLogic::from_args(
            nov20(),
            &["alice=09:15 AM".to_string(), "Bob=09:20".to_string()],
        )
        .unwrap();
        assert_eq!(section.present(), 2);

        assert!(matches!(
            RecordLogic::from_args(nov20(), &["alice=25:99".to_string()]),
            Err(AppError::InvalidTime(_))
        ));
        assert!(matches!(
            RecordLogic::from_args(nov20(), &["alice".to_string()]),
            Err(AppError::Input(_))
        ));
        assert!(matches!(
            RecordLogic::from_args(nov20(), &["a=09:00".into(), "A=09:01".into()]),
            Err(AppError::DuplicateStudent(_))
        ));
    }

    #[test]
    fn malformed_date_falls_back_to_today() {
        assert_eq!(RecordLogic::resolve_date(Some("20-11-2025")), date::today());
        assert_eq!(RecordLogic::resolve_date(Some("2025-11-20")), nov20());
        assert_eq!(RecordLogic::resolve_date(None), date::today());
    }

    #[test]
    fn summary_lists_entries_and_totals() {
        let mut section =
            RecordLogic::from_args(nov20(), &["bob=09:20".into(), "alice=09:15".into()]).unwrap();
        section.set_class_strength(3).unwrap();
        let text = RecordLogic::summary(&section);
        assert!(text.starts_with("Summary for 2025-11-20"));
        assert!(text.find("Alice").unwrap() < text.find("Bob").unwrap());
        assert!(text.ends_with("Total Present: 2\nTotal Absent: 1"));
    }
}
