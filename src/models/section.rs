use crate::errors::{AppError, AppResult};
use crate::models::{CheckIn, StudentName};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// One student's check-in on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceEntry {
    pub date: NaiveDate,
    pub student: StudentName,
    pub check_in: CheckIn,
}

/// One date's attendance as appended to the archive.
///
/// Entries are unique per student and ordered case-insensitively; the class
/// strength is never lower than the number of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSection {
    date: NaiveDate,
    class_strength: usize,
    entries: BTreeMap<StudentName, CheckIn>,
}

impl DateSection {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            class_strength: 0,
            entries: BTreeMap::new(),
        }
    }

    /// Build a complete section in one go (used by the non-interactive path).
    pub fn with_entries<I>(date: NaiveDate, entries: I, class_strength: usize) -> AppResult<Self>
    where
        I: IntoIterator<Item = (StudentName, CheckIn)>,
    {
        let mut section = Self::new(date);
        for (student, check_in) in entries {
            section.insert(student, check_in)?;
        }
        section.set_class_strength(class_strength)?;
        Ok(section)
    }

    pub fn contains(&self, student: &StudentName) -> bool {
        self.entries.contains_key(student)
    }

    pub fn insert(&mut self, student: StudentName, check_in: CheckIn) -> AppResult<()> {
        if self.contains(&student) {
            return Err(AppError::DuplicateStudent(student.to_string()));
        }
        self.entries.insert(student, check_in);
        Ok(())
    }

    pub fn set_class_strength(&mut self, strength: usize) -> AppResult<()> {
        if strength < self.present() {
            return Err(AppError::ClassStrength {
                present: self.present(),
                strength,
            });
        }
        self.class_strength = strength;
        Ok(())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn present(&self) -> usize {
        self.entries.len()
    }

    pub fn class_strength(&self) -> usize {
        self.class_strength
    }

    pub fn absent(&self) -> usize {
        self.class_strength.saturating_sub(self.present())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&StudentName, &CheckIn)> {
        self.entries.iter()
    }

    pub fn to_entries(&self) -> Vec<AttendanceEntry> {
        self.entries
            .iter()
            .map(|(student, check_in)| AttendanceEntry {
                date: self.date,
                student: student.clone(),
                check_in: *check_in,
            })
            .collect()
    }
}
