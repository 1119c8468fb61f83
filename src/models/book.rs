use crate::models::{CheckIn, StudentName};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Attendance keyed by (date, student).
///
/// The value is the check-in time, or `None` when the student is known to be
/// present but the stored time could not be read back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceBook {
    records: BTreeMap<(NaiveDate, StudentName), Option<CheckIn>>,
}

impl AttendanceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a presence; a later record for the same key replaces the earlier one.
    pub fn insert(&mut self, date: NaiveDate, student: StudentName, check_in: Option<CheckIn>) {
        self.records.insert((date, student), check_in);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `Some(time)` when present on `date` (inner `None`: time unknown).
    pub fn get(&self, date: NaiveDate, student: &StudentName) -> Option<Option<CheckIn>> {
        self.records.get(&(date, student.clone())).copied()
    }

    /// Distinct dates, ascending.
    pub fn dates(&self) -> BTreeSet<NaiveDate> {
        self.records.keys().map(|(d, _)| *d).collect()
    }

    /// Every student seen on any date.
    pub fn students(&self) -> BTreeSet<StudentName> {
        self.records.keys().map(|(_, s)| s.clone()).collect()
    }
}
