//! Date-wise report model: every roster member on every date, marked
//! Present or Absent by membership in that date's records.

use crate::models::{AttendanceBook, Roster, StudentName};
use chrono::NaiveDate;
use std::fmt;

/// A page break follows every this many date tables.
pub const DATES_PER_PAGE: usize = 3;

pub const PLACEHOLDER: &str = "-";

pub const NO_DATA_NOTICE: &str = "No attendance data found in CSV or archive.";

pub const TABLE_HEADERS: [&str; 3] = ["Student Name", "Status", "Check-in Time"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Present,
    Absent,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Present => "Present",
            Status::Absent => "Absent",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Status::Present)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub student: String,
    pub status: Status,
    pub check_in: String,
}

impl ReportRow {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.student.clone(),
            self.status.to_string(),
            self.check_in.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTable {
    /// 1-based position of the date in the report.
    pub index: usize,
    pub date: NaiveDate,
    pub rows: Vec<ReportRow>,
}

impl DateTable {
    pub fn heading(&self) -> String {
        format!("{}. Date: {}", self.index, self.date)
    }

    pub fn present(&self) -> usize {
        self.rows.iter().filter(|r| r.status.is_present()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBody {
    NoData,
    Dates(Vec<DateTable>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub body: ReportBody,
}

impl Report {
    pub fn tables(&self) -> &[DateTable] {
        match &self.body {
            ReportBody::NoData => &[],
            ReportBody::Dates(tables) => tables,
        }
    }

    /// Tables grouped by page.
    pub fn pages(&self) -> std::slice::Chunks<'_, DateTable> {
        self.tables().chunks(DATES_PER_PAGE)
    }
}

/// All dates seen, ascending, and every known student in case-insensitive
/// alphabetical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Master {
    pub dates: Vec<NaiveDate>,
    pub roster: Vec<StudentName>,
}

/// Union the students recorded on any date with the standalone roster.
pub fn build_master(book: &AttendanceBook, roster: &Roster) -> Master {
    let mut everyone = book.students();
    everyone.extend(roster.iter().cloned());

    Master {
        dates: book.dates().into_iter().collect(),
        roster: everyone.into_iter().collect(),
    }
}

pub fn render(title: &str, master: &Master, book: &AttendanceBook) -> Report {
    if master.dates.is_empty() || master.roster.is_empty() {
        return Report {
            title: title.to_string(),
            body: ReportBody::NoData,
        };
    }

    let tables = master
        .dates
        .iter()
        .enumerate()
        .map(|(i, date)| DateTable {
            index: i + 1,
            date: *date,
            rows: master
                .roster
                .iter()
                .map(|student| row_for(book, *date, student))
                .collect(),
        })
        .collect();

    Report {
        title: title.to_string(),
        body: ReportBody::Dates(tables),
    }
}

fn row_for(book: &AttendanceBook, date: NaiveDate, student: &StudentName) -> ReportRow {
    let (status, check_in) = match book.get(date, student) {
        Some(Some(t)) => (Status::Present, t.to_string()),
        Some(None) => (Status::Present, PLACEHOLDER.to_string()),
        None => (Status::Absent, PLACEHOLDER.to_string()),
    };

    ReportRow {
        student: student.to_string(),
        status,
        check_in,
    }
}
