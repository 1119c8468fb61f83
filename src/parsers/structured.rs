//! Structured log reader.

use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceBook, CheckIn, StudentName};
use crate::store::structured::LogRow;
use crate::utils::date::parse_date;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Rebuild the attendance book from CSV rows with a header line.
///
/// Rows without a valid date or a name are skipped. A time that does not
/// parse still counts as a presence, with the time unknown.
pub fn parse_structured<R: Read>(reader: R) -> AppResult<AttendanceBook> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut book = AttendanceBook::new();

    for result in rdr.deserialize::<LogRow>() {
        let Ok(row) = result else { continue };

        let Some(date) = parse_date(&row.date) else {
            continue;
        };
        let Ok(student) = StudentName::new(&row.student_name) else {
            continue;
        };
        let check_in = row.check_in_time.parse::<CheckIn>().ok();

        book.insert(date, student, check_in);
    }

    Ok(book)
}

/// Read the structured log; a missing file is an empty book.
pub fn read_structured(path: &Path) -> AppResult<AttendanceBook> {
    if !path.exists() {
        return Ok(AttendanceBook::new());
    }
    let file = File::open(path).map_err(|e| AppError::read(path, e))?;
    parse_structured(file)
}
