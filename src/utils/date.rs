use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub const ISO_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_FORMAT).ok()
}

/// `YYYY-MM-DD` or the keyword `today`.
pub fn parse_date_or_today(s: &str) -> AppResult<NaiveDate> {
    if s.trim().eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.trim().to_string()))
}

/// Timestamp written in archive sections and CSV rows.
pub fn generated_at_now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_dates_parse() {
        assert_eq!(
            parse_date("2025-11-20"),
            NaiveDate::from_ymd_opt(2025, 11, 20)
        );
        assert!(parse_date("20/11/2025").is_none());
        assert!(parse_date("2025-02-30").is_none());
    }

    #[test]
    fn today_keyword_is_case_insensitive() {
        assert_eq!(parse_date_or_today("Today").unwrap(), today());
        assert!(matches!(
            parse_date_or_today("yesterday"),
            Err(AppError::InvalidDate(_))
        ));
    }
}
