use crate::errors::{AppError, AppResult};
use crate::utils::time::{format_time, parse_required_time};
use chrono::NaiveTime;
use std::fmt;
use std::str::FromStr;

/// A check-in time, always displayed in the canonical `HH:MM AM/PM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckIn(NaiveTime);

impl FromStr for CheckIn {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        parse_required_time(s).map(Self)
    }
}

impl fmt::Display for CheckIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_four_hour_input_is_canonicalized() {
        let c: CheckIn = "17:05".parse().unwrap();
        assert_eq!(c.to_string(), "05:05 PM");
    }

    #[test]
    fn invalid_input_never_becomes_a_check_in() {
        assert!("25:99".parse::<CheckIn>().is_err());
    }
}
