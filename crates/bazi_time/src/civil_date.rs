//! Validated Gregorian calendar date.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::DateError;
use crate::gregorian::{day_of_year, days_in_month, julian_day_number};

/// A proleptic Gregorian calendar date whose month and day are known valid.
///
/// The year is unrestricted here; range policies belong to the callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Build a date, rejecting months outside 1..=12 and days past the
    /// end of the month (leap-aware).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        let max_day = days_in_month(year, month).ok_or(DateError::InvalidMonth { month })?;
        if day == 0 || day > max_day {
            return Err(DateError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Ordinal day of the year (1..=366).
    pub fn ordinal(self) -> u32 {
        day_of_year(self.year, self.month, self.day)
    }

    /// Julian Day Number.
    pub fn jdn(self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }

    /// The following calendar date, rolling over month and year ends.
    pub fn next_day(self) -> Self {
        // month is validated, so the lookup cannot miss
        let last = days_in_month(self.year, self.month).unwrap_or(31);
        if self.day < last {
            Self {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Self {
                month: self.month + 1,
                day: 1,
                ..self
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = DateError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(DateError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|e| DateError::Parse(format!("year '{}': {e}", parts[0])))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|e| DateError::Parse(format!("month '{}': {e}", parts[1])))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|e| DateError::Parse(format!("day '{}': {e}", parts[2])))?;
        Self::new(year, month, day)
    }
}

impl Serialize for CivilDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn rejects_bad_month() {
        assert_eq!(
            CivilDate::new(2000, 13, 1),
            Err(DateError::InvalidMonth { month: 13 })
        );
        assert_eq!(
            CivilDate::new(2000, 0, 1),
            Err(DateError::InvalidMonth { month: 0 })
        );
    }

    #[test]
    fn rejects_non_leap_feb_29() {
        assert_eq!(
            CivilDate::new(1900, 2, 29),
            Err(DateError::InvalidDay {
                year: 1900,
                month: 2,
                day: 29,
                max_day: 28
            })
        );
        assert!(CivilDate::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn rejects_day_zero() {
        assert!(matches!(
            CivilDate::new(2000, 1, 0),
            Err(DateError::InvalidDay { day: 0, .. })
        ));
    }

    #[test]
    fn next_day_within_month() {
        assert_eq!(date(2024, 3, 14).next_day(), date(2024, 3, 15));
    }

    #[test]
    fn next_day_month_end() {
        assert_eq!(date(2024, 4, 30).next_day(), date(2024, 5, 1));
        assert_eq!(date(2000, 2, 28).next_day(), date(2000, 2, 29));
        assert_eq!(date(2000, 2, 29).next_day(), date(2000, 3, 1));
        assert_eq!(date(1900, 2, 28).next_day(), date(1900, 3, 1));
    }

    #[test]
    fn next_day_year_end() {
        assert_eq!(date(1999, 12, 31).next_day(), date(2000, 1, 1));
        assert_eq!(date(2100, 12, 31).next_day().year(), 2101);
    }

    #[test]
    fn next_day_advances_jdn_by_one() {
        let d = date(2023, 12, 31);
        assert_eq!(d.next_day().jdn() - d.jdn(), 1);
    }

    #[test]
    fn display_and_parse() {
        let d = date(1984, 2, 2);
        assert_eq!(d.to_string(), "1984-02-02");
        assert_eq!("1984-02-02".parse::<CivilDate>().unwrap(), d);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "1984/02/02".parse::<CivilDate>(),
            Err(DateError::Parse(_))
        ));
        assert!(matches!(
            "1984-xx-02".parse::<CivilDate>(),
            Err(DateError::Parse(_))
        ));
    }

    #[test]
    fn parse_validates_calendar() {
        assert!(matches!(
            "2023-02-29".parse::<CivilDate>(),
            Err(DateError::InvalidDay { .. })
        ));
    }
}
