//! Error types for civil-date construction and parsing.

/// Errors from Gregorian date validation or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DateError {
    /// Month outside 1..=12.
    #[error("month must be between 1 and 12, got {month}")]
    InvalidMonth { month: u32 },
    /// Day outside the length of its month.
    #[error("day {day} is invalid for {year:04}-{month:02} (must be 1..={max_day})")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        max_day: u32,
    },
    /// Text did not match `YYYY-MM-DD`.
    #[error("date parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_day_message() {
        let err = DateError::InvalidDay {
            year: 1900,
            month: 2,
            day: 29,
            max_day: 28,
        };
        assert_eq!(
            err.to_string(),
            "day 29 is invalid for 1900-02 (must be 1..=28)"
        );
    }

    #[test]
    fn invalid_month_message() {
        let err = DateError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "month must be between 1 and 12, got 13");
    }
}
