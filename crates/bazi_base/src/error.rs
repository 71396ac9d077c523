//! Error types for the Four Pillars calculator.

/// Input outside the range the calculator accepts.
///
/// One variant per input field; each message names the field and the bound
/// it violated. Validation is deterministic: the same input always fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RangeError {
    #[error("year must be between 1900 and 2100")]
    Year { year: i32 },
    #[error("month must be between 1 and 12")]
    Month { month: i32 },
    #[error("day must be between 1 and {max_day} for {year:04}-{month:02}, got {day}")]
    Day {
        year: i32,
        month: i32,
        day: i32,
        max_day: u32,
    },
    #[error("hour must be between 0 and 23")]
    Hour { hour: i32 },
}

/// A string that is not one of the 60 stem-branch pairs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseGanzhiError {
    #[error("expected two characters, got {0:?}")]
    Length(String),
    #[error("'{0}' is not a heavenly stem")]
    UnknownStem(char),
    #[error("'{0}' is not an earthly branch")]
    UnknownBranch(char),
    #[error("{0} is not in the sexagenary cycle (stem and branch parity differ)")]
    ParityMismatch(String),
}
