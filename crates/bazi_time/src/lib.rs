//! Gregorian civil-date layer for the bazi calculator.
//!
//! This crate provides:
//! - Leap-year and month-length rules of the proleptic Gregorian calendar
//! - Ordinal day-of-year and Julian Day Number arithmetic
//! - `CivilDate`, a validated `(year, month, day)` with next-day rollover

pub mod civil_date;
pub mod error;
pub mod gregorian;

pub use civil_date::CivilDate;
pub use error::DateError;
pub use gregorian::{
    MONTH_DAYS, day_of_year, days_in_month, days_in_year, is_leap_year, julian_day_number,
};
