//! Proleptic Gregorian calendar arithmetic.
//!
//! All functions are pure integer arithmetic on `(year, month, day)` triples.
//! Months are 1-based (January = 1).

/// Month lengths in a common year, January first.
pub const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule: divisible by 4 and (not by 100, or by 400).
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` if `month` is not 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let base = *MONTH_DAYS.get(month.checked_sub(1)? as usize)?;
    if month == 2 && is_leap_year(year) {
        Some(base + 1)
    } else {
        Some(base)
    }
}

/// Number of days in `year` (365 or 366).
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Ordinal day of the year (1..=366).
///
/// Sums the lengths of every month before `month` (leap-aware) and adds `day`.
/// The caller is responsible for passing a valid month.
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let preceding: u32 = (1..month)
        .map(|m| days_in_month(year, m).unwrap_or(0))
        .sum();
    preceding + day
}

/// Julian Day Number of a proleptic Gregorian date (noon-based integer day).
///
/// Fliegel & Van Flandern (1968). Integer division truncates toward zero,
/// which the formula relies on for the `(m - 14) / 12` term.
pub const fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;
    let a = (m - 14) / 12;
    (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
        - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32075
}
