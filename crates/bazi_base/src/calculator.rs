//! Four Pillars calculation from a Gregorian date and clock hour.
//!
//! Pipeline: validate → Zi-hour normalisation → four pillar derivations.
//! Every function here is pure; nothing is cached or shared beyond the
//! constant tables.

use bazi_time::{CivilDate, days_in_month};

use crate::error::RangeError;
use crate::pillars::{FourPillars, day_pillar, hour_pillar, month_pillar, year_pillar};
use crate::sexagenary::Ganzhi;

/// Earliest accepted year.
pub const MIN_YEAR: i32 = 1900;
/// Latest accepted year.
pub const MAX_YEAR: i32 = 2100;
/// First clock hour of the late Zi slot; it belongs to the next day.
pub const LATE_ZI_HOUR: u32 = 23;

/// A validated birth moment: civil date plus clock hour (0..=23).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthMoment {
    date: CivilDate,
    hour: u32,
}

impl BirthMoment {
    /// Validate raw inputs in field order: year, month, day, hour.
    pub fn new(year: i32, month: i32, day: i32, hour: i32) -> Result<Self, RangeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(RangeError::Year { year });
        }
        let month_u = u32::try_from(month)
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or(RangeError::Month { month })?;
        let max_day = days_in_month(year, month_u).ok_or(RangeError::Month { month })?;
        let day_err = RangeError::Day {
            year,
            month,
            day,
            max_day,
        };
        let day_u = u32::try_from(day)
            .ok()
            .filter(|d| (1..=max_day).contains(d))
            .ok_or_else(|| day_err.clone())?;
        let hour_u = u32::try_from(hour)
            .ok()
            .filter(|h| *h <= 23)
            .ok_or(RangeError::Hour { hour })?;
        let date = CivilDate::new(year, month_u, day_u).map_err(|_| day_err)?;
        Ok(Self { date, hour: hour_u })
    }

    /// Build from an already-validated civil date.
    pub fn from_date(date: CivilDate, hour: u32) -> Result<Self, RangeError> {
        Self::new(
            date.year(),
            date.month() as i32,
            date.day() as i32,
            i32::try_from(hour).unwrap_or(i32::MAX),
        )
    }

    pub fn date(self) -> CivilDate {
        self.date
    }

    pub fn hour(self) -> u32 {
        self.hour
    }

    /// Date used for the year, month and day pillars.
    ///
    /// From 23:00 the Zi slot has begun, so the pillars belong to the
    /// following civil day. Any other hour keeps its own date.
    pub fn pillar_date(self) -> CivilDate {
        if self.hour == LATE_ZI_HOUR {
            let next = self.date.next_day();
            tracing::debug!(from = %self.date, to = %next, "late Zi hour rolls date forward");
            next
        } else {
            self.date
        }
    }
}

/// Four pillars for a validated moment.
///
/// The hour pillar takes its stem group from the civil day's own stem, so a
/// 23:00 moment gets the same hour pillar as 00:00 of that date.
pub fn four_pillars(moment: BirthMoment) -> FourPillars {
    let pillar_date = moment.pillar_date();
    let year = year_pillar(pillar_date.year());
    let month = month_pillar(year.stem(), pillar_date.month());
    let day = day_pillar(pillar_date);
    let civil_day_stem = if pillar_date == moment.date() {
        day.stem()
    } else {
        day_pillar(moment.date()).stem()
    };
    let hour = hour_pillar(civil_day_stem, moment.hour());
    tracing::debug!(
        date = %moment.date(),
        clock_hour = moment.hour(),
        %year,
        %month,
        %day,
        %hour,
        "four pillars"
    );
    FourPillars {
        year,
        month,
        day,
        hour,
    }
}

/// Validate `(year, month, day, hour)` and derive the four pillars.
///
/// # Errors
///
/// [`RangeError`] when a field is out of range: year outside 1900..=2100,
/// month outside 1..=12, day past the end of the month (leap-aware), or
/// hour outside 0..=23. No partial result is produced.
///
/// # Example
///
/// ```
/// use bazi_base::calculate;
///
/// let pillars = calculate(1984, 2, 2, 0).unwrap();
/// assert_eq!(pillars.year.to_string(), "甲子");
/// ```
pub fn calculate(year: i32, month: i32, day: i32, hour: i32) -> Result<FourPillars, RangeError> {
    let moment = BirthMoment::new(year, month, day, hour)?;
    Ok(four_pillars(moment))
}

/// Recompute the day pillar of a date and compare it with `expected`.
///
/// Uses noon, so no Zi-hour rollover applies. Invalid dates never match.
pub fn verify_day_ganzhi(year: i32, month: i32, day: i32, expected: &str) -> bool {
    match BirthMoment::new(year, month, day, 12) {
        Ok(moment) => {
            let actual: Ganzhi = day_pillar(moment.date());
            actual.to_string() == expected.trim()
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_bounds() {
        assert_eq!(
            calculate(1899, 12, 31, 0),
            Err(RangeError::Year { year: 1899 })
        );
        assert_eq!(calculate(2101, 1, 1, 0), Err(RangeError::Year { year: 2101 }));
        assert!(calculate(1900, 1, 1, 0).is_ok());
        assert!(calculate(2100, 12, 31, 22).is_ok());
    }

    #[test]
    fn month_bounds() {
        assert_eq!(calculate(2000, 0, 1, 0), Err(RangeError::Month { month: 0 }));
        assert_eq!(
            calculate(2000, 13, 1, 0),
            Err(RangeError::Month { month: 13 })
        );
        assert_eq!(
            calculate(2000, -1, 1, 0),
            Err(RangeError::Month { month: -1 })
        );
    }

    #[test]
    fn day_bounds() {
        assert_eq!(
            calculate(1900, 2, 29, 12),
            Err(RangeError::Day {
                year: 1900,
                month: 2,
                day: 29,
                max_day: 28
            })
        );
        assert!(calculate(2000, 2, 29, 12).is_ok());
        assert!(matches!(
            calculate(2023, 4, 31, 0),
            Err(RangeError::Day { max_day: 30, .. })
        ));
        assert!(matches!(
            calculate(2023, 1, 0, 0),
            Err(RangeError::Day { day: 0, .. })
        ));
        assert!(matches!(
            calculate(2023, 1, -3, 0),
            Err(RangeError::Day { day: -3, .. })
        ));
    }

    #[test]
    fn hour_bounds() {
        assert_eq!(calculate(2000, 1, 1, 24), Err(RangeError::Hour { hour: 24 }));
        assert_eq!(calculate(2000, 1, 1, -1), Err(RangeError::Hour { hour: -1 }));
    }

    #[test]
    fn validation_reports_first_bad_field() {
        assert!(matches!(
            calculate(1800, 13, 40, 99),
            Err(RangeError::Year { .. })
        ));
        assert!(matches!(
            calculate(2000, 13, 40, 99),
            Err(RangeError::Month { .. })
        ));
        assert!(matches!(
            calculate(2000, 12, 40, 99),
            Err(RangeError::Day { .. })
        ));
    }

    #[test]
    fn pillar_date_only_rolls_at_23() {
        let at_22 = BirthMoment::new(2000, 12, 31, 22).unwrap();
        assert_eq!(at_22.pillar_date(), at_22.date());
        let at_23 = BirthMoment::new(2000, 12, 31, 23).unwrap();
        assert_eq!(at_23.pillar_date().to_string(), "2001-01-01");
        let at_0 = BirthMoment::new(2001, 1, 1, 0).unwrap();
        assert_eq!(at_0.pillar_date(), at_0.date());
    }

    #[test]
    fn reference_chart_1984() {
        let p = calculate(1984, 2, 2, 0).unwrap();
        assert_eq!(p.to_string(), "甲子 丁卯 丙寅 戊子");
    }

    #[test]
    fn reference_chart_leap_day() {
        let p = calculate(2000, 2, 29, 12).unwrap();
        assert_eq!(p.to_string(), "庚辰 己卯 丁巳 丙午");
    }

    #[test]
    fn zi_hour_rollover_across_year() {
        let late = calculate(2000, 12, 31, 23).unwrap();
        let next = calculate(2001, 1, 1, 1).unwrap();
        assert_eq!(late.year, next.year);
        assert_eq!(late.month, next.month);
        assert_eq!(late.day, next.day);
        assert_eq!(late.to_string(), "辛巳 庚寅 甲子 壬子");
        assert_eq!(late.hour, calculate(2000, 12, 31, 0).unwrap().hour);
    }

    #[test]
    fn zi_hour_rollover_at_upper_bound() {
        let late = calculate(2100, 12, 31, 23).unwrap();
        // 2101-01-01 is the 45th day of the cycle
        assert_eq!(late.day.order(), 45);
        assert_eq!(late.hour, calculate(2100, 12, 31, 0).unwrap().hour);
    }

    #[test]
    fn from_date_validates_year() {
        let date = CivilDate::new(1850, 6, 1).unwrap();
        assert_eq!(
            BirthMoment::from_date(date, 5),
            Err(RangeError::Year { year: 1850 })
        );
        let ok = BirthMoment::from_date(CivilDate::new(1950, 6, 1).unwrap(), 5).unwrap();
        assert_eq!(ok.hour(), 5);
    }

    #[test]
    fn verify_day() {
        assert!(verify_day_ganzhi(2000, 1, 1, "戊午"));
        assert!(!verify_day_ganzhi(2000, 1, 1, "甲子"));
        assert!(!verify_day_ganzhi(1900, 2, 29, "甲子"));
    }
}
