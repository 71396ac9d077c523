//! Year, month, day and hour pillar derivations.
//!
//! Each derivation is closed-form arithmetic over the stem and branch
//! cycles. Inputs are assumed already validated (see [`crate::calculator`]);
//! all table lookups wrap with euclidean remainders so no index can leave
//! its table.

use std::fmt::{Display, Formatter};

use bazi_time::CivilDate;
use serde::Serialize;

use crate::branch::Branch;
use crate::sexagenary::Ganzhi;
use crate::stem::Stem;

/// Calendar month (1..=12) to month branch. Month 1 opens at Yin (寅).
pub const MONTH_BRANCHES: [Branch; 12] = [
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
    Branch::Zi,
    Branch::Chou,
];

/// First-month stem by year-stem group (`year stem index mod 5`):
/// 甲己 → 丙, 乙庚 → 戊, 丙辛 → 庚, 丁壬 → 壬, 戊癸 → 甲.
pub const MONTH_STEM_START: [Stem; 5] = [Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren, Stem::Jia];

/// Zi-hour stem by day-stem group (`day stem index mod 5`):
/// 甲己 → 甲, 乙庚 → 丙, 丙辛 → 戊, 丁壬 → 庚, 戊癸 → 壬.
pub const HOUR_STEM_START: [Stem; 5] = [Stem::Jia, Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren];

/// Year pillar: stem `(year − 4) mod 10`, branch `(year − 4) mod 12`.
///
/// Year 4 CE (and so 1984) is 甲子.
pub fn year_pillar(year: i32) -> Ganzhi {
    let offset = year - 4;
    Ganzhi::pair(Stem::from_index(offset), Branch::from_index(offset))
}

/// Month pillar from the year stem and the calendar month (1..=12).
pub fn month_pillar(year_stem: Stem, month: u32) -> Ganzhi {
    let slot = ((month + 11) % 12) as usize;
    let start = MONTH_STEM_START[(year_stem.index() % 5) as usize];
    let stem = Stem::from_index(start.index() as i32 + slot as i32);
    Ganzhi::pair(stem, MONTH_BRANCHES[slot])
}

/// Day-pillar reference constant for the century containing `year`.
///
/// The closed form in [`day_cycle_order`] is anchored to the two-digit
/// year, so each century needs its own shift: 15 for 1901–2000 and none for
/// 2001–2100. The 1801–1900 shift (31) serves year 1900 and the 2101–2200
/// shift (44) serves 2101-01-01, the date a 2100-12-31 Zi hour rolls into.
pub const fn century_offset(year: i32) -> i32 {
    if year <= 1900 {
        31
    } else if year <= 2000 {
        15
    } else if year <= 2100 {
        0
    } else {
        44
    }
}

/// 1-based sexagenary order (1..=60) of the day pillar for `date`.
///
/// `total = 5·(Y2 − 1) + ⌊(Y2 − 1)/4⌋ + D + offset`, where `Y2` is the
/// two-digit year (00 read as 100) and `D` the ordinal day. A total
/// divisible by 60 is order 60 (癸亥), never 0.
pub fn day_cycle_order(date: CivilDate) -> u8 {
    let y2 = match date.year().rem_euclid(100) {
        0 => 100,
        r => r,
    };
    let ordinal = date.ordinal() as i32;
    let total = 5 * (y2 - 1) + (y2 - 1).div_euclid(4) + ordinal + century_offset(date.year());
    tracing::trace!(%date, y2, ordinal, total, "day pillar total");
    match total.rem_euclid(60) {
        0 => 60,
        r => r as u8,
    }
}

/// Day pillar for a civil date.
pub fn day_pillar(date: CivilDate) -> Ganzhi {
    Ganzhi::from_order(day_cycle_order(date))
}

/// Hour pillar from the day stem and the clock hour (0..=23).
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Ganzhi {
    let branch = Branch::from_hour(hour);
    let start = HOUR_STEM_START[(day_stem.index() % 5) as usize];
    let stem = Stem::from_index(start.index() as i32 + branch.index() as i32);
    Ganzhi::pair(stem, branch)
}

/// One of the four pillar positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pillar {
    Year,
    Month,
    Day,
    Hour,
}

/// All four pillars in chart order.
pub const ALL_PILLARS: [Pillar; 4] = [Pillar::Year, Pillar::Month, Pillar::Day, Pillar::Hour];

impl Pillar {
    /// Chinese name (年柱, 月柱, 日柱, 时柱).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "时柱",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// The four pillars of one birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: Ganzhi,
    pub month: Ganzhi,
    pub day: Ganzhi,
    pub hour: Ganzhi,
}

impl FourPillars {
    pub const fn get(&self, pillar: Pillar) -> Ganzhi {
        match pillar {
            Pillar::Year => self.year,
            Pillar::Month => self.month,
            Pillar::Day => self.day,
            Pillar::Hour => self.hour,
        }
    }

    /// Day stem, the Day Master (日主) of the chart.
    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }

    /// Pillars in chart order (year, month, day, hour).
    pub const fn as_array(&self) -> [Ganzhi; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn year_1984_is_jiazi() {
        assert_eq!(year_pillar(1984).to_string(), "甲子");
        assert_eq!(year_pillar(2000).to_string(), "庚辰");
        assert_eq!(year_pillar(2024).to_string(), "甲辰");
    }

    #[test]
    fn year_pillar_before_epoch_wraps() {
        // year 3 is one step before 甲子 of year 4
        assert_eq!(year_pillar(3).to_string(), "癸亥");
        assert_eq!(year_pillar(-56).to_string(), "甲子");
    }

    #[test]
    fn month_branches_follow_calendar_month() {
        assert_eq!(month_pillar(Stem::Jia, 1).branch(), Branch::Yin);
        assert_eq!(month_pillar(Stem::Jia, 2).branch(), Branch::Mao);
        assert_eq!(month_pillar(Stem::Jia, 11).branch(), Branch::Zi);
        assert_eq!(month_pillar(Stem::Jia, 12).branch(), Branch::Chou);
        for m in 1..=12u32 {
            assert_eq!(
                month_pillar(Stem::Jia, m).branch().index() as u32,
                (m + 1) % 12
            );
        }
    }

    #[test]
    fn month_stem_groups() {
        // first month of each year-stem group
        let expected = ["丙寅", "戊寅", "庚寅", "壬寅", "甲寅"];
        for (g, want) in expected.iter().enumerate() {
            assert_eq!(month_pillar(Stem::from_index(g as i32), 1).to_string(), *want);
            assert_eq!(
                month_pillar(Stem::from_index(g as i32 + 5), 1).to_string(),
                *want
            );
        }
        assert_eq!(month_pillar(Stem::Jia, 2).to_string(), "丁卯");
        assert_eq!(month_pillar(Stem::Jia, 12).to_string(), "丁丑");
    }

    #[test]
    fn century_offsets() {
        assert_eq!(century_offset(1901), 15);
        assert_eq!(century_offset(2000), 15);
        assert_eq!(century_offset(2001), 0);
        assert_eq!(century_offset(2100), 0);
    }

    #[test]
    fn day_pillar_reference_dates() {
        assert_eq!(day_pillar(date(2000, 1, 1)).to_string(), "戊午");
        assert_eq!(day_pillar(date(2001, 1, 1)).to_string(), "甲子");
        assert_eq!(day_pillar(date(1901, 1, 1)).to_string(), "己卯");
        assert_eq!(day_pillar(date(1984, 2, 2)).to_string(), "丙寅");
        assert_eq!(day_pillar(date(1900, 1, 1)).to_string(), "甲戌");
    }

    #[test]
    fn day_total_divisible_by_60_is_order_60() {
        // 2000-12-31: 5·99 + 24 + 366 + 15 = 900
        assert_eq!(day_cycle_order(date(2000, 12, 31)), 60);
        assert_eq!(day_pillar(date(2000, 12, 31)).to_string(), "癸亥");
    }

    #[test]
    fn hour_branches() {
        assert_eq!(hour_pillar(Stem::Jia, 0).to_string(), "甲子");
        assert_eq!(hour_pillar(Stem::Jia, 23).to_string(), "甲子");
        assert_eq!(hour_pillar(Stem::Jia, 2).to_string(), "乙丑");
        assert_eq!(hour_pillar(Stem::Jia, 22).to_string(), "乙亥");
    }

    #[test]
    fn hour_stem_groups() {
        let expected = ["甲子", "丙子", "戊子", "庚子", "壬子"];
        for (g, want) in expected.iter().enumerate() {
            assert_eq!(hour_pillar(Stem::from_index(g as i32), 0).to_string(), *want);
            assert_eq!(
                hour_pillar(Stem::from_index(g as i32 + 5), 0).to_string(),
                *want
            );
        }
    }

    #[test]
    fn four_pillars_accessors() {
        let p = FourPillars {
            year: year_pillar(1984),
            month: month_pillar(Stem::Jia, 2),
            day: day_pillar(date(1984, 2, 2)),
            hour: hour_pillar(Stem::Bing, 0),
        };
        assert_eq!(p.to_string(), "甲子 丁卯 丙寅 戊子");
        assert_eq!(p.day_master(), Stem::Bing);
        assert_eq!(p.get(Pillar::Month), p.month);
        assert_eq!(p.as_array()[3], p.hour);
    }
}
