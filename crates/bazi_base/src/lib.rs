//! Four Pillars of Destiny (八字) from a Gregorian date and clock hour.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches, the five elements and yin/yang
//! - The 60-pair sexagenary cycle with nayin and void branches
//! - Year, month, day and hour pillar derivation over 1900..=2100
//! - Day-pillar verification and stem-branch attribute lookup
//! - Expanded charts: ten gods, hidden stems, life stages, element tallies
//!   and Day Master strength
//!
//! ```
//! let pillars = bazi_base::calculate(2000, 2, 29, 12).unwrap();
//! assert_eq!(pillars.to_string(), "庚辰 己卯 丁巳 丙午");
//! ```

pub mod branch;
pub mod calculator;
pub mod chart;
pub mod element;
pub mod error;
pub mod info;
pub mod life_stage;
pub mod nayin;
pub mod pillars;
pub mod sexagenary;
pub mod stem;
pub mod ten_gods;

pub use branch::{ALL_BRANCHES, Branch, HOUR_BRANCHES};
pub use calculator::{
    BirthMoment, LATE_ZI_HOUR, MAX_YEAR, MIN_YEAR, calculate, four_pillars, verify_day_ganzhi,
};
pub use chart::{
    ChartDetails, ElementBalance, ElementScores, ElementTally, HiddenStemDetail, PillarDetail,
    Repeated, TenGodCount, chart_details, chart_for,
};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::{ParseGanzhiError, RangeError};
pub use info::{GanzhiInfo, ganzhi_info};
pub use life_stage::{ALL_LIFE_STAGES, LifeStage, birth_branch, life_stage};
pub use nayin::{NAYIN_TABLE, Nayin, nayin_for_cycle_index};
pub use pillars::{
    ALL_PILLARS, FourPillars, Pillar, day_cycle_order, day_pillar, hour_pillar, month_pillar,
    year_pillar,
};
pub use sexagenary::{Ganzhi, SEXAGENARY_CYCLE};
pub use stem::{ALL_STEMS, Stem};
pub use ten_gods::{ALL_TEN_GODS, TenGod, ten_god};
