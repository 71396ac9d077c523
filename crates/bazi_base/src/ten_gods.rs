//! Ten gods (十神): how a stem relates to the Day Master.
//!
//! The relation is fixed by two facts: which way the elements interact
//! (same, Day Master generates, Day Master controls, controls the Day Master,
//! generates the Day Master) and whether the polarities agree.

use serde::Serialize;

use crate::stem::Stem;

/// The ten relations to the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenGod {
    /// 比肩: same element, same polarity.
    Friend,
    /// 劫财: same element, opposite polarity.
    RobWealth,
    /// 食神: Day Master generates it, same polarity.
    EatingGod,
    /// 伤官: Day Master generates it, opposite polarity.
    HurtingOfficer,
    /// 偏财: Day Master controls it, same polarity.
    IndirectWealth,
    /// 正财: Day Master controls it, opposite polarity.
    DirectWealth,
    /// 七杀: it controls the Day Master, same polarity.
    SevenKillings,
    /// 正官: it controls the Day Master, opposite polarity.
    DirectOfficer,
    /// 偏印: it generates the Day Master, same polarity.
    IndirectResource,
    /// 正印: it generates the Day Master, opposite polarity.
    DirectResource,
}

/// All ten gods, paired by relation.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Friend,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

impl TenGod {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Friend => "比肩",
            Self::RobWealth => "劫财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }
}

/// Ten god of `other` relative to `day_master`.
pub fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let me = day_master.element();
    let it = other.element();
    let same = day_master.polarity() == other.polarity();
    let pick = |same_polarity: TenGod, opposite: TenGod| {
        if same { same_polarity } else { opposite }
    };

    if it == me {
        pick(TenGod::Friend, TenGod::RobWealth)
    } else if me.generates() == it {
        pick(TenGod::EatingGod, TenGod::HurtingOfficer)
    } else if me.controls() == it {
        pick(TenGod::IndirectWealth, TenGod::DirectWealth)
    } else if it.controls() == me {
        pick(TenGod::SevenKillings, TenGod::DirectOfficer)
    } else {
        // the only relation left: it generates the Day Master
        pick(TenGod::IndirectResource, TenGod::DirectResource)
    }
}
