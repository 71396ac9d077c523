//! Twelve life stages (十二长生) of a stem across the branches.
//!
//! Each stem is born (长生) at a fixed branch. Yang stems then advance one
//! stage per branch in cycle order, yin stems in reverse order.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::Polarity;
use crate::stem::Stem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LifeStage {
    Birth,
    Bathing,
    Crowning,
    Office,
    Peak,
    Decline,
    Sickness,
    Death,
    Tomb,
    Extinction,
    Conception,
    Nurture,
}

pub const ALL_LIFE_STAGES: [LifeStage; 12] = [
    LifeStage::Birth,
    LifeStage::Bathing,
    LifeStage::Crowning,
    LifeStage::Office,
    LifeStage::Peak,
    LifeStage::Decline,
    LifeStage::Sickness,
    LifeStage::Death,
    LifeStage::Tomb,
    LifeStage::Extinction,
    LifeStage::Conception,
    LifeStage::Nurture,
];

impl LifeStage {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Birth => "长生",
            Self::Bathing => "沐浴",
            Self::Crowning => "冠带",
            Self::Office => "临官",
            Self::Peak => "帝旺",
            Self::Decline => "衰",
            Self::Sickness => "病",
            Self::Death => "死",
            Self::Tomb => "墓",
            Self::Extinction => "绝",
            Self::Conception => "胎",
            Self::Nurture => "养",
        }
    }

    /// Birth, Office and Peak give the stem a root in the branch.
    pub const fn is_rooted(self) -> bool {
        matches!(self, Self::Birth | Self::Office | Self::Peak)
    }
}

/// Branch where `stem` enters its Birth stage.
pub const fn birth_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Jia => Branch::Hai,
        Stem::Yi => Branch::Wu,
        Stem::Bing | Stem::Wu => Branch::Yin,
        Stem::Ding | Stem::Ji => Branch::You,
        Stem::Geng => Branch::Si,
        Stem::Xin => Branch::Zi,
        Stem::Ren => Branch::Shen,
        Stem::Gui => Branch::Mao,
    }
}

/// Stage of `stem` at `branch`.
pub const fn life_stage(stem: Stem, branch: Branch) -> LifeStage {
    let birth = birth_branch(stem).index() as i32;
    let at = branch.index() as i32;
    let step = match stem.polarity() {
        Polarity::Yang => at - birth,
        Polarity::Yin => birth - at,
    };
    ALL_LIFE_STAGES[step.rem_euclid(12) as usize]
}
