//! The sexagenary cycle (六十甲子).
//!
//! Pairing stems and branches in lockstep gives 60 distinct pairs before the
//! sequence repeats: a stem and a branch can only meet when their indices
//! share parity. Cycle index `i` (0-based) holds stem `i mod 10` and branch
//! `i mod 12`; conversely a valid `(stem s, branch b)` sits at
//! `(6s − 5b) mod 60`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::ParseGanzhiError;
use crate::nayin::{Nayin, nayin_for_cycle_index};
use crate::stem::{ALL_STEMS, Stem};

/// A stem-branch pair belonging to the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ganzhi {
    stem: Stem,
    branch: Branch,
}

/// The 60 pairs in order (index 0 = 甲子, index 59 = 癸亥).
pub const SEXAGENARY_CYCLE: [Ganzhi; 60] = build_cycle();

const fn build_cycle() -> [Ganzhi; 60] {
    let mut cycle = [Ganzhi {
        stem: Stem::Jia,
        branch: Branch::Zi,
    }; 60];
    let mut i = 0;
    while i < 60 {
        cycle[i] = Ganzhi {
            stem: ALL_STEMS[i % 10],
            branch: ALL_BRANCHES[i % 12],
        };
        i += 1;
    }
    cycle
}

impl Ganzhi {
    /// Pair a stem with a branch, or `None` if their parities differ.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Pair whose parity is guaranteed by the caller's arithmetic.
    pub(crate) fn pair(stem: Stem, branch: Branch) -> Self {
        debug_assert_eq!(
            stem.index() % 2,
            branch.index() % 2,
            "{}{} breaks stem/branch parity",
            stem.name(),
            branch.name()
        );
        Self { stem, branch }
    }

    /// Pair at a 0-based cycle index, wrapping any integer into 0..=59.
    pub const fn from_cycle_index(index: i32) -> Self {
        SEXAGENARY_CYCLE[index.rem_euclid(60) as usize]
    }

    /// Pair at a 1-based order (1 = 甲子 .. 60 = 癸亥).
    pub const fn from_order(order: u8) -> Self {
        Self::from_cycle_index(order as i32 - 1)
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// 0-based position in the cycle (0..=59).
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// 1-based position in the cycle (1..=60).
    pub const fn order(self) -> u8 {
        self.cycle_index() + 1
    }

    /// Next pair in the cycle; 癸亥 is followed by 甲子.
    pub const fn successor(self) -> Self {
        Self::from_cycle_index(self.cycle_index() as i32 + 1)
    }

    pub const fn nayin(self) -> Nayin {
        nayin_for_cycle_index(self.cycle_index())
    }

    /// The two branches left out of this pair's ten-day decade (旬空 / 空亡).
    ///
    /// A decade starts at the preceding Jia stem and spans ten branches, so
    /// the two branches after the tenth one are void.
    pub const fn void_branches(self) -> [Branch; 2] {
        let idx = self.cycle_index() as i32;
        let decade_start_branch = (idx - idx % 10) % 12;
        [
            Branch::from_index(decade_start_branch + 10),
            Branch::from_index(decade_start_branch + 11),
        ]
    }
}

impl Display for Ganzhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

impl FromStr for Ganzhi {
    type Err = ParseGanzhiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        let [stem_char, branch_char] = chars[..] else {
            return Err(ParseGanzhiError::Length(s.to_string()));
        };
        let stem = Stem::from_char(stem_char).ok_or(ParseGanzhiError::UnknownStem(stem_char))?;
        let branch =
            Branch::from_char(branch_char).ok_or(ParseGanzhiError::UnknownBranch(branch_char))?;
        Self::new(stem, branch)
            .ok_or_else(|| ParseGanzhiError::ParityMismatch(s.trim().to_string()))
    }
}

impl Serialize for Ganzhi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
