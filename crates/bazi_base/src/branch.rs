//! Earthly Branches (地支): the 12-term cycle, its clock-hour slots and
//! hidden stems.

use serde::{Serialize, Serializer};

use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// The 12 Earthly Branches starting from Zi (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
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
];

/// Clock hour (0..=23) to branch.
///
/// Hours 23, 0 and 1 belong to Zi; from 2 onward each branch takes two
/// consecutive hours, leaving Hai with hour 22 alone.
pub const HOUR_BRANCHES: [Branch; 24] = [
    Branch::Zi,   // 0
    Branch::Zi,   // 1
    Branch::Chou, // 2
    Branch::Chou,
    Branch::Yin, // 4
    Branch::Yin,
    Branch::Mao, // 6
    Branch::Mao,
    Branch::Chen, // 8
    Branch::Chen,
    Branch::Si, // 10
    Branch::Si,
    Branch::Wu, // 12
    Branch::Wu,
    Branch::Wei, // 14
    Branch::Wei,
    Branch::Shen, // 16
    Branch::Shen,
    Branch::You, // 18
    Branch::You,
    Branch::Xu, // 20
    Branch::Xu,
    Branch::Hai, // 22
    Branch::Zi,  // 23
];

impl Branch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin romanisation.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Zodiac animal associated with the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at `index`, wrapping any integer into 0..=11.
    pub const fn from_index(index: i32) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Look up a branch by its Chinese character.
    pub fn from_char(c: char) -> Option<Self> {
        ALL_BRANCHES.iter().copied().find(|b| b.name().starts_with(c))
    }

    /// Branch governing a clock hour. Hours past 23 wrap.
    pub const fn from_hour(hour: u32) -> Self {
        HOUR_BRANCHES[(hour % 24) as usize]
    }

    /// Clock hours (0..=23) that fall in this branch's slot.
    pub fn clock_hours(self) -> impl Iterator<Item = u32> {
        (0..24u32).filter(move |&h| Self::from_hour(h) == self)
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Hidden stems (藏干), main qi first.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        use Stem::*;
        match self {
            Self::Zi => &[Gui],
            Self::Chou => &[Ji, Gui, Xin],
            Self::Yin => &[Jia, Bing, Wu],
            Self::Mao => &[Yi],
            Self::Chen => &[Wu, Yi, Gui],
            Self::Si => &[Bing, Wu, Geng],
            Self::Wu => &[Ding, Ji],
            Self::Wei => &[Ji, Ding, Yi],
            Self::Shen => &[Geng, Ren, Wu],
            Self::You => &[Xin],
            Self::Xu => &[Wu, Xin, Ding],
            Self::Hai => &[Ren, Jia],
        }
    }

    /// Main-qi hidden stem (本气).
    pub const fn main_stem(self) -> Stem {
        self.hidden_stems()[0]
    }

    /// Hidden stems with their qi weight: a lone stem weighs 8, otherwise
    /// main 5, then 3 (two stems) or 2 and 1 (three stems).
    pub fn weighted_hidden_stems(self) -> impl Iterator<Item = (Stem, u8)> {
        let stems = self.hidden_stems();
        let weights: &[u8] = match stems.len() {
            1 => &[8],
            2 => &[5, 3],
            _ => &[5, 2, 1],
        };
        stems.iter().copied().zip(weights.iter().copied())
    }

    /// Treasury (库) branches: the four earth branches 辰戌丑未.
    pub const fn is_treasury(self) -> bool {
        matches!(self, Self::Chen | Self::Xu | Self::Chou | Self::Wei)
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn zi_covers_23_0_1() {
        let hours: Vec<u32> = Branch::Zi.clock_hours().collect();
        assert_eq!(hours, vec![0, 1, 23]);
    }

    #[test]
    fn hai_is_hour_22_only() {
        let hours: Vec<u32> = Branch::Hai.clock_hours().collect();
        assert_eq!(hours, vec![22]);
    }

    #[test]
    fn hour_table_pairs() {
        assert_eq!(Branch::from_hour(2), Branch::Chou);
        assert_eq!(Branch::from_hour(3), Branch::Chou);
        assert_eq!(Branch::from_hour(12), Branch::Wu);
        assert_eq!(Branch::from_hour(20), Branch::Xu);
        assert_eq!(Branch::from_hour(21), Branch::Xu);
        for h in 2..=21u32 {
            assert_eq!(Branch::from_hour(h).index() as u32, h / 2, "hour {h}");
        }
    }

    #[test]
    fn every_hour_covered_once() {
        let total: usize = ALL_BRANCHES.iter().map(|b| b.clock_hours().count()).sum();
        assert_eq!(total, 24);
    }

    #[test]
    fn main_stem_shares_element_with_branch() {
        for b in ALL_BRANCHES {
            assert_eq!(b.main_stem().element(), b.element(), "{}", b.name());
        }
    }

    #[test]
    fn hidden_stem_weights_sum_to_eight() {
        for b in ALL_BRANCHES {
            let total: u8 = b.weighted_hidden_stems().map(|(_, w)| w).sum();
            assert_eq!(total, 8, "{}", b.name());
        }
        let si: Vec<(Stem, u8)> = Branch::Si.weighted_hidden_stems().collect();
        assert_eq!(si, vec![(Stem::Bing, 5), (Stem::Wu, 2), (Stem::Geng, 1)]);
        let hai: Vec<(Stem, u8)> = Branch::Hai.weighted_hidden_stems().collect();
        assert_eq!(hai, vec![(Stem::Ren, 5), (Stem::Jia, 3)]);
    }

    #[test]
    fn treasuries_are_earth_branches() {
        let treasuries: Vec<Branch> = ALL_BRANCHES
            .into_iter()
            .filter(|b| b.is_treasury())
            .collect();
        assert_eq!(treasuries, vec![Branch::Chou, Branch::Chen, Branch::Wei, Branch::Xu]);
        assert!(treasuries.iter().all(|b| b.element() == Element::Earth));
    }

    #[test]
    fn from_char_round_trips() {
        for b in ALL_BRANCHES {
            let c = b.name().chars().next().unwrap();
            assert_eq!(Branch::from_char(c), Some(b));
        }
        assert_eq!(Branch::from_char('甲'), None);
    }
}
