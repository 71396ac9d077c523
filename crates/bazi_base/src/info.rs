//! Attribute lookup for a two-character stem-branch symbol.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::nayin::Nayin;
use crate::sexagenary::Ganzhi;
use crate::stem::Stem;

/// Element and polarity metadata for a stem-branch symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GanzhiInfo {
    /// The symbol as given, e.g. "甲子".
    pub ganzhi: String,
    pub stem: Stem,
    pub stem_element: Element,
    pub stem_polarity: Polarity,
    pub branch: Branch,
    pub branch_element: Element,
    pub branch_polarity: Polarity,
    /// 1-based cycle order; `None` when stem and branch parity differ.
    pub cycle_order: Option<u8>,
    /// `None` when the pair is not in the sexagenary cycle.
    pub nayin: Option<Nayin>,
}

/// Decompose `symbol` into a stem and a branch and report their attributes.
///
/// Returns `None` unless `symbol` is exactly two characters, the first a
/// heavenly stem and the second an earthly branch. A pair outside the
/// 60-term cycle (mixed parity) still resolves, with no cycle order or nayin.
///
/// # Example
///
/// ```
/// use bazi_base::{Element, Polarity, ganzhi_info};
///
/// let info = ganzhi_info("丙午").unwrap();
/// assert_eq!(info.stem_element, Element::Fire);
/// assert_eq!(info.branch_polarity, Polarity::Yang);
/// assert!(ganzhi_info("丙").is_none());
/// ```
pub fn ganzhi_info(symbol: &str) -> Option<GanzhiInfo> {
    let symbol = symbol.trim();
    let mut chars = symbol.chars();
    let (stem_char, branch_char) = (chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }
    let stem = Stem::from_char(stem_char)?;
    let branch = Branch::from_char(branch_char)?;
    let pair = Ganzhi::new(stem, branch);
    Some(GanzhiInfo {
        ganzhi: symbol.to_string(),
        stem,
        stem_element: stem.element(),
        stem_polarity: stem.polarity(),
        branch,
        branch_element: branch.element(),
        branch_polarity: branch.polarity(),
        cycle_order: pair.map(Ganzhi::order),
        nayin: pair.map(Ganzhi::nayin),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jiazi() {
        let info = ganzhi_info("甲子").unwrap();
        assert_eq!(info.stem, Stem::Jia);
        assert_eq!(info.stem_element, Element::Wood);
        assert_eq!(info.stem_polarity, Polarity::Yang);
        assert_eq!(info.branch, Branch::Zi);
        assert_eq!(info.branch_element, Element::Water);
        assert_eq!(info.branch_polarity, Polarity::Yang);
        assert_eq!(info.cycle_order, Some(1));
        assert_eq!(info.nayin.unwrap().name, "海中金");
    }

    #[test]
    fn guihai() {
        let info = ganzhi_info("癸亥").unwrap();
        assert_eq!(info.stem_element, Element::Water);
        assert_eq!(info.stem_polarity, Polarity::Yin);
        assert_eq!(info.branch_element, Element::Water);
        assert_eq!(info.cycle_order, Some(60));
    }

    #[test]
    fn mixed_parity_still_resolves() {
        let info = ganzhi_info("甲丑").unwrap();
        assert_eq!(info.branch_element, Element::Earth);
        assert_eq!(info.cycle_order, None);
        assert_eq!(info.nayin, None);
    }

    #[test]
    fn rejects_bad_symbols() {
        assert!(ganzhi_info("").is_none());
        assert!(ganzhi_info("甲").is_none());
        assert!(ganzhi_info("甲子丑").is_none());
        assert!(ganzhi_info("子甲").is_none());
        assert!(ganzhi_info("AB").is_none());
    }

    #[test]
    fn every_cycle_pair_resolves() {
        for g in crate::sexagenary::SEXAGENARY_CYCLE {
            let info = ganzhi_info(&g.to_string()).unwrap();
            assert_eq!(info.cycle_order, Some(g.order()));
        }
    }
}
