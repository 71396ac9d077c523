//! Nayin (納音): 30 named sounds, one per consecutive pair of cycle positions.

use serde::Serialize;

use crate::element::Element;

/// A nayin sound and its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Nayin {
    pub name: &'static str,
    pub element: Element,
}

const fn n(name: &'static str, element: Element) -> Nayin {
    Nayin { name, element }
}

/// Nayin table; entry `k` covers cycle indices `2k` and `2k + 1`.
pub const NAYIN_TABLE: [Nayin; 30] = [
    n("海中金", Element::Metal),
    n("炉中火", Element::Fire),
    n("大林木", Element::Wood),
    n("路旁土", Element::Earth),
    n("剑锋金", Element::Metal),
    n("山头火", Element::Fire),
    n("涧下水", Element::Water),
    n("城头土", Element::Earth),
    n("白蜡金", Element::Metal),
    n("杨柳木", Element::Wood),
    n("泉中水", Element::Water),
    n("屋上土", Element::Earth),
    n("霹雳火", Element::Fire),
    n("松柏木", Element::Wood),
    n("长流水", Element::Water),
    n("沙中金", Element::Metal),
    n("山下火", Element::Fire),
    n("平地木", Element::Wood),
    n("壁上土", Element::Earth),
    n("金箔金", Element::Metal),
    n("覆灯火", Element::Fire),
    n("天河水", Element::Water),
    n("大驿土", Element::Earth),
    n("钗钏金", Element::Metal),
    n("桑柘木", Element::Wood),
    n("大溪水", Element::Water),
    n("沙中土", Element::Earth),
    n("天上火", Element::Fire),
    n("石榴木", Element::Wood),
    n("大海水", Element::Water),
];

/// Nayin of a 0-based sexagenary cycle index (wraps past 59).
pub const fn nayin_for_cycle_index(index: u8) -> Nayin {
    NAYIN_TABLE[((index % 60) / 2) as usize]
}
