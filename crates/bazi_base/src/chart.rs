//! Expanded chart: per-pillar attributes, ten gods, hidden stems, life
//! stages, void branches, element tallies and Day Master strength.

use std::ops::AddAssign;

use bazi_time::CivilDate;
use serde::Serialize;

use crate::branch::Branch;
use crate::calculator::{BirthMoment, four_pillars};
use crate::element::{ALL_ELEMENTS, Element, Polarity};
use crate::error::RangeError;
use crate::life_stage::{LifeStage, life_stage};
use crate::nayin::Nayin;
use crate::pillars::{ALL_PILLARS, FourPillars, Pillar};
use crate::sexagenary::Ganzhi;
use crate::stem::Stem;
use crate::ten_gods::{ALL_TEN_GODS, TenGod, ten_god};

/// A stem stored inside a branch (藏干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenStemDetail {
    pub stem: Stem,
    pub element: Element,
    pub ten_god: TenGod,
}

/// Attributes of one pillar, read against the Day Master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarDetail {
    pub pillar: Pillar,
    pub ganzhi: Ganzhi,
    pub stem_element: Element,
    pub stem_polarity: Polarity,
    pub branch_element: Element,
    pub branch_polarity: Polarity,
    /// Ten god of the stem; `None` for the Day Master itself.
    pub ten_god: Option<TenGod>,
    /// Ten god of the branch's main hidden stem.
    pub branch_ten_god: TenGod,
    pub hidden_stems: Vec<HiddenStemDetail>,
    pub nayin: Nayin,
    /// Branch is one of the four treasuries (辰戌丑未).
    pub is_treasury: bool,
    /// Life stage of the Day Master at this pillar's branch.
    pub life_stage: LifeStage,
}

impl PillarDetail {
    fn new(pillar: Pillar, ganzhi: Ganzhi, day_master: Stem) -> Self {
        let (stem, branch) = (ganzhi.stem(), ganzhi.branch());
        let hidden_stems = branch
            .hidden_stems()
            .iter()
            .map(|&h| HiddenStemDetail {
                stem: h,
                element: h.element(),
                ten_god: ten_god(day_master, h),
            })
            .collect();
        Self {
            pillar,
            ganzhi,
            stem_element: stem.element(),
            stem_polarity: stem.polarity(),
            branch_element: branch.element(),
            branch_polarity: branch.polarity(),
            ten_god: (pillar != Pillar::Day).then(|| ten_god(day_master, stem)),
            branch_ten_god: ten_god(day_master, branch.main_stem()),
            hidden_stems,
            nayin: ganzhi.nayin(),
            is_treasury: branch.is_treasury(),
            life_stage: life_stage(day_master, branch),
        }
    }
}

/// Per-element totals over a chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ElementTally<T> {
    pub wood: T,
    pub fire: T,
    pub earth: T,
    pub metal: T,
    pub water: T,
}

/// Count of the eight chart characters per element.
///
/// Stems count by their own element, branches by their native element.
pub type ElementBalance = ElementTally<u8>;

/// Weighted element strength.
///
/// Each stem scores 5. Each branch scores its hidden stems by qi weight
/// (see [`Branch::weighted_hidden_stems`]), and the month branch is scored
/// twice.
pub type ElementScores = ElementTally<u16>;

impl<T: Copy + Default + Ord + AddAssign + From<u8>> ElementTally<T> {
    fn slot(&mut self, element: Element) -> &mut T {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    fn add(&mut self, element: Element, amount: u8) {
        *self.slot(element) += T::from(amount);
    }

    pub fn count(&self, element: Element) -> T {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// Elements with nothing in the chart.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .into_iter()
            .filter(|&e| self.count(e) == T::default())
            .collect()
    }

    /// Element with the highest total; ties go to the earlier element in
    /// generating order (Wood first).
    pub fn strongest(&self) -> Element {
        ALL_ELEMENTS
            .into_iter()
            .rev()
            .max_by_key(|&e| self.count(e))
            .unwrap_or(Element::Wood)
    }

    /// Element with the lowest total; ties go to the earlier element.
    pub fn weakest(&self) -> Element {
        ALL_ELEMENTS
            .into_iter()
            .min_by_key(|&e| self.count(e))
            .unwrap_or(Element::Wood)
    }
}

impl ElementBalance {
    pub fn from_pillars(pillars: &FourPillars) -> Self {
        let mut balance = Self::default();
        for g in pillars.as_array() {
            balance.add(g.stem().element(), 1);
            balance.add(g.branch().element(), 1);
        }
        balance
    }
}

impl ElementScores {
    pub fn from_pillars(pillars: &FourPillars) -> Self {
        let mut scores = Self::default();
        for g in pillars.as_array() {
            scores.add(g.stem().element(), 5);
        }
        let branches = pillars.as_array().map(Ganzhi::branch);
        for branch in branches.into_iter().chain([pillars.month.branch()]) {
            for (stem, weight) in branch.weighted_hidden_stems() {
                scores.add(stem.element(), weight);
            }
        }
        scores
    }
}

/// How many chart positions carry a ten god.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TenGodCount {
    pub ten_god: TenGod,
    pub count: u8,
}

/// A stem or branch that appears more than once in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Repeated<T> {
    pub symbol: T,
    pub count: u8,
}

fn repeated<T: Copy + PartialEq>(items: [T; 4]) -> Vec<Repeated<T>> {
    let mut out: Vec<Repeated<T>> = Vec::new();
    for item in items {
        let count = items.iter().filter(|&&x| x == item).count() as u8;
        if count > 1 && !out.iter().any(|r| r.symbol == item) {
            out.push(Repeated {
                symbol: item,
                count,
            });
        }
    }
    out
}

/// Full chart for one birth moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartDetails {
    /// Date the year, month and day pillars were taken from.
    pub pillar_date: CivilDate,
    pub pillars: FourPillars,
    pub day_master: Stem,
    pub year: PillarDetail,
    pub month: PillarDetail,
    pub day: PillarDetail,
    pub hour: PillarDetail,
    /// Void branches of the day pillar's decade.
    pub void_branches: [Branch; 2],
    pub element_balance: ElementBalance,
    pub element_scores: ElementScores,
    /// Ten gods of the three outer stems and the four branch main stems,
    /// in [`ALL_TEN_GODS`] order, zero counts left out.
    pub ten_god_counts: Vec<TenGodCount>,
    pub repeated_stems: Vec<Repeated<Stem>>,
    pub repeated_branches: Vec<Repeated<Branch>>,
    pub day_master_strong: bool,
}

impl ChartDetails {
    pub fn details(&self) -> [&PillarDetail; 4] {
        [&self.year, &self.month, &self.day, &self.hour]
    }

    /// Pillars whose branch falls in the void pair.
    pub fn void_pillars(&self) -> Vec<Pillar> {
        ALL_PILLARS
            .into_iter()
            .filter(|&p| self.void_branches.contains(&self.pillars.get(p).branch()))
            .collect()
    }

    pub fn ten_god_count(&self, god: TenGod) -> u8 {
        self.ten_god_counts
            .iter()
            .find(|c| c.ten_god == god)
            .map_or(0, |c| c.count)
    }
}

fn ten_god_counts(details: [&PillarDetail; 4]) -> Vec<TenGodCount> {
    let gods: Vec<TenGod> = details
        .iter()
        .filter_map(|d| d.ten_god)
        .chain(details.iter().map(|d| d.branch_ten_god))
        .collect();
    ALL_TEN_GODS
        .into_iter()
        .map(|god| TenGodCount {
            ten_god: god,
            count: gods.iter().filter(|&&g| g == god).count() as u8,
        })
        .filter(|c| c.count > 0)
        .collect()
}

/// The Day Master is strong when it is rooted (Birth, Office or Peak) in
/// any branch, or failing that when Friend positions plus Tomb branches
/// number more than two.
fn day_master_strong(details: [&PillarDetail; 4], friends: u8) -> bool {
    if details.iter().any(|d| d.life_stage.is_rooted()) {
        return true;
    }
    let tombs = details
        .iter()
        .filter(|d| d.life_stage == LifeStage::Tomb)
        .count() as u8;
    friends + tombs > 2
}

/// Chart for a validated moment.
pub fn chart_details(moment: BirthMoment) -> ChartDetails {
    let pillars = four_pillars(moment);
    let day_master = pillars.day_master();
    let detail = |p: Pillar| PillarDetail::new(p, pillars.get(p), day_master);
    let (year, month, day, hour) = (
        detail(Pillar::Year),
        detail(Pillar::Month),
        detail(Pillar::Day),
        detail(Pillar::Hour),
    );
    let details = [&year, &month, &day, &hour];
    let ten_god_counts = ten_god_counts(details);
    let friends = ten_god_counts
        .iter()
        .find(|c| c.ten_god == TenGod::Friend)
        .map_or(0, |c| c.count);
    let day_master_strong = day_master_strong(details, friends);
    tracing::debug!(
        day_master = day_master.name(),
        day_master_strong,
        "chart details"
    );
    ChartDetails {
        pillar_date: moment.pillar_date(),
        pillars,
        day_master,
        void_branches: pillars.day.void_branches(),
        element_balance: ElementBalance::from_pillars(&pillars),
        element_scores: ElementScores::from_pillars(&pillars),
        ten_god_counts,
        repeated_stems: repeated(pillars.as_array().map(Ganzhi::stem)),
        repeated_branches: repeated(pillars.as_array().map(Ganzhi::branch)),
        day_master_strong,
        year,
        month,
        day,
        hour,
    }
}

/// Validate raw inputs and build the full chart.
///
/// # Errors
///
/// The same [`RangeError`] cases as [`crate::calculate`].
pub fn chart_for(year: i32, month: i32, day: i32, hour: i32) -> Result<ChartDetails, RangeError> {
    let moment = BirthMoment::new(year, month, day, hour)?;
    Ok(chart_details(moment))
}
