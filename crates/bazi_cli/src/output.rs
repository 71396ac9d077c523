//! Text and JSON rendering of command results.

use std::fmt::Display;

use anyhow::Result;
use bazi_base::{
    ALL_ELEMENTS, ALL_PILLARS, ChartDetails, Element, FourPillars, Ganzhi, GanzhiInfo,
    PillarDetail, SEXAGENARY_CYCLE,
};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Print `value` as pretty JSON, or the text produced by `text`.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => print!("{}", text()),
    }
    Ok(())
}

pub fn pillars_text(pillars: &FourPillars) -> String {
    ALL_PILLARS
        .iter()
        .map(|&p| format!("{:<6} {}\n", format!("{}:", p.english_name()), pillars.get(p)))
        .collect()
}

fn detail_line(d: &PillarDetail) -> String {
    let ten_god = d.ten_god.map_or("日主", |g| g.name());
    let hidden = d
        .hidden_stems
        .iter()
        .map(|h| format!("{}({})", h.stem.name(), h.ten_god.name()))
        .collect::<Vec<_>>()
        .join(" ");
    let treasury = if d.is_treasury { " 库" } else { "" };
    format!(
        "{} {}  {}{} / {}{}  {:<4} 藏干 {}  {}  {}{}",
        d.pillar.name(),
        d.ganzhi,
        d.stem_polarity.name(),
        d.stem_element.name(),
        d.branch_polarity.name(),
        d.branch_element.name(),
        ten_god,
        hidden,
        d.nayin.name,
        d.life_stage.name(),
        treasury,
    )
}

fn tally_line<T: Display>(count: impl Fn(Element) -> T) -> String {
    ALL_ELEMENTS
        .iter()
        .map(|&e| format!("{}{}", e.name(), count(e)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn chart_text(chart: &ChartDetails) -> String {
    let dm = chart.day_master;
    let strength = if chart.day_master_strong { "strong" } else { "weak" };
    let mut lines = vec![
        format!("八字: {}", chart.pillars),
        format!("Pillar date: {}", chart.pillar_date),
        format!(
            "Day Master: {} ({}{}, {strength})",
            dm.name(),
            dm.polarity().name(),
            dm.element().name()
        ),
    ];
    for d in chart.details() {
        lines.push(detail_line(d));
    }
    let [a, b] = chart.void_branches;
    lines.push(format!("空亡: {}{}", a.name(), b.name()));
    lines.push(format!("五行: {}", tally_line(|e| chart.element_balance.count(e))));
    let missing = chart.element_balance.missing();
    if !missing.is_empty() {
        let names: String = missing.iter().map(|e| e.name()).collect();
        lines.push(format!("缺: {names}"));
    }
    let scores = &chart.element_scores;
    lines.push(format!(
        "Scores: {}  strongest {} weakest {}",
        tally_line(|e| scores.count(e)),
        scores.strongest().english_name(),
        scores.weakest().english_name()
    ));
    let gods = chart
        .ten_god_counts
        .iter()
        .map(|c| format!("{}{}", c.ten_god.name(), c.count))
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(format!("十神: {gods}"));
    let repeats: Vec<String> = chart
        .repeated_stems
        .iter()
        .map(|r| format!("{}×{}", r.symbol.name(), r.count))
        .chain(
            chart
                .repeated_branches
                .iter()
                .map(|r| format!("{}×{}", r.symbol.name(), r.count)),
        )
        .collect();
    if !repeats.is_empty() {
        lines.push(format!("Repeated: {}", repeats.join(" ")));
    }
    lines.iter().map(|l| format!("{l}\n")).collect()
}

pub fn info_text(info: &GanzhiInfo) -> String {
    let summary = format!(
        "{}: stem {} ({}) {}{}, branch {} ({}, {}) {}{}\n",
        info.ganzhi,
        info.stem.name(),
        info.stem.pinyin(),
        info.stem_polarity.name(),
        info.stem_element.name(),
        info.branch.name(),
        info.branch.pinyin(),
        info.branch.animal(),
        info.branch_polarity.name(),
        info.branch_element.name(),
    );
    let cycle = match (info.cycle_order, info.nayin) {
        (Some(order), Some(nayin)) => format!("cycle order {order}, nayin {}\n", nayin.name),
        _ => "not in the sexagenary cycle\n".to_string(),
    };
    summary + &cycle
}

#[derive(Serialize)]
pub struct CycleEntry {
    pub order: u8,
    pub ganzhi: Ganzhi,
    pub nayin: &'static str,
}

pub fn cycle_entries() -> Vec<CycleEntry> {
    SEXAGENARY_CYCLE
        .iter()
        .map(|&g| CycleEntry {
            order: g.order(),
            ganzhi: g,
            nayin: g.nayin().name,
        })
        .collect()
}

pub fn cycle_text(entries: &[CycleEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{:>2} {} {}\n", e.order, e.ganzhi, e.nayin))
        .collect()
}
