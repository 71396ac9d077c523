mod cli;
mod logging;
mod output;

use std::process;

use anyhow::{Context, Result, bail};
use bazi_base::{
    BirthMoment, Ganzhi, MAX_YEAR, MIN_YEAR, RangeError, calculate, chart_for, day_pillar,
    ganzhi_info, verify_day_ganzhi, year_pillar,
};
use clap::Parser;
use serde::Serialize;

use crate::cli::{Cli, Command, OutputFormat};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command, cli.format) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[derive(Serialize)]
struct DayCheck {
    date: String,
    expected: String,
    actual: Option<String>,
    matches: bool,
}

impl DayCheck {
    fn text(&self) -> String {
        let verdict = if self.matches { "match" } else { "mismatch" };
        match &self.actual {
            Some(actual) => format!("{verdict}: {} is {actual}\n", self.date),
            None => format!("{verdict}: {} is not a valid date\n", self.date),
        }
    }
}

#[derive(Debug, Serialize)]
struct YearResult {
    year: i32,
    pillar: Ganzhi,
    animal: &'static str,
}

fn run(command: Command, format: OutputFormat) -> Result<()> {
    match command {
        Command::Pillars(args) => {
            let (y, m, d) = args.date.fields()?;
            let pillars = calculate(y, m, d, args.hour).context("cannot compute pillars")?;
            output::emit(format, &pillars, || output::pillars_text(&pillars))
        }
        Command::Chart(args) => {
            let (y, m, d) = args.date.fields()?;
            let chart = chart_for(y, m, d, args.hour).context("cannot compute chart")?;
            output::emit(format, &chart, || output::chart_text(&chart))
        }
        Command::Info { ganzhi } => {
            let Some(info) = ganzhi_info(&ganzhi) else {
                bail!("{ganzhi:?} is not a heavenly stem followed by an earthly branch");
            };
            output::emit(format, &info, || output::info_text(&info))
        }
        Command::VerifyDay { date, expected } => {
            let (y, m, d) = date.fields()?;
            let check = check_day(y, m, d, &expected);
            output::emit(format, &check, || check.text())
        }
        Command::Cycle => {
            let entries = output::cycle_entries();
            output::emit(format, &entries, || output::cycle_text(&entries))
        }
        Command::Year { year } => {
            let result = year_result(year)?;
            output::emit(format, &result, || {
                format!("{}: {} ({})\n", result.year, result.pillar, result.animal)
            })
        }
    }
}

fn check_day(year: i32, month: i32, day: i32, expected: &str) -> DayCheck {
    let matches = verify_day_ganzhi(year, month, day, expected);
    let actual = BirthMoment::new(year, month, day, 12)
        .ok()
        .map(|moment| day_pillar(moment.date()).to_string());
    tracing::info!(year, month, day, expected, matches, "verify day pillar");
    DayCheck {
        date: format!("{year:04}-{month:02}-{day:02}"),
        expected: expected.trim().to_string(),
        actual,
        matches,
    }
}

fn year_result(year: i32) -> Result<YearResult> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(RangeError::Year { year }.into());
    }
    let pillar = year_pillar(year);
    Ok(YearResult {
        year,
        pillar,
        animal: pillar.branch().animal(),
    })
}
