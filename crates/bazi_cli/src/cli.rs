use anyhow::{Result, bail};
use bazi_time::CivilDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Four Pillars (八字) calculator.
#[derive(Parser)]
#[command(name = "bazi", version, about = "Four Pillars of Destiny calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format.
    #[arg(
        long,
        global = true,
        env = "BAZI_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Text
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Four pillars for a date and hour
    Pillars(MomentArgs),
    /// Four pillars with ten gods, hidden stems, nayin and element balance
    Chart(MomentArgs),
    /// Elements and polarities of a stem-branch symbol such as 甲子
    Info {
        /// Two characters: a heavenly stem then an earthly branch
        ganzhi: String,
    },
    /// Check a day pillar against a date
    VerifyDay {
        #[command(flatten)]
        date: DateArgs,
        /// Expected day pillar, e.g. 丙寅
        #[arg(long)]
        expected: String,
    },
    /// List the sexagenary cycle
    Cycle,
    /// Year pillar for a Gregorian year
    Year {
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
}

/// Calendar date, either as `--date` or as separate fields.
#[derive(Args)]
pub struct DateArgs {
    /// Date as YYYY-MM-DD
    #[arg(long, conflicts_with_all = ["year", "month", "day"])]
    pub date: Option<CivilDate>,

    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    pub month: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    pub day: Option<i32>,
}

impl DateArgs {
    /// Raw `(year, month, day)`; range checks are left to the calculator.
    pub fn fields(&self) -> Result<(i32, i32, i32)> {
        if let Some(date) = self.date {
            return Ok((date.year(), date.month() as i32, date.day() as i32));
        }
        match (self.year, self.month, self.day) {
            (Some(y), Some(m), Some(d)) => Ok((y, m, d)),
            _ => bail!("give either --date YYYY-MM-DD or all of --year, --month and --day"),
        }
    }
}

#[derive(Args)]
pub struct MomentArgs {
    #[command(flatten)]
    pub date: DateArgs,

    /// Clock hour 0-23; 23 counts toward the next day
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub hour: i32,
}
