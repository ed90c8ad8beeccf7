//! Command-line argument definitions

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs, images::ImagesArgs, init::InitArgs, remove::RemoveArgs,
    sensors::SensorsArgs, verse::VerseArgs, week::WeekArgs,
};
use crate::core::config::DATE_FORMAT;
use crate::data::ComparisonMode;

/// Pregnancy Tracker - week-by-week progress from a due date
#[derive(Parser, Debug)]
#[command(name = "pregtrack", version, about = "Track pregnancy progress, size comparisons, milestones and weekly verses from a due date")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Tracker store file (defaults to the platform config directory)
    #[arg(long, global = true, env = "PREGTRACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Evaluate as of this date instead of today (YYYY-MM-DD)
    #[arg(long, global = true, env = "PREGTRACK_TODAY", value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up a new tracker
    Init(InitArgs),

    /// List configured trackers
    List,

    /// Remove a tracker
    Remove(RemoveArgs),

    /// Show progress for a tracker
    Status(TrackerArgs),

    /// Show every sensor reading for a tracker
    Sensors(SensorsArgs),

    /// Look up the comparison, summary and verse for a week
    Week(WeekArgs),

    /// Show this week's verse, or break down a citation
    Verse(VerseArgs),

    /// Render the weekly report
    Report(TrackerArgs),

    /// Install comparison images into a web directory
    Images(ImagesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Selects a tracker when more than one is configured
#[derive(clap::Args, Debug)]
pub struct TrackerArgs {
    /// Tracker entry id (or prefix), due date, or unique id
    pub tracker: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table for terminals
    #[default]
    Auto,
    Table,
    Json,
    Yaml,
    Csv,
}

/// Comparison mode as accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ModeArg {
    Veggie,
    Dad,
    Custom,
}

impl From<ModeArg> for ComparisonMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Veggie => ComparisonMode::Veggie,
            ModeArg::Dad => ComparisonMode::Dad,
            ModeArg::Custom => ComparisonMode::Custom,
        }
    }
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| format!("invalid date '{}': expected YYYY-MM-DD", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-12-31"),
            Ok(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap())
        );
        assert!(parse_date("31/12/2025").is_err());
    }

    #[test]
    fn test_global_opts_after_subcommand() {
        let cli = Cli::try_parse_from(["pregtrack", "status", "--today", "2025-10-02", "-o", "json"])
            .unwrap();
        assert_eq!(cli.global.output, OutputFormat::Json);
        assert_eq!(cli.global.today, NaiveDate::from_ymd_opt(2025, 10, 2));
    }
}
