//! `pregtrack week` command - Table lookups for one week

use miette::Result;
use serde::Serialize;

use crate::cli::output::print_rows;
use crate::cli::{GlobalOpts, ModeArg};
use crate::core::milestone;
use crate::core::overrides::{load_overrides, VerseBook};
use crate::core::reference::{parse_reference, ReferenceParts};
use crate::data::{
    all_comparisons, lookup_comparison, lookup_summary, ComparisonEntry, ComparisonMode,
    VerseEntry, WeekIndex,
};
use std::sync::Arc;

#[derive(clap::Args, Debug)]
pub struct WeekArgs {
    /// Week number (clamped to 1-42)
    #[arg(allow_negative_numbers = true)]
    pub week: i64,

    /// Comparison mode
    #[arg(long, short = 'm', value_enum, default_value = "veggie")]
    pub mode: ModeArg,

    /// Verse overrides: JSON file path or inline JSON
    #[arg(long)]
    pub verses: Option<String>,
}

#[derive(Debug, Serialize)]
struct WeekView {
    week: WeekIndex,
    mode: ComparisonMode,
    comparison: ComparisonEntry,
    veggie: ComparisonEntry,
    dad: ComparisonEntry,
    summary: &'static str,
    milestone: &'static str,
    verse: VerseEntry,
    reference: ReferenceParts,
}

/// Run the week command
pub fn run(args: WeekArgs, global: &GlobalOpts) -> Result<()> {
    let mode = ComparisonMode::from(args.mode);
    let verses = match args.verses.as_deref() {
        Some(source) => VerseBook::new(Arc::new(load_overrides(source, None))),
        None => VerseBook::default(),
    };

    let all = all_comparisons(args.week);
    let verse = verses.lookup(args.week);
    let view = WeekView {
        week: all.week,
        mode,
        comparison: lookup_comparison(args.week, mode),
        veggie: all.veggie,
        dad: all.dad,
        summary: lookup_summary(args.week),
        milestone: milestone::current_label(all.week.get() as i64),
        reference: parse_reference(&verse.reference),
        verse,
    };

    let rows = vec![
        vec!["Week".to_string(), view.week.to_string()],
        vec![
            "Size".to_string(),
            format!(
                "{} {}",
                view.comparison.emoji.as_deref().unwrap_or(""),
                view.comparison.label
            )
            .trim()
            .to_string(),
        ],
        vec!["Summary".to_string(), view.summary.to_string()],
        vec!["Milestone".to_string(), view.milestone.to_string()],
        vec!["Verse".to_string(), view.verse.text.clone()],
        vec!["Reference".to_string(), view.verse.reference.clone()],
    ];

    print_rows(global.output, &view, &["field", "value"], &rows)
}
