//! `pregtrack verse` command - This week's verse and its citation parts

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::{open_store, override_cache, today};
use crate::cli::output::print_rows;
use crate::cli::GlobalOpts;
use crate::core::context::TrackerContext;
use crate::core::reference::{parse_reference, ReferenceParts};

#[derive(clap::Args, Debug)]
pub struct VerseArgs {
    /// Tracker entry id (or prefix), due date, or unique id
    pub tracker: Option<String>,

    /// Show the verse for this week instead of the current one
    #[arg(long, short = 'w', allow_negative_numbers = true)]
    pub week: Option<i64>,

    /// Break down a citation instead of looking up a verse
    #[arg(long, short = 'r', conflicts_with_all = ["tracker", "week"])]
    pub reference: Option<String>,
}

#[derive(Debug, Serialize)]
struct VerseView {
    #[serde(skip_serializing_if = "Option::is_none")]
    week: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    reference: String,
    parts: ReferenceParts,
}

/// Run the verse command
pub fn run(args: VerseArgs, global: &GlobalOpts) -> Result<()> {
    let view = match &args.reference {
        Some(citation) => VerseView {
            week: None,
            text: None,
            reference: citation.clone(),
            parts: parse_reference(citation),
        },
        None => {
            let store = open_store(global)?;
            let config = store.select(args.tracker.as_deref()).into_diagnostic()?;
            let mut cache = override_cache(&store);
            let ctx = TrackerContext::with_cache(config, &mut cache, today(global));

            let week = args.week.unwrap_or_else(|| ctx.week());
            let verse = ctx.verse_for(week);
            VerseView {
                week: Some(week),
                text: Some(verse.text),
                parts: parse_reference(&verse.reference),
                reference: verse.reference,
            }
        }
    };

    let mut rows = Vec::new();
    if let Some(text) = &view.text {
        rows.push(vec!["Text".to_string(), text.clone()]);
    }
    rows.push(vec!["Book".to_string(), view.parts.book.clone()]);
    rows.push(vec!["Chapter".to_string(), view.parts.chapter.clone()]);
    rows.push(vec!["Verse".to_string(), view.parts.verse.clone()]);
    rows.push(vec!["Book and chapter".to_string(), view.parts.book_and_chapter.clone()]);

    print_rows(global.output, &view, &["field", "value"], &rows)
}
