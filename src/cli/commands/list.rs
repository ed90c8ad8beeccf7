//! `pregtrack list` command - Show configured trackers

use miette::Result;

use crate::cli::helpers::{open_store, today, truncate_str};
use crate::cli::output::print_rows;
use crate::cli::GlobalOpts;
use crate::core::config::DATE_FORMAT;

/// Run the list command
pub fn run(global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    if store.is_empty() {
        println!("No trackers configured. Run 'pregtrack init' to add one.");
        return Ok(());
    }

    let today = today(global);
    let rows: Vec<Vec<String>> = store
        .trackers()
        .iter()
        .map(|t| {
            let snap = t.snapshot(today);
            vec![
                t.entry_id.clone(),
                truncate_str(&t.title, 32),
                t.due_date.format(DATE_FORMAT).to_string(),
                t.pregnancy_length.to_string(),
                t.comparison_mode.to_string(),
                snap.week_description(),
            ]
        })
        .collect();

    print_rows(
        global.output,
        store.trackers(),
        &["id", "title", "due_date", "length", "mode", "week"],
        &rows,
    )
}
