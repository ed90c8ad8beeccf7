//! `pregtrack status` command - Progress summary for a tracker

use chrono::NaiveDate;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::{open_store, override_cache, today};
use crate::cli::output::print_rows;
use crate::cli::{GlobalOpts, TrackerArgs};
use crate::core::clock::PregnancySnapshot;
use crate::core::context::TrackerContext;

#[derive(Debug, Serialize)]
struct StatusView<'a> {
    entry_id: &'a str,
    title: &'a str,
    due_date: NaiveDate,
    start_date: NaiveDate,
    today: NaiveDate,
    #[serde(flatten)]
    snapshot: &'a PregnancySnapshot,
    status_label: &'static str,
    trimester_name: &'static str,
    countdown: String,
    term_status: &'static str,
    size_comparison: String,
}

/// Run the status command
pub fn run(args: TrackerArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let config = store.select(args.tracker.as_deref()).into_diagnostic()?;
    let mut cache = override_cache(&store);
    let ctx = TrackerContext::with_cache(config, &mut cache, today(global));
    let snap = ctx.snapshot();

    let view = StatusView {
        entry_id: &config.entry_id,
        title: &config.title,
        due_date: config.due_date,
        start_date: config.start_date(),
        today: ctx.today(),
        snapshot: snap,
        status_label: snap.status.label(),
        trimester_name: snap.trimester.name(),
        countdown: ctx.countdown(),
        term_status: ctx.term_status().label(),
        size_comparison: ctx.configured_comparison().label,
    };

    let rows = vec![
        field("Tracker", &view.title),
        field("Due date", &view.due_date),
        field("Week", &snap.week_description()),
        field("Days elapsed", &snap.days_elapsed),
        field("Days remaining", &snap.days_remaining),
        field("Percent", &format!("{}%", snap.percent_complete)),
        field("Trimester", &view.trimester_name),
        field("Status", &view.status_label),
        field("Countdown", &view.countdown),
        field("Size", &view.size_comparison),
    ];

    print_rows(global.output, &view, &["field", "value"], &rows)
}

fn field(name: &str, value: &dyn std::fmt::Display) -> Vec<String> {
    vec![name.to_string(), value.to_string()]
}
