//! `pregtrack remove` command - Remove a tracker

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::open_store;
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// Tracker entry id (or prefix), due date, or unique id
    pub tracker: String,
}

/// Run the remove command
pub fn run(args: RemoveArgs, global: &GlobalOpts) -> Result<()> {
    let mut store = open_store(global)?;
    let removed = store.remove(&args.tracker).into_diagnostic()?;
    store.save().into_diagnostic()?;

    println!(
        "{} Removed tracker {} ({})",
        style("✓").green(),
        style(&removed.title).cyan(),
        style(&removed.entry_id).dim()
    );
    Ok(())
}
