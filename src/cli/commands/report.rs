//! `pregtrack report` command - Render the weekly report

use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{open_store, override_cache, today};
use crate::cli::{GlobalOpts, OutputFormat, TrackerArgs};
use crate::core::context::TrackerContext;
use crate::report::ReportGenerator;

/// Run the report command
pub fn run(args: TrackerArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let config = store.select(args.tracker.as_deref()).into_diagnostic()?;
    let mut cache = override_cache(&store);
    let ctx = TrackerContext::with_cache(config, &mut cache, today(global));

    let generator = ReportGenerator::new().map_err(|e| miette::miette!("{}", e))?;
    let report = generator
        .render_weekly(&ctx)
        .map_err(|e| miette::miette!("{}", e))?;

    match global.output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "report": report }))
                    .into_diagnostic()?
            );
        }
        _ => print!("{}", report),
    }
    Ok(())
}
