//! `pregtrack sensors` command - Every sensor reading for a tracker

use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{open_store, override_cache, today, truncate_str};
use crate::cli::output::print_rows;
use crate::cli::GlobalOpts;
use crate::core::context::TrackerContext;
use crate::core::sensors::SensorKind;

#[derive(clap::Args, Debug)]
pub struct SensorsArgs {
    /// Tracker entry id (or prefix), due date, or unique id
    pub tracker: Option<String>,

    /// Only these sensors (comma-separated keys, e.g. weeks,countdown)
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<String>>,
}

/// Run the sensors command
pub fn run(args: SensorsArgs, global: &GlobalOpts) -> Result<()> {
    let kinds: Vec<SensorKind> = match &args.only {
        Some(keys) => keys
            .iter()
            .map(|key| {
                SensorKind::from_key(key.trim()).ok_or_else(|| {
                    let known: Vec<&str> = SensorKind::ALL.iter().map(|k| k.key()).collect();
                    miette::miette!("Unknown sensor '{}'. Known sensors: {}", key, known.join(", "))
                })
            })
            .collect::<Result<_>>()?,
        None => SensorKind::ALL.to_vec(),
    };

    let store = open_store(global)?;
    let config = store.select(args.tracker.as_deref()).into_diagnostic()?;
    let mut cache = override_cache(&store);
    let ctx = TrackerContext::with_cache(config, &mut cache, today(global));

    let readings: Vec<_> = kinds.iter().map(|kind| kind.read(&ctx)).collect();
    let rows: Vec<Vec<String>> = readings
        .iter()
        .map(|r| {
            vec![
                r.key.to_string(),
                r.name.to_string(),
                truncate_str(&r.display_state(), 60),
            ]
        })
        .collect();

    print_rows(global.output, &readings, &["key", "name", "state"], &rows)
}
