//! `pregtrack init` command - Set up a new tracker
//!
//! Runs an interactive setup when no due date is given on the command line,
//! re-prompting on invalid fields, and otherwise validates the flags.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{open_store, stdin_is_terminal, today};
use crate::cli::{GlobalOpts, ModeArg};
use crate::core::clock::DEFAULT_GESTATION_DAYS;
use crate::core::config::{
    validate_due_date, validate_pregnancy_length, SetupInput, TrackerConfig,
};
use crate::data::ComparisonMode;

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Due date (YYYY-MM-DD)
    #[arg(long, short = 'd')]
    pub due_date: Option<String>,

    /// Pregnancy length in days (1-365)
    #[arg(long, short = 'l')]
    pub length: Option<u32>,

    /// Size comparison mode
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<ModeArg>,

    /// Verse overrides: JSON file path or inline JSON
    #[arg(long)]
    pub verses: Option<String>,

    /// Display title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Prompt for every field
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

/// Run the init command
pub fn run(args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let today = today(global);
    let mut store = open_store(global)?;

    let input = if args.interactive || args.due_date.is_none() {
        if !stdin_is_terminal() {
            return Err(miette::miette!(
                "--due-date is required when not running interactively"
            ));
        }
        prompt_setup(&args, today)?
    } else {
        SetupInput {
            due_date: args.due_date.clone().unwrap_or_default(),
            pregnancy_length: args.length,
            comparison_mode: args.mode.map(Into::into),
            custom_bible_verses: args.verses.clone(),
            title: args.title.clone(),
        }
    };

    let config = TrackerConfig::from_setup(input, today)
        .map_err(|e| miette::miette!("{}: {}", e.field(), e))?;

    let title = config.title.clone();
    let entry_id = config.entry_id.clone();
    store.add(config).into_diagnostic()?;
    store.save().into_diagnostic()?;

    println!(
        "{} Created tracker {} ({})",
        style("✓").green(),
        style(&title).cyan(),
        style(&entry_id).dim()
    );
    println!("   Saved to {}", store.path().display());
    Ok(())
}

fn prompt_setup(args: &InitArgs, today: chrono::NaiveDate) -> Result<SetupInput> {
    let theme = ColorfulTheme::default();

    let mut due_prompt = Input::<String>::with_theme(&theme).with_prompt("Due date (YYYY-MM-DD)");
    if let Some(due) = &args.due_date {
        due_prompt = due_prompt.with_initial_text(due.clone());
    }
    let due_date: String = due_prompt
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            validate_due_date(input, today)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .into_diagnostic()?;

    let length: u32 = Input::with_theme(&theme)
        .with_prompt("Pregnancy length (days)")
        .default(args.length.unwrap_or(DEFAULT_GESTATION_DAYS))
        .validate_with(|days: &u32| -> std::result::Result<(), String> {
            validate_pregnancy_length(*days)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .into_diagnostic()?;

    // Custom mode needs comparisons in the store file, so it is not offered here
    let modes = &["veggie", "dad"];
    let default_mode = match args.mode.map(ComparisonMode::from) {
        Some(ComparisonMode::Dad) => 1,
        _ => 0,
    };
    let mode = Select::with_theme(&theme)
        .with_prompt("Size comparison mode")
        .items(modes)
        .default(default_mode)
        .interact()
        .into_diagnostic()?;

    let verses: String = Input::with_theme(&theme)
        .with_prompt("Verse overrides file (optional)")
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()?;

    Ok(SetupInput {
        due_date,
        pregnancy_length: Some(length),
        comparison_mode: Some(ComparisonMode::from_str_lenient(modes[mode])),
        custom_bible_verses: Some(verses),
        title: args.title.clone(),
    })
}
