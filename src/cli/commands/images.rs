//! `pregtrack images` command - Install comparison images
//!
//! Copy failures are reported but never fail the command.

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::open_store;
use crate::cli::GlobalOpts;
use crate::core::assets::{install_images, InstallOutcome};

#[derive(clap::Args, Debug)]
pub struct ImagesArgs {
    /// Directory holding veggie/ and dad/ image folders
    #[arg(long, short = 's')]
    pub source: PathBuf,

    /// Web directory to install into (default: <store dir>/www/pregnancy_tracker)
    #[arg(long, short = 'd')]
    pub dest: Option<PathBuf>,
}

/// Run the images command
pub fn run(args: ImagesArgs, global: &GlobalOpts) -> Result<()> {
    let dest = match args.dest {
        Some(dest) => dest,
        None => {
            let store = open_store(global)?;
            let base = store
                .base_dir()
                .map(|p| p.to_path_buf())
                .ok_or_else(|| miette::miette!("Cannot derive a destination; pass --dest"))?;
            base.join("www").join("pregnancy_tracker")
        }
    };

    match install_images(&args.source, &dest) {
        Ok(InstallOutcome::Installed(count)) => {
            println!(
                "{} Installed {} image(s) to {}",
                style("✓").green(),
                count,
                dest.display()
            );
        }
        Ok(InstallOutcome::AlreadyPresent) => {
            println!("Images already present at {}", dest.display());
        }
        Ok(InstallOutcome::SourceMissing) => {
            eprintln!(
                "{} No images found at {}",
                style("!").yellow(),
                args.source.display()
            );
        }
        Err(e) => {
            eprintln!("{} Image install failed: {}", style("!").yellow(), e);
        }
    }

    Ok(())
}
