use clap::Parser;
use miette::Result;
use pregtrack::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for readable diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    pregtrack::logging::init(cli.global.verbose);

    let global = &cli.global;
    match cli.command {
        Commands::Init(args) => pregtrack::cli::commands::init::run(args, global),
        Commands::List => pregtrack::cli::commands::list::run(global),
        Commands::Remove(args) => pregtrack::cli::commands::remove::run(args, global),
        Commands::Status(args) => pregtrack::cli::commands::status::run(args, global),
        Commands::Sensors(args) => pregtrack::cli::commands::sensors::run(args, global),
        Commands::Week(args) => pregtrack::cli::commands::week::run(args, global),
        Commands::Verse(args) => pregtrack::cli::commands::verse::run(args, global),
        Commands::Report(args) => pregtrack::cli::commands::report::run(args, global),
        Commands::Images(args) => pregtrack::cli::commands::images::run(args, global),
        Commands::Completions(args) => pregtrack::cli::commands::completions::run(args),
    }
}
