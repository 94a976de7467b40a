use clap::Parser;
use hbs::cli::{Cli, Commands};
use hbs::output::Printer;
use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Validate(args) => hbs::cli::validate::run(args, &printer)?,
        Commands::Print(args) => hbs::cli::print::run(args)?,
        Commands::Fmt(args) => hbs::cli::fmt::run(args)?,
        Commands::Render(args) => hbs::cli::render::run(args, &printer)?,
        Commands::Completions(args) => hbs::cli::completions::run(args)?,
    }

    Ok(())
}

/// Log to stderr, filtered by `HBS_LOG` (e.g. `HBS_LOG=hbs=debug`).
fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("HBS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
