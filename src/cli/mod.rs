pub mod completions;
pub mod fmt;
pub mod print;
pub mod render;
pub mod validate;

use clap::{Parser, Subcommand};

/// hbs - Stadium file toolkit
#[derive(Parser, Debug)]
#[command(name = "hbs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse stadium files and report problems
    Validate(validate::ValidateArgs),

    /// Print a summary of a stadium
    Print(print::PrintArgs),

    /// Write a stadium back out as canonical JSON
    Fmt(fmt::FmtArgs),

    /// Render a PNG preview of a stadium
    Render(render::RenderArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_flags() {
        let cli = Cli::parse_from(["hbs", "render", "big.hbs", "-o", "out", "--scale", "2"]);
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.scale, Some(2));
        assert_eq!(args.output.as_deref(), Some(std::path::Path::new("out")));
    }
}
