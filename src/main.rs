//! typescale - typography scale and design token generator.
//!
//! Turns a declarative scale configuration into a deterministic set of
//! text style definitions and exports them as JSON tokens, flat text,
//! CSS, or a Tailwind config.

// Module declarations
mod cli;
mod config;
mod export;
mod models;
mod naming;
mod scale;
mod styles;

use clap::{Parser, Subcommand};

/// typescale - typography scale and design token generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate style definitions and write all export formats
    Generate(cli::GenerateArgs),
    /// Export generated styles in a single format
    Export(cli::ExportArgs),
    /// Show the generated scales, sizes, and style names
    Inspect(cli::InspectArgs),
    /// Validate a config file and report violations
    Validate(cli::ValidateArgs),
    /// Create a default config file
    Init(cli::InitArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(args) => args.execute(),
        Command::Export(args) => args.execute(),
        Command::Inspect(args) => args.execute(),
        Command::Validate(args) => args.execute(),
        Command::Init(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}
