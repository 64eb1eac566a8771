//! POLYGON CLI - Command-line interface
//!
//! Commands:
//! - generate: Print a round-robin fixture list

mod generate;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use generate::GenerateArgs;

#[derive(Parser)]
#[command(name = "polygon")]
#[command(about = "Round-robin fixture generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate fixtures for a roster of teams
    Generate(GenerateArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so fixture output stays pipeable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::run(args),
    }
}
