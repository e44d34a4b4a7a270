//! tictree - symmetry-reduced tic-tac-toe game trees
//!
//! Builds game trees under several move-generation strategies and writes
//! them as graphviz, text, or JSON. Also inspects single positions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictree::cli::{commands, config::CommonConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictree")]
#[command(version, about = "Symmetry-reduced tic-tac-toe game trees", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Hide progress bars
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a full-depth tree for a named strategy
    Tree(commands::tree::TreeArgs),

    /// Build a tree from a JSON configuration file
    Custom(commands::custom::CustomArgs),

    /// Show the moves each strategy generates from a position
    Moves(commands::moves::MovesArgs),

    /// Evaluate a position with perfect play
    Evaluate(commands::evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let common = CommonConfig {
        progress: !cli.no_progress,
        verbose: cli.verbose,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(common.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Tree(args) => commands::tree::execute(args, &common),
        Commands::Custom(args) => commands::custom::execute(args, &common),
        Commands::Moves(args) => commands::moves::execute(args),
        Commands::Evaluate(args) => commands::evaluate::execute(args),
    }
}
