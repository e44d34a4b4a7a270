//! Custom command - build a tree from a JSON configuration file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::{TreeOutputArgs, build_tree};
use crate::{
    TreeConfig,
    cli::{config::CommonConfig, output::write_tree},
    tictactoe::StrategyAssignment,
};

#[derive(Parser, Debug)]
#[command(about = "Build a game tree from a configuration file")]
pub struct CustomArgs {
    /// Path to a JSON tree configuration
    #[arg(long, short = 'c')]
    pub config: PathBuf,

    /// Override the configured depth
    #[arg(long)]
    pub depth: Option<usize>,

    /// Override the configured strategy for both players
    #[arg(long)]
    pub strategy: Option<crate::tictactoe::Strategy>,

    #[command(flatten)]
    pub output: TreeOutputArgs,
}

pub fn execute(args: CustomArgs, common: &CommonConfig) -> Result<()> {
    let mut config = TreeConfig::from_json_file(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = StrategyAssignment::from(strategy);
    }

    let tree = build_tree(&config, common)?;
    write_tree(&tree, args.output.format, args.output.output.as_deref())
}
