//! Subcommands of the `tictree` binary

pub mod custom;
pub mod evaluate;
pub mod moves;
pub mod tree;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use super::{config::CommonConfig, output::OutputFormat};
use crate::{
    TreeConfig,
    tictactoe::{GameTree, Position, parse_move_list},
};

/// Output options shared by the tree-building commands
#[derive(Args, Debug, Clone)]
pub struct TreeOutputArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "dot")]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Build the tree described by `config`, one level at a time so progress can
/// be reported.
pub fn build_tree(config: &TreeConfig, common: &CommonConfig) -> Result<GameTree> {
    info!(depth = config.depth, strategy = %config.strategy, "building game tree");

    let mut tree = GameTree::from_config(&config.clone().with_depth(0))?;
    let progress = if common.progress {
        Some(super::output::create_level_progress(config.depth as u64)?)
    } else {
        None
    };

    for _ in 0..config.depth {
        tree.add_level();
        if let Some(pb) = &progress {
            let newest = tree.levels().last().map(Vec::len).unwrap_or(0);
            pb.set_message(format!("{newest} positions"));
            pb.inc(1);
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    info!(sizes = ?tree.level_sizes(), links = tree.link_count(), "game tree complete");
    Ok(tree)
}

/// Parse a `r,c;r,c` move list into the position it reaches.
pub fn position_from_moves(moves: &str) -> Result<Position> {
    let moves = parse_move_list(moves)?;
    Position::from_moves(&moves).context("moves do not form a valid game")
}
