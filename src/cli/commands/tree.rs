//! Tree command - build one of the named preset trees

use anyhow::Result;
use clap::{Parser, ValueEnum};

use super::{TreeOutputArgs, build_tree};
use crate::{
    TreeConfig,
    cli::{config::CommonConfig, output::write_tree},
    tictactoe::Strategy,
};

/// Named full-depth trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreePreset {
    /// All rational moves, up to symmetry: every well-played game
    Rational,
    /// All legal moves, up to symmetry: every possible game
    Legal,
    /// Both players win, block, take the center, then a corner: how most games go
    Heuristic,
}

impl TreePreset {
    pub fn strategy(self) -> Strategy {
        match self {
            TreePreset::Rational => Strategy::Rational,
            TreePreset::Legal => Strategy::Legal,
            TreePreset::Heuristic => Strategy::Heuristic,
        }
    }

    /// Full game (nine plies) with the preset strategy for both players
    pub fn config(self) -> TreeConfig {
        TreeConfig::new(self.strategy()).with_depth(9)
    }
}

#[derive(Parser, Debug)]
#[command(about = "Build a preset game tree")]
pub struct TreeArgs {
    /// Which tree to build
    #[arg(value_enum)]
    pub preset: TreePreset,

    #[command(flatten)]
    pub output: TreeOutputArgs,
}

pub fn execute(args: TreeArgs, common: &CommonConfig) -> Result<()> {
    let tree = build_tree(&args.preset.config(), common)?;
    write_tree(&tree, args.output.format, args.output.output.as_deref())
}
