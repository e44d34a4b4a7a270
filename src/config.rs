//! Configuration for building game trees.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    tictactoe::{Position, Strategy, StrategyAssignment},
};

/// Configuration for building a [`GameTree`](crate::tictactoe::GameTree).
///
/// Uses a builder-style API and round-trips through JSON, where `strategy`
/// may be a single name or an `{ "x": ..., "o": ... }` map and each seed is
/// a list of `[row, col]` moves played from the empty board.
///
/// # Examples
///
/// ```
/// use tictree::{TreeConfig, tictactoe::Strategy};
///
/// let config = TreeConfig::new(Strategy::Rational)
///     .with_depth(9)
///     .with_seed(vec![(1, 1)]);
/// assert_eq!(config.depth, 9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Number of levels of moves to generate
    pub depth: usize,
    /// Strategy used by each player
    pub strategy: StrategyAssignment,
    /// Seed positions as move lists; empty means the empty board
    pub seeds: Vec<Vec<(usize, usize)>>,
}

impl TreeConfig {
    /// Create a configuration using `strategy` for both players.
    ///
    /// Defaults: depth 0 and the empty board as the only seed.
    pub fn new(strategy: impl Into<StrategyAssignment>) -> Self {
        Self {
            depth: 0,
            strategy: strategy.into(),
            seeds: Vec::new(),
        }
    }

    /// Set the number of levels to generate.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Add a seed position reached by playing `moves` from the empty board.
    pub fn with_seed(mut self, moves: Vec<(usize, usize)>) -> Self {
        self.seeds.push(moves);
        self
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or does not parse.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read tree config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| Error::Io {
            operation: format!("write tree config {}", path.display()),
            source,
        })
    }

    /// Resolve the seed move lists into positions.
    ///
    /// # Errors
    ///
    /// Returns error if a seed contains an off-board or repeated move.
    pub fn seed_positions(&self) -> Result<Vec<Position>> {
        self.seeds
            .iter()
            .map(|moves| Position::from_moves(moves))
            .collect()
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new(Strategy::Legal)
    }
}
