//! Level-by-level game tree construction with symmetry reduction

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::{debug, instrument};

use super::{board::Position, strategy::StrategyAssignment};
use crate::{Result, config::TreeConfig};

/// Game tree of canonical positions, one level per ply.
///
/// `levels[i]` holds the distinct canonical positions reached after `i`
/// expansions. `links[i][j]` is the set of indices into `levels[i + 1]`
/// reachable from `levels[i][j]`. There is always exactly one more level
/// than there are link layers, since the last level has no children yet.
#[derive(Debug, Clone, Serialize)]
pub struct GameTree {
    levels: Vec<Vec<Position>>,
    links: Vec<Vec<BTreeSet<usize>>>,
    strategy: StrategyAssignment,
}

impl GameTree {
    /// Build a tree from the empty board with `depth` levels of moves.
    ///
    /// # Examples
    ///
    /// ```
    /// use tictree::tictactoe::{GameTree, Strategy};
    ///
    /// let tree = GameTree::new(1, Strategy::Legal);
    /// // Center, corner and edge openings
    /// assert_eq!(tree.level_sizes(), vec![1, 3]);
    /// ```
    pub fn new(depth: usize, strategy: impl Into<StrategyAssignment>) -> Self {
        Self::with_seeds(depth, Vec::new(), strategy)
    }

    /// Build a tree starting from `seeds` instead of the empty board.
    ///
    /// Seeds are stored as level 0 exactly as given; they are not
    /// canonicalized. An empty seed list starts from the empty board.
    pub fn with_seeds(
        depth: usize,
        seeds: impl IntoIterator<Item = Position>,
        strategy: impl Into<StrategyAssignment>,
    ) -> Self {
        let mut roots: Vec<Position> = seeds.into_iter().collect();
        if roots.is_empty() {
            roots.push(Position::new());
        }

        let mut tree = GameTree {
            levels: vec![roots],
            links: Vec::new(),
            strategy: strategy.into(),
        };
        tree.extend(depth);
        tree
    }

    /// Build the tree described by `config`.
    ///
    /// # Errors
    ///
    /// Returns error if a seed move list in the configuration is invalid.
    pub fn from_config(config: &TreeConfig) -> Result<Self> {
        Ok(Self::with_seeds(
            config.depth,
            config.seed_positions()?,
            config.strategy,
        ))
    }

    /// Append `count` levels.
    pub fn extend(&mut self, count: usize) {
        for _ in 0..count {
            self.add_level();
        }
    }

    /// Add one level of moves to the game tree.
    ///
    /// Children are numbered in the order they are first produced, and a
    /// parent reaching the same canonical child through several moves links
    /// to it once.
    #[instrument(level = "debug", skip(self), fields(level = self.links.len() + 1))]
    pub fn add_level(&mut self) {
        let frontier = self.levels.last().map(Vec::as_slice).unwrap_or_default();

        let mut found: Vec<Position> = Vec::new();
        let mut index_of: HashMap<Position, usize> = HashMap::new();
        let mut links = Vec::with_capacity(frontier.len());

        for parent in frontier {
            let strategy = self.strategy.for_player(parent.to_move());
            let mut children = BTreeSet::new();
            for square in parent.legal_moves(strategy) {
                let mut child = *parent;
                child.play(square);
                child.canonicalize();

                let index = *index_of.entry(child).or_insert_with(|| {
                    found.push(child);
                    found.len() - 1
                });
                children.insert(index);
            }
            links.push(children);
        }

        debug!(
            parents = frontier.len(),
            positions = found.len(),
            edges = links.iter().map(BTreeSet::len).sum::<usize>(),
            "expanded level"
        );

        self.links.push(links);
        self.levels.push(found);
    }

    /// Positions at every level
    pub fn levels(&self) -> &[Vec<Position>] {
        &self.levels
    }

    /// Child index sets for every level but the last
    pub fn links(&self) -> &[Vec<BTreeSet<usize>>] {
        &self.links
    }

    pub fn strategy(&self) -> StrategyAssignment {
        self.strategy
    }

    /// Number of levels of moves added after the seeds
    pub fn depth(&self) -> usize {
        self.links.len()
    }

    /// Return the number of positions at each level.
    pub fn level_sizes(&self) -> Vec<usize> {
        self.levels.iter().map(Vec::len).collect()
    }

    /// Total number of links across all levels
    pub fn link_count(&self) -> usize {
        self.links.iter().flatten().map(BTreeSet::len).sum()
    }

    pub fn position(&self, level: usize, index: usize) -> Option<&Position> {
        self.levels.get(level)?.get(index)
    }

    pub fn links_from(&self, level: usize, index: usize) -> Option<&BTreeSet<usize>> {
        self.links.get(level)?.get(index)
    }
}
