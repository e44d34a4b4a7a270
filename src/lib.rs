//! Symmetry-reduced Tic-Tac-Toe game trees
//!
//! This crate provides:
//! - Tic-Tac-Toe positions with win/draw detection and perfect-play evaluation
//! - Move generation under named strategies (all, legal, winblock, heuristic, rational)
//! - Canonicalization under the eight board symmetries
//! - Level-by-level game tree construction with per-level deduplication
//! - Text and graphviz rendering of trees, and a command-line front end

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod tictactoe;

pub use config::TreeConfig;
pub use error::{Error, Result};
pub use tictactoe::{GameTree, Outcome, Player, Position, Square, Strategy, StrategyAssignment};
