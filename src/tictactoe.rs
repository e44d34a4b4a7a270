//! Tic-Tac-Toe positions, strategies and symmetry-reduced game trees

pub mod board;
pub mod evaluation;
pub mod game_tree;
pub mod lines;
pub mod strategy;
pub mod symmetry;

pub use board::{Cell, Player, Position, Square, parse_move_list};
pub use evaluation::Outcome;
pub use game_tree::GameTree;
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use strategy::{Strategy, StrategyAssignment};
pub use symmetry::D4Transform;
