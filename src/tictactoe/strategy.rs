//! Move-generation strategies

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{
    board::{Player, Position, Square},
    evaluation::Outcome,
};
use crate::Error;

/// Policy used to choose which moves are generated from a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// All empty squares, even if the game is over.
    All,
    /// Any empty square, unless one player has already won.
    Legal,
    /// Any move which wins, else any move which blocks, else legal.
    WinBlock,
    /// Win, else block, else center, else any corner, else legal.
    Heuristic,
    /// All optimal moves, assuming the opponent is also rational.
    Rational,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::All,
        Strategy::Legal,
        Strategy::WinBlock,
        Strategy::Heuristic,
        Strategy::Rational,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::All => "all",
            Strategy::Legal => "legal",
            Strategy::WinBlock => "winblock",
            Strategy::Heuristic => "heuristic",
            Strategy::Rational => "rational",
        }
    }

    /// One-line description of the policy
    pub fn description(self) -> &'static str {
        match self {
            Strategy::All => "All empty squares, even if the game is over.",
            Strategy::Legal => "Any empty square, unless one player has already won.",
            Strategy::WinBlock => {
                "Any move which wins, if possible, else any move which blocks, if possible, else legal."
            }
            Strategy::Heuristic => {
                "Any move which wins, if possible, else any move which blocks, if possible, \
                 else play in the center, else any corner, else any legal move."
            }
            Strategy::Rational => "All optimal moves, assuming opponent is also rational.",
        }
    }

    fn expected_names() -> String {
        Strategy::ALL
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalised)
            .ok_or_else(|| Error::UnknownStrategy {
                name: s.to_string(),
                expected: Strategy::expected_names(),
            })
    }
}

/// Strategy used by each player.
///
/// Deserializes from either a single strategy name, which applies to both
/// players, or an `{ "x": ..., "o": ... }` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "AssignmentRepr")]
pub struct StrategyAssignment {
    pub x: Strategy,
    pub o: Strategy,
}

impl StrategyAssignment {
    pub fn new(x: Strategy, o: Strategy) -> Self {
        StrategyAssignment { x, o }
    }

    /// Strategy for the given player
    pub fn for_player(&self, player: Player) -> Strategy {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl Default for StrategyAssignment {
    fn default() -> Self {
        Strategy::Legal.into()
    }
}

impl From<Strategy> for StrategyAssignment {
    fn from(strategy: Strategy) -> Self {
        StrategyAssignment::new(strategy, strategy)
    }
}

impl fmt::Display for StrategyAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.x == self.o {
            write!(f, "{}", self.x)
        } else {
            write!(f, "x={}, o={}", self.x, self.o)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AssignmentRepr {
    Both(Strategy),
    PerPlayer { x: Strategy, o: Strategy },
}

impl From<AssignmentRepr> for StrategyAssignment {
    fn from(repr: AssignmentRepr) -> Self {
        match repr {
            AssignmentRepr::Both(strategy) => strategy.into(),
            AssignmentRepr::PerPlayer { x, o } => StrategyAssignment::new(x, o),
        }
    }
}

impl Position {
    /// Return the moves offered by `strategy`, in row-major order.
    ///
    /// Every strategy except [`Strategy::All`] offers nothing once a player
    /// has won.
    pub fn legal_moves(&self, strategy: Strategy) -> Vec<Square> {
        if strategy != Strategy::All && self.winner().is_some() {
            return Vec::new();
        }

        let moves = self.empty_squares();
        match strategy {
            Strategy::All | Strategy::Legal => moves,
            Strategy::WinBlock => self.forcing_moves(&moves).unwrap_or(moves),
            Strategy::Heuristic => self
                .forcing_moves(&moves)
                .or_else(|| self.positional_moves(&moves))
                .unwrap_or(moves),
            Strategy::Rational => self.rational_moves(moves),
        }
    }

    /// Moves that win for the mover, else moves that block the opponent's
    /// immediate win.
    fn forcing_moves(&self, moves: &[Square]) -> Option<Vec<Square>> {
        let mover = self.to_move();
        let matching = |player: Player| {
            let found: Vec<Square> = moves
                .iter()
                .copied()
                .filter(|&square| self.would_win(square, player))
                .collect();
            (!found.is_empty()).then_some(found)
        };
        matching(mover).or_else(|| matching(mover.opponent()))
    }

    /// The center if it is free, else any free corner.
    fn positional_moves(&self, moves: &[Square]) -> Option<Vec<Square>> {
        if self.is_empty(Square::CENTER) {
            return Some(vec![Square::CENTER]);
        }
        let corners: Vec<Square> = moves.iter().copied().filter(|s| s.is_corner()).collect();
        (!corners.is_empty()).then_some(corners)
    }

    fn rational_moves(&self, moves: Vec<Square>) -> Vec<Square> {
        let mover = self.to_move();
        let outcomes: Vec<Outcome> = moves.iter().map(|&m| self.evaluate_move(m)).collect();

        let best = if outcomes.contains(&Outcome::Win(mover)) {
            Outcome::Win(mover)
        } else if outcomes.contains(&Outcome::Draw) {
            Outcome::Draw
        } else {
            Outcome::Win(mover.opponent())
        };

        moves
            .into_iter()
            .zip(outcomes)
            .filter(|&(_, outcome)| outcome == best)
            .map(|(square, _)| square)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(moves: &[(usize, usize)]) -> Position {
        Position::from_moves(moves).unwrap()
    }

    fn squares(coords: &[(usize, usize)]) -> Vec<Square> {
        coords
            .iter()
            .map(|&(r, c)| Square::new(r, c).unwrap())
            .collect()
    }

    #[test]
    fn strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
            assert_eq!(strategy.to_string(), strategy.name());
        }
        assert_eq!(" WinBlock ".parse::<Strategy>().unwrap(), Strategy::WinBlock);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = "random".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, Error::UnknownStrategy { .. }));
        assert!(err.to_string().contains("heuristic"));
    }

    #[test]
    fn assignment_from_single_strategy() {
        let assignment = StrategyAssignment::from(Strategy::Rational);
        assert_eq!(assignment.for_player(Player::X), Strategy::Rational);
        assert_eq!(assignment.for_player(Player::O), Strategy::Rational);
        assert_eq!(assignment.to_string(), "rational");
    }

    #[test]
    fn assignment_deserializes_both_forms() {
        let single: StrategyAssignment = serde_json::from_str("\"heuristic\"").unwrap();
        assert_eq!(single, Strategy::Heuristic.into());

        let split: StrategyAssignment =
            serde_json::from_str(r#"{"x": "rational", "o": "winblock"}"#).unwrap();
        assert_eq!(split, StrategyAssignment::new(Strategy::Rational, Strategy::WinBlock));
        assert_eq!(split.to_string(), "x=rational, o=winblock");

        let written = serde_json::to_string(&split).unwrap();
        let reread: StrategyAssignment = serde_json::from_str(&written).unwrap();
        assert_eq!(reread, split);

        assert!(serde_json::from_str::<StrategyAssignment>("\"minimax\"").is_err());
    }

    #[test]
    fn center_opening() {
        let board = pos(&[(1, 1)]);
        let everything = squares(&[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]);
        let corners = squares(&[(0, 0), (0, 2), (2, 0), (2, 2)]);
        assert_eq!(board.legal_moves(Strategy::All), everything);
        assert_eq!(board.legal_moves(Strategy::Legal), everything);
        assert_eq!(board.legal_moves(Strategy::WinBlock), everything);
        assert_eq!(board.legal_moves(Strategy::Heuristic), corners);
        assert_eq!(board.legal_moves(Strategy::Rational), corners);
    }

    #[test]
    fn corner_opening() {
        let board = pos(&[(0, 0)]);
        assert_eq!(board.legal_moves(Strategy::Legal).len(), 8);
        assert_eq!(board.legal_moves(Strategy::WinBlock).len(), 8);
        assert_eq!(board.legal_moves(Strategy::Heuristic), vec![Square::CENTER]);
        assert_eq!(board.legal_moves(Strategy::Rational), vec![Square::CENTER]);
    }

    #[test]
    fn alternating_diagonal() {
        let board = pos(&[(0, 0), (1, 1), (2, 2)]);
        let open = squares(&[(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]);
        assert_eq!(board.legal_moves(Strategy::All), open);
        assert_eq!(board.legal_moves(Strategy::Legal), open);
        assert_eq!(board.legal_moves(Strategy::WinBlock), open);
        assert_eq!(
            board.legal_moves(Strategy::Heuristic),
            squares(&[(0, 2), (2, 0)])
        );
        assert_eq!(
            board.legal_moves(Strategy::Rational),
            squares(&[(0, 1), (1, 0), (1, 2), (2, 1)])
        );
    }

    #[test]
    fn block_takes_priority_over_position() {
        // O threatens the anti-diagonal; X must block at (2, 0).
        let board = pos(&[(0, 0), (1, 1), (2, 2), (0, 2)]);
        let block = squares(&[(2, 0)]);
        assert_eq!(board.legal_moves(Strategy::Legal).len(), 5);
        assert_eq!(board.legal_moves(Strategy::WinBlock), block);
        assert_eq!(board.legal_moves(Strategy::Heuristic), block);
        assert_eq!(board.legal_moves(Strategy::Rational), block);
    }

    #[test]
    fn win_takes_priority_over_block() {
        // X can complete the top row; O also threatens the middle row.
        let board = pos(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let win = squares(&[(0, 2)]);
        assert_eq!(board.legal_moves(Strategy::WinBlock), win);
        assert_eq!(board.legal_moves(Strategy::Heuristic), win);
        assert_eq!(board.legal_moves(Strategy::Rational), win);
    }

    #[test]
    fn finished_game_offers_nothing_but_all() {
        let board = pos(&[(0, 0), (1, 1), (2, 2), (0, 2), (1, 0), (2, 0)]);
        assert!(board.has_won(Player::O));
        assert_eq!(
            board.legal_moves(Strategy::All),
            squares(&[(0, 1), (1, 2), (2, 1)])
        );
        for strategy in [
            Strategy::Legal,
            Strategy::WinBlock,
            Strategy::Heuristic,
            Strategy::Rational,
        ] {
            assert!(board.legal_moves(strategy).is_empty(), "{strategy}");
        }
    }

    #[test]
    fn full_board_has_no_moves() {
        let board = Position::from_string("xoxxoooxx").unwrap();
        for strategy in Strategy::ALL {
            assert!(board.legal_moves(strategy).is_empty(), "{strategy}");
        }
    }

    #[test]
    fn rational_keeps_all_moves_when_lost() {
        // X threatens (1, 0) and (0, 2); every O reply loses.
        let board = pos(&[(0, 0), (0, 1), (1, 1), (2, 2), (2, 0)]);
        let legal = board.legal_moves(Strategy::Legal);
        assert_eq!(board.legal_moves(Strategy::Rational), legal);
    }
}
