//! Perfect-play evaluation of positions

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    board::{Player, Position, Square},
    strategy::Strategy,
};

/// Game-theoretic value of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "win for {player}"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

impl Position {
    /// Return true if `player` moving on `square` would win the game.
    ///
    /// The move is tried on a copy; `self` is never modified.
    pub fn would_win(&self, square: Square, player: Player) -> bool {
        let mut hypothetical = *self;
        hypothetical.set(square, player.to_cell());
        hypothetical.has_won(player)
    }

    /// Evaluate the position reached by the player to move playing `square`.
    pub fn evaluate_move(&self, square: Square) -> Outcome {
        let mut next = *self;
        next.play(square);
        next.evaluate()
    }

    /// Evaluate this position with best play by both sides.
    ///
    /// Exhaustive minimax over the [`Strategy::Legal`] move set, without
    /// memoization. A player wins immediately when able, prefers a draw to a
    /// loss, and only loses when every move loses.
    pub fn evaluate(&self) -> Outcome {
        let moves = self.legal_moves(Strategy::Legal);
        if moves.is_empty() {
            return self.final_outcome();
        }

        let mover = self.to_move();
        let mut best = Outcome::Win(mover.opponent());
        for square in moves {
            match self.evaluate_move(square) {
                Outcome::Win(winner) if winner == mover => return Outcome::Win(winner),
                Outcome::Draw => best = Outcome::Draw,
                Outcome::Win(_) => {}
            }
        }
        best
    }

    /// Outcome of a finished game: whoever holds a line, otherwise a draw.
    fn final_outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Win(player),
            None => Outcome::Draw,
        }
    }
}
