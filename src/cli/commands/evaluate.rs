//! Evaluate command - perfect-play value of a position and of each reply

use anyhow::Result;
use clap::Parser;

use super::position_from_moves;
use crate::{
    cli::output::{print_kv, print_section},
    tictactoe::Strategy,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a position assuming perfect play")]
pub struct EvaluateArgs {
    /// Moves played from the empty board, as `row,col;row,col`
    #[arg(default_value = "")]
    pub moves: String,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let position = position_from_moves(&args.moves)?;

    print_section("Evaluation");
    print!("{position}");
    print_kv("To move", &position.to_move().to_string());
    print_kv("Outcome", &position.evaluate().to_string());

    let moves = position.legal_moves(Strategy::Legal);
    if moves.is_empty() {
        return Ok(());
    }

    print_section("Replies");
    let rational = position.legal_moves(Strategy::Rational);
    for square in moves {
        let marker = if rational.contains(&square) { " *" } else { "" };
        print_kv(
            &square.to_string(),
            &format!("{}{marker}", position.evaluate_move(square)),
        );
    }
    Ok(())
}
