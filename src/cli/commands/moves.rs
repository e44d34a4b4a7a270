//! Moves command - list the moves each strategy offers from a position

use anyhow::Result;
use clap::Parser;

use super::position_from_moves;
use crate::{
    cli::output::{print_kv, print_section},
    tictactoe::{Position, Square, Strategy},
};

#[derive(Parser, Debug)]
#[command(about = "Show the moves each strategy generates from a position")]
pub struct MovesArgs {
    /// Moves played from the empty board, as `row,col;row,col`
    #[arg(default_value = "")]
    pub moves: String,

    /// Only show this strategy
    #[arg(long, short = 's')]
    pub strategy: Option<Strategy>,
}

pub fn execute(args: MovesArgs) -> Result<()> {
    let position = position_from_moves(&args.moves)?;

    print_section("Position");
    print!("{position}");
    print_kv("To move", &position.to_move().to_string());
    print_kv("Encoded", &position.encode());
    print_kv("Canonical", &position.canonical().encode());
    print_kv("Symmetries", &position.stabilizer_size().to_string());
    if let Some(winner) = position.winner() {
        print_kv("Winner", &winner.to_string());
    }

    let strategies = match args.strategy {
        Some(strategy) => vec![strategy],
        None => Strategy::ALL.to_vec(),
    };

    print_section("Moves");
    for strategy in strategies {
        println!("\n{strategy}: {}", strategy.description());
        print_kv("Moves", &format_moves(&position, strategy));
    }
    Ok(())
}

fn format_moves(position: &Position, strategy: Strategy) -> String {
    let moves = position.legal_moves(strategy);
    if moves.is_empty() {
        return "(none)".to_string();
    }
    moves
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_heuristic_replies() {
        let position = position_from_moves("0,0;1,1;2,2").unwrap();
        assert_eq!(format_moves(&position, Strategy::Heuristic), "(0, 2) (2, 0)");
    }

    #[test]
    fn finished_game_has_no_legal_moves() {
        let position = position_from_moves("0,0;0,1;1,1;0,2;2,2").unwrap();
        assert_eq!(format_moves(&position, Strategy::Legal), "(none)");
        assert_eq!(format_moves(&position, Strategy::All).matches('(').count(), 4);
    }
}
