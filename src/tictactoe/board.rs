//! Board position representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A cell on the Tic-Tac-Toe board
///
/// Variant order is the ordering used when picking a canonical board:
/// `Empty < O < X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    O,
    X,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'x',
            Cell::O => 'o',
        }
    }

    /// Parse `x`/`o` in either case, or `.`/space for an empty cell
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A square on the board, addressed by row and column in `0..3`.
///
/// Construction is the only place coordinates are checked, so every
/// `Position` accessor taking a `Square` is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: usize,
    col: usize,
}

impl Square {
    /// The center square
    pub const CENTER: Square = Square { row: 1, col: 1 };

    /// All nine squares in row-major order
    pub const ALL: [Square; 9] = [
        Square { row: 0, col: 0 },
        Square { row: 0, col: 1 },
        Square { row: 0, col: 2 },
        Square { row: 1, col: 0 },
        Square { row: 1, col: 1 },
        Square { row: 1, col: 2 },
        Square { row: 2, col: 0 },
        Square { row: 2, col: 1 },
        Square { row: 2, col: 2 },
    ];

    /// Create a square, validating it lies on the board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSquare`] if `row` or `col` is not in `0..3`.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row < 3 && col < 3 {
            Ok(Square { row, col })
        } else {
            Err(Error::InvalidSquare { row, col })
        }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Linear cell index (`row * 3 + col`)
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    pub(crate) fn from_index(index: usize) -> Square {
        Square::ALL[index]
    }

    /// Corner squares: `row + col` is even, center excluded
    pub fn is_corner(self) -> bool {
        self != Square::CENTER && (self.row + self.col).is_multiple_of(2)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = Error;

    fn try_from((row, col): (usize, usize)) -> Result<Self> {
        Square::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A Tic-Tac-Toe position.
///
/// The only state stored is the board itself. Whose turn it is and whether
/// the game is over are recomputed from the cells on every call.
///
/// This type implements `Copy` since it's only 9 bytes, which is what makes
/// hypothetical moves cheap: evaluation works on a copy and never touches the
/// caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Position {
    pub(crate) cells: [Cell; 9],
}

impl Position {
    /// Create a new empty board (X to move)
    pub fn new() -> Self {
        Position {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a position by playing the given `(row, col)` moves in order,
    /// alternating X and O starting with whoever is to move.
    ///
    /// # Errors
    ///
    /// Returns error if a move is off the board or targets an occupied square.
    ///
    /// # Examples
    ///
    /// ```
    /// use tictree::tictactoe::{Cell, Position, Square};
    ///
    /// let position = Position::from_moves(&[(1, 1), (0, 0)]).unwrap();
    /// assert_eq!(position.get(Square::CENTER), Cell::X);
    /// assert_eq!(position.get(Square::new(0, 0).unwrap()), Cell::O);
    /// ```
    pub fn from_moves(moves: &[(usize, usize)]) -> Result<Self> {
        let mut position = Position::new();
        for &(row, col) in moves {
            position.apply_move(Square::new(row, col)?)?;
        }
        Ok(position)
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain exactly 9 cells in row-major order:
    /// `x`/`X`, `o`/`O`, and `.` or a space for empty. On a single line,
    /// spaces are empty cells. Grid separators (`|`, `-`, `+`) and line
    /// breaks are ignored, so the output of `Display` parses back.
    ///
    /// # Errors
    ///
    /// Returns error if the text does not hold exactly 9 cells or any
    /// character is invalid.
    pub fn from_string(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .lines()
            .filter(|line| !line.is_empty() && !is_separator_line(line))
            .collect();
        let chars: Vec<char> = if rows.len() == 3 {
            // Grid layout: keep blanks inside each row, they are empty cells.
            rows.iter().flat_map(|row| grid_row(row)).collect()
        } else {
            s.chars()
                .filter(|c| !matches!(c, '|' | '-' | '+' | '\n' | '\r'))
                .collect()
        };

        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Position { cells })
    }

    /// The nine cells in row-major order
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get the cell at `square`
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    /// Overwrite the cell at `square`
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.index()] = cell;
    }

    /// Check if a square is empty
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square) == Cell::Empty
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        9 - self.empty_count()
    }

    /// Get all empty squares in row-major order
    pub fn empty_squares(&self) -> Vec<Square> {
        Square::ALL
            .into_iter()
            .filter(|&square| self.is_empty(square))
            .collect()
    }

    /// The player whose turn it is: X when an odd number of cells is empty.
    pub fn to_move(&self) -> Player {
        if self.empty_count() % 2 == 1 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The player whose turn it is not
    pub fn not_to_move(&self) -> Player {
        self.to_move().opponent()
    }

    /// The current player moves on `square`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OccupiedSquare`] if the square is not empty; the board
    /// is left unchanged.
    pub fn apply_move(&mut self, square: Square) -> Result<()> {
        if !self.is_empty(square) {
            return Err(Error::OccupiedSquare {
                row: square.row(),
                col: square.col(),
            });
        }
        self.play(square);
        Ok(())
    }

    /// Place the mover's mark without checking occupancy. Callers only pass
    /// squares taken from the empty-square list.
    pub(crate) fn play(&mut self, square: Square) {
        debug_assert!(self.is_empty(square), "move onto occupied square {square}");
        let mark = self.to_move().to_cell();
        self.set(square, mark);
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_drawn(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Compact 9-character encoding, `.` for empty cells
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .map(|&c| match c {
                Cell::Empty => '.',
                other => other.to_char(),
            })
            .collect()
    }
}

fn is_separator_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| matches!(c, '-' | '+'))
}

fn grid_row(row: &str) -> Vec<char> {
    let row = row.trim_end_matches('\r');
    if row.contains('|') {
        row.split('|')
            .flat_map(|field| {
                let field = field.trim();
                if field.is_empty() {
                    vec![' ']
                } else {
                    field.chars().collect()
                }
            })
            .collect()
    } else {
        row.chars().collect()
    }
}

/// Parse a move list written as `r,c;r,c;...`.
///
/// Whitespace is ignored and an empty list is allowed. Coordinates are not
/// range checked here; [`Position::from_moves`] does that.
///
/// # Errors
///
/// Returns [`Error::InvalidMoveList`] if a move is not two comma-separated
/// integers.
pub fn parse_move_list(input: &str) -> Result<Vec<(usize, usize)>> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let invalid = |reason: String| Error::InvalidMoveList {
        input: input.to_string(),
        reason,
    };

    cleaned
        .split(';')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (row, col) = part
                .split_once(',')
                .ok_or_else(|| invalid(format!("expected 'row,col', got '{part}'")))?;
            let row = row
                .parse()
                .map_err(|_| invalid(format!("row '{row}' is not a number")))?;
            let col = col
                .parse()
                .map_err(|_| invalid(format!("column '{col}' is not a number")))?;
            Ok((row, col))
        })
        .collect()
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.encode()
    }
}

impl TryFrom<String> for Position {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Position::from_string(&value)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let [a, b, c] = [0, 1, 2].map(|col| self.cells[row * 3 + col].to_char());
            writeln!(f, "{a}|{b}|{c}")?;
            if row < 2 {
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}
