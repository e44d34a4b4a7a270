//! D4 symmetry group operations for board canonicalization

use serde::{Deserialize, Serialize};

use super::board::{Cell, Position, Square};

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to apply reflection
    pub reflection: bool,
}

impl D4Transform {
    /// Get all 8 D4 transforms
    pub fn all() -> Vec<D4Transform> {
        let mut transforms = Vec::with_capacity(8);
        for rotation in [0, 90, 180, 270] {
            transforms.push(D4Transform {
                rotation,
                reflection: false,
            });
            transforms.push(D4Transform {
                rotation,
                reflection: true,
            });
        }
        transforms
    }

    /// Apply transform to a square
    pub fn transform_square(&self, square: Square) -> Square {
        let (mut row, mut col) = (square.row(), square.col());

        // Mirror across the vertical axis before rotating.
        if self.reflection {
            col = 2 - col;
        }

        // Clockwise quarter turns
        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = 2 - row;
            row = new_row;
            col = new_col;
        }

        Square::from_index(row * 3 + col)
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> D4Transform {
        if self.reflection {
            // Reflect-then-rotate elements are all involutions.
            *self
        } else {
            D4Transform {
                rotation: (360 - self.rotation) % 360,
                reflection: false,
            }
        }
    }
}

impl Position {
    /// Apply a D4 transform to the board
    #[must_use = "transform returns a new position; the original is unchanged"]
    pub fn transform(&self, t: &D4Transform) -> Self {
        let mut cells = [Cell::Empty; 9];
        for square in Square::ALL {
            cells[t.transform_square(square).index()] = self.get(square);
        }
        Position { cells }
    }

    /// Swap row 0 and row 2.
    pub fn row_flip(&mut self) {
        for col in 0..3 {
            self.cells.swap(col, 6 + col);
        }
    }

    /// Flip the board across the NW-SE diagonal.
    pub fn diag_flip(&mut self) {
        self.cells.swap(1, 3);
        self.cells.swap(2, 6);
        self.cells.swap(5, 7);
    }

    /// The eight boards visited by alternating [`diag_flip`] and
    /// [`row_flip`], starting with a diagonal flip. Each pair of flips is a
    /// quarter turn, so the last entry is the original board.
    ///
    /// [`diag_flip`]: Self::diag_flip
    /// [`row_flip`]: Self::row_flip
    pub fn symmetries(&self) -> [Position; 8] {
        let mut current = *self;
        let mut images = [*self; 8];
        for (step, image) in images.iter_mut().enumerate() {
            if step % 2 == 1 {
                current.row_flip();
            } else {
                current.diag_flip();
            }
            *image = current;
        }
        images
    }

    /// Replace the board with its canonical form: the lexicographically
    /// greatest board (with `Empty < O < X`) among its eight symmetries.
    pub fn canonicalize(&mut self) {
        let mut best = self.cells;
        for image in self.symmetries() {
            if image.cells > best {
                best = image.cells;
            }
        }
        self.cells = best;
    }

    /// Get the canonical form without modifying `self`
    ///
    /// # Examples
    ///
    /// ```
    /// use tictree::tictactoe::Position;
    ///
    /// let top_left = Position::from_moves(&[(0, 0)]).unwrap();
    /// let bottom_right = Position::from_moves(&[(2, 2)]).unwrap();
    /// assert_eq!(top_left.canonical(), bottom_right.canonical());
    /// ```
    #[must_use = "canonical returns a new position; use canonicalize to modify in place"]
    pub fn canonical(&self) -> Self {
        let mut canonical = *self;
        canonical.canonicalize();
        canonical
    }

    /// Check whether the board is already in canonical form
    pub fn is_canonical(&self) -> bool {
        self.canonical() == *self
    }

    /// Number of D4 transforms that leave the board unchanged (1, 2, 4 or 8)
    pub fn stabilizer_size(&self) -> usize {
        D4Transform::all()
            .iter()
            .filter(|t| self.transform(t) == *self)
            .count()
    }
}
