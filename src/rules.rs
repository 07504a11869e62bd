//! Winner evaluation over a board snapshot.

use crate::position::Position;
use crate::types::{Board, Player, Square};

impl Board {
    /// Checks for a winner on the board.
    ///
    /// Scans the 8 winning lines in a fixed order (rows, then columns,
    /// then diagonals) and returns the mark of the first completed line.
    /// Pure and side-effect-free.
    pub fn winner(&self) -> Option<Player> {
        const LINES: [[Position; 3]; 8] = [
            // Rows
            [Position::TopLeft, Position::TopCenter, Position::TopRight],
            [Position::MiddleLeft, Position::Center, Position::MiddleRight],
            [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
            // Columns
            [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
            [Position::TopCenter, Position::Center, Position::BottomCenter],
            [Position::TopRight, Position::MiddleRight, Position::BottomRight],
            // Diagonals
            [Position::TopLeft, Position::Center, Position::BottomRight],
            [Position::TopRight, Position::Center, Position::BottomLeft],
        ];

        for [a, b, c] in LINES {
            let occ = self.get(a);

            if occ != Square::Empty && occ == self.get(b) && occ == self.get(c) {
                return occ.player();
            }
        }

        None
    }
}
