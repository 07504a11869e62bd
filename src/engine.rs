//! Game engine: snapshot history, turn alternation, and time travel.
//!
//! The engine keeps every board the game has passed through, plus a
//! pointer into that sequence. Jumping the pointer backwards leaves the
//! later snapshots in place; the next move branches the timeline and
//! discards them.

use crate::position::Position;
use crate::types::{Board, Player, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error that can occur when applying a move or jumping through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    CellOccupied(Position),

    /// The game already has a winner.
    #[display("Game is already won")]
    GameAlreadyWon,

    /// The requested history step does not exist.
    #[display("No history step {}", _0)]
    InvalidStep(usize),
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game with navigable move history.
///
/// Invariants:
/// - `history` is never empty; index 0 is the all-empty board.
/// - `current_step < history.len()`.
/// - The snapshot at index `i` is the result of `i` alternating moves
///   starting with [`Player::X`].
///
/// The mark to move is derived from step parity, never stored: X moves
/// when `current_step` is even.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Board snapshots, oldest first.
    history: Vec<Board>,
    /// Index of the snapshot currently in view.
    current_step: usize,
}

impl Game {
    /// Creates a new game with a single empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_step: 0,
        }
    }

    /// Places the next player's mark at the given position.
    ///
    /// If the pointer sits before the end of history (after a jump),
    /// the forward snapshots are discarded first; a new move overwrites
    /// the alternate future. On any error, history and the current step
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyWon`] if the current board has a winner.
    /// - [`MoveError::CellOccupied`] if the position is already taken.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        let board = self.history[self.current_step];

        if board.winner().is_some() {
            return Err(MoveError::GameAlreadyWon);
        }
        if !board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        if self.current_step + 1 < self.history.len() {
            let discarded = self.history.len() - self.current_step - 1;
            debug!(discarded, "discarding forward history");
            self.history.truncate(self.current_step + 1);
        }

        self.history.push(board.place(pos, self.to_move()));
        self.current_step = self.history.len() - 1;
        Ok(())
    }

    /// Moves the view to the given history step.
    ///
    /// A pure view change: no snapshots are discarded, and the turn
    /// indicator is recomputed from the step's parity.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidStep`] if `step` is out of range.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::InvalidStep(step));
        }
        self.current_step = step;
        Ok(())
    }

    /// Returns the board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// Returns the player whose turn it is at the current step.
    pub fn to_move(&self) -> Player {
        if self.current_step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the game status at the current step.
    pub fn status(&self) -> Status {
        match self.current_board().winner() {
            Some(winner) => Status::Won(winner),
            None => Status::NextTurn(self.to_move()),
        }
    }

    /// Returns all board snapshots, oldest first.
    ///
    /// The presentation layer renders one "go to" control per entry,
    /// with index 0 as the game start.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the index of the snapshot currently in view.
    pub fn current_step(&self) -> usize {
        self.current_step
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
