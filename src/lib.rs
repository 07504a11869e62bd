//! Tic-tac-toe game engine with snapshot history and time travel.
//!
//! The engine is pure game state, independent of any UI framework:
//! a frontend holds a [`Game`], calls its operations in response to
//! input events, and re-renders from [`Game::current_board`],
//! [`Game::status`], and [`Game::history`].
//!
//! # Architecture
//!
//! - **Types**: [`Board`] snapshots, [`Player`] marks, derived [`Status`]
//! - **Rules**: winner evaluation over a single snapshot
//! - **Engine**: [`Game`] - the snapshot sequence, the current-step
//!   pointer, turn alternation, and move validation
//!
//! Every past board is kept; jumping to an earlier step is a pure view
//! change, and making a move from there discards the forward snapshots.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, Position, Status, Player};
//!
//! let mut game = Game::new();
//! game.apply_move(Position::Center)?;
//! game.apply_move(Position::TopLeft)?;
//! assert_eq!(game.status(), Status::NextTurn(Player::X));
//!
//! // Rewind to before O's reply and branch the timeline.
//! game.jump_to(1)?;
//! game.apply_move(Position::TopRight)?;
//! assert_eq!(game.history().len(), 3);
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod position;
mod rules;
mod types;

pub use engine::{Game, MoveError};
pub use position::Position;
pub use types::{Board, Player, Square, Status};
