//! Chess board representation and rules.
//!
//! Boards are immutable snapshots over a linear 0-63 square index. Each
//! board derives both players' legal moves when it is built, and playing a
//! move produces a brand-new board.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, MoveStatus};
//!
//! let board = Board::standard();
//! let player = board.current_player();
//! println!("Starting position has {} legal moves", player.legal_moves().len());
//!
//! let mv = board.find_move("e2".parse().unwrap(), "e4".parse().unwrap());
//! let transition = player.attempt_move(&mv).unwrap();
//! assert_eq!(transition.status(), MoveStatus::Done);
//! ```

mod builder;
mod error;
mod execute;
pub mod geometry;
mod movegen;
mod player;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, MoveError, SquareError};
pub use player::{MoveStatus, MoveTransition, Player};
pub use state::Board;
pub use types::{
    Castle, Color, Move, Piece, PieceKind, Square, Tile, NUM_SQUARES, SQUARES_PER_ROW,
};

pub(crate) use types::PROMOTION_PIECES;
