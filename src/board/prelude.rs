//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::standard();
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, BoardBuilder, BoardError, Color, Move, MoveError, MoveStatus, MoveTransition, Piece,
    PieceKind, Player, Square, SquareError, Tile,
};
