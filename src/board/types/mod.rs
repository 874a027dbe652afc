//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - piece values
//! - `Square` - validated linear coordinate
//! - `Tile` - one board cell
//! - `Move` and `Castle` - state transitions

mod moves;
mod piece;
mod square;
mod tile;

pub use moves::{Castle, Move};
pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, NUM_SQUARES, SQUARES_PER_ROW};
pub use tile::Tile;

pub(crate) use piece::PROMOTION_PIECES;
