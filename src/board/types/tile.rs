//! Board tiles: one cell of the board, empty or holding a piece.

use std::fmt;

use once_cell::sync::Lazy;

use super::piece::Piece;
use super::square::{Square, NUM_SQUARES};

/// Every empty tile, built once and shared by all boards.
static EMPTY_TILES: Lazy<[Tile; NUM_SQUARES]> = Lazy::new(|| {
    let mut tiles = [Tile::Empty(Square::A8); NUM_SQUARES];
    for (slot, square) in tiles.iter_mut().zip(Square::all()) {
        *slot = Tile::Empty(square);
    }
    tiles
});

/// One of the 64 board cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tile {
    Empty(Square),
    Occupied(Square, Piece),
}

impl Tile {
    /// Tile for `square`, occupied by `piece` when given.
    #[inline]
    #[must_use]
    pub fn new(square: Square, piece: Option<Piece>) -> Tile {
        match piece {
            Some(piece) => Tile::Occupied(square, piece),
            None => EMPTY_TILES[square.index()],
        }
    }

    #[inline]
    #[must_use]
    pub const fn square(self) -> Square {
        match self {
            Tile::Empty(square) | Tile::Occupied(square, _) => square,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Tile::Occupied(..))
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Tile::Empty(_) => None,
            Tile::Occupied(_, piece) => Some(piece),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty(_) => write!(f, "-"),
            Tile::Occupied(_, piece) => write!(f, "{piece}"),
        }
    }
}
