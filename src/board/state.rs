//! Immutable board snapshots.

use std::fmt;

use super::player::{Player, PlayerState};
use super::{
    BoardBuilder, BoardError, Color, Move, Piece, PieceKind, Square, SquareError, Tile,
    NUM_SQUARES, SQUARES_PER_ROW,
};

/// Piece placement shared by move generation and the player views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Position {
    tiles: [Tile; NUM_SQUARES],
    pieces: [Vec<Piece>; 2],
    en_passant_pawn: Option<Piece>,
}

impl Position {
    fn new(placement: [Option<Piece>; NUM_SQUARES], en_passant_pawn: Option<Piece>) -> Self {
        let mut tiles = [Tile::new(Square::A8, None); NUM_SQUARES];
        for (slot, square) in tiles.iter_mut().zip(Square::all()) {
            *slot = Tile::new(square, placement[square.index()]);
        }
        let pieces = Color::BOTH.map(|color| {
            tiles
                .iter()
                .filter_map(|tile| tile.piece())
                .filter(|piece| piece.color() == color)
                .collect::<Vec<_>>()
        });
        Position {
            tiles,
            pieces,
            en_passant_pawn,
        }
    }

    #[inline]
    pub(crate) fn tile(&self, square: Square) -> Tile {
        self.tiles[square.index()]
    }

    #[inline]
    pub(crate) fn is_empty(&self, square: Square) -> bool {
        !self.tile(square).is_occupied()
    }

    #[inline]
    pub(crate) fn piece_at(&self, square: Square) -> Option<Piece> {
        self.tile(square).piece()
    }

    #[inline]
    pub(crate) fn active_pieces(&self, color: Color) -> &[Piece] {
        &self.pieces[color.index()]
    }

    #[inline]
    pub(crate) fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }
}

/// An immutable chess position.
///
/// Boards are only produced by [`BoardBuilder::build`] or by executing a
/// move. Both players' move sets, castling options and check flags are
/// derived once during construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    position: Position,
    players: [PlayerState; 2],
    side_to_move: Color,
}

impl Board {
    pub(crate) fn from_parts(
        placement: [Option<Piece>; NUM_SQUARES],
        en_passant_pawn: Option<Piece>,
        side_to_move: Color,
    ) -> Result<Board, BoardError> {
        let position = Position::new(placement, en_passant_pawn);
        let white_moves = position.standard_moves(Color::White);
        let black_moves = position.standard_moves(Color::Black);
        let white = PlayerState::establish(&position, Color::White, &white_moves, &black_moves)?;
        let black = PlayerState::establish(&position, Color::Black, &black_moves, &white_moves)?;

        Ok(Board {
            position,
            players: [white, black],
            side_to_move,
        })
    }

    /// The standard opening position, White to move.
    #[must_use]
    pub fn standard() -> Board {
        BoardBuilder::starting_position()
            .build()
            .expect("standard position has both kings")
    }

    pub(crate) fn position(&self) -> &Position {
        &self.position
    }

    pub(crate) fn player_state(&self, color: Color) -> &PlayerState {
        &self.players[color.index()]
    }

    /// The tile on `square`.
    #[inline]
    #[must_use]
    pub fn square_at(&self, square: Square) -> Tile {
        self.position.tile(square)
    }

    /// The tile at a raw coordinate, failing for anything outside 0-63.
    pub fn tile_at(&self, coordinate: usize) -> Result<Tile, SquareError> {
        Square::try_from(coordinate).map(|square| self.square_at(square))
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.piece_at(square)
    }

    /// Pieces of `color` currently on the board, in square order.
    #[must_use]
    pub fn active_pieces(&self, color: Color) -> &[Piece] {
        self.position.active_pieces(color)
    }

    #[must_use]
    pub fn white_pieces(&self) -> &[Piece] {
        self.active_pieces(Color::White)
    }

    #[must_use]
    pub fn black_pieces(&self) -> &[Piece] {
        self.active_pieces(Color::Black)
    }

    /// The pawn that double-advanced on the move that produced this board.
    #[must_use]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.position.en_passant_pawn()
    }

    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn player(&self, color: Color) -> Player<'_> {
        Player::new(self, color)
    }

    #[must_use]
    pub fn white_player(&self) -> Player<'_> {
        self.player(Color::White)
    }

    #[must_use]
    pub fn black_player(&self) -> Player<'_> {
        self.player(Color::Black)
    }

    #[must_use]
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.side_to_move)
    }

    /// Legal moves of both sides, White's first.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.players
            .iter()
            .flat_map(|player| player.legal_moves().iter())
    }

    /// Find a move by source and destination among both sides' moves.
    ///
    /// Returns [`Move::Null`] when nothing matches. For promotions the
    /// queen promotion is returned; use [`Board::find_promotion`] to pick
    /// another piece.
    #[must_use]
    pub fn find_move(&self, from: Square, to: Square) -> Move {
        self.all_legal_moves()
            .find(|mv| mv.from() == Some(from) && mv.to() == Some(to))
            .copied()
            .unwrap_or(Move::Null)
    }

    /// Find the promotion from `from` to `to` choosing `kind`.
    #[must_use]
    pub fn find_promotion(&self, from: Square, to: Square, kind: PieceKind) -> Move {
        self.all_legal_moves()
            .find(|mv| {
                mv.from() == Some(from) && mv.to() == Some(to) && mv.promotion() == Some(kind)
            })
            .copied()
            .unwrap_or(Move::Null)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in Square::all() {
            write!(f, "{:>3}", self.square_at(square).to_string())?;
            if square.column() == SQUARES_PER_ROW - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
