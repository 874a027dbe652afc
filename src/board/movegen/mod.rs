//! Candidate move generation.
//!
//! Each piece kind enumerates the moves its geometry allows on a position.
//! Nothing here looks at whether the mover's king ends up attacked; that
//! filter runs once, centrally, when a player attempts a move.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::geometry::{ALL_OFFSETS, DIAGONAL_OFFSETS, ORTHOGONAL_OFFSETS};
use super::state::Position;
use super::{Board, Color, Move, Piece, PieceKind, Square};

impl Position {
    /// Every candidate move of every active piece of `color`.
    pub(crate) fn standard_moves(&self, color: Color) -> Vec<Move> {
        self.active_pieces(color)
            .iter()
            .flat_map(|piece| piece.candidates(self))
            .collect()
    }
}

impl Piece {
    /// Moves this piece's geometry allows on `board`, before self-check
    /// filtering.
    #[must_use]
    pub fn candidate_moves(&self, board: &Board) -> Vec<Move> {
        self.candidates(board.position())
    }

    pub(crate) fn candidates(&self, position: &Position) -> Vec<Move> {
        match self.kind() {
            PieceKind::Pawn => pawns::pawn_moves(*self, position),
            PieceKind::Knight => knights::knight_moves(*self, position),
            PieceKind::Bishop => sliders::slider_moves(*self, position, &DIAGONAL_OFFSETS),
            PieceKind::Rook => sliders::slider_moves(*self, position, &ORTHOGONAL_OFFSETS),
            PieceKind::Queen => sliders::slider_moves(*self, position, &ALL_OFFSETS),
            PieceKind::King => kings::king_moves(*self, position),
        }
    }
}

/// Quiet move onto an empty square, capture onto an opponent piece, nothing
/// onto a friendly piece.
fn create_move(piece: Piece, position: &Position, to: Square) -> Option<Move> {
    match position.piece_at(to) {
        None => Some(Move::Quiet { piece, to }),
        Some(captured) if captured.color() != piece.color() => Some(Move::Capture {
            piece,
            to,
            captured,
        }),
        Some(_) => None,
    }
}
