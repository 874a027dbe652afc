use super::super::geometry::{step_excluded, ALL_OFFSETS};
use super::super::state::Position;
use super::super::{Move, Piece};
use super::create_move;

/// Single steps only. Castling depends on the opponent's moves and is added
/// by the player view.
pub(super) fn king_moves(king: Piece, position: &Position) -> Vec<Move> {
    let from = king.square();
    ALL_OFFSETS
        .iter()
        .filter(|&&delta| !step_excluded(from, delta))
        .filter_map(|&delta| from.offset(delta))
        .filter_map(|to| create_move(king, position, to))
        .collect()
}
