use super::super::geometry::{knight_excluded, KNIGHT_OFFSETS};
use super::super::state::Position;
use super::super::{Move, Piece};
use super::create_move;

pub(super) fn knight_moves(knight: Piece, position: &Position) -> Vec<Move> {
    let from = knight.square();
    KNIGHT_OFFSETS
        .iter()
        .filter(|&&delta| !knight_excluded(from, delta))
        .filter_map(|&delta| from.offset(delta))
        .filter_map(|to| create_move(knight, position, to))
        .collect()
}
