use super::super::geometry::step_excluded;
use super::super::state::Position;
use super::super::{Move, Piece};
use super::create_move;

/// Slide along each direction until the edge or the first occupied square.
pub(super) fn slider_moves(piece: Piece, position: &Position, directions: &[i32]) -> Vec<Move> {
    let mut moves = Vec::new();

    for &delta in directions {
        let mut current = piece.square();
        while !step_excluded(current, delta) {
            let Some(to) = current.offset(delta) else {
                break;
            };
            if let Some(mv) = create_move(piece, position, to) {
                moves.push(mv);
            }
            if !position.is_empty(to) {
                break;
            }
            current = to;
        }
    }

    moves
}
