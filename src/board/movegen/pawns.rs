use super::super::geometry::{in_row, step_excluded};
use super::super::state::Position;
use super::super::{Move, Piece, PieceKind, Square, PROMOTION_PIECES};

const FORWARD: i32 = 8;
const DOUBLE_FORWARD: i32 = 16;
const CAPTURE_OFFSETS: [i32; 2] = [7, 9];

pub(super) fn pawn_moves(pawn: Piece, position: &Position) -> Vec<Move> {
    let mut moves = Vec::new();
    let color = pawn.color();
    let direction = color.direction();
    let from = pawn.square();

    if let Some(to) = from.offset(direction * FORWARD) {
        if position.is_empty(to) {
            push_advance(&mut moves, pawn, to, None);

            let on_start_row = in_row(from, color.pawn_start_row());
            if pawn.is_first_move() && on_start_row {
                if let Some(jump) = from.offset(direction * DOUBLE_FORWARD) {
                    if position.is_empty(jump) {
                        moves.push(Move::DoublePawnPush { pawn, to: jump });
                    }
                }
            }
        }
    }

    for offset in CAPTURE_OFFSETS {
        let delta = direction * offset;
        if step_excluded(from, delta) {
            continue;
        }
        let Some(to) = from.offset(delta) else {
            continue;
        };

        match position.piece_at(to) {
            Some(target) if target.color() != color => {
                push_advance(&mut moves, pawn, to, Some(target));
            }
            Some(_) => {}
            None => {
                if let Some(captured) = en_passant_target(pawn, position, to) {
                    moves.push(Move::EnPassant {
                        pawn,
                        to,
                        captured,
                    });
                }
            }
        }
    }

    moves
}

/// The opponent pawn that double-advanced past `to`, if it sits beside us.
fn en_passant_target(pawn: Piece, position: &Position, to: Square) -> Option<Piece> {
    let candidate = position.en_passant_pawn()?;
    let beside = to.offset(-pawn.color().direction() * FORWARD)?;
    let eligible = candidate.color() != pawn.color()
        && candidate.kind() == PieceKind::Pawn
        && candidate.square() == beside;
    eligible.then_some(candidate)
}

/// Push a forward advance or diagonal capture, expanded into one promotion
/// per piece choice when it lands on the far row.
fn push_advance(moves: &mut Vec<Move>, pawn: Piece, to: Square, captured: Option<Piece>) {
    if in_row(to, pawn.color().promotion_row()) {
        moves.extend(PROMOTION_PIECES.iter().map(|&promote_to| Move::Promotion {
            pawn,
            to,
            captured,
            promote_to,
        }));
        return;
    }

    moves.push(match captured {
        Some(captured) => Move::Capture {
            piece: pawn,
            to,
            captured,
        },
        None => Move::Quiet { piece: pawn, to },
    });
}
