//! Move execution.
//!
//! Executing a move never touches the source board. The mover's remaining
//! pieces and all opponent pieces are copied into a fresh builder, the moved
//! piece is placed on its destination and the new board is built. A piece
//! standing on the destination is overwritten, which is how ordinary captures
//! disappear; en passant is the one capture that removes a piece explicitly.

use super::{Board, BoardBuilder, Move, MoveError, Piece};

impl Move {
    /// Produce the board that results from playing this move on `board`.
    ///
    /// Fails with [`MoveError::NullMove`] for the null move, and with
    /// [`MoveError::Board`] when the result is not a valid board (a king
    /// was captured).
    pub fn execute(&self, board: &Board) -> Result<Board, MoveError> {
        Ok(self.stage(board)?.build()?)
    }

    /// The builder holding this move's resulting placement.
    fn stage(&self, board: &Board) -> Result<BoardBuilder, MoveError> {
        match *self {
            Move::Null => Err(MoveError::NullMove),
            Move::Quiet { piece, to } | Move::Capture { piece, to, .. } => {
                Ok(transfer(board, piece, &[piece], None).piece(piece.moved_to(to)))
            }
            Move::DoublePawnPush { pawn, to } => {
                let moved = pawn.moved_to(to);
                Ok(transfer(board, pawn, &[pawn], None)
                    .piece(moved)
                    .en_passant_pawn(moved))
            }
            Move::EnPassant { pawn, to, captured } => {
                Ok(transfer(board, pawn, &[pawn], Some(captured)).piece(pawn.moved_to(to)))
            }
            Move::CastleKingside(castle) | Move::CastleQueenside(castle) => {
                Ok(transfer(board, castle.king, &[castle.king, castle.rook], None)
                    .piece(castle.king.moved_to(castle.king_to))
                    .piece(castle.rook.moved_to(castle.rook_to)))
            }
            Move::Promotion {
                pawn,
                to,
                promote_to,
                ..
            } => {
                let base = self.unpromoted().ok_or(MoveError::NullMove)?;
                Ok(base.stage(board)?.piece(pawn.promoted(promote_to, to)))
            }
        }
    }
}

/// Copy every active piece into a new builder, leaving out the mover's
/// displaced pieces and an explicitly captured opponent piece. The opponent
/// of the mover is to move next.
fn transfer(
    board: &Board,
    mover: Piece,
    displaced: &[Piece],
    captured: Option<Piece>,
) -> BoardBuilder {
    let color = mover.color();
    let mut builder = BoardBuilder::new().side_to_move(color.opponent());

    for &piece in board.active_pieces(color) {
        if !displaced.contains(&piece) {
            builder = builder.piece(piece);
        }
    }
    for &piece in board.active_pieces(color.opponent()) {
        if Some(piece) != captured {
            builder = builder.piece(piece);
        }
    }

    builder
}
