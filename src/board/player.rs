//! Per-side views of a board: legal moves, check status and move attempts.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::geometry::step_excluded;
use super::state::Position;
use super::{Board, BoardError, Castle, Color, Move, MoveError, Piece, PieceKind, Square};

const KING_COLUMN: usize = 4;
const KINGSIDE_ROOK_COLUMN: usize = 7;
const QUEENSIDE_ROOK_COLUMN: usize = 0;

/// What happened to a move attempt.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveStatus {
    /// The move was played.
    Done,
    /// The move is not among the player's legal moves.
    IllegalMove,
    /// The move would leave the mover's own king attacked.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

/// Result of [`Player::attempt_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveTransition {
    status: MoveStatus,
    mv: Move,
    to_board: Option<Board>,
}

impl MoveTransition {
    #[must_use]
    pub const fn status(&self) -> MoveStatus {
        self.status
    }

    /// The move that was attempted.
    #[must_use]
    pub const fn attempted_move(&self) -> Move {
        self.mv
    }

    /// The new board, present only when the status is `Done`.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.to_board.as_ref()
    }

    #[must_use]
    pub fn into_board(self) -> Option<Board> {
        self.to_board
    }
}

/// Per-side data derived once when a board is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PlayerState {
    king: Piece,
    legal_moves: Vec<Move>,
    in_check: bool,
}

impl PlayerState {
    /// Locate the king, compute check status and append castling moves to
    /// the side's standard moves.
    pub(crate) fn establish(
        position: &Position,
        color: Color,
        standard_moves: &[Move],
        opponent_moves: &[Move],
    ) -> Result<PlayerState, BoardError> {
        let king = position
            .active_pieces(color)
            .iter()
            .copied()
            .find(|piece| piece.is_king())
            .ok_or(BoardError::MissingKing { color })?;
        let in_check = attacks_on(king.square(), opponent_moves);

        let mut legal_moves = standard_moves.to_vec();
        if !in_check {
            legal_moves.extend(king_castles(position, king, opponent_moves));
        }

        Ok(PlayerState {
            king,
            legal_moves,
            in_check,
        })
    }

    pub(crate) fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }
}

/// True when any of `moves` lands on `square`.
fn attacks_on(square: Square, moves: &[Move]) -> bool {
    moves.iter().any(|mv| mv.to() == Some(square))
}

/// True when `square` is a destination of `opponent_moves` or is covered
/// diagonally by an opponent pawn. Pawn captures are only generated onto
/// occupied squares, so the empty squares a king crosses need the second
/// test.
fn is_attacked(position: &Position, square: Square, by: Color, opponent_moves: &[Move]) -> bool {
    attacks_on(square, opponent_moves)
        || position
            .active_pieces(by)
            .iter()
            .filter(|piece| piece.kind() == PieceKind::Pawn)
            .any(|pawn| {
                [7, 9].iter().any(|&offset| {
                    let delta = by.direction() * offset;
                    !step_excluded(pawn.square(), delta)
                        && pawn.square().offset(delta) == Some(square)
                })
            })
}

fn king_castles(position: &Position, king: Piece, opponent_moves: &[Move]) -> Vec<Move> {
    let mut castles = Vec::new();
    let color = king.color();
    let row = color.back_row();
    let at = |column: usize| Square::from_row_column(row, column);

    if !king.is_first_move() || Some(king.square()) != at(KING_COLUMN) {
        return castles;
    }

    let unused_rook = |column: usize| {
        at(column)
            .and_then(|square| position.piece_at(square))
            .filter(|rook| rook.is_rook() && rook.color() == color && rook.is_first_move())
    };
    let clear = |columns: &[usize]| {
        columns
            .iter()
            .filter_map(|&column| at(column))
            .all(|square| position.is_empty(square))
    };
    let safe = |columns: &[usize]| {
        columns.iter().filter_map(|&column| at(column)).all(|square| {
            !is_attacked(position, square, color.opponent(), opponent_moves)
        })
    };

    if clear(&[5, 6]) && safe(&[5, 6]) {
        if let (Some(rook), Some(king_to), Some(rook_to)) =
            (unused_rook(KINGSIDE_ROOK_COLUMN), at(6), at(5))
        {
            castles.push(Move::CastleKingside(Castle {
                king,
                king_to,
                rook,
                rook_to,
            }));
        }
    }

    if clear(&[1, 2, 3]) && safe(&[2, 3]) {
        if let (Some(rook), Some(king_to), Some(rook_to)) =
            (unused_rook(QUEENSIDE_ROOK_COLUMN), at(2), at(3))
        {
            castles.push(Move::CastleQueenside(Castle {
                king,
                king_to,
                rook,
                rook_to,
            }));
        }
    }

    castles
}

/// One side's view of a board.
///
/// A player borrows its board; the opponent is found by asking the board
/// for the other side rather than by holding a reference to it.
#[derive(Clone, Copy, Debug)]
pub struct Player<'a> {
    board: &'a Board,
    color: Color,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, color: Color) -> Self {
        Player { board, color }
    }

    fn state(&self) -> &'a PlayerState {
        self.board.player_state(self.color)
    }

    /// The side this player moves.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn board(&self) -> &'a Board {
        self.board
    }

    #[must_use]
    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, self.color.opponent())
    }

    #[must_use]
    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.active_pieces(self.color)
    }

    #[must_use]
    pub fn king(&self) -> Piece {
        self.state().king
    }

    /// Candidate moves of every active piece plus available castles.
    ///
    /// Moves that would leave the king attacked are still listed; they are
    /// rejected by [`Player::attempt_move`].
    #[must_use]
    pub fn legal_moves(&self) -> &'a [Move] {
        self.state().legal_moves()
    }

    pub fn castling_moves(&self) -> impl Iterator<Item = &'a Move> {
        self.legal_moves().iter().filter(|mv| mv.is_castling())
    }

    #[must_use]
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.legal_moves().contains(mv)
    }

    /// True when an opponent move lands on this player's king.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.state().in_check
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    /// True when at least one legal move can actually be played.
    #[must_use]
    pub fn has_escape_moves(&self) -> bool {
        self.legal_moves().iter().any(|mv| self.is_playable(mv))
    }

    /// Legal moves that do not leave the king attacked.
    #[must_use]
    pub fn escape_moves(&self) -> Vec<Move> {
        self.legal_moves()
            .iter()
            .filter(|mv| self.is_playable(mv))
            .copied()
            .collect()
    }

    fn is_playable(&self, mv: &Move) -> bool {
        matches!(self.attempt_move(mv), Ok(transition) if transition.status().is_done())
    }

    /// Validate and play `mv`.
    ///
    /// Moves outside this player's legal set are `IllegalMove`; moves whose
    /// resulting board has this player's king attacked are
    /// `LeavesPlayerInCheck`. Neither changes anything. Errors are reserved
    /// for executions that cannot produce a board.
    pub fn attempt_move(&self, mv: &Move) -> Result<MoveTransition, MoveError> {
        if !self.is_move_legal(mv) {
            #[cfg(feature = "logging")]
            log::debug!("{} rejected illegal move {mv}", self.color);
            return Ok(MoveTransition {
                status: MoveStatus::IllegalMove,
                mv: *mv,
                to_board: None,
            });
        }

        let next = mv.execute(self.board)?;
        if next.player(self.color).is_in_check() {
            #[cfg(feature = "logging")]
            log::debug!("{} move {mv} leaves the king in check", self.color);
            return Ok(MoveTransition {
                status: MoveStatus::LeavesPlayerInCheck,
                mv: *mv,
                to_board: None,
            });
        }

        Ok(MoveTransition {
            status: MoveStatus::Done,
            mv: *mv,
            to_board: Some(next),
        })
    }
}
