//! Move representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// King and rook placement for a castling move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Castle {
    pub king: Piece,
    pub king_to: Square,
    pub rook: Piece,
    pub rook_to: Square,
}

/// One state transition.
///
/// Moves are values compared structurally, so a move generated on one board
/// matches the same move generated on an equal board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// Move to an empty square.
    Quiet { piece: Piece, to: Square },
    /// Move onto a square held by an opponent piece.
    Capture {
        piece: Piece,
        to: Square,
        captured: Piece,
    },
    /// Pawn advancing two rows from its starting row.
    DoublePawnPush { pawn: Piece, to: Square },
    /// Pawn capturing a pawn that just double-advanced beside it.
    EnPassant {
        pawn: Piece,
        to: Square,
        captured: Piece,
    },
    CastleKingside(Castle),
    CastleQueenside(Castle),
    /// Pawn advance or capture onto the promotion row.
    Promotion {
        pawn: Piece,
        to: Square,
        captured: Option<Piece>,
        promote_to: PieceKind,
    },
    /// Sentinel returned when no move matches a lookup. Never executable.
    Null,
}

impl Move {
    /// The piece that moves (the king, for castling).
    #[must_use]
    pub const fn moved_piece(&self) -> Option<Piece> {
        match *self {
            Move::Quiet { piece, .. } | Move::Capture { piece, .. } => Some(piece),
            Move::DoublePawnPush { pawn, .. }
            | Move::EnPassant { pawn, .. }
            | Move::Promotion { pawn, .. } => Some(pawn),
            Move::CastleKingside(castle) | Move::CastleQueenside(castle) => Some(castle.king),
            Move::Null => None,
        }
    }

    /// Source square of the moved piece.
    #[must_use]
    pub const fn from(&self) -> Option<Square> {
        match self.moved_piece() {
            Some(piece) => Some(piece.square()),
            None => None,
        }
    }

    /// Destination square of the moved piece.
    #[must_use]
    pub const fn to(&self) -> Option<Square> {
        match *self {
            Move::Quiet { to, .. }
            | Move::Capture { to, .. }
            | Move::DoublePawnPush { to, .. }
            | Move::EnPassant { to, .. }
            | Move::Promotion { to, .. } => Some(to),
            Move::CastleKingside(castle) | Move::CastleQueenside(castle) => Some(castle.king_to),
            Move::Null => None,
        }
    }

    /// The piece removed by this move, if any.
    #[must_use]
    pub const fn captured(&self) -> Option<Piece> {
        match *self {
            Move::Capture { captured, .. } | Move::EnPassant { captured, .. } => Some(captured),
            Move::Promotion { captured, .. } => captured,
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured().is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(self, Move::CastleKingside(_) | Move::CastleQueenside(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self, Move::EnPassant { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// The promotion choice, if this is a promotion.
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceKind> {
        match *self {
            Move::Promotion { promote_to, .. } => Some(promote_to),
            _ => None,
        }
    }

    /// The pawn move a promotion wraps: a quiet advance or a capture.
    #[must_use]
    pub(crate) const fn unpromoted(&self) -> Option<Move> {
        match *self {
            Move::Promotion {
                pawn,
                to,
                captured: Some(captured),
                ..
            } => Some(Move::Capture {
                piece: pawn,
                to,
                captured,
            }),
            Move::Promotion {
                pawn,
                to,
                captured: None,
                ..
            } => Some(Move::Quiet { piece: pawn, to }),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::CastleKingside(_) => write!(f, "O-O"),
            Move::CastleQueenside(_) => write!(f, "O-O-O"),
            Move::Null => write!(f, "--"),
            mv => {
                if let (Some(from), Some(to)) = (mv.from(), mv.to()) {
                    write!(f, "{from}{to}")?;
                }
                if let Some(kind) = mv.promotion() {
                    write!(f, "{}", kind.to_char())?;
                }
                Ok(())
            }
        }
    }
}
