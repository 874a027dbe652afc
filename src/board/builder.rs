//! Staged construction of boards.
//!
//! A builder collects a sparse placement of pieces, the pawn eligible for
//! en passant capture and the side to move. `build` validates the placement
//! and freezes it into a [`Board`], deriving both players' move sets.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, PieceKind, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(Piece::new(PieceKind::King, Color::White, e1))
//!     .piece(Piece::new(PieceKind::King, Color::Black, e8))
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.current_player().legal_moves().len(), 5);
//! ```

use super::{Board, BoardError, Color, Piece, PieceKind, Square, NUM_SQUARES};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    placement: [Option<Piece>; NUM_SQUARES],
    side_to_move: Color,
    en_passant_pawn: Option<Piece>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder with White to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            placement: [None; NUM_SQUARES],
            side_to_move: Color::White,
            en_passant_pawn: None,
        }
    }

    /// Create a builder holding the standard opening position.
    #[must_use]
    pub fn starting_position() -> Self {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut builder = Self::new();
        for color in Color::BOTH {
            for (column, &kind) in back_rank.iter().enumerate() {
                builder = builder.place(kind, color, color.back_row(), column);
                builder = builder.place(PieceKind::Pawn, color, color.pawn_start_row(), column);
            }
        }
        builder.side_to_move(Color::White)
    }

    fn place(self, kind: PieceKind, color: Color, row: usize, column: usize) -> Self {
        match Square::from_row_column(row, column) {
            Some(square) => self.piece(Piece::new(kind, color, square)),
            None => self,
        }
    }

    /// Place a piece on its square, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, piece: Piece) -> Self {
        self.placement[piece.square().index()] = Some(piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.placement[square.index()] = None;
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Record the pawn that just advanced two rows.
    #[must_use]
    pub const fn en_passant_pawn(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// The piece currently placed on `square`.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.placement[square.index()]
    }

    /// Build the board.
    ///
    /// Fails when a side has no king or several kings, or when the en passant
    /// pawn does not stand on its square.
    pub fn build(self) -> Result<Board, BoardError> {
        if let Err(err) = self.validate() {
            #[cfg(feature = "logging")]
            log::trace!("rejected board: {err}");
            return Err(err);
        }
        Board::from_parts(self.placement, self.en_passant_pawn, self.side_to_move)
    }

    fn validate(&self) -> Result<(), BoardError> {
        for color in Color::BOTH {
            let kings = self
                .placement
                .iter()
                .flatten()
                .filter(|piece| piece.is_king() && piece.color() == color)
                .count();
            match kings {
                0 => return Err(BoardError::MissingKing { color }),
                1 => {}
                _ => return Err(BoardError::MultipleKings { color }),
            }
        }

        if let Some(pawn) = self.en_passant_pawn {
            if pawn.kind() != PieceKind::Pawn || self.piece_at(pawn.square()) != Some(pawn) {
                return Err(BoardError::InvalidEnPassantPawn {
                    square: pawn.square().to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn kings() -> BoardBuilder {
        BoardBuilder::new()
            .piece(Piece::new(PieceKind::King, Color::White, sq("e1")))
            .piece(Piece::new(PieceKind::King, Color::Black, sq("e8")))
    }

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build().unwrap();
        assert_eq!(built, Board::standard());
    }

    #[test]
    fn test_missing_king() {
        let result = BoardBuilder::new()
            .piece(Piece::new(PieceKind::King, Color::White, sq("e1")))
            .build();
        assert_eq!(
            result.err(),
            Some(BoardError::MissingKing {
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_multiple_kings() {
        let result = kings()
            .piece(Piece::new(PieceKind::King, Color::White, sq("a1")))
            .build();
        assert_eq!(
            result.err(),
            Some(BoardError::MultipleKings {
                color: Color::White
            })
        );
    }

    #[test]
    fn test_en_passant_pawn_must_be_on_board() {
        let pawn = Piece::with_first_move(PieceKind::Pawn, Color::Black, sq("d5"), false);
        let result = kings().en_passant_pawn(pawn).build();
        assert!(matches!(
            result,
            Err(BoardError::InvalidEnPassantPawn { .. })
        ));

        let board = kings().piece(pawn).en_passant_pawn(pawn).build().unwrap();
        assert_eq!(board.en_passant_pawn(), Some(pawn));
    }

    #[test]
    fn test_side_to_move() {
        let board = kings().side_to_move(Color::Black).build().unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.current_player().color(), Color::Black);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(sq("a1"))
            .build()
            .unwrap();
        assert!(board.piece_at(sq("a1")).is_none());
        assert!(board.piece_at(sq("b1")).is_some());
    }
}
