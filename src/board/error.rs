//! Error types for board construction and move execution.

use std::fmt;

use super::Color;

/// Error type for coordinate lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Coordinate outside 0-63
    OutOfBounds { index: i64 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { index } => {
                write!(f, "Coordinate {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for invalid board construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A side has no king on the board
    MissingKing { color: Color },
    /// A side has more than one king on the board
    MultipleKings { color: Color },
    /// The recorded en passant pawn is not a pawn standing on its square
    InvalidEnPassantPawn { square: String },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingKing { color } => write!(f, "{color} has no king on the board"),
            BoardError::MultipleKings { color } => {
                write!(f, "{color} has more than one king on the board")
            }
            BoardError::InvalidEnPassantPawn { square } => {
                write!(f, "No matching en passant pawn on {square}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for move execution failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The null move was executed
    NullMove,
    /// Executing the move produced an invalid board
    Board(BoardError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NullMove => write!(f, "Cannot execute the null move"),
            MoveError::Board(err) => write!(f, "Move produced an invalid board: {err}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::NullMove => None,
            MoveError::Board(err) => Some(err),
        }
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}
