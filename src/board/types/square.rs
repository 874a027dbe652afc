//! Square coordinate type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = 64;

/// Number of squares in one row (and one column).
pub const SQUARES_PER_ROW: usize = 8;

/// A validated board coordinate in `0..64`.
///
/// Index 0 is a8 and index 63 is h1: rows run from rank 8 down to rank 1,
/// columns from file a to file h.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Square(u8);

impl Square {
    /// The first square in index order.
    pub const A8: Square = Square(0);

    /// Create a square from an index, returning `None` when out of range.
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < NUM_SQUARES {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Create a square from a row (0 = rank 8) and column (0 = file a).
    #[must_use]
    pub const fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row < SQUARES_PER_ROW && column < SQUARES_PER_ROW {
            Some(Square((row * SQUARES_PER_ROW + column) as u8))
        } else {
            None
        }
    }

    /// The linear index (0-63).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row of the square, 0 being rank 8.
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / SQUARES_PER_ROW
    }

    /// Column of the square, 0 being file a.
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.0 as usize % SQUARES_PER_ROW
    }

    /// Shift the linear index by `delta`.
    ///
    /// Only bounds are checked here; callers must apply the column-wrap
    /// exclusions from [`crate::board::geometry`] first.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i32) -> Option<Square> {
        let target = self.0 as i32 + delta;
        if target >= 0 && target < NUM_SQUARES as i32 {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.column() as u8 + b'a') as char;
        let rank = SQUARES_PER_ROW - self.row();
        write!(f, "{file}{rank}")
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::OutOfBounds {
            index: index as i64,
        })
    }
}

impl TryFrom<i32> for Square {
    type Error = SquareError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(Square::new)
            .ok_or(SquareError::OutOfBounds {
                index: i64::from(index),
            })
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::try_from(usize::from(index))
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let column = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => SQUARES_PER_ROW - (bytes[1] - b'0') as usize,
            _ => return Err(invalid()),
        };

        Square::from_row_column(row, column).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_names() {
        assert_eq!(Square::new(0).map(|s| s.to_string()), Some("a8".into()));
        assert_eq!(Square::new(63).map(|s| s.to_string()), Some("h1".into()));
        assert_eq!("e2".parse::<Square>().map(Square::index), Ok(52));
        assert_eq!("e1".parse::<Square>().map(Square::index), Ok(60));
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(Square::new(64).is_none());
        assert_eq!(
            Square::try_from(-1i32),
            Err(SquareError::OutOfBounds { index: -1 })
        );
        assert_eq!(
            Square::try_from(64usize),
            Err(SquareError::OutOfBounds { index: 64 })
        );
    }

    #[test]
    fn test_invalid_notation() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_bounds() {
        let a8 = Square::new(0).unwrap();
        assert_eq!(a8.offset(-1), None);
        assert_eq!(a8.offset(9).map(Square::index), Some(9));
        let h1 = Square::new(63).unwrap();
        assert_eq!(h1.offset(1), None);
    }

    #[test]
    fn test_row_column() {
        let d4: Square = "d4".parse().unwrap();
        assert_eq!(d4.index(), 35);
        assert_eq!(d4.row(), 4);
        assert_eq!(d4.column(), 3);
    }
}
