//! Coordinate geometry over the linear 0-63 index.
//!
//! Pieces move by adding a delta to their index. A delta that is fine in
//! index space can still wrap around the left or right edge of the board,
//! so every generator first asks whether its delta is excluded from the
//! current column.

use once_cell::sync::Lazy;

use super::types::{Square, NUM_SQUARES, SQUARES_PER_ROW};

/// Knight jump offsets.
pub(crate) const KNIGHT_OFFSETS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Diagonal step offsets.
pub(crate) const DIAGONAL_OFFSETS: [i32; 4] = [-9, -7, 7, 9];

/// Orthogonal step offsets.
pub(crate) const ORTHOGONAL_OFFSETS: [i32; 4] = [-8, -1, 1, 8];

/// All eight king/queen step offsets.
pub(crate) const ALL_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

static COLUMNS: Lazy<[[bool; NUM_SQUARES]; SQUARES_PER_ROW]> = Lazy::new(|| {
    let mut table = [[false; NUM_SQUARES]; SQUARES_PER_ROW];
    for (column, members) in table.iter_mut().enumerate() {
        for square in (column..NUM_SQUARES).step_by(SQUARES_PER_ROW) {
            members[square] = true;
        }
    }
    table
});

static ROWS: Lazy<[[bool; NUM_SQUARES]; SQUARES_PER_ROW]> = Lazy::new(|| {
    let mut table = [[false; NUM_SQUARES]; SQUARES_PER_ROW];
    for (row, members) in table.iter_mut().enumerate() {
        let start = row * SQUARES_PER_ROW;
        for flag in &mut members[start..start + SQUARES_PER_ROW] {
            *flag = true;
        }
    }
    table
});

/// True when `coordinate` names a board square.
#[inline]
#[must_use]
pub fn is_valid_coordinate(coordinate: i32) -> bool {
    (0..NUM_SQUARES as i32).contains(&coordinate)
}

/// True when `square` lies in `column` (0 = file a).
#[inline]
#[must_use]
pub fn in_column(square: Square, column: usize) -> bool {
    column < SQUARES_PER_ROW && COLUMNS[column][square.index()]
}

/// True when `square` lies in `row` (0 = rank 8).
#[inline]
#[must_use]
pub fn in_row(square: Square, row: usize) -> bool {
    row < SQUARES_PER_ROW && ROWS[row][square.index()]
}

/// True when a knight jump by `delta` from `square` would wrap an edge.
#[must_use]
pub fn knight_excluded(square: Square, delta: i32) -> bool {
    (in_column(square, 0) && matches!(delta, -17 | -10 | 6 | 15))
        || (in_column(square, 1) && matches!(delta, -10 | 6))
        || (in_column(square, 6) && matches!(delta, -6 | 10))
        || (in_column(square, 7) && matches!(delta, -15 | -6 | 10 | 17))
}

/// True when a single step by `delta` from `square` would wrap an edge.
///
/// Covers sliders, the king and pawn diagonals.
#[must_use]
pub fn step_excluded(square: Square, delta: i32) -> bool {
    (in_column(square, 0) && matches!(delta, -9 | -1 | 7))
        || (in_column(square, 7) && matches!(delta, -7 | 1 | 9))
}
