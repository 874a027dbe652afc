//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece candidate move generation
//! - `execute.rs` - Move execution and resulting boards
//! - `player.rs` - Check, checkmate, stalemate, castling and move attempts
//! - `edge_cases.rs` - Special positions and lookups
//! - `proptest.rs` - Property-based tests

mod player;

use crate::board::{Board, BoardBuilder, Color, Piece, PieceKind, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square name")
}

/// Builder from an 8-line diagram, rank 8 first. `.` is empty, upper case
/// is White, lower case Black. Every piece starts with its first move.
pub(super) fn diagram_builder(diagram: &str, side: Color) -> BoardBuilder {
    let rows: Vec<&str> = diagram
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    assert_eq!(rows.len(), 8, "diagram needs 8 rows");

    let mut builder = BoardBuilder::new().side_to_move(side);
    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(cells.len(), 8, "row {row} needs 8 cells");
        for (column, c) in cells.into_iter().enumerate() {
            if c == '.' {
                continue;
            }
            let kind = PieceKind::from_char(c).expect("valid piece letter");
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let square = Square::from_row_column(row, column).expect("in range");
            builder = builder.piece(Piece::new(kind, color, square));
        }
    }
    builder
}

pub(super) fn diagram(diagram: &str, side: Color) -> Board {
    diagram_builder(diagram, side)
        .build()
        .expect("diagram is a valid board")
}
