pub mod board;
pub mod game;

pub use board::{
    Board, BoardBuilder, Color, Move, MoveStatus, MoveTransition, Piece, PieceKind, Player, Square,
    Tile,
};
pub use game::{Game, GameStatus, SharedGame};
