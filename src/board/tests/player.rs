//! Check detection, castling availability and move attempts.

use super::{diagram, diagram_builder, sq};
use crate::board::{Board, Color, Move, MoveStatus, Piece, PieceKind};

const CASTLE_ROWS: &str = "r...k..r
                           ........
                           ........
                           ........
                           ........
                           ........
                           ........
                           R...K..R";

fn castles(board: &Board, color: Color) -> Vec<Move> {
    board.player(color).castling_moves().copied().collect()
}

fn has_kingside(moves: &[Move]) -> bool {
    moves.iter().any(|mv| matches!(mv, Move::CastleKingside(_)))
}

fn has_queenside(moves: &[Move]) -> bool {
    moves.iter().any(|mv| matches!(mv, Move::CastleQueenside(_)))
}

#[test]
fn test_standard_position_is_quiet() {
    let board = Board::standard();
    let white = board.current_player();
    assert_eq!(white.color(), Color::White);
    assert_eq!(white.opponent().color(), Color::Black);
    assert_eq!(white.king().square(), sq("e1"));
    assert_eq!(white.active_pieces().len(), 16);
    assert!(!white.is_in_check());
    assert!(!white.is_checkmate());
    assert!(!white.is_stalemate());
    assert_eq!(white.escape_moves().len(), 20);
}

#[test]
fn test_pinned_piece_leaves_player_in_check() {
    let board = diagram(
        "k...r...
         ........
         ........
         ........
         ........
         ........
         ....B...
         ....K...",
        Color::White,
    );
    let white = board.current_player();
    assert!(!white.is_in_check());

    let mv = board.find_move(sq("e2"), sq("d3"));
    assert!(white.is_move_legal(&mv));
    let transition = white.attempt_move(&mv).unwrap();
    assert_eq!(transition.status(), MoveStatus::LeavesPlayerInCheck);
    assert_eq!(transition.attempted_move(), mv);
    assert!(transition.board().is_none());

    let step = board.find_move(sq("e1"), sq("d1"));
    let done = white.attempt_move(&step).unwrap();
    assert_eq!(done.status(), MoveStatus::Done);
    assert!(done.board().is_some());
}

#[test]
fn test_move_outside_legal_set_is_illegal() {
    let board = Board::standard();
    let white = board.current_player();

    let knight = board.piece_at(sq("g1")).unwrap();
    let bogus = Move::Quiet {
        piece: knight,
        to: sq("g3"),
    };
    let transition = white.attempt_move(&bogus).unwrap();
    assert_eq!(transition.status(), MoveStatus::IllegalMove);
    assert!(transition.into_board().is_none());

    let black_move = board.find_move(sq("e7"), sq("e5"));
    assert!(!black_move.is_null());
    assert_eq!(
        white.attempt_move(&black_move).unwrap().status(),
        MoveStatus::IllegalMove
    );
    assert_eq!(
        white.attempt_move(&Move::Null).unwrap().status(),
        MoveStatus::IllegalMove
    );
}

#[test]
fn test_back_rank_mate() {
    let board = diagram(
        "R.....k.
         .....ppp
         ........
         ........
         ........
         ........
         ........
         ......K.",
        Color::Black,
    );
    let black = board.current_player();
    assert!(black.is_in_check());
    assert!(black.escape_moves().is_empty());
    assert!(black.is_checkmate());
    assert!(!black.is_stalemate());
    // Pawn pushes are still generated, they just fail the check test.
    assert!(!black.legal_moves().is_empty());
    assert!(!board.white_player().is_in_check());
}

#[test]
fn test_check_with_escape_is_not_mate() {
    let board = diagram(
        "R.....k.
         .....pp.
         ........
         ........
         ........
         ........
         ........
         ......K.",
        Color::Black,
    );
    let black = board.current_player();
    assert!(black.is_in_check());
    assert!(!black.is_checkmate());
    let escapes = black.escape_moves();
    assert_eq!(escapes.len(), 1);
    assert_eq!(escapes[0].to(), Some(sq("h7")));
}

#[test]
fn test_stalemate() {
    let board = diagram(
        ".......k
         .....Q..
         ......K.
         ........
         ........
         ........
         ........
         ........",
        Color::Black,
    );
    let black = board.current_player();
    assert!(!black.is_in_check());
    assert!(!black.has_escape_moves());
    assert!(black.is_stalemate());
    assert!(!black.is_checkmate());
}

#[test]
fn test_both_castles_available() {
    let board = diagram(CASTLE_ROWS, Color::White);
    let white = castles(&board, Color::White);
    assert_eq!(white.len(), 2);
    assert!(has_kingside(&white) && has_queenside(&white));
    assert_eq!(castles(&board, Color::Black).len(), 2);

    let kingside = board.find_move(sq("e1"), sq("g1"));
    assert!(kingside.is_castling());
    assert_eq!(kingside.from(), Some(sq("e1")));
}

#[test]
fn test_moved_king_cannot_castle() {
    let board = diagram_builder(CASTLE_ROWS, Color::White)
        .piece(Piece::with_first_move(
            PieceKind::King,
            Color::White,
            sq("e1"),
            false,
        ))
        .build()
        .unwrap();
    assert!(castles(&board, Color::White).is_empty());
    assert_eq!(castles(&board, Color::Black).len(), 2);
}

#[test]
fn test_moved_rook_only_blocks_its_side() {
    let board = diagram_builder(CASTLE_ROWS, Color::White)
        .piece(Piece::with_first_move(
            PieceKind::Rook,
            Color::White,
            sq("h1"),
            false,
        ))
        .build()
        .unwrap();
    let white = castles(&board, Color::White);
    assert!(!has_kingside(&white));
    assert!(has_queenside(&white));
}

#[test]
fn test_occupied_square_blocks_castle() {
    let board = diagram(
        "r...k..r
         ........
         ........
         ........
         ........
         ........
         ........
         R...KB.R",
        Color::White,
    );
    let white = castles(&board, Color::White);
    assert_eq!(white.len(), 1);
    assert!(has_queenside(&white));

    let board = diagram(
        "r...k..r
         ........
         ........
         ........
         ........
         ........
         ........
         RN..K..R",
        Color::White,
    );
    let white = castles(&board, Color::White);
    assert_eq!(white.len(), 1);
    assert!(has_kingside(&white));
}

#[test]
fn test_attacked_transit_square_blocks_castle() {
    let board = diagram(
        "r...kr..
         ........
         ........
         ........
         ........
         ........
         ........
         R...K..R",
        Color::White,
    );
    let white = castles(&board, Color::White);
    assert!(!has_kingside(&white));
    assert!(has_queenside(&white));
}

#[test]
fn test_attack_on_b_file_does_not_block_queenside() {
    let board = diagram(
        "rr..k..r
         ........
         ........
         ........
         ........
         ........
         ........
         R...K..R",
        Color::White,
    );
    assert_eq!(castles(&board, Color::White).len(), 2);
}

#[test]
fn test_pawn_coverage_blocks_castle() {
    // The h2 pawn cannot capture on g1 yet, but it still guards it.
    let board = diagram(
        "r...k..r
         ........
         ........
         ........
         ........
         ........
         .......p
         R...K..R",
        Color::White,
    );
    let white = castles(&board, Color::White);
    assert!(!has_kingside(&white));
    assert!(has_queenside(&white));
}

#[test]
fn test_cannot_castle_out_of_check() {
    let board = diagram(
        "r...k..r
         ........
         ........
         ....r...
         ........
         ........
         ........
         R...K..R",
        Color::White,
    );
    assert!(board.white_player().is_in_check());
    assert!(castles(&board, Color::White).is_empty());
}

#[test]
fn test_king_off_home_square_cannot_castle() {
    let board = diagram(
        "r...k..r
         ........
         ........
         ........
         ........
         ........
         ........
         R..K...R",
        Color::White,
    );
    assert!(castles(&board, Color::White).is_empty());
}

#[test]
fn test_castle_attempt_is_done() {
    let board = diagram(CASTLE_ROWS, Color::White);
    let mv = board.find_move(sq("e1"), sq("c1"));
    let transition = board.current_player().attempt_move(&mv).unwrap();
    assert_eq!(transition.status(), MoveStatus::Done);

    let next = transition.into_board().unwrap();
    assert_eq!(next.side_to_move(), Color::Black);
    assert!(castles(&next, Color::White).is_empty());
    // The rook now on d1 covers d8.
    let black = castles(&next, Color::Black);
    assert_eq!(black.len(), 1);
    assert!(has_kingside(&black));
}
