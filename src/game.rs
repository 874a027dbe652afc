//! Game sessions: the current board plus the moves that led to it.
//!
//! [`Game`] is the single-owner session a front end drives: look up a move
//! by squares, submit it, undo it. [`SharedGame`] wraps a game in a lock so
//! several threads can read board snapshots while one of them plays moves.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::board::{Board, Color, Move, MoveError, MoveStatus, PieceKind, Square};

/// Overall state of the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

#[derive(Clone, Debug)]
struct PlayedMove {
    mv: Move,
    before: Arc<Board>,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Arc<Board>,
    history: Vec<PlayedMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game from the standard opening position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::standard())
    }

    /// A game starting from an arbitrary board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Game {
            board: Arc::new(board),
            history: Vec::new(),
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A shared handle to the current board.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.history.iter().map(|played| &played.mv)
    }

    /// Look up the move from `from` to `to` and submit it.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveStatus, MoveError> {
        let mv = self.board.find_move(from, to);
        self.submit(mv)
    }

    /// Look up a promotion to `kind` and submit it.
    pub fn play_promotion(
        &mut self,
        from: Square,
        to: Square,
        kind: PieceKind,
    ) -> Result<MoveStatus, MoveError> {
        let mv = self.board.find_promotion(from, to, kind);
        self.submit(mv)
    }

    /// Attempt `mv` for the side to move, committing the result when done.
    pub fn submit(&mut self, mv: Move) -> Result<MoveStatus, MoveError> {
        let transition = self.board.current_player().attempt_move(&mv)?;
        let status = transition.status();
        if let Some(next) = transition.into_board() {
            #[cfg(feature = "logging")]
            log::debug!("{} played {mv}", self.board.side_to_move());
            let before = std::mem::replace(&mut self.board, Arc::new(next));
            self.history.push(PlayedMove { mv, before });
        }
        Ok(status)
    }

    /// Take back the last move, returning it.
    pub fn undo(&mut self) -> Option<Move> {
        let played = self.history.pop()?;
        self.board = played.before;
        Some(played.mv)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        let player = self.board.current_player();
        match (player.is_in_check(), player.has_escape_moves()) {
            (true, false) => GameStatus::Checkmate {
                winner: player.color().opponent(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::InProgress,
        }
    }
}

/// A game shared between threads.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    inner: Arc<RwLock<Game>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame {
            inner: Arc::new(RwLock::new(game)),
        }
    }

    /// The current board; stays valid after later moves.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Board> {
        self.inner.read().snapshot()
    }

    pub fn play(&self, from: Square, to: Square) -> Result<MoveStatus, MoveError> {
        self.inner.write().play(from, to)
    }

    pub fn submit(&self, mv: Move) -> Result<MoveStatus, MoveError> {
        self.inner.write().submit(mv)
    }

    pub fn undo(&self) -> Option<Move> {
        self.inner.write().undo()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.inner.read().status()
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.inner.read().history.len()
    }
}
