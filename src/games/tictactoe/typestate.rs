//! Phase-specific typestate structs for tic-tac-toe.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! This encodes invariants at compile time - a `GameFinished`
//! ALWAYS has an outcome, not `Option<Outcome>`.

use super::action::{Move, MoveError};
use super::rules;
use super::types::Outcome;
use super::{Board, Mark, Position, Square};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
///
/// The board is always empty. No history, no outcome.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with the first mark (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self, first: Mark) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
///
/// Invariants enforced by type:
/// - to_move alternates
/// - No outcome yet (outcome lives in GameFinished)
#[derive(Debug, Clone)]
pub struct GameInProgress {
    board: Board,
    history: Vec<Move>,
    to_move: Mark,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Returns either a new in-progress game or a finished one.
    ///
    /// # Errors
    ///
    /// Rejects moves for the wrong mark and moves on occupied squares.
    /// Callers that need to keep the game on failure clone before calling.
    #[instrument(skip(self))]
    pub fn make_move(self, action: Move) -> Result<GameStep, MoveError> {
        if action.mark != self.to_move {
            return Err(MoveError::WrongTurn(action.mark));
        }
        if !self.board.is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }

        let mut game = self;
        game.board
            .set(action.position, Square::Occupied(action.mark));
        game.history.push(action);

        if let Some(winner) = rules::check_winner(&game.board) {
            return Ok(GameStep::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Winner(winner),
            }));
        }

        if rules::is_full(&game.board) {
            return Ok(GameStep::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Draw,
            }));
        }

        game.to_move = game.to_move.opponent();
        Ok(GameStep::InProgress(game))
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns valid positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Replays moves from an empty board with X to move.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameStep, MoveError> {
        let mut game = GameSetup::new().start(Mark::X);

        for action in moves {
            match game.make_move(*action)? {
                GameStep::InProgress(g) => game = g,
                GameStep::Finished(g) => return Ok(GameStep::Finished(g)),
            }
        }

        Ok(GameStep::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
///
/// The outcome is ALWAYS present, encoded at the type level.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Step Result
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameStep {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
