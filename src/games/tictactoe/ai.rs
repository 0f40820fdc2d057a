//! Optimal move selection for the tic-tac-toe AI.
//!
//! Exhaustive negamax over the remaining game tree, memoized by board
//! configuration. The selector deviates to a uniformly random legal move
//! with a configured probability ("noise"), drawn per move from an
//! injected random source so games replay under a fixed seed.

use super::rules;
use super::{Board, Mark, Position, Square};
use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Error raised when a move is requested on a full board.
///
/// The game loop checks for a terminal state before asking the AI,
/// so hitting this is a programming error, not a game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// No empty square remains to move to.
    #[display("No legal move available")]
    NoLegalMove,
}

impl std::error::Error for SelectError {}

/// Move selector with a fixed noise probability and a reusable memo table.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    noise: f64,
    memo: HashMap<u32, i32>,
}

impl MoveSelector {
    /// Creates a selector with the given noise probability, clamped to [0, 1].
    pub fn new(noise: f64) -> Self {
        Self {
            noise: noise.clamp(0.0, 1.0),
            memo: HashMap::new(),
        }
    }

    /// Returns the configured noise probability.
    pub fn noise(&self) -> f64 {
        self.noise
    }

    /// Selects a move for `mark` on `board`.
    ///
    /// With probability `1 - noise` this is the optimal move (ties broken
    /// by lowest board index); with probability `noise` it is uniform over
    /// the legal moves instead.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NoLegalMove`] if the board is full.
    #[instrument(skip(self, rng))]
    pub fn select_move(
        &mut self,
        board: &Board,
        mark: Mark,
        rng: &mut impl Rng,
    ) -> Result<Position, SelectError> {
        let legal = Position::valid_moves(board);
        if legal.is_empty() {
            return Err(SelectError::NoLegalMove);
        }

        if self.noise > 0.0 && rng.gen_bool(self.noise) {
            let pos = legal[rng.gen_range(0..legal.len())];
            debug!(position = %pos, "Noise roll - playing random move");
            return Ok(pos);
        }

        let pos = best_move(board, mark, &mut self.memo).ok_or(SelectError::NoLegalMove)?;
        debug!(position = %pos, "Playing optimal move");
        Ok(pos)
    }
}

/// Returns the optimal move for `mark` on `board`, or `None` if the board
/// is full. Ties between equally good moves break to the lowest index.
pub fn optimal_move(board: &Board, mark: Mark) -> Option<Position> {
    best_move(board, mark, &mut HashMap::new())
}

fn best_move(board: &Board, mark: Mark, memo: &mut HashMap<u32, i32>) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let mut child = board.clone();
        child.set(pos, Square::Occupied(mark));
        let value = -search(&child, mark.opponent(), memo);
        // Strict comparison keeps the first (lowest-index) move on ties.
        if best.is_none_or(|(_, v)| value > v) {
            best = Some((pos, value));
        }
    }

    best.map(|(pos, _)| pos)
}

/// Negamax value of `board` from the perspective of `to_move`.
///
/// Terminal scores scale with the number of empty squares so that faster
/// wins (and slower losses) score higher. The magnitude is a function of
/// the board alone, which keeps memoized values valid at any search depth.
fn search(board: &Board, to_move: Mark, memo: &mut HashMap<u32, i32>) -> i32 {
    // A completed line can only belong to the opponent - they moved last.
    if rules::check_winner(board).is_some() {
        return -(empties(board) + 1);
    }
    if rules::is_full(board) {
        return 0;
    }

    let key = memo_key(board, to_move);
    if let Some(&value) = memo.get(&key) {
        return value;
    }

    let mut best = i32::MIN;
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let mut child = board.clone();
        child.set(pos, Square::Occupied(to_move));
        best = best.max(-search(&child, to_move.opponent(), memo));
    }

    memo.insert(key, best);
    best
}

fn empties(board: &Board) -> i32 {
    board
        .squares()
        .iter()
        .filter(|s| **s == Square::Empty)
        .count() as i32
}

fn memo_key(board: &Board, to_move: Mark) -> u32 {
    let mark_bit = match to_move {
        Mark::X => 0,
        Mark::O => 1,
    };
    (board.key() << 1) | mark_bit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: [&str; 9]) -> Board {
        let mut board = Board::new();
        for (i, s) in marks.iter().enumerate() {
            let square = match *s {
                "X" => Square::Occupied(Mark::X),
                "O" => Square::Occupied(Mark::O),
                _ => Square::Empty,
            };
            board.set(Position::from_index(i).unwrap(), square);
        }
        board
    }

    #[test]
    fn takes_immediate_win() {
        // X X . / O O . / . . .  - X to move, index 2 wins now
        let board = board_from(["X", "X", "", "O", "O", "", "", "", ""]);
        assert_eq!(optimal_move(&board, Mark::X), Some(Position::TopRight));
    }

    #[test]
    fn blocks_opposing_win() {
        // X X . / O . . / . . .  - O must block at index 2
        let board = board_from(["X", "X", "", "O", "", "", "", "", ""]);
        assert_eq!(optimal_move(&board, Mark::O), Some(Position::TopRight));
    }

    #[test]
    fn prefers_win_over_block() {
        // X X . / O O . / . . .  - O to move wins at 5 rather than block at 2
        let board = board_from(["X", "X", "", "O", "O", "", "", "", ""]);
        assert_eq!(optimal_move(&board, Mark::O), Some(Position::MiddleRight));
    }

    #[test]
    fn full_board_has_no_move() {
        let board = board_from(["X", "O", "X", "O", "X", "O", "O", "X", "O"]);
        assert_eq!(optimal_move(&board, Mark::X), None);

        let mut selector = MoveSelector::new(0.0);
        let mut rng = rand::rngs::mock::StepRng::new(0, 1);
        assert_eq!(
            selector.select_move(&board, Mark::X, &mut rng),
            Err(SelectError::NoLegalMove)
        );
    }

    #[test]
    fn opening_move_is_deterministic() {
        let board = Board::new();
        let first = optimal_move(&board, Mark::X);
        for _ in 0..3 {
            assert_eq!(optimal_move(&board, Mark::X), first);
        }
        // Ties resolve to the lowest index.
        assert_eq!(first, Some(Position::TopLeft));
    }
}
