//! The arcade's games, each an independent module with a `run` entry point.

pub mod blackjack;
pub mod hangman;
pub mod mastermind;
pub mod roulette;
pub mod rps;
pub mod snake;
pub mod tictactoe;

use anyhow::Result;
use ratatui::{Terminal, backend::Backend};

/// The games on offer, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum GameKind {
    /// Tic-tac-toe with an adversarial AI.
    TicTacToe,
    /// Snake, arrow-key steering.
    Snake,
    /// Hangman in English or French.
    Hangman,
    /// Rock-paper-scissors, best of five.
    RockPaperScissors,
    /// Mastermind code breaking.
    Mastermind,
    /// Blackjack with AI seats.
    Blackjack,
    /// Single-number roulette.
    Roulette,
}

impl GameKind {
    /// Returns the menu label.
    pub fn label(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "Tic-Tac-Toe",
            GameKind::Snake => "Snake",
            GameKind::Hangman => "Hangman",
            GameKind::RockPaperScissors => "Rock Paper Scissors",
            GameKind::Mastermind => "Mastermind",
            GameKind::Blackjack => "Blackjack",
            GameKind::Roulette => "Roulette",
        }
    }
}

/// Runs the selected game on the shared terminal until it exits.
pub fn run<B: Backend>(kind: GameKind, terminal: &mut Terminal<B>) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    match kind {
        GameKind::TicTacToe => tictactoe::run(terminal),
        GameKind::Snake => snake::run(terminal),
        GameKind::Hangman => hangman::run(terminal),
        GameKind::RockPaperScissors => rps::run(terminal),
        GameKind::Mastermind => mastermind::run(terminal),
        GameKind::Blackjack => blackjack::run(terminal),
        GameKind::Roulette => roulette::run(terminal),
    }
}
