//! Terminal Arcade - a menu of self-contained terminal mini-games.
//!
//! # Architecture
//!
//! - **Menu**: full-screen dispatch shell; selecting an entry runs that
//!   game and resumes the menu when it returns
//! - **Games**: independent modules (tic-tac-toe, snake, hangman,
//!   rock-paper-scissors, mastermind, blackjack, roulette), each with
//!   its pure logic split from its screen loop
//! - **Terminal**: one raw-mode guard shared by everything
//!
//! The structured core is tic-tac-toe: a typestate rule engine plus an
//! exhaustive-search AI that deviates randomly with configurable noise.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod games;
pub mod menu;
pub mod terminal;
pub mod ui;

// Crate-level exports - game registry
pub use games::GameKind;

// Crate-level exports - tic-tac-toe engine
pub use games::tictactoe::{
    Board, GameFinished, GameInProgress, GameSetup, GameStep, Mark, MatchOptions, Move, MoveError,
    MoveSelector, Outcome, Position, SelectError, Square,
};
