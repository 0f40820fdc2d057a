//! Command-line interface for the terminal arcade.

use clap::{Parser, Subcommand};

/// Terminal Arcade - a menu of retro terminal games
#[derive(Parser, Debug)]
#[command(name = "term_arcade")]
#[command(about = "Retro terminal arcade - pick a game and play", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; opens the menu when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the game menu (the default)
    Menu,

    /// Play tic-tac-toe directly
    Tictactoe {
        /// Chance (0-1) per move that the AI ignores optimal play
        #[arg(long, default_value_t = 0.2)]
        noise: f64,

        /// Two humans share the keyboard instead of facing the AI
        #[arg(long)]
        pass_and_play: bool,

        /// Rounds in the match
        #[arg(long, default_value_t = 1)]
        rounds: u32,

        /// Give the AI the first move of round one
        #[arg(long)]
        ai_first: bool,
    },

    /// Play snake directly
    Snake,

    /// Play hangman directly
    Hangman,

    /// Play rock-paper-scissors directly
    Rps,

    /// Play mastermind directly
    Mastermind,

    /// Play blackjack directly
    Blackjack,

    /// Play roulette directly
    Roulette,
}
