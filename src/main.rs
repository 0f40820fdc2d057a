//! Terminal Arcade - unified CLI.

use anyhow::Result;
use clap::Parser;
use term_arcade::cli::{Cli, Command};
use term_arcade::games::{self, GameKind, tictactoe};
use term_arcade::menu;
use term_arcade::terminal::TerminalGuard;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    let mut guard = TerminalGuard::new()?;
    let terminal = guard.terminal_mut();

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => menu::run(terminal),
        Command::Tictactoe {
            noise,
            pass_and_play,
            rounds,
            ai_first,
        } => {
            let mode = if pass_and_play {
                tictactoe::GameMode::PassAndPlay
            } else {
                tictactoe::GameMode::VsAi
            };
            let options = tictactoe::MatchOptions {
                mode,
                noise: noise.clamp(0.0, 1.0),
                rounds: rounds.max(1),
                ai_first,
            };
            tictactoe::run_match(terminal, options)
        }
        Command::Snake => games::run(GameKind::Snake, terminal),
        Command::Hangman => games::run(GameKind::Hangman, terminal),
        Command::Rps => games::run(GameKind::RockPaperScissors, terminal),
        Command::Mastermind => games::run(GameKind::Mastermind, terminal),
        Command::Blackjack => games::run(GameKind::Blackjack, terminal),
        Command::Roulette => games::run(GameKind::Roulette, terminal),
    }
}

/// Logs go to a file with ANSI disabled - the TUI owns stdout.
fn init_tracing() -> Result<()> {
    let log_file = std::fs::File::create("term_arcade.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    info!("Terminal arcade starting");
    Ok(())
}
