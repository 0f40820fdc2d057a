//! Arcade menu - the shell that dispatches to the games.
//!
//! The menu performs no game logic: it renders the list, reads a
//! selection, and hands the terminal to the chosen game's `run`
//! entry point, resuming when it returns.

mod screen;

pub use screen::{GameSelectScreen, ScreenTransition};

use crate::games;
use crate::terminal::poll_key;
use anyhow::Result;
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the menu loop until the user quits.
#[instrument(skip(terminal))]
pub fn run<B: Backend>(terminal: &mut Terminal<B>) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    info!("Entering arcade menu");
    let mut screen = GameSelectScreen::new();

    loop {
        terminal.draw(|f| screen.render(f))?;

        let Some(key) = poll_key(Duration::from_millis(100))? else {
            continue;
        };

        match screen.handle_key(key) {
            ScreenTransition::Stay => {}
            ScreenTransition::Quit => {
                info!("Leaving arcade menu");
                return Ok(());
            }
            ScreenTransition::Launch(kind) => {
                info!(game = kind.label(), "Launching game");
                // A crashing game logs and drops back to the menu rather
                // than taking the shell down with it.
                if let Err(e) = games::run(kind, terminal) {
                    error!(game = kind.label(), error = %e, "Game exited with error");
                }
                terminal.clear()?;
            }
        }
    }
}
