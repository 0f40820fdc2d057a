//! The game-select screen.

use crate::games::GameKind;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tracing::info;

/// The arcade banner.
const LOGO: &str = "\
╔═════════════════════════════════════════════════════════╗
║                                                         ║
║   █████╗  ██████╗   ██████╗  █████╗  ██████╗  ███████╗  ║
║  ██╔══██╗ ██╔══██╗ ██╔════╝ ██╔══██╗ ██╔══██╗ ██╔════╝  ║
║  ███████║ ██████╔╝ ██║      ███████║ ██║  ██║ █████╗    ║
║  ██╔══██║ ██╔══██╗ ██║      ██╔══██║ ██║  ██║ ██╔══╝    ║
║  ██║  ██║ ██║  ██║ ╚██████╗ ██║  ██║ ██████╔╝ ███████╗  ║
║  ╚═╝  ╚═╝ ╚═╝  ╚═╝  ╚═════╝ ╚═╝  ╚═╝ ╚═════╝  ╚══════╝  ║
║                                                         ║
╚═════════════════════════════════════════════════════════╝";

/// The result of handling an input event on the menu.
#[derive(Debug, Clone, Copy)]
pub enum ScreenTransition {
    /// Stay on the menu - no state change.
    Stay,
    /// Launch the selected game.
    Launch(GameKind),
    /// Exit the arcade cleanly.
    Quit,
}

/// State for the game-select screen.
#[derive(Debug)]
pub struct GameSelectScreen {
    entries: Vec<GameKind>,
    list_state: ListState,
}

impl GameSelectScreen {
    /// Creates the screen with the first game selected.
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            entries: GameKind::iter().collect(),
            list_state: state,
        }
    }

    /// Moves selection up, wrapping.
    fn select_previous(&mut self) {
        let count = self.entries.len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down, wrapping.
    fn select_next(&mut self) {
        let count = self.entries.len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_game(&self) -> GameKind {
        let idx = self.list_state.selected().unwrap_or(0);
        self.entries[idx.min(self.entries.len() - 1)]
    }

    /// Renders the banner and game list.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(11), // Logo
                Constraint::Min(9),     // Game list
                Constraint::Length(3),  // Help
            ])
            .split(area);

        let logo = Paragraph::new(LOGO)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(logo, chunks[0]);

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(idx, game)| {
                // Alternate entry colors for the retro look.
                let color = if idx % 2 == 0 { Color::Cyan } else { Color::Green };
                ListItem::new(format!("{}. {}", idx + 1, game.label()))
                    .style(Style::default().fg(color))
            })
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Select a game"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Play | 1-7: Quick select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    /// Handles a key event and returns the resulting transition.
    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let game = self.selected_game();
                info!(game = game.label(), "Game selected");
                ScreenTransition::Launch(game)
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let idx = c.to_digit(10).unwrap_or(0) as usize;
                if (1..=self.entries.len()).contains(&idx) {
                    self.list_state.select(Some(idx - 1));
                    ScreenTransition::Launch(self.entries[idx - 1])
                } else {
                    ScreenTransition::Stay
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

impl Default for GameSelectScreen {
    fn default() -> Self {
        Self::new()
    }
}
