//! Interactive match driver for tic-tac-toe.
//!
//! A match is a fixed number of rounds with a running score. Each round
//! alternates turns between the seats holding X and O until the rule
//! engine reports a terminal state.

use super::ai::MoveSelector;
use super::mode::{Difficulty, GameMode, MatchOptions};
use super::typestate::{GameFinished, GameInProgress, GameSetup, GameStep};
use super::ui;
use super::{Mark, Move, Outcome, Position};
use crate::terminal::{poll_key, wait_key};
use crate::ui::center_rect;
use anyhow::Result;
use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tracing::{info, instrument};

const AI_THINK_DELAY: Duration = Duration::from_millis(350);

/// Menu entry point: runs the setup screen, then the configured match.
pub fn run<B: Backend>(terminal: &mut Terminal<B>) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    if let Some(options) = setup_screen(terminal)? {
        run_match(terminal, options)?;
    }
    Ok(())
}

/// Runs a match with pre-settled options (the CLI path skips setup).
#[instrument(skip(terminal))]
pub fn run_match<B: Backend>(terminal: &mut Terminal<B>, options: MatchOptions) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    info!(
        mode = options.mode.label(),
        noise = options.noise,
        rounds = options.rounds,
        "Starting tic-tac-toe match"
    );
    MatchApp::new(options).run(terminal)
}

/// How a round ended.
enum RoundEnd {
    Finished(GameFinished),
    Quit,
}

struct MatchApp {
    options: MatchOptions,
    selector: MoveSelector,
    rng: StdRng,
    /// Wins per seat: index 0 is the human (or player 1), 1 the AI (or player 2).
    wins: [u32; 2],
    draws: u32,
}

impl MatchApp {
    fn new(options: MatchOptions) -> Self {
        Self {
            options,
            selector: MoveSelector::new(options.noise),
            rng: StdRng::from_entropy(),
            wins: [0, 0],
            draws: 0,
        }
    }

    fn seat_labels(&self) -> [&'static str; 2] {
        match self.options.mode {
            GameMode::VsAi => ["You", "AI"],
            GameMode::PassAndPlay => ["Player 1", "Player 2"],
        }
    }

    /// Seat index holding X this round. In vs-AI mode the X seat
    /// alternates between rounds so the AI also gets opening moves.
    fn x_seat(&self, round: u32) -> usize {
        match self.options.mode {
            GameMode::PassAndPlay => 0,
            GameMode::VsAi => {
                let ai_holds_x = self.options.ai_first ^ (round % 2 == 1);
                usize::from(ai_holds_x)
            }
        }
    }

    fn seat_of(&self, mark: Mark, round: u32) -> usize {
        match mark {
            Mark::X => self.x_seat(round),
            Mark::O => 1 - self.x_seat(round),
        }
    }

    fn is_ai(&self, seat: usize) -> bool {
        self.options.mode == GameMode::VsAi && seat == 1
    }

    fn score_line(&self, round: u32) -> String {
        let [a, b] = self.seat_labels();
        format!(
            "{} {} - {} {}   Round {}/{}",
            a,
            self.wins[0],
            self.wins[1],
            b,
            round + 1,
            self.options.rounds
        )
    }

    fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
        for round in 0..self.options.rounds {
            match self.play_round(terminal, round)? {
                RoundEnd::Quit => return Ok(()),
                RoundEnd::Finished(finished) => {
                    let banner = match finished.outcome() {
                        Outcome::Winner(mark) => {
                            let seat = self.seat_of(*mark, round);
                            self.wins[seat] += 1;
                            format!("{} ({}) wins the round!", self.seat_labels()[seat], mark)
                        }
                        Outcome::Draw => {
                            self.draws += 1;
                            "It's a tie!".to_string()
                        }
                    };
                    info!(round, moves = finished.history().len(), %banner, "Round over");

                    terminal.draw(|f| {
                        ui::draw(
                            f,
                            finished.board(),
                            None,
                            &self.score_line(round),
                            &format!("{banner}  Press any key..."),
                        )
                    })?;
                    if wait_key()?.code == KeyCode::Esc {
                        return Ok(());
                    }
                }
            }
        }

        self.summary_screen(terminal)
    }

    fn play_round<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        round: u32,
    ) -> Result<RoundEnd>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
        let mut game = GameSetup::new().start(Mark::X);
        let mut cursor = Position::Center;
        let mut notice: Option<String> = None;

        loop {
            let mark = game.to_move();
            let seat = self.seat_of(mark, round);
            let ai_turn = self.is_ai(seat);

            let status = if ai_turn {
                "AI is thinking...".to_string()
            } else {
                let hint = format!(
                    "{} ({}) to move - press 1-9 or arrows + Enter, Esc for menu",
                    self.seat_labels()[seat],
                    mark
                );
                match notice.take() {
                    Some(n) => format!("{n}  {hint}"),
                    None => hint,
                }
            };

            let shown_cursor = (!ai_turn).then_some(cursor);
            terminal.draw(|f| {
                ui::draw(f, game.board(), shown_cursor, &self.score_line(round), &status)
            })?;

            if ai_turn {
                std::thread::sleep(AI_THINK_DELAY);
                let pos = self.selector.select_move(game.board(), mark, &mut self.rng)?;
                match apply(game, mark, pos)? {
                    Applied::InProgress(g) => game = g,
                    Applied::Finished(f) => return Ok(RoundEnd::Finished(f)),
                    Applied::Rejected(_, message) => {
                        anyhow::bail!("AI selected an illegal move: {message}")
                    }
                }
                continue;
            }

            let Some(key) = poll_key(Duration::from_millis(100))? else {
                continue;
            };

            let chosen = match key.code {
                KeyCode::Esc => return Ok(RoundEnd::Quit),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    c.to_digit(10).and_then(Position::from_digit)
                }
                KeyCode::Enter | KeyCode::Char(' ') => Some(cursor),
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    cursor = move_cursor(cursor, key.code);
                    None
                }
                _ => None,
            };

            if let Some(pos) = chosen {
                match apply(game, mark, pos)? {
                    Applied::InProgress(g) => {
                        cursor = pos;
                        game = g;
                    }
                    Applied::Finished(f) => return Ok(RoundEnd::Finished(f)),
                    Applied::Rejected(g, message) => {
                        // Invalid input re-prompts without consuming the turn.
                        notice = Some(message);
                        game = g;
                    }
                }
            }
        }
    }

    fn summary_screen<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
        let [a, b] = self.seat_labels();
        let verdict = if self.wins[0] > self.wins[1] {
            format!("{a} wins the match!")
        } else if self.wins[1] > self.wins[0] {
            format!("{b} wins the match!")
        } else {
            "The match is a draw!".to_string()
        };
        let text = format!(
            "Final: {} {} - {} {} ({} drawn)\n\n{}\n\nPress any key to return...",
            a, self.wins[0], self.wins[1], b, self.draws, verdict
        );

        terminal.draw(|f| {
            let area = center_rect(f.area(), 50, 8);
            let paragraph = Paragraph::new(text.as_str())
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Match over"));
            f.render_widget(paragraph, area);
        })?;
        wait_key()?;
        Ok(())
    }
}

/// Result of attempting a move.
enum Applied {
    InProgress(GameInProgress),
    Finished(GameFinished),
    Rejected(GameInProgress, String),
}

/// Applies a move, keeping the game usable when the move is rejected.
fn apply(game: GameInProgress, mark: Mark, pos: Position) -> Result<Applied> {
    let action = Move::new(mark, pos);
    match game.clone().make_move(action) {
        Ok(GameStep::InProgress(g)) => Ok(Applied::InProgress(g)),
        Ok(GameStep::Finished(f)) => Ok(Applied::Finished(f)),
        Err(e) => Ok(Applied::Rejected(game, e.to_string())),
    }
}

/// Moves the board cursor with the arrow keys, clamped to the grid.
fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let idx = cursor.to_index();
    let (row, col) = (idx / 3, idx % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

// ─────────────────────────────────────────────────────────────
//  Setup screen
// ─────────────────────────────────────────────────────────────

const ROUND_CHOICES: [u32; 3] = [1, 3, 5];

/// Pre-match options picker. Returns `None` when the player backs out.
fn setup_screen<B: Backend>(terminal: &mut Terminal<B>) -> Result<Option<MatchOptions>>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut mode = GameMode::default();
    let mut difficulty = Difficulty::default();
    let mut rounds_idx = 0usize;
    let mut ai_first = false;
    let mut selected = 0usize;
    const FIELDS: usize = 5; // mode, difficulty, rounds, first move, start

    loop {
        let rows = [
            format!("Mode        : {}", mode.label()),
            match mode {
                GameMode::VsAi => format!(
                    "Difficulty  : {} (noise {:.0}%)",
                    difficulty.label(),
                    difficulty.noise() * 100.0
                ),
                GameMode::PassAndPlay => "Difficulty  : -".to_string(),
            },
            format!("Rounds      : {}", ROUND_CHOICES[rounds_idx]),
            match mode {
                GameMode::VsAi => format!(
                    "First move  : {}",
                    if ai_first { "AI" } else { "You" }
                ),
                GameMode::PassAndPlay => "First move  : Player 1".to_string(),
            },
            "Start".to_string(),
        ];

        terminal.draw(|f| {
            use ratatui::widgets::{List, ListItem, ListState};

            let area = center_rect(f.area(), 44, 9);
            let items: Vec<ListItem> = rows.iter().map(|r| ListItem::new(r.as_str())).collect();
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title("Tic-Tac-Toe"))
                .highlight_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            let mut state = ListState::default();
            state.select(Some(selected));
            f.render_stateful_widget(list, area, &mut state);

            let help = Paragraph::new("Enter: change/start | Esc: back")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            let help_area = center_rect(f.area(), 44, 1);
            let help_area = ratatui::layout::Rect {
                y: area.y + area.height,
                ..help_area
            };
            f.render_widget(help, help_area);
        })?;

        let key = wait_key()?;
        match key.code {
            KeyCode::Esc => return Ok(None),
            KeyCode::Up => selected = selected.checked_sub(1).unwrap_or(FIELDS - 1),
            KeyCode::Down => selected = (selected + 1) % FIELDS,
            KeyCode::Enter | KeyCode::Left | KeyCode::Right => match selected {
                0 => mode = mode.toggle(),
                1 => difficulty = difficulty.cycle(),
                2 => rounds_idx = (rounds_idx + 1) % ROUND_CHOICES.len(),
                3 => ai_first = !ai_first,
                _ => {
                    return Ok(Some(MatchOptions {
                        mode,
                        noise: difficulty.noise(),
                        rounds: ROUND_CHOICES[rounds_idx],
                        ai_first,
                    }));
                }
            },
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_clamps_at_edges() {
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Up),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Left),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
    }

    #[test]
    fn cursor_moves_within_grid() {
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Up),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Right),
            Position::MiddleRight
        );
    }

    #[test]
    fn x_seat_alternates_in_vs_ai() {
        let app = MatchApp::new(MatchOptions {
            mode: GameMode::VsAi,
            noise: 0.0,
            rounds: 3,
            ai_first: false,
        });
        assert_eq!(app.x_seat(0), 0);
        assert_eq!(app.x_seat(1), 1);
        assert_eq!(app.x_seat(2), 0);
    }

    #[test]
    fn pass_and_play_keeps_player_one_on_x() {
        let app = MatchApp::new(MatchOptions {
            mode: GameMode::PassAndPlay,
            noise: 0.0,
            rounds: 2,
            ai_first: false,
        });
        assert_eq!(app.x_seat(0), 0);
        assert_eq!(app.x_seat(1), 0);
    }
}
