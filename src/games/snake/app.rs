//! Frame loop and rendering for snake.

use super::game::{BOARD_H, BOARD_W, Direction, SnakeGame, Step};
use crate::terminal::{poll_key, wait_key};
use crate::ui::center_rect;
use anyhow::Result;
use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    Terminal,
    backend::Backend,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Delay between frames.
const FRAME_DELAY: Duration = Duration::from_millis(90);

/// Runs snake until death or Esc.
#[instrument(skip(terminal))]
pub fn run<B: Backend>(terminal: &mut Terminal<B>) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut rng = StdRng::from_entropy();
    let mut game = SnakeGame::new(&mut rng);
    let mut last_tick = Instant::now();

    info!("Starting snake");

    loop {
        terminal.draw(|f| draw(f, &game))?;

        let timeout = FRAME_DELAY.saturating_sub(last_tick.elapsed());
        if let Some(key) = poll_key(timeout)? {
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Up => game.steer(Direction::Up),
                KeyCode::Down => game.steer(Direction::Down),
                KeyCode::Left => game.steer(Direction::Left),
                KeyCode::Right => game.steer(Direction::Right),
                _ => {}
            }
        }

        if last_tick.elapsed() >= FRAME_DELAY {
            last_tick = Instant::now();
            if game.advance(&mut rng) == Step::Died {
                info!(score = game.score(), "Snake died");
                return game_over(terminal, game.score());
            }
        }
    }
}

fn draw(frame: &mut ratatui::Frame, game: &SnakeGame) {
    let area = frame.area();
    // Board plus borders, one line of title, one of score.
    let board_area = center_rect(area, BOARD_W as u16 + 2, BOARD_H as u16 + 4);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "★  S N A K E  ★",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];

    let head = game.head();
    for row in 0..BOARD_H {
        let mut spans = Vec::with_capacity(BOARD_W as usize);
        for col in 0..BOARD_W {
            let pos = super::game::Point::new(row, col);
            let span = if pos == head {
                Span::styled(
                    "■",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else if game.body().contains(&pos) {
                Span::styled("■", Style::default().fg(Color::Green))
            } else if pos == game.food() {
                Span::styled("◆", Style::default().fg(Color::Red))
            } else {
                Span::raw(" ")
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    lines.push(
        Line::from(Span::styled(
            format!("Score: {}", game.score()),
            Style::default().fg(Color::Cyan),
        ))
        .alignment(Alignment::Center),
    );

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(board, board_area);
}

fn game_over<B: Backend>(terminal: &mut Terminal<B>, score: u32) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    terminal.draw(|f| {
        let area = center_rect(f.area(), 44, 7);
        let text = format!("GAME OVER!  Score: {score}\n\nPress any key to return to the menu...");
        let paragraph = Paragraph::new(text)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Snake"));
        f.render_widget(paragraph, area);
    })?;
    wait_key()?;
    Ok(())
}
