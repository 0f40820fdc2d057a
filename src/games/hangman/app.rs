//! Screen flow and rendering for hangman.

use super::game::{HangmanRound, MAX_TRIES};
use super::words::{Language, pick};
use crate::terminal::wait_key;
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
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{info, instrument};

/// Gallows art keyed by number of wrong guesses.
const GALLOWS: [&str; 7] = [
    "",
    "  O  ",
    "  O  \n  |  ",
    "  O  \n /|  ",
    "  O  \n /|\\",
    "  O  \n /|\\\n /   ",
    "  O  \n /|\\\n / \\",
];

/// Runs hangman: language select, rounds, play-again loop.
#[instrument(skip(terminal))]
pub fn run<B: Backend>(terminal: &mut Terminal<B>) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut rng = StdRng::from_entropy();

    loop {
        let Some(language) = language_select(terminal)? else {
            return Ok(());
        };

        let entry = pick(language, &mut rng)?;
        info!(language = language.label(), "Starting hangman round");
        let mut round = HangmanRound::new(entry);

        while !round.is_over() {
            draw_round(terminal, &round, language)?;
            let key = wait_key()?;
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Char('0') => {
                    round.buy_hint();
                }
                KeyCode::Char(c) => {
                    round.guess(c);
                }
                _ => {}
            }
        }

        draw_round(terminal, &round, language)?;
        info!(won = round.is_won(), word = round.word(), "Round over");
        if !end_screen(terminal, &round, language)? {
            return Ok(());
        }
    }
}

fn language_select<B: Backend>(terminal: &mut Terminal<B>) -> Result<Option<Language>>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| {
            let area = center_rect(f.area(), 46, 9);
            let text = "Choose a language / Choisissez une langue:\n\n\
                        1. English\n\
                        2. Français\n\n\
                        Esc: back to menu";
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(Color::Green))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("H A N G M A N"));
            f.render_widget(paragraph, area);
        })?;

        match wait_key()?.code {
            KeyCode::Char('1') => return Ok(Some(Language::English)),
            KeyCode::Char('2') => return Ok(Some(Language::French)),
            KeyCode::Esc => return Ok(None),
            _ => {}
        }
    }
}

fn draw_round<B: Backend>(
    terminal: &mut Terminal<B>,
    round: &HangmanRound,
    language: Language,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    terminal.draw(|f| {
        let area = center_rect(f.area(), 56, 16);

        let mut lines: Vec<Line> = Vec::new();
        for art_line in GALLOWS[round.tries() as usize].lines() {
            lines.push(Line::styled(
                art_line.to_string(),
                Style::default().fg(Color::Red),
            ));
        }
        while lines.len() < 3 {
            lines.push(Line::from(""));
        }

        lines.push(Line::from(""));
        lines.push(Line::styled(
            round.revealed(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(""));

        let guessed: Vec<String> = round.guessed().iter().map(|c| c.to_string()).collect();
        lines.push(Line::styled(
            format!("Guessed: {}", guessed.join(", ")),
            Style::default().fg(Color::Yellow),
        ));
        lines.push(Line::styled(
            format!("Tries left: {}/{}", round.tries_left(), MAX_TRIES),
            Style::default().fg(Color::Cyan),
        ));
        lines.push(Line::from(""));

        if round.hint_used() {
            lines.push(Line::styled(
                format!("Hint: {}", round.hint()),
                Style::default().fg(Color::Cyan),
            ));
        } else {
            lines.push(Line::styled(
                "(Press 0 for a hint - costs 3 tries)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::styled(
            "Type a letter to guess. Esc: back to menu",
            Style::default().fg(Color::DarkGray),
        ));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("H A N G M A N - {}", language.label())),
            );
        f.render_widget(paragraph, area);
    })?;
    Ok(())
}

/// Shows the win/loss banner and asks to play again.
fn end_screen<B: Backend>(
    terminal: &mut Terminal<B>,
    round: &HangmanRound,
    language: Language,
) -> Result<bool>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let (verdict, color) = if round.is_won() {
        let text = match language {
            Language::English => "You win!",
            Language::French => "Gagné !",
        };
        (text.to_string(), Color::Green)
    } else {
        let lost = match language {
            Language::English => "You lose!",
            Language::French => "Perdu !",
        };
        (format!("{}  The word was: {}", lost, round.word()), Color::Red)
    };

    loop {
        terminal.draw(|f| {
            let area = center_rect(f.area(), 56, 7);
            let text = format!("{verdict}\n\nPlay again? (y/n) / Rejouer ? (o/n)");
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(paragraph, area);
        })?;

        match wait_key()?.code {
            // 'o' covers the French oui.
            KeyCode::Char('y') | KeyCode::Char('o') => return Ok(true),
            KeyCode::Char('n') | KeyCode::Esc => return Ok(false),
            _ => {}
        }
    }
}
