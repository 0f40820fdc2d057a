//! Screen flow and rendering for mastermind.

use super::game::{
    CODE_LEN, DigitRange, Grade, MastermindDifficulty, generate_code, grade,
};
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

const TITLE: &str = "M A S T E R M I N D";

/// One graded attempt, kept for the feedback history.
struct Attempt {
    guess: Vec<u8>,
    grade: Grade,
}

/// Runs mastermind: setup, guess loop, result screen.
#[instrument(skip(terminal))]
pub fn run<B: Backend>(terminal: &mut Terminal<B>) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut rng = StdRng::from_entropy();

    let Some(name) = name_entry(terminal)? else {
        return Ok(());
    };
    let Some(range) = choice_screen(
        terminal,
        "Select digit range:",
        DigitRange::OneToSix.label(),
        DigitRange::ZeroToNine.label(),
    )?
    .map(|first| if first { DigitRange::OneToSix } else { DigitRange::ZeroToNine }) else {
        return Ok(());
    };
    let Some(difficulty) = choice_screen(
        terminal,
        "Select difficulty:",
        MastermindDifficulty::Easy.label(),
        MastermindDifficulty::Hard.label(),
    )?
    .map(|first| {
        if first {
            MastermindDifficulty::Easy
        } else {
            MastermindDifficulty::Hard
        }
    }) else {
        return Ok(());
    };

    let secret = generate_code(range, &mut rng);
    let max_attempts = difficulty.max_attempts();
    info!(
        player = %name,
        range = range.label(),
        max_attempts,
        "Starting mastermind"
    );

    let mut attempts: Vec<Attempt> = Vec::new();
    let mut buffer: Vec<u8> = Vec::new();
    let mut notice = format!(
        "I've chosen a {CODE_LEN}-digit code, digits {}. You have {max_attempts} attempts.",
        range.label()
    );

    while (attempts.len() as u32) < max_attempts {
        draw(
            terminal,
            &name,
            range,
            attempts.len() as u32 + 1,
            max_attempts,
            &attempts,
            &buffer,
            &notice,
        )?;

        let key = wait_key()?;
        match key.code {
            KeyCode::Esc => return Ok(()),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let digit = c as u8 - b'0';
                if !range.contains(digit) {
                    notice = format!("Digits must be in {}.", range.label());
                } else if buffer.len() < CODE_LEN {
                    buffer.push(digit);
                    notice.clear();
                }
            }
            KeyCode::Enter => {
                if buffer.len() != CODE_LEN {
                    notice = format!("Need {CODE_LEN} digits between {}.", range.label());
                    continue;
                }
                let graded = grade(&secret, &buffer);
                attempts.push(Attempt {
                    guess: std::mem::take(&mut buffer),
                    grade: graded,
                });
                if graded.is_win() {
                    break;
                }
                notice = format!("{} exact, {} partial.", graded.exact, graded.partial);
            }
            _ => {}
        }
    }

    let won = attempts.last().is_some_and(|a| a.grade.is_win());
    info!(won, attempts = attempts.len(), "Mastermind over");
    result_screen(terminal, won, attempts.len() as u32, &secret)
}

fn name_entry<B: Backend>(terminal: &mut Terminal<B>) -> Result<Option<String>>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut name = String::new();
    loop {
        terminal.draw(|f| {
            let area = center_rect(f.area(), 46, 7);
            let shown = if name.is_empty() { "_" } else { name.as_str() };
            let text = format!("Enter your name:\n\n{shown}\n\nEnter: confirm | Esc: back");
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(Color::Magenta))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(TITLE));
            f.render_widget(paragraph, area);
        })?;

        match wait_key()?.code {
            KeyCode::Esc => return Ok(None),
            KeyCode::Enter => {
                let trimmed = name.trim();
                let chosen = if trimmed.is_empty() { "Player" } else { trimmed };
                return Ok(Some(chosen.to_string()));
            }
            KeyCode::Backspace => {
                name.pop();
            }
            KeyCode::Char(c) if name.len() < 20 && !c.is_control() => name.push(c),
            _ => {}
        }
    }
}

/// Two-option picker; returns `Some(true)` for option 1, `Some(false)` for 2.
fn choice_screen<B: Backend>(
    terminal: &mut Terminal<B>,
    prompt: &str,
    first: &str,
    second: &str,
) -> Result<Option<bool>>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| {
            let area = center_rect(f.area(), 46, 8);
            let text = format!("{prompt}\n\n1) {first}\n2) {second}\n\nEsc: back");
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(TITLE));
            f.render_widget(paragraph, area);
        })?;

        match wait_key()?.code {
            KeyCode::Char('1') => return Ok(Some(true)),
            KeyCode::Char('2') => return Ok(Some(false)),
            KeyCode::Esc => return Ok(None),
            _ => {}
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw<B: Backend>(
    terminal: &mut Terminal<B>,
    name: &str,
    range: DigitRange,
    attempt: u32,
    max_attempts: u32,
    attempts: &[Attempt],
    buffer: &[u8],
    notice: &str,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    terminal.draw(|f| {
        let area = center_rect(f.area(), 56, 18);

        let mut lines: Vec<Line> = vec![
            Line::styled(
                format!("{name}   Round: {attempt}/{max_attempts}"),
                Style::default().fg(Color::Magenta),
            ),
            Line::from(""),
        ];

        for (i, a) in attempts.iter().enumerate() {
            let digits: String = a.guess.iter().map(|d| d.to_string()).collect();
            lines.push(Line::styled(
                format!(
                    "{:>2}. {}   exact: {}  partial: {}",
                    i + 1,
                    digits,
                    a.grade.exact,
                    a.grade.partial
                ),
                Style::default().fg(Color::Yellow),
            ));
        }

        lines.push(Line::from(""));
        let typed: String = buffer.iter().map(|d| d.to_string()).collect();
        lines.push(Line::styled(
            format!("Guess: {typed}{}", "_".repeat(CODE_LEN - buffer.len())),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(""));
        if !notice.is_empty() {
            lines.push(Line::styled(notice.to_string(), Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::styled(
            format!(
                "Type {CODE_LEN} digits ({}), Enter to submit. Esc: back",
                range.label()
            ),
            Style::default().fg(Color::DarkGray),
        ));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(TITLE));
        f.render_widget(paragraph, area);
    })?;
    Ok(())
}

fn result_screen<B: Backend>(
    terminal: &mut Terminal<B>,
    won: bool,
    attempts: u32,
    secret: &[u8],
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let code: String = secret.iter().map(|d| d.to_string()).collect();
    let (text, color) = if won {
        (
            format!(
                "Cracked in {attempts} {}! Code was {code}.",
                if attempts == 1 { "try" } else { "tries" }
            ),
            Color::Green,
        )
    } else {
        (format!("Out of attempts! The code was {code}."), Color::Red)
    };

    terminal.draw(|f| {
        let area = center_rect(f.area(), 56, 7);
        let paragraph = Paragraph::new(format!("{text}\n\nPress any key to return..."))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(TITLE));
        f.render_widget(paragraph, area);
    })?;
    wait_key()?;
    Ok(())
}
