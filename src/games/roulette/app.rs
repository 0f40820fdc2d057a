//! Screen flow and rendering for roulette.

use super::game::{MAX_NUMBER, MIN_BET, PAYOUT, PocketColor, RouletteGame, pocket_color};
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
    widgets::{Block, Borders, Paragraph},
};
use std::time::Duration;
use tracing::{info, instrument};

const TITLE: &str = "🎰  R O U L E T T E  🎰";

fn pocket_style(number: u8) -> Style {
    let color = match pocket_color(number) {
        PocketColor::Green => Color::Green,
        PocketColor::Red => Color::Red,
        PocketColor::Black => Color::DarkGray,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Runs roulette rounds until the player leaves or stays broke.
#[instrument(skip(terminal))]
pub fn run<B: Backend>(terminal: &mut Terminal<B>) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut rng = StdRng::from_entropy();

    let Some(coins) = number_entry(
        terminal,
        &format!("How many coins to start with? (min {MIN_BET})"),
        MIN_BET,
        1_000_000,
    )?
    else {
        return Ok(());
    };
    let mut game = RouletteGame::new(coins);
    info!(coins, "Starting roulette");

    loop {
        // Offer a top-up whenever the balance can no longer cover a bet.
        while game.is_broke() {
            let Some(more) = number_entry(
                terminal,
                &format!(
                    "You have only {} coins. Buy more? (Esc to leave)",
                    game.balance()
                ),
                1,
                1_000_000,
            )?
            else {
                return Ok(());
            };
            game.top_up(more);
        }

        let Some(amount) = number_entry(
            terminal,
            &format!(
                "Balance: {} coins. Bet amount (min {MIN_BET}):",
                game.balance()
            ),
            MIN_BET,
            game.balance(),
        )?
        else {
            return Ok(());
        };
        let Some(number) = number_entry(
            terminal,
            &format!("Bet on a number (0-{MAX_NUMBER}):"),
            0,
            u32::from(MAX_NUMBER),
        )?
        else {
            return Ok(());
        };

        spin_animation(terminal, game.balance())?;

        let spin = match game.play(amount, number as u8, &mut rng) {
            Ok(spin) => spin,
            Err(e) => {
                // Entries are range-checked, so only a stale balance gets here.
                info!(error = %e, "Bet rejected");
                continue;
            }
        };
        info!(
            bet = amount,
            number,
            result = spin.result,
            winnings = spin.winnings,
            balance = game.balance(),
            "Wheel settled"
        );

        let message = if spin.winnings > 0 {
            format!(
                "You won! Number: {}. Winnings: {} coins ({PAYOUT}:1).",
                spin.result, spin.winnings
            )
        } else {
            format!(
                "You lost. Number: {}. {} coins gone.",
                spin.result, amount
            )
        };

        if !result_screen(terminal, &game, spin.result, &message)? {
            return Ok(());
        }
    }
}

/// Brief wheel flicker before the result.
fn spin_animation<B: Backend>(terminal: &mut Terminal<B>, balance: u32) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    for frame in 0..8u8 {
        let shown = (u32::from(frame) * 13 + 7) % (u32::from(MAX_NUMBER) + 1);
        terminal.draw(|f| {
            let area = center_rect(f.area(), 50, 8);
            let text = format!("Balance: {balance} coins\n\nSpinning...\n\n{shown}");
            let paragraph = Paragraph::new(text)
                .style(pocket_style(shown as u8))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(TITLE));
            f.render_widget(paragraph, area);
        })?;
        std::thread::sleep(Duration::from_millis(120));
    }
    Ok(())
}

fn result_screen<B: Backend>(
    terminal: &mut Terminal<B>,
    game: &RouletteGame,
    result: u8,
    message: &str,
) -> Result<bool>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| {
            let area = center_rect(f.area(), 60, 10);
            let text = format!(
                "Last Result: {result}\n\n{message}\n\nBalance: {} coins\n\nPlay again? (y/n)",
                game.balance()
            );
            let paragraph = Paragraph::new(text)
                .style(pocket_style(result))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(TITLE));
            f.render_widget(paragraph, area);
        })?;

        match wait_key()?.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return Ok(false),
            _ => {}
        }
    }
}

/// Digit-entry prompt clamped to `[min, max]`. `None` means Esc.
fn number_entry<B: Backend>(
    terminal: &mut Terminal<B>,
    prompt: &str,
    min: u32,
    max: u32,
) -> Result<Option<u32>>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut buffer = String::new();
    let mut notice = String::new();
    loop {
        terminal.draw(|f| {
            let area = center_rect(f.area(), 56, 9);
            let shown = if buffer.is_empty() { "_" } else { buffer.as_str() };
            let text = format!("{prompt}\n\n{shown}\n\n{notice}\nEnter: confirm | Esc: back");
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(TITLE));
            f.render_widget(paragraph, area);
        })?;

        match wait_key()?.code {
            KeyCode::Esc => return Ok(None),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() && buffer.len() < 7 => buffer.push(c),
            KeyCode::Enter => match buffer.parse::<u32>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
                _ => {
                    notice = format!("Enter a number between {min} and {max}.");
                    buffer.clear();
                }
            },
            _ => {}
        }
    }
}
