//! Screen flow and rendering for rock-paper-scissors.

use super::game::{Hand, NEEDED, ROUNDS, RoundOutcome, decide, random_hand};
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
use std::time::Duration;
use tracing::{info, instrument};

const TITLE: &str = "R O C K   P A P E R   S C I S S O R S";

/// Runs a best-of-five match against the computer.
#[instrument(skip(terminal))]
pub fn run<B: Backend>(terminal: &mut Terminal<B>) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut rng = StdRng::from_entropy();

    let Some(name) = name_entry(terminal)? else {
        return Ok(());
    };
    info!(player = %name, "Starting rock-paper-scissors");

    let mut player_score = 0u32;
    let mut computer_score = 0u32;

    for round in 1..=ROUNDS {
        let Some(player_hand) =
            hand_prompt(terminal, &name, round, player_score, computer_score)?
        else {
            return Ok(());
        };

        countdown(terminal, &name, round, player_score, computer_score)?;

        let computer_hand = random_hand(&mut rng);
        let outcome = decide(player_hand, computer_hand);
        match outcome {
            RoundOutcome::Player => player_score += 1,
            RoundOutcome::Computer => computer_score += 1,
            RoundOutcome::Tie => {}
        }
        info!(
            round,
            player = player_hand.label(),
            computer = computer_hand.label(),
            ?outcome,
            "Round decided"
        );

        reveal(
            terminal,
            &name,
            player_hand,
            computer_hand,
            outcome,
            player_score,
            computer_score,
        )?;

        if player_score == NEEDED || computer_score == NEEDED {
            break;
        }
    }

    final_screen(terminal, &name, player_score, computer_score)
}

fn name_entry<B: Backend>(terminal: &mut Terminal<B>) -> Result<Option<String>>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut name = String::new();
    loop {
        terminal.draw(|f| {
            let area = center_rect(f.area(), 60, 7);
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

fn score_line(name: &str, player: u32, computer: u32) -> String {
    format!("{name}: {player}   AI: {computer}")
}

fn hand_prompt<B: Backend>(
    terminal: &mut Terminal<B>,
    name: &str,
    round: u32,
    player: u32,
    computer: u32,
) -> Result<Option<Hand>>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| {
            let area = center_rect(f.area(), 64, 10);
            let text = format!(
                "{}\n\nRound {round} of {ROUNDS}\n\n{name}, choose Rock (r), Paper (p) or Scissors (s)\n\nEsc: back to menu",
                score_line(name, player, computer)
            );
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(Color::Magenta))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(TITLE));
            f.render_widget(paragraph, area);
        })?;

        match wait_key()?.code {
            KeyCode::Char('r') | KeyCode::Char('R') => return Ok(Some(Hand::Rock)),
            KeyCode::Char('p') | KeyCode::Char('P') => return Ok(Some(Hand::Paper)),
            KeyCode::Char('s') | KeyCode::Char('S') => return Ok(Some(Hand::Scissors)),
            KeyCode::Esc => return Ok(None),
            _ => {}
        }
    }
}

/// 3-2-1 before the reveal.
fn countdown<B: Backend>(
    terminal: &mut Terminal<B>,
    name: &str,
    round: u32,
    player: u32,
    computer: u32,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    for n in (1..=3).rev() {
        terminal.draw(|f| {
            let area = center_rect(f.area(), 64, 8);
            let text = format!(
                "{}\n\nRound {round} of {ROUNDS}\n\n{n}...",
                score_line(name, player, computer)
            );
            let paragraph = Paragraph::new(text)
                .style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(TITLE));
            f.render_widget(paragraph, area);
        })?;
        std::thread::sleep(Duration::from_millis(600));
    }
    Ok(())
}

fn reveal<B: Backend>(
    terminal: &mut Terminal<B>,
    name: &str,
    player_hand: Hand,
    computer_hand: Hand,
    outcome: RoundOutcome,
    player: u32,
    computer: u32,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let (message, color) = match outcome {
        RoundOutcome::Player => ("You win this round!", Color::Green),
        RoundOutcome::Computer => ("Computer wins this round!", Color::Red),
        RoundOutcome::Tie => ("It's a tie!", Color::Yellow),
    };

    terminal.draw(|f| {
        let area = center_rect(f.area(), 64, 24);

        let mut lines: Vec<Line> = vec![
            Line::styled(
                score_line(name, player, computer),
                Style::default().fg(Color::Magenta),
            ),
            Line::from(""),
            Line::styled(
                format!("{name} chose: {}", player_hand.label()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ];
        for art in player_hand.art() {
            lines.push(Line::styled(*art, Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::styled(
            "VERSUS",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            format!("Computer chose: {}", computer_hand.label()),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
        for art in computer_hand.art() {
            lines.push(Line::styled(*art, Style::default().fg(Color::Magenta)));
        }
        lines.push(Line::from(""));
        lines.push(Line::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            "Press any key to continue...",
            Style::default().fg(Color::DarkGray),
        ));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(TITLE));
        f.render_widget(paragraph, area);
    })?;

    wait_key()?;
    Ok(())
}

fn final_screen<B: Backend>(
    terminal: &mut Terminal<B>,
    name: &str,
    player: u32,
    computer: u32,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let (verdict, color) = if player > computer {
        ("CONGRATULATIONS! You won the match!", Color::Green)
    } else if computer > player {
        ("SORRY! The computer won the match.", Color::Red)
    } else {
        ("IT'S A DRAW!", Color::Yellow)
    };
    info!(player, computer, verdict, "Match over");

    terminal.draw(|f| {
        let area = center_rect(f.area(), 64, 8);
        let text = format!(
            "{verdict}\n\nFinal Score - {}\n\nPress any key to return...",
            score_line(name, player, computer)
        );
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(TITLE));
        f.render_widget(paragraph, area);
    })?;
    wait_key()?;
    Ok(())
}
