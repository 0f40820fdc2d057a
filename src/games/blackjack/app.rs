//! Screen flow and rendering for blackjack.

use super::cards::{Card, Shoe};
use super::hand::hand_value;
use super::strategy::{basic_action, seat_hits};
use super::table::{RoundResult, Variant, dealer_should_hit, settle};
use crate::terminal::wait_key;
use crate::ui::center_rect;
use anyhow::{Context, Result};
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
use std::time::Duration;
use tracing::{info, instrument};

const TITLE: &str = "♠♥ ♣♦   TERMINAL BLACKJACK   ♠♥ ♣♦";
const CARD_WIDTH: usize = 9;
const SEAT_DELAY: Duration = Duration::from_millis(450);
/// Most AI seats the table fits.
const MAX_SEATS: u32 = 5;

/// Runs blackjack: table setup, then rounds until broke or done.
#[instrument(skip(terminal))]
pub fn run<B: Backend>(terminal: &mut Terminal<B>) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut rng = StdRng::from_entropy();

    let Some(variant) = variant_select(terminal)? else {
        return Ok(());
    };
    let Some(cash) = number_entry(terminal, "Enter your starting cash:", 1, 1_000_000)? else {
        return Ok(());
    };
    let Some(num_ai) = number_entry(
        terminal,
        &format!("Number of AI players (0-{MAX_SEATS}):"),
        0,
        MAX_SEATS,
    )?
    else {
        return Ok(());
    };

    info!(
        variant = variant.label(),
        cash, num_ai, "Starting blackjack session"
    );

    let mut balance = cash;
    loop {
        if balance == 0 {
            message_screen(
                terminal,
                "You're out of cash! Thanks for playing.",
                Color::Red,
            )?;
            return Ok(());
        }

        let Some(bet) = number_entry(
            terminal,
            &format!("Balance: ${balance}. Enter your bet:"),
            1,
            balance,
        )?
        else {
            return Ok(());
        };
        balance -= bet;

        match play_round(terminal, &mut rng, variant, num_ai, balance, bet)? {
            None => return Ok(()),
            Some(result) => {
                let (message, color) = match result {
                    RoundResult::DealerWins => ("Dealer wins.".to_string(), Color::Red),
                    RoundResult::PlayerWins => {
                        balance += bet * 2;
                        ("You win!".to_string(), Color::Green)
                    }
                    RoundResult::Push => {
                        balance += bet;
                        ("Push.".to_string(), Color::Yellow)
                    }
                };
                info!(?result, balance, "Round settled");

                if !again_prompt(
                    terminal,
                    &format!("{message}  New balance: ${balance}."),
                    color,
                )? {
                    return Ok(());
                }
            }
        }
    }
}

/// Table state for one round.
struct TableState {
    seats: Vec<Vec<Card>>,
    human: Vec<Card>,
    dealer: Vec<Card>,
    variant: Variant,
    balance: u32,
    bet: u32,
}

impl TableState {
    /// The dealer card everyone can see.
    fn upcard(&self) -> Card {
        *self.dealer.last().expect("dealer always has an upcard")
    }
}

/// Plays one round. `Ok(None)` means the player quit to the menu.
fn play_round<B: Backend>(
    terminal: &mut Terminal<B>,
    rng: &mut StdRng,
    variant: Variant,
    num_ai: u32,
    balance: u32,
    bet: u32,
) -> Result<Option<RoundResult>>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut shoe = Shoe::new(rng);
    let deal = |shoe: &mut Shoe| shoe.draw().context("shoe exhausted");

    let mut seats = Vec::new();
    for _ in 0..num_ai {
        seats.push(vec![deal(&mut shoe)?, deal(&mut shoe)?]);
    }
    let human = vec![deal(&mut shoe)?, deal(&mut shoe)?];
    // European tables hold the hole card back until the player stands.
    let dealer = match variant {
        Variant::American => vec![deal(&mut shoe)?, deal(&mut shoe)?],
        Variant::European => vec![deal(&mut shoe)?],
    };

    let mut state = TableState {
        seats,
        human,
        dealer,
        variant,
        balance,
        bet,
    };

    // AI seats play first, in seating order.
    for idx in 0..state.seats.len() {
        loop {
            let action = basic_action(&state.seats[idx], state.upcard());
            if !seat_hits(action) {
                let total = hand_value(&state.seats[idx]);
                draw_table(
                    terminal,
                    &state,
                    false,
                    &format!("AI {} stands at {}.", idx + 1, total),
                )?;
                std::thread::sleep(SEAT_DELAY);
                break;
            }
            let card = deal(&mut shoe)?;
            state.seats[idx].push(card);
            let total = hand_value(&state.seats[idx]);
            let note = if total > 21 {
                format!("AI {} hits and busts at {}!", idx + 1, total)
            } else {
                format!("AI {} hits to {}.", idx + 1, total)
            };
            draw_table(terminal, &state, false, &note)?;
            std::thread::sleep(SEAT_DELAY);
            if total > 21 {
                break;
            }
        }
    }

    // Human's turn.
    loop {
        let suggestion = basic_action(&state.human, state.upcard());
        let status = format!(
            "Your total: {}. Suggested: {}. [h]it / [s]tand / Esc",
            hand_value(&state.human),
            suggestion.label()
        );
        draw_table(terminal, &state, false, &status)?;

        match wait_key()?.code {
            KeyCode::Esc => return Ok(None),
            KeyCode::Char('h') | KeyCode::Char('H') => {
                let card = deal(&mut shoe)?;
                state.human.push(card);
                if hand_value(&state.human) > 21 {
                    draw_table(terminal, &state, false, "You busted!")?;
                    std::thread::sleep(SEAT_DELAY);
                    break;
                }
            }
            KeyCode::Char('s') | KeyCode::Char('S') => break,
            _ => {}
        }
    }

    // Dealer's turn, skipped when the player already busted.
    let player_total = hand_value(&state.human);
    if player_total <= 21 {
        if state.variant == Variant::European {
            let hole = deal(&mut shoe)?;
            state.dealer.insert(0, hole);
            draw_table(terminal, &state, true, "Dealer reveals the hole card...")?;
            std::thread::sleep(SEAT_DELAY);
        }
        while dealer_should_hit(&state.dealer, state.variant) {
            let card = deal(&mut shoe)?;
            state.dealer.push(card);
            draw_table(
                terminal,
                &state,
                true,
                &format!("Dealer draws to {}.", hand_value(&state.dealer)),
            )?;
            std::thread::sleep(SEAT_DELAY);
        }
        draw_table(
            terminal,
            &state,
            true,
            &format!("Dealer stands at {}.", hand_value(&state.dealer)),
        )?;
        std::thread::sleep(SEAT_DELAY);
    }

    Ok(Some(settle(player_total, hand_value(&state.dealer))))
}

// ─────────────────────────────────────────────────────────────
//  Rendering
// ─────────────────────────────────────────────────────────────

/// ASCII art lines for a face-up card.
fn card_art(card: Card) -> [String; 5] {
    let inner = CARD_WIDTH - 2;
    let rank = card.rank.label();
    let suit = card.suit.symbol();
    [
        format!("┌{}┐", "─".repeat(inner)),
        format!("│{rank:<inner$}│"),
        format!("│{suit:^inner$}│"),
        format!("│{rank:>inner$}│"),
        format!("└{}┘", "─".repeat(inner)),
    ]
}

/// ASCII art lines for a face-down card.
fn hidden_art() -> [String; 5] {
    let inner = CARD_WIDTH - 2;
    [
        format!("┌{}┐", "─".repeat(inner)),
        format!("│{}│", "░".repeat(inner)),
        format!("│{}│", "░".repeat(inner)),
        format!("│{}│", "░".repeat(inner)),
        format!("└{}┘", "─".repeat(inner)),
    ]
}

/// Renders a hand as 5 art lines; optionally hides the first card.
fn hand_art(hand: &[Card], hide_first: bool) -> Vec<String> {
    let mut lines = vec![String::new(); 5];
    for (idx, card) in hand.iter().enumerate() {
        let art = if idx == 0 && hide_first {
            hidden_art()
        } else {
            card_art(*card)
        };
        for (line, art_line) in lines.iter_mut().zip(art) {
            line.push_str(&art_line);
            line.push(' ');
        }
    }
    lines
}

fn draw_table<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &TableState,
    show_hole: bool,
    status: &str,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    terminal.draw(|f| {
        let width = ((state.human.len().max(state.dealer.len()) * (CARD_WIDTH + 1)) as u16 + 6)
            .max(64);
        let height = 21 + state.seats.len() as u16;
        let area = center_rect(f.area(), width, height);

        let mut lines: Vec<Line> = vec![Line::styled(
            format!(
                "{} - Balance: ${}  Bet: ${}",
                state.variant.label(),
                state.balance,
                state.bet
            ),
            Style::default().fg(Color::Cyan),
        )];

        for (idx, seat) in state.seats.iter().enumerate() {
            let cards: Vec<String> = seat.iter().map(|c| c.to_string()).collect();
            let total = hand_value(seat);
            let style = if total > 21 {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Magenta)
            };
            lines.push(Line::styled(
                format!("AI {}: {}  ({})", idx + 1, cards.join(" "), total),
                style,
            ));
        }

        lines.push(Line::from(""));
        let dealer_caption = if show_hole {
            format!("Dealer ({})", hand_value(&state.dealer))
        } else {
            "Dealer".to_string()
        };
        lines.push(Line::styled(
            dealer_caption,
            Style::default().fg(Color::Yellow),
        ));
        let hide_hole =
            !show_hole && state.variant == Variant::American && state.dealer.len() > 1;
        for art_line in hand_art(&state.dealer, hide_hole) {
            lines.push(Line::styled(art_line, Style::default().fg(Color::White)));
        }

        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("Your hand ({})", hand_value(&state.human)),
            Style::default().fg(Color::Green),
        ));
        for art_line in hand_art(&state.human, false) {
            lines.push(Line::styled(art_line, Style::default().fg(Color::White)));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            status.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(TITLE));
        f.render_widget(paragraph, area);
    })?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────
//  Prompt screens
// ─────────────────────────────────────────────────────────────

fn variant_select<B: Backend>(terminal: &mut Terminal<B>) -> Result<Option<Variant>>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| {
            let area = center_rect(f.area(), 56, 9);
            let text = "Choose variant:\n\n\
                        1) American (dealer hits soft 17)\n\
                        2) European (no hole card, stands on soft 17)\n\n\
                        Esc: back";
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(TITLE));
            f.render_widget(paragraph, area);
        })?;

        match wait_key()?.code {
            KeyCode::Char('1') => return Ok(Some(Variant::American)),
            KeyCode::Char('2') => return Ok(Some(Variant::European)),
            KeyCode::Esc => return Ok(None),
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
            let text = format!(
                "{prompt}\n\n{shown}\n\n{notice}\nEnter: confirm | Esc: back"
            );
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

fn again_prompt<B: Backend>(
    terminal: &mut Terminal<B>,
    message: &str,
    color: Color,
) -> Result<bool>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| {
            let area = center_rect(f.area(), 60, 7);
            let text = format!("{message}\n\nPlay again? (y/n)");
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
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

fn message_screen<B: Backend>(
    terminal: &mut Terminal<B>,
    message: &str,
    color: Color,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    terminal.draw(|f| {
        let area = center_rect(f.area(), 60, 7);
        let text = format!("{message}\n\nPress any key to return...");
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(TITLE));
        f.render_widget(paragraph, area);
    })?;
    wait_key()?;
    Ok(())
}
