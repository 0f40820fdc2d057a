//! Classic basic-strategy tables.
//!
//! Hard totals, soft totals, and pair splitting, transcribed from the
//! classic strategy chart. The same lookup drives the AI seats and the
//! hint line shown to the human.

use super::cards::{Card, Rank};
use super::hand::{hand_value, is_pair, is_soft};

/// A recommended play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Take a card.
    Hit,
    /// Take no more cards.
    Stand,
    /// Double if allowed, otherwise hit.
    DoubleOrHit,
    /// Double if allowed, otherwise stand.
    DoubleOrStand,
    /// Split the pair.
    Split,
}

impl Action {
    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            Action::Hit => "Hit",
            Action::Stand => "Stand",
            Action::DoubleOrHit => "Double (else hit)",
            Action::DoubleOrStand => "Double (else stand)",
            Action::Split => "Split",
        }
    }
}

/// Dealer upcard class: 2-9 at face value, 10 for any ten-card, 11 for ace.
fn upcard_class(card: Card) -> u8 {
    card.rank.base_value()
}

/// Looks up the basic-strategy play for `hand` against `dealer_up`.
pub fn basic_action(hand: &[Card], dealer_up: Card) -> Action {
    let up = upcard_class(dealer_up);

    if is_pair(hand) {
        return pair_action(hand[0].rank, up);
    }

    let total = hand_value(hand);
    if is_soft(hand) && total <= 20 {
        return soft_action(total, up);
    }

    hard_action(total, up)
}

/// Whether an AI seat keeps drawing on this recommendation.
///
/// Seats cannot double or split, so doubles collapse to a hit and
/// splits play the hand as it stands.
pub fn seat_hits(action: Action) -> bool {
    matches!(
        action,
        Action::Hit | Action::DoubleOrHit | Action::DoubleOrStand
    )
}

fn pair_action(rank: Rank, up: u8) -> Action {
    match rank {
        Rank::Ace => Action::Split,
        // Ten-value pairs stand pat.
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => Action::Stand,
        Rank::Nine => match up {
            2..=6 | 8 | 9 => Action::Split,
            _ => Action::Stand,
        },
        Rank::Eight => Action::Split,
        Rank::Seven => match up {
            2..=7 => Action::Split,
            _ => Action::Hit,
        },
        Rank::Six => match up {
            2..=6 => Action::Split,
            _ => Action::Hit,
        },
        Rank::Five => match up {
            2..=9 => Action::DoubleOrHit,
            _ => Action::Hit,
        },
        Rank::Four => match up {
            5 | 6 => Action::Split,
            _ => Action::Hit,
        },
        Rank::Two | Rank::Three => match up {
            2..=7 => Action::Split,
            _ => Action::Hit,
        },
    }
}

fn soft_action(total: u8, up: u8) -> Action {
    match total {
        13 => match up {
            5 | 6 => Action::DoubleOrHit,
            _ => Action::Hit,
        },
        14..=16 => match up {
            4..=6 => Action::DoubleOrHit,
            _ => Action::Hit,
        },
        17 => match up {
            3..=6 => Action::DoubleOrHit,
            2 | 7 | 8 => Action::Stand,
            _ => Action::Hit,
        },
        18 => match up {
            3..=6 => Action::DoubleOrStand,
            2 | 7 | 8 => Action::Stand,
            _ => Action::Hit,
        },
        19 | 20 => Action::Stand,
        // Soft 12 is a pair of aces and never reaches here as two cards.
        _ => hard_action(total, up),
    }
}

fn hard_action(total: u8, up: u8) -> Action {
    match total {
        0..=8 => Action::Hit,
        9 => match up {
            3..=6 => Action::DoubleOrHit,
            _ => Action::Hit,
        },
        10 => match up {
            2..=9 => Action::DoubleOrHit,
            _ => Action::Hit,
        },
        11 => Action::DoubleOrHit,
        12 => match up {
            4..=6 => Action::Stand,
            _ => Action::Hit,
        },
        13..=16 => match up {
            2..=6 => Action::Stand,
            _ => Action::Hit,
        },
        _ => Action::Stand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::blackjack::cards::Suit;

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Hearts)
    }

    fn hand(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|r| card(*r)).collect()
    }

    #[test]
    fn always_split_aces_and_eights() {
        for up in [Rank::Two, Rank::Seven, Rank::Ten, Rank::Ace] {
            assert_eq!(
                basic_action(&hand(&[Rank::Ace, Rank::Ace]), card(up)),
                Action::Split
            );
            assert_eq!(
                basic_action(&hand(&[Rank::Eight, Rank::Eight]), card(up)),
                Action::Split
            );
        }
    }

    #[test]
    fn ten_pairs_stand() {
        assert_eq!(
            basic_action(&hand(&[Rank::Ten, Rank::Ten]), card(Rank::Six)),
            Action::Stand
        );
        // King pair falls through to its hard total, which also stands.
        assert_eq!(
            basic_action(&hand(&[Rank::King, Rank::King]), card(Rank::Six)),
            Action::Stand
        );
    }

    #[test]
    fn eleven_always_doubles() {
        for up in [Rank::Two, Rank::Six, Rank::Ten, Rank::Ace] {
            assert_eq!(
                basic_action(&hand(&[Rank::Five, Rank::Six]), card(up)),
                Action::DoubleOrHit
            );
        }
    }

    #[test]
    fn sixteen_stands_against_weak_upcards() {
        let sixteen = hand(&[Rank::Nine, Rank::Seven]);
        assert_eq!(basic_action(&sixteen, card(Rank::Six)), Action::Stand);
        assert_eq!(basic_action(&sixteen, card(Rank::Ten)), Action::Hit);
    }

    #[test]
    fn twelve_hits_against_two_and_three() {
        let twelve = hand(&[Rank::Nine, Rank::Three]);
        assert_eq!(basic_action(&twelve, card(Rank::Two)), Action::Hit);
        assert_eq!(basic_action(&twelve, card(Rank::Four)), Action::Stand);
    }

    #[test]
    fn soft_eighteen_rows() {
        let soft18 = hand(&[Rank::Ace, Rank::Seven]);
        assert_eq!(basic_action(&soft18, card(Rank::Three)), Action::DoubleOrStand);
        assert_eq!(basic_action(&soft18, card(Rank::Two)), Action::Stand);
        assert_eq!(basic_action(&soft18, card(Rank::Nine)), Action::Hit);
    }

    #[test]
    fn hard_totals_above_sixteen_stand() {
        assert_eq!(
            basic_action(&hand(&[Rank::King, Rank::Nine]), card(Rank::Ace)),
            Action::Stand
        );
    }

    #[test]
    fn seats_hit_on_double_recommendations() {
        assert!(seat_hits(Action::Hit));
        assert!(seat_hits(Action::DoubleOrHit));
        assert!(seat_hits(Action::DoubleOrStand));
        assert!(!seat_hits(Action::Stand));
        assert!(!seat_hits(Action::Split));
    }
}
