//! Cards and the multi-deck shoe.

use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;

/// Decks in the shoe.
pub const SHOE_DECKS: usize = 6;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum Suit {
    /// ♠
    Spades,
    /// ♥
    Hearts,
    /// ♦
    Diamonds,
    /// ♣
    Clubs,
}

impl Suit {
    /// Returns the suit symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum Rank {
    /// Counts 11, downgrading to 1 when the hand would bust.
    Ace,
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// 10
    Ten,
    /// Counts 10.
    Jack,
    /// Counts 10.
    Queen,
    /// Counts 10.
    King,
}

impl Rank {
    /// Returns the display label ("A", "2", ..., "10", "J", "Q", "K").
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Base card value: aces count 11 here, faces 10.
    pub fn base_value(self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// The card's rank.
    pub rank: Rank,
    /// The card's suit.
    pub suit: Suit,
}

impl Card {
    /// Creates a card.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// The dealing shoe: several decks shuffled together.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds and shuffles a shoe of [`SHOE_DECKS`] decks.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut cards = Vec::with_capacity(SHOE_DECKS * 52);
        for _ in 0..SHOE_DECKS {
            for suit in Suit::iter() {
                for rank in Rank::iter() {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        cards.shuffle(rng);
        Self { cards }
    }

    /// Deals the next card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Cards remaining.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the shoe is exhausted.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shoe_holds_six_decks() {
        let mut rng = StdRng::seed_from_u64(1);
        let shoe = Shoe::new(&mut rng);
        assert_eq!(shoe.len(), 6 * 52);
    }

    #[test]
    fn shoe_contains_24_of_each_rank() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut shoe = Shoe::new(&mut rng);
        let mut aces = 0;
        while let Some(card) = shoe.draw() {
            if card.rank == Rank::Ace {
                aces += 1;
            }
        }
        assert_eq!(aces, 24);
    }
}
