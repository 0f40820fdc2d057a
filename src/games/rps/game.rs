//! Hands and round arbitration for rock-paper-scissors.

use rand::Rng;
use strum::IntoEnumIterator;

/// Number of rounds in a match.
pub const ROUNDS: u32 = 5;
/// Wins needed to take the match early.
pub const NEEDED: u32 = ROUNDS / 2 + 1;

/// A playable hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum Hand {
    /// Rock crushes scissors.
    Rock,
    /// Paper covers rock.
    Paper,
    /// Scissors cut paper.
    Scissors,
}

impl Hand {
    /// The hand this one defeats.
    pub fn beats(self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Scissors => Hand::Paper,
            Hand::Paper => Hand::Rock,
        }
    }

    /// Returns the display name.
    pub fn label(self) -> &'static str {
        match self {
            Hand::Rock => "ROCK",
            Hand::Paper => "PAPER",
            Hand::Scissors => "SCISSORS",
        }
    }

    /// ASCII art for the hand.
    pub fn art(self) -> &'static [&'static str] {
        match self {
            Hand::Rock => &[
                "    _______",
                "---'   ____)",
                "      (_____)",
                "      (_____)",
                "      (____)",
                "---.__(___)",
            ],
            Hand::Paper => &[
                "     _______",
                "---'    ____)____",
                "           ______)",
                "          _______)",
                "         _______)",
                "---.__________)",
            ],
            Hand::Scissors => &[
                "    _______",
                "---'   ____)____",
                "          ______)",
                "       __________)",
                "      (____)",
                "---.__(___)",
            ],
        }
    }
}

/// Outcome of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player's hand won.
    Player,
    /// The computer's hand won.
    Computer,
    /// Both played the same hand.
    Tie,
}

/// Decides one round.
pub fn decide(player: Hand, computer: Hand) -> RoundOutcome {
    if player == computer {
        RoundOutcome::Tie
    } else if player.beats() == computer {
        RoundOutcome::Player
    } else {
        RoundOutcome::Computer
    }
}

/// Draws a uniformly random hand.
pub fn random_hand(rng: &mut impl Rng) -> Hand {
    let hands: Vec<Hand> = Hand::iter().collect();
    hands[rng.gen_range(0..hands.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beats_is_a_cycle() {
        assert_eq!(Hand::Rock.beats(), Hand::Scissors);
        assert_eq!(Hand::Scissors.beats(), Hand::Paper);
        assert_eq!(Hand::Paper.beats(), Hand::Rock);
    }

    #[test]
    fn decide_covers_all_pairs() {
        for player in Hand::iter() {
            for computer in Hand::iter() {
                let outcome = decide(player, computer);
                if player == computer {
                    assert_eq!(outcome, RoundOutcome::Tie);
                } else if player.beats() == computer {
                    assert_eq!(outcome, RoundOutcome::Player);
                } else {
                    assert_eq!(outcome, RoundOutcome::Computer);
                }
            }
        }
    }
}
