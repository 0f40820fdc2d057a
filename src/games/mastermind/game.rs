//! Secret-code generation and guess grading for mastermind.

use rand::Rng;

/// Length of the secret code.
pub const CODE_LEN: usize = 4;

/// Digit range the secret is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitRange {
    /// Digits 1 through 6, the classic peg set.
    #[default]
    OneToSix,
    /// Digits 0 through 9.
    ZeroToNine,
}

impl DigitRange {
    /// Lowest digit in the range.
    pub fn min(self) -> u8 {
        match self {
            DigitRange::OneToSix => 1,
            DigitRange::ZeroToNine => 0,
        }
    }

    /// Highest digit in the range.
    pub fn max(self) -> u8 {
        match self {
            DigitRange::OneToSix => 6,
            DigitRange::ZeroToNine => 9,
        }
    }

    /// Returns the display label, e.g. `1-6`.
    pub fn label(self) -> &'static str {
        match self {
            DigitRange::OneToSix => "1-6",
            DigitRange::ZeroToNine => "0-9",
        }
    }

    /// True if `digit` falls inside the range.
    pub fn contains(self, digit: u8) -> bool {
        (self.min()..=self.max()).contains(&digit)
    }
}

/// Attempt budget per difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MastermindDifficulty {
    /// 10 attempts.
    #[default]
    Easy,
    /// 6 attempts.
    Hard,
}

impl MastermindDifficulty {
    /// Maximum attempts allowed.
    pub fn max_attempts(self) -> u32 {
        match self {
            MastermindDifficulty::Easy => 10,
            MastermindDifficulty::Hard => 6,
        }
    }

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            MastermindDifficulty::Easy => "Easy (10 attempts)",
            MastermindDifficulty::Hard => "Hard (6 attempts)",
        }
    }
}

/// Exact and partial match counts for one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    /// Correct digit in the correct position.
    pub exact: usize,
    /// Correct digit in the wrong position, without double counting.
    pub partial: usize,
}

impl Grade {
    /// True when the guess cracked the code.
    pub fn is_win(self) -> bool {
        self.exact == CODE_LEN
    }
}

/// Draws a secret code uniformly (repeated digits allowed).
pub fn generate_code(range: DigitRange, rng: &mut impl Rng) -> Vec<u8> {
    (0..CODE_LEN)
        .map(|_| rng.gen_range(range.min()..=range.max()))
        .collect()
}

/// Grades `guess` against `secret`.
///
/// Exact matches are removed first; each leftover guess digit then
/// consumes at most one matching leftover secret digit.
pub fn grade(secret: &[u8], guess: &[u8]) -> Grade {
    let exact = secret.iter().zip(guess).filter(|(s, g)| s == g).count();

    let mut rem_secret: Vec<u8> = Vec::new();
    let mut rem_guess: Vec<u8> = Vec::new();
    for (s, g) in secret.iter().zip(guess) {
        if s != g {
            rem_secret.push(*s);
            rem_guess.push(*g);
        }
    }

    let mut partial = 0;
    for g in rem_guess {
        if let Some(idx) = rem_secret.iter().position(|s| *s == g) {
            partial += 1;
            rem_secret.remove(idx);
        }
    }

    Grade { exact, partial }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn exact_win() {
        let g = grade(&[1, 2, 3, 4], &[1, 2, 3, 4]);
        assert_eq!(g, Grade { exact: 4, partial: 0 });
        assert!(g.is_win());
    }

    #[test]
    fn all_partial() {
        let g = grade(&[1, 2, 3, 4], &[4, 3, 2, 1]);
        assert_eq!(g, Grade { exact: 0, partial: 4 });
    }

    #[test]
    fn duplicates_are_not_double_counted() {
        // Secret has one 1; guessing two 1s credits only one partial.
        let g = grade(&[1, 2, 3, 4], &[5, 1, 1, 6]);
        assert_eq!(g, Grade { exact: 0, partial: 1 });
    }

    #[test]
    fn exact_match_consumes_the_digit() {
        // The 2 in place counts as exact only, not also as partial.
        let g = grade(&[2, 2, 3, 4], &[2, 5, 6, 7]);
        assert_eq!(g, Grade { exact: 1, partial: 0 });
    }

    #[test]
    fn generated_code_respects_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for range in [DigitRange::OneToSix, DigitRange::ZeroToNine] {
            let code = generate_code(range, &mut rng);
            assert_eq!(code.len(), CODE_LEN);
            assert!(code.iter().all(|d| range.contains(*d)));
        }
    }
}
