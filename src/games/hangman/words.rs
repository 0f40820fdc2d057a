//! Embedded word lists for hangman.
//!
//! Each list maps an uppercase word to its hint, stored as JSON assets.

use anyhow::{Context, Result, ensure};
use rand::Rng;
use std::collections::BTreeMap;

const WORDS_EN: &str = include_str!("../../../assets/words_en.json");
const WORDS_FR: &str = include_str!("../../../assets/words_fr.json");

/// Word list language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English words and hints.
    #[default]
    English,
    /// French words and hints.
    French,
}

impl Language {
    /// Returns the display name.
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "Français",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Language::English => WORDS_EN,
            Language::French => WORDS_FR,
        }
    }
}

/// A word paired with its hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The secret word, uppercase.
    pub word: String,
    /// One-line hint shown on request.
    pub hint: String,
}

/// Parses the embedded list for a language.
pub fn word_list(language: Language) -> Result<Vec<Entry>> {
    let map: BTreeMap<String, String> = serde_json::from_str(language.source())
        .with_context(|| format!("parsing {} word list", language.label()))?;
    ensure!(!map.is_empty(), "{} word list is empty", language.label());
    Ok(map
        .into_iter()
        .map(|(word, hint)| Entry { word, hint })
        .collect())
}

/// Picks a random entry from the language's list.
pub fn pick(language: Language, rng: &mut impl Rng) -> Result<Entry> {
    let list = word_list(language)?;
    Ok(list[rng.gen_range(0..list.len())].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn both_lists_parse() {
        assert!(!word_list(Language::English).unwrap().is_empty());
        assert!(!word_list(Language::French).unwrap().is_empty());
    }

    #[test]
    fn words_are_uppercase_letters() {
        for language in [Language::English, Language::French] {
            for entry in word_list(language).unwrap() {
                assert!(
                    entry.word.chars().all(|c| c.is_ascii_uppercase()),
                    "bad word {:?}",
                    entry.word
                );
            }
        }
    }

    #[test]
    fn pick_is_reproducible_with_seed() {
        let a = pick(Language::English, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = pick(Language::English, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }
}
