use std::fmt;
use std::ops::Index;

use itertools::Itertools;
use log::debug;

use crate::mask::LetterMask;
use crate::{ALPHABET_LEN, WORD_LEN};

/// A lowercase word of `WORD_LEN` distinct letters. Orders by spelling.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    mask: LetterMask,
}

impl Word {
    /// Accepts exactly `WORD_LEN` distinct letters from `a..=z`.
    pub fn new(text: &str) -> Option<Self> {
        if text.len() != WORD_LEN {
            return None;
        }
        let mask = LetterMask::from_word(text)?;
        Some(Word {
            text: text.to_owned(),
            mask,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn mask(&self) -> LetterMask {
        self.mask
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// How many raw strings survived each filtering stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub raw: usize,
    pub five_letter: usize,
    pub distinct_letter: usize,
    pub canonical: usize,
}

/// The canonical working set: usable words with no two sharing a letter set.
#[derive(Clone, Debug, Default)]
pub struct WordCatalog {
    words: Vec<Word>,
    stats: CatalogStats,
}

impl WordCatalog {
    /// Filters `raw` down to words of five distinct letters, keeping the first
    /// word seen for every letter set.
    pub fn build<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = CatalogStats::default();

        let words = raw
            .into_iter()
            .inspect(|_| stats.raw += 1)
            .filter(|w| w.as_ref().len() == WORD_LEN)
            .inspect(|_| stats.five_letter += 1)
            .filter_map(|w| Word::new(w.as_ref()))
            .inspect(|_| stats.distinct_letter += 1)
            .unique_by(|w| w.mask)
            .collect_vec();
        stats.canonical = words.len();

        debug!(target: "catalog", "{:?}", stats);
        WordCatalog { words, stats }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn stats(&self) -> CatalogStats {
        self.stats
    }

    /// For each letter `a..=z`, the number of canonical words containing it.
    pub fn letter_frequencies(&self) -> [usize; ALPHABET_LEN] {
        let mut freq = [0; ALPHABET_LEN];
        for word in &self.words {
            for letter in word.mask.letters() {
                freq[(letter as u8 - b'a') as usize] += 1;
            }
        }
        freq
    }
}

impl Index<usize> for WordCatalog {
    type Output = Word;

    fn index(&self, idx: usize) -> &Word {
        &self.words[idx]
    }
}

impl<'a> IntoIterator for &'a WordCatalog {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spellings(catalog: &WordCatalog) -> Vec<&str> {
        catalog.iter().map(Word::as_str).collect()
    }

    #[test]
    fn filters_unusable_words() {
        let catalog = WordCatalog::build([
            "fjord", "gucks", "hello", "nymph", "vibex", "waltz", "abc", "abcdef", "Quack", "x-ray",
        ]);
        assert_eq!(spellings(&catalog), ["fjord", "gucks", "nymph", "vibex", "waltz"]);
        for word in &catalog {
            assert_eq!(word.as_str().len(), 5);
            assert_eq!(word.mask().count(), 5);
        }
    }

    #[test]
    fn keeps_first_anagram() {
        let catalog = WordCatalog::build(vec![
            "least".to_owned(),
            "slate".to_owned(),
            "fjord".to_owned(),
            "steal".to_owned(),
            "tales".to_owned(),
        ]);
        assert_eq!(spellings(&catalog), ["least", "fjord"]);
        assert!(catalog
            .iter()
            .tuple_combinations()
            .all(|(a, b)| a.mask() != b.mask()));
    }

    #[test]
    fn stats_per_stage() {
        let catalog = WordCatalog::build(["least", "slate", "hello", "ab", "fjord"]);
        assert_eq!(
            catalog.stats(),
            CatalogStats {
                raw: 5,
                five_letter: 4,
                distinct_letter: 3,
                canonical: 2,
            }
        );
    }

    #[test]
    fn letter_frequencies() {
        let catalog = WordCatalog::build(["abcde", "fghij", "bcdef"]);
        let freq = catalog.letter_frequencies();
        assert_eq!(freq[0], 1);
        assert_eq!(freq[1], 2);
        assert_eq!(freq[5], 2);
        assert_eq!(freq[25], 0);
        assert_eq!(freq.iter().sum::<usize>(), 15);
    }

    #[test]
    fn empty_input() {
        let catalog = WordCatalog::build(Vec::<String>::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.stats(), CatalogStats::default());
    }
}
