use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::ALPHABET_LEN;

/// One bit per letter of the alphabet, bit 0 being `a`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterMask(u32);

impl LetterMask {
    pub const EMPTY: LetterMask = LetterMask(0);
    pub const ALL: LetterMask = LetterMask((1 << ALPHABET_LEN) - 1);

    /// Mask of the letters in `word`, or `None` if it contains anything
    /// outside `a..=z` or repeats a letter.
    pub fn from_word(word: &str) -> Option<Self> {
        let mut mask = 0u32;
        for c in word.bytes() {
            if !c.is_ascii_lowercase() {
                return None;
            }
            let bit = 1 << (c - b'a');
            if mask & bit != 0 {
                return None;
            }
            mask |= bit;
        }
        Some(LetterMask(mask))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Number of letters present.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_disjoint(self, other: LetterMask) -> bool {
        self.0 & other.0 == 0
    }

    pub fn contains(self, letter: char) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter as u8 - b'a')) != 0
    }

    /// Letters of the alphabet not in this mask.
    pub fn missing(self) -> LetterMask {
        LetterMask(!self.0 & Self::ALL.0)
    }

    /// Letters present, in alphabetical order.
    pub fn letters(self) -> impl Iterator<Item = char> {
        (0..ALPHABET_LEN as u8)
            .filter(move |i| self.0 & (1 << i) != 0)
            .map(|i| (b'a' + i) as char)
    }
}

impl BitOr for LetterMask {
    type Output = LetterMask;

    fn bitor(self, rhs: LetterMask) -> LetterMask {
        LetterMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for LetterMask {
    fn bitor_assign(&mut self, rhs: LetterMask) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for LetterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterMask({})", self.letters().collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_of_word() {
        let mask = LetterMask::from_word("fjord").unwrap();
        assert_eq!(mask.count(), 5);
        assert_eq!(mask.letters().collect::<String>(), "dfjor");
        assert!(mask.contains('j'));
        assert!(!mask.contains('a'));
    }

    #[test]
    fn anagrams_share_a_mask() {
        assert_eq!(LetterMask::from_word("abcde"), LetterMask::from_word("edcba"));
    }

    #[test]
    fn rejects_repeats_and_non_letters() {
        assert_eq!(LetterMask::from_word("hello"), None);
        assert_eq!(LetterMask::from_word("Fjord"), None);
        assert_eq!(LetterMask::from_word("ab-de"), None);
        assert_eq!(LetterMask::from_word("café"), None);
    }

    #[test]
    fn disjoint_and_union() {
        let a = LetterMask::from_word("abcde").unwrap();
        let b = LetterMask::from_word("fghij").unwrap();
        let c = LetterMask::from_word("xbcde").unwrap();
        assert!(a.is_disjoint(b));
        assert!(!a.is_disjoint(c));
        assert_eq!((a | b).count(), 10);
        assert_eq!((a | b).missing().count(), 16);
        assert_eq!(LetterMask::ALL.missing(), LetterMask::EMPTY);
    }
}
