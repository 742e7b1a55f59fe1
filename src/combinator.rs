use std::fmt;

use bit_set::BitSet;
use itertools::Itertools;
use log::{debug, trace};
use rayon::prelude::*;

use crate::catalog::{Word, WordCatalog};
use crate::mask::LetterMask;
use crate::order::SearchOrder;
use crate::COMBO_LEN;

/// A completed combination, as ranks in strictly ascending order.
pub type RankCombo = [usize; COMBO_LEN];

/// What each seed's search is allowed to draw from at the top level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedPool {
    /// Every seed is removed from the pool before its own search and never
    /// restored.
    #[default]
    Shrinking,
    /// Every seed searches the whole catalog; only the rank filter keeps
    /// results unique.
    Full,
}

/// Enumerates every set of `COMBO_LEN` pairwise letter-disjoint words.
pub struct Combinator<'a> {
    catalog: &'a WordCatalog,
    order: &'a SearchOrder,
    seed_pool: SeedPool,
}

impl<'a> Combinator<'a> {
    pub fn new(catalog: &'a WordCatalog, order: &'a SearchOrder, seed_pool: SeedPool) -> Self {
        Combinator {
            catalog,
            order,
            seed_pool,
        }
    }

    /// Pool handed to the seed at `seed` rank.
    pub fn seed_pool(&self, seed: usize) -> BitSet {
        match self.seed_pool {
            SeedPool::Shrinking => (seed + 1..self.order.len()).collect(),
            SeedPool::Full => (0..self.order.len()).collect(),
        }
    }

    /// Runs every seed in rank order on the current thread.
    pub fn run(&self) -> Vec<RankCombo> {
        let shrinking = self.seed_pool == SeedPool::Shrinking;
        (0..self.order.len())
            .scan(
                (0..self.order.len()).collect::<BitSet>(),
                |pool, seed| {
                    if shrinking {
                        pool.remove(seed);
                    }
                    Some(self.search_seed(seed, pool))
                },
            )
            .flatten()
            .collect()
    }

    /// Runs seeds concurrently. Output order matches `run`.
    pub fn par_run(&self) -> Vec<RankCombo> {
        (0..self.order.len())
            .into_par_iter()
            .flat_map_iter(|seed| self.search_seed(seed, &self.seed_pool(seed)))
            .collect()
    }

    /// All combos whose lowest ranked word is `seed`.
    pub fn search_seed(&self, seed: usize, pool: &BitSet) -> Vec<RankCombo> {
        let mut found = Vec::new();
        let mut combo = Vec::with_capacity(COMBO_LEN);
        combo.push(seed);
        self.extend(pool, &mut combo, &mut found);

        if !found.is_empty() {
            debug!(
                target: "combinator",
                "seed {}/{} '{}': {} combos",
                seed + 1,
                self.order.len(),
                self.catalog[self.order.word(seed)],
                found.len()
            );
        }
        found
    }

    fn extend(&self, permitted: &BitSet, combo: &mut Vec<usize>, found: &mut Vec<RankCombo>) {
        let Some(&last) = combo.last() else {
            return;
        };

        let mut next = permitted.clone();
        next.intersect_with(self.order.permitted(last));
        if next.is_empty() {
            return;
        }

        // Only ranks after `last`, so each combo is built in one order only.
        if combo.len() == COMBO_LEN - 1 {
            for word in next.iter().filter(|&w| w > last) {
                let mut done = [0; COMBO_LEN];
                done[..COMBO_LEN - 1].copy_from_slice(combo);
                done[COMBO_LEN - 1] = word;
                trace!(target: "combinator", "{:?}", done);
                found.push(done);
            }
            return;
        }

        // BitSet iterates ascending, i.e. in rank order.
        let forward = next.iter().filter(|&w| w > last).collect_vec();
        for word in forward {
            combo.push(word);
            self.extend(&next, combo, found);
            combo.pop();
        }
    }

    /// Resolves ranks back to catalog words.
    pub fn to_combo(&self, ranks: RankCombo) -> Combo {
        Combo::new(ranks.map(|r| self.catalog[self.order.word(r)].clone()))
    }
}

/// A valid result, words sorted by spelling.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combo {
    words: [Word; COMBO_LEN],
}

impl Combo {
    pub fn new(mut words: [Word; COMBO_LEN]) -> Self {
        words.sort();
        Combo { words }
    }

    pub fn words(&self) -> &[Word; COMBO_LEN] {
        &self.words
    }

    /// Union of the letters of all words.
    pub fn mask(&self) -> LetterMask {
        self.words
            .iter()
            .fold(LetterMask::EMPTY, |acc, w| acc | w.mask())
    }

    /// The one letter of the alphabet no word uses.
    pub fn unused_letter(&self) -> Option<char> {
        self.mask().missing().letters().exactly_one().ok()
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.iter().join("-"))
    }
}
