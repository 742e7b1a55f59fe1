//! Finds every set of five words that between them use twenty-five distinct
//! letters.
//!
//! The pipeline runs strictly forward: [`WordCatalog`] cleans the raw word
//! list, [`ConflictIndex`] records which words share no letter, [`SearchOrder`]
//! ranks words so the sparsest are tried first, and [`Combinator`] walks the
//! ranked words depth first.

pub mod catalog;
pub mod combinator;
pub mod conflict;
pub mod mask;
pub mod order;

use itertools::Itertools;
use log::debug;

pub use catalog::{CatalogStats, Word, WordCatalog};
pub use combinator::{Combinator, Combo, RankCombo, SeedPool};
pub use conflict::ConflictIndex;
pub use mask::LetterMask;
pub use order::SearchOrder;

/// Letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Letters in a usable word.
pub const WORD_LEN: usize = 5;

/// Words in a combo.
pub const COMBO_LEN: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Search seeds on the rayon thread pool.
    pub parallel: bool,
    pub seed_pool: SeedPool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            parallel: true,
            seed_pool: SeedPool::Shrinking,
        }
    }
}

/// Every five-word combo in `catalog`, in discovery order (by seed rank).
pub fn search(catalog: &WordCatalog, config: &SearchConfig) -> Vec<Combo> {
    let index = ConflictIndex::build(catalog);
    let order = SearchOrder::build(catalog, &index);
    let combinator = Combinator::new(catalog, &order, config.seed_pool);

    let found = if config.parallel {
        combinator.par_run()
    } else {
        combinator.run()
    };
    debug!("{} combos from {} words", found.len(), catalog.len());

    found
        .into_iter()
        .map(|ranks| combinator.to_combo(ranks))
        .collect()
}

/// Every five-word combo drawn from `raw`, sorted by spelling.
pub fn find_combos<I, S>(raw: I, config: &SearchConfig) -> Vec<Combo>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let catalog = WordCatalog::build(raw);
    search(&catalog, config).into_iter().sorted().collect()
}
