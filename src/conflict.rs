use bit_set::BitSet;
use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

use crate::catalog::WordCatalog;

/// For every catalog word, the catalog indices of words sharing no letter with it.
#[derive(Clone, Debug, Default)]
pub struct ConflictIndex {
    permitted: Vec<BitSet>,
}

impl ConflictIndex {
    pub fn build(catalog: &WordCatalog) -> Self {
        let masks = catalog.iter().map(|w| w.mask()).collect_vec();

        // A mask is never disjoint with itself, so no word permits itself.
        let permitted: Vec<BitSet> = masks
            .par_iter()
            .map(|&mask| {
                masks
                    .iter()
                    .positions(|&other| other.is_disjoint(mask))
                    .collect::<BitSet>()
            })
            .collect();

        debug!(
            target: "conflict",
            "{} words, {} permitted pairs",
            permitted.len(),
            permitted.iter().map(BitSet::len).sum::<usize>() / 2
        );
        ConflictIndex { permitted }
    }

    pub fn len(&self) -> usize {
        self.permitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permitted.is_empty()
    }

    /// Catalog indices of the words compatible with word `idx`.
    pub fn permitted(&self, idx: usize) -> &BitSet {
        &self.permitted[idx]
    }

    pub fn permitted_count(&self, idx: usize) -> usize {
        self.permitted[idx].len()
    }
}
