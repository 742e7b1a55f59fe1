use bit_set::BitSet;
use itertools::Itertools;
use log::{debug, trace};

use crate::catalog::WordCatalog;
use crate::conflict::ConflictIndex;

/// Ranks every catalog word by ascending number of permitted words, ties
/// broken by spelling.
///
/// Permitted sets are re-keyed by rank, so iterating one visits words in
/// search order.
#[derive(Clone, Debug, Default)]
pub struct SearchOrder {
    /// rank -> catalog index
    ordered: Vec<usize>,
    /// catalog index -> rank
    rank: Vec<usize>,
    /// rank -> ranks of permitted words
    permitted: Vec<BitSet>,
}

impl SearchOrder {
    pub fn build(catalog: &WordCatalog, index: &ConflictIndex) -> Self {
        let ordered = (0..catalog.len())
            .sorted_by_key(|&idx| (index.permitted_count(idx), catalog[idx].as_str()))
            .collect_vec();

        let mut rank = vec![0; ordered.len()];
        for (r, &idx) in ordered.iter().enumerate() {
            rank[idx] = r;
        }

        let permitted = ordered
            .iter()
            .map(|&idx| {
                index
                    .permitted(idx)
                    .iter()
                    .map(|other| rank[other])
                    .collect::<BitSet>()
            })
            .collect_vec();

        if let (Some(&first), Some(&last)) = (ordered.first(), ordered.last()) {
            debug!(
                target: "order",
                "first '{}' permits {}, last '{}' permits {}",
                catalog[first],
                index.permitted_count(first),
                catalog[last],
                index.permitted_count(last)
            );
        }
        trace!(target: "order", "{:?}", ordered);

        SearchOrder {
            ordered,
            rank,
            permitted,
        }
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Catalog index of the word at `rank`.
    pub fn word(&self, rank: usize) -> usize {
        self.ordered[rank]
    }

    /// Rank of the word at catalog index `idx`.
    pub fn rank(&self, idx: usize) -> usize {
        self.rank[idx]
    }

    /// Catalog indices in rank order.
    pub fn ordered(&self) -> &[usize] {
        &self.ordered
    }

    /// Ranks of the words compatible with the word at `rank`.
    pub fn permitted(&self, rank: usize) -> &BitSet {
        &self.permitted[rank]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_of(words: &[&str]) -> (WordCatalog, ConflictIndex, SearchOrder) {
        let catalog = WordCatalog::build(words.iter().copied());
        let index = ConflictIndex::build(&catalog);
        let order = SearchOrder::build(&catalog, &index);
        (catalog, index, order)
    }

    #[test]
    fn ascending_by_permitted_count() {
        let (_, index, order) =
            order_of(&["abcde", "fghij", "xbcde", "klmno", "afkpu", "vwxyz"]);
        let counts = order
            .ordered()
            .iter()
            .map(|&idx| index.permitted_count(idx))
            .collect_vec();
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn ties_broken_by_spelling() {
        // All pairwise disjoint, so every word permits the other four.
        let (catalog, _, order) = order_of(&["uvwxy", "klmno", "abcde", "pqrst", "fghij"]);
        let spelled = order
            .ordered()
            .iter()
            .map(|&idx| catalog[idx].as_str())
            .collect_vec();
        assert_eq!(spelled, ["abcde", "fghij", "klmno", "pqrst", "uvwxy"]);
    }

    #[test]
    fn rank_is_a_bijection() {
        let (catalog, _, order) =
            order_of(&["fjord", "gucks", "nymph", "vibex", "waltz", "bling"]);
        assert_eq!(order.len(), catalog.len());
        for idx in 0..catalog.len() {
            assert_eq!(order.word(order.rank(idx)), idx);
        }
        assert_eq!(
            order.ordered().iter().copied().sorted().collect_vec(),
            (0..catalog.len()).collect_vec()
        );
    }

    #[test]
    fn permitted_by_rank_matches_index() {
        let (catalog, index, order) =
            order_of(&["abcde", "fghij", "xbcde", "klmno", "afkpu", "vwxyz"]);
        for r in 0..order.len() {
            let idx = order.word(r);
            let by_rank = order
                .permitted(r)
                .iter()
                .map(|p| order.word(p))
                .sorted()
                .collect_vec();
            assert_eq!(by_rank, index.permitted(idx).iter().collect_vec());
        }
        assert_eq!(order.len(), catalog.len());
    }
}
