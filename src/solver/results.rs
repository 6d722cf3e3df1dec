//! Result aggregation
//!
//! Keeps one entry per distinct word: the highest-scoring path wins and
//! ties keep whichever was recorded first.

use crate::core::FoundWord;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::hash_map::Entry;

/// Best path per word
#[derive(Debug, Clone, Default)]
pub struct Results {
    words: FxHashMap<String, FoundWord>,
}

impl Results {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a candidate
    ///
    /// Returns true if the candidate was stored, i.e. the word was new or
    /// the candidate strictly beats the stored score.
    pub fn record(&mut self, candidate: FoundWord) -> bool {
        match self.words.entry(candidate.word.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
                true
            }
            Entry::Occupied(mut slot) if candidate.score > slot.get().score => {
                slot.insert(candidate);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Fold `other` into `self`; entries already in `self` win ties
    pub fn merge(&mut self, other: Self) {
        for candidate in other.words.into_values() {
            self.record(candidate);
        }
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&FoundWord> {
        self.words.get(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Highest score recorded so far
    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.words.values().map(|w| w.score).max()
    }

    /// Ranked list: score descending, then length descending
    ///
    /// Remaining ties are broken alphabetically so the order never depends
    /// on hash iteration.
    #[must_use]
    pub fn finalize(self) -> Vec<FoundWord> {
        let mut ranked: Vec<FoundWord> = self.words.into_values().collect();
        ranked.sort_unstable_by(|a, b| {
            (Reverse(a.score), Reverse(a.len()), &a.word)
                .cmp(&(Reverse(b.score), Reverse(b.len()), &b.word))
        });
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    fn found(word: &str, score: u32, start_col: usize) -> FoundWord {
        FoundWord {
            word: word.to_string(),
            path: (0..word.len())
                .map(|i| Position::new(0, start_col + i))
                .collect(),
            score,
            swaps: Vec::new(),
            gem_cost: 0,
        }
    }

    #[test]
    fn record_keeps_best_score() {
        let mut results = Results::new();
        assert!(results.record(found("CAT", 5, 0)));
        assert!(results.record(found("CAT", 9, 1)));
        assert!(!results.record(found("CAT", 7, 2)));

        let cat = results.get("CAT").unwrap();
        assert_eq!(cat.score, 9);
        assert_eq!(cat.path[0], Position::new(0, 1));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn ties_keep_first_recorded() {
        let mut results = Results::new();
        results.record(found("DOG", 6, 0));
        assert!(!results.record(found("DOG", 6, 4)));
        assert_eq!(results.get("DOG").unwrap().path[0], Position::new(0, 0));
    }

    #[test]
    fn merge_prefers_existing_on_tie() {
        let mut first = Results::new();
        first.record(found("TEA", 4, 0));
        first.record(found("EAT", 3, 0));

        let mut second = Results::new();
        second.record(found("TEA", 4, 5));
        second.record(found("EAT", 8, 5));
        second.record(found("ATE", 3, 5));

        first.merge(second);
        assert_eq!(first.len(), 3);
        assert_eq!(first.get("TEA").unwrap().path[0], Position::new(0, 0));
        assert_eq!(first.get("EAT").unwrap().score, 8);
        assert_eq!(first.best_score(), Some(8));
    }

    #[test]
    fn finalize_ranks_by_score_then_length() {
        let mut results = Results::new();
        results.record(found("CAT", 6, 0));
        results.record(found("CATS", 6, 0));
        results.record(found("ZAP", 15, 0));
        results.record(found("ACT", 6, 0));
        results.record(found("AT", 2, 0));

        let words: Vec<String> = results.finalize().into_iter().map(|w| w.word).collect();
        assert_eq!(words, vec!["ZAP", "CATS", "ACT", "CAT", "AT"]);
    }

    #[test]
    fn finalize_empty() {
        assert!(Results::new().finalize().is_empty());
        assert_eq!(Results::new().best_score(), None);
    }
}
