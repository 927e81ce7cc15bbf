//! The N-token longest-match engine shared by `parse_static_phrases` (spec
//! §4.5) and `disambiguate_phrases` (spec §4.10). Both stages are "maintain
//! a queue of tokens whose lowercased text is an exact prefix of some
//! dictionary entry; on failure to extend, flush the longest entry that
//! matched" -- so the matching logic lives here once, and each stage only
//! supplies its own post-match behavior (fuse into one WORD, or prune
//! meanings by category).

use crate::config::phrases::PhraseDict;
use rustc_hash::FxHashMap;

/// Index over a [`PhraseDict`] grouping entries by their first word, for
/// O(1) "could a phrase start here?" checks.
pub struct PhraseIndex<'a> {
    dict: &'a PhraseDict,
    by_first_word: FxHashMap<String, Vec<usize>>,
    max_len: usize,
}

impl<'a> PhraseIndex<'a> {
    pub fn new(dict: &'a PhraseDict) -> Self {
        let mut by_first_word: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        let mut max_len = 1;
        for (i, entry) in dict.entries.iter().enumerate() {
            if let Some(first) = entry.words.first() {
                by_first_word.entry(first.to_lowercase()).or_default().push(i);
                max_len = max_len.max(entry.words.len());
            }
        }
        PhraseIndex { dict, by_first_word, max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// True if some entry could begin with this (lowercased) word. Used by
    /// callers to decide whether a single-letter lowercase word should be
    /// treated as a phrase starter at all (spec §4.5's auto-uppercase
    /// carve-out is applied by the caller, not here).
    pub fn starts_phrase(&self, lower_word: &str) -> bool {
        self.by_first_word.contains_key(lower_word)
    }

    /// Find the longest entry whose word sequence matches `words` (already
    /// lowercased) starting at index 0 of the slice. Returns the matching
    /// entry's index and how many words it consumed.
    pub fn longest_match(&self, words: &[String]) -> Option<(usize, usize)> {
        let first = words.first()?;
        let candidates = self.by_first_word.get(first)?;
        let mut best: Option<(usize, usize)> = None;
        for &idx in candidates {
            let entry = &self.dict.entries[idx];
            if entry.words.len() > words.len() {
                continue;
            }
            let matches = entry
                .words
                .iter()
                .zip(words.iter())
                .all(|(expected, actual)| expected.to_lowercase() == *actual);
            if matches {
                let len = entry.words.len();
                if best.map(|(_, best_len)| len > best_len).unwrap_or(true) {
                    best = Some((idx, len));
                }
            }
        }
        best
    }

    pub fn entry(&self, idx: usize) -> &crate::config::phrases::PhraseEntry {
        &self.dict.entries[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::phrases::PhraseDictBuilder;

    #[test]
    fn longest_match_prefers_longer_entry() {
        let dict = PhraseDictBuilder::default()
            .static_phrase(&["New", "York"], vec![])
            .static_phrase(&["New", "York", "City"], vec![])
            .build();
        let index = PhraseIndex::new(&dict);
        let words = vec!["new".to_string(), "york".to_string(), "city".to_string()];
        let (idx, len) = index.longest_match(&words).unwrap();
        assert_eq!(len, 3);
        assert_eq!(index.entry(idx).words, vec!["New", "York", "City"]);
    }

    #[test]
    fn no_match_returns_none() {
        let dict = PhraseDictBuilder::default().static_phrase(&["a", "b"], vec![]).build();
        let index = PhraseIndex::new(&dict);
        assert!(index.longest_match(&["c".to_string()]).is_none());
    }
}
