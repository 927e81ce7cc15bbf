//! The morphological lexicon boundary: the pipeline only ever talks to this
//! trait. A real deployment backs it with a word-form database; tests back
//! it with an in-memory map.

use crate::token::{Case, GrammaticalNumber, Meaning, WordCategory};
use rustc_hash::FxHashMap;

/// A scoped, read-only handle to the lexicon for the duration of one
/// pipeline run (spec §3, §5: "scoped acquisition with guaranteed release").
/// Implementations close any underlying resource in `Drop`.
pub trait Lexicon {
    /// Look up every known meaning of `word`. `at_sentence_start` and
    /// `auto_uppercase` influence case-sensitive matching: a capitalized
    /// word at sentence start may also match its lowercase lexicon entry,
    /// and vice versa when `auto_uppercase` is set (spec §4.6).
    fn lookup_word(
        &self,
        word: &str,
        at_sentence_start: bool,
        auto_uppercase: bool,
    ) -> crate::error::Result<(String, Vec<Meaning>)>;
}

/// An in-memory lexicon, useful for tests and for embedding a small fixed
/// vocabulary. Keyed case-sensitively; `lookup_word` additionally tries the
/// capitalized/lowercased form depending on `at_sentence_start` /
/// `auto_uppercase`, mirroring spec §4.6.
#[derive(Debug, Default)]
pub struct MemoryLexicon {
    entries: FxHashMap<String, Vec<Meaning>>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: impl Into<String>, meanings: Vec<Meaning>) -> &mut Self {
        self.entries.entry(word.into()).or_default().extend(meanings);
        self
    }

    fn get(&self, word: &str) -> Vec<Meaning> {
        self.entries.get(word).cloned().unwrap_or_default()
    }
}

impl Lexicon for MemoryLexicon {
    fn lookup_word(
        &self,
        word: &str,
        at_sentence_start: bool,
        auto_uppercase: bool,
    ) -> crate::error::Result<(String, Vec<Meaning>)> {
        let mut meanings = self.get(word);
        if meanings.is_empty() && (at_sentence_start || auto_uppercase) {
            if let Some(first) = word.chars().next() {
                let lowered: String =
                    first.to_lowercase().chain(word.chars().skip(1)).collect();
                if lowered != word {
                    meanings = self.get(&lowered);
                }
            }
        }
        Ok((word.to_string(), meanings))
    }
}

/// Convenience builder for a `Meaning`, used heavily by tests and by
/// default-dictionary construction.
pub fn meaning(
    stem: &str,
    utg: i64,
    category: WordCategory,
    class: &str,
    wordform: &str,
    inflection: &str,
) -> Meaning {
    Meaning {
        stem: stem.to_string(),
        utg,
        category,
        class: class.to_string(),
        wordform: wordform.to_string(),
        inflection: inflection.to_string(),
        number: None,
        case: None,
    }
}

/// A `meaning()` with grammatical number and case attached, for name
/// entries where §4.8 requires both to drive the accumulator.
pub fn meaning_with(
    stem: &str,
    utg: i64,
    category: WordCategory,
    class: &str,
    wordform: &str,
    inflection: &str,
    number: GrammaticalNumber,
    case: Case,
) -> Meaning {
    Meaning { number: Some(number), case: Some(case), ..meaning(stem, utg, category, class, wordform, inflection) }
}
