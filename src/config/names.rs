//! Name-related dictionaries consulted by the person-name accumulator
//! (spec §4.8) and the entity recognizer (spec §4.9).

use crate::token::Case;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameDict {
    /// Words that look like given names but must never be treated as one
    /// at the very start of a sentence (original's `NOT_NAME_AT_SENTENCE_START`).
    pub sentence_start_blacklist: FxHashSet<String>,
    /// Per-case disallowed given names: words that morphologically look
    /// like a given name in that case but are excluded (spec §4.8).
    pub disallowed_by_case: BTreeMap<Case, FxHashSet<String>>,
    /// Names exempted from the "weak name" backoff even at sentence start
    /// with no corroborating evidence (spec §4.8, "name-preferences
    /// allowlist").
    pub preferences: FxHashSet<String>,
    /// Nobiliary particles that may appear inside a multi-word name
    /// (spec §4.8).
    pub nobiliary_particles: FxHashSet<String>,
}

impl NameDict {
    pub fn is_disallowed(&self, case: Case, word: &str) -> bool {
        self.disallowed_by_case.get(&case).map(|set| set.contains(word)).unwrap_or(false)
    }

    pub fn default_dict() -> Self {
        let mut d = NameDict::default();
        d.sentence_start_blacklist.insert("Annar".to_string());
        for particle in ["van", "de", "den", "der", "el", "al"] {
            d.nobiliary_particles.insert(particle.to_string());
        }
        for pref in ["Hjalti", "Sóllilja"] {
            d.preferences.insert(pref.to_string());
        }
        d
    }
}
