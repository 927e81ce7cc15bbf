//! The abbreviation dictionary (spec GLOSSARY: "curated mapping of
//! abbreviated word forms to full meanings, plus classification into
//! SINGLES, FINISHERS, NOT_FINISHERS, NAME_FINISHERS").

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbbreviationDict {
    /// word -> full expansion text, used when annotating the fused WORD.
    pub expansions: FxHashMap<String, String>,
    /// Abbreviations that must be written with a trailing dot to count
    /// (looked up case-sensitively unless absent here, in which case a
    /// case-folded lookup is tried -- spec §4.2).
    pub singles: FxHashSet<String>,
    /// Abbreviations that always stand at the end of a sentence.
    pub finishers: FxHashSet<String>,
    /// Abbreviations that never end a sentence, regardless of what follows.
    pub not_finishers: FxHashSet<String>,
    /// Abbreviations after which a following capitalized word is not
    /// treated as a new sentence's first word purely because it could be a
    /// person name (spec §4.2: "abbrev ∈ NAME_FINISHER ... count non-PERSON
    /// uppercase text").
    pub name_finishers: FxHashSet<String>,
    /// Forms that are valid abbreviations *without* a trailing dot (the
    /// carve-out mentioned in spec §4.2: a raw form "separately listed as a
    /// dot-less abbreviation" blocks the case-folded SINGLES lookup).
    pub dotless: FxHashSet<String>,
}

impl AbbreviationDict {
    /// Is `word` (without its trailing dot) a recognized abbreviation,
    /// either directly or via a case-folded lookup -- provided `word` is
    /// not itself a dot-less abbreviation (spec §4.2)?
    pub fn is_abbreviation(&self, word: &str) -> bool {
        if self.dotless.contains(word) {
            return false;
        }
        if self.singles.contains(word) || self.expansions.contains_key(word) {
            return true;
        }
        let folded = fold_case(word);
        self.singles.contains(&folded) || self.expansions.contains_key(&folded)
    }

    pub fn classify(&self, word: &str) -> AbbrevClass {
        if self.finishers.contains(word) {
            AbbrevClass::Finisher
        } else if self.not_finishers.contains(word) {
            AbbrevClass::NotFinisher
        } else if self.name_finishers.contains(word) {
            AbbrevClass::NameFinisher
        } else {
            AbbrevClass::Plain
        }
    }

    pub fn default_dict() -> Self {
        let mut d = AbbreviationDict::default();
        // A representative default set; a real deployment loads this from
        // Abbrev.conf-style configuration (spec §1, out of scope here).
        for (abbrev, expansion) in [
            ("t.d.", "til dæmis"),
            ("o.s.frv.", "og svo framvegis"),
            ("m.a.", "meðal annars"),
            ("þ.e.", "það er"),
            ("Dr.", "doktor"),
            ("Hr.", "herra"),
            ("Frú.", "frú"),
            ("kl.", "klukkan"),
            ("nr.", "númer"),
            ("sbr.", "samanber"),
        ] {
            d.expansions.insert(abbrev.trim_end_matches('.').to_string(), expansion.to_string());
        }
        for s in ["Dr", "Hr", "Frú", "nr", "sbr", "kl"] {
            d.singles.insert(s.to_string());
        }
        for s in ["o.s.frv", "þ.e.a.s"] {
            d.finishers.insert(s.to_string());
        }
        for s in ["t.d", "m.a", "sbr"] {
            d.not_finishers.insert(s.to_string());
        }
        for s in ["Hr", "Frú", "Dr"] {
            d.name_finishers.insert(s.to_string());
        }
        d
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbbrevClass {
    Finisher,
    NotFinisher,
    NameFinisher,
    Plain,
}

fn fold_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
