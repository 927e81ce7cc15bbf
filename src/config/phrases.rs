//! Static- and ambiguous-phrase dictionaries (spec §4.5, §4.10). Both stages
//! share one matching engine (see [`crate::phrase_matcher`]); this module
//! only holds the data each one matches against.

use crate::token::Meaning;
use serde::{Deserialize, Serialize};

/// One multi-word phrase entry. `meanings` is populated for static-phrase
/// entries (the meanings attached to the single fused WORD emitted on
/// match); `categories` is populated for ambiguous-phrase entries (one
/// category name per position in `words`, spec §4.10).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub words: Vec<String>,
    pub meanings: Vec<Meaning>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhraseDict {
    pub entries: Vec<PhraseEntry>,
}

#[derive(Default)]
pub struct PhraseDictBuilder {
    dict: PhraseDict,
}

impl PhraseDictBuilder {
    pub fn static_phrase(mut self, words: &[&str], meanings: Vec<Meaning>) -> Self {
        self.dict.entries.push(PhraseEntry {
            words: words.iter().map(|w| w.to_string()).collect(),
            meanings,
            categories: Vec::new(),
        });
        self
    }

    pub fn ambiguous_phrase(mut self, words: &[&str], categories: &[&str]) -> Self {
        self.dict.entries.push(PhraseEntry {
            words: words.iter().map(|w| w.to_string()).collect(),
            meanings: Vec::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        });
        self
    }

    pub fn build(self) -> PhraseDict {
        self.dict
    }
}

/// A small representative default static-phrase table. The real dictionary
/// is loaded from configuration (spec §1, out of scope here); this default
/// exercises the matcher's longest-match and auto-uppercase behavior.
pub fn default_static_phrases() -> PhraseDict {
    use crate::lexicon::meaning;
    use crate::token::WordCategory;

    PhraseDictBuilder::default()
        .static_phrase(
            &["fjármála-", "og", "efnahagsráðuneyti"],
            vec![meaning(
                "fjármála- og efnahagsráðuneyti",
                0,
                WordCategory::Noun(crate::token::Gender::Hk),
                "alm",
                "fjármála- og efnahagsráðuneyti",
                "NFET",
            )],
        )
        .static_phrase(
            &["Norður", "Ameríka"],
            vec![meaning(
                "Norður Ameríka",
                0,
                WordCategory::Noun(crate::token::Gender::Kvk),
                "ism",
                "Norður Ameríka",
                "NFET",
            )],
        )
        .build()
}

/// A small representative default ambiguous-phrase table.
pub fn default_ambiguous_phrases() -> PhraseDict {
    PhraseDictBuilder::default()
        .ambiguous_phrase(&["eftir", "að"], &["fs", "st"])
        .ambiguous_phrase(&["í", "dag"], &["fs", "no"])
        .build()
}
