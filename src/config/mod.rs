//! Configuration: the static dictionaries every phrase/particle/entity stage
//! consults (spec §1: "configuration loaders that populate static
//! dictionaries ... "; spec §9: "built once at startup from config; treated
//! as immutable shared read-only data"). A [`Config`] is built once and
//! shared (by reference) across every stage in a pipeline run.

pub mod abbreviations;
pub mod compounds;
pub mod names;
pub mod numbers;
pub mod phrases;

pub use abbreviations::AbbreviationDict;
pub use compounds::CompoundDict;
pub use names::NameDict;
pub use numbers::NumberDict;
pub use phrases::{PhraseDict, PhraseDictBuilder};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The aggregate, immutable configuration for a tokenizer run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub abbreviations: AbbreviationDict,
    pub compounds: CompoundDict,
    pub names: NameDict,
    pub numbers: NumberDict,
    pub static_phrases: PhraseDict,
    pub ambiguous_phrases: PhraseDict,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            abbreviations: AbbreviationDict::default_dict(),
            compounds: CompoundDict::default_dict(),
            names: NameDict::default_dict(),
            numbers: NumberDict::default_dict(),
            static_phrases: phrases::default_static_phrases(),
            ambiguous_phrases: phrases::default_ambiguous_phrases(),
        }
    }
}

impl Config {
    /// Deserialize a full configuration from JSON, as an external config
    /// loader would (spec §1 treats config loading as an external
    /// collaborator; this is the shape it must produce).
    pub fn from_json_str(text: &str) -> Result<Config> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }
}
