//! Compound-word correction dictionaries used by `parse_errors_1` (spec
//! §4.4).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompoundDict {
    /// Lowercased wrongly-joined word -> the pieces it should split into.
    pub wrongly_joined: FxHashMap<String, Vec<String>>,
    /// (first, second) word pairs that should join into a single word.
    pub wrongly_split: Vec<(String, String, String)>,
}

impl CompoundDict {
    pub fn lookup_split(&self, a: &str, b: &str) -> Option<&str> {
        self.wrongly_split
            .iter()
            .find(|(x, y, _)| x == a && y == b)
            .map(|(_, _, joined)| joined.as_str())
    }

    pub fn default_dict() -> Self {
        let mut d = CompoundDict::default();
        for (joined, pieces) in [("íhverju", vec!["í", "hverju"]), ("aðþví", vec!["að", "því"])] {
            d.wrongly_joined
                .insert(joined.to_string(), pieces.into_iter().map(str::to_string).collect());
        }
        for (a, b, joined) in [("al", "dri", "aldri"), ("fyrir", "tæki", "fyrirtæki")] {
            d.wrongly_split.push((a.to_string(), b.to_string(), joined.to_string()));
        }
        d
    }
}
