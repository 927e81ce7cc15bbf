//! N-token match against the ambiguous-phrase dictionary, pruning meanings
//! by the category declared at each matched position (spec §4.10).

use crate::config::Config;
use crate::lexicon::meaning;
use crate::phrase_matcher::PhraseIndex;
use crate::token::{Token, TokenKind, WordCategory};

/// Does a meaning's category satisfy the category name an ambiguous-phrase
/// entry declares for this position (spec §4.10)? `"no"` is a generic-noun
/// wildcard matching any gender.
fn category_matches(category: &WordCategory, declared: &str) -> bool {
    match declared {
        "kk" => matches!(category, WordCategory::Noun(crate::token::Gender::Kk)),
        "kvk" => matches!(category, WordCategory::Noun(crate::token::Gender::Kvk)),
        "hk" => matches!(category, WordCategory::Noun(crate::token::Gender::Hk)),
        "no" => matches!(category, WordCategory::Noun(_)),
        "lo" => matches!(category, WordCategory::Adjective),
        "to" | "töl" => matches!(category, WordCategory::Numeral),
        "fs" => matches!(category, WordCategory::Preposition),
        "ism" => matches!(category, WordCategory::GivenName),
        "föð" => matches!(category, WordCategory::Patronym),
        "móð" => matches!(category, WordCategory::Matronym),
        "nafn" => matches!(category, WordCategory::GenericName),
        "ao" => matches!(category, WordCategory::Adverb),
        "ob" => matches!(category, WordCategory::Indeclinable),
        other => matches!(category, WordCategory::Other(o) if o == other),
    }
}

pub fn disambiguate_phrases(tokens: Vec<Token>, config: &Config) -> Vec<Token> {
    let index = PhraseIndex::new(&config.ambiguous_phrases);
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let tok = &tokens[i];
        let is_starter = tok.kind.is_word() && index.starts_phrase(&tok.txt.to_lowercase());

        if is_starter {
            let window_end = (i + index.max_len()).min(tokens.len());
            let mut lowered = Vec::new();
            for t in &tokens[i..window_end] {
                if !t.kind.is_word() {
                    break;
                }
                lowered.push(t.txt.to_lowercase());
            }

            if let Some((entry_idx, len)) = index.longest_match(&lowered) {
                let entry = index.entry(entry_idx);
                for (offset, category_name) in entry.categories.iter().enumerate() {
                    let pos = &tokens[i + offset];
                    let pruned = if category_name == "fs" {
                        vec![meaning(&pos.txt, 0, WordCategory::Preposition, "alm", &pos.txt, "-")]
                    } else {
                        pos.kind
                            .meanings()
                            .map(|ms| {
                                ms.iter()
                                    .filter(|m| category_matches(&m.category, category_name))
                                    .cloned()
                                    .collect()
                            })
                            .unwrap_or_default()
                    };
                    out.push(Token::word(pos.txt.clone(), pruned).with_error(pos.error.clone()));
                }
                i += len;
                continue;
            }
        }

        out.push(tok.clone());
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::phrases::PhraseDictBuilder;
    use crate::lexicon::meaning;
    use crate::token::Gender;

    #[test]
    fn prunes_meanings_to_declared_category() {
        let mut cfg = Config::default();
        cfg.ambiguous_phrases =
            PhraseDictBuilder::default().ambiguous_phrase(&["í", "dag"], &["fs", "no"]).build();
        let i_tok = Token::word(
            "í",
            vec![meaning("í", 1, WordCategory::Preposition, "alm", "í", "-")],
        );
        let dag_tok = Token::word(
            "dag",
            vec![
                meaning("dagur", 2, WordCategory::Noun(Gender::Kk), "alm", "dag", "ÞFET"),
                meaning("dag", 3, WordCategory::Adverb, "alm", "dag", "-"),
            ],
        );
        let out = disambiguate_phrases(vec![i_tok, dag_tok], &cfg);
        assert_eq!(out.len(), 2);
        let pruned = out[1].kind.meanings().unwrap();
        assert_eq!(pruned.len(), 1);
        assert_eq!(pruned[0].category, WordCategory::Noun(Gender::Kk));
    }
}
