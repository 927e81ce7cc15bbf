//! N-token longest-match replacement against the static-phrase dictionary
//! (spec §4.5), built on the shared [`crate::phrase_matcher`] engine.

use crate::config::Config;
use crate::phrase_matcher::PhraseIndex;
use crate::token::{compound_error, Token, TokenKind};

pub fn parse_static_phrases(tokens: Vec<Token>, config: &Config, auto_uppercase: bool) -> Vec<Token> {
    let index = PhraseIndex::new(&config.static_phrases);
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let tok = &tokens[i];
        let is_starter = tok.kind.is_word()
            && index.starts_phrase(&tok.txt.to_lowercase())
            && !(auto_uppercase && tok.txt.chars().count() == 1 && tok.txt.chars().all(|c| c.is_lowercase()));

        if is_starter {
            let window_end = (i + index.max_len()).min(tokens.len());
            let mut lowered = Vec::new();
            let mut word_run_end = i;
            for tok in &tokens[i..window_end] {
                if !tok.kind.is_word() {
                    break;
                }
                lowered.push(tok.txt.to_lowercase());
                word_run_end += 1;
            }

            if let Some((entry_idx, len)) = index.longest_match(&lowered) {
                let entry = index.entry(entry_idx);
                let matched = &tokens[i..i + len];
                let fused_txt = matched.iter().map(|t| t.txt.as_str()).collect::<Vec<_>>().join(" ");
                let fused_error = compound_error(matched.iter().map(|t| t.error.clone()));
                out.push(Token::word(fused_txt, entry.meanings.clone()).with_error(fused_error));
                i += len;
                continue;
            }
            let _ = word_run_end;
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

    #[test]
    fn fuses_matching_phrase() {
        let mut cfg = Config::default();
        cfg.static_phrases =
            PhraseDictBuilder::default().static_phrase(&["Norður", "Ameríka"], vec![]).build();
        let tokens = vec![Token::word("Norður", vec![]), Token::word("Ameríka", vec![])];
        let out = parse_static_phrases(tokens, &cfg, false);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].txt, "Norður Ameríka");
    }

    #[test]
    fn leaves_non_matching_words_untouched() {
        let cfg = Config::default();
        let tokens = vec![Token::word("Jón", vec![]), Token::word("kom", vec![])];
        let out = parse_static_phrases(tokens, &cfg, false);
        assert_eq!(out.len(), 2);
    }
}
