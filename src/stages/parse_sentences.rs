//! Sentence/paragraph delimiter insertion (spec §4.3).

use crate::punctuation::{is_sentence_end, is_sentence_finisher};
use crate::token::{PunctClass, Token, TokenKind};

pub fn parse_sentences(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::new();
    let mut in_sentence = false;
    let mut pending_pbegin = false;

    for tok in tokens {
        match &tok.kind {
            TokenKind::PBegin => {
                if in_sentence {
                    out.push(Token::new("", TokenKind::SEnd));
                    in_sentence = false;
                }
                pending_pbegin = true;
                continue;
            }
            TokenKind::PEnd => {
                if pending_pbegin {
                    // empty P_BEGIN/P_END pair, elided.
                    pending_pbegin = false;
                    continue;
                }
                if in_sentence {
                    out.push(Token::new("", TokenKind::SEnd));
                    in_sentence = false;
                }
                out.push(tok);
                continue;
            }
            _ => {}
        }

        if pending_pbegin {
            out.push(Token::new("", TokenKind::PBegin));
            pending_pbegin = false;
        }

        if !in_sentence {
            out.push(Token::new("", TokenKind::SBegin { num_parses: 0, err_index: 0 }));
            in_sentence = true;
        }

        let ends_sentence = matches!(&tok.kind, TokenKind::Punctuation(_)) && is_sentence_end(&tok.txt);

        out.push(tok);

        if ends_sentence {
            // Closes eagerly here; `reabsorb_finishers` below folds any
            // immediately trailing finisher punctuation back into this
            // sentence instead of starting a new one for it.
            out.push(Token::new("", TokenKind::SEnd));
            in_sentence = false;
        }
    }

    if in_sentence {
        out.push(Token::new("", TokenKind::SEnd));
    }

    reabsorb_finishers(out)
}

/// A sentence-end PUNCT immediately followed by S_END, then more
/// sentence-finisher punctuation and only then S_BEGIN again, should instead
/// keep those finishers inside the original sentence (spec §4.3: "optionally
/// preceded by trailing punctuation in the sentence-finisher set").
fn reabsorb_finishers(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let tok = &tokens[i];
        if matches!(tok.kind, TokenKind::SEnd) {
            let mut j = i + 1;
            let mut finishers = Vec::new();
            while j + 1 < tokens.len()
                && matches!(tokens[j].kind, TokenKind::SBegin { .. })
                && matches!(tokens[j + 1].kind, TokenKind::Punctuation(PunctClass::Right))
                && is_sentence_finisher(&tokens[j + 1].txt)
            {
                finishers.push(tokens[j + 1].clone());
                j += 2;
            }
            if !finishers.is_empty() {
                out.extend(finishers);
                out.push(Token::new("", TokenKind::SEnd));
                i = j;
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
    use crate::config::Config;
    use crate::stages::parse_tokens::parse_tokens;

    #[test]
    fn wraps_single_sentence() {
        let cfg = Config::default();
        let toks = parse_sentences(parse_tokens("Jón kom.", &cfg));
        assert!(matches!(toks.first().unwrap().kind, TokenKind::SBegin { .. }));
        assert!(matches!(toks.last().unwrap().kind, TokenKind::SEnd));
    }

    #[test]
    fn matched_nonempty_pairs() {
        let cfg = Config::default();
        let toks = parse_sentences(parse_tokens("Jón kom. Hann fór.", &cfg));
        let begins = toks.iter().filter(|t| matches!(t.kind, TokenKind::SBegin { .. })).count();
        let ends = toks.iter().filter(|t| matches!(t.kind, TokenKind::SEnd)).count();
        assert_eq!(begins, ends);
        assert_eq!(begins, 2);
    }
}
