//! Attach lexicon meanings to bare WORD tokens, tracking the
//! `at_sentence_start` flag (spec §4.6).

use crate::lexicon::Lexicon;
use crate::token::{Token, TokenKind};

pub fn annotate(
    tokens: Vec<Token>,
    lexicon: &dyn Lexicon,
    auto_uppercase: bool,
) -> crate::error::Result<Vec<Token>> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut at_sentence_start = false;

    for tok in tokens {
        let next_flag = match &tok.kind {
            TokenKind::SBegin { .. } => true,
            TokenKind::Punctuation(_) if tok.txt == ":" => true,
            TokenKind::Punctuation(_) | TokenKind::Ordinal(_) => at_sentence_start,
            _ => false,
        };

        if let TokenKind::Word(meanings) = &tok.kind {
            if meanings.is_empty() {
                let (canonical, looked_up) =
                    lexicon.lookup_word(&tok.txt, at_sentence_start, auto_uppercase)?;
                out.push(Token::word(canonical, looked_up).with_error(tok.error.clone()));
                at_sentence_start = next_flag;
                continue;
            }
        }

        out.push(tok);
        at_sentence_start = next_flag;
    }

    Ok(out)
}
