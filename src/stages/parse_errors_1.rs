//! Reduplication collapsing, wrongly-joined compound splitting, and
//! wrongly-split compound joining (spec §4.4).

use crate::config::Config;
use crate::token::{compound_error, ErrorCode, Token, TokenKind};

pub fn parse_errors_1(tokens: Vec<Token>, config: &Config) -> Vec<Token> {
    let split_first = split_joined_compounds(tokens, config);
    let joined = join_split_compounds(split_first, config);
    collapse_reduplication(joined)
}

fn split_joined_compounds(tokens: Vec<Token>, config: &Config) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    for tok in tokens {
        if let TokenKind::Word(meanings) = &tok.kind {
            if meanings.is_empty() {
                if let Some(pieces) = config.compounds.wrongly_joined.get(&tok.txt.to_lowercase()) {
                    for piece in pieces {
                        out.push(
                            Token::word(piece, vec![])
                                .with_error(vec![ErrorCode::WronglyJoinedCompoundSplit]),
                        );
                    }
                    continue;
                }
            }
        }
        out.push(tok);
    }
    out
}

fn join_split_compounds(tokens: Vec<Token>, config: &Config) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();
    while let Some(tok) = iter.next() {
        if tok.kind.is_word() {
            if let Some(next) = iter.peek() {
                if next.kind.is_word() {
                    if let Some(joined) = config.compounds.lookup_split(&tok.txt, &next.txt) {
                        let joined = joined.to_string();
                        let next = iter.next().unwrap();
                        out.push(
                            Token::word(joined, vec![]).with_error(compound_error([
                                tok.error.clone(),
                                next.error.clone(),
                                vec![ErrorCode::WronglySplitCompoundJoined],
                            ])),
                        );
                        continue;
                    }
                }
            }
        }
        out.push(tok);
    }
    out
}

/// Collapse an immediately repeated identical WORD into one occurrence,
/// flagging the reduplication.
fn collapse_reduplication(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for tok in tokens {
        let is_dup = match (out.last(), &tok.kind) {
            (Some(prev), TokenKind::Word(_)) => prev.kind.is_word() && prev.txt == tok.txt,
            _ => false,
        };
        if is_dup {
            let prev = out.last_mut().unwrap();
            prev.error = compound_error([
                prev.error.clone(),
                tok.error.clone(),
                vec![ErrorCode::PunctuationOrReduplicationFixed],
            ]);
        } else {
            out.push(tok);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_repeated_word() {
        let toks = vec![Token::word("mjög", vec![]), Token::word("mjög", vec![])];
        let out = collapse_reduplication(toks);
        assert_eq!(out.len(), 1);
        assert!(out[0].error.contains(&ErrorCode::PunctuationOrReduplicationFixed));
    }

    #[test]
    fn splits_wrongly_joined_compound() {
        let cfg = Config::default();
        let toks = vec![Token::word("íhverju", vec![])];
        let out = split_joined_compounds(toks, &cfg);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].txt, "í");
        assert_eq!(out[1].txt, "hverju");
    }

    #[test]
    fn joins_wrongly_split_compound() {
        let cfg = Config::default();
        let toks = vec![Token::word("al", vec![]), Token::word("dri", vec![])];
        let out = join_split_compounds(toks, &cfg);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].txt, "aldri");
    }
}
