//! Whitespace split + character-level classifier (spec §4.1): the first
//! stage, turning raw text into raw typed tokens with no fusion yet.

use super::digits::parse_digits;
use crate::config::Config;
use crate::punctuation::{self, COMPOSITE_HYPHENS, DQUOTES, HYPHENS, SQUOTES};
use crate::token::{PunctClass, Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]._%+-]+@[[:alnum:].-]+\.[[:alpha:]]{2,}").unwrap());

/// The quote style captured when a fully-wrapped quoted lexeme is opened,
/// resolving the "which closing class applies" ambiguity by making the
/// choice explicit at the point the quote opens rather than inferring it
/// later from incomplete state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteKind {
    Double,
    Single,
}

impl QuoteKind {
    fn opening(self) -> char {
        match self {
            QuoteKind::Double => '„',
            QuoteKind::Single => '‚',
        }
    }

    fn closing(self) -> char {
        match self {
            QuoteKind::Double => '“',
            QuoteKind::Single => '‘',
        }
    }

    fn of(c: char) -> Option<QuoteKind> {
        if DQUOTES.contains(c) {
            Some(QuoteKind::Double)
        } else if SQUOTES.contains(c) {
            Some(QuoteKind::Single)
        } else {
            None
        }
    }
}

/// Split `text` on whitespace and classify each lexeme (spec §4.1).
pub fn parse_tokens(text: &str, config: &Config) -> Vec<Token> {
    let mut out = Vec::new();
    for lexeme in text.split_whitespace() {
        tokenize_lexeme(lexeme, config, &mut out);
    }
    out
}

fn is_si_unit(word: &str, config: &Config) -> bool {
    config.numbers.si_units.contains_key(word)
}

fn tokenize_lexeme(lexeme: &str, config: &Config, out: &mut Vec<Token>) {
    if lexeme.is_empty() {
        return;
    }
    if lexeme.chars().all(|c| c.is_alphabetic()) || is_si_unit(lexeme, config) {
        out.push(Token::word(lexeme, vec![]));
        return;
    }
    if let Some(fully_wrapped) = fully_wrapped_quote(lexeme) {
        emit_quoted(fully_wrapped, config, out);
        return;
    }
    let chars: Vec<char> = lexeme.chars().collect();
    let mut i = 0usize;
    while i < chars.len() {
        let rest: String = chars[i..].iter().collect();

        if chars[i] == '@' || (chars[i].is_alphanumeric() && rest.contains('@')) {
            if let Some(m) = EMAIL_RE.find(&rest) {
                out.push(Token::new(m.as_str(), TokenKind::Email));
                i += m.as_str().chars().count();
                continue;
            }
        }
        if chars[i].is_ascii_digit() {
            if let Some(m) = parse_digits(&rest) {
                let consumed_chars = rest[..m.consumed].chars().count();
                out.push(Token::new(m.txt.clone(), m.kind));
                i += consumed_chars;
                continue;
            }
        }
        if rest.starts_with("http://") || rest.starts_with("https://") || rest.starts_with("www.")
        {
            let trimmed = rest.trim_end_matches(|c: char| {
                punctuation::classify_char(c) == PunctClass::Right
            });
            out.push(Token::new(trimmed, TokenKind::Url));
            i += trimmed.chars().count();
            continue;
        }
        if chars[i].is_alphabetic() {
            let start = i;
            let mut j = i;
            while j < chars.len() {
                let c = chars[j];
                if c.is_alphabetic() {
                    j += 1;
                } else if (c == '.' || c == '\'')
                    && j + 1 < chars.len()
                    && chars[j + 1].is_alphabetic()
                    && j > start
                {
                    j += 1;
                } else {
                    break;
                }
            }
            let word: String = chars[start..j].iter().collect();
            if let Some((lower, upper)) = split_lower_upper(&word) {
                out.push(Token::word(lower, vec![]));
                out.push(
                    Token::punct(".", PunctClass::Right)
                        .with_error(vec![crate::token::ErrorCode::MissingSpaceAfterPeriod]),
                );
                out.push(Token::word(upper, vec![]));
            } else {
                out.push(Token::word(&word, vec![]));
            }
            i = j;
            if i < chars.len() && COMPOSITE_HYPHENS.contains(chars[i]) {
                out.push(Token::new("-", TokenKind::CompositeHyphen));
                i += 1;
            }
            continue;
        }

        // Punctuation run handling (spec §4.1).
        let c = chars[i];
        if rest.starts_with("[...]") || rest.starts_with("[…]") {
            out.push(Token::punct("…", PunctClass::Right));
            i += if rest.starts_with("[…]") { 3 } else { 5 };
            continue;
        }
        if rest.starts_with("...") {
            out.push(Token::punct("…", PunctClass::Right));
            i += 3;
            continue;
        }
        if rest.starts_with("[[") {
            out.push(Token::new("[[", TokenKind::PBegin));
            i += 2;
            continue;
        }
        if rest.starts_with("]]") {
            out.push(Token::new("]]", TokenKind::PEnd));
            i += 2;
            continue;
        }
        if c == ',' && chars.get(i + 1) == Some(&',') {
            let is_leading = i == 0;
            if is_leading {
                out.push(Token::punct("„", PunctClass::Left).with_error(vec![
                    crate::token::ErrorCode::StraightQuoteFixed,
                ]));
            } else {
                out.push(Token::punct(",", PunctClass::Right).with_error(vec![
                    crate::token::ErrorCode::PunctuationOrReduplicationFixed,
                ]));
            }
            i += 2;
            continue;
        }
        if HYPHENS.contains(c) {
            let mut j = i;
            while j < chars.len() && HYPHENS.contains(chars[j]) {
                j += 1;
            }
            out.push(Token::punct("-", PunctClass::None));
            i = j;
            continue;
        }
        if c == '”' {
            out.push(Token::punct("“", PunctClass::Right));
            i += 1;
            continue;
        }
        if c == '\'' {
            out.push(Token::punct("‘", PunctClass::Right));
            i += 1;
            continue;
        }
        if c == '"' {
            let icelandic = if i == 0 { '„' } else { '“' };
            let class = if icelandic == '„' { PunctClass::Left } else { PunctClass::Right };
            out.push(
                Token::punct(icelandic.to_string(), class)
                    .with_error(vec![crate::token::ErrorCode::StraightQuoteFixed]),
            );
            i += 1;
            continue;
        }

        out.push(Token::punct(c.to_string(), punctuation::classify_char(c)));
        i += 1;
    }
}

/// `lexeme` is wrapped entirely in one matching quote pair with non-empty
/// content, e.g. `"hello"` or `'allt'`.
fn fully_wrapped_quote(lexeme: &str) -> Option<(QuoteKind, &str)> {
    let mut chars = lexeme.chars();
    let first = chars.next()?;
    let kind = QuoteKind::of(first)?;
    let last = lexeme.chars().last()?;
    if lexeme.chars().count() < 3 {
        return None;
    }
    let matches_close = match kind {
        QuoteKind::Double => DQUOTES.contains(last),
        QuoteKind::Single => SQUOTES.contains(last),
    };
    if !matches_close {
        return None;
    }
    let inner_start = first.len_utf8();
    let inner_end = lexeme.len() - last.len_utf8();
    Some((kind, &lexeme[inner_start..inner_end]))
}

fn emit_quoted(wrapped: (QuoteKind, &str), config: &Config, out: &mut Vec<Token>) {
    let (kind, inner) = wrapped;
    out.push(Token::punct(kind.opening().to_string(), PunctClass::Left));
    if !inner.is_empty() && inner.chars().all(|c| c.is_alphabetic()) {
        out.push(Token::word(inner, vec![]));
        out.push(Token::punct(kind.closing().to_string(), PunctClass::Right));
    } else {
        let refed = format!("{inner}{}", kind.closing());
        tokenize_lexeme(&refed, config, out);
    }
}

/// The `lower.Upper` split from spec §4.1: an accumulated word containing an
/// internal dot with lowercase before and uppercase after is split in two,
/// error-3 flagged on the synthesized period.
fn split_lower_upper(word: &str) -> Option<(&str, &str)> {
    let dot = word.find('.')?;
    let (before, after_with_dot) = word.split_at(dot);
    let after = &after_with_dot[1..];
    if before.is_empty() || after.is_empty() {
        return None;
    }
    let before_lower = before.chars().next()?.is_lowercase();
    let after_upper = after.chars().next()?.is_uppercase();
    if before_lower && after_upper {
        Some((before, after))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokens: &[Token]) -> Vec<&str> {
        tokens
            .iter()
            .filter(|t| matches!(t.kind, TokenKind::Word(_)))
            .map(|t| t.txt.as_str())
            .collect()
    }

    #[test]
    fn splits_pure_alphabetic_words() {
        let cfg = Config::default();
        let toks = parse_tokens("Jón keypti bók", &cfg);
        assert_eq!(words(&toks), vec!["Jón", "keypti", "bók"]);
    }

    #[test]
    fn classifies_a_clock_time() {
        let cfg = Config::default();
        let toks = parse_tokens("14:30", &cfg);
        assert_eq!(toks.len(), 1);
        assert!(matches!(toks[0].kind, TokenKind::Time(_)));
    }

    #[test]
    fn trailing_period_becomes_separate_punctuation() {
        let cfg = Config::default();
        let toks = parse_tokens("bók.", &cfg);
        assert_eq!(toks.len(), 2);
        assert!(matches!(toks[0].kind, TokenKind::Word(_)));
        assert!(matches!(toks[1].kind, TokenKind::Punctuation(PunctClass::Right)));
    }

    #[test]
    fn splits_lower_dot_upper() {
        let cfg = Config::default();
        let toks = parse_tokens("heima.Jón", &cfg);
        assert_eq!(toks.len(), 3);
        assert_eq!(toks[0].txt, "heima");
        assert_eq!(toks[1].txt, ".");
        assert!(!toks[1].error.is_empty());
        assert_eq!(toks[2].txt, "Jón");
    }

    #[test]
    fn trailing_hyphen_becomes_composite_marker() {
        let cfg = Config::default();
        let toks = parse_tokens("fjármála-", &cfg);
        assert_eq!(toks.len(), 2);
        assert_eq!(toks[0].txt, "fjármála");
        assert!(matches!(toks[1].kind, TokenKind::CompositeHyphen));
    }

    #[test]
    fn recognizes_email() {
        let cfg = Config::default();
        let toks = parse_tokens("jon@example.com", &cfg);
        assert_eq!(toks.len(), 1);
        assert!(matches!(toks[0].kind, TokenKind::Email));
    }
}
