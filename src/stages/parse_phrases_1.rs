//! Numeric-word chains, multipliers/fractions/percentages, date/time/month
//! assembly, currency doublets and composite-hyphen fusion (spec §4.7).

use crate::config::Config;
use crate::lexicon::Lexicon;
use crate::token::{
    compound_error, AmountVal, Case, CurrencyVal, DateVal, NumberVal, PercentVal, TimeVal,
    TimestampVal, Token, TokenKind, WordCategory,
};

fn word_text_lower(tok: &Token) -> Option<String> {
    if tok.kind.is_word() {
        Some(tok.txt.to_lowercase())
    } else {
        None
    }
}

fn number_value_and_sets(tok: &Token) -> Option<(f64, crate::token::CaseSet, crate::token::GenderSet)> {
    match &tok.kind {
        TokenKind::Number(NumberVal { value, cases, genders }) => {
            Some((*value, cases.clone(), genders.clone()))
        }
        TokenKind::Year(y) => Some((*y as f64, Default::default(), Default::default())),
        _ => None,
    }
}

/// Try to fuse the pair at `work[i..i+1]` into one token, returning the
/// fused token and how many input tokens it consumed (2 or more), or `None`
/// if no rule applies at this position.
fn try_fuse_pair(work: &[Token], i: usize, config: &Config) -> Option<(Token, usize)> {
    let cur = &work[i];
    let next = work.get(i + 1)?;

    // Numeric-word chain: current is NUMBER or a multiplier WORD; next is a
    // multiplier WORD.
    let cur_as_number = number_value_and_sets(cur).or_else(|| {
        word_text_lower(cur)
            .and_then(|w| config.numbers.multipliers.get(&w).copied())
            .map(|v| (v, Default::default(), Default::default()))
    });
    if let Some((cur_val, cur_cases, cur_genders)) = cur_as_number {
        if let Some(next_lower) = word_text_lower(next) {
            if let Some(&mult) = config.numbers.multipliers.get(&next_lower) {
                // Retain next's cases/genders, except when next is
                // possessive and previous carried non-possessive cases, in
                // which case previous's are kept (spec §4.7).
                let next_cases = next.kind.meanings().map(|ms| {
                    ms.iter().filter_map(|m| m.case).collect::<crate::token::CaseSet>()
                });
                let next_is_possessive_only =
                    matches!(&next_cases, Some(cs) if !cs.is_empty() && cs.iter().all(|c| *c == Case::Ef));
                let prev_has_non_possessive = cur_cases.iter().any(|c| *c != Case::Ef);
                let (cases, genders) = if next_is_possessive_only && prev_has_non_possessive {
                    (cur_cases.clone(), cur_genders.clone())
                } else {
                    (Default::default(), Default::default())
                };
                let value = cur_val * mult;
                let txt = format!("{} {}", cur.txt, next.txt);
                return Some((
                    Token::new(txt, TokenKind::Number(NumberVal { value, cases, genders }))
                        .with_error(compound_error([cur.error.clone(), next.error.clone()])),
                    2,
                ));
            }
        }
    }

    // NUMBER + AMOUNT_ABBREV -> AMOUNT in ISK.
    if let TokenKind::Number(NumberVal { value, .. }) = &cur.kind {
        if let Some(&factor) = config.numbers.amount_abbrev.get(&next.txt) {
            let txt = format!("{} {}", cur.txt, next.txt);
            return Some((
                Token::new(
                    txt,
                    TokenKind::Amount(AmountVal {
                        value: value * factor,
                        iso: "ISK".to_string(),
                        cases: Default::default(),
                        genders: Default::default(),
                    }),
                )
                .with_error(compound_error([cur.error.clone(), next.error.clone()])),
                2,
            ));
        }
    }

    // NUMBER + percentage word -> PERCENT.
    if let TokenKind::Number(NumberVal { value, cases, genders }) = &cur.kind {
        if let Some(w) = word_text_lower(next) {
            if config.numbers.percentages.contains(&w) {
                let txt = format!("{} {}", cur.txt, next.txt);
                return Some((
                    Token::new(
                        txt,
                        TokenKind::Percent(PercentVal {
                            value: *value,
                            cases: cases.clone(),
                            genders: genders.clone(),
                        }),
                    )
                    .with_error(compound_error([cur.error.clone(), next.error.clone()])),
                    2,
                ));
            }
        }
    }

    // {ORDINAL|NUMBER|day-of-month WORD} + month name WORD -> DATE y=0.
    let day_value: Option<u8> = match &cur.kind {
        TokenKind::Ordinal(v) => Some(*v as u8),
        TokenKind::Number(NumberVal { value, .. }) => Some(*value as u8),
        TokenKind::Word(_) => word_text_lower(cur).and_then(|w| config.numbers.days_of_month.get(&w).copied()),
        _ => None,
    };
    if let Some(d) = day_value {
        if let Some(m) = word_text_lower(next).and_then(|w| config.numbers.month_number(&w)) {
            let txt = format!("{} {}", cur.txt, next.txt);
            return Some((
                Token::new(txt, TokenKind::Date(DateVal { y: 0, mo: m, d }))
                    .with_error(compound_error([cur.error.clone(), next.error.clone()])),
                2,
            ));
        }
    }

    // DATE (y == 0) + NUMBER|YEAR -> DATE with y filled in.
    if let TokenKind::Date(date) = &cur.kind {
        if date.y == 0 {
            if let Some((value, ..)) = number_value_and_sets(next) {
                let y = value as i32;
                if (1776..=2100).contains(&y) {
                    let txt = format!("{} {}", cur.txt, next.txt);
                    return Some((
                        Token::new(
                            txt,
                            TokenKind::Date(DateVal { y, mo: date.mo, d: date.d }),
                        )
                        .with_error(compound_error([cur.error.clone(), next.error.clone()])),
                        2,
                    ));
                }
            }
        }
    }

    // Month-name WORD + YEAR|NUMBER -> DATE with d=0.
    if let Some(m) = word_text_lower(cur).and_then(|w| config.numbers.month_number(&w)) {
        if let Some((value, ..)) = number_value_and_sets(next) {
            let y = value as i32;
            let txt = format!("{} {}", cur.txt, next.txt);
            return Some((
                Token::new(txt, TokenKind::Date(DateVal { y, mo: m, d: 0 }))
                    .with_error(compound_error([cur.error.clone(), next.error.clone()])),
                2,
            ));
        }
    }

    // DATEABS/DATEREL + TIME -> TIMESTAMP{ABS,REL}.
    if let TokenKind::Time(TimeVal { h, m, s }) = &next.kind {
        match &cur.kind {
            TokenKind::DateAbs(d) => {
                let txt = format!("{} {}", cur.txt, next.txt);
                return Some((
                    Token::new(
                        txt,
                        TokenKind::TimestampAbs(TimestampVal {
                            y: d.y,
                            mo: d.mo,
                            d: d.d,
                            h: *h,
                            m: *m,
                            s: *s,
                        }),
                    )
                    .with_error(compound_error([cur.error.clone(), next.error.clone()])),
                    2,
                ));
            }
            TokenKind::DateRel(d) => {
                let txt = format!("{} {}", cur.txt, next.txt);
                return Some((
                    Token::new(
                        txt,
                        TokenKind::TimestampRel(TimestampVal {
                            y: d.y,
                            mo: d.mo,
                            d: d.d,
                            h: *h,
                            m: *m,
                            s: *s,
                        }),
                    )
                    .with_error(compound_error([cur.error.clone(), next.error.clone()])),
                    2,
                ));
            }
            _ => {}
        }
    }

    // Nationality adjective + currency noun -> CURRENCY.
    if let TokenKind::Word(meanings) = &cur.kind {
        let is_adjective =
            meanings.iter().any(|m| m.category == WordCategory::Adjective) || meanings.is_empty();
        if is_adjective {
            if let Some(nat) = config.numbers.nationalities.get(&cur.txt.to_lowercase()) {
                if let TokenKind::Word(next_meanings) = &next.kind {
                    if let Some(base) = config.numbers.currencies.get(&next.txt.to_lowercase()) {
                        if let Some(iso) = config.numbers.resolve_iso_currency(nat, base) {
                            let cur_cases = crate::token::all_cases();
                            let next_cases: crate::token::CaseSet = next_meanings
                                .iter()
                                .filter_map(|m| m.case)
                                .collect();
                            let cases: crate::token::CaseSet = if next_cases.is_empty() {
                                cur_cases
                            } else {
                                cur_cases.intersection(&next_cases).copied().collect()
                            };
                            let genders: crate::token::GenderSet = next_meanings
                                .iter()
                                .filter_map(|m| match &m.category {
                                    WordCategory::Noun(g) => Some(*g),
                                    _ => None,
                                })
                                .collect();
                            let txt = format!("{} {}", cur.txt, next.txt);
                            return Some((
                                Token::new(
                                    txt,
                                    TokenKind::Currency(CurrencyVal {
                                        iso: iso.to_string(),
                                        cases,
                                        genders,
                                    }),
                                )
                                .with_error(compound_error([cur.error.clone(), next.error.clone()])),
                                2,
                            ));
                        }
                    }
                }
            }
        }
    }

    None
}

/// Single-token rewrite: a month-name WORD not consumed by any pairwise
/// rule becomes a standalone DATEREL (spec §4.7).
fn standalone_month_to_daterel(tok: &Token, config: &Config) -> Option<Token> {
    let m = word_text_lower(tok).and_then(|w| config.numbers.month_number(&w))?;
    Some(
        Token::new(tok.txt.clone(), TokenKind::DateRel(DateVal { y: 0, mo: m, d: 0 }))
            .with_error(tok.error.clone()),
    )
}

/// A fully-populated DATE collapses to DATEABS, otherwise DATEREL (spec
/// §4.7).
fn finalize_date(tok: Token) -> Token {
    if let TokenKind::Date(d) = &tok.kind {
        let date = *d;
        let kind = if date.y != 0 && date.mo != 0 && date.d != 0 {
            TokenKind::DateAbs(date)
        } else {
            TokenKind::DateRel(date)
        };
        Token { kind, ..tok }
    } else {
        tok
    }
}

fn try_fuse_composite_hyphen(
    work: &[Token],
    i: usize,
    config: &Config,
    lexicon: &dyn Lexicon,
) -> crate::error::Result<Option<(Token, usize)>> {
    if !work[i].kind.is_word() {
        return Ok(None);
    }
    if !matches!(work.get(i + 1).map(|t| &t.kind), Some(TokenKind::CompositeHyphen)) {
        return Ok(None);
    }
    let Some(lookahead) = work.get(i + 2) else { return Ok(None) };
    let cur = &work[i];
    let hyphen = &work[i + 1];

    if lookahead.kind.is_word() && matches!(lookahead.txt.as_str(), "og" | "eða") {
        if let Some(last) = work.get(i + 3) {
            if last.kind.is_word() {
                let txt = format!("{}- {} {}", cur.txt, lookahead.txt, last.txt);
                let meanings = last.kind.meanings().map(|m| m.to_vec()).unwrap_or_default();
                return Ok(Some((
                    Token::new(txt, TokenKind::Word(meanings)).with_error(compound_error([
                        cur.error.clone(),
                        hyphen.error.clone(),
                        lookahead.error.clone(),
                        last.error.clone(),
                    ])),
                    4,
                )));
            }
        }
        return Ok(None);
    }

    if lookahead.kind.is_word() {
        if config.numbers.adjective_prefixes.contains(&cur.txt.to_lowercase()) {
            if let Some(meanings) = lookahead.kind.meanings() {
                let has_adj_or_adv = meanings
                    .iter()
                    .any(|m| matches!(m.category, WordCategory::Adjective | WordCategory::Adverb));
                if has_adj_or_adv {
                    let txt = format!("{}-{}", cur.txt, lookahead.txt);
                    return Ok(Some((
                        Token::new(txt, TokenKind::Word(meanings.to_vec())).with_error(
                            compound_error([cur.error.clone(), hyphen.error.clone(), lookahead.error.clone()]),
                        ),
                        3,
                    )));
                }
            }
        }

        let candidate = format!("{}-{}", cur.txt, lookahead.txt);
        let (_, meanings) = lexicon.lookup_word(&candidate, false, false)?;
        if !meanings.is_empty() {
            return Ok(Some((
                Token::new(candidate, TokenKind::Word(meanings)).with_error(compound_error([
                    cur.error.clone(),
                    hyphen.error.clone(),
                    lookahead.error.clone(),
                ])),
                3,
            )));
        }
    }

    Ok(None)
}

pub fn parse_phrases_1(
    tokens: Vec<Token>,
    config: &Config,
    lexicon: &dyn Lexicon,
) -> crate::error::Result<Vec<Token>> {
    let mut work = tokens;
    let mut i = 0;
    while i < work.len() {
        if let Some((fused, consumed)) = try_fuse_composite_hyphen(&work, i, config, lexicon)? {
            work.splice(i..i + consumed, std::iter::once(fused));
            continue;
        }
        if matches!(work[i].kind, TokenKind::CompositeHyphen) {
            // No fusion applied: demote to a plain hyphen punctuation token.
            work[i] = Token::punct("-", crate::token::PunctClass::None);
        }
        if let Some((fused, consumed)) = try_fuse_pair(&work, i, config) {
            work.splice(i..i + consumed, std::iter::once(fused));
            continue;
        }
        if let Some(daterel) = standalone_month_to_daterel(&work[i], config) {
            work[i] = daterel;
        } else if matches!(work[i].kind, TokenKind::Date(_)) {
            work[i] = finalize_date(work[i].clone());
        }
        i += 1;
    }
    Ok(work)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::MemoryLexicon;

    #[test]
    fn fuses_number_multiplier_chain() {
        let cfg = Config::default();
        let lex = MemoryLexicon::new();
        let tokens = vec![
            Token::new("5", TokenKind::Number(NumberVal { value: 5.0, cases: Default::default(), genders: Default::default() })),
            Token::word("þúsund", vec![]),
        ];
        let out = parse_phrases_1(tokens, &cfg, &lex).unwrap();
        assert_eq!(out.len(), 1);
        match &out[0].kind {
            TokenKind::Number(NumberVal { value, .. }) => assert_eq!(*value, 5000.0),
            _ => panic!("expected NUMBER"),
        }
    }

    #[test]
    fn assembles_ordinal_plus_month_plus_year_into_dateabs() {
        let cfg = Config::default();
        let lex = MemoryLexicon::new();
        let tokens = vec![
            Token::new("10", TokenKind::Ordinal(10)),
            Token::word("janúar", vec![]),
            Token::new("2023", TokenKind::Year(2023)),
        ];
        let out = parse_phrases_1(tokens, &cfg, &lex).unwrap();
        assert_eq!(out.len(), 1);
        match &out[0].kind {
            TokenKind::DateAbs(DateVal { y, mo, d }) => {
                assert_eq!((*y, *mo, *d), (2023, 1, 10));
            }
            other => panic!("expected DATEABS, got {other:?}"),
        }
    }

    #[test]
    fn standalone_month_becomes_daterel() {
        let cfg = Config::default();
        let lex = MemoryLexicon::new();
        let tokens = vec![Token::word("janúar", vec![])];
        let out = parse_phrases_1(tokens, &cfg, &lex).unwrap();
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0].kind, TokenKind::DateRel(DateVal { mo: 1, .. })));
    }
}
