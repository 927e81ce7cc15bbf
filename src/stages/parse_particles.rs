//! Single-lookahead fusion of currency signs, abbreviations, clock words,
//! year markers, percent signs, ordinals and SI measurements (spec §4.2).

use crate::config::Config;
use crate::roman::{is_roman_numeral, roman_to_int};
use crate::token::{compound_error, AmountVal, NumberVal, PercentVal, Token, TokenKind};

fn is_upper_start(txt: &str) -> bool {
    txt.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
}

fn number_value(tok: &Token) -> Option<f64> {
    match &tok.kind {
        TokenKind::Number(NumberVal { value, .. }) => Some(*value),
        TokenKind::Year(y) => Some(*y as f64),
        _ => None,
    }
}

/// Run the fusion rules over a full token sequence from `parse_tokens`,
/// holding one token of lookahead at a time.
pub fn parse_particles(tokens: Vec<Token>, config: &Config) -> Vec<Token> {
    let mut out = Vec::new();
    let mut iter = tokens.into_iter().peekable();

    while let Some(tok) = iter.next() {
        // `$`/`€` PUNCT + NUMBER -> AMOUNT.
        if let TokenKind::Punctuation(_) = tok.kind {
            if (tok.txt == "$" || tok.txt == "€") {
                if let Some(next) = iter.peek() {
                    if let Some(value) = number_value(next) {
                        let next = iter.next().unwrap();
                        let iso = if tok.txt == "$" { "USD" } else { "EUR" };
                        let (cases, genders) = match &next.kind {
                            TokenKind::Number(NumberVal { cases, genders, .. }) => {
                                (cases.clone(), genders.clone())
                            }
                            _ => Default::default(),
                        };
                        let _ = value;
                        out.push(Token::new(
                            format!("{}{}", tok.txt, next.txt),
                            TokenKind::Amount(AmountVal {
                                value: number_value(&next).unwrap(),
                                iso: iso.to_string(),
                                cases,
                                genders,
                            }),
                        ).with_error(compound_error([tok.error.clone(), next.error.clone()])));
                        continue;
                    }
                }
            }
        }

        // Abbreviation + dot.
        if let TokenKind::Word(meanings) = &tok.kind {
            if meanings.is_empty() && !tok.txt.ends_with('.') && config.abbreviations.is_abbreviation(&tok.txt) {
                if let Some(dot) = iter.peek() {
                    if matches!(&dot.kind, TokenKind::Punctuation(_)) && dot.txt == "." {
                        let dot = iter.next().unwrap();
                        let lookahead = iter.peek();
                        let potentially_ending = lookahead
                            .map(|n| {
                                matches!(n.kind, TokenKind::PEnd | TokenKind::SEnd)
                                    || (is_upper_start(&n.txt)
                                        && !config.numbers.months.contains_key(&n.txt.to_lowercase()))
                            })
                            .unwrap_or(true);
                        let class = config.abbreviations.classify(&tok.txt);
                        use crate::config::abbreviations::AbbrevClass;
                        match class {
                            AbbrevClass::Finisher if potentially_ending => {
                                out.push(
                                    Token::word(format!("[{}]", tok.txt), vec![])
                                        .with_error(tok.error.clone()),
                                );
                                out.push(dot);
                            }
                            _ => {
                                out.push(
                                    Token::word(format!("[{}.]", tok.txt), vec![])
                                        .with_error(compound_error([tok.error.clone(), dot.error.clone()])),
                                );
                            }
                        }
                        continue;
                    }
                }
            }
        }

        // `klukkan` / clock abbreviation + TIME|NUMBER.
        if tok.kind.is_word() && (tok.txt.eq_ignore_ascii_case("klukkan") || tok.txt.eq_ignore_ascii_case("kl")) {
            if let Some(next) = iter.peek() {
                match &next.kind {
                    TokenKind::Time(_) => {
                        let next = iter.next().unwrap();
                        out.push(Token::new(
                            format!("{} {}", tok.txt, next.txt),
                            next.kind.clone(),
                        ).with_error(compound_error([tok.error.clone(), next.error.clone()])));
                        continue;
                    }
                    TokenKind::Number(NumberVal { value, .. }) => {
                        let h = *value as u8;
                        let next = iter.next().unwrap();
                        out.push(Token::new(
                            format!("{} {}", tok.txt, next.txt),
                            TokenKind::Time(crate::token::TimeVal { h, m: 0, s: 0 }),
                        ).with_error(compound_error([tok.error.clone(), next.error.clone()])));
                        continue;
                    }
                    TokenKind::Word(_) if config.numbers.clock_numbers.contains_key(&next.txt.to_lowercase()) => {
                        let (h, m, s) = config.numbers.clock_numbers[&next.txt.to_lowercase()];
                        let next = iter.next().unwrap();
                        out.push(Token::new(
                            format!("{} {}", tok.txt, next.txt),
                            TokenKind::Time(crate::token::TimeVal { h, m, s }),
                        ).with_error(compound_error([tok.error.clone(), next.error.clone()])));
                        continue;
                    }
                    _ => {}
                }
            }
        }

        // Standalone spelled-out half-hour word.
        if tok.kind.is_word() && config.numbers.clock_half.contains(&tok.txt.to_lowercase()) {
            if let Some((h, m, s)) = config.numbers.clock_numbers.get(&tok.txt.to_lowercase()) {
                out.push(Token::new(
                    tok.txt.clone(),
                    TokenKind::Time(crate::token::TimeVal { h: *h, m: *m, s: *s }),
                ).with_error(tok.error.clone()));
                continue;
            }
        }

        // `árið|ársins|árinu` + YEAR|NUMBER.
        if tok.kind.is_word()
            && matches!(tok.txt.to_lowercase().as_str(), "árið" | "ársins" | "árinu")
        {
            if let Some(value) = iter.peek().and_then(number_value) {
                let next = iter.next().unwrap();
                out.push(
                    Token::new(format!("{} {}", tok.txt, next.txt), TokenKind::Year(value as i32))
                        .with_error(compound_error([tok.error.clone(), next.error.clone()])),
                );
                continue;
            }
        }

        // YEAR|NUMBER + f.Kr/e.Kr.
        if let Some(value) = number_value(&tok) {
            if let Some(next) = iter.peek() {
                if next.kind.is_word()
                    && matches!(next.txt.as_str(), "f.Kr" | "f.Kr." | "e.Kr" | "e.Kr.")
                {
                    let negate = next.txt.starts_with('f');
                    let next = iter.next().unwrap();
                    let year = if negate { -(value as i32) } else { value as i32 };
                    out.push(
                        Token::new(format!("{} {}", tok.txt, next.txt), TokenKind::Year(year))
                            .with_error(compound_error([tok.error.clone(), next.error.clone()])),
                    );
                    continue;
                }
            }
        }

        // NUMBER + `%`.
        if let TokenKind::Number(NumberVal { value, cases, genders }) = &tok.kind {
            if let Some(next) = iter.peek() {
                if next.txt == "%" {
                    let next = iter.next().unwrap();
                    out.push(
                        Token::new(
                            format!("{}{}", tok.txt, next.txt),
                            TokenKind::Percent(PercentVal {
                                value: *value,
                                cases: cases.clone(),
                                genders: genders.clone(),
                            }),
                        )
                        .with_error(compound_error([tok.error.clone(), next.error.clone()])),
                    );
                    continue;
                }
            }
        }

        // NUMBER-or-Roman + `.` -> ORDINAL, with the quote/upper-word backoff.
        let ordinal_value = match &tok.kind {
            TokenKind::Number(NumberVal { value, .. }) => Some(*value as i64),
            TokenKind::Word(meanings) if meanings.is_empty() && is_roman_numeral(&tok.txt) => {
                roman_to_int(&tok.txt)
            }
            _ => None,
        };
        if let Some(value) = ordinal_value {
            if let Some(dot) = iter.peek() {
                if dot.txt == "." {
                    let after_dot_backs_off = {
                        let mut clone_iter = iter.clone();
                        clone_iter.next();
                        match clone_iter.peek() {
                            None => true,
                            Some(n) => {
                                n.txt == "„" || n.txt == "\""
                                    || crate::punctuation::is_sentence_end(&n.txt)
                                    || (is_upper_start(&n.txt)
                                        && !config.numbers.months.contains_key(&n.txt.to_lowercase()))
                            }
                        }
                    };
                    if !after_dot_backs_off {
                        let dot = iter.next().unwrap();
                        out.push(
                            Token::new(format!("{}.", tok.txt), TokenKind::Ordinal(value))
                                .with_error(compound_error([tok.error.clone(), dot.error.clone()])),
                        );
                        continue;
                    }
                }
            }
        }

        // NUMBER + SI unit word.
        if let TokenKind::Number(_) = &tok.kind {
            if let Some(next) = iter.peek() {
                if let Some(unit) = config.numbers.si_units.get(&next.txt).copied() {
                    let value = number_value(&tok).unwrap();
                    let next = iter.next().unwrap();
                    out.push(
                        Token::new(
                            format!("{} {}", tok.txt, next.txt),
                            TokenKind::Measurement(unit, value),
                        )
                        .with_error(compound_error([tok.error.clone(), next.error.clone()])),
                    );
                    continue;
                }
            }
        }

        out.push(tok);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::parse_tokens::parse_tokens;

    #[test]
    fn fuses_dollar_amount() {
        let cfg = Config::default();
        let toks = parse_tokens("$ 5", &cfg);
        let fused = parse_particles(toks, &cfg);
        assert_eq!(fused.len(), 1);
        assert!(matches!(fused[0].kind, TokenKind::Amount(AmountVal { ref iso, .. }) if iso == "USD"));
    }

    #[test]
    fn fuses_percent() {
        let cfg = Config::default();
        let toks = parse_tokens("50 %", &cfg);
        let fused = parse_particles(toks, &cfg);
        assert_eq!(fused.len(), 1);
        assert!(matches!(fused[0].kind, TokenKind::Percent(_)));
    }
}
