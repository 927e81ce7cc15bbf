//! Amount/timestamp fusion and the multi-word person-name accumulator (spec
//! §4.8).

use crate::config::Config;
use crate::token::{
    compound_error, AmountVal, Case, CurrencyVal, Gender, NumberVal, PersonName, Token, TokenKind,
    TimestampVal, WordCategory,
};

fn is_uppercase_start(txt: &str) -> bool {
    txt.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
}

fn is_acronym(txt: &str) -> bool {
    txt.chars().count() > 1 && txt.chars().all(|c| c.is_uppercase())
}

fn gender_from_category(category: &WordCategory) -> Option<Gender> {
    match category {
        WordCategory::Noun(g) => Some(*g),
        _ => None,
    }
}

/// spec §4.8: "Any WORD whose first meaning has class `nafn`" is directly a
/// PERSON over all four cases.
fn nafn_to_person(tok: &Token) -> Option<Token> {
    let meanings = tok.kind.meanings()?;
    let first = meanings.first()?;
    if first.class != "nafn" {
        return None;
    }
    let gender = gender_from_category(&first.category);
    let candidates = Case::ALL
        .iter()
        .map(|&case| PersonName { name: tok.txt.clone(), gender, case: Some(case) })
        .collect();
    Some(Token::new(tok.txt.clone(), TokenKind::Person(candidates)).with_error(tok.error.clone()))
}

fn given_name_candidates(tok: &Token, config: &Config, at_sentence_start: bool) -> Option<Vec<PersonName>> {
    if !is_uppercase_start(&tok.txt) {
        return None;
    }
    let meanings = tok.kind.meanings()?;
    if at_sentence_start && config.names.sentence_start_blacklist.contains(&tok.txt) {
        return None;
    }
    let candidates: Vec<PersonName> = meanings
        .iter()
        .filter(|m| {
            m.class == "ism"
                && m.number == Some(crate::token::GrammaticalNumber::Singular)
                && m.case.map(|c| !config.names.is_disallowed(c, &tok.txt)).unwrap_or(true)
        })
        .map(|m| PersonName { name: tok.txt.clone(), gender: gender_from_category(&m.category), case: m.case })
        .collect();
    if candidates.is_empty() {
        None
    } else {
        Some(candidates)
    }
}

fn surname_candidates(tok: &Token, class: &str) -> Option<Vec<PersonName>> {
    let meanings = tok.kind.meanings()?;
    let candidates: Vec<PersonName> = meanings
        .iter()
        .filter(|m| m.class == class)
        .map(|m| PersonName { name: tok.txt.clone(), gender: None, case: m.case })
        .collect();
    if candidates.is_empty() {
        None
    } else {
        Some(candidates)
    }
}

fn middle_initial_text(tok: &Token) -> Option<String> {
    if !tok.kind.is_word() {
        return None;
    }
    let txt = tok.txt.trim_start_matches('[').trim_end_matches(['.', ']']);
    if txt.chars().count() <= 2 && txt.chars().next().map(|c| c.is_uppercase()).unwrap_or(false) {
        Some(txt.to_string())
    } else {
        None
    }
}

fn extend(current: &[PersonName], next: &[PersonName], next_word: &str) -> Vec<PersonName> {
    let mut out = Vec::new();
    for a in current {
        for b in next {
            if a.compatible(b) {
                out.push(a.merge(b, format!("{} {}", a.name, next_word)));
            }
        }
    }
    out
}

/// Accumulate a person name starting at `work[i]`. Returns the fused PERSON
/// token, how many input tokens it consumed, whether a patronym was found,
/// and the full list of given-name-phase surface texts (spec §4.8's
/// given-name prefix set, used for the later seen-name substitution), or
/// `None` if `work[i]` is not a name start.
fn accumulate_name(
    work: &[Token],
    i: usize,
    config: &Config,
    at_sentence_start: bool,
) -> Option<(Vec<PersonName>, usize, bool, Vec<String>)> {
    let mut candidates = given_name_candidates(&work[i], config, at_sentence_start)?;
    let mut consumed = 1;
    let mut patronym = false;
    let mut given_texts = vec![work[i].txt.clone()];

    loop {
        let Some(next) = work.get(i + consumed) else { break };
        if let Some(next_candidates) = given_name_candidates(next, config, false) {
            candidates = extend(&candidates, &next_candidates, &next.txt);
            given_texts.push(next.txt.clone());
            consumed += 1;
            continue;
        }
        if let Some(initial) = middle_initial_text(next) {
            let filler: Vec<PersonName> =
                candidates.iter().map(|c| PersonName { name: initial.clone(), gender: None, case: None }).collect();
            candidates = extend(&candidates, &filler, &initial);
            given_texts.push(initial.clone());
            consumed += 1;
            continue;
        }
        if next.kind.is_word() && config.names.nobiliary_particles.contains(&next.txt.to_lowercase()) {
            let filler: Vec<PersonName> = candidates
                .iter()
                .map(|c| PersonName { name: next.txt.clone(), gender: None, case: c.case })
                .collect();
            candidates = extend(&candidates, &filler, &next.txt);
            given_texts.push(next.txt.clone());
            consumed += 1;
            continue;
        }
        break;
    }

    loop {
        let Some(next) = work.get(i + consumed) else { break };
        if let Some(surname) = surname_candidates(next, "föð").or_else(|| surname_candidates(next, "móð")) {
            candidates = extend(&candidates, &surname, &next.txt);
            consumed += 1;
            patronym = true;
            continue;
        }
        break;
    }

    if !patronym {
        if let Some(next) = work.get(i + consumed) {
            if is_uppercase_start(&next.txt) && !is_acronym(&next.txt) && next.kind.is_word() {
                let filler = vec![PersonName { name: next.txt.clone(), gender: None, case: None }];
                let extended = extend(&candidates, &filler, &next.txt);
                if !extended.is_empty() {
                    candidates = extended;
                    consumed += 1;
                    patronym = true;
                    if let Some(next2) = work.get(i + consumed) {
                        if let Some(surname) =
                            surname_candidates(next2, "föð").or_else(|| surname_candidates(next2, "móð"))
                        {
                            candidates = extend(&candidates, &surname, &next2.txt);
                            consumed += 1;
                        }
                    }
                }
            }
        }
    }

    Some((candidates, consumed, patronym, given_texts))
}

fn is_weak(
    tok: &Token,
    consumed: usize,
    patronym: bool,
    at_sentence_start: bool,
    seen_match: bool,
    config: &Config,
) -> bool {
    if consumed > 1 || patronym || seen_match {
        return false;
    }
    if !at_sentence_start {
        return false;
    }
    let has_other_meanings = tok
        .kind
        .meanings()
        .map(|ms| ms.iter().any(|m| m.class != "ism"))
        .unwrap_or(false);
    has_other_meanings && !config.names.preferences.contains(&tok.txt)
}

fn amount_and_timestamp_fusion(cur: &Token, next: &Token) -> Option<(Token, usize)> {
    if let TokenKind::Number(NumberVal { value, cases, genders }) = &cur.kind {
        let (iso, next_cases, next_genders): (Option<String>, _, _) = match &next.kind {
            TokenKind::Currency(CurrencyVal { iso, cases, genders }) => {
                (Some(iso.clone()), cases.clone(), genders.clone())
            }
            _ => (None, Default::default(), Default::default()),
        };
        if let Some(iso) = iso {
            let _ = (cases, genders);
            let txt = format!("{} {}", cur.txt, next.txt);
            return Some((
                Token::new(
                    txt,
                    TokenKind::Amount(AmountVal { value: *value, iso, cases: next_cases, genders: next_genders }),
                )
                .with_error(compound_error([cur.error.clone(), next.error.clone()])),
                2,
            ));
        }
    }
    if let TokenKind::Time(t) = &cur.kind {
        match &next.kind {
            TokenKind::DateAbs(d) => {
                let txt = format!("{} {}", cur.txt, next.txt);
                return Some((
                    Token::new(
                        txt,
                        TokenKind::TimestampAbs(TimestampVal { y: d.y, mo: d.mo, d: d.d, h: t.h, m: t.m, s: t.s }),
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
                        TokenKind::TimestampRel(TimestampVal { y: d.y, mo: d.mo, d: d.d, h: t.h, m: t.m, s: t.s }),
                    )
                    .with_error(compound_error([cur.error.clone(), next.error.clone()])),
                    2,
                ));
            }
            _ => {}
        }
    }
    None
}

pub fn parse_phrases_2(tokens: Vec<Token>, config: &Config) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    // (given-name prefix set, full accumulated name text, gender) for every
    // patronym/matronym-complete name seen so far (spec §4.8 closing rule).
    let mut names_seen: Vec<(Vec<String>, String, Option<Gender>)> = Vec::new();
    let mut at_sentence_start = false;
    let mut i = 0;
    let n = tokens.len();

    while i < n {
        let next_flag = match &tokens[i].kind {
            TokenKind::SBegin { .. } => true,
            TokenKind::Punctuation(_) if tokens[i].txt == ":" => true,
            TokenKind::Punctuation(_) | TokenKind::Ordinal(_) => at_sentence_start,
            _ => false,
        };

        if i + 1 < n {
            if let Some((fused, consumed)) = amount_and_timestamp_fusion(&tokens[i], &tokens[i + 1]) {
                out.push(fused);
                i += consumed;
                at_sentence_start = next_flag;
                continue;
            }
        }

        if let Some(person) = nafn_to_person(&tokens[i]) {
            out.push(person);
            i += 1;
            at_sentence_start = next_flag;
            continue;
        }

        if let Some((mut candidates, consumed, patronym, given_texts)) =
            accumulate_name(&tokens, i, config, at_sentence_start)
        {
            let matches_seen = |names: &[String], gender: &Option<Gender>| {
                given_texts.iter().all(|g| names.contains(g))
                    && candidates.iter().any(|c| c.gender.is_none() || *gender == c.gender)
            };
            let seen_match = !patronym
                && names_seen.iter().any(|(names, _, gender)| matches_seen(names, gender));

            if is_weak(&tokens[i], consumed, patronym, at_sentence_start, seen_match, config) {
                out.push(tokens[i].clone());
                i += 1;
                at_sentence_start = next_flag;
                continue;
            }

            // Given-name-prefix substitution (spec §4.8 closing rule): a
            // candidate with no patronym/matronym of its own takes on the
            // full name of any previously seen name whose given-name set is
            // a superset of this candidate's.
            if !patronym {
                if let Some((_, full_name, gender)) =
                    names_seen.iter().find(|(names, _, gender)| matches_seen(names, gender))
                {
                    candidates = candidates
                        .into_iter()
                        .map(|c| PersonName {
                            name: full_name.clone(),
                            gender: c.gender.or(*gender),
                            case: c.case,
                        })
                        .collect();
                }
            }

            let merged_txt: String =
                tokens[i..i + consumed].iter().map(|t| t.txt.as_str()).collect::<Vec<_>>().join(" ");
            let fused_error = compound_error(tokens[i..i + consumed].iter().map(|t| t.error.clone()));
            if patronym {
                let gender = candidates.first().and_then(|c| c.gender);
                names_seen.push((given_texts, merged_txt.clone(), gender));
            }
            out.push(Token::new(merged_txt, TokenKind::Person(candidates)).with_error(fused_error));
            i += consumed;
            at_sentence_start = next_flag;
            continue;
        }

        out.push(tokens[i].clone());
        i += 1;
        at_sentence_start = next_flag;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::meaning_with;
    use crate::token::{Case as Cs, GrammaticalNumber};

    #[test]
    fn single_given_name_becomes_person() {
        let cfg = Config::default();
        let jon = Token::word(
            "Jón",
            vec![meaning_with("Jón", 1, WordCategory::GivenName, "ism", "Jón", "NFET", GrammaticalNumber::Singular, Cs::Nf)],
        );
        let out = parse_phrases_2(vec![jon], &cfg);
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0].kind, TokenKind::Person(_)));
    }

    #[test]
    fn non_name_word_passes_through() {
        let cfg = Config::default();
        let tok = Token::word("borðið", vec![]);
        let out = parse_phrases_2(vec![tok], &cfg);
        assert_eq!(out.len(), 1);
        assert!(out[0].kind.is_word());
    }
}
