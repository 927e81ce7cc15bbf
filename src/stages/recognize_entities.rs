//! Longest-match entity recognition against the entity store, with a
//! last-name → full-name resolution map (spec §4.9).

use crate::config::Config;
use crate::entitydb::EntityDb;
use crate::token::{EntityRow, Token, TokenKind};
use rustc_hash::FxHashMap;

fn is_uppercase_start(txt: &str) -> bool {
    txt.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
}

fn is_acronym(txt: &str) -> bool {
    txt.chars().count() > 1 && txt.chars().all(|c| c.is_uppercase())
}

pub fn recognize_entities(
    tokens: Vec<Token>,
    db: &dyn EntityDb,
    config: &Config,
    auto_uppercase: bool,
) -> crate::error::Result<Vec<Token>> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut ecache: FxHashMap<String, Vec<EntityRow>> = FxHashMap::default();
    let mut lastnames: FxHashMap<String, Token> = FxHashMap::default();
    let mut i = 0;
    let n = tokens.len();

    while i < n {
        let tok = &tokens[i];
        let starts_entity = is_uppercase_start(&tok.txt)
            && tok.kind.is_word()
            && !(auto_uppercase
                && tok.txt.chars().count() == 1
                && config.abbreviations.is_abbreviation(&tok.txt));

        if starts_entity {
            let first_word = tok.txt.clone();
            if !ecache.contains_key(&first_word) {
                let rows = db.find_entities_with_prefix(&first_word)?;
                ecache.insert(first_word.clone(), rows);
            }
            let rows = ecache.get(&first_word).cloned().unwrap_or_default();

            let mut best: Option<(usize, EntityRow)> = None;
            for row in &rows {
                let row_words: Vec<&str> = row.name.split_whitespace().collect();
                if row_words.is_empty() {
                    continue;
                }
                let mut matched = true;
                for (k, rw) in row_words.iter().enumerate() {
                    let Some(t) = tokens.get(i + k) else {
                        matched = false;
                        break;
                    };
                    if &t.txt != rw {
                        matched = false;
                        break;
                    }
                }
                if matched {
                    let len = row_words.len();
                    if best.as_ref().map(|(bl, _)| len > *bl).unwrap_or(true) {
                        best = Some((len, row.clone()));
                    }
                }
            }

            if let Some((len, row)) = best {
                let matched_tokens = &tokens[i..i + len];
                let full_text: String =
                    matched_tokens.iter().map(|t| t.txt.as_str()).collect::<Vec<_>>().join(" ");
                let fused = Token::new(full_text.clone(), TokenKind::Entity(vec![row]));

                if len > 1 {
                    if let Some(last_word) = matched_tokens.last() {
                        let is_patronym = last_word
                            .kind
                            .meanings()
                            .map(|ms| ms.iter().any(|m| m.class == "föð" || m.class == "móð"))
                            .unwrap_or(false);
                        if !is_patronym {
                            lastnames.insert(last_word.txt.clone(), fused.clone());
                        }
                    }
                }

                out.push(fused);
                i += len;
                continue;
            }

            if len_one_lastname_hit(tok, &lastnames) {
                if let Some(full) = lastnames.get(&tok.txt) {
                    out.push(Token::new(tok.txt.clone(), full.kind.clone()).with_error(tok.error.clone()));
                    i += 1;
                    continue;
                }
            }
        }

        if let TokenKind::Person(_) = &tok.kind {
            let words: Vec<&str> = tok.txt.split_whitespace().collect();
            if words.len() > 1 {
                if let Some(last) = words.last() {
                    lastnames.entry(last.to_string()).or_insert_with(|| tok.clone());
                }
            }
        }

        out.push(tok.clone());
        i += 1;
    }

    Ok(out)
}

fn len_one_lastname_hit(tok: &Token, lastnames: &FxHashMap<String, Token>) -> bool {
    tok.kind.is_word() && !is_acronym(&tok.txt) && lastnames.contains_key(&tok.txt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entitydb::MemoryEntityDb;

    #[test]
    fn resolves_entity_by_prefix() {
        let cfg = Config::default();
        let mut db = MemoryEntityDb::new();
        db.insert(EntityRow {
            name: "Norður Atlantshafsbandalagið".to_string(),
            verb: "er".to_string(),
            definition: "alþjóðleg varnarstofnun".to_string(),
        });
        let tokens =
            vec![Token::word("Norður", vec![]), Token::word("Atlantshafsbandalagið", vec![])];
        let out = recognize_entities(tokens, &db, &cfg, false).unwrap();
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0].kind, TokenKind::Entity(_)));
    }

    #[test]
    fn resolves_single_word_lastname_via_person_seen_earlier() {
        let cfg = Config::default();
        let db = MemoryEntityDb::new();
        let full = Token::new(
            "Hillary Rodham Clinton",
            TokenKind::Person(vec![crate::token::PersonName {
                name: "Hillary Rodham Clinton".to_string(),
                gender: Some(crate::token::Gender::Kvk),
                case: Some(crate::token::Case::Nf),
            }]),
        );
        let later = Token::word("Clinton", vec![]);
        let out = recognize_entities(vec![full, later], &db, &cfg, false).unwrap();
        assert_eq!(out.len(), 2);
        match &out[1].kind {
            TokenKind::Person(candidates) => {
                assert_eq!(candidates[0].name, "Hillary Rodham Clinton");
            }
            other => panic!("expected PERSON, got {other:?}"),
        }
        assert_eq!(out[1].txt, "Clinton");
    }
}
