//! The public entry points chaining all ten stages (spec §6): [`tokenize`]
//! runs the full pipeline, [`raw_tokenize`] stops after `parse_errors_1`.

use crate::config::Config;
use crate::entitydb::{EntityDb, NullEntityDb};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::stages::{
    annotate::annotate, disambiguate_phrases::disambiguate_phrases, parse_errors_1::parse_errors_1,
    parse_particles::parse_particles, parse_phrases_1::parse_phrases_1,
    parse_phrases_2::parse_phrases_2, parse_sentences::parse_sentences,
    parse_static_phrases::parse_static_phrases, parse_tokens::parse_tokens,
    recognize_entities::recognize_entities,
};
use crate::token::Token;

/// Runs only the first four stages (spec §6: "A lower-level `raw_tokenize`
/// stops after `parse_errors_1`"), useful for callers that want surface
/// tokenization without morphology, phrase matching, or entities.
pub fn raw_tokenize(text: &str, config: &Config) -> impl Iterator<Item = Token> {
    let tokens = parse_tokens(text, config);
    let tokens = parse_particles(tokens, config);
    let tokens = parse_sentences(tokens);
    let tokens = parse_errors_1(tokens, config);
    tokens.into_iter()
}

/// Runs the full ten-stage pipeline (spec §2, §6). `entity_db` is optional;
/// when absent, `recognize_entities` degrades to a pass-through stage over a
/// [`NullEntityDb`] (spec §5: the entity session may be supplied by the
/// caller or omitted).
pub fn tokenize(
    text: &str,
    config: &Config,
    lexicon: &dyn Lexicon,
    entity_db: Option<&dyn EntityDb>,
    auto_uppercase: bool,
) -> Result<impl Iterator<Item = Token>> {
    let tokens = parse_tokens(text, config);
    let tokens = parse_particles(tokens, config);
    let tokens = parse_sentences(tokens);
    let tokens = parse_errors_1(tokens, config);
    let tokens = parse_static_phrases(tokens, config, auto_uppercase);
    let tokens = annotate(tokens, lexicon, auto_uppercase)?;
    let tokens = parse_phrases_1(tokens, config, lexicon)?;
    let tokens = parse_phrases_2(tokens, config);
    let null_db = NullEntityDb;
    let db = entity_db.unwrap_or(&null_db);
    let tokens = recognize_entities(tokens, db, config, auto_uppercase)?;
    let tokens = disambiguate_phrases(tokens, config);
    Ok(tokens.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{meaning_with, MemoryLexicon};
    use crate::token::{Case, Gender, GrammaticalNumber, Token as Tok, TokenKind, WordCategory};

    fn test_lexicon() -> MemoryLexicon {
        let mut lex = MemoryLexicon::new();
        lex.insert(
            "Jón",
            vec![meaning_with(
                "Jón",
                1,
                WordCategory::GivenName,
                "ism",
                "Jón",
                "NFET",
                GrammaticalNumber::Singular,
                Case::Nf,
            )],
        );
        lex
    }

    #[test]
    fn full_pipeline_wraps_sentence_and_recognizes_person() {
        let config = Config::default();
        let lex = test_lexicon();
        let toks: Vec<Tok> = tokenize("Jón kom.", &config, &lex, None, false).unwrap().collect();
        assert!(matches!(toks.first().unwrap().kind, TokenKind::SBegin { .. }));
        assert!(matches!(toks.last().unwrap().kind, TokenKind::SEnd));
        assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::Person(_))));
    }

    #[test]
    fn raw_tokenize_stops_before_annotation() {
        let config = Config::default();
        let toks: Vec<Tok> = raw_tokenize("Jón kom.", &config).collect();
        assert!(toks.iter().any(|t| t.kind.is_word() && t.txt == "Jón"));
        assert!(toks.iter().all(|t| !matches!(t.kind, TokenKind::Person(_))));
    }
}
