//! Punctuation classification tables: the literal character sets behind the
//! spacing matrix, kept concrete rather than left as an abstract five-way
//! enum with no data.

use crate::token::PunctClass;

pub const LEFT_PUNCTUATION: &str = "([„‚«#$€<°";
pub const RIGHT_PUNCTUATION: &str = ".,:;)]!%?“»”’‛‘…>–";
pub const CENTER_PUNCTUATION: &str = "\"*&+=@©|—";
pub const NONE_PUNCTUATION: &str = "-/'~\\";

/// Punctuation that may end a sentence (spec §4.3).
pub const END_OF_SENTENCE: &[&str] = &[".", "?", "!", "[…]"];

/// Punctuation that may trail a sentence-ending mark without opening a new
/// sentence (spec §4.3, GLOSSARY "Sentence-finisher punctuation").
pub const SENTENCE_FINISHERS: &[&str] = &[")", "]", "“", "»", "”", "’", "\"", "[…]"];

/// Hyphen-class characters, all canonicalized to a single `-` during
/// tokenization (spec §4.1).
pub const HYPHENS: &str = "—–-";
pub const HYPHEN: char = '-';

/// En-dash/hyphen characters that may signal a composite-word split (spec
/// §4.1, §4.7).
pub const COMPOSITE_HYPHENS: &str = "–-";

pub const SQUOTES: &str = "'‚‛‘";
pub const DQUOTES: &str = "\"“„”";

/// Classify a single punctuation character by spacing behavior (spec §6).
/// Characters outside every table default to `Word` class, matching the
/// original's fallback.
pub fn classify_char(c: char) -> PunctClass {
    if LEFT_PUNCTUATION.contains(c) {
        PunctClass::Left
    } else if CENTER_PUNCTUATION.contains(c) {
        PunctClass::Center
    } else if RIGHT_PUNCTUATION.contains(c) {
        PunctClass::Right
    } else if NONE_PUNCTUATION.contains(c) {
        PunctClass::None
    } else {
        PunctClass::Word
    }
}

/// Classify a (possibly multi-char) punctuation token's surface text, used
/// when reconstructing spacing (spec §6's `correct_spaces`).
pub fn classify_text(text: &str) -> PunctClass {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => classify_char(c),
        _ => PunctClass::Word,
    }
}

pub fn is_sentence_end(text: &str) -> bool {
    END_OF_SENTENCE.contains(&text)
}

pub fn is_sentence_finisher(text: &str) -> bool {
    SENTENCE_FINISHERS.contains(&text)
}
