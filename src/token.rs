//! The token data model (spec §3, §6).
//!
//! `Token` is a tagged record `{kind, txt, val, error}`. We represent the
//! `kind`/`val` pair as a single Rust enum -- a discriminated union where
//! each variant owns only the payload that kind needs (spec §9, "Heterogeneous
//! payloads per token") -- and keep `txt`/`error` as fields shared by every
//! variant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Diagnostic annotation codes (spec §6). Never lost across fusion: every
/// stage that merges tokens must concatenate, not discard, these lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorCode {
    /// A straight quote was rewritten to a curly Icelandic quote.
    StraightQuoteFixed = 1,
    /// Stray punctuation was normalized (e.g. `,,` -> `,`) or a reduplicated
    /// word was collapsed to one occurrence.
    PunctuationOrReduplicationFixed = 2,
    /// A sentence-ending period was immediately followed by an uppercase
    /// word with no intervening space.
    MissingSpaceAfterPeriod = 3,
    /// A wrongly joined compound was split into its constituent words.
    WronglyJoinedCompoundSplit = 4,
    /// A wrongly split compound was joined back into one word.
    WronglySplitCompoundJoined = 5,
}

/// Concatenates error-code lists in order, preserving every occurrence
/// (spec §9: "replace the nested-list flatten pattern with an explicit
/// append-all routine that preserves order"; spec §8 error monotonicity:
/// a fusion's output list is the multiset union of its inputs' lists).
pub fn compound_error<I>(parts: I) -> Vec<ErrorCode>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = ErrorCode>,
{
    let mut out = Vec::new();
    for part in parts {
        out.extend(part);
    }
    out
}

/// Icelandic morphological case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Case {
    /// nominative
    Nf,
    /// accusative
    Thf,
    /// dative
    Thgf,
    /// possessive / genitive
    Ef,
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Nf, Case::Thf, Case::Thgf, Case::Ef];
}

/// Icelandic grammatical gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// masculine
    Kk,
    /// feminine
    Kvk,
    /// neuter
    Hk,
}

pub type CaseSet = BTreeSet<Case>;
pub type GenderSet = BTreeSet<Gender>;

pub fn all_cases() -> CaseSet {
    Case::ALL.iter().copied().collect()
}

/// Lexical category of a meaning, as returned by the external lexicon.
/// `Other` carries through any category string the lexicon emits that this
/// pipeline does not special-case (e.g. conjunctions, pronouns).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordCategory {
    Noun(Gender),
    /// lo: adjective
    Adjective,
    /// to / töl: numeral
    Numeral,
    /// fs: preposition
    Preposition,
    /// ism: given name
    GivenName,
    /// föð: patronym
    Patronym,
    /// móð: matronym
    Matronym,
    /// nafn: generic (non-Icelandic) proper name
    GenericName,
    /// ao: adverb
    Adverb,
    /// ob: indeclinable
    Indeclinable,
    Other(String),
}

/// Grammatical number, as found on a lexicon wordform (ET = singular, FT =
/// plural). Only singular given names are eligible to start a person-name
/// accumulation (spec §4.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrammaticalNumber {
    Singular,
    Plural,
}

/// A single morphological meaning as consumed from the external lexicon
/// (spec §3: "Lexical meaning").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    pub stem: String,
    pub utg: i64,
    pub category: WordCategory,
    pub class: String,
    pub wordform: String,
    pub inflection: String,
    pub number: Option<GrammaticalNumber>,
    pub case: Option<Case>,
}

/// A row from the entity store (spec §4.9): name, describing verb, free-text
/// definition.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRow {
    pub name: String,
    pub verb: String,
    pub definition: String,
}

/// A single candidate interpretation of a recognized person name (spec §3
/// PersonName invariants).
#[derive(Debug, Clone, PartialEq)]
pub struct PersonName {
    pub name: String,
    pub gender: Option<Gender>,
    pub case: Option<Case>,
}

impl PersonName {
    /// Two candidates are compatible iff their genders are either equal or
    /// one is unspecified, and likewise for case (spec §3).
    pub fn compatible(&self, other: &PersonName) -> bool {
        let genders_ok = match (self.gender, other.gender) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        };
        let cases_ok = match (self.case, other.case) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        };
        genders_ok && cases_ok
    }

    /// Merge gender/case, preferring whichever side is specified.
    pub fn merge(&self, other: &PersonName, name: String) -> PersonName {
        PersonName {
            name,
            gender: self.gender.or(other.gender),
            case: self.case.or(other.case),
        }
    }
}

/// Whitespace-significant punctuation class used to reconstruct correctly
/// spaced text (spec §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunctClass {
    Left,
    Center,
    Right,
    None,
    Word,
}

impl PunctClass {
    /// The 5x5 spacing matrix from spec §6: does a space belong between a
    /// token of class `self` (preceding) and one of class `next`?
    pub fn space_before(self, next: PunctClass) -> bool {
        use PunctClass::*;
        match (self, next) {
            (Left, Center) => true,
            (Center, _) => true,
            (Right, Left | Center | Word) => true,
            (None, Center) => true,
            (Word, Left | Center | Word) => true,
            _ => false,
        }
    }
}

/// SI unit measurement class (spec §3: MEASUREMENT payload).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitClass {
    /// Area
    Area,
    /// Temperature
    Temperature,
    /// Length
    Length,
    /// Currency-adjacent count (unused placeholder class from original SI table)
    Count,
    /// Weight
    Weight,
    /// Volume
    Volume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateVal {
    pub y: i32,
    pub mo: u8,
    pub d: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeVal {
    pub h: u8,
    pub m: u8,
    pub s: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampVal {
    pub y: i32,
    pub mo: u8,
    pub d: u8,
    pub h: u8,
    pub m: u8,
    pub s: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberVal {
    pub value: f64,
    pub cases: CaseSet,
    pub genders: GenderSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyVal {
    pub iso: String,
    pub cases: CaseSet,
    pub genders: GenderSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmountVal {
    pub value: f64,
    pub iso: String,
    pub cases: CaseSet,
    pub genders: GenderSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PercentVal {
    pub value: f64,
    pub cases: CaseSet,
    pub genders: GenderSet,
}

/// The discriminated union of every token payload (spec §3, §6). Variant
/// names and the `code()` mapping match the stable integer kind codes
/// external consumers rely on.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Punctuation(PunctClass),
    Time(TimeVal),
    Date(DateVal),
    DateAbs(DateVal),
    DateRel(DateVal),
    Year(i32),
    Number(NumberVal),
    Word(Vec<Meaning>),
    Telno,
    Percent(PercentVal),
    Url,
    Ordinal(i64),
    Timestamp(TimestampVal),
    TimestampAbs(TimestampVal),
    TimestampRel(TimestampVal),
    Currency(CurrencyVal),
    Amount(AmountVal),
    Person(Vec<PersonName>),
    Email,
    Entity(Vec<EntityRow>),
    Unknown,
    Measurement(UnitClass, f64),
    /// An en-dash/hyphen awaiting resolution into a composite word (spec
    /// §4.1, §4.7). Internal to the pipeline; never observed downstream.
    CompositeHyphen,
    PBegin,
    PEnd,
    SBegin { num_parses: usize, err_index: usize },
    SEnd,
}

impl TokenKind {
    /// Stable integer kind code (spec §6).
    pub fn code(&self) -> i32 {
        match self {
            TokenKind::Punctuation(_) => 1,
            TokenKind::Time(_) => 2,
            TokenKind::Date(_) => 3,
            TokenKind::Year(_) => 4,
            TokenKind::Number(_) => 5,
            TokenKind::Word(_) => 6,
            TokenKind::Telno => 7,
            TokenKind::Percent(_) => 8,
            TokenKind::Url => 9,
            TokenKind::Ordinal(_) => 10,
            TokenKind::Timestamp(_) => 11,
            TokenKind::Currency(_) => 12,
            TokenKind::Amount(_) => 13,
            TokenKind::Person(_) => 14,
            TokenKind::Email => 15,
            TokenKind::Entity(_) => 16,
            TokenKind::Unknown => 17,
            TokenKind::DateAbs(_) => 18,
            TokenKind::DateRel(_) => 19,
            TokenKind::TimestampAbs(_) => 20,
            TokenKind::TimestampRel(_) => 21,
            TokenKind::Measurement(..) => 22,
            TokenKind::PBegin => 10001,
            TokenKind::PEnd => 10002,
            TokenKind::SBegin { .. } => 11001,
            TokenKind::SEnd => 11002,
            TokenKind::CompositeHyphen => -1,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, TokenKind::Word(_))
    }

    pub fn meanings(&self) -> Option<&[Meaning]> {
        match self {
            TokenKind::Word(m) => Some(m),
            _ => None,
        }
    }
}

/// A single pipeline token: surface text, typed payload, accumulated error
/// codes.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub txt: String,
    pub kind: TokenKind,
    pub error: Vec<ErrorCode>,
}

impl Token {
    pub fn new(txt: impl Into<String>, kind: TokenKind) -> Token {
        Token { txt: txt.into(), kind, error: Vec::new() }
    }

    pub fn with_error(mut self, error: Vec<ErrorCode>) -> Token {
        self.error = error;
        self
    }

    pub fn punct(txt: impl Into<String>, class: PunctClass) -> Token {
        Token::new(txt, TokenKind::Punctuation(class))
    }

    pub fn word(txt: impl Into<String>, meanings: Vec<Meaning>) -> Token {
        Token::new(txt, TokenKind::Word(meanings))
    }

    pub fn unknown(txt: impl Into<String>) -> Token {
        Token::new(txt, TokenKind::Unknown)
    }

    /// The punctuation spacing class a token presents on its right edge,
    /// for purposes of `render_sequence` (spec §6). Non-punctuation tokens
    /// are always `Word`-class.
    fn spacing_class(&self) -> Option<PunctClass> {
        match &self.kind {
            TokenKind::Punctuation(c) => Some(*c),
            TokenKind::SBegin { .. }
            | TokenKind::SEnd
            | TokenKind::PBegin
            | TokenKind::PEnd
            | TokenKind::CompositeHyphen => None,
            _ => Some(PunctClass::Word),
        }
    }

    /// Reconstruct correctly spaced text from a token sequence (spec §6
    /// canonicalization / the original's `correct_spaces`). Delimiter
    /// tokens (sentence/paragraph markers) are skipped.
    pub fn render_sequence(tokens: &[Token]) -> String {
        let mut out = String::new();
        let mut last: Option<PunctClass> = None;
        for tok in tokens {
            let class = match tok.spacing_class() {
                Some(c) => c,
                None => continue,
            };
            let need_space = match last {
                Some(prev) => prev.space_before(class),
                None => false,
            };
            if need_space && !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&tok.txt);
            last = Some(class);
        }
        out
    }
}
