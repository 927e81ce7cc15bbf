//! A multi-stage, lazy-by-convention tokenization pipeline for Icelandic
//! text: whitespace splitting and character classification, abbreviation
//! and amount fusion, sentence/paragraph delimiting, compound-error
//! correction, static- and ambiguous-phrase matching, morphological
//! annotation, date/time/currency assembly, person-name accumulation, and
//! entity recognition (spec §2).
//!
//! The two public entry points are [`pipeline::tokenize`] (the full
//! pipeline) and [`pipeline::raw_tokenize`] (surface tokenization only).

pub mod config;
pub mod dateutil;
pub mod entitydb;
pub mod error;
pub mod lexicon;
pub mod phrase_matcher;
pub mod pipeline;
pub mod punctuation;
pub mod roman;
pub mod stages;
pub mod token;

pub use config::Config;
pub use entitydb::{EntityDb, MemoryEntityDb, NullEntityDb};
pub use error::{Error, Result};
pub use lexicon::{Lexicon, MemoryLexicon};
pub use pipeline::{raw_tokenize, tokenize};
pub use token::{Token, TokenKind};
