//! Pipeline-wide error type.
//!
//! Diagnostic annotations (misplaced commas, reduplicated words, ...) are
//! never represented here -- they live on `Token::error` as integer codes
//! (see [`crate::token::ErrorCode`]) and are carried through fusion. This
//! type is reserved for the hard failures described in spec §7.2: failures
//! of the resources a pipeline run depends on.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open lexicon: {0}")]
    LexiconOpen(String),

    #[error("lexicon lookup failed for {word:?}: {reason}")]
    LexiconLookup { word: String, reason: String },

    #[error("failed to open entity database session: {0}")]
    EntityDbOpen(String),

    #[error("entity database query failed: {0}")]
    EntityDbQuery(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
