//! The ten pipeline stages, each a pure function or small state machine over
//! a token vector (spec §2, §4). [`crate::pipeline`] chains them.

pub mod annotate;
pub mod digits;
pub mod disambiguate_phrases;
pub mod parse_errors_1;
pub mod parse_particles;
pub mod parse_phrases_1;
pub mod parse_phrases_2;
pub mod parse_sentences;
pub mod parse_static_phrases;
pub mod parse_tokens;
pub mod recognize_entities;
