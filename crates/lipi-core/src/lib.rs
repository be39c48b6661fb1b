//! Rule-driven transliteration of Latin-script input (English words and
//! romanized Hindi) into Devanagari.
//!
//! The engine is a pure, synchronous `&str -> String` function: input is
//! split into whitespace/punctuation/word segments, word segments are
//! rewritten via a whole-word dictionary and greedy longest-match
//! decomposition over consonant/vowel/matra tables, and everything is
//! reassembled in original order.

pub mod rules;
pub mod tokenize;
pub mod translit;
pub mod unicode;

pub use rules::{RuleSet, RulesConfigError};
pub use tokenize::{segments, Segment, SegmentKind};
pub use translit::{transliterate, transliterate_with, transliterate_word};
