//! Conversation BI canonical text layer.
//!
//! Turns corpus entries and user questions into the term sequences the FAQ
//! matcher weights and compares.
//!
//! ## What we do
//!
//! - Unicode normalization (NFKC by default, configurable)
//! - Locale-free lowercasing
//! - Tokenization on non-alphanumeric boundaries, with byte offsets
//! - Dropping short tokens and configurable stop terms
//! - Versioned corpus digests so callers can tell which corpus and which
//!   normalization rules a matcher was built from
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same text and config
//! give the same terms on any machine.

mod config;
mod error;
mod hash;
mod pipeline;
mod stopwords;
mod token;

pub use crate::config::CanonicalizeConfig;
pub use crate::error::CanonicalError;
pub use crate::hash::{corpus_digest, hash_text};
pub use crate::pipeline::{canonical_tokens, normalize_text, terms};
pub use crate::stopwords::{StopWords, StopWordsConfig, ENGLISH_STOP_WORDS};
pub use crate::token::{tokenize, Token};
