//! # Conversation BI FAQ Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` picks the reference answer that best fits a free-text question.
//! It sits on top of the `canonical` text layer: corpus entries and
//! questions are normalized and split into terms there, then weighted and
//! compared here.
//!
//! ## How matching works
//!
//! 1. At build time every corpus entry becomes a term vector. Terms are
//!    weighted by smoothed inverse document frequency, so terms found in
//!    fewer entries count more. Stop terms never enter the vocabulary.
//! 2. At query time the question is encoded over the same vocabulary;
//!    unseen terms are dropped.
//! 3. Cosine similarity is computed against every entry. The highest score
//!    wins, ties going to the lowest corpus index.
//! 4. If the best score is below the threshold (default 0.25), the corpus
//!    is empty, or the question has no vocabulary terms, the result is
//!    [`MatchResult::Fallback`].
//!
//! ## Core Types
//!
//! - [`FaqMatcher`]: immutable matcher built once from a corpus.
//! - [`MatchConfig`]: threshold, stop terms, tokenization, ranking limits.
//! - [`MatchResult`]: a [`MatchHit`] or the fallback sentinel.
//! - [`CorpusRepresentation`]: vocabulary, weights, and entry vectors.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::FaqMatcher;
//!
//! let matcher = FaqMatcher::build([
//!     "Refunds take 5 days",
//!     "Track your order online",
//!     "Cash on delivery is supported",
//! ]);
//!
//! let result = matcher.answer("how many days for refund");
//! assert_eq!(result.index(), Some(0));
//!
//! assert!(matcher.answer("what is the weather today").is_fallback());
//! ```
//!
//! ## Observability
//!
//! Build and query events are emitted through `tracing`. Install a
//! [`MatchMetrics`] implementation via [`set_match_metrics`] to record
//! build and query latency.

pub mod engine;
pub mod metrics;
pub mod similarity;
pub mod types;
pub mod vectorizer;

pub use crate::engine::FaqMatcher;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::similarity::cosine_similarity;
pub use crate::types::{MatchConfig, MatchError, MatchHit, MatchResult, DEFAULT_THRESHOLD};
pub use crate::vectorizer::{CorpusRepresentation, SparseVector, Vocabulary};
