//! Umbrella crate for Conversation BI.
//!
//! Stitches the canonical text layer, the FAQ matcher, and table insights
//! together behind one config file, and adds caller-owned chat sessions.
//!
//! ```
//! use std::sync::Arc;
//! use convbi::{build_matcher, ChatSession, ConvBiConfig};
//!
//! let config = ConvBiConfig::default();
//! let matcher = build_matcher(
//!     ["Refunds take 5 days", "Track your order online"],
//!     &config,
//! ).unwrap();
//! let session = ChatSession::new(Arc::new(matcher), config.chat_config());
//!
//! let mut history = session.new_history();
//! let reply = session.ask(&mut history, "where can I track my order");
//! assert_eq!(reply.message, "Track your order online");
//! assert_eq!(history.len(), 2);
//! ```

pub mod config;
pub mod session;

use std::fs;
use std::path::Path;

use thiserror::Error;

pub use canonical::{
    corpus_digest, terms, tokenize, CanonicalError, CanonicalizeConfig, StopWords,
    StopWordsConfig, Token,
};
pub use insights::{
    filter_rows, head, summarize, text_column, InsightsError, LogicalField, Record, SchemaMap,
    Summary,
};
pub use matcher::{
    set_match_metrics, FaqMatcher, MatchConfig, MatchError, MatchHit, MatchMetrics, MatchResult,
    DEFAULT_THRESHOLD,
};

pub use crate::config::{ConfigLoadError, ConvBiConfig};
pub use crate::session::{ChatConfig, ChatHistory, ChatReply, ChatSession, ChatTurn, Role};

/// Errors from loading a corpus and building a matcher.
#[derive(Debug, Error)]
pub enum ConvBiError {
    #[error("failed to read corpus: {0}")]
    CorpusRead(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("matcher error: {0}")]
    Match(#[from] MatchError),
}

/// Build a matcher for `corpus` with the settings in `config`.
pub fn build_matcher<I, S>(corpus: I, config: &ConvBiConfig) -> Result<FaqMatcher, MatchError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    FaqMatcher::build_with_config(corpus, config.to_match_config())
}

/// Split plain text into corpus entries: one per non-blank line, trimmed.
pub fn parse_corpus(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Read a one-entry-per-line corpus file.
pub fn read_corpus_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ConvBiError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_corpus(&text))
}

/// Load config from `path`, or defaults when no path is given.
pub fn load_config<P: AsRef<Path>>(path: Option<P>) -> Result<ConvBiConfig, ConvBiError> {
    match path {
        Some(path) => Ok(ConvBiConfig::from_file(path)?),
        None => Ok(ConvBiConfig::default()),
    }
}

/// Read a corpus file and build a matcher for it in one step.
pub fn load_matcher<P: AsRef<Path>>(
    corpus_path: P,
    config: &ConvBiConfig,
) -> Result<FaqMatcher, ConvBiError> {
    let corpus = read_corpus_file(corpus_path)?;
    Ok(build_matcher(corpus, config)?)
}
