use canonical::{CanonicalError, CanonicalizeConfig, StopWordsConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default similarity cutoff below which a query falls back.
pub const DEFAULT_THRESHOLD: f32 = 0.25;

/// Configuration for building and querying an [`FaqMatcher`](crate::FaqMatcher).
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded
/// in higher-level configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Normalization and tokenization rules shared by corpus and questions.
    #[serde(default)]
    pub canonical: CanonicalizeConfig,
    /// Stop terms removed before the vocabulary is built.
    #[serde(default)]
    pub stop_words: StopWordsConfig,
    /// Similarity cutoff in [0, 1]. A best score strictly below it falls back.
    #[serde(default = "MatchConfig::default_threshold")]
    pub threshold: f32,
    /// Upper bound on hits returned by ranked lookups.
    #[serde(default = "MatchConfig::default_max_results")]
    pub max_results: usize,
    /// Score corpus entries on the rayon pool for large corpora.
    #[serde(default)]
    pub parallel: bool,
    /// Minimum corpus size before `parallel` takes effect.
    #[serde(default = "MatchConfig::default_parallel_min_entries")]
    pub parallel_min_entries: usize,
}

impl MatchConfig {
    pub(crate) fn default_threshold() -> f32 {
        DEFAULT_THRESHOLD
    }

    pub(crate) fn default_max_results() -> usize {
        3
    }

    pub(crate) fn default_parallel_min_entries() -> usize {
        512
    }

    /// Validate the configuration before a matcher is built from it.
    pub fn validate(&self) -> Result<(), MatchError> {
        self.canonical.validate()?;
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(MatchError::InvalidConfig(format!(
                "threshold must be between 0.0 and 1.0, got {}",
                self.threshold
            )));
        }
        if self.max_results == 0 {
            return Err(MatchError::InvalidConfig(
                "max_results must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            canonical: CanonicalizeConfig::default(),
            stop_words: StopWordsConfig::default(),
            threshold: Self::default_threshold(),
            max_results: Self::default_max_results(),
            parallel: false,
            parallel_min_entries: Self::default_parallel_min_entries(),
        }
    }
}

/// One scored corpus entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchHit {
    /// Position of the entry in the corpus.
    pub index: usize,
    /// The corpus entry itself.
    pub answer: String,
    /// Cosine similarity in [0, 1].
    pub score: f32,
}

/// Outcome of a single question.
///
/// `Fallback` is a normal outcome, not an error: it means no entry was
/// confidently relevant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchResult {
    Match(MatchHit),
    Fallback,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Match(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, MatchResult::Fallback)
    }

    pub fn hit(&self) -> Option<&MatchHit> {
        match self {
            MatchResult::Match(hit) => Some(hit),
            MatchResult::Fallback => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.hit().map(|hit| hit.index)
    }

    pub fn score(&self) -> Option<f32> {
        self.hit().map(|hit| hit.score)
    }

    /// The matched answer, or `fallback` when nothing matched.
    pub fn answer_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            MatchResult::Match(hit) => hit.answer.as_str(),
            MatchResult::Fallback => fallback,
        }
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// Invalid matcher configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Normalization settings were rejected.
    #[error("canonical error: {0}")]
    Canonical(#[from] CanonicalError),
}
