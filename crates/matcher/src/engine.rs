use std::time::Instant;

use canonical::{corpus_digest, terms, StopWords};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::metrics::metrics_recorder;
use crate::similarity::cosine_similarity;
use crate::types::{MatchConfig, MatchError, MatchHit, MatchResult};
use crate::vectorizer::{CorpusRepresentation, SparseVector, Vocabulary};


/// FAQ matcher over an immutable corpus of reference answers.
///
/// Built once; every query method takes `&self`, so a matcher can be shared
/// across threads behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct FaqMatcher {
    corpus: Vec<String>,
    representation: CorpusRepresentation,
    stop_words: StopWords,
    config: MatchConfig,
    digest: String,
}

impl FaqMatcher {
    /// Build a matcher with [`MatchConfig::default`].
    ///
    /// Never fails: an empty corpus yields an empty vocabulary and every
    /// query falls back.
    pub fn build<I, S>(corpus: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build_validated(corpus, MatchConfig::default())
    }

    /// Build a matcher with explicit settings, rejecting invalid ones.
    pub fn build_with_config<I, S>(corpus: I, config: MatchConfig) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Err(err) = config.validate() {
            warn!(error = %err, "faq_build_rejected");
            return Err(err);
        }
        Ok(Self::build_validated(corpus, config))
    }

    fn build_validated<I, S>(corpus: I, config: MatchConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let start = Instant::now();
        let corpus: Vec<String> = corpus.into_iter().map(Into::into).collect();
        let stop_words = config.stop_words.resolve();

        let documents: Vec<Vec<String>> = corpus
            .iter()
            .map(|entry| terms(entry, &config.canonical, &stop_words))
            .collect();
        let representation = CorpusRepresentation::build(&documents);
        let digest = corpus_digest(config.canonical.version, &corpus);

        let latency = start.elapsed();
        info!(
            entries = corpus.len(),
            vocabulary = representation.vocabulary().len(),
            stop_words = stop_words.len(),
            digest = %digest,
            elapsed_micros = latency.as_micros(),
            "faq_build_success"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_build(latency, corpus.len(), representation.vocabulary().len());
        }

        Self {
            corpus,
            representation,
            stop_words,
            config,
            digest,
        }
    }

    /// Answer `question` using the configured threshold.
    pub fn answer(&self, question: &str) -> MatchResult {
        self.answer_with_threshold(question, self.config.threshold)
    }

    /// Answer `question`, falling back when the best score is strictly below
    /// `threshold`. Thresholds outside [0, 1] are clamped; a NaN threshold
    /// uses the configured one.
    pub fn answer_with_threshold(&self, question: &str, threshold: f32) -> MatchResult {
        let start = Instant::now();
        let threshold = if threshold.is_nan() {
            self.config.threshold
        } else {
            threshold.clamp(0.0, 1.0)
        };

        let query = self.encode(question);
        let result = match self.best(&query) {
            Some((index, score)) if score >= threshold => MatchResult::Match(MatchHit {
                index,
                answer: self.corpus[index].clone(),
                score,
            }),
            _ => MatchResult::Fallback,
        };

        let latency = start.elapsed();
        debug!(
            matched = result.is_match(),
            index = ?result.index(),
            score = ?result.score(),
            threshold,
            elapsed_micros = latency.as_micros(),
            "faq_query"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_query(latency, result.is_match());
        }
        result
    }

    /// Up to `k` entries most similar to `question`, best first.
    ///
    /// Ties are ordered by corpus index. Entries with zero similarity are
    /// left out and the threshold is not applied.
    pub fn top_matches(&self, question: &str, k: usize) -> Vec<MatchHit> {
        if k == 0 {
            return Vec::new();
        }
        let query = self.encode(question);
        if query.is_zero() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f32)> = self
            .score_all(&query)
            .into_iter()
            .enumerate()
            .filter(|(_, score)| *score > 0.0)
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.truncate(k);

        scored
            .into_iter()
            .map(|(index, score)| MatchHit {
                index,
                answer: self.corpus[index].clone(),
                score,
            })
            .collect()
    }

    /// Top hits bounded by the configured `max_results`.
    pub fn related(&self, question: &str) -> Vec<MatchHit> {
        self.top_matches(question, self.config.max_results)
    }

    fn encode(&self, text: &str) -> SparseVector {
        let query_terms = terms(text, &self.config.canonical, &self.stop_words);
        self.representation.encode(&query_terms)
    }

    /// Argmax over the corpus; the first (lowest) index wins ties. `None` for
    /// an empty corpus or a question with no vocabulary terms.
    fn best(&self, query: &SparseVector) -> Option<(usize, f32)> {
        if query.is_zero() || self.corpus.is_empty() {
            return None;
        }
        let mut best: Option<(usize, f32)> = None;
        for (index, score) in self.score_all(query).into_iter().enumerate() {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((index, score)),
            }
        }
        best
    }

    fn score_all(&self, query: &SparseVector) -> Vec<f32> {
        let vectors = self.representation.vectors();
        if self.config.parallel && vectors.len() >= self.config.parallel_min_entries {
            vectors
                .par_iter()
                .map(|v| cosine_similarity(query, v))
                .collect()
        } else {
            vectors.iter().map(|v| cosine_similarity(query, v)).collect()
        }
    }
}

impl FaqMatcher {
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Corpus entry at `index`.
    pub fn entry(&self, index: usize) -> Option<&str> {
        self.corpus.get(index).map(String::as_str)
    }

    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.representation.vocabulary()
    }

    /// Weight of a vocabulary term.
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.representation.idf(term)
    }

    /// SHA-256 identity of the corpus and normalization version this matcher
    /// was built from. A different digest means a rebuild is needed.
    pub fn corpus_digest(&self) -> &str {
        &self.digest
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}
