//! Stop-term sets.
//!
//! Stop terms are removed before the vocabulary is built, so they never
//! receive a weight and never contribute to similarity. The set is a
//! parameter of the matcher rather than a constant: callers pick the
//! built-in English list, no list at all, or their own terms.
//!
//! ```rust
//! use canonical::{StopWords, StopWordsConfig};
//!
//! let english = StopWords::english();
//! assert!(english.contains("the"));
//! assert!(!english.contains("refund"));
//!
//! let custom = StopWordsConfig::EnglishPlus(vec!["please".into()]).resolve();
//! assert!(custom.contains("please"));
//! assert!(custom.contains("the"));
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Built-in English stop terms, already lowercased.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
    "during", "each", "else", "etc", "ever", "every", "few", "for", "from", "further",
    "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "however", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "least", "less", "many", "may", "me", "might", "more", "most",
    "much", "must", "my", "myself", "neither", "no", "nor", "not", "now", "of", "off",
    "often", "on", "once", "only", "or", "other", "otherwise", "our", "ours",
    "ourselves", "out", "over", "own", "per", "please", "rather", "same", "she",
    "should", "since", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those", "though",
    "through", "thus", "to", "too", "under", "until", "up", "upon", "us", "very", "was",
    "we", "were", "what", "whatever", "when", "where", "whether", "which", "while",
    "who", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet",
    "you", "your", "yours", "yourself", "yourselves",
];

/// A resolved, immutable set of stop terms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopWords {
    terms: BTreeSet<String>,
}

impl StopWords {
    /// The built-in English list.
    pub fn english() -> Self {
        Self::custom(ENGLISH_STOP_WORDS.iter().copied())
    }

    /// An empty set: every term is kept.
    pub fn none() -> Self {
        Self::default()
    }

    /// A caller-supplied set. Terms are lowercased and trimmed; blank
    /// entries are ignored.
    pub fn custom<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// Add more terms to this set.
    pub fn extend<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.terms.extend(Self::custom(terms).terms);
        self
    }

    /// Membership ignores case; stored terms are always lowercase.
    pub fn contains(&self, term: &str) -> bool {
        if self.terms.contains(term) {
            return true;
        }
        term.chars().any(char::is_uppercase) && self.terms.contains(&term.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate the terms in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

/// Serializable choice of stop-term set.
///
/// In YAML:
///
/// ```yaml
/// stop_words:
///   type: english_plus
///   terms: ["hi", "hello"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "type", content = "terms", rename_all = "snake_case")]
pub enum StopWordsConfig {
    /// Built-in English list.
    #[default]
    English,
    /// No stop terms.
    None,
    /// Only the listed terms.
    Custom(Vec<String>),
    /// Built-in English list plus the listed terms.
    EnglishPlus(Vec<String>),
}

impl StopWordsConfig {
    pub fn resolve(&self) -> StopWords {
        match self {
            StopWordsConfig::English => StopWords::english(),
            StopWordsConfig::None => StopWords::none(),
            StopWordsConfig::Custom(terms) => StopWords::custom(terms),
            StopWordsConfig::EnglishPlus(terms) => StopWords::english().extend(terms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_is_lowercase_and_sorted_unique() {
        for pair in ENGLISH_STOP_WORDS.windows(2) {
            assert!(pair[0] < pair[1], "{} must sort before {}", pair[0], pair[1]);
        }
        for term in ENGLISH_STOP_WORDS {
            assert_eq!(*term, term.to_lowercase());
        }
        assert_eq!(StopWords::english().len(), ENGLISH_STOP_WORDS.len());
    }

    #[test]
    fn english_keeps_domain_terms() {
        let stop = StopWords::english();
        for term in ["refund", "refunds", "days", "delivery", "order", "weather", "today"] {
            assert!(!stop.contains(term), "{term} should not be a stop term");
        }
        for term in ["how", "many", "for", "what", "is", "the", "your", "on"] {
            assert!(stop.contains(term), "{term} should be a stop term");
        }
    }

    #[test]
    fn custom_normalizes_terms() {
        let stop = StopWords::custom(["  Hello ", "", "WORLD"]);
        assert_eq!(stop.iter().collect::<Vec<_>>(), vec!["hello", "world"]);
    }

    #[test]
    fn contains_ignores_case() {
        let stop = StopWords::english();
        assert!(stop.contains("The"));
        assert!(stop.contains("WHAT"));
        assert!(!stop.contains("Refund"));
    }

    #[test]
    fn none_is_empty() {
        assert!(StopWordsConfig::None.resolve().is_empty());
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = StopWordsConfig::Custom(vec!["hi".into()]);
        let json = serde_json::to_string(&cfg).expect("serialize");
        assert_eq!(json, r#"{"type":"custom","terms":["hi"]}"#);
        let english: StopWordsConfig =
            serde_json::from_str(r#"{"type":"english"}"#).expect("parse unit variant");
        assert_eq!(english, StopWordsConfig::English);
    }
}
