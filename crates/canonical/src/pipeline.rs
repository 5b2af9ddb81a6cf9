use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::CanonicalizeConfig;
use crate::stopwords::StopWords;
use crate::token::{tokenize, Token};

/// Apply Unicode normalization and lowercasing as configured.
///
/// Returns the input unchanged (borrowed) when both transforms are off.
pub fn normalize_text<'a>(input: &'a str, cfg: &CanonicalizeConfig) -> Cow<'a, str> {
    // NFKC first; it can change character boundaries that lowercasing sees.
    let normalized: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(input.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(input)
    };

    if cfg.lowercase {
        Cow::Owned(normalized.to_lowercase())
    } else {
        normalized
    }
}

/// Normalize `input` and return its tokens with offsets into the normalized
/// text. Short tokens and stop terms are kept; use [`terms`] for weighting.
pub fn canonical_tokens(input: &str, cfg: &CanonicalizeConfig) -> Vec<Token> {
    tokenize(&normalize_text(input, cfg))
}

/// Extract the weighted-term sequence for one corpus entry or question.
///
/// Order follows the input and duplicates are preserved, so callers can
/// derive raw term counts. Tokens shorter than `cfg.min_token_chars` and
/// members of `stop_words` are dropped.
pub fn terms(input: &str, cfg: &CanonicalizeConfig, stop_words: &StopWords) -> Vec<String> {
    let normalized = normalize_text(input, cfg);
    tokenize(&normalized)
        .into_iter()
        .map(|t| t.text)
        .filter(|t| t.chars().count() >= cfg.min_token_chars)
        .filter(|t| !stop_words.contains(t))
        .collect()
}
