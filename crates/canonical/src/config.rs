//! Configuration types for term extraction.
//!
//! [`CanonicalizeConfig`] controls how raw corpus entries and questions are
//! normalized before they are split into terms.
//!
//! # Versioning
//!
//! The `version` field feeds the corpus digest. Any change to how text is
//! normalized or split must come with a version bump so that matchers built
//! under different rules report different digests.
//!
//! # Examples
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.normalize_unicode);
//! assert!(config.lowercase);
//! assert_eq!(config.min_token_chars, 2);
//! ```
//!
//! ## Keeping single-character terms
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig {
//!     min_token_chars: 1,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for normalizing text and splitting it into terms.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// YAML configs:
///
/// ```json
/// {
///   "version": 1,
///   "normalize_unicode": true,
///   "lowercase": true,
///   "min_token_chars": 2
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalizeConfig {
    /// Version of the normalization rules. Must be >= 1; version 0 is
    /// reserved and rejected with [`CanonicalError::InvalidConfig`].
    #[serde(default = "CanonicalizeConfig::default_version")]
    pub version: u32,

    /// If true, apply Unicode NFKC normalization before other transforms.
    ///
    /// With normalization enabled, `"Café"` written with U+00E9 and
    /// `"Cafe"` followed by U+0301 produce the same term.
    #[serde(default = "CanonicalizeConfig::default_true")]
    pub normalize_unicode: bool,

    /// If true, apply locale-free Unicode lowercasing.
    #[serde(default = "CanonicalizeConfig::default_true")]
    pub lowercase: bool,

    /// Tokens with fewer characters than this are dropped as
    /// non-informative. The default of 2 discards single letters and digits.
    #[serde(default = "CanonicalizeConfig::default_min_token_chars")]
    pub min_token_chars: usize,
}

impl CanonicalizeConfig {
    fn default_version() -> u32 {
        1
    }

    fn default_true() -> bool {
        true
    }

    fn default_min_token_chars() -> usize {
        2
    }

    /// Check that the configuration can be used for term extraction.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.min_token_chars == 0 {
            return Err(CanonicalError::InvalidConfig(
                "min_token_chars must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            normalize_unicode: true,
            lowercase: true,
            min_token_chars: Self::default_min_token_chars(),
        }
    }
}
