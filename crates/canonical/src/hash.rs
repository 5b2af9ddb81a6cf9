//! Hashing utilities for corpus identity.
//!
//! # Corpus Digest
//!
//! ```text
//! SHA-256(version.to_be_bytes() || 0x00 || (len_be_u64 || entry_bytes)*)
//! ```
//!
//! Each entry is length-prefixed so `["ab", "c"]` and `["a", "bc"]` digest
//! differently. The normalization version is included so a matcher built
//! under different normalization rules reports a different digest for the
//! same corpus.
//!
//! ```rust
//! use canonical::corpus_digest;
//!
//! let a = corpus_digest(1, ["Refunds take 5 days", "Track your order online"]);
//! let b = corpus_digest(1, ["Refunds take 5 days", "Track your order online"]);
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 64);
//! assert_ne!(a, corpus_digest(2, ["Refunds take 5 days", "Track your order online"]));
//! ```

use sha2::{Digest, Sha256};

/// Hash arbitrary text with SHA-256 and return a hex digest.
///
/// Version-agnostic; for corpus identity use [`corpus_digest`].
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compute the identity digest of an ordered corpus under a normalization
/// version.
pub fn corpus_digest<I, S>(canonical_version: u32, entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hasher = Sha256::new();
    hasher.update(canonical_version.to_be_bytes());
    hasher.update([0]);
    for entry in entries {
        let bytes = entry.as_ref().as_bytes();
        hasher.update((bytes.len() as u64).to_be_bytes());
        hasher.update(bytes);
    }
    hex::encode(hasher.finalize())
}
