//! Term weighting and the corpus representation.
//!
//! Weights use smoothed inverse document frequency:
//!
//! ```text
//! idf(t) = ln((1 + N) / (1 + df(t))) + 1
//! ```
//!
//! where `N` is the corpus size and `df(t)` the number of entries containing
//! `t`. Rarer terms weigh more, and every vocabulary term keeps a weight of
//! at least 1. An entry's vector component for `t` is its raw count of `t`
//! times `idf(t)`.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::similarity::l2_norm;

/// Sorted set of distinct terms observed in the corpus, with a term → column
/// lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl Vocabulary {
    /// Collect the distinct terms of `documents`, ordered lexicographically so
    /// column assignment does not depend on corpus order.
    pub fn from_documents(documents: &[Vec<String>]) -> Self {
        let distinct: BTreeSet<&str> = documents
            .iter()
            .flat_map(|doc| doc.iter().map(String::as_str))
            .collect();
        let terms: Vec<String> = distinct.into_iter().map(str::to_owned).collect();
        let lookup = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        Self { terms, lookup }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.lookup.get(term).copied()
    }

    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Sparse weighted term vector; entries sorted by column, no zero weights.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f32)>,
    norm: f32,
}

impl SparseVector {
    /// Build a vector from raw per-column counts and the per-column weights.
    pub(crate) fn from_counts(counts: BTreeMap<usize, u32>, idf: &[f32]) -> Self {
        let entries: Vec<(usize, f32)> = counts
            .into_iter()
            .map(|(col, count)| (col, count as f32 * idf[col]))
            .filter(|(_, weight)| *weight > 0.0)
            .collect();
        let norm = l2_norm(entries.iter().map(|(_, w)| *w));
        Self { entries, norm }
    }

    pub fn entries(&self) -> &[(usize, f32)] {
        &self.entries
    }

    /// Euclidean magnitude, cached at construction.
    pub fn norm(&self) -> f32 {
        self.norm
    }

    pub fn is_zero(&self) -> bool {
        self.norm == 0.0
    }

    /// Dot product by merging the two sorted entry lists.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f32;
        while i < self.entries.len() && j < other.entries.len() {
            let (ca, wa) = self.entries[i];
            let (cb, wb) = other.entries[j];
            match ca.cmp(&cb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Numeric encoding of a corpus: vocabulary, per-term weights, and one
/// vector per entry. Built once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusRepresentation {
    vocabulary: Vocabulary,
    idf: Vec<f32>,
    vectors: Vec<SparseVector>,
}

impl CorpusRepresentation {
    /// Build the representation from per-entry term sequences.
    pub fn build(documents: &[Vec<String>]) -> Self {
        let vocabulary = Vocabulary::from_documents(documents);

        let mut df = vec![0u32; vocabulary.len()];
        for doc in documents {
            let seen: BTreeSet<usize> = doc
                .iter()
                .filter_map(|term| vocabulary.index_of(term))
                .collect();
            for col in seen {
                df[col] += 1;
            }
        }

        let n = documents.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        let vectors = documents
            .iter()
            .map(|doc| SparseVector::from_counts(count_columns(&vocabulary, doc), &idf))
            .collect();

        Self {
            vocabulary,
            idf,
            vectors,
        }
    }

    /// Encode a term sequence over the fixed vocabulary. Unknown terms are
    /// dropped.
    pub fn encode(&self, terms: &[String]) -> SparseVector {
        SparseVector::from_counts(count_columns(&self.vocabulary, terms), &self.idf)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Weight of `term`, or `None` when it is not in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary.index_of(term).map(|col| self.idf[col])
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }
}

fn count_columns(vocabulary: &Vocabulary, terms: &[String]) -> BTreeMap<usize, u32> {
    let mut counts = BTreeMap::new();
    for col in terms.iter().filter_map(|term| vocabulary.index_of(term)) {
        *counts.entry(col).or_insert(0) += 1;
    }
    counts
}
