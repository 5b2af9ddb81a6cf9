//! Mapping from logical fields to the columns of an untyped table.
//!
//! Conversation exports name their columns inconsistently (`sentiment`,
//! `Sentiment Label`, `issue_type`, `Category`). [`SchemaMap::infer`] resolves
//! each logical field to at most one column, once, so downstream code asks
//! for a field by meaning rather than scanning headers. A field with no
//! column is absent and the features that need it are disabled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::InsightsError;

/// Fields the summaries know how to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalField {
    /// Free-text conversation body.
    Text,
    Sentiment,
    IssueType,
    Source,
}

impl LogicalField {
    pub const ALL: [LogicalField; 4] = [
        LogicalField::Text,
        LogicalField::Sentiment,
        LogicalField::IssueType,
        LogicalField::Source,
    ];

    /// Exact (normalized) header names, then substrings, in priority order.
    fn patterns(self) -> (&'static [&'static str], &'static [&'static str]) {
        match self {
            LogicalField::Text => (
                &["text", "conversation", "message"],
                &["conversation", "message", "text", "utterance"],
            ),
            LogicalField::Sentiment => (&["sentiment"], &["sentiment"]),
            LogicalField::IssueType => (
                &["issue_type", "category"],
                &["issue", "category", "topic"],
            ),
            LogicalField::Source => (&["source"], &["source", "channel"]),
        }
    }
}

/// Resolved logical field → column name mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaMap {
    columns: BTreeMap<LogicalField, String>,
}

impl SchemaMap {
    /// Infer the mapping from table headers.
    ///
    /// For each field an exact case-insensitive match (spaces and dashes read
    /// as underscores) wins over a substring match; among equals the leftmost
    /// column wins. A column is assigned to at most one field. When no text
    /// column is recognized, the first unassigned column is used as text.
    pub fn infer<I, S>(headers: I) -> Result<Self, InsightsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headers: Vec<String> = headers
            .into_iter()
            .map(|h| h.as_ref().to_string())
            .collect();
        if headers.is_empty() {
            return Err(InsightsError::EmptyHeaders);
        }
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();

        let mut taken = vec![false; headers.len()];
        let mut columns = BTreeMap::new();

        // Specific fields first so a generic "text" substring cannot steal
        // a column like "sentiment_text".
        for field in [
            LogicalField::Sentiment,
            LogicalField::IssueType,
            LogicalField::Source,
            LogicalField::Text,
        ] {
            let (exact, partial) = field.patterns();
            let found = find_column(&normalized, &taken, |h| exact.contains(&h))
                .or_else(|| find_column(&normalized, &taken, |h| partial.iter().any(|p| h.contains(p))));
            if let Some(idx) = found {
                taken[idx] = true;
                columns.insert(field, headers[idx].clone());
            }
        }

        if !columns.contains_key(&LogicalField::Text) {
            if let Some(idx) = taken.iter().position(|t| !t) {
                columns.insert(LogicalField::Text, headers[idx].clone());
            }
        }

        tracing::debug!(
            headers = headers.len(),
            resolved = columns.len(),
            "schema_inferred"
        );
        Ok(Self { columns })
    }

    /// Build a mapping explicitly.
    pub fn from_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (LogicalField, S)>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(|(f, c)| (f, c.into())).collect(),
        }
    }

    /// Column bound to `field`, or `None` when the field is absent.
    pub fn column(&self, field: LogicalField) -> Option<&str> {
        self.columns.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: LogicalField) -> bool {
        self.columns.contains_key(&field)
    }
}

fn normalize_header(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

fn find_column(
    normalized: &[String],
    taken: &[bool],
    pred: impl Fn(&str) -> bool,
) -> Option<usize> {
    normalized
        .iter()
        .enumerate()
        .find(|(idx, h)| !taken[*idx] && pred(h))
        .map(|(idx, _)| idx)
}
