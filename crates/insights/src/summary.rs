use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::{LogicalField, SchemaMap};

/// One already-parsed table row: column name → cell value.
pub type Record = BTreeMap<String, String>;

/// Label used for blank or missing cells.
pub const UNKNOWN: &str = "Unknown";

/// Value counts per categorical field.
///
/// A count map is `None` when the schema has no column for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_rows: usize,
    pub sentiment_counts: Option<BTreeMap<String, usize>>,
    pub issue_type_counts: Option<BTreeMap<String, usize>>,
    pub source_counts: Option<BTreeMap<String, usize>>,
}

impl Summary {
    /// Counts for a categorical field.
    pub fn counts(&self, field: LogicalField) -> Option<&BTreeMap<String, usize>> {
        match field {
            LogicalField::Sentiment => self.sentiment_counts.as_ref(),
            LogicalField::IssueType => self.issue_type_counts.as_ref(),
            LogicalField::Source => self.source_counts.as_ref(),
            LogicalField::Text => None,
        }
    }

    /// Most frequent value of `field`; ties go to the lexicographically first.
    pub fn top(&self, field: LogicalField) -> Option<&str> {
        self.counts(field)?
            .iter()
            .fold(None::<(&String, usize)>, |best, (value, &count)| match best {
                Some((_, best_count)) if count <= best_count => best,
                _ => Some((value, count)),
            })
            .map(|(value, _)| value.as_str())
    }
}

/// Group-count the categorical fields of `rows`.
pub fn summarize(rows: &[Record], schema: &SchemaMap) -> Summary {
    let summary = Summary {
        total_rows: rows.len(),
        sentiment_counts: value_counts(rows, schema.column(LogicalField::Sentiment)),
        issue_type_counts: value_counts(rows, schema.column(LogicalField::IssueType)),
        source_counts: value_counts(rows, schema.column(LogicalField::Source)),
    };
    tracing::debug!(
        total_rows = summary.total_rows,
        sentiment = summary.sentiment_counts.is_some(),
        issue_type = summary.issue_type_counts.is_some(),
        source = summary.source_counts.is_some(),
        "summary_computed"
    );
    summary
}

/// Rows whose `field` cell equals `value`. Blank cells compare as
/// [`UNKNOWN`]. An absent field matches no rows.
pub fn filter_rows<'a>(
    rows: &'a [Record],
    schema: &SchemaMap,
    field: LogicalField,
    value: &str,
) -> Vec<&'a Record> {
    let Some(column) = schema.column(field) else {
        return Vec::new();
    };
    rows.iter()
        .filter(|row| cell_label(row, column) == value)
        .collect()
}

/// The first `limit` rows, for table previews.
pub fn head(rows: &[Record], limit: usize) -> &[Record] {
    &rows[..limit.min(rows.len())]
}

/// Text cells of `rows`, skipping blanks. Used to feed a matcher corpus.
pub fn text_column(rows: &[Record], schema: &SchemaMap) -> Vec<String> {
    let Some(column) = schema.column(LogicalField::Text) else {
        return Vec::new();
    };
    rows.iter()
        .filter_map(|row| row.get(column))
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(str::to_owned)
        .collect()
}

fn value_counts(rows: &[Record], column: Option<&str>) -> Option<BTreeMap<String, usize>> {
    let column = column?;
    let mut counts = BTreeMap::new();
    for row in rows {
        *counts.entry(cell_label(row, column).to_owned()).or_insert(0) += 1;
    }
    Some(counts)
}

fn cell_label<'a>(row: &'a Record, column: &str) -> &'a str {
    match row.get(column).map(|v| v.trim()) {
        Some(v) if !v.is_empty() => v,
        _ => UNKNOWN,
    }
}
