//! Conversation table insights.
//!
//! Works on rows that have already been parsed into column → value maps:
//!
//! - [`SchemaMap::infer`] resolves logical fields (text, sentiment, issue
//!   type, source) to header names once; absent fields disable the features
//!   that need them.
//! - [`summarize`] group-counts the categorical fields, labelling blank cells
//!   `"Unknown"`.
//! - [`filter_rows`], [`head`] and [`text_column`] slice rows for
//!   dashboards and for feeding a matcher corpus.
//!
//! ```
//! use insights::{summarize, LogicalField, Record, SchemaMap};
//!
//! let schema = SchemaMap::infer(["conversation", "sentiment"]).unwrap();
//! let rows: Vec<Record> = vec![
//!     [("conversation".to_string(), "late parcel".to_string()),
//!      ("sentiment".to_string(), "NEGATIVE".to_string())].into_iter().collect(),
//! ];
//! let summary = summarize(&rows, &schema);
//! assert_eq!(summary.top(LogicalField::Sentiment), Some("NEGATIVE"));
//! assert!(summary.issue_type_counts.is_none());
//! ```

mod error;
mod schema;
mod summary;

pub use crate::error::InsightsError;
pub use crate::schema::{LogicalField, SchemaMap};
pub use crate::summary::{
    filter_rows, head, summarize, text_column, Record, Summary, UNKNOWN,
};
