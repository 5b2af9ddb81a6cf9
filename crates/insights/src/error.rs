use thiserror::Error;

/// Errors raised while inferring a table schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InsightsError {
    #[error("table has no header columns")]
    EmptyHeaders,
}
