use thiserror::Error;

/// Errors raised while coercing raw records into typed content items.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("invalid {kind} record at index {index}: {source}")]
    InvalidRecord {
        kind: &'static str,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a JSON array of {kind} records, found {found}")]
    NotAnArray {
        kind: &'static str,
        found: &'static str,
    },
}
