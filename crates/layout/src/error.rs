use rapport_traits::SinkError;
use thiserror::Error;

/// Errors raised while laying out one table.
///
/// Only the `Sink` variant is fatal to the surrounding render; the other
/// two mean this table is skipped and the section continues.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("unsupported table type {0}")]
    UnsupportedType(u8),

    #[error("malformed payload for {kind} table: {detail}")]
    Malformed { kind: &'static str, detail: String },

    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl LayoutError {
    /// True when the error means the document handle itself failed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, LayoutError::Sink(_))
    }
}
