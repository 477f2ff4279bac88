//! Error types for section resolution and rendering.

use rapport_address::AddressError;
use rapport_content::ContentError;
use rapport_traits::SinkError;
use thiserror::Error;

/// Errors raised while constructing a section or resolving its sequence.
///
/// These all indicate a malformed template or content set and abort the
/// section; runtime data-availability problems (missing image, unknown
/// table type) are handled inside rendering instead and degrade
/// gracefully.
#[derive(Error, Debug)]
pub enum SectionError {
    #[error("unknown collection '{0}' in sequence")]
    UnknownCollection(String),

    #[error("bad address in sequence entry '{entry}': {source}")]
    Address {
        entry: String,
        #[source]
        source: AddressError,
    },

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("invalid section record: {0}")]
    Invalid(String),
}

/// The umbrella error for a full render pass.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Section(#[from] SectionError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}
