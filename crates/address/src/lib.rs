//! The address-token grammar for content collections.
//!
//! An address token selects a subset of an ordered collection and says
//! whether the selection renders on one line:
//!
//! - `all` — every item.
//! - `3` — the single item at index 3 (zero-based; out of range is an
//!   error, never a clamp).
//! - `1-4` — the half-open range `[1, 4)`; either side may be empty
//!   (`-4`, `1-`, `-`), missing sides defaulting to the collection's
//!   start/end, out-of-range bounds clamping like slice semantics.
//! - `1:4` — the same range, but flagged for same-line rendering.
//!
//! A token mixing `-` and `:` is rejected as ambiguous.

pub mod ast;
pub mod error;
mod parser;

pub use ast::{Address, Selection};
pub use error::AddressError;
pub use parser::parse_address;
