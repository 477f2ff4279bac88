//! The table layout engine.
//!
//! A [`rapport_content::TableDatum`] carries a raw payload plus a
//! `table_type` discriminant. This crate maps the discriminant onto a
//! closed [`TableKind`] enum and runs one of five independent layout
//! algorithms, each of which validates its own payload shape before any
//! document mutation, then emits header rows, body rows, cell merges, and
//! subtotal rows against a [`rapport_traits::DocumentSink`].

pub mod error;
pub mod kind;
mod payload;
pub mod tables;

pub use error::LayoutError;
pub use kind::TableKind;
pub use tables::render_table;
