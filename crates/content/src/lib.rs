//! Content item model for report assembly.
//!
//! This crate defines the closed set of content variants a report section
//! can hold (`Text`, `Image`, `TableDatum`), the `CellValue` scalar used by
//! table payloads, and `Collection<T>`: an ordered, single-variant container
//! validated at construction from raw JSON records.

pub mod collection;
pub mod error;
pub mod item;
pub mod value;

pub use collection::{Collection, ContentVariant};
pub use error::ContentError;
pub use item::{ContentItem, Image, TableDatum, Text};
pub use value::CellValue;
