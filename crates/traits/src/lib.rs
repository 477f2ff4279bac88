//! Collaborator traits for the report assembly engine.
//!
//! The engine never touches a file, a network, or a document file format
//! directly. Everything it needs from the outside world arrives through
//! two traits:
//!
//! - [`DocumentSink`]: the document-building collaborator (paragraphs,
//!   runs, pictures, tables, cell merges).
//! - [`ResourceProvider`]: the file-retrieval collaborator resolving an
//!   opaque image identity to bytes.
//!
//! In-memory implementations of both ship here so callers and tests can
//! run the full pipeline without a real back end.

pub mod document;
pub mod memory;
pub mod resource;

pub use document::{DocumentSink, ParagraphId, SinkError, TableId};
pub use memory::{Block, InMemoryDocument, Inline, MergeRegion, Paragraph, TableGrid};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
