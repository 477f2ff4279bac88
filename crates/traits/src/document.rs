//! The document-building collaborator.
//!
//! The engine only ever issues these mutation calls, in render order; it
//! never serializes, styles, or paginates the document. Back ends hand out
//! opaque ids for paragraphs and tables and are addressed through them.

use std::fmt;
use thiserror::Error;

/// An identifier for a paragraph created by a [`DocumentSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParagraphId(usize);

impl ParagraphId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ParagraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "paragraph#{}", self.0)
    }
}

/// An identifier for a table created by a [`DocumentSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table#{}", self.0)
    }
}

/// Error type for document mutation operations.
///
/// A sink error means the document handle itself failed and is always
/// fatal to rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("unknown paragraph id {0}")]
    UnknownParagraph(usize),

    #[error("unknown table id {0}")]
    UnknownTable(usize),

    #[error("cell ({row}, {col}) out of bounds for a {rows}x{cols} table")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid merge region from {from:?} to {to:?}")]
    InvalidMerge {
        from: (usize, usize),
        to: (usize, usize),
    },

    #[error("document backend error: {0}")]
    Backend(String),
}

/// A trait for document back ends, abstracting the paragraph and table
/// primitives the renderer drives.
pub trait DocumentSink {
    /// Open a new paragraph at the end of the document.
    fn add_paragraph(&mut self) -> Result<ParagraphId, SinkError>;

    /// Append a text run to a paragraph.
    fn add_run(&mut self, paragraph: ParagraphId, text: &str) -> Result<(), SinkError>;

    /// Append a picture, from raw bytes, to a paragraph.
    fn add_picture(&mut self, paragraph: ParagraphId, data: &[u8]) -> Result<(), SinkError>;

    /// Create a table with an initial row/column count.
    fn add_table(&mut self, rows: usize, cols: usize) -> Result<TableId, SinkError>;

    /// Append one row to a table, returning the new row's index.
    fn append_row(&mut self, table: TableId) -> Result<usize, SinkError>;

    /// Write text into a cell addressed by (row, col).
    fn set_cell_text(
        &mut self,
        table: TableId,
        row: usize,
        col: usize,
        text: &str,
    ) -> Result<(), SinkError>;

    /// Merge the rectangular region between two cells (inclusive).
    fn merge_cells(
        &mut self,
        table: TableId,
        from: (usize, usize),
        to: (usize, usize),
    ) -> Result<(), SinkError>;
}
