//! `rapport` assembles structured report documents — titles, images, free
//! text, and five tabular layouts — from pre-fetched content records,
//! ordered by a declarative per-section sequence and streamed into a
//! pluggable document-building back end.
//!
//! The pieces live in focused crates and are re-exported here:
//!
//! - content model and collections: [`rapport_content`]
//! - the address-token grammar (`"all"`, `"3"`, `"1-4"`, `"1:4"`):
//!   [`rapport_address`]
//! - collaborator traits and in-memory back ends: [`rapport_traits`]
//! - the table layout engine: [`rapport_layout`]
//! - sections, render plans, and the dispatcher: [`rapport_core`]
//!
//! # Example
//!
//! ```
//! use rapport::{InMemoryDocument, InMemoryResourceProvider, Section, Text};
//! use std::sync::Arc;
//!
//! let provider = Arc::new(InMemoryResourceProvider::new());
//! let section = Section::new(
//!     "Weekly report",
//!     vec![],
//!     vec![Text::new("Opening paragraph.")],
//!     vec![],
//!     vec!["title".to_string(), "texts.all".to_string()],
//!     provider,
//! );
//!
//! let mut doc = InMemoryDocument::new();
//! section.render(&mut doc).unwrap();
//! assert_eq!(doc.paragraphs().count(), 2);
//! ```

pub use rapport_address::{Address, AddressError, parse_address};
pub use rapport_content::{
    CellValue, Collection, ContentError, ContentItem, Image, TableDatum, Text,
};
pub use rapport_core::{
    PlanEntry, RenderError, RenderPlan, Section, SectionError, render_plan,
};
pub use rapport_layout::{LayoutError, TableKind, render_table};
pub use rapport_traits::{
    Block, DocumentSink, InMemoryDocument, InMemoryResourceProvider, Inline, MergeRegion,
    Paragraph, ParagraphId, ResourceError, ResourceProvider, SharedResourceData, SinkError,
    TableGrid, TableId,
};

/// A whole report: sections rendered in order against one sink.
///
/// One renderer per document; a sink must not be shared between
/// concurrent renders.
#[derive(Debug, Clone, Default)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Render every section, in order, against the sink.
    pub fn render(&self, sink: &mut dyn DocumentSink) -> Result<(), RenderError> {
        for (index, section) in self.sections.iter().enumerate() {
            log::debug!("rendering section {} of {}", index + 1, self.sections.len());
            section.render(sink)?;
        }
        Ok(())
    }
}
