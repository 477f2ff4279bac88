#![allow(dead_code)]

pub mod fixtures;

use rapport::{
    Block, InMemoryDocument, InMemoryResourceProvider, RenderError, ResourceProvider, Section,
    TableGrid,
};
use serde_json::Value;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A provider pre-populated with the given identity → bytes pairs.
pub fn provider_with(resources: &[(&str, &[u8])]) -> Arc<InMemoryResourceProvider> {
    let provider = InMemoryResourceProvider::new();
    for (identity, data) in resources {
        provider
            .add(identity.to_string(), data.to_vec())
            .expect("populate provider");
    }
    Arc::new(provider)
}

pub fn empty_provider() -> Arc<dyn ResourceProvider> {
    Arc::new(InMemoryResourceProvider::new())
}

/// Build a section from a raw JSON record and render it into a fresh
/// in-memory document.
pub fn render_section(
    raw: &Value,
    provider: Arc<dyn ResourceProvider>,
) -> Result<InMemoryDocument, RenderError> {
    let section = Section::from_value(raw, provider).map_err(RenderError::Section)?;
    let mut doc = InMemoryDocument::new();
    section.render(&mut doc)?;
    Ok(doc)
}

/// The document's tables in order.
pub fn tables(doc: &InMemoryDocument) -> Vec<&TableGrid> {
    doc.tables().collect()
}

/// The text of every paragraph, in document order.
pub fn paragraph_texts(doc: &InMemoryDocument) -> Vec<String> {
    doc.paragraphs().map(|p| p.text()).collect()
}

/// The document's block kinds in order, for shape assertions.
pub fn block_kinds(doc: &InMemoryDocument) -> Vec<&'static str> {
    doc.blocks()
        .iter()
        .map(|block| match block {
            Block::Paragraph(_) => "paragraph",
            Block::Table(_) => "table",
        })
        .collect()
}
