//! Sections: four content collections plus a declarative sequence.

use crate::error::{RenderError, SectionError};
use crate::plan::{PlanEntry, RenderPlan};
use crate::render::render_plan;
use rapport_address::{Address, AddressError, parse_address};
use rapport_content::{Collection, ContentItem, ContentVariant, Image, TableDatum, Text};
use rapport_traits::{DocumentSink, ResourceProvider};
use serde_json::Value;
use std::sync::Arc;

/// One region of a report.
///
/// A section is built once with its full raw content and a fixed sequence;
/// the render plan is derived on demand and consumed by [`Section::render`].
#[derive(Debug, Clone)]
pub struct Section {
    title: Collection<Text>,
    images: Collection<Image>,
    texts: Collection<Text>,
    tables: Collection<TableDatum>,
    sequence: Vec<String>,
    provider: Arc<dyn ResourceProvider>,
}

impl Section {
    /// Build a section from typed content.
    ///
    /// `sequence` is always explicit; pass an empty vector for a section
    /// that renders nothing.
    pub fn new(
        title: impl Into<String>,
        images: Vec<Image>,
        texts: Vec<Text>,
        tables: Vec<TableDatum>,
        sequence: Vec<String>,
        provider: Arc<dyn ResourceProvider>,
    ) -> Self {
        Self {
            title: Collection::new(vec![Text::new(title)]),
            images: Collection::new(images),
            texts: Collection::new(texts),
            tables: Collection::new(tables),
            sequence,
            provider,
        }
    }

    /// Build a section from a raw JSON record.
    ///
    /// Expects an object with a string `title`, arrays of raw records
    /// under `images` / `texts` / `tables` (each may be absent or null),
    /// and an optional `sequence` of address strings. Any record that does
    /// not coerce to its collection's variant fails the whole section.
    pub fn from_value(
        raw: &Value,
        provider: Arc<dyn ResourceProvider>,
    ) -> Result<Self, SectionError> {
        let record = raw
            .as_object()
            .ok_or_else(|| SectionError::Invalid("expected a JSON object".to_string()))?;

        let title = record
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let null = Value::Null;
        let images = Collection::from_value(record.get("images").unwrap_or(&null))?;
        let texts = Collection::from_value(record.get("texts").unwrap_or(&null))?;
        let tables = Collection::from_value(record.get("tables").unwrap_or(&null))?;
        let sequence = match record.get("sequence") {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| SectionError::Invalid(format!("sequence: {}", e)))?,
        };

        Ok(Self {
            title: Collection::new(vec![Text::new(title)]),
            images,
            texts,
            tables,
            sequence,
            provider,
        })
    }

    /// The declarative ordering this section renders in.
    pub fn sequence(&self) -> &[String] {
        &self.sequence
    }

    /// Resolve the sequence into a render plan.
    ///
    /// Each entry splits on its first `.` into a collection name and an
    /// address token (no dot means the whole collection). Bad names and
    /// bad tokens abort resolution: a malformed template is a programming
    /// error upstream, not something to render around.
    pub fn resolve(&self) -> Result<RenderPlan, SectionError> {
        let mut entries = Vec::with_capacity(self.sequence.len());
        for entry in &self.sequence {
            let (name, token) = match entry.split_once('.') {
                Some((name, token)) => (name, token),
                None => (entry.as_str(), "all"),
            };
            let address = parse_address(token).map_err(|source| SectionError::Address {
                entry: entry.clone(),
                source,
            })?;
            let (items, inline) = match name {
                "title" => select_items(&address, self.title.items()),
                "images" => select_items(&address, self.images.items()),
                "texts" => select_items(&address, self.texts.items()),
                "tables" => select_items(&address, self.tables.items()),
                other => return Err(SectionError::UnknownCollection(other.to_string())),
            }
            .map_err(|source| SectionError::Address {
                entry: entry.clone(),
                source,
            })?;
            entries.push(PlanEntry { items, inline });
        }
        Ok(RenderPlan::new(entries))
    }

    /// Resolve and render this section against a document sink.
    pub fn render(&self, sink: &mut dyn DocumentSink) -> Result<(), RenderError> {
        let plan = self.resolve()?;
        render_plan(plan, sink, self.provider.as_ref())
    }
}

fn select_items<T: ContentVariant>(
    address: &Address,
    items: &[T],
) -> Result<(Vec<ContentItem>, bool), AddressError> {
    let (selected, inline) = address.select(items)?;
    let items = selected
        .into_iter()
        .cloned()
        .map(T::into_item)
        .collect();
    Ok((items, inline))
}
