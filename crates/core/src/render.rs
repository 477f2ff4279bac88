//! The render dispatcher: walks a plan in order and mutates a sink.

use crate::error::RenderError;
use crate::plan::RenderPlan;
use rapport_content::{ContentItem, Image, TableDatum};
use rapport_layout::LayoutError;
use rapport_traits::{DocumentSink, ParagraphId, ResourceProvider};

/// Consume a render plan against a document sink.
///
/// Same-line groups share one paragraph; otherwise every non-table item
/// opens its own. Table items never enter a paragraph — they dispatch to
/// the layout engine directly on the document, and a table the engine
/// rejects (unknown type, bad payload) is logged and skipped while the
/// rest of the plan still renders. Sink failures are fatal.
pub fn render_plan(
    plan: RenderPlan,
    sink: &mut dyn DocumentSink,
    provider: &dyn ResourceProvider,
) -> Result<(), RenderError> {
    for entry in plan.into_entries() {
        if entry.inline {
            let paragraph = sink.add_paragraph()?;
            for item in &entry.items {
                render_item(sink, paragraph, item, provider)?;
            }
        } else {
            for item in &entry.items {
                match item {
                    ContentItem::Table(datum) => render_table_item(sink, datum)?,
                    other => {
                        let paragraph = sink.add_paragraph()?;
                        render_item(sink, paragraph, other, provider)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn render_item(
    sink: &mut dyn DocumentSink,
    paragraph: ParagraphId,
    item: &ContentItem,
    provider: &dyn ResourceProvider,
) -> Result<(), RenderError> {
    match item {
        ContentItem::Text(text) => {
            // An empty run is a no-op, not an error.
            if !text.text.is_empty() {
                sink.add_run(paragraph, &text.text)?;
            }
            Ok(())
        }
        ContentItem::Image(image) => render_image_item(sink, paragraph, image, provider),
        // Tables are never nested inside a paragraph, inline group or not.
        ContentItem::Table(datum) => render_table_item(sink, datum),
    }
}

fn render_image_item(
    sink: &mut dyn DocumentSink,
    paragraph: ParagraphId,
    image: &Image,
    provider: &dyn ResourceProvider,
) -> Result<(), RenderError> {
    if !image.title.is_empty() {
        sink.add_run(paragraph, &image.title)?;
    }
    if !image.identity.is_empty() {
        // A failed lookup degrades to a caption-only render.
        match provider.load(&image.identity) {
            Ok(data) => sink.add_picture(paragraph, &data)?,
            Err(e) => log::warn!(
                "image '{}' could not be retrieved via {}: {}",
                image.identity,
                provider.name(),
                e
            ),
        }
    }
    if !image.text.is_empty() {
        sink.add_run(paragraph, &image.text)?;
    }
    Ok(())
}

fn render_table_item(sink: &mut dyn DocumentSink, datum: &TableDatum) -> Result<(), RenderError> {
    if let Err(err) = rapport_layout::render_table(sink, datum) {
        match err {
            LayoutError::Sink(e) => return Err(RenderError::Sink(e)),
            recoverable => log::warn!("skipping table '{}': {}", datum.title, recoverable),
        }
    }
    Ok(())
}
