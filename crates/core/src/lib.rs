//! Section assembly and render dispatch.
//!
//! A [`Section`] owns four single-variant content collections (title,
//! images, texts, tables) and a declarative `sequence` of address strings
//! like `"title"`, `"images.1-3"`, or `"tables.0:2"`. Resolving the
//! sequence yields a [`RenderPlan`] — an ordered list of item groups with
//! same-line flags — which the dispatcher then walks, mutating a
//! [`rapport_traits::DocumentSink`] in plan order.

pub mod error;
pub mod plan;
pub mod render;
pub mod section;

pub use error::{RenderError, SectionError};
pub use plan::{PlanEntry, RenderPlan};
pub use render::render_plan;
pub use section::Section;
