//! The resolved form of a section's sequence.

use rapport_content::ContentItem;

/// One resolved sequence entry: the selected items, in collection order,
/// plus the same-line flag.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    pub items: Vec<ContentItem>,
    /// True when the group renders inside a single paragraph.
    pub inline: bool,
}

/// An ordered render plan, derived from a sequence and consumed once by
/// the dispatcher. Duplicate addresses stay duplicated; order is the
/// sequence's order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderPlan {
    entries: Vec<PlanEntry>,
}

impl RenderPlan {
    pub fn new(entries: Vec<PlanEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<PlanEntry> {
        self.entries
    }
}
