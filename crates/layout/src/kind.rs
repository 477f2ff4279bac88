//! The closed set of table layouts.

use std::fmt;

/// Which of the five layout algorithms formats a table.
///
/// The mapping from the wire discriminant is closed: an unknown code is
/// rejected at dispatch, and every variant here must have a handler (the
/// dispatch match is exhaustive, so a missing one does not compile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Rows grouped under a vertically merged label with subtotal rows.
    GroupedSubtotal,
    /// Fixed four-row label/value blocks, one block per item.
    Narrative,
    /// One row per social-media profile.
    SocialProfiles,
    /// One row per category with a running sequence number.
    CategoryCounts,
    /// Same body as `CategoryCounts`, with a full-width caption row.
    CategorySummary,
}

impl TableKind {
    /// Map the wire discriminant to a kind.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(TableKind::GroupedSubtotal),
            2 => Some(TableKind::Narrative),
            3 => Some(TableKind::SocialProfiles),
            4 => Some(TableKind::CategoryCounts),
            5 => Some(TableKind::CategorySummary),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            TableKind::GroupedSubtotal => 1,
            TableKind::Narrative => 2,
            TableKind::SocialProfiles => 3,
            TableKind::CategoryCounts => 4,
            TableKind::CategorySummary => 5,
        }
    }

    /// A stable name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TableKind::GroupedSubtotal => "grouped-subtotal",
            TableKind::Narrative => "narrative",
            TableKind::SocialProfiles => "social-profiles",
            TableKind::CategoryCounts => "category-counts",
            TableKind::CategorySummary => "category-summary",
        }
    }

    /// The (rows, cols) shape the table is created with before any body
    /// row is appended.
    pub fn initial_shape(self) -> (usize, usize) {
        match self {
            TableKind::GroupedSubtotal => (1, 4),
            TableKind::Narrative => (1, 4),
            TableKind::SocialProfiles => (1, 6),
            TableKind::CategoryCounts => (1, 3),
            // Caption row above the header row.
            TableKind::CategorySummary => (2, 3),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for code in 1..=5u8 {
            let kind = TableKind::from_code(code).unwrap();
            assert_eq!(kind.code(), code);
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(TableKind::from_code(0), None);
        assert_eq!(TableKind::from_code(9), None);
    }
}
