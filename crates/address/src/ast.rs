//! The typed form of an address token.

use crate::error::AddressError;

/// A parsed address token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    /// Every item in the collection.
    All,
    /// The single item at a zero-based index.
    Index(usize),
    /// A half-open `[start, end)` range with slice-default sides.
    Range {
        start: Option<usize>,
        end: Option<usize>,
        /// True when the token used the `:` separator, meaning the
        /// selected items render inside one paragraph.
        inline: bool,
    },
}

/// The outcome of applying an address to a collection: the selected items
/// in collection order plus the same-line flag.
pub type Selection<'a, T> = (Vec<&'a T>, bool);

impl Address {
    /// Apply this address to a slice of items.
    ///
    /// A single out-of-range index is an error; range bounds clamp the way
    /// slicing does, and an inverted range selects nothing.
    pub fn select<'a, T>(&self, items: &'a [T]) -> Result<Selection<'a, T>, AddressError> {
        match *self {
            Address::All => Ok((items.iter().collect(), false)),
            Address::Index(index) => {
                let item = items.get(index).ok_or(AddressError::OutOfBounds {
                    index,
                    len: items.len(),
                })?;
                Ok((vec![item], false))
            }
            Address::Range { start, end, inline } => {
                let len = items.len();
                let start = start.unwrap_or(0).min(len);
                let end = end.unwrap_or(len).min(len);
                if start >= end {
                    return Ok((Vec::new(), inline));
                }
                Ok((items[start..end].iter().collect(), inline))
            }
        }
    }

    /// True when the selected items render inside one paragraph.
    pub fn is_inline(&self) -> bool {
        matches!(self, Address::Range { inline: true, .. })
    }
}
