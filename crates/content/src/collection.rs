//! Ordered, single-variant content containers.

use crate::error::ContentError;
use crate::item::{ContentItem, Image, TableDatum, Text};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Marker trait tying a collection to exactly one content variant.
pub trait ContentVariant: Clone + DeserializeOwned {
    /// The variant name used in diagnostics ("text", "image", "table").
    const KIND: &'static str;

    fn into_item(self) -> ContentItem;
}

impl ContentVariant for Text {
    const KIND: &'static str = "text";

    fn into_item(self) -> ContentItem {
        ContentItem::Text(self)
    }
}

impl ContentVariant for Image {
    const KIND: &'static str = "image";

    fn into_item(self) -> ContentItem {
        ContentItem::Image(self)
    }
}

impl ContentVariant for TableDatum {
    const KIND: &'static str = "table";

    fn into_item(self) -> ContentItem {
        ContentItem::Table(self)
    }
}

/// An ordered set of items that all share one content variant.
///
/// The variant is fixed by the type parameter, so a collection can never
/// mix texts with images; construction from raw records fails on the first
/// record that does not coerce.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T: ContentVariant> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Coerce a slice of raw JSON records into a typed collection.
    pub fn from_records(records: &[Value]) -> Result<Self, ContentError> {
        let mut items = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let item =
                T::deserialize(record.clone()).map_err(|source| ContentError::InvalidRecord {
                    kind: T::KIND,
                    index,
                    source,
                })?;
            items.push(item);
        }
        Ok(Self { items })
    }

    /// Coerce a JSON value expected to be an array of records.
    ///
    /// `null` reads as an empty collection, so sections may simply omit a
    /// content field.
    pub fn from_value(value: &Value) -> Result<Self, ContentError> {
        match value {
            Value::Null => Ok(Self::new(Vec::new())),
            Value::Array(records) => Self::from_records(records),
            other => Err(ContentError::NotAnArray {
                kind: T::KIND,
                found: json_type_name(other),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
