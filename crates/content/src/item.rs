//! The closed set of content variants a report section can hold.

use serde::{Deserialize, Serialize};

/// A run of free text.
///
/// Raw text records arrive either as bare JSON strings or as
/// `{"text": …}` objects; both coerce to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "TextRecord")]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextRecord {
    Plain(String),
    Tagged { text: String },
}

impl From<TextRecord> for Text {
    fn from(record: TextRecord) -> Self {
        match record {
            TextRecord::Plain(text) | TextRecord::Tagged { text } => Text { text },
        }
    }
}

/// A picture with optional captions before and after it.
///
/// `identity` is an opaque key resolved through a resource provider at
/// render time; it is never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Image {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub identity: String,
    #[serde(default)]
    pub text: String,
}

/// The raw material for one table.
///
/// `datas` stays untyped at this layer by design: its shape depends on
/// `table_type`, and the layout engine owns validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDatum {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub datas: serde_json::Value,
    pub table_type: u8,
}

/// A single piece of section content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    Text(Text),
    Image(Image),
    Table(TableDatum),
}

impl ContentItem {
    /// A string identifier for the variant, used in logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentItem::Text(_) => "text",
            ContentItem::Image(_) => "image",
            ContentItem::Table(_) => "table",
        }
    }
}

impl From<Text> for ContentItem {
    fn from(item: Text) -> Self {
        ContentItem::Text(item)
    }
}

impl From<Image> for ContentItem {
    fn from(item: Image) -> Self {
        ContentItem::Image(item)
    }
}

impl From<TableDatum> for ContentItem {
    fn from(item: TableDatum) -> Self {
        ContentItem::Table(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_deserializes_from_bare_string() {
        let text: Text = serde_json::from_value(json!("hello")).unwrap();
        assert_eq!(text, Text::new("hello"));
    }

    #[test]
    fn text_deserializes_from_record() {
        let text: Text = serde_json::from_value(json!({"text": "hello"})).unwrap();
        assert_eq!(text, Text::new("hello"));
    }

    #[test]
    fn image_captions_default_to_empty() {
        let image: Image = serde_json::from_value(json!({"identity": "img-1"})).unwrap();
        assert_eq!(image.identity, "img-1");
        assert!(image.title.is_empty());
        assert!(image.text.is_empty());
    }

    #[test]
    fn table_datum_requires_a_type() {
        let err = serde_json::from_value::<TableDatum>(json!({"datas": []}));
        assert!(err.is_err());
    }

    #[test]
    fn item_kind_names_the_variant() {
        assert_eq!(ContentItem::from(Text::new("x")).kind(), "text");
        assert_eq!(ContentItem::from(Image::default()).kind(), "image");
    }
}
