//! Typed views of the per-kind table payloads.
//!
//! `TableDatum.datas` is untyped until it reaches the layout selected by
//! its discriminant; each layout deserializes its own payload here, so a
//! shape mismatch is caught before the table is created.

use crate::error::LayoutError;
use crate::kind::TableKind;
use rapport_content::CellValue;
use serde::Deserialize;
use serde_json::Value;

/// One raw row of a grouped-subtotal group.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GroupEntry {
    pub no: CellValue,
    pub name: CellValue,
    pub count: CellValue,
}

/// One group of a grouped-subtotal payload: its rows plus the subtotal.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GroupTotals {
    pub number: CellValue,
    #[serde(rename = "groupData")]
    pub group_data: Vec<GroupEntry>,
}

/// One item of a narrative payload.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NarrativeItem {
    pub title: CellValue,
    #[serde(rename = "Children")]
    pub children: NarrativeChildren,
    #[serde(rename = "Content")]
    pub content: CellValue,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NarrativeChildren {
    #[serde(rename = "groupNumber")]
    pub group_number: CellValue,
    pub number: CellValue,
    #[serde(rename = "groupName")]
    pub group_name: CellValue,
}

/// One row of a social-profile payload.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProfileEntry {
    #[serde(rename = "Author")]
    pub author: CellValue,
    #[serde(rename = "Posts")]
    pub posts: CellValue,
    #[serde(rename = "Fans")]
    pub fans: CellValue,
    #[serde(rename = "Follows")]
    pub follows: CellValue,
    #[serde(rename = "Description")]
    pub description: CellValue,
}

/// One row of a category-count payload (kinds 4 and 5).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CategoryEntry {
    #[serde(rename = "groupName")]
    pub group_name: CellValue,
    pub count: CellValue,
}

/// Deserialize a list-shaped payload.
pub(crate) fn parse_list<T: serde::de::DeserializeOwned>(
    kind: TableKind,
    datas: &Value,
) -> Result<Vec<T>, LayoutError> {
    serde_json::from_value(datas.clone()).map_err(|e| LayoutError::Malformed {
        kind: kind.name(),
        detail: e.to_string(),
    })
}

/// Deserialize the grouped-subtotal payload: a JSON object mapping group
/// label to group, iterated in insertion order.
pub(crate) fn parse_grouped(datas: &Value) -> Result<Vec<(String, GroupTotals)>, LayoutError> {
    let kind = TableKind::GroupedSubtotal;
    let object = datas.as_object().ok_or_else(|| LayoutError::Malformed {
        kind: kind.name(),
        detail: "expected a JSON object mapping group label to group data".to_string(),
    })?;
    let mut groups = Vec::with_capacity(object.len());
    for (label, raw) in object {
        let group: GroupTotals =
            serde_json::from_value(raw.clone()).map_err(|e| LayoutError::Malformed {
                kind: kind.name(),
                detail: format!("group '{}': {}", label, e),
            })?;
        groups.push((label.clone(), group));
    }
    Ok(groups)
}
