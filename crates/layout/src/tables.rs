//! The five table layout algorithms.

use crate::error::LayoutError;
use crate::kind::TableKind;
use crate::payload::{self, CategoryEntry, NarrativeItem, ProfileEntry};
use rapport_content::TableDatum;
use rapport_traits::{DocumentSink, TableId};

const GROUPED_HEADER: [&str; 4] = ["", "序号", "名称", "数量"];
const PROFILE_HEADER: [&str; 6] = ["序号", "名称", "微博数量", "粉丝数量", "关注数量", "简介"];
const CATEGORY_HEADER: [&str; 3] = ["序号", "名称", "数量"];

const SUBTOTAL_LABEL: &str = "小计";
const SEQUENCE_LABEL: &str = "序号";
const TITLE_LABEL: &str = "标题";
const MEDIA_COUNT_LABEL: &str = "参与媒体数量";
const REPORT_COUNT_LABEL: &str = "报道数量";
const MAIN_MEDIA_LABEL: &str = "主要参与媒体";
const SUMMARY_LABEL: &str = "内容概要";

/// Lay out one table onto the sink.
///
/// Selects the layout from the datum's discriminant, validates the payload,
/// then creates and fills the table. Nothing is written to the document
/// when the payload is rejected.
pub fn render_table(sink: &mut dyn DocumentSink, datum: &TableDatum) -> Result<TableId, LayoutError> {
    let kind = TableKind::from_code(datum.table_type)
        .ok_or(LayoutError::UnsupportedType(datum.table_type))?;
    log::debug!("laying out {} table '{}'", kind, datum.title);
    match kind {
        TableKind::GroupedSubtotal => grouped_subtotal(sink, datum),
        TableKind::Narrative => narrative(sink, datum),
        TableKind::SocialProfiles => social_profiles(sink, datum),
        TableKind::CategoryCounts => category_counts(sink, datum),
        TableKind::CategorySummary => category_summary(sink, datum),
    }
}

/// Write header labels into an existing row, one per cell, left to right.
/// Never appends a row.
fn write_header(
    sink: &mut dyn DocumentSink,
    table: TableId,
    row: usize,
    labels: &[&str],
) -> Result<(), LayoutError> {
    for (col, label) in labels.iter().enumerate() {
        sink.set_cell_text(table, row, col, label)?;
    }
    Ok(())
}

/// Kind 1: rows grouped under a vertically merged label, one subtotal row
/// per group.
fn grouped_subtotal(
    sink: &mut dyn DocumentSink,
    datum: &TableDatum,
) -> Result<TableId, LayoutError> {
    let groups = payload::parse_grouped(&datum.datas)?;
    let (rows, cols) = TableKind::GroupedSubtotal.initial_shape();
    let table = sink.add_table(rows, cols)?;
    write_header(sink, table, 0, &GROUPED_HEADER)?;

    for (label, group) in &groups {
        let mut first_row = None;
        for entry in &group.group_data {
            let row = sink.append_row(table)?;
            first_row.get_or_insert(row);
            sink.set_cell_text(table, row, 1, &entry.no.to_string())?;
            sink.set_cell_text(table, row, 2, &entry.name.to_string())?;
            sink.set_cell_text(table, row, 3, &entry.count.to_string())?;
        }

        let subtotal_row = sink.append_row(table)?;
        sink.set_cell_text(table, subtotal_row, 1, SUBTOTAL_LABEL)?;
        sink.merge_cells(table, (subtotal_row, 1), (subtotal_row, 2))?;
        sink.set_cell_text(table, subtotal_row, 3, &group.number.to_string())?;

        // The group label occupies column 0 of every row in the group,
        // subtotal included.
        let first_row = first_row.unwrap_or(subtotal_row);
        sink.set_cell_text(table, first_row, 0, label)?;
        if subtotal_row > first_row {
            sink.merge_cells(table, (first_row, 0), (subtotal_row, 0))?;
        }
    }
    Ok(table)
}

/// Kind 2: a fixed four-row label/value block per item, with a sequence
/// counter running across the whole table.
fn narrative(sink: &mut dyn DocumentSink, datum: &TableDatum) -> Result<TableId, LayoutError> {
    let items: Vec<NarrativeItem> = payload::parse_list(TableKind::Narrative, &datum.datas)?;
    let (rows, cols) = TableKind::Narrative.initial_shape();
    let table = sink.add_table(rows, cols)?;

    for (index, item) in items.iter().enumerate() {
        // The first item's first row reuses the table's pre-existing row.
        let row = if index == 0 { 0 } else { sink.append_row(table)? };
        sink.set_cell_text(table, row, 0, SEQUENCE_LABEL)?;
        sink.set_cell_text(table, row, 1, &(index + 1).to_string())?;
        sink.set_cell_text(table, row, 2, TITLE_LABEL)?;
        sink.set_cell_text(table, row, 3, &item.title.to_string())?;

        let row = sink.append_row(table)?;
        sink.set_cell_text(table, row, 0, MEDIA_COUNT_LABEL)?;
        sink.set_cell_text(table, row, 1, &item.children.group_number.to_string())?;
        sink.set_cell_text(table, row, 2, REPORT_COUNT_LABEL)?;
        sink.set_cell_text(table, row, 3, &item.children.number.to_string())?;

        let row = sink.append_row(table)?;
        sink.set_cell_text(table, row, 0, MAIN_MEDIA_LABEL)?;
        sink.set_cell_text(table, row, 1, &item.children.group_name.to_string())?;
        sink.merge_cells(table, (row, 1), (row, 3))?;

        let row = sink.append_row(table)?;
        sink.set_cell_text(table, row, 0, SUMMARY_LABEL)?;
        sink.set_cell_text(table, row, 1, &item.content.to_string())?;
        sink.merge_cells(table, (row, 1), (row, 3))?;
    }
    Ok(table)
}

/// Kind 3: one row per social-media profile.
fn social_profiles(
    sink: &mut dyn DocumentSink,
    datum: &TableDatum,
) -> Result<TableId, LayoutError> {
    let items: Vec<ProfileEntry> = payload::parse_list(TableKind::SocialProfiles, &datum.datas)?;
    let (rows, cols) = TableKind::SocialProfiles.initial_shape();
    let table = sink.add_table(rows, cols)?;
    write_header(sink, table, 0, &PROFILE_HEADER)?;

    for (index, item) in items.iter().enumerate() {
        let row = sink.append_row(table)?;
        sink.set_cell_text(table, row, 0, &(index + 1).to_string())?;
        sink.set_cell_text(table, row, 1, &item.author.to_string())?;
        sink.set_cell_text(table, row, 2, &item.posts.to_string())?;
        sink.set_cell_text(table, row, 3, &item.fans.to_string())?;
        sink.set_cell_text(table, row, 4, &item.follows.to_string())?;
        sink.set_cell_text(table, row, 5, &item.description.to_string())?;
    }
    Ok(table)
}

/// Kind 4: one row per category with a running sequence number.
fn category_counts(
    sink: &mut dyn DocumentSink,
    datum: &TableDatum,
) -> Result<TableId, LayoutError> {
    let items: Vec<CategoryEntry> = payload::parse_list(TableKind::CategoryCounts, &datum.datas)?;
    let (rows, cols) = TableKind::CategoryCounts.initial_shape();
    let table = sink.add_table(rows, cols)?;
    write_header(sink, table, 0, &CATEGORY_HEADER)?;
    append_category_rows(sink, table, &items)?;
    Ok(table)
}

/// Kind 5: same body as kind 4, but the table opens with a full-width
/// caption row carrying the datum's title, and the header sits in row 1.
fn category_summary(
    sink: &mut dyn DocumentSink,
    datum: &TableDatum,
) -> Result<TableId, LayoutError> {
    let items: Vec<CategoryEntry> = payload::parse_list(TableKind::CategorySummary, &datum.datas)?;
    let (rows, cols) = TableKind::CategorySummary.initial_shape();
    let table = sink.add_table(rows, cols)?;
    sink.set_cell_text(table, 0, 0, &datum.title)?;
    sink.merge_cells(table, (0, 0), (0, cols - 1))?;
    write_header(sink, table, 1, &CATEGORY_HEADER)?;
    append_category_rows(sink, table, &items)?;
    Ok(table)
}

fn append_category_rows(
    sink: &mut dyn DocumentSink,
    table: TableId,
    items: &[CategoryEntry],
) -> Result<(), LayoutError> {
    for (index, item) in items.iter().enumerate() {
        let row = sink.append_row(table)?;
        sink.set_cell_text(table, row, 0, &(index + 1).to_string())?;
        sink.set_cell_text(table, row, 1, &item.group_name.to_string())?;
        sink.set_cell_text(table, row, 2, &item.count.to_string())?;
    }
    Ok(())
}
