//! An in-memory [`DocumentSink`] with an inspectable block model.
//!
//! Useful as a dry-run target and as the assertion surface for tests:
//! every mutation the renderer issues is recorded and can be read back
//! as paragraphs, tables, and merge regions.

use crate::document::{DocumentSink, ParagraphId, SinkError, TableId};

/// Inline content recorded inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Run(String),
    Picture(Vec<u8>),
}

/// A recorded paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub inlines: Vec<Inline>,
}

impl Paragraph {
    /// All text runs concatenated, pictures skipped.
    pub fn text(&self) -> String {
        self.inlines
            .iter()
            .filter_map(|inline| match inline {
                Inline::Run(text) => Some(text.as_str()),
                Inline::Picture(_) => None,
            })
            .collect()
    }

    /// The number of pictures in the paragraph.
    pub fn picture_count(&self) -> usize {
        self.inlines
            .iter()
            .filter(|inline| matches!(inline, Inline::Picture(_)))
            .count()
    }
}

/// An inclusive rectangular cell merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRegion {
    pub from: (usize, usize),
    pub to: (usize, usize),
}

/// A recorded table: a dense grid of cell texts plus its merge regions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableGrid {
    pub cols: usize,
    pub rows: Vec<Vec<String>>,
    pub merges: Vec<MergeRegion>,
}

impl TableGrid {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The text of a cell, or empty when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// True when a merge covering exactly this region was recorded.
    pub fn has_merge(&self, from: (usize, usize), to: (usize, usize)) -> bool {
        self.merges.contains(&MergeRegion { from, to })
    }
}

/// One top-level block of the recorded document, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(TableGrid),
}

/// A [`DocumentSink`] that records the document structure in memory.
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    blocks: Vec<Block>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// All blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// All paragraphs in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            Block::Table(_) => None,
        })
    }

    /// All tables in document order.
    pub fn tables(&self) -> impl Iterator<Item = &TableGrid> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(t) => Some(t),
            Block::Paragraph(_) => None,
        })
    }

    fn paragraph_mut(&mut self, id: ParagraphId) -> Result<&mut Paragraph, SinkError> {
        match self.blocks.get_mut(id.index()) {
            Some(Block::Paragraph(p)) => Ok(p),
            _ => Err(SinkError::UnknownParagraph(id.index())),
        }
    }

    fn table_mut(&mut self, id: TableId) -> Result<&mut TableGrid, SinkError> {
        match self.blocks.get_mut(id.index()) {
            Some(Block::Table(t)) => Ok(t),
            _ => Err(SinkError::UnknownTable(id.index())),
        }
    }
}

impl DocumentSink for InMemoryDocument {
    fn add_paragraph(&mut self) -> Result<ParagraphId, SinkError> {
        let id = ParagraphId::new(self.blocks.len());
        self.blocks.push(Block::Paragraph(Paragraph::default()));
        Ok(id)
    }

    fn add_run(&mut self, paragraph: ParagraphId, text: &str) -> Result<(), SinkError> {
        self.paragraph_mut(paragraph)?
            .inlines
            .push(Inline::Run(text.to_string()));
        Ok(())
    }

    fn add_picture(&mut self, paragraph: ParagraphId, data: &[u8]) -> Result<(), SinkError> {
        self.paragraph_mut(paragraph)?
            .inlines
            .push(Inline::Picture(data.to_vec()));
        Ok(())
    }

    fn add_table(&mut self, rows: usize, cols: usize) -> Result<TableId, SinkError> {
        let id = TableId::new(self.blocks.len());
        self.blocks.push(Block::Table(TableGrid {
            cols,
            rows: vec![vec![String::new(); cols]; rows],
            merges: Vec::new(),
        }));
        Ok(id)
    }

    fn append_row(&mut self, table: TableId) -> Result<usize, SinkError> {
        let grid = self.table_mut(table)?;
        grid.rows.push(vec![String::new(); grid.cols]);
        Ok(grid.rows.len() - 1)
    }

    fn set_cell_text(
        &mut self,
        table: TableId,
        row: usize,
        col: usize,
        text: &str,
    ) -> Result<(), SinkError> {
        let grid = self.table_mut(table)?;
        let (rows, cols) = (grid.rows.len(), grid.cols);
        let cell = grid
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(SinkError::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            })?;
        *cell = text.to_string();
        Ok(())
    }

    fn merge_cells(
        &mut self,
        table: TableId,
        from: (usize, usize),
        to: (usize, usize),
    ) -> Result<(), SinkError> {
        let grid = self.table_mut(table)?;
        let (rows, cols) = (grid.rows.len(), grid.cols);
        if from.0 > to.0 || from.1 > to.1 || from == to {
            return Err(SinkError::InvalidMerge { from, to });
        }
        if to.0 >= rows || to.1 >= cols {
            return Err(SinkError::CellOutOfBounds {
                row: to.0,
                col: to.1,
                rows,
                cols,
            });
        }
        grid.merges.push(MergeRegion { from, to });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_record_runs_and_pictures() {
        let mut doc = InMemoryDocument::new();
        let p = doc.add_paragraph().unwrap();
        doc.add_run(p, "before ").unwrap();
        doc.add_picture(p, &[1, 2, 3]).unwrap();
        doc.add_run(p, "after").unwrap();

        let paragraph = doc.paragraphs().next().unwrap();
        assert_eq!(paragraph.text(), "before after");
        assert_eq!(paragraph.picture_count(), 1);
    }

    #[test]
    fn tables_grow_by_appended_rows() {
        let mut doc = InMemoryDocument::new();
        let t = doc.add_table(1, 3).unwrap();
        assert_eq!(doc.append_row(t).unwrap(), 1);
        assert_eq!(doc.append_row(t).unwrap(), 2);
        doc.set_cell_text(t, 2, 1, "x").unwrap();

        let grid = doc.tables().next().unwrap();
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.cell(2, 1), "x");
    }

    #[test]
    fn cell_writes_are_bounds_checked() {
        let mut doc = InMemoryDocument::new();
        let t = doc.add_table(1, 2).unwrap();
        let err = doc.set_cell_text(t, 0, 2, "x").unwrap_err();
        assert!(matches!(err, SinkError::CellOutOfBounds { col: 2, .. }));
    }

    #[test]
    fn merges_are_validated_and_recorded() {
        let mut doc = InMemoryDocument::new();
        let t = doc.add_table(3, 3).unwrap();
        doc.merge_cells(t, (0, 0), (2, 0)).unwrap();

        assert!(doc.tables().next().unwrap().has_merge((0, 0), (2, 0)));
        assert!(matches!(
            doc.merge_cells(t, (2, 0), (0, 0)),
            Err(SinkError::InvalidMerge { .. })
        ));
        assert!(matches!(
            doc.merge_cells(t, (0, 0), (5, 0)),
            Err(SinkError::CellOutOfBounds { .. })
        ));
    }

    #[test]
    fn ids_are_checked_against_block_kinds() {
        let mut doc = InMemoryDocument::new();
        let p = doc.add_paragraph().unwrap();
        let table_id = TableId::new(p.index());
        assert!(matches!(
            doc.append_row(table_id),
            Err(SinkError::UnknownTable(_))
        ));
    }
}
