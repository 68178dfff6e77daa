//! The pivot table every format conversion passes through.

use serde::Serialize;

use crate::error::{Error, Result};

/// A row of the pivot table: an ordered sequence of cell strings.
///
/// Every row holds at least one cell; a row with no content is represented
/// as a single empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    fn new(cells: Vec<String>) -> Self {
        if cells.is_empty() {
            Self {
                cells: vec![String::new()],
            }
        } else {
            Self { cells }
        }
    }

    /// All cells in order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Cell by index.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Number of cells (always at least 1).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// A ragged grid of text cells, one row per line of the source document.
///
/// This is the intermediate representation all conversions factor through:
/// text is parsed into a table, and a table is rendered back into text. A
/// table always has at least one row, and no cell ever contains a tab or a
/// line terminator (those are the separators of the textual formats).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from nested cell strings, validating shape.
    ///
    /// Fails with [`Error::EmptyTable`] when `rows` is empty and with
    /// [`Error::EmbeddedSeparator`] when any cell contains `\t` or `\n`.
    /// Rows without cells are normalized to a single empty cell.
    pub fn new(rows: Vec<Vec<String>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyTable);
        }
        for (row, cells) in rows.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                if cell.contains('\t') || cell.contains('\n') {
                    return Err(Error::EmbeddedSeparator { row, column });
                }
            }
        }
        Ok(Self {
            rows: rows.into_iter().map(Row::new).collect(),
        })
    }

    /// All rows in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row by index.
    pub fn row(&self, index: usize) -> Result<&Row> {
        self.rows.get(index).ok_or(Error::RowIndex {
            index,
            rows: self.rows.len(),
        })
    }

    /// Cell by row and column index.
    pub fn cell(&self, row: usize, index: usize) -> Result<&str> {
        let r = self.row(row)?;
        r.cell(index).ok_or(Error::CellIndex {
            row,
            index,
            cells: r.cell_count(),
        })
    }

    /// Number of rows (always at least 1).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Largest cell count over all rows.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Row::cell_count).max().unwrap_or(0)
    }

    /// Serialize as a JSON array of arrays of strings.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON array of arrays of strings, with the same
    /// validation as [`Table::new`].
    pub fn from_json(text: &str) -> Result<Self> {
        let rows: Vec<Vec<String>> = serde_json::from_str(text)?;
        Self::new(rows)
    }
}
