//! Error types for table construction and format conversion.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all conversion operations.
///
/// Every failure is detected eagerly at the start of a codec call; no
/// partially converted text or table is ever produced.
#[derive(Debug, Error)]
pub enum Error {
    /// Tab width below the minimum of 2.
    #[error("tab width must be 2 or greater (got {0})")]
    TabWidth(usize),

    /// A table must contain at least one row.
    #[error("table must contain at least one row")]
    EmptyTable,

    /// A cell may not contain a tab or line terminator, since those are the
    /// separators of the textual formats.
    #[error("cell at row {row}, column {column} contains a tab or line terminator")]
    EmbeddedSeparator { row: usize, column: usize },

    /// Row index out of range.
    #[error("row index {index} out of range (table has {rows} rows)")]
    RowIndex { index: usize, rows: usize },

    /// Cell index out of range within a row.
    #[error("cell index {index} out of range (row {row} has {cells} cells)")]
    CellIndex {
        row: usize,
        index: usize,
        cells: usize,
    },

    /// Malformed JSON table interchange data.
    #[error("invalid table JSON: {0}")]
    Json(#[from] serde_json::Error),
}
