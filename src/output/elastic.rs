//! Elastic-tabstop text output

use crate::error::Result;
use crate::model::Table;

/// Convert a table to elastic-tabstop text.
///
/// Cells are joined with tabs and rows with newlines; no widths are
/// computed, since with elastic tabstops the rendered column widths are the
/// consumer's concern.
pub fn to_elastic_tabstops(table: &Table) -> Result<String> {
    let lines: Vec<String> = table
        .rows()
        .iter()
        .map(|row| row.cells().join("\t"))
        .collect();
    Ok(lines.join("\n"))
}
