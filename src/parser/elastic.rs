//! Elastic-tabstop text parser

use crate::error::Result;
use crate::model::Table;

/// Convert elastic-tabstop text to a table.
///
/// Tabs are pure cell delimiters here, so this is a plain split: no tab
/// width and no column positions are involved. A `\r` before a line break
/// stays at the end of the last cell of its row.
pub fn from_elastic_tabstops(text: &str) -> Result<Table> {
    Table::new(
        text.split('\n')
            .map(|line| line.split('\t').map(str::to_string).collect())
            .collect(),
    )
}
