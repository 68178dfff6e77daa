//! Space-aligned text parser

use crate::align::assemble;
use crate::config::Config;
use crate::error::Result;
use crate::model::Table;
use crate::tokenize::positioned_cells;

/// Convert space-aligned text to a table.
///
/// Tabs in the input are expanded at the configured width before scanning.
/// A `\r` before a line break is treated like any other trailing whitespace;
/// it never acts as a line terminator of its own.
pub fn from_spaces(text: &str, config: &Config) -> Result<Table> {
    config.validate()?;
    let lines = positioned_cells(text, config.tab_width);
    Table::new(assemble(lines, config.tab_width))
}
