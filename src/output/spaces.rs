//! Space-aligned text output

use crate::align;
use crate::config::Config;
use crate::error::Result;
use crate::model::Table;

/// Convert a table to space-aligned text.
///
/// Non-terminal cells in the same column block share one width: the largest
/// minimum width in the block. With `multiples_of_tab_width` set, widths are
/// rounded up to the next multiple of the tab width; otherwise a cell is at
/// least two columns wider than its text (and never narrower than one tab).
pub fn to_spaces(table: &Table, config: &Config) -> Result<String> {
    config.validate()?;
    Ok(align::render(
        table,
        config.tab_width,
        config.multiples_of_tab_width,
    ))
}
