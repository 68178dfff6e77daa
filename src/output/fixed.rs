//! Fixed-tabstop text output

use crate::config::Config;
use crate::error::Result;
use crate::model::Table;
use crate::tokenize::positioned_cells;

use super::spaces::to_spaces;

/// Convert a table to fixed-tabstop text.
///
/// First the table is rendered with spaces at multiples of the tab width,
/// then the gap before each cell is replaced by enough tabs to cross it. A
/// single tab only advances to the next multiple of the width, so a gap may
/// need several tabs, plus literal spaces when a cell starts off a tabstop.
pub fn to_fixed_tabstops(table: &Table, config: &Config) -> Result<String> {
    config.validate()?;
    let spaced = to_spaces(table, &config.clone().with_multiples_of_tab_width(true))?;
    let w = config.tab_width;

    let lines = positioned_cells(&spaced, w);
    let tabbed: Vec<String> = lines
        .iter()
        .map(|line| {
            let mut out = String::new();
            let mut pos = 0;
            for cell in line {
                let gap = cell.start - pos;
                let nof_tabs = gap.div_ceil(w);
                let nof_spaces = cell.start % w;
                for _ in 0..nof_tabs {
                    out.push('\t');
                }
                for _ in 0..nof_spaces {
                    out.push(' ');
                }
                out.push_str(&cell.text);
                pos = cell.start + cell.text.chars().count();
            }
            out
        })
        .collect();
    Ok(tabbed.join("\n"))
}
