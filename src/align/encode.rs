//! Encode direction: render a table as space-aligned text.

use super::cell_exists;
use crate::model::Table;

/// A cell's text together with the width of the cell it is rendered in.
#[derive(Debug, Clone)]
pub(crate) struct SizedCell {
    text: String,
    size: usize,
}

impl SizedCell {
    /// Width starts at the cell's minimum: the text plus two columns of
    /// padding. One column is not enough, as a single trailing space could
    /// be confused for a space inside the cell's own text.
    fn new(text: &str, tab_width: usize, multiples_of_tab_width: bool) -> Self {
        let len = text.chars().count();
        let size = if multiples_of_tab_width {
            (len + 2).div_ceil(tab_width) * tab_width
        } else {
            (len + 2).max(tab_width)
        };
        Self {
            text: text.to_string(),
            size,
        }
    }

    /// The text padded with spaces out to the cell width.
    fn padded(&self) -> String {
        let len = self.text.chars().count();
        let mut out = self.text.clone();
        for _ in len..self.size {
            out.push(' ');
        }
        out
    }
}

/// Render `table` as space-aligned text: harmonize cell widths per column
/// block, then concatenate padded cells.
///
/// Only cells with a cell after them on the same row take part in width
/// harmonization; a row's last cell is never padded, since nothing follows
/// it on the line.
pub(crate) fn render(table: &Table, tab_width: usize, multiples_of_tab_width: bool) -> String {
    let mut lines: Vec<Vec<SizedCell>> = table
        .rows()
        .iter()
        .map(|row| {
            row.cells()
                .iter()
                .map(|cell| SizedCell::new(cell, tab_width, multiples_of_tab_width))
                .collect()
        })
        .collect();
    let max_cells = lines.iter().map(Vec::len).max().unwrap_or(0);
    let nof_lines = lines.len();

    for cell_num in 0..max_cells {
        let mut starting_new_block = true;
        let mut start_range = 0;
        let mut end_range = 0;
        let mut max_width = 0;

        for line_num in 0..nof_lines {
            // A cell belongs to the block only when another cell follows it
            // on the same row.
            if cell_exists(&lines, line_num, cell_num + 1) {
                if starting_new_block {
                    start_range = line_num;
                    starting_new_block = false;
                }
                max_width = max_width.max(lines[line_num][cell_num].size);
                end_range = line_num;
            } else if !starting_new_block {
                for block_line_num in start_range..=end_range {
                    lines[block_line_num][cell_num].size = max_width;
                }
                starting_new_block = true;
                max_width = 0;
            }
        }

        // The scan may reach the last line with a block still open.
        if !starting_new_block {
            for block_line_num in start_range..=end_range {
                lines[block_line_num][cell_num].size = max_width;
            }
        }
    }

    let rendered: Vec<String> = lines
        .iter()
        .map(|line| {
            let mut out = String::new();
            if let Some((last, init)) = line.split_last() {
                for cell in init {
                    out.push_str(&cell.padded());
                }
                out.push_str(&last.text);
            }
            out
        })
        .collect();
    rendered.join("\n")
}
