//! Decode direction: reconstruct table cells from positioned cells.

use super::cell_exists;
use crate::tokenize::PositionedCell;

/// Turn positioned cells (one inner vec per source line) into the rows of a
/// table by inserting empty cells wherever a block member sits to the right
/// of the block's leftmost cell.
///
/// The column loop is deliberately not a fixed range: inserting cells can
/// raise a row's cell count past the current maximum, so the bound is
/// re-read every iteration.
pub(crate) fn assemble(
    mut lines: Vec<Vec<PositionedCell>>,
    tab_width: usize,
) -> Vec<Vec<String>> {
    let mut max_cells = lines.iter().map(Vec::len).max().unwrap_or(0);
    let nof_lines = lines.len();

    let mut cell_num = 0;
    while cell_num < max_cells {
        let mut starting_new_block = true;
        let mut start_range = 0;
        let mut end_range = 0;

        // One extra iteration past the last line closes a trailing block.
        for line_num in 0..=nof_lines {
            if cell_exists(&lines, line_num, cell_num) {
                if starting_new_block {
                    start_range = line_num;
                    starting_new_block = false;
                }
                end_range = line_num;
            } else if !starting_new_block {
                close_block(&mut lines, cell_num, start_range, end_range, tab_width, &mut max_cells);
                starting_new_block = true;
            }
        }

        cell_num += 1;
    }

    lines
        .into_iter()
        .map(|line| line.into_iter().map(|cell| cell.text).collect())
        .collect()
}

fn close_block(
    lines: &mut [Vec<PositionedCell>],
    cell_num: usize,
    start_range: usize,
    end_range: usize,
    tab_width: usize,
    max_cells: &mut usize,
) {
    let positions: Vec<usize> = (start_range..=end_range)
        .map(|line_num| lines[line_num][cell_num].start)
        .collect();
    let min_indent = positions.iter().copied().min().unwrap_or(0);

    for (offset, &position) in positions.iter().enumerate() {
        let line_num = start_range + offset;
        if position > min_indent {
            // This row sits to the right of the block: shift its cells over.
            lines[line_num].insert(cell_num, PositionedCell::empty());
            *max_cells = (*max_cells).max(lines[line_num].len());
        } else if cell_num == 0 {
            // Leftmost column: reconstruct one empty cell per whole level of
            // leading indentation. Indentation that is not a whole multiple
            // of the tab width floors to the nearest level.
            let missing = position / tab_width;
            for _ in 0..missing {
                lines[line_num].insert(cell_num, PositionedCell::empty());
                *max_cells = (*max_cells).max(lines[line_num].len());
            }
        }
    }
}
