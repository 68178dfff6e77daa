//! Block-alignment engine.
//!
//! Both directions of conversion walk the same structure: a ragged 2-D array
//! of cells indexed by (row, column). For each column, the maximal
//! contiguous vertical run of rows that occupy the column forms a *block*.
//! Blocks are aligned independently; a single row without a cell at the
//! column splits the run in two. Decoding derives cell insertions from
//! blocks, encoding derives uniform cell widths.

mod decode;
mod encode;

pub(crate) use decode::assemble;
pub(crate) use encode::render;

/// True when `row` is a valid row index and `col` a valid cell index within
/// that row.
pub(crate) fn cell_exists<T>(rows: &[Vec<T>], row: usize, col: usize) -> bool {
    row < rows.len() && col < rows[row].len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_exists() {
        let rows: Vec<Vec<u8>> = vec![vec![], vec![1], vec![2, 3], vec![4, 5, 6]];
        assert!(!cell_exists(&rows, 0, 0));
        assert!(!cell_exists(&rows, 1, 1));
        assert!(!cell_exists(&rows, 2, 2));
        assert!(!cell_exists(&rows, 3, 3));
        assert!(!cell_exists(&rows, 4, 0));
        assert!(cell_exists(&rows, 1, 0));
        assert!(cell_exists(&rows, 2, 1));
        assert!(cell_exists(&rows, 3, 2));
    }
}
