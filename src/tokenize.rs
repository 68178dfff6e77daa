//! Line tokenizer: splits raw text into positioned cells.
//!
//! Positions and widths are counted in code points, not display columns.

/// Character used to stand in for expanded tabs so that tab-derived padding
/// can never be mistaken for a cell's own internal spaces. Input text
/// containing a literal U+001A is treated as cell boundaries.
pub(crate) const FILL: char = '\u{1a}';

/// A cell's text together with its starting column in the expanded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PositionedCell {
    pub text: String,
    pub start: usize,
}

impl PositionedCell {
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            start: 0,
        }
    }
}

/// Substitute every tab in `line` with enough `repl` characters to reach the
/// next multiple of `tab_width`.
pub(crate) fn expand_tabs(line: &str, tab_width: usize, repl: char) -> String {
    let mut out = String::with_capacity(line.len());
    let mut pos = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let expand = tab_width - (pos % tab_width);
            for _ in 0..expand {
                out.push(repl);
            }
            pos += expand;
        } else {
            out.push(ch);
            pos += 1;
        }
    }
    out
}

/// Split `text` into lines and each line into positioned cells, with tabs
/// expanded to `tab_width`.
///
/// A cell is a run of non-whitespace, non-fill characters; a single
/// whitespace character stays inside the cell only when the character after
/// it is again non-whitespace and non-fill. Two or more consecutive spaces
/// therefore always terminate a cell, while text like `Generation X` stays
/// in one piece. An empty line produces no cells.
pub(crate) fn positioned_cells(text: &str, tab_width: usize) -> Vec<Vec<PositionedCell>> {
    text.split('\n')
        .map(|line| scan_line(&expand_tabs(line, tab_width, FILL)))
        .collect()
}

fn is_boundary(ch: char) -> bool {
    ch == FILL || ch.is_whitespace()
}

fn scan_line(line: &str) -> Vec<PositionedCell> {
    let chars: Vec<char> = line.chars().collect();
    let mut cells = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if is_boundary(chars[i]) {
            i += 1;
            continue;
        }
        let start = i;
        let mut end = i + 1;
        while end < chars.len() {
            if !is_boundary(chars[end]) {
                end += 1;
            } else if chars[end].is_whitespace()
                && end + 1 < chars.len()
                && !is_boundary(chars[end + 1])
            {
                // lone whitespace with a visible character after it
                end += 1;
            } else {
                break;
            }
        }
        cells.push(PositionedCell {
            text: chars[start..end].iter().collect(),
            start,
        });
        i = end;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(line: &str, tab_width: usize) -> Vec<(String, usize)> {
        positioned_cells(line, tab_width)
            .remove(0)
            .into_iter()
            .map(|c| (c.text, c.start))
            .collect()
    }

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs("\tabc", 8, ' '), "        abc");
        assert_eq!(expand_tabs("ab\tc", 8, ' '), "ab      c");
        assert_eq!(expand_tabs("ab\t\tc", 4, '#'), "ab######c");
        assert_eq!(expand_tabs("abc", 8, ' '), "abc");
    }

    #[test]
    fn test_scan_positions() {
        assert_eq!(cells("        abc", 8), vec![("abc".to_string(), 8)]);
        assert_eq!(
            cells("x       jkl", 8),
            vec![("x".to_string(), 0), ("jkl".to_string(), 8)]
        );
        assert_eq!(
            cells("xxxxxxxxx  pqr", 8),
            vec![("xxxxxxxxx".to_string(), 0), ("pqr".to_string(), 11)]
        );
    }

    #[test]
    fn test_single_internal_space_stays_in_cell() {
        assert_eq!(
            cells("Generation X      Douglas Coupland", 8),
            vec![
                ("Generation X".to_string(), 0),
                ("Douglas Coupland".to_string(), 18)
            ]
        );
    }

    #[test]
    fn test_two_spaces_end_a_cell() {
        assert_eq!(
            cells("ab  cd", 8),
            vec![("ab".to_string(), 0), ("cd".to_string(), 4)]
        );
    }

    #[test]
    fn test_tab_padding_is_not_cell_text() {
        // A tab right after a cell must separate even though it expands to a
        // single position here.
        assert_eq!(
            cells("abcdefg\thi", 8),
            vec![("abcdefg".to_string(), 0), ("hi".to_string(), 8)]
        );
    }

    #[test]
    fn test_empty_line_has_no_cells() {
        assert!(positioned_cells("", 8).remove(0).is_empty());
        assert!(positioned_cells("    ", 8).remove(0).is_empty());
    }

    #[test]
    fn test_multiple_lines() {
        let lines = positioned_cells("a\n\nb", 8);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0][0].text, "a");
        assert!(lines[1].is_empty());
        assert_eq!(lines[2][0].text, "b");
    }
}
