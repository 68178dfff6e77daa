//! Fixed-tabstop text parser

use crate::config::Config;
use crate::error::Result;
use crate::model::Table;
use crate::tokenize::expand_tabs;

use super::spaces::from_spaces;

/// Convert fixed-tabstop text to a table.
///
/// Each tab advances to the next multiple of the configured width, so the
/// text is expanded to spaces first and then decoded on the spaces path.
pub fn from_fixed_tabstops(text: &str, config: &Config) -> Result<Table> {
    config.validate()?;
    let expanded: Vec<String> = text
        .split('\n')
        .map(|line| expand_tabs(line, config.tab_width, ' '))
        .collect();
    from_spaces(&expanded.join("\n"), config)
}
