//! Parser layer: raw text in a boundary format to the pivot table.

mod elastic;
mod fixed;
mod spaces;

use crate::config::{Config, Format};
use crate::error::Result;
use crate::model::Table;

pub use self::elastic::from_elastic_tabstops;
pub use self::fixed::from_fixed_tabstops;
pub use self::spaces::from_spaces;

/// Parse `text` in the given format into a table.
pub fn parse(text: &str, format: Format, config: &Config) -> Result<Table> {
    match format {
        Format::Spaces => from_spaces(text, config),
        Format::FixedTabstops => from_fixed_tabstops(text, config),
        Format::ElasticTabstops => from_elastic_tabstops(text),
        Format::Json => Table::from_json(text),
    }
}
