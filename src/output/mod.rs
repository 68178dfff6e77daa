//! Output layer: the pivot table to raw text in a boundary format.

mod elastic;
mod fixed;
mod spaces;

use crate::config::{Config, Format};
use crate::error::Result;
use crate::model::Table;

pub use self::elastic::to_elastic_tabstops;
pub use self::fixed::to_fixed_tabstops;
pub use self::spaces::to_spaces;

/// Render `table` as text in the given format.
pub fn render(table: &Table, format: Format, config: &Config) -> Result<String> {
    match format {
        Format::Spaces => to_spaces(table, config),
        Format::FixedTabstops => to_fixed_tabstops(table, config),
        Format::ElasticTabstops => to_elastic_tabstops(table),
        Format::Json => table.to_json(),
    }
}
