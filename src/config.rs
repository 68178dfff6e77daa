//! Configuration handling for tabstops

use crate::error::{Error, Result};

/// Text format at the conversion boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Columns aligned with literal space runs.
    Spaces,
    /// Tabs that advance to the next multiple of the configured width.
    FixedTabstops,
    /// Tabs as pure cell delimiters; widths are the consumer's concern.
    #[default]
    ElasticTabstops,
    /// The pivot table itself, as a JSON array of arrays of strings.
    Json,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spaces" => Ok(Format::Spaces),
            "fixed" => Ok(Format::FixedTabstops),
            "elastic" => Ok(Format::ElasticTabstops),
            "json" => Ok(Format::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Configuration for conversion operations
#[derive(Debug, Clone)]
pub struct Config {
    /// Tab width used when expanding, measuring, and emitting tabs.
    /// Must be at least 2.
    pub tab_width: usize,
    /// When encoding to spaces, round every cell width up to the next
    /// multiple of the tab width instead of padding to at least `len + 2`.
    pub multiples_of_tab_width: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: 8,
            multiples_of_tab_width: false,
        }
    }
}

impl Config {
    /// Create a configuration with the given tab width.
    pub fn new(tab_width: usize) -> Self {
        Self {
            tab_width,
            ..Default::default()
        }
    }

    /// Set the tab width.
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Enable or disable multiples-of-tab-width cell sizing.
    pub fn with_multiples_of_tab_width(mut self, multiples: bool) -> Self {
        self.multiples_of_tab_width = multiples;
        self
    }

    /// Check that the tab width is usable.
    ///
    /// A width of 1 would make every cell boundary ambiguous, so 2 is the
    /// smallest accepted value.
    pub fn validate(&self) -> Result<()> {
        if self.tab_width < 2 {
            return Err(Error::TabWidth(self.tab_width));
        }
        Ok(())
    }
}
