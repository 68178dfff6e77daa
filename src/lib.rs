//! tabstops - Convert column-aligned text between layouts
//!
//! Converts between three textual representations of column-aligned text:
//! space-padded, fixed-tabstop (a tab advances to the next multiple of a
//! fixed width), and elastic-tabstop (a tab's width is decided per vertical
//! run of aligned cells). Every conversion factors through a pivot
//! [`Table`], a ragged grid of string cells.
//!
//! ```
//! use tabstops::{parse, render, Config, Format};
//!
//! let config = Config::default();
//! let table = parse("key_t\tkey;\nushort\tuid;", Format::ElasticTabstops, &config)?;
//! let spaced = render(&table, Format::Spaces, &config)?;
//! assert_eq!(spaced, "key_t   key;\nushort  uid;");
//! # Ok::<(), tabstops::Error>(())
//! ```

mod align;
mod tokenize;

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

pub use config::{Config, Format};
pub use error::{Error, Result};
pub use model::{Row, Table};
pub use output::render;
pub use parser::parse;
