//! Table and Row data structures

mod table;

pub use table::{Row, Table};
